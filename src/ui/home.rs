//! Home view: profile block, name and title, pitch, call-to-action
//! hints, over the drifting tech-glyph background.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::models::{OWNER_NAME, OWNER_TITLE};
use crate::ui::helpers::gradient_line;
use crate::ui::theme::Palette;

const AVATAR: [&str; 5] = [
    "  .-\"\"\"-.  ",
    " /       \\ ",
    "|   M F   |",
    " \\       / ",
    "  '-...-'  ",
];

/// Elements fade in one after another, like the staggered entrance on
/// the site. Thresholds are in ticks since the screen was entered.
const SHOW_NAME: u64 = 8;
const SHOW_TITLE: u64 = 16;
const SHOW_PITCH: u64 = 24;
const SHOW_ACTIONS: u64 = 32;

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = Palette::of(app.theme);
    app.home_field.render(area, frame.buffer_mut(), palette);

    let elapsed = app.entry_elapsed();

    let content_height = 14u16;
    let top_pad = area.height.saturating_sub(content_height) / 2;
    let rows = Layout::vertical([
        Constraint::Length(top_pad),
        Constraint::Length(5), // avatar
        Constraint::Length(1),
        Constraint::Length(1), // name
        Constraint::Length(1), // title
        Constraint::Length(1),
        Constraint::Length(3), // pitch
        Constraint::Length(1),
        Constraint::Length(1), // actions
        Constraint::Min(0),
    ])
    .split(area);

    let avatar_lines: Vec<Line> = AVATAR
        .iter()
        .map(|row| {
            Line::from(Span::styled(
                *row,
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(avatar_lines).centered(), rows[1]);

    if elapsed >= SHOW_NAME {
        let name = gradient_line(
            OWNER_NAME,
            Color::Rgb(96, 165, 250),
            Color::Rgb(244, 114, 182),
        );
        frame.render_widget(Paragraph::new(name).centered(), rows[3]);
    }

    if elapsed >= SHOW_TITLE {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                OWNER_TITLE,
                Style::default()
                    .fg(palette.accent_alt)
                    .add_modifier(Modifier::BOLD),
            )))
            .centered(),
            rows[4],
        );
    }

    if elapsed >= SHOW_PITCH {
        let pitch = Line::from(vec![
            Span::styled(
                "Crafting exceptional digital experiences with modern web technologies. ",
                Style::default().fg(palette.text),
            ),
            Span::styled("React", Style::default().fg(Color::Cyan)),
            Span::styled(", ", Style::default().fg(palette.text)),
            Span::styled("Node.js", Style::default().fg(Color::Green)),
            Span::styled(" and ", Style::default().fg(palette.text)),
            Span::styled("cloud architectures", Style::default().fg(palette.accent_alt)),
            Span::styled(".", Style::default().fg(palette.text)),
        ]);
        frame.render_widget(
            Paragraph::new(pitch)
                .centered()
                .wrap(ratatui::widgets::Wrap { trim: true }),
            rows[6],
        );
    }

    if elapsed >= SHOW_ACTIONS {
        let actions = Line::from(vec![
            Span::styled(
                " ▶ [p] View Projects ",
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(
                " ✉ [c] Contact Me ",
                Style::default()
                    .fg(palette.accent_alt)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(actions).centered(), rows[8]);
    }
}
