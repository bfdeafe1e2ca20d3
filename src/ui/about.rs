//! About view: biography, tech stack, interests and development
//! philosophy as two columns of cards (stacked on narrow terminals).

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::models::{philosophy, Interest, Technology};
use crate::ui::layout::LayoutContext;
use crate::ui::theme::Palette;

fn bio_lines(palette: &Palette) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "● My Developer Journey",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "Transitioning from Laravel to tech, I've spent 2 years mastering \
             full-stack development, delivering 3+ projects and contributing to \
             3 open-source initiatives.",
            Style::default().fg(palette.text),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            "I specialize in bridging frontend aesthetics with backend robustness, \
             particularly passionate about performance optimization and clean \
             architecture.",
            Style::default().fg(palette.text),
        )),
    ]
}

fn interest_lines(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            "● My Passions",
            Style::default()
                .fg(palette.accent_alt)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];
    for interest in Interest::all() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {} ", interest.glyph),
                Style::default().fg(interest.color),
            ),
            Span::styled(interest.name, Style::default().fg(palette.text)),
        ]));
    }
    lines
}

fn tech_lines(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            "● Tech Arsenal",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];
    for tech in Technology::stack() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", tech.glyph), Style::default().fg(tech.color)),
            Span::styled(tech.name, Style::default().fg(palette.text)),
        ]));
    }
    lines
}

fn philosophy_lines(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            "● Development Philosophy",
            Style::default()
                .fg(palette.accent_alt)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
    ];
    for item in philosophy() {
        lines.push(Line::from(vec![
            Span::styled("  ▹ ", Style::default().fg(palette.accent_alt)),
            Span::styled(*item, Style::default().fg(palette.text)),
        ]));
    }
    lines
}

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = Palette::of(app.theme);
    let ctx = LayoutContext::of(area);
    app.ambient_field.render(area, frame.buffer_mut(), palette);

    let card = |title: &'static str| {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.surface))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(palette.heading)
                    .add_modifier(Modifier::BOLD),
            ))
    };

    let mut left = bio_lines(palette);
    left.extend(interest_lines(palette));
    let mut right = tech_lines(palette);
    right.extend(philosophy_lines(palette));

    if ctx.should_stack() {
        // Single scrollable column on narrow terminals
        let mut all = left;
        all.push(Line::raw(""));
        all.extend(right);
        frame.render_widget(
            Paragraph::new(all)
                .block(card(" About Me "))
                .wrap(Wrap { trim: false })
                .scroll((app.about_scroll, 0)),
            area,
        );
        return;
    }

    let columns =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);
    frame.render_widget(
        Paragraph::new(left)
            .block(card(" About Me "))
            .wrap(Wrap { trim: false })
            .scroll((app.about_scroll, 0)),
        columns[0],
    );
    frame.render_widget(
        Paragraph::new(right)
            .block(card(" Stack & Values "))
            .wrap(Wrap { trim: false })
            .scroll((app.about_scroll, 0)),
        columns[1],
    );
}
