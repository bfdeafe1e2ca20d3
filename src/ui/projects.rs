//! Projects view: the reorderable card list.
//!
//! Cards fade in staggered on entry. A card can be grabbed with the
//! keyboard (Space) or picked up with the mouse; while a gesture is in
//! flight the source card is marked and the current drop target gets
//! the accent border. Card hit areas are recorded on the app each
//! frame for mouse handling.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, CARD_STAGGER_TICKS};
use crate::models::Project;
use crate::ui::helpers::{gradient_line, truncate_string};
use crate::ui::theme::Palette;

const CARD_HEIGHT: u16 = 5;
const DETAIL_HEIGHT: u16 = 4;

fn render_card(
    frame: &mut Frame,
    palette: &Palette,
    project: &Project,
    area: Rect,
    selected: bool,
    drag_source: bool,
    drop_target: bool,
) {
    let border = if drop_target {
        palette.accent_alt
    } else if selected {
        palette.border_focus
    } else {
        palette.border
    };
    let mut title_spans = vec![
        Span::styled(
            format!(" {} ", project.title),
            Style::default()
                .fg(project.accent.color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("[{}] ", project.category),
            Style::default().fg(palette.text_dim),
        ),
    ];
    if drag_source {
        title_spans.push(Span::styled(
            "↕ moving ",
            Style::default()
                .fg(palette.accent_alt)
                .add_modifier(Modifier::BOLD),
        ));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(palette.surface))
        .title(Line::from(title_spans));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let width = inner.width as usize;
    let tags = project.tags.join(" · ");
    let lines = vec![
        Line::from(Span::styled(
            truncate_string(project.short_desc, width),
            Style::default().fg(palette.text),
        )),
        Line::from(Span::styled(
            truncate_string(&tags, width),
            Style::default().fg(palette.accent),
        )),
        Line::from(vec![
            Span::styled(format!("🗓 {}", project.date), Style::default().fg(palette.text_dim)),
            Span::styled("   [g] repo  [o] demo", Style::default().fg(palette.text_dim)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = Palette::of(app.theme);

    let rows = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(CARD_HEIGHT),
        Constraint::Length(DETAIL_HEIGHT),
    ])
    .split(area);

    // Header: badge + gradient title
    let header = vec![
        Line::from(Span::styled(
            "✦ Interactive Portfolio ↗",
            Style::default().fg(palette.accent_alt),
        )),
        gradient_line("My Projects", Color::Rgb(37, 99, 235), Color::Rgb(219, 39, 119)),
        Line::from(Span::styled(
            "Drag cards to reorder — or grab one with Space.",
            Style::default().fg(palette.text_dim),
        )),
    ];
    frame.render_widget(Paragraph::new(header).centered(), rows[0]);

    // Card list, scrolled so the selected card stays visible
    let list_area = rows[1];
    let visible = (list_area.height / CARD_HEIGHT).max(1) as usize;
    let count = app.board.len();
    let first = if app.board.selected >= visible {
        app.board.selected + 1 - visible
    } else {
        0
    };

    let elapsed = app.entry_elapsed();
    app.card_areas.clear();
    app.card_areas.resize(count, Rect::default());

    for (offset, index) in (first..count.min(first + visible)).enumerate() {
        let card_area = Rect {
            x: list_area.x,
            y: list_area.y + offset as u16 * CARD_HEIGHT,
            width: list_area.width,
            height: CARD_HEIGHT,
        };
        app.card_areas[index] = card_area;

        // Staggered entry: later cards appear a beat after earlier ones
        if elapsed < index as u64 * CARD_STAGGER_TICKS {
            continue;
        }
        let project = &app.board.projects()[index];
        render_card(
            frame,
            palette,
            project,
            card_area,
            index == app.board.selected,
            app.board.drag_source() == Some(index),
            app.board.is_dragging() && app.board.drag_target() == Some(index),
        );
    }

    // Long description of the selected card
    if let Some(project) = app.board.selected_project() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                project.description,
                Style::default().fg(palette.text_dim),
            )))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(palette.border)),
            ),
            rows[2],
        );
    }
}
