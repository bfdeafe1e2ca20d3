//! Contact view: info cards on the left, the controlled form on the
//! right, a success banner, and the blocking failure modal.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus};
use crate::models::{OWNER_EMAIL, OWNER_LOCATION, OWNER_PHONE};
use crate::state::{FormField, SubmitState};
use crate::ui::helpers::centered_rect;
use crate::ui::layout::LayoutContext;
use crate::ui::theme::Palette;

fn info_card(palette: &Palette, glyph: char, heading: &'static str, value: &'static str) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(vec![
            Span::styled(format!("{} ", glyph), Style::default().fg(palette.accent)),
            Span::styled(
                heading,
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(value, Style::default().fg(palette.text))),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.surface)),
    )
}

fn render_info_column(frame: &mut Frame, palette: &Palette, area: Rect) {
    let rows = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Min(0),
    ])
    .split(area);
    frame.render_widget(info_card(palette, '✉', "Email Me", OWNER_EMAIL), rows[0]);
    frame.render_widget(info_card(palette, '⌖', "Location", OWNER_LOCATION), rows[1]);
    frame.render_widget(info_card(palette, '✆', "Call Me", OWNER_PHONE), rows[2]);
}

fn status_line(app: &App, palette: &Palette) -> Line<'static> {
    match &app.form.submit {
        SubmitState::Sending => Line::from(Span::styled(
            "Sending…",
            Style::default().fg(palette.text_dim),
        )),
        SubmitState::Success { .. } => Line::from(Span::styled(
            "✓ Message sent successfully!",
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD),
        )),
        _ => {
            let style = if app.form.is_complete() {
                Style::default()
                    .fg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text_dim)
            };
            Line::from(Span::styled("[Ctrl+S] Send Message", style))
        }
    }
}

fn render_form(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = Palette::of(app.theme);
    let rows = Layout::vertical([
        Constraint::Length(1), // heading
        Constraint::Length(3), // name
        Constraint::Length(3), // email
        Constraint::Min(5),    // message
        Constraint::Length(1), // status / submit
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Get In Touch",
            Style::default()
                .fg(palette.heading)
                .add_modifier(Modifier::BOLD),
        )))
        .centered(),
        rows[0],
    );

    let focused = |field: FormField| app.focus == Focus::Input && app.form.focus == field;
    let name_focus = focused(FormField::Name);
    let email_focus = focused(FormField::Email);
    let message_focus = focused(FormField::Message);

    app.form
        .name
        .render(rows[1], frame.buffer_mut(), palette, " Your Name ", name_focus);
    app.form
        .email
        .render(rows[2], frame.buffer_mut(), palette, " Your Email ", email_focus);
    app.form
        .message
        .render(frame, rows[3], palette, " Your Message ", message_focus);

    frame.render_widget(Paragraph::new(status_line(app, palette)).centered(), rows[4]);
}

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = Palette::of(app.theme);
    let ctx = LayoutContext::of(area);
    app.ambient_field.render(area, frame.buffer_mut(), palette);

    if ctx.should_stack() {
        render_form(frame, app, area);
    } else {
        let columns =
            Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
                .split(area);
        render_info_column(frame, palette, columns[0]);
        render_form(frame, app, columns[1]);
    }
}

/// Blocking error modal shown when the relay rejected the message.
/// The form keeps its contents so the visitor can retry.
pub fn render_failure_modal(frame: &mut Frame, app: &App, area: Rect) {
    let SubmitState::Failed { error } = &app.form.submit else {
        return;
    };
    let palette = Palette::of(app.theme);
    let modal = centered_rect(area.width.min(56), 7, area);
    frame.render_widget(Clear, modal);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Failed to send message. Please try again later.",
                Style::default().fg(palette.text),
            )),
            Line::raw(""),
            Line::from(Span::styled(error.clone(), Style::default().fg(palette.text_dim))),
            Line::raw(""),
            Line::from(Span::styled(
                "press esc to dismiss",
                Style::default().fg(palette.text_dim),
            )),
        ])
        .wrap(Wrap { trim: true })
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.error))
                .style(Style::default().bg(palette.surface))
                .title(Span::styled(
                    " ✗ Delivery failed ",
                    Style::default()
                        .fg(palette.error)
                        .add_modifier(Modifier::BOLD),
                )),
        ),
        modal,
    );
}
