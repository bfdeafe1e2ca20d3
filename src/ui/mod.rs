//! UI rendering for the portfolio.
//!
//! The shell is a fixed header (brand, navigation tabs, theme
//! indicator), the active view, and a footer (social links, copyright,
//! keybind hints). Every widget styles itself from the palette of the
//! active theme mode, so a toggle restyles the whole frame at once.

mod about;
mod contact;
mod home;
pub mod helpers;
pub mod layout;
mod projects;
pub mod theme;

pub use layout::LayoutContext;
pub use theme::{Palette, ThemeMode};

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::{App, Screen};

/// Render one full frame from the current app state.
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = Palette::of(app.theme);
    let area = frame.area();

    // Whole-frame background in the theme color
    frame.render_widget(Block::default().style(Style::default().bg(palette.bg)), area);

    let rows = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .split(area);

    layout::render_header(frame, app, rows[0]);

    match app.screen {
        Screen::Home => home::render(frame, app, rows[1]),
        Screen::About => about::render(frame, app, rows[1]),
        Screen::Projects => projects::render(frame, app, rows[1]),
        Screen::Contact => contact::render(frame, app, rows[1]),
    }

    layout::render_footer(frame, app, rows[2]);

    // The failure modal overlays everything until dismissed
    contact::render_failure_modal(frame, app, area);
}
