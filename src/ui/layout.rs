//! Layout shell: header with navigation tabs, footer with social links
//! and keybind hints, plus responsive sizing helpers.

use chrono::Datelike;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus, Screen};
use crate::models::{SocialLink, OWNER_NAME};
use crate::state::SubmitState;
use crate::ui::theme::Palette;

// ============================================================================
// Responsive sizing
// ============================================================================

/// Terminal dimensions with layout decisions derived from them.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn of(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Narrow terminals drop secondary header content.
    pub fn is_narrow(&self) -> bool {
        self.width < 80
    }

    pub fn is_short(&self) -> bool {
        self.height < 24
    }

    /// Two-column views stack vertically below this width.
    pub fn should_stack(&self) -> bool {
        self.width < 100
    }
}

// ============================================================================
// Header
// ============================================================================

/// Fixed header: brand block, navigation tabs, theme indicator.
///
/// Tab hit areas are recorded on the app for mouse navigation.
pub fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    let palette = Palette::of(app.theme);
    let ctx = LayoutContext::of(area);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }
    let row = Rect { height: 1, ..inner };

    // Brand block on the left
    let brand = if ctx.is_narrow() {
        " ◈ MF ".to_string()
    } else {
        format!(" ◈ {} ", OWNER_NAME)
    };
    let brand_width = brand.chars().count() as u16;
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            brand.clone(),
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ))),
        Rect {
            width: brand_width.min(row.width),
            ..row
        },
    );

    // Theme indicator on the right
    let indicator = format!("◐ {} (t) ", app.theme.label());
    let indicator_width = indicator.chars().count() as u16;
    if row.width > brand_width + indicator_width {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                indicator,
                Style::default().fg(palette.text_dim),
            ))),
            Rect {
                x: row.x + row.width - indicator_width,
                width: indicator_width,
                ..row
            },
        );
    }

    // Navigation tabs between brand and indicator
    app.nav_tab_areas.clear();
    let mut x = row.x + brand_width + 2;
    let max_x = row.x + row.width.saturating_sub(indicator_width);
    for screen in Screen::ALL {
        let label = format!(" {} ", screen.title());
        let width = label.chars().count() as u16;
        if x + width > max_x {
            break;
        }
        let tab_area = Rect {
            x,
            width,
            ..row
        };
        let style = if screen == app.screen {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(palette.text_dim)
        };
        frame.render_widget(Paragraph::new(Line::from(Span::styled(label, style))), tab_area);
        app.nav_tab_areas.push((screen, tab_area));
        x += width + 1;
    }
}

// ============================================================================
// Footer
// ============================================================================

fn keybind_hints(app: &App) -> String {
    if matches!(app.form.submit, SubmitState::Failed { .. }) {
        return "esc dismiss".to_string();
    }
    match (app.screen, app.focus) {
        (Screen::Contact, Focus::Input) => {
            "tab next field · ctrl+s send · esc navigation".to_string()
        }
        (Screen::Contact, Focus::Nav) => {
            "enter edit form · tab/1-4 navigate · t theme · q quit".to_string()
        }
        (Screen::Projects, _) => {
            if app.board.is_dragging() {
                "↑/↓ choose position · space drop · esc cancel".to_string()
            } else {
                "↑/↓ select · space grab · g repo · o demo · t theme · q quit".to_string()
            }
        }
        (Screen::About, _) => "↑/↓ scroll · tab/1-4 navigate · t theme · q quit".to_string(),
        (Screen::Home, _) => "p projects · c contact · tab/1-4 navigate · t theme · q quit".to_string(),
    }
}

/// Footer: social links, copyright with the current year, and the
/// contextual keybind hint line.
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let palette = Palette::of(app.theme);
    let ctx = LayoutContext::of(area);

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let rows = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(inner);

    let socials = SocialLink::footer()
        .iter()
        .map(|link| link.name)
        .collect::<Vec<_>>()
        .join(" · ");
    let copyright = format!("© {} {}", chrono::Local::now().year(), OWNER_NAME);
    let first = if ctx.is_narrow() {
        Line::from(Span::styled(copyright, Style::default().fg(palette.text_dim)))
    } else {
        Line::from(vec![
            Span::styled(socials, Style::default().fg(palette.accent)),
            Span::styled("   ", Style::default()),
            Span::styled(copyright, Style::default().fg(palette.text_dim)),
        ])
    };
    frame.render_widget(Paragraph::new(first).centered(), rows[0]);

    if rows.len() > 1 && inner.height > 1 {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                keybind_hints(app),
                Style::default().fg(palette.text_dim),
            )))
            .centered(),
            rows[1],
        );
    }
}
