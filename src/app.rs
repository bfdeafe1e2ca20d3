//! Application state and event handling.
//!
//! One `App` owns every piece of state: the active screen, the theme
//! mode, the project board, the contact form, and the channel carrying
//! results of async work (the relay send) back into the event loop.
//! Data flow is one-directional: events mutate `App`, `ui::render`
//! draws from it.

use std::sync::Arc;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use tokio::sync::mpsc;

use crate::effects::{ParticleField, AMBIENT_GLYPHS, HOME_GLYPHS};
use crate::relay::{EmailJsClient, EmailTransport};
use crate::state::{ContactForm, FormField, ProjectBoard, SubmitState};
use crate::storage;
use crate::ui::theme::ThemeMode;

/// Tick interval of the event loop, in milliseconds.
pub const TICK_MS: u64 = 16;
/// How long the success banner stays up (3 seconds, as on the site).
pub const SUCCESS_BANNER_TICKS: u64 = 3000 / TICK_MS;
/// Per-card delay of the staggered fade-in on the projects view.
pub const CARD_STAGGER_TICKS: u64 = 100 / TICK_MS;

/// Messages received from async operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// The relay accepted the contact message
    EmailSent,
    /// The relay send failed
    EmailFailed { error: String },
}

/// Which view is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    About,
    Projects,
    Contact,
}

impl Screen {
    /// All screens in navigation order.
    pub const ALL: [Screen; 4] = [Screen::Home, Screen::About, Screen::Projects, Screen::Contact];

    pub fn title(self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::About => "About",
            Screen::Projects => "Projects",
            Screen::Contact => "Contact",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Screen::Home => Screen::About,
            Screen::About => Screen::Projects,
            Screen::Projects => Screen::Contact,
            Screen::Contact => Screen::Home,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Screen::Home => Screen::Contact,
            Screen::About => Screen::Home,
            Screen::Projects => Screen::About,
            Screen::Contact => Screen::Projects,
        }
    }
}

/// Whether keystrokes go to navigation or to the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Nav,
    Input,
}

/// Main application state.
pub struct App {
    /// Current screen being displayed
    pub screen: Screen,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Active theme mode (persisted on toggle)
    pub theme: ThemeMode,
    /// Navigation vs form input focus
    pub focus: Focus,
    /// Reorderable project list
    pub board: ProjectBoard,
    /// Contact form state
    pub form: ContactForm,
    /// Receiver for async messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (cloned into spawned tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Outbound email transport (real relay or simulated)
    pub transport: Arc<dyn EmailTransport>,
    /// Tick counter driving animations
    pub tick_count: u64,
    /// Redraw needed on the next loop iteration
    pub needs_redraw: bool,
    /// Tick at which the current screen was entered (fade-in origin)
    pub screen_entered_tick: u64,
    /// Vertical scroll offset of the about view
    pub about_scroll: u16,
    /// Drifting glyphs behind the home hero
    pub home_field: ParticleField,
    /// Softer glyph field behind about/contact
    pub ambient_field: ParticleField,
    /// Header tab hit areas, refreshed on every render
    pub nav_tab_areas: Vec<(Screen, Rect)>,
    /// Project card hit areas, refreshed on every render
    pub card_areas: Vec<Rect>,
}

impl App {
    /// App wired to the hosted email relay.
    pub fn new() -> Self {
        Self::with_transport(Arc::new(EmailJsClient::new()))
    }

    /// App with a custom transport (simulated mode, tests).
    pub fn with_transport(transport: Arc<dyn EmailTransport>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            screen: Screen::default(),
            should_quit: false,
            theme: ThemeMode::default(),
            focus: Focus::default(),
            board: ProjectBoard::new(),
            form: ContactForm::new(),
            message_rx: Some(message_rx),
            message_tx,
            transport,
            tick_count: 0,
            needs_redraw: true,
            screen_entered_tick: 0,
            about_scroll: 0,
            home_field: ParticleField::new(48, HOME_GLYPHS),
            ambient_field: ParticleField::new(32, AMBIENT_GLYPHS),
            nav_tab_areas: Vec::new(),
            card_areas: Vec::new(),
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance one tick: animations and timed dismissals.
    pub fn tick(&mut self) {
        self.tick_count += 1;
        self.home_field.step();
        self.ambient_field.step();

        if let SubmitState::Success { since_tick } = self.form.submit {
            if self.tick_count.saturating_sub(since_tick) >= SUCCESS_BANNER_TICKS {
                self.form.submit = SubmitState::Idle;
            }
        }

        // Backgrounds drift every tick, so every tick repaints.
        self.needs_redraw = true;
    }

    /// Ticks elapsed since the current screen was entered.
    pub fn entry_elapsed(&self) -> u64 {
        self.tick_count.saturating_sub(self.screen_entered_tick)
    }

    /// Switch to `screen`, resetting per-view transient state.
    pub fn navigate_to(&mut self, screen: Screen) {
        if self.screen == screen {
            return;
        }
        self.screen = screen;
        self.screen_entered_tick = self.tick_count;
        self.about_scroll = 0;
        self.board.cancel_drag();
        // The form auto-focuses like the web input does.
        self.focus = if screen == Screen::Contact {
            Focus::Input
        } else {
            Focus::Nav
        };
        self.mark_dirty();
    }

    pub fn next_screen(&mut self) {
        self.navigate_to(self.screen.next());
    }

    pub fn prev_screen(&mut self) {
        self.navigate_to(self.screen.prev());
    }

    /// Flip light/dark and persist the preference.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        if let Err(err) = storage::save_theme(self.theme) {
            tracing::warn!(%err, "failed to persist theme preference");
        }
        self.mark_dirty();
    }

    /// Kick off the relay send. Requires a tokio runtime; the result
    /// comes back as an [`AppMessage`]. Ignored unless the form is
    /// complete and no send is in flight.
    pub fn submit_contact(&mut self) {
        if !self.form.can_submit() {
            return;
        }
        self.form.submit = SubmitState::Sending;
        let message = self.form.values();
        let transport = Arc::clone(&self.transport);
        let tx = self.message_tx.clone();
        tracing::info!(from = %message.email, "submitting contact form");
        tokio::spawn(async move {
            let result = transport.send(&message).await;
            let msg = match result {
                Ok(()) => AppMessage::EmailSent,
                Err(err) => AppMessage::EmailFailed {
                    error: err.to_string(),
                },
            };
            let _ = tx.send(msg);
        });
        self.mark_dirty();
    }

    /// Apply an async result to the form state.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::EmailSent => {
                self.form.reset_fields();
                self.form.submit = SubmitState::Success {
                    since_tick: self.tick_count,
                };
            }
            AppMessage::EmailFailed { error } => {
                tracing::error!(%error, "contact message delivery failed");
                // Fields stay populated for retry.
                self.form.submit = SubmitState::Failed { error };
            }
        }
        self.mark_dirty();
    }

    /// Dismiss the failure modal (or an early success banner).
    pub fn dismiss_submit_notice(&mut self) {
        if matches!(
            self.form.submit,
            SubmitState::Failed { .. } | SubmitState::Success { .. }
        ) {
            self.form.submit = SubmitState::Idle;
            self.mark_dirty();
        }
    }

    fn open_link(url: &str) {
        if let Err(err) = open::that(url) {
            tracing::warn!(%err, url, "failed to open link in browser");
        }
    }

    pub fn open_selected_repo(&self) {
        if let Some(project) = self.board.selected_project() {
            Self::open_link(project.github);
        }
    }

    pub fn open_selected_demo(&self) {
        if let Some(project) = self.board.selected_project() {
            Self::open_link(project.live);
        }
    }

    // ========================================================================
    // Input handling
    // ========================================================================

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.mark_dirty();

        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        // The failure modal is blocking: only dismissal gets through
        if matches!(self.form.submit, SubmitState::Failed { .. }) {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.dismiss_submit_notice();
            }
            return;
        }

        // Ctrl+S submits the form from either focus
        if self.screen == Screen::Contact
            && key.code == KeyCode::Char('s')
            && key.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.submit_contact();
            return;
        }

        match self.focus {
            Focus::Input => self.handle_form_key(key),
            Focus::Nav => self.handle_nav_key(key),
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.focus = Focus::Nav,
            KeyCode::Tab => self.form.focus_next(),
            KeyCode::BackTab => self.form.focus_prev(),
            KeyCode::Enter => match self.form.focus {
                // Enter advances through the single-line fields and
                // breaks lines inside the message.
                FormField::Name | FormField::Email => self.form.focus_next(),
                FormField::Message => self.form.message.insert_newline(),
            },
            KeyCode::Backspace => match self.form.focus {
                FormField::Name => self.form.name.backspace(),
                FormField::Email => self.form.email.backspace(),
                FormField::Message => self.form.message.backspace(),
            },
            KeyCode::Delete => match self.form.focus {
                FormField::Name => self.form.name.delete_char(),
                FormField::Email => self.form.email.delete_char(),
                FormField::Message => self.form.message.delete_char(),
            },
            KeyCode::Left => match self.form.focus {
                FormField::Name => self.form.name.move_cursor_left(),
                FormField::Email => self.form.email.move_cursor_left(),
                FormField::Message => self.form.message.move_cursor_left(),
            },
            KeyCode::Right => match self.form.focus {
                FormField::Name => self.form.name.move_cursor_right(),
                FormField::Email => self.form.email.move_cursor_right(),
                FormField::Message => self.form.message.move_cursor_right(),
            },
            KeyCode::Up => {
                if self.form.focus == FormField::Message {
                    self.form.message.move_cursor_up();
                }
            }
            KeyCode::Down => {
                if self.form.focus == FormField::Message {
                    self.form.message.move_cursor_down();
                }
            }
            KeyCode::Home => match self.form.focus {
                FormField::Name => self.form.name.move_cursor_home(),
                FormField::Email => self.form.email.move_cursor_home(),
                FormField::Message => self.form.message.move_cursor_home(),
            },
            KeyCode::End => match self.form.focus {
                FormField::Name => self.form.name.move_cursor_end(),
                FormField::Email => self.form.email.move_cursor_end(),
                FormField::Message => self.form.message.move_cursor_end(),
            },
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                match self.form.focus {
                    FormField::Name => self.form.name.insert_char(c),
                    FormField::Email => self.form.email.insert_char(c),
                    FormField::Message => self.form.message.insert_char(c),
                }
            }
            _ => {}
        }
    }

    fn handle_nav_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Tab => self.next_screen(),
            KeyCode::BackTab => self.prev_screen(),
            KeyCode::Char('1') => self.navigate_to(Screen::Home),
            KeyCode::Char('2') => self.navigate_to(Screen::About),
            KeyCode::Char('3') => self.navigate_to(Screen::Projects),
            KeyCode::Char('4') => self.navigate_to(Screen::Contact),
            KeyCode::Esc => self.board.cancel_drag(),
            _ => self.handle_screen_key(key),
        }
    }

    fn handle_screen_key(&mut self, key: KeyEvent) {
        match self.screen {
            Screen::Home => match key.code {
                KeyCode::Char('p') => self.navigate_to(Screen::Projects),
                KeyCode::Char('c') => self.navigate_to(Screen::Contact),
                KeyCode::Right => self.next_screen(),
                KeyCode::Left => self.prev_screen(),
                _ => {}
            },
            Screen::About => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.about_scroll = self.about_scroll.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.about_scroll = self.about_scroll.saturating_add(1);
                }
                KeyCode::PageUp => self.about_scroll = self.about_scroll.saturating_sub(8),
                KeyCode::PageDown => self.about_scroll = self.about_scroll.saturating_add(8),
                KeyCode::Right => self.next_screen(),
                KeyCode::Left => self.prev_screen(),
                _ => {}
            },
            Screen::Projects => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.board.select_prev(),
                KeyCode::Down | KeyCode::Char('j') => self.board.select_next(),
                KeyCode::Char(' ') | KeyCode::Enter => {
                    if self.board.is_dragging() {
                        self.board.drop_card();
                    } else {
                        self.board.begin_drag(self.board.selected);
                    }
                }
                KeyCode::Char('g') => self.open_selected_repo(),
                KeyCode::Char('o') | KeyCode::Char('l') => self.open_selected_demo(),
                KeyCode::Right => self.next_screen(),
                KeyCode::Left => self.prev_screen(),
                _ => {}
            },
            Screen::Contact => match key.code {
                KeyCode::Enter | KeyCode::Char('i') => self.focus = Focus::Input,
                KeyCode::Right => self.next_screen(),
                KeyCode::Left => self.prev_screen(),
                _ => {}
            },
        }
    }

    /// Index of the project card under a terminal position.
    pub fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.card_areas.iter().position(|area| area.contains(pos))
    }

    fn tab_at(&self, column: u16, row: u16) -> Option<Screen> {
        let pos = Position::new(column, row);
        self.nav_tab_areas
            .iter()
            .find(|(_, area)| area.contains(pos))
            .map(|(screen, _)| *screen)
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(screen) = self.tab_at(mouse.column, mouse.row) {
                    self.navigate_to(screen);
                    return;
                }
                if self.screen == Screen::Projects {
                    if let Some(index) = self.card_at(mouse.column, mouse.row) {
                        self.board.begin_drag(index);
                        self.mark_dirty();
                    }
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.screen == Screen::Projects && self.board.is_dragging() {
                    if let Some(index) = self.card_at(mouse.column, mouse.row) {
                        self.board.drag_over(index);
                        self.mark_dirty();
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.board.is_dragging() {
                    self.board.drop_card();
                    self.mark_dirty();
                }
            }
            MouseEventKind::ScrollUp => match self.screen {
                Screen::About => {
                    self.about_scroll = self.about_scroll.saturating_sub(3);
                    self.mark_dirty();
                }
                Screen::Projects => {
                    self.board.select_prev();
                    self.mark_dirty();
                }
                _ => {}
            },
            MouseEventKind::ScrollDown => match self.screen {
                Screen::About => {
                    self.about_scroll = self.about_scroll.saturating_add(3);
                    self.mark_dirty();
                }
                Screen::Projects => {
                    self.board.select_next();
                    self.mark_dirty();
                }
                _ => {}
            },
            _ => {}
        }
    }

    /// Insert pasted text into the focused contact field.
    pub fn handle_paste(&mut self, text: &str) {
        if self.screen != Screen::Contact {
            return;
        }
        self.focus = Focus::Input;
        match self.form.focus {
            FormField::Name => {
                for c in text.chars().filter(|c| *c != '\n' && *c != '\r') {
                    self.form.name.insert_char(c);
                }
            }
            FormField::Email => {
                for c in text.chars().filter(|c| *c != '\n' && *c != '\r') {
                    self.form.email.insert_char(c);
                }
            }
            FormField::Message => self.form.message.insert_str(text),
        }
        self.mark_dirty();
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn tab_cycles_through_all_screens() {
        let mut app = App::new();
        let mut seen = vec![app.screen];
        for _ in 0..3 {
            app.handle_key(key(KeyCode::Tab));
            seen.push(app.screen);
        }
        assert_eq!(
            seen,
            vec![Screen::Home, Screen::About, Screen::Projects, Screen::Contact]
        );
        app.handle_key(key(KeyCode::Tab));
        // Contact auto-focuses the form, so Tab cycled a field instead.
        assert_eq!(app.screen, Screen::Contact);
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn digits_jump_directly() {
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.screen, Screen::Projects);
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn theme_toggle_flips_mode() {
        let mut app = App::new();
        let before = app.theme;
        app.handle_key(key(KeyCode::Char('t')));
        assert_eq!(app.theme, before.toggled());
    }

    #[test]
    fn grab_and_move_reorders_with_keyboard() {
        let mut app = App::new();
        app.navigate_to(Screen::Projects);
        let original: Vec<_> = app.board.projects().iter().map(|p| p.title).collect();

        app.handle_key(key(KeyCode::Char(' '))); // grab card 0
        assert!(app.board.is_dragging());
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Char(' '))); // drop at 2

        let after: Vec<_> = app.board.projects().iter().map(|p| p.title).collect();
        assert_eq!(after, vec![original[1], original[2], original[0], original[3]]);
    }

    #[test]
    fn escape_cancels_a_grab() {
        let mut app = App::new();
        app.navigate_to(Screen::Projects);
        let original: Vec<_> = app.board.projects().iter().map(|p| p.title).collect();
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Esc));
        let after: Vec<_> = app.board.projects().iter().map(|p| p.title).collect();
        assert_eq!(after, original);
        assert!(!app.board.is_dragging());
    }

    #[test]
    fn typing_on_contact_goes_into_the_form() {
        let mut app = App::new();
        app.navigate_to(Screen::Contact);
        assert_eq!(app.focus, Focus::Input);
        for c in "Ada".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.form.name.content(), "Ada");
        // 't' must type, not toggle the theme
        let theme = app.theme;
        app.handle_key(key(KeyCode::Char('t')));
        assert_eq!(app.theme, theme);
        assert_eq!(app.form.name.content(), "Adat");
    }

    #[test]
    fn enter_advances_fields_and_breaks_lines_in_message() {
        let mut app = App::new();
        app.navigate_to(Screen::Contact);
        app.handle_key(key(KeyCode::Char('a')));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.form.focus, FormField::Email);
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.form.focus, FormField::Message);
        app.handle_key(key(KeyCode::Char('x')));
        app.handle_key(key(KeyCode::Enter));
        app.handle_key(key(KeyCode::Char('y')));
        assert_eq!(app.form.message.content(), "x\ny");
    }

    #[test]
    fn success_message_resets_fields_and_banner_autodismisses() {
        let mut app = App::new();
        app.form.name.set_content("Ada");
        app.form.email.set_content("ada@example.com");
        app.form.message.insert_str("Hello!");

        app.handle_message(AppMessage::EmailSent);
        assert!(app.form.name.is_empty());
        assert!(app.form.email.is_empty());
        assert!(app.form.message.is_empty());
        assert!(matches!(app.form.submit, SubmitState::Success { .. }));

        for _ in 0..SUCCESS_BANNER_TICKS {
            app.tick();
        }
        assert_eq!(app.form.submit, SubmitState::Idle);
    }

    #[test]
    fn failure_message_preserves_fields() {
        let mut app = App::new();
        app.form.name.set_content("Ada");
        app.form.email.set_content("ada@example.com");
        app.form.message.insert_str("Hello!");

        app.handle_message(AppMessage::EmailFailed {
            error: "relay rejected the message (500): boom".into(),
        });
        assert_eq!(app.form.name.content(), "Ada");
        assert_eq!(app.form.email.content(), "ada@example.com");
        assert_eq!(app.form.message.content(), "Hello!");
        assert!(matches!(app.form.submit, SubmitState::Failed { .. }));
    }

    #[test]
    fn failure_modal_blocks_keys_until_dismissed() {
        let mut app = App::new();
        app.form.submit = SubmitState::Failed { error: "x".into() };
        app.handle_key(key(KeyCode::Char('t')));
        assert!(matches!(app.form.submit, SubmitState::Failed { .. }));
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.form.submit, SubmitState::Idle);
    }

    #[test]
    fn mouse_drag_between_cards_reorders() {
        let mut app = App::new();
        app.navigate_to(Screen::Projects);
        app.card_areas = vec![
            Rect::new(0, 0, 20, 4),
            Rect::new(0, 4, 20, 4),
            Rect::new(0, 8, 20, 4),
            Rect::new(0, 12, 20, 4),
        ];
        let original: Vec<_> = app.board.projects().iter().map(|p| p.title).collect();

        let press = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        let drag = MouseEvent {
            kind: MouseEventKind::Drag(MouseButton::Left),
            column: 3,
            row: 13,
            modifiers: KeyModifiers::NONE,
        };
        let release = MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 3,
            row: 13,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(press);
        assert!(app.board.is_dragging());
        app.handle_mouse(drag);
        app.handle_mouse(release);

        let after: Vec<_> = app.board.projects().iter().map(|p| p.title).collect();
        assert_eq!(after, vec![original[1], original[2], original[3], original[0]]);
    }

    #[test]
    fn dropping_on_the_same_card_changes_nothing() {
        let mut app = App::new();
        app.navigate_to(Screen::Projects);
        app.card_areas = vec![Rect::new(0, 0, 20, 4), Rect::new(0, 4, 20, 4)];
        let original: Vec<_> = app.board.projects().iter().map(|p| p.title).collect();

        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Up(MouseButton::Left),
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        let after: Vec<_> = app.board.projects().iter().map(|p| p.title).collect();
        assert_eq!(after, original);
    }

    #[test]
    fn paste_fills_the_focused_field() {
        let mut app = App::new();
        app.navigate_to(Screen::Contact);
        app.handle_paste("Ada\nLovelace");
        assert_eq!(app.form.name.content(), "AdaLovelace");
        app.form.focus = FormField::Message;
        app.handle_paste("hi\nthere");
        assert_eq!(app.form.message.content(), "hi\nthere");
    }
}
