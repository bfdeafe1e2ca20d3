//! Multi-line message input built on tui-textarea.
//!
//! Thin wrapper exposing the same method surface as [`InputBox`] so the
//! contact form can treat all three fields uniformly.
//!
//! [`InputBox`]: crate::widgets::input_box::InputBox

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};
use tui_textarea::{CursorMove, TextArea};

use crate::ui::theme::Palette;

/// Multi-line text input for the contact message.
#[derive(Debug, Clone, Default)]
pub struct MessageArea {
    textarea: TextArea<'static>,
}

impl MessageArea {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_tab_length(4);
        Self { textarea }
    }

    /// Full content with lines joined by `\n`.
    pub fn content(&self) -> String {
        self.textarea.lines().join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.textarea.lines().iter().all(|l| l.is_empty())
    }

    pub fn insert_char(&mut self, c: char) {
        self.textarea.insert_char(c);
    }

    pub fn insert_str(&mut self, s: &str) {
        self.textarea.insert_str(s);
    }

    pub fn insert_newline(&mut self) {
        self.textarea.insert_newline();
    }

    /// Backspace.
    pub fn backspace(&mut self) {
        self.textarea.delete_char();
    }

    /// Forward delete.
    pub fn delete_char(&mut self) {
        self.textarea.delete_next_char();
    }

    pub fn move_cursor_left(&mut self) {
        self.textarea.move_cursor(CursorMove::Back);
    }

    pub fn move_cursor_right(&mut self) {
        self.textarea.move_cursor(CursorMove::Forward);
    }

    pub fn move_cursor_up(&mut self) {
        self.textarea.move_cursor(CursorMove::Up);
    }

    pub fn move_cursor_down(&mut self) {
        self.textarea.move_cursor(CursorMove::Down);
    }

    pub fn move_cursor_home(&mut self) {
        self.textarea.move_cursor(CursorMove::Head);
    }

    pub fn move_cursor_end(&mut self) {
        self.textarea.move_cursor(CursorMove::End);
    }

    pub fn clear(&mut self) {
        self.textarea = TextArea::default();
        self.textarea.set_cursor_line_style(Style::default());
        self.textarea.set_tab_length(4);
    }

    /// Draw the textarea with themed borders and cursor.
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        palette: &Palette,
        title: &str,
        focused: bool,
    ) {
        let border = if focused {
            palette.border_focus
        } else {
            palette.border
        };
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(title.to_string())
                .title_style(Style::default().fg(palette.text_dim)),
        );
        self.textarea
            .set_style(Style::default().fg(palette.text).bg(palette.input_bg));
        self.textarea.set_placeholder_text("Your Message");
        self.textarea
            .set_placeholder_style(Style::default().fg(palette.text_dim));
        let cursor_style = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        self.textarea.set_cursor_style(cursor_style);
        frame.render_widget(&self.textarea, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_joins_lines() {
        let mut area = MessageArea::new();
        area.insert_str("first");
        area.insert_newline();
        area.insert_str("second");
        assert_eq!(area.content(), "first\nsecond");
    }

    #[test]
    fn empty_detection_ignores_blank_lines() {
        let mut area = MessageArea::new();
        assert!(area.is_empty());
        area.insert_newline();
        assert!(area.is_empty());
        area.insert_char('x');
        assert!(!area.is_empty());
    }

    #[test]
    fn clear_discards_content() {
        let mut area = MessageArea::new();
        area.insert_str("hello there");
        area.clear();
        assert!(area.is_empty());
        assert_eq!(area.content(), "");
    }

    #[test]
    fn backspace_merges_lines() {
        let mut area = MessageArea::new();
        area.insert_str("ab");
        area.insert_newline();
        area.backspace();
        assert_eq!(area.content(), "ab");
    }
}
