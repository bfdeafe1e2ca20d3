//! Single-line text input with cursor handling and horizontal scrolling.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::ui::theme::Palette;

/// A single-line text input.
///
/// Tracks content, a character-indexed cursor, and a scroll offset so
/// the cursor stays visible when the text exceeds the widget width.
#[derive(Debug, Clone, Default)]
pub struct InputBox {
    content: String,
    /// Cursor position as a character index
    cursor: usize,
    /// First visible character index
    scroll: usize,
}

impl InputBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Byte offset of the character index `pos`.
    fn byte_index(&self, pos: usize) -> usize {
        self.content
            .char_indices()
            .nth(pos)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor (Backspace).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete the character at the cursor (Delete).
    pub fn delete_char(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the content and put the cursor at the end.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.char_count();
        self.scroll = 0;
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
        self.scroll = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Keep the cursor inside the visible window of `visible` columns.
    fn update_scroll(&mut self, visible: usize) {
        if visible == 0 {
            return;
        }
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + visible {
            self.scroll = self.cursor + 1 - visible;
        }
    }

    /// Draw the input into `buf`. The border picks up the focus color
    /// and the cursor cell is rendered reversed when focused.
    pub fn render(
        &mut self,
        area: Rect,
        buf: &mut Buffer,
        palette: &Palette,
        title: &str,
        focused: bool,
    ) {
        let border = if focused {
            palette.border_focus
        } else {
            palette.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(title.to_string())
            .title_style(Style::default().fg(palette.text_dim))
            .style(Style::default().bg(palette.input_bg));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        self.update_scroll(inner.width as usize);

        let visible: String = self
            .content
            .chars()
            .skip(self.scroll)
            .take(inner.width as usize)
            .collect();
        buf.set_string(
            inner.x,
            inner.y,
            &visible,
            Style::default().fg(palette.text),
        );

        if focused {
            let offset = self.cursor.saturating_sub(self.scroll);
            let prefix: String = self.content.chars().skip(self.scroll).take(offset).collect();
            let x = inner.x + prefix.width() as u16;
            if x < inner.x + inner.width {
                if let Some(cell) = buf.cell_mut((x, inner.y)) {
                    cell.set_style(Style::default().add_modifier(Modifier::REVERSED));
                }
            }
        }
    }
}
