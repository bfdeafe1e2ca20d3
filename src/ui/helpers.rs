//! Small rendering helpers shared by the views.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Truncate a string to `max` characters, appending an ellipsis.
pub fn truncate_string(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// A `width` x `height` rect centered inside `r`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

fn channels(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        // Non-RGB colors cannot be interpolated; treat as mid gray.
        _ => (128, 128, 128),
    }
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
}

/// Per-character color interpolation from `from` to `to`, standing in
/// for the site's gradient headings.
pub fn gradient_line(text: &str, from: Color, to: Color) -> Line<'static> {
    let (fr, fg, fb) = channels(from);
    let (tr, tg, tb) = channels(to);
    let len = text.chars().count().max(1);
    let spans: Vec<Span<'static>> = text
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let t = i as f32 / (len.saturating_sub(1).max(1)) as f32;
            let color = Color::Rgb(lerp(fr, tr, t), lerp(fg, tg, t), lerp(fb, tb, t));
            Span::styled(
                c.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_strings_alone() {
        assert_eq!(truncate_string("hello", 10), "hello");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        assert_eq!(truncate_string("hello world", 6), "hello…");
    }

    #[test]
    fn centered_rect_is_clamped_and_centered() {
        let outer = Rect::new(0, 0, 10, 10);
        let inner = centered_rect(4, 2, outer);
        assert_eq!(inner, Rect::new(3, 4, 4, 2));
        let huge = centered_rect(100, 100, outer);
        assert_eq!(huge, outer);
    }

    #[test]
    fn gradient_endpoints_match_the_input_colors() {
        let line = gradient_line("abc", Color::Rgb(0, 0, 0), Color::Rgb(255, 255, 255));
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[0].style.fg, Some(Color::Rgb(0, 0, 0)));
        assert_eq!(line.spans[2].style.fg, Some(Color::Rgb(255, 255, 255)));
    }
}
