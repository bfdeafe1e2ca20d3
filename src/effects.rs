//! Decorative background effects.
//!
//! The site scatters faint drifting glyphs behind the hero and form
//! sections. Here that is a field of particles in unit space, stepped
//! once per tick and mapped onto the view area before the content is
//! drawn over it.

use rand::Rng;
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::ui::theme::Palette;

#[derive(Debug, Clone, Copy)]
struct Particle {
    x: f32,
    y: f32,
    dx: f32,
    dy: f32,
    glyph: char,
}

/// A drifting glyph field in unit coordinates.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Scatter `count` particles drawn from `glyphs` at random
    /// positions with small random velocities.
    pub fn new(count: usize, glyphs: &[char]) -> Self {
        let mut rng = rand::rng();
        let particles = (0..count)
            .map(|i| Particle {
                x: rng.random_range(0.0..1.0),
                y: rng.random_range(0.0..1.0),
                dx: rng.random_range(-0.002..0.002),
                dy: rng.random_range(-0.0015..0.0015),
                glyph: glyphs[i % glyphs.len()],
            })
            .collect();
        Self { particles }
    }

    /// Advance every particle one tick, wrapping at the edges.
    pub fn step(&mut self) {
        // rem_euclid of a tiny negative can round up to exactly 1.0
        fn wrap(v: f32) -> f32 {
            let w = v.rem_euclid(1.0);
            if w >= 1.0 {
                0.0
            } else {
                w
            }
        }
        for p in &mut self.particles {
            p.x = wrap(p.x + p.dx);
            p.y = wrap(p.y + p.dy);
        }
    }

    /// Paint the field into `area`. Call before rendering foreground
    /// content so text draws over the glyphs.
    pub fn render(&self, area: Rect, buf: &mut Buffer, palette: &Palette) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let style = Style::default().fg(palette.text_dim);
        for p in &self.particles {
            let x = area.x + (p.x * f32::from(area.width)) as u16;
            let y = area.y + (p.y * f32::from(area.height)) as u16;
            if x >= area.x + area.width || y >= area.y + area.height {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(p.glyph);
                cell.set_style(style);
            }
        }
    }
}

/// Glyphs used behind the home hero (tech-flavored).
pub const HOME_GLYPHS: &[char] = &['⚛', '◆', '⬢', '✦', '·', '○', '＋', '◇'];
/// Softer glyphs used behind the about and contact sections.
pub const AMBIENT_GLYPHS: &[char] = &['·', '∘', '°', '•'];
