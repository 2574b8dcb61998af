//! Terminal previews
//!
//! Screen rows grow with object-space z, so both previews walk the buffer
//! backwards (bottom row first, right column first) to show the object upright.

use crate::rasterizer::{Bitmap, Framebuffer};

/// Lightest to darkest
pub const SHADE_RAMP: &str = " ,-~:;=!*$@#";

/// Clear the terminal and home the cursor
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Shaded preview: one ramp character per pixel, one line per row
pub fn render_ascii(fb: &Framebuffer, ramp: &str) -> String {
    let ramp: Vec<char> = ramp.chars().collect();
    let top = ramp.len().saturating_sub(1);
    let mut out = String::with_capacity((fb.width + 1) * fb.height);
    for y in (0..fb.height).rev() {
        for x in (0..fb.width).rev() {
            let level = fb.brightness_at(x, y).clamp(0.0, 1.0);
            let shade = ((level * top as f32) as usize).min(top);
            out.push(ramp.get(shade).copied().unwrap_or(' '));
        }
        out.push('\n');
    }
    out
}

/// Dithered preview: `#` for lit pixels
pub fn render_bitmap_ascii(bitmap: &Bitmap) -> String {
    let mut out = String::with_capacity((bitmap.width + 1) * bitmap.height);
    for y in (0..bitmap.height).rev() {
        for x in (0..bitmap.width).rev() {
            out.push(if bitmap.get(x, y) { '#' } else { ' ' });
        }
        out.push('\n');
    }
    out
}
