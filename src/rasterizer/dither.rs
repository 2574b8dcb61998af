//! Ordered dithering to a 1-bit bitmap
//!
//! Nine brightness bands, each with a fixed spatial pattern keyed on pixel
//! parity. The table matches frames already baked into firmware, so band edges
//! and patterns must not be tuned.

use super::render::Framebuffer;

/// On/off value for brightness `level` at pixel (x, y)
pub fn dither(level: f32, x: usize, y: usize) -> bool {
    if level <= 0.0 {
        false
    } else if level <= 0.11 {
        x % 3 == 0 && y % 3 == 0
    } else if level <= 0.25 {
        x % 2 == 0 && y % 2 == 0
    } else if level <= 0.33 {
        (x + y) % 3 == 0
    } else if level <= 0.5 {
        (x + y) % 2 == 0
    } else if level <= 0.66 {
        (x + y) % 3 != 0
    } else if level <= 0.75 {
        x % 2 == 0 || y % 2 == 0
    } else if level <= 0.88 {
        x % 3 != 0 || y % 3 != 0
    } else {
        true
    }
}

/// Monochrome frame, one bool per pixel, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub pixels: Vec<bool>,
    pub width: usize,
    pub height: usize,
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![false; width * height],
            width,
            height,
        }
    }

    /// Dither a brightness buffer
    pub fn from_framebuffer(fb: &Framebuffer) -> Self {
        let pixels = fb
            .brightness
            .iter()
            .enumerate()
            .map(|(i, &level)| dither(level, i % fb.width, i / fb.width))
            .collect();
        Self {
            pixels,
            width: fb.width,
            height: fb.height,
        }
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.pixels[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = on;
        }
    }

    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|&&on| on).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every (x, y) in a 6x6 tile (covers both mod 2 and mod 3 periods)
    fn tile() -> impl Iterator<Item = (usize, usize)> {
        (0..6).flat_map(|y| (0..6).map(move |x| (x, y)))
    }

    #[test]
    fn test_band_edges() {
        for (x, y) in tile() {
            assert!(!dither(0.0, x, y));
            assert!(!dither(-0.5, x, y));
            assert!(dither(0.89, x, y));
            assert!(dither(1.0, x, y));
        }
    }

    #[test]
    fn test_band_patterns() {
        for (x, y) in tile() {
            assert_eq!(dither(0.05, x, y), x % 3 == 0 && y % 3 == 0);
            assert_eq!(dither(0.11, x, y), x % 3 == 0 && y % 3 == 0);
            assert_eq!(dither(0.2, x, y), x % 2 == 0 && y % 2 == 0);
            assert_eq!(dither(0.3, x, y), (x + y) % 3 == 0);
            assert_eq!(dither(0.5, x, y), (x + y) % 2 == 0);
            assert_eq!(dither(0.6, x, y), (x + y) % 3 != 0);
            assert_eq!(dither(0.7, x, y), x % 2 == 0 || y % 2 == 0);
            assert_eq!(dither(0.88, x, y), x % 3 != 0 || y % 3 != 0);
        }
    }

    #[test]
    fn test_spot_checks() {
        // band 3 (<= 0.25) lights only even/even pixels
        assert!(!dither(0.2, 3, 3));
        assert!(dither(0.2, 4, 4));
        // band 2 (<= 0.11) lights only multiples of three
        assert!(dither(0.1, 3, 3));
        assert!(!dither(0.1, 3, 4));
    }

    #[test]
    fn test_pattern_depends_only_on_parity() {
        for level in [0.07, 0.2, 0.3, 0.45, 0.6, 0.7, 0.8] {
            for (x, y) in tile() {
                assert_eq!(dither(level, x, y), dither(level, x + 6, y + 12));
            }
        }
    }

    #[test]
    fn test_bitmap_from_framebuffer() {
        let mut fb = Framebuffer::new(8, 4);
        fb.brightness.fill(0.5);
        fb.brightness[0] = 0.0;
        let bitmap = Bitmap::from_framebuffer(&fb);
        assert!(!bitmap.get(0, 0));
        assert!(!bitmap.get(1, 0));
        assert!(bitmap.get(2, 0));
        assert!(bitmap.get(1, 1));
        assert_eq!(bitmap.lit_count(), 15);
    }
}
