//! PNG sprite sheet export
//!
//! All frames side by side, left to right, in the same upright orientation as
//! the terminal previews. Lit pixels are white.

use std::path::Path;

use image::{GrayImage, ImageResult, Luma};

use crate::rasterizer::Bitmap;

pub fn sprite_sheet(frames: &[Bitmap]) -> GrayImage {
    let (width, height) = frames
        .first()
        .map(|f| (f.width, f.height))
        .unwrap_or((0, 0));
    let mut sheet = GrayImage::new((width * frames.len()) as u32, height as u32);

    for (i, frame) in frames.iter().enumerate() {
        for y in 0..height.min(frame.height) {
            for x in 0..width.min(frame.width) {
                let value = if frame.get(x, y) { 255 } else { 0 };
                let sx = i * width + (width - 1 - x);
                let sy = height - 1 - y;
                sheet.put_pixel(sx as u32, sy as u32, Luma([value]));
            }
        }
    }

    sheet
}

/// Write frames to a PNG file
pub fn save_sprite_sheet<P: AsRef<Path>>(frames: &[Bitmap], path: P) -> ImageResult<()> {
    sprite_sheet(frames).save(path)
}
