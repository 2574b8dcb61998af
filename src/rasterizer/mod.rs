//! Monochrome surface rasterizer
//!
//! Features:
//! - Parametric surfaces sampled densely in (u, v), no meshes
//! - Fixed pinhole projection, rotation about z only
//! - Z-buffer, first write wins on exact ties
//! - Piecewise tone-mapped diffuse shading
//! - Ordered dithering down to 1 bit per pixel

mod math;
mod types;
mod surface;
mod render;
mod dither;

pub use math::*;
pub use types::*;
pub use surface::*;
pub use render::*;
pub use dither::*;

/// Screen dimensions (OLED panel, portrait)
pub const WIDTH: usize = 32;
pub const HEIGHT: usize = 128;
