//! Surface Baker: monochrome animation baker for small OLED panels
//!
//! Renders a rotating parametric surface (twisted strip or torus) with a tiny
//! point-sampling software rasterizer, dithers each frame to 1 bit per pixel
//! and packs it for a display controller:
//! - `rasterizer`: surfaces, projection, z-buffer, shading, dithering
//! - `animation`: the frame loop over one half turn
//! - `output`: byte packing, firmware tables, terminal previews, PNG export
//! - `config`: RON run configuration

pub mod animation;
pub mod config;
pub mod output;
pub mod rasterizer;

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
