//! Core types for the rasterizer

use serde::{Serialize, Deserialize};

use super::math::Vec3;
use super::surface::BuiltinSurface;
use super::{HEIGHT, WIDTH};

/// Which built-in surface to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SurfaceKind {
    #[default]
    TwistedStrip,
    Torus,
}

/// Rasterizer settings
///
/// Defaults reproduce the baked animation shipped with the firmware; changing
/// any of them changes the generated table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Screen width in pixels (multiple of 8, one byte per 8 columns)
    pub width: usize,
    /// Screen height in pixels
    pub height: usize,
    /// Frames in one animation (half a turn)
    pub frame_count: usize,
    /// Parameter step along u
    pub u_step: f32,
    /// Parameter step along v
    pub v_step: f32,
    /// Light position, in the translated (camera) frame
    pub light_pos: Vec3,
    /// Distance the object is pushed away from the viewer along x
    pub camera_distance: f32,
    /// Perspective scale numerator
    pub focal_length: f32,
    /// Number of strip copies swept per frame
    pub surface_copies: usize,
    pub strip_width_scale: f32,
    pub torus_major_radius: f32,
    pub torus_minor_radius: f32,
    pub surface: SurfaceKind,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            frame_count: 32,
            u_step: 0.001,
            v_step: 0.001,
            light_pos: Vec3::new(0.0, -2.0, 1.2),
            camera_distance: 6.0,
            focal_length: 4.0,
            surface_copies: 2,
            strip_width_scale: 1.3,
            torus_major_radius: 1.0,
            torus_minor_radius: 0.5,
            surface: SurfaceKind::TwistedStrip,
        }
    }
}

impl RenderSettings {
    /// Build the configured surface
    pub fn surface(&self) -> BuiltinSurface {
        BuiltinSurface::from_settings(self.surface, self)
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Rotation added before each frame
    pub fn angle_step(&self) -> f32 {
        std::f32::consts::PI / self.frame_count as f32
    }
}
