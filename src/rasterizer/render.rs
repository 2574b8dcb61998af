//! Core rendering functions
//! Point-sampled surface rasterization with a z-buffer

use super::math::{light_curve, Vec2, Vec3};
use super::surface::Surface;
use super::types::RenderSettings;

/// Depth every pixel starts a frame at; farther than any surface point
pub const FAR_DEPTH: f32 = 1000.0;

/// Brightness and depth buffers for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    pub brightness: Vec<f32>, // [0, 1], row-major
    pub zbuffer: Vec<f32>,    // Depth buffer
    pub width: usize,
    pub height: usize,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            brightness: vec![0.0; width * height],
            zbuffer: vec![FAR_DEPTH; width * height],
            width,
            height,
        }
    }

    pub fn clear(&mut self) {
        self.brightness.fill(0.0);
        self.zbuffer.fill(FAR_DEPTH);
    }

    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    pub fn brightness_at(&self, x: usize, y: usize) -> f32 {
        self.brightness[self.index(x, y)]
    }

    pub fn depth_at(&self, x: usize, y: usize) -> f32 {
        self.zbuffer[self.index(x, y)]
    }

    /// True if a sample at depth `z` would replace what is stored at (x, y)
    pub fn is_nearer(&self, x: usize, y: usize, z: f32) -> bool {
        z < self.zbuffer[self.index(x, y)]
    }

    /// Write a pixel if it is strictly nearer than the stored one.
    /// On an exact depth tie the earlier write is kept.
    pub fn set_pixel_with_depth(&mut self, x: usize, y: usize, z: f32, brightness: f32) -> bool {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            if z < self.zbuffer[idx] {
                self.zbuffer[idx] = z;
                self.brightness[idx] = brightness;
                return true;
            }
        }
        false
    }

    pub fn is_covered(&self, x: usize, y: usize) -> bool {
        self.depth_at(x, y) < FAR_DEPTH
    }

    /// Number of pixels written at least once this frame
    pub fn covered_count(&self) -> usize {
        self.zbuffer.iter().filter(|&&z| z < FAR_DEPTH).count()
    }

    /// Inclusive pixel bounds (min_x, min_y, max_x, max_y) of everything drawn
    pub fn coverage_bounds(&self) -> Option<(usize, usize, usize, usize)> {
        let mut bounds: Option<(usize, usize, usize, usize)> = None;
        for y in 0..self.height {
            for x in 0..self.width {
                if !self.is_covered(x, y) {
                    continue;
                }
                bounds = Some(match bounds {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
        bounds
    }
}

/// A surface sample that landed on screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: usize,
    pub y: usize,
    /// Translated x; smaller is nearer
    pub depth: f32,
    /// Point before rotation (normals are evaluated here)
    pub object: Vec3,
    /// Point after rotation and translation
    pub camera: Vec3,
}

/// Fixed camera for one rotation angle
#[derive(Debug, Clone, Copy)]
pub struct Projector<'a> {
    settings: &'a RenderSettings,
    cos_phi: f32,
    sin_phi: f32,
}

impl<'a> Projector<'a> {
    pub fn new(angle: f32, settings: &'a RenderSettings) -> Self {
        Self {
            settings,
            cos_phi: angle.cos(),
            sin_phi: angle.sin(),
        }
    }

    /// Rotate, push away from the viewer and project a point.
    /// Returns None when it falls outside the screen.
    pub fn project(&self, object: Vec3) -> Option<Sample> {
        let rotated = object.rotate_z(self.cos_phi, self.sin_phi);
        let camera = Vec3::new(rotated.x + self.settings.camera_distance, rotated.y, rotated.z);

        // Perspective divide
        let scale = self.settings.focal_length / camera.x;
        let screen = Vec2::new(camera.y * scale, camera.z * scale);

        let px = ((screen.x / 2.0 + 0.5) * self.settings.width as f32) as i32;
        let py = ((screen.y / 2.0 + 0.5) * self.settings.height as f32) as i32;
        if px < 0 || py < 0 || px as usize >= self.settings.width || py as usize >= self.settings.height {
            return None;
        }

        Some(Sample {
            x: px as usize,
            y: py as usize,
            depth: camera.x,
            object,
            camera,
        })
    }

    /// Brightness of a visible sample, in [0, 1]
    pub fn shade<S: Surface + ?Sized>(&self, surface: &S, sample: &Sample, strip: usize) -> f32 {
        let to_light = (self.settings.light_pos - sample.camera).normalize();
        let normal = surface
            .normal(sample.object, strip)
            .rotate_z(self.cos_phi, self.sin_phi);
        light_curve(to_light.dot(normal)).clamp(0.0, 1.0)
    }
}

/// Visit every (u, v, strip) parameter in sweep order: strip, then v, then u.
///
/// Parameters advance by repeated addition, so the number of samples per axis
/// follows f32 accumulation rather than `2 / step`.
pub fn for_each_parameter<F: FnMut(f32, f32, usize)>(settings: &RenderSettings, mut f: F) {
    debug_assert!(settings.u_step > 0.0 && settings.v_step > 0.0);
    for strip in 0..settings.surface_copies {
        let mut v = -1.0f32;
        while v < 1.0 {
            let mut u = -1.0f32;
            while u < 1.0 {
                f(u, v, strip);
                u += settings.u_step;
            }
            v += settings.v_step;
        }
    }
}

/// Render one frame at rotation `angle` into an existing framebuffer.
/// The framebuffer is reset first; nothing from a previous frame survives.
pub fn render_frame_into<S: Surface + ?Sized>(
    fb: &mut Framebuffer,
    angle: f32,
    surface: &S,
    settings: &RenderSettings,
) {
    if fb.width != settings.width || fb.height != settings.height {
        *fb = Framebuffer::new(settings.width, settings.height);
    } else {
        fb.clear();
    }

    let projector = Projector::new(angle, settings);
    for_each_parameter(settings, |u, v, strip| {
        let object = surface.position(u, v, strip);
        let Some(sample) = projector.project(object) else {
            return;
        };
        // Occluded by something already drawn
        if !fb.is_nearer(sample.x, sample.y, sample.depth) {
            return;
        }
        let brightness = projector.shade(surface, &sample, strip);
        fb.set_pixel_with_depth(sample.x, sample.y, sample.depth, brightness);
    });
}

/// Render one frame at rotation `angle`
pub fn render_frame<S: Surface + ?Sized>(angle: f32, surface: &S, settings: &RenderSettings) -> Framebuffer {
    let mut fb = Framebuffer::new(settings.width, settings.height);
    render_frame_into(&mut fb, angle, surface, settings);
    fb
}
