//! Parametric surfaces
//!
//! A surface maps a parameter pair (u, v), both in [-1, 1), plus a strip index
//! to an object-space point, and maps such a point back to its unit normal.
//! Surfaces are stateless; the rasterizer only ever talks to them through the
//! [`Surface`] trait, so any conforming pair can be rendered.

use std::f32::consts::PI;

use super::math::{Vec2, Vec3};
use super::types::{RenderSettings, SurfaceKind};

/// Position and normal functions of a parametric surface
pub trait Surface {
    /// Object-space point at (u, v) on the given strip copy
    fn position(&self, u: f32, v: f32, strip: usize) -> Vec3;

    /// Unit normal at a point produced by [`Surface::position`].
    /// Returns [`Vec3::ZERO`] where the normal is undefined.
    fn normal(&self, point: Vec3, strip: usize) -> Vec3;

    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Ribbon made of `strips` interleaved, angularly offset strips that twist
/// once around the z axis while z runs from -1 to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwistedStrip {
    pub width_scale: f32,
    pub strips: usize,
}

impl TwistedStrip {
    pub fn new(width_scale: f32, strips: usize) -> Self {
        Self { width_scale, strips }
    }

    fn strip_width(&self) -> f32 {
        PI / self.strips as f32
    }
}

impl Surface for TwistedStrip {
    fn position(&self, u: f32, v: f32, strip: usize) -> Vec3 {
        let strip_width = self.strip_width();
        let offset = 2.0 * strip_width * strip as f32;
        let r = self.width_scale * ((PI * v).cos() + 1.0) / 2.0;
        let theta = 2.0 * PI * v + strip_width * u / 2.0 + offset;
        Vec3::new(r * theta.cos(), r * theta.sin(), v)
    }

    fn normal(&self, point: Vec3, _strip: usize) -> Vec3 {
        // Pole of the ribbon: radius collapses to zero
        if point.x == 0.0 && point.y == 0.0 {
            return Vec3::ZERO;
        }
        let slope = self.width_scale * PI / 2.0 * (PI * point.z).sin();
        let m = Vec2::new(point.x, point.y).len() * slope;
        Vec3::new(point.x, point.y, m).normalize()
    }

    fn name(&self) -> &'static str {
        "twisted strip"
    }
}

/// Torus whose central circle lies in the y-z plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Torus {
    /// Radius of the central circle
    pub major_radius: f32,
    /// Radius of the tube
    pub minor_radius: f32,
}

impl Torus {
    pub fn new(major_radius: f32, minor_radius: f32) -> Self {
        Self { major_radius, minor_radius }
    }
}

impl Surface for Torus {
    fn position(&self, u: f32, v: f32, _strip: usize) -> Vec3 {
        let r = self.major_radius + self.minor_radius * (PI * v).cos();
        let theta = PI * u;
        Vec3::new(
            self.minor_radius * (PI * v).sin(),
            r * theta.cos(),
            r * theta.sin(),
        )
    }

    fn normal(&self, point: Vec3, _strip: usize) -> Vec3 {
        // Nearest point on the central circle is at the same polar angle
        let theta = point.z.atan2(point.y);
        Vec3::new(
            point.x,
            point.y - self.major_radius * theta.cos(),
            point.z - self.major_radius * theta.sin(),
        )
        .normalize()
    }

    fn name(&self) -> &'static str {
        "torus"
    }
}

/// One of the built-in surfaces, chosen once per run
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BuiltinSurface {
    TwistedStrip(TwistedStrip),
    Torus(Torus),
}

impl BuiltinSurface {
    pub fn from_settings(kind: SurfaceKind, settings: &RenderSettings) -> Self {
        match kind {
            SurfaceKind::TwistedStrip => BuiltinSurface::TwistedStrip(TwistedStrip::new(
                settings.strip_width_scale,
                settings.surface_copies,
            )),
            SurfaceKind::Torus => BuiltinSurface::Torus(Torus::new(
                settings.torus_major_radius,
                settings.torus_minor_radius,
            )),
        }
    }
}

impl Surface for BuiltinSurface {
    fn position(&self, u: f32, v: f32, strip: usize) -> Vec3 {
        match self {
            BuiltinSurface::TwistedStrip(s) => s.position(u, v, strip),
            BuiltinSurface::Torus(t) => t.position(u, v, strip),
        }
    }

    fn normal(&self, point: Vec3, strip: usize) -> Vec3 {
        match self {
            BuiltinSurface::TwistedStrip(s) => s.normal(point, strip),
            BuiltinSurface::Torus(t) => t.normal(point, strip),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            BuiltinSurface::TwistedStrip(s) => s.name(),
            BuiltinSurface::Torus(t) => t.name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walk a coarse (u, v, strip) grid and check every normal
    fn assert_unit_normals<S: Surface>(surface: &S, strips: usize) -> usize {
        let mut degenerate = 0;
        for strip in 0..strips {
            for vi in 0..=40 {
                for ui in 0..=40 {
                    let u = -1.0 + ui as f32 * 0.05;
                    let v = -1.0 + vi as f32 * 0.05;
                    let p = surface.position(u, v, strip);
                    let n = surface.normal(p, strip);
                    if p.x == 0.0 && p.y == 0.0 {
                        assert_eq!(n, Vec3::ZERO);
                        degenerate += 1;
                    } else {
                        assert!(
                            (n.len() - 1.0).abs() < 1e-4,
                            "non-unit normal {:?} at u={} v={} strip={}",
                            n, u, v, strip
                        );
                    }
                }
            }
        }
        degenerate
    }

    #[test]
    fn test_strip_normals_unit_length() {
        let strip = TwistedStrip::new(1.3, 2);
        let degenerate = assert_unit_normals(&strip, 2);
        // v = -1 is the pole: radius (cos(-pi) + 1) / 2 collapses to zero
        assert!(degenerate > 0);
    }

    #[test]
    fn test_torus_normals_unit_length() {
        let torus = Torus::new(1.0, 0.5);
        assert_eq!(assert_unit_normals(&torus, 2), 0);
    }

    #[test]
    fn test_strip_pole_normal_is_zero() {
        let strip = TwistedStrip::new(1.3, 2);
        assert_eq!(strip.normal(Vec3::new(0.0, 0.0, 0.3), 0), Vec3::ZERO);
    }

    #[test]
    fn test_strip_normal_tilts_with_radius() {
        let strip = TwistedStrip::new(1.3, 2);
        // radius 1 at z = 0.5, where the slope term peaks
        let n = strip.normal(Vec3::new(0.6, 0.8, 0.5), 0);
        let m = 1.3 * PI / 2.0;
        let len = (1.0 + m * m).sqrt();
        assert!((n.x - 0.6 / len).abs() < 1e-5);
        assert!((n.y - 0.8 / len).abs() < 1e-5);
        assert!((n.z - m / len).abs() < 1e-5);
    }

    #[test]
    fn test_strip_copies_are_offset() {
        let strip = TwistedStrip::new(1.3, 2);
        let a = strip.position(0.0, 0.0, 0);
        let b = strip.position(0.0, 0.0, 1);
        // two copies sit half a turn apart
        assert!((a.x + b.x).abs() < 1e-5);
        assert!((a.y + b.y).abs() < 1e-5);
        assert_eq!(a.z, b.z);
    }

    #[test]
    fn test_torus_position_on_outer_rim() {
        let torus = Torus::new(1.0, 0.5);
        let p = torus.position(0.0, 0.0, 0);
        assert!(p.x.abs() < 1e-6);
        assert!((p.y - 1.5).abs() < 1e-6);
        assert!(p.z.abs() < 1e-6);
        let n = torus.normal(p, 0);
        assert!((n.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_builtin_dispatch_matches_variant() {
        let settings = RenderSettings::default();
        let torus = BuiltinSurface::from_settings(SurfaceKind::Torus, &settings);
        assert_eq!(torus.name(), "torus");
        assert_eq!(torus.position(0.3, -0.2, 1), Torus::new(1.0, 0.5).position(0.3, -0.2, 1));
        let strip = BuiltinSurface::from_settings(SurfaceKind::TwistedStrip, &settings);
        assert_eq!(strip.name(), "twisted strip");
    }
}
