//! Vector math for the surface rasterizer

use std::ops::Sub;
use serde::{Serialize, Deserialize};

/// 3D Vector
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn len(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction.
    /// A zero vector has no direction and comes back as zero.
    pub fn normalize(self) -> Vec3 {
        let l = self.len();
        if l == 0.0 {
            return Vec3::ZERO;
        }
        Vec3 {
            x: self.x / l,
            y: self.y / l,
            z: self.z / l,
        }
    }

    /// Rotate about the z axis, given the precomputed cosine and sine of the angle
    pub fn rotate_z(self, cos: f32, sin: f32) -> Vec3 {
        Vec3 {
            x: cos * self.x - sin * self.y,
            y: sin * self.x + cos * self.y,
            z: self.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

/// 2D Vector (projected screen coordinates)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn len(self) -> f32 {
        magnitude2(self.x, self.y)
    }
}

/// Euclidean norm of a 2-component vector
pub fn magnitude2(a: f32, b: f32) -> f32 {
    (a * a + b * b).sqrt()
}

/// Piecewise tone curve from light/normal alignment to brightness.
///
/// Lit faces land in [0.3, 1.0]; faces turned away keep a dim rim that grows
/// with the magnitude of the (negative) cosine. The result is not clamped.
pub fn light_curve(cosine: f32) -> f32 {
    if cosine > 0.0 {
        0.3 + 0.7 * cosine
    } else {
        0.1 - 0.4 * cosine
    }
}
