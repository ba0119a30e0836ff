//! Container types: Ray, Hit
//!
//! Author: Moroya Sakamoto

use glam::Vec3;

use super::NodeId;

/// Ray for raymarching
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin point
    pub origin: Vec3,
    /// Ray direction (normalized)
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray, normalizing `direction`
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Ray {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get point along ray at distance t
    #[inline(always)]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Hit result from raymarching
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Distance travelled along the ray when the hit was declared
    pub distance: f32,
    /// Sample point of the hit
    pub point: Vec3,
    /// Surface normal of the hit node
    pub normal: Vec3,
    /// Number of completed marching steps before the hit
    pub steps: u32,
    /// Node that produced the hit
    pub node: NodeId,
    /// Shaded, depth-attenuated brightness (not clamped)
    pub brightness: f32,
}
