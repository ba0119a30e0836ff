//! Plane primitive SDF (Deep Fried Edition)
//!
//! # Deep Fried Optimizations
//! - **Forced Inlining**: Zero call overhead.
//!
//! Author: Moroya Sakamoto

use glam::Vec3;

/// Signed distance to an infinite plane
///
/// # Arguments
/// * `point` - Point to evaluate
/// * `normal` - Plane normal (should be normalized)
/// * `distance` - Distance from origin to plane along normal
///
/// # Returns
/// Signed distance (negative below plane, positive above)
#[inline(always)]
pub fn sdf_plane(point: Vec3, normal: Vec3, distance: f32) -> f32 {
    point.dot(normal) - distance
}

/// Plane whose offset is the distance of an anchor point from the origin
///
/// `dot(p, normal) + |anchor|`. The anchor's direction is ignored, so an
/// anchor at `(0, -2, 0)` with normal `+Y` gives a floor at `y = -2`.
#[inline(always)]
pub fn sdf_plane_anchored(point: Vec3, normal: Vec3, anchor: Vec3) -> f32 {
    sdf_plane(point, normal, -anchor.length())
}
