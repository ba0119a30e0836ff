//! Box primitive SDF (Deep Fried Edition)
//!
//! # Deep Fried Optimizations
//! - **Branchless Logic**: Uses standard max/min logic for interior/exterior.
//! - **Forced Inlining**: Zero call overhead.
//!
//! Author: Moroya Sakamoto

use glam::Vec3;

/// Signed distance to an axis-aligned box centered at origin
///
/// # Arguments
/// * `point` - Point to evaluate
/// * `half_extents` - Half-size in each dimension
///
/// # Returns
/// Signed distance (negative inside, positive outside)
#[inline(always)]
pub fn sdf_box3d(point: Vec3, half_extents: Vec3) -> f32 {
    let q = point.abs() - half_extents;
    // Branchless combine of interior (negative) and exterior (positive) distance
    q.max(Vec3::ZERO).length() + q.x.max(q.y.max(q.z)).min(0.0)
}

/// Signed distance to a box with rounded corners
///
/// The outer extent stays at `half_extents`; the corners are rounded with
/// `corner_radius`. A zero radius gives the sharp box.
#[inline(always)]
pub fn sdf_rounded_box3d(point: Vec3, half_extents: Vec3, corner_radius: f32) -> f32 {
    sdf_box3d(point, half_extents - Vec3::splat(corner_radius)) - corner_radius
}
