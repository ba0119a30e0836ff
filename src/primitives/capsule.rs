//! Capsule primitive SDF (Deep Fried Edition)
//!
//! # Deep Fried Optimizations
//! - **Optimized Axis-Aligned Variant**: The segment always lies on local Y,
//!   so no general dot products are needed.
//! - **Forced Inlining**: Zero call overhead.
//!
//! Author: Moroya Sakamoto

use glam::Vec3;

/// Signed distance to a vertical capsule centered at origin
///
/// # Arguments
/// * `point` - Point to evaluate
/// * `half_height` - Half the length of the core segment (excluding caps)
/// * `radius` - Capsule radius
#[inline(always)]
pub fn sdf_capsule_vertical(point: Vec3, half_height: f32, radius: f32) -> f32 {
    let y = (point.y.abs() - half_height).max(0.0);
    (point.x * point.x + y * y + point.z * point.z).sqrt() - radius
}
