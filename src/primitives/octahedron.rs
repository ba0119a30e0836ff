//! Octahedron SDF (Deep Fried Edition)
//!
//! Bound (not exact) distance: cheap and conservative, which is all sphere
//! tracing needs.
//!
//! Author: Moroya Sakamoto

use glam::Vec3;

/// 1/sqrt(3)
const INV_SQRT_3: f32 = 0.57735027;

/// Bound SDF for a regular octahedron centered at origin
///
/// - Vertices at (±s, 0, 0), (0, ±s, 0), (0, 0, ±s)
/// - `(|x| + |y| + |z| - s) / √3`
#[inline(always)]
pub fn sdf_octahedron_bound(p: Vec3, s: f32) -> f32 {
    let p = p.abs();
    (p.x + p.y + p.z - s) * INV_SQRT_3
}
