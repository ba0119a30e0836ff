//! Rotation helpers (Deep Fried Edition)
//!
//! Point rotations about the principal axes, used by the orbiting light, and
//! the Euler-degree rotation matrix used by every scene node.
//!
//! Author: Moroya Sakamoto

use glam::{Mat4, Vec3};

/// Rotate a point about the X axis by `angle` radians
#[inline(always)]
pub fn rotate_x_point(point: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(point.x, point.y * c - point.z * s, point.y * s + point.z * c)
}

/// Rotate a point about the Y axis by `angle` radians
///
/// Positive angles carry +X toward +Z.
#[inline(always)]
pub fn rotate_y_point(point: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(point.x * c - point.z * s, point.y, point.x * s + point.z * c)
}

/// Rotate a point about the Z axis by `angle` radians
#[inline(always)]
pub fn rotate_z_point(point: Vec3, angle: f32) -> Vec3 {
    let (s, c) = angle.sin_cos();
    Vec3::new(point.x * c - point.y * s, point.x * s + point.y * c, point.z)
}

/// Rotation matrix from Euler angles in degrees
///
/// The rotations act on a point about Z first, then X, then Y.
#[inline]
pub fn euler_degrees_matrix(rotation: Vec3) -> Mat4 {
    let r = rotation * (std::f32::consts::PI / 180.0);
    Mat4::from_rotation_y(r.y) * Mat4::from_rotation_x(r.x) * Mat4::from_rotation_z(r.z)
}
