//! Node transforms
//!
//! Every scene node carries a [`Transform`]: a local position and Euler
//! rotation, the derived world matrix, and its inverse. SDFs are evaluated in
//! local space by pushing the world-space query point through the inverse.
//!
//! # Parent composition
//!
//! A parent contributes its rotation block and its translation, but not as a
//! full matrix product. The parent's rotation acts on the point first, then
//! the node's own rotation and translation, and finally the parent's
//! translation is added component-wise:
//!
//! ```text
//! world      = local * strip_translation(parent)
//! world.t   += parent.t
//! ```
//!
//! So a child at local `(1, 0, 0)` under a parent at `(10, 0, 0)` sits at
//! `(11, 0, 0)` regardless of the parent's rotation.
//!
//! Author: Moroya Sakamoto

mod rotate;

pub use rotate::{euler_degrees_matrix, rotate_x_point, rotate_y_point, rotate_z_point};

use glam::{Mat4, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Local placement plus derived world matrices
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Local position
    pub position: Vec3,
    /// Local rotation in degrees (applied Z, then X, then Y)
    pub rotation: Vec3,
    /// World matrix, valid after [`Transform::update_world`]
    #[serde(skip, default = "identity")]
    pub world: Mat4,
    /// Inverse of `world`, or identity when `world` is singular
    #[serde(skip, default = "identity")]
    pub inverse: Mat4,
}

fn identity() -> Mat4 {
    Mat4::IDENTITY
}

impl Default for Transform {
    fn default() -> Self {
        Transform::new(Vec3::ZERO, Vec3::ZERO)
    }
}

impl Transform {
    /// Create a transform at `position` with Euler `rotation` (degrees)
    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        let mut t = Transform {
            position,
            rotation,
            world: Mat4::IDENTITY,
            inverse: Mat4::IDENTITY,
        };
        t.update_world(None);
        t
    }

    /// Local matrix: rotation, then translation
    #[inline]
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * euler_degrees_matrix(self.rotation)
    }

    /// Recompute `world` and `inverse` from the local state and the parent's
    /// current world matrix
    pub fn update_world(&mut self, parent_world: Option<Mat4>) {
        let mut world = self.local_matrix();

        if let Some(parent) = parent_world {
            let mut parent_rotation = parent;
            parent_rotation.w_axis = Vec4::W;

            world = world * parent_rotation;
            world.w_axis += parent.w_axis.truncate().extend(0.0);
        }

        self.world = world;
        self.inverse = invert_or_identity(&world);
    }

    /// World-space translation
    #[inline(always)]
    pub fn world_position(&self) -> Vec3 {
        self.world.w_axis.truncate()
    }

    /// Carry a world-space point into local space
    #[inline(always)]
    pub fn to_local(&self, point: Vec3) -> Vec3 {
        self.inverse.transform_point3(point)
    }
}

/// Invert a matrix, substituting identity when it is singular
///
/// A degenerate transform must keep the frame renderable, so the failure is
/// absorbed here instead of propagated.
#[inline]
pub fn invert_or_identity(m: &Mat4) -> Mat4 {
    let det = m.determinant();
    if !det.is_finite() || det.abs() < f32::MIN_POSITIVE {
        return Mat4::IDENTITY;
    }
    m.inverse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn test_translation_only() {
        let t = Transform::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO);
        assert!(close(t.world_position(), Vec3::new(1.0, 2.0, 3.0)));
        assert!(close(t.to_local(Vec3::new(1.0, 2.0, 3.0)), Vec3::ZERO));
    }

    #[test]
    fn test_inverse_round_trip() {
        let t = Transform::new(Vec3::new(-4.0, 0.5, 2.0), Vec3::new(30.0, 45.0, 60.0));
        let p = Vec3::new(0.3, -1.2, 5.0);
        let back = t.world.transform_point3(t.to_local(p));
        assert!(close(back, p), "got {:?}", back);
    }

    #[test]
    fn test_parent_translation_is_additive() {
        let parent = Transform::new(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO);
        let mut child = Transform::new(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO);
        child.update_world(Some(parent.world));
        assert!(close(child.world_position(), Vec3::new(11.0, 0.0, 0.0)));
    }

    #[test]
    fn test_parent_rotation_does_not_move_child_origin() {
        let parent = Transform::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, 0.0, 90.0));
        let mut child = Transform::new(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO);
        child.update_world(Some(parent.world));
        assert!(close(child.world_position(), Vec3::new(1.0, 5.0, 0.0)));
    }

    #[test]
    fn test_parent_rotation_orients_child() {
        let parent = Transform::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 90.0));
        let mut child = Transform::new(Vec3::ZERO, Vec3::ZERO);
        child.update_world(Some(parent.world));
        let p = child.world.transform_point3(Vec3::X);
        assert!(close(p, Vec3::Y), "got {:?}", p);
    }

    #[test]
    fn test_parent_translation_not_rotated_by_child() {
        let parent = Transform::new(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO);
        let mut child = Transform::new(Vec3::ZERO, Vec3::new(0.0, 90.0, 0.0));
        child.update_world(Some(parent.world));
        assert!(close(child.world_position(), Vec3::new(0.0, 0.0, 3.0)));
    }

    #[test]
    fn test_singular_inverse_is_identity() {
        let singular = Mat4::from_scale(Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(invert_or_identity(&singular), Mat4::IDENTITY);
        let nan = Mat4::from_translation(Vec3::splat(f32::NAN));
        assert_eq!(invert_or_identity(&nan), Mat4::IDENTITY);
    }
}
