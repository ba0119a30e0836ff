//! SDF Evaluation (Deep Fried Edition)
//!
//! Distance of a scene node at a world-space point.
//!
//! # Deep Fried Optimizations
//! - **Direct Dispatch**: One `match` on [`NodeKind`], primitives called
//!   directly.
//! - **Stack Scratch**: Groups sort their member distances in a fixed stack
//!   buffer; only groups larger than [`GROUP_STACK_CAPACITY`] touch the heap.
//! - **Read-Only**: Evaluation borrows the scene immutably and keeps no
//!   caches, so any number of render threads may evaluate at once.
//!
//! Author: Moroya Sakamoto

use crate::modifiers::modifier_repeat_uniform;
use crate::operations::{smooth_min, smooth_min_fold};
use crate::primitives::*;
use crate::scene::Scene;
use crate::types::{NodeId, NodeKind};
use glam::Vec3;

/// Group sizes whose distances are sorted without allocating
pub const GROUP_STACK_CAPACITY: usize = 16;

/// Evaluate one node of a scene at a world-space point (Deep Fried)
///
/// Pivots have no surface and report `f32::MAX`. A group without geometry
/// reports `0.0`; the marcher never samples one, and composites leave such
/// members out.
///
/// # Arguments
/// * `scene` - Scene owning the node
/// * `id` - Node to evaluate
/// * `point` - World-space sample point
///
/// # Returns
/// Signed distance to the node's surface
#[inline]
pub fn eval(scene: &Scene, id: NodeId, point: Vec3) -> f32 {
    let node = scene.node(id);

    match &node.kind {
        NodeKind::Box {
            size,
            corner_radius,
        } => sdf_rounded_box3d(node.transform.to_local(point), *size, *corner_radius),
        NodeKind::Capsule { height, radius } => {
            sdf_capsule_vertical(node.transform.to_local(point), height * 0.5, *radius)
        }
        NodeKind::Octahedron { size } => {
            sdf_octahedron_bound(node.transform.to_local(point), *size)
        }
        // Local point measured against the local position: the translation
        // counts twice for a parented orb
        NodeKind::Orb { radius } => {
            sdf_orb(node.transform.to_local(point), node.position(), *radius)
        }
        // Planes ignore every transform, their rotation is the normal
        NodeKind::Plane => sdf_plane_anchored(point, node.rotation(), node.position()),

        NodeKind::Repeater {
            primitive,
            floor,
            repeat_dist,
            smoothing,
        } => {
            let lattice = scene.has_geometry(*primitive).then(|| {
                let cell = modifier_repeat_uniform(node.transform.to_local(point), *repeat_dist);
                eval(scene, *primitive, cell)
            });
            let ground = floor
                .filter(|&f| scene.has_geometry(f))
                .map(|f| eval(scene, f, point));
            match (lattice, ground) {
                (Some(d), Some(g)) => smooth_min(d, g, *smoothing),
                (Some(d), None) | (None, Some(d)) => d,
                (None, None) => f32::MAX,
            }
        }
        NodeKind::Group {
            children,
            smoothing,
        } => eval_group(scene, children, node.transform.to_local(point), *smoothing),

        NodeKind::Pivot => f32::MAX,
    }
}

/// Smooth union of the members with a surface, smallest distance first
fn eval_group(scene: &Scene, children: &[NodeId], local: Vec3, k: f32) -> f32 {
    let members = children.iter().filter(|&&c| scene.has_geometry(c));

    if children.len() <= GROUP_STACK_CAPACITY {
        let mut scratch = [0.0f32; GROUP_STACK_CAPACITY];
        let mut n = 0;
        for &c in members {
            scratch[n] = eval(scene, c, local);
            n += 1;
        }
        smooth_min_fold(&mut scratch[..n], k).unwrap_or(0.0)
    } else {
        let mut distances: Vec<f32> = members.map(|&c| eval(scene, c, local)).collect();
        smooth_min_fold(&mut distances, k).unwrap_or(0.0)
    }
}

/// Compute surface normal at a point of one node (Deep Fried)
///
/// Central differences of the node's own distance function; a degenerate
/// gradient falls back to `+Y`.
///
/// # Arguments
/// * `scene` - Scene owning the node
/// * `id` - Node whose surface was hit
/// * `point` - Point on or near the surface
/// * `epsilon` - Small offset for gradient estimation
///
/// # Returns
/// Normalized surface normal
#[inline(always)]
pub fn normal(scene: &Scene, id: NodeId, point: Vec3, epsilon: f32) -> Vec3 {
    let ex = Vec3::new(epsilon, 0.0, 0.0);
    let ey = Vec3::new(0.0, epsilon, 0.0);
    let ez = Vec3::new(0.0, 0.0, epsilon);

    let grad = Vec3::new(
        eval(scene, id, point + ex) - eval(scene, id, point - ex),
        eval(scene, id, point + ey) - eval(scene, id, point - ey),
        eval(scene, id, point + ez) - eval(scene, id, point - ez),
    );

    // NaN guard: if gradient is zero/degenerate, return safe default
    let len_sq = grad.length_squared();
    if len_sq < 1e-20 || !len_sq.is_finite() {
        return Vec3::Y;
    }
    grad / len_sq.sqrt()
}
