//! Primitive SDF shapes (Deep Fried Edition)
//!
//! Closed-form distance functions in local space. The scene layer carries the
//! world-space query point through the node's inverse transform before calling
//! these.
//!
//! # Deep Fried Optimizations
//! - **Forced Inlining**: Every primitive is `#[inline(always)]`.
//! - **No Allocation**: Pure `f32`/`Vec3` arithmetic, safe to call from any
//!   number of render threads at once.
//!
//! Author: Moroya Sakamoto

mod box3d;
mod capsule;
mod octahedron;
mod orb;
mod plane;

pub use box3d::{sdf_box3d, sdf_rounded_box3d};
pub use capsule::sdf_capsule_vertical;
pub use octahedron::sdf_octahedron_bound;
pub use plane::{sdf_plane, sdf_plane_anchored};
pub use orb::sdf_orb;
