//! Scene graph node
//!
//! Author: Moroya Sakamoto

use crate::animation::Motion;
use crate::transforms::Transform;
use crate::types::{LightConfig, NodeId, NodeKind};
use glam::Vec3;

/// One entry of a scene's node arena
///
/// The parent link is an index into the same arena: the node looks its parent
/// up every frame and never owns it.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Placement and derived world matrices
    pub transform: Transform,
    /// Motion state; `None` for static nodes (planes)
    pub motion: Option<Motion>,
    /// Node whose rotation and translation this one follows
    pub parent: Option<NodeId>,
    /// Surface response used when this node is the hit node
    pub light: LightConfig,
    /// Shape variant
    pub kind: NodeKind,
}

impl Node {
    /// Local position
    #[inline(always)]
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    /// Local rotation in degrees
    #[inline(always)]
    pub fn rotation(&self) -> Vec3 {
        self.transform.rotation
    }

    /// Whether the node exposes a distance function
    #[inline(always)]
    pub fn is_drawable(&self) -> bool {
        self.kind.is_drawable()
    }

    /// Whether the node moves and follows its parent
    #[inline(always)]
    pub fn is_movable(&self) -> bool {
        self.motion.is_some()
    }

    /// Whether the node contributes geometry to a march
    #[inline(always)]
    pub fn has_geometry(&self) -> bool {
        self.kind.has_geometry()
    }

    /// Advance motion and rebuild the world transform
    ///
    /// Static nodes are left untouched.
    pub(crate) fn step(&mut self, parent_world: Option<glam::Mat4>, dt: f32) {
        if let Some(motion) = self.motion.as_mut() {
            motion.advance(&mut self.transform, dt);
            self.transform.update_world(parent_world);
        }
    }
}
