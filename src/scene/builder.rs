//! Fluent construction of nodes and scenes
//!
//! One builder serves every node variant: pick the variant with a kind
//! constructor, then set placement, motion and lighting.
//!
//! ```rust
//! use ascii_raymarch::prelude::*;
//!
//! let mut scene = SceneBuilder::new()
//!     .light_position(Vec3::new(5.0, 15.0, -5.0))
//!     .move_speed(60.0)
//!     .build();
//!
//! let orb = scene
//!     .add_game_object(
//!         NodeBuilder::orb(0.4)
//!             .target(Vec3::new(-2.0, -2.0, 2.0))
//!             .move_speed(0.1)
//!             .easing(Easing::EaseInOutCubic)
//!             .moving(true),
//!     )
//!     .unwrap();
//! scene.on_update(0.016);
//! assert!(scene.node(orb).is_movable());
//! ```
//!
//! Author: Moroya Sakamoto

use crate::animation::{Easing, Motion};
use crate::transforms::Transform;
use crate::types::{LightConfig, NodeId, NodeKind};
use glam::Vec3;

use super::{Node, Scene};

/// Default repeater lattice period
pub const DEFAULT_REPEAT_DIST: f32 = 15.0;
/// Default repeater floor blend
pub const DEFAULT_REPEATER_SMOOTHING: f32 = 10.0;

/// Builder for any scene node
#[derive(Debug, Clone)]
#[must_use]
pub struct NodeBuilder {
    kind: NodeKind,
    position: Vec3,
    rotation: Vec3,
    motion: Motion,
    parent: Option<NodeId>,
    light: Option<LightConfig>,
}

impl NodeBuilder {
    /// Start from an arbitrary variant at the origin, not moving
    pub fn new(kind: NodeKind) -> Self {
        NodeBuilder {
            kind,
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            motion: Motion::default(),
            parent: None,
            light: None,
        }
    }

    // === Kind constructors ===

    /// Box with half-extents `size` and sharp corners
    pub fn cuboid(size: Vec3) -> Self {
        Self::new(NodeKind::Box {
            size,
            corner_radius: 0.0,
        })
    }

    /// Capsule of core length `height` along local Y
    pub fn capsule(height: f32, radius: f32) -> Self {
        Self::new(NodeKind::Capsule { height, radius })
    }

    /// Octahedron with centre-to-vertex distance `size`
    pub fn octahedron(size: f32) -> Self {
        Self::new(NodeKind::Octahedron { size })
    }

    /// Sphere
    pub fn orb(radius: f32) -> Self {
        Self::new(NodeKind::Orb { radius })
    }

    /// Static floor anchored at `(0, -2, 0)` facing `+Y`
    pub fn plane() -> Self {
        Self::new(NodeKind::Plane)
            .position(Vec3::new(0.0, -2.0, 0.0))
            .rotation(Vec3::Y)
    }

    /// Lattice of `primitive`, optionally blended with `floor`
    ///
    /// Without an explicit [`light`](Self::light) the repeater takes the
    /// primitive's light config when inserted into a scene.
    pub fn repeater(primitive: NodeId, floor: Option<NodeId>) -> Self {
        Self::new(NodeKind::Repeater {
            primitive,
            floor,
            repeat_dist: DEFAULT_REPEAT_DIST,
            smoothing: DEFAULT_REPEATER_SMOOTHING,
        })
    }

    /// Empty smooth group; fill it with [`Scene::add_to_group`]
    pub fn group(smoothing: f32) -> Self {
        Self::new(NodeKind::Group {
            children: Vec::new(),
            smoothing,
        })
    }

    /// Transform-only node
    pub fn pivot() -> Self {
        Self::new(NodeKind::Pivot)
    }

    // === Placement ===

    /// Starting position; also the first leg's departure point
    pub fn position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Euler rotation in degrees (for planes: the normal)
    pub fn rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Node whose rotation and translation this one follows
    pub fn parent(mut self, parent: NodeId) -> Self {
        self.parent = Some(parent);
        self
    }

    // === Motion ===

    /// Travel speed
    pub fn move_speed(mut self, speed: f32) -> Self {
        self.motion.move_speed = speed;
        self
    }

    /// Spin in degrees per second
    pub fn rotate_speed(mut self, rotate_speed: Vec3) -> Self {
        self.motion.rotate_speed = rotate_speed;
        self
    }

    /// Enable or disable motion
    pub fn moving(mut self, is_moving: bool) -> Self {
        self.motion.is_moving = is_moving;
        self
    }

    /// Travel at constant speed instead of along the easing curve
    pub fn move_by_speed(mut self, move_by_speed: bool) -> Self {
        self.motion.move_by_speed = move_by_speed;
        self
    }

    /// Destination of the first leg
    pub fn target(mut self, target: Vec3) -> Self {
        self.motion.target_position = target;
        self
    }

    /// Interpolation curve
    pub fn easing(mut self, easing: Easing) -> Self {
        self.motion.easing = easing;
        self
    }

    // === Appearance ===

    /// Override the variant's default light config
    pub fn light(mut self, light: LightConfig) -> Self {
        self.light = Some(light);
        self
    }

    // === Variant parameters ===

    /// Corner rounding (boxes only)
    pub fn corner_radius(mut self, radius: f32) -> Self {
        if let NodeKind::Box { corner_radius, .. } = &mut self.kind {
            *corner_radius = radius;
        }
        self
    }

    /// Blend factor (groups and repeaters)
    pub fn smoothing(mut self, k: f32) -> Self {
        match &mut self.kind {
            NodeKind::Group { smoothing, .. } | NodeKind::Repeater { smoothing, .. } => {
                *smoothing = k;
            }
            _ => {}
        }
        self
    }

    /// Lattice period (repeaters only)
    pub fn repeat_dist(mut self, dist: f32) -> Self {
        if let NodeKind::Repeater { repeat_dist, .. } = &mut self.kind {
            *repeat_dist = dist;
        }
        self
    }

    /// Variant being built
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub(crate) fn parent_id(&self) -> Option<NodeId> {
        self.parent
    }

    pub(crate) fn has_light_override(&self) -> bool {
        self.light.is_some()
    }

    /// Finish the node
    ///
    /// Static variants (planes) drop their motion and parent.
    pub fn build(self) -> Node {
        let light = self.light.unwrap_or_else(|| self.kind.default_light());
        let movable = self.kind.is_movable();
        let mut motion = self.motion;
        motion.initial_position = self.position;
        let motion = movable.then_some(motion);

        Node {
            transform: Transform::new(self.position, self.rotation),
            motion,
            parent: if movable { self.parent } else { None },
            light,
            kind: self.kind,
        }
    }
}

/// Builder for a [`Scene`]
#[derive(Debug, Clone)]
#[must_use]
pub struct SceneBuilder {
    light_position: Vec3,
    light_rotate_speed: Vec3,
    rotate_light: bool,
    move_speed: f32,
}

impl Default for SceneBuilder {
    fn default() -> Self {
        SceneBuilder {
            light_position: Scene::DEFAULT_LIGHT_POSITION,
            light_rotate_speed: Vec3::ZERO,
            rotate_light: false,
            move_speed: 0.0,
        }
    }
}

impl SceneBuilder {
    /// Start with the default light at `(5, 10, 0)`
    pub fn new() -> Self {
        Self::default()
    }

    /// Light position
    pub fn light_position(mut self, position: Vec3) -> Self {
        self.light_position = position;
        self
    }

    /// Light orbit speed in radians per second about each axis
    pub fn light_rotate_speed(mut self, speed: Vec3) -> Self {
        self.light_rotate_speed = speed;
        self
    }

    /// Start with the light orbiting
    pub fn rotate_light(mut self, rotate: bool) -> Self {
        self.rotate_light = rotate;
        self
    }

    /// Pan speed applied to the scene velocity
    pub fn move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    /// Finish the scene
    pub fn build(self) -> Scene {
        let mut scene = Scene::new();
        scene.light_position = self.light_position;
        scene.light_rotate_speed = self.light_rotate_speed;
        scene.rotate_light = self.rotate_light;
        scene.move_speed = self.move_speed;
        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_position_follows_position() {
        let node = NodeBuilder::orb(1.0)
            .position(Vec3::new(1.0, 2.0, 3.0))
            .target(Vec3::ZERO)
            .build();
        let motion = node.motion.unwrap();
        assert_eq!(motion.initial_position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(motion.target_position, Vec3::ZERO);
        assert_eq!(node.transform.world_position(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_build_keeps_motion_settings() {
        let node = NodeBuilder::cuboid(Vec3::ONE)
            .position(Vec3::new(0.0, 2.0, 0.0))
            .target(Vec3::new(0.0, -2.0, 0.0))
            .move_speed(0.3)
            .rotate_speed(Vec3::new(0.0, 90.0, 45.0))
            .easing(Easing::EaseInOutQuad)
            .moving(true)
            .build();
        let motion = node.motion.unwrap();
        assert_eq!(motion.initial_position, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(motion.move_speed, 0.3);
        assert_eq!(motion.rotate_speed, Vec3::new(0.0, 90.0, 45.0));
        assert_eq!(motion.easing, Easing::EaseInOutQuad);
        assert!(motion.is_moving);
        assert_eq!(motion.progress(), 0.0);
    }

    #[test]
    fn test_plane_is_static() {
        let node = NodeBuilder::plane().parent(NodeId(0)).moving(true).build();
        assert!(node.motion.is_none());
        assert!(node.parent.is_none());
        assert_eq!(node.light, LightConfig::FLOOR);
        assert_eq!(node.rotation(), Vec3::Y);
    }

    #[test]
    fn test_variant_parameters() {
        let node = NodeBuilder::cuboid(Vec3::ONE).corner_radius(0.2).build();
        assert_eq!(
            node.kind,
            NodeKind::Box {
                size: Vec3::ONE,
                corner_radius: 0.2
            }
        );

        let node = NodeBuilder::repeater(NodeId(1), None)
            .repeat_dist(10.0)
            .smoothing(3.0)
            .build();
        assert_eq!(
            node.kind,
            NodeKind::Repeater {
                primitive: NodeId(1),
                floor: None,
                repeat_dist: 10.0,
                smoothing: 3.0
            }
        );
    }

    #[test]
    fn test_mismatched_parameters_are_ignored() {
        let node = NodeBuilder::orb(0.5).corner_radius(1.0).repeat_dist(2.0).build();
        assert_eq!(node.kind, NodeKind::Orb { radius: 0.5 });
    }

    #[test]
    fn test_light_override() {
        let light = LightConfig::new(0.2, 0.5, 3.0);
        let node = NodeBuilder::octahedron(1.0).light(light).build();
        assert_eq!(node.light, light);
    }

    #[test]
    fn test_scene_builder() {
        let scene = SceneBuilder::new()
            .light_position(Vec3::new(5.0, 15.0, -5.0))
            .light_rotate_speed(Vec3::new(0.0, 2.0, 0.0))
            .rotate_light(true)
            .move_speed(60.0)
            .build();
        assert_eq!(scene.light_position, Vec3::new(5.0, 15.0, -5.0));
        assert!(scene.rotate_light);
        assert_eq!(scene.move_speed, 60.0);
        assert!(scene.objects().is_empty());
    }
}
