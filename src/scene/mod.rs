//! Scene graph (Deep Fried Edition)
//!
//! A scene is an arena of [`Node`]s addressed by [`NodeId`]. Index 0 is the
//! root pivot: panning the camera moves the root, and every top-level object
//! follows it through its parent link.
//!
//! # Update order
//!
//! [`Scene::on_update`] is the only mutation per frame:
//!
//! 1. the root pans by `-velocity * move_speed * dt`
//! 2. the root world transform is rebuilt
//! 3. every object advances its motion and rebuilds its world transform from
//!    its parent's current world, in insertion order; groups recurse into
//!    their movable children and repeaters into their primitive
//! 4. the light orbits about Z, then X, then Y
//!
//! Rendering borrows the scene immutably, so every transform is final before
//! the first ray is marched.
//!
//! Author: Moroya Sakamoto

mod builder;
mod node;
pub mod presets;

pub use builder::{NodeBuilder, SceneBuilder, DEFAULT_REPEATER_SMOOTHING, DEFAULT_REPEAT_DIST};
pub use node::Node;

use crate::transforms::{rotate_x_point, rotate_y_point, rotate_z_point};
use crate::types::{NodeId, NodeKind};
use glam::Vec3;
use thiserror::Error;

/// Scene construction errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    /// A builder referenced a node that is not in this scene
    #[error("unknown node {0:?}")]
    UnknownNode(NodeId),
    /// `add_to_group` was called on a node that is not a group
    #[error("node {0:?} is not a group")]
    NotAGroup(NodeId),
    /// Adding the node would make a composite contain itself
    #[error("node {0:?} would contain itself")]
    Cycle(NodeId),
}

/// Arena of nodes plus the light and camera pan state
#[derive(Debug, Clone)]
pub struct Scene {
    nodes: Vec<Node>,
    objects: Vec<NodeId>,
    drawables: Vec<NodeId>,
    movables: Vec<NodeId>,
    /// World-space light position
    pub light_position: Vec3,
    /// Light orbit speed in radians per second about each axis
    pub light_rotate_speed: Vec3,
    /// Whether the light orbits this frame
    pub rotate_light: bool,
    /// Camera-relative pan direction, set by input every frame
    pub velocity: Vec3,
    /// Pan speed of the root
    pub move_speed: f32,
}

impl Default for Scene {
    fn default() -> Self {
        Scene::new()
    }
}

impl Scene {
    /// The root pivot every top-level movable follows
    pub const ROOT: NodeId = NodeId(0);

    /// Light position of a freshly built scene
    pub const DEFAULT_LIGHT_POSITION: Vec3 = Vec3::new(5.0, 10.0, 0.0);

    /// Create an empty scene holding only the root pivot
    pub fn new() -> Self {
        Scene {
            nodes: vec![NodeBuilder::pivot().build()],
            objects: Vec::new(),
            drawables: Vec::new(),
            movables: Vec::new(),
            light_position: Self::DEFAULT_LIGHT_POSITION,
            light_rotate_speed: Vec3::ZERO,
            rotate_light: false,
            velocity: Vec3::ZERO,
            move_speed: 0.0,
        }
    }

    // === Construction ===

    /// Add a detached node (group member, repeater primitive or floor)
    ///
    /// The node is not marched on its own; it only contributes through the
    /// composite that references it.
    pub fn insert(&mut self, builder: NodeBuilder) -> Result<NodeId, SceneError> {
        self.validate(&builder)?;

        let inherited_light = match builder.kind() {
            NodeKind::Repeater { primitive, .. } if !builder.has_light_override() => {
                Some(self.node(*primitive).light)
            }
            _ => None,
        };

        let mut node = builder.build();
        if let Some(light) = inherited_light {
            node.light = light;
        }

        let id = NodeId(self.nodes.len());
        log::debug!("scene: insert {} as {:?}", node.kind.name(), id);
        self.nodes.push(node);
        Ok(id)
    }

    /// Add a top-level object
    ///
    /// Drawable objects are marched in insertion order. Movable objects are
    /// reparented to the root so they follow the camera pan.
    pub fn add_game_object(&mut self, builder: NodeBuilder) -> Result<NodeId, SceneError> {
        let id = self.insert(builder)?;
        self.objects.push(id);

        let root_world = self.root().transform.world;
        let node = &mut self.nodes[id.index()];
        if node.is_drawable() {
            self.drawables.push(id);
        }
        if node.is_movable() {
            node.parent = Some(Self::ROOT);
            node.transform.update_world(Some(root_world));
            self.movables.push(id);
        }
        Ok(id)
    }

    /// Add a member to a smooth group
    ///
    /// The member keeps whatever parent the builder set.
    pub fn add_to_group(
        &mut self,
        group: NodeId,
        builder: NodeBuilder,
    ) -> Result<NodeId, SceneError> {
        if group.index() >= self.nodes.len() {
            return Err(SceneError::UnknownNode(group));
        }
        if !matches!(self.node(group).kind, NodeKind::Group { .. }) {
            return Err(SceneError::NotAGroup(group));
        }
        self.validate(&builder)?;
        if Self::references(builder.kind()).any(|r| self.reaches(r, group)) {
            return Err(SceneError::Cycle(group));
        }

        let id = self.insert(builder)?;
        if let NodeKind::Group { children, .. } = &mut self.nodes[group.index()].kind {
            children.push(id);
        }
        Ok(id)
    }

    fn validate(&self, builder: &NodeBuilder) -> Result<(), SceneError> {
        let known = |id: NodeId| {
            if id.index() < self.nodes.len() {
                Ok(())
            } else {
                Err(SceneError::UnknownNode(id))
            }
        };
        if let Some(parent) = builder.parent_id() {
            known(parent)?;
        }
        Self::references(builder.kind()).try_for_each(known)
    }

    /// Nodes a composite evaluates (primitive, floor, members)
    fn references(kind: &NodeKind) -> impl Iterator<Item = NodeId> + '_ {
        let (linked, children): ([Option<NodeId>; 2], &[NodeId]) = match kind {
            NodeKind::Repeater {
                primitive, floor, ..
            } => ([Some(*primitive), *floor], &[]),
            NodeKind::Group { children, .. } => ([None, None], children.as_slice()),
            _ => ([None, None], &[]),
        };
        linked.into_iter().flatten().chain(children.iter().copied())
    }

    /// Whether `target` is `from` or one of its composite descendants
    fn reaches(&self, from: NodeId, target: NodeId) -> bool {
        if from == target {
            return true;
        }
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            for next in Self::references(&self.node(id).kind) {
                if next == target {
                    return true;
                }
                stack.push(next);
            }
        }
        false
    }

    // === Access ===

    /// Node by id
    ///
    /// # Panics
    /// If `id` did not come from this scene.
    #[inline(always)]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Node by id, if present
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Mutable node by id, if present
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Root pivot
    pub fn root(&self) -> &Node {
        &self.nodes[Self::ROOT.index()]
    }

    /// Top-level objects in insertion order
    pub fn objects(&self) -> &[NodeId] {
        &self.objects
    }

    /// Top-level drawables in march order
    pub fn drawables(&self) -> &[NodeId] {
        &self.drawables
    }

    /// Top-level movables
    pub fn movables(&self) -> &[NodeId] {
        &self.movables
    }

    /// Every node in the arena, root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the scene has no top-level objects
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Whether a node contributes any surface
    ///
    /// A group counts only if one of its members does, and a repeater only if
    /// its primitive or its floor does, so empty groups nested at any depth
    /// read as empty space.
    pub fn has_geometry(&self, id: NodeId) -> bool {
        let node = self.node(id);
        match &node.kind {
            NodeKind::Group { children, .. } => children.iter().any(|&c| self.has_geometry(c)),
            NodeKind::Repeater {
                primitive, floor, ..
            } => self.has_geometry(*primitive) || floor.is_some_and(|f| self.has_geometry(f)),
            _ => node.has_geometry(),
        }
    }

    /// Signed distance of one node at a world-space point
    #[inline]
    pub fn sdf(&self, id: NodeId, point: Vec3) -> f32 {
        crate::eval::eval(self, id, point)
    }

    // === Simulation ===

    /// Advance the whole scene by `dt` seconds
    pub fn on_update(&mut self, dt: f32) {
        let root = &mut self.nodes[Self::ROOT.index()];
        root.transform.position -= self.velocity * self.move_speed * dt;
        root.transform.update_world(None);

        for i in 0..self.objects.len() {
            let id = self.objects[i];
            self.update_node(id, dt);
        }

        if self.rotate_light {
            let spin = self.light_rotate_speed * dt;
            let mut light = self.light_position;
            light = rotate_z_point(light, spin.z);
            light = rotate_x_point(light, spin.x);
            light = rotate_y_point(light, spin.y);
            self.light_position = light;
        }
    }

    fn update_node(&mut self, id: NodeId, dt: f32) {
        let parent_world = self.nodes[id.index()]
            .parent
            .map(|p| self.nodes[p.index()].transform.world);
        self.nodes[id.index()].step(parent_world, dt);

        match &self.nodes[id.index()].kind {
            NodeKind::Group { children, .. } => {
                let children = children.clone();
                for child in children {
                    if self.nodes[child.index()].is_movable() {
                        self.update_node(child, dt);
                    }
                }
            }
            NodeKind::Repeater { primitive, .. } => {
                let primitive = *primitive;
                self.update_node(primitive, dt);
            }
            _ => {}
        }
    }
}
