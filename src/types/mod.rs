//! Core types for ascii-raymarch
//!
//! Defines the scene node variants and their lighting parameters.
//!
//! Author: Moroya Sakamoto

use glam::Vec3;
use serde::{Deserialize, Serialize};

mod containers;

pub use containers::{Hit, Ray};

/// Stable index of a node in a scene's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Arena index
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Surface response of a drawable node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightConfig {
    /// Constant term
    pub ambient: f32,
    /// Weight of the Lambert term
    pub diffuse_contrib: f32,
    /// Specular exponent; `0` disables the specular term
    pub specular_pow: f32,
}

impl LightConfig {
    /// Glossy default used by solids and groups
    pub const SOLID: LightConfig = LightConfig {
        ambient: 0.0,
        diffuse_contrib: 0.7,
        specular_pow: 32.0,
    };

    /// Matte default used by floors
    pub const FLOOR: LightConfig = LightConfig {
        ambient: 0.2,
        diffuse_contrib: 0.5,
        specular_pow: 0.0,
    };

    /// Create a light config
    pub const fn new(ambient: f32, diffuse_contrib: f32, specular_pow: f32) -> Self {
        LightConfig {
            ambient,
            diffuse_contrib,
            specular_pow,
        }
    }
}

impl Default for LightConfig {
    fn default() -> Self {
        LightConfig::SOLID
    }
}

/// Scene node variant
///
/// Each variant carries only the parameters of its distance function. The
/// placement (transform, motion, parent) lives on the enclosing `Node`.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Box with optional rounded corners
    Box {
        /// Half-extents
        size: Vec3,
        /// Corner rounding radius
        corner_radius: f32,
    },
    /// Capsule along local Y
    Capsule {
        /// Length of the core segment
        height: f32,
        /// Radius
        radius: f32,
    },
    /// Regular octahedron
    Octahedron {
        /// Centre-to-vertex distance
        size: f32,
    },
    /// Sphere
    Orb {
        /// Radius
        radius: f32,
    },
    /// Infinite static floor; normal is the node rotation vector
    Plane,
    /// Infinite lattice of one primitive, optionally blended with a floor
    Repeater {
        /// Repeated node
        primitive: NodeId,
        /// Floor blended against the lattice, evaluated untransformed
        floor: Option<NodeId>,
        /// Lattice period on every axis
        repeat_dist: f32,
        /// Blend factor against the floor
        smoothing: f32,
    },
    /// Smooth union of several nodes
    Group {
        /// Member nodes, in insertion order
        children: Vec<NodeId>,
        /// Blend factor
        smoothing: f32,
    },
    /// Transform only, no geometry (the scene root is a pivot)
    Pivot,
}

impl NodeKind {
    /// Whether this variant exposes a distance function
    #[inline(always)]
    pub fn is_drawable(&self) -> bool {
        !matches!(self, NodeKind::Pivot)
    }

    /// Whether this variant carries motion and follows a parent
    #[inline(always)]
    pub fn is_movable(&self) -> bool {
        !matches!(self, NodeKind::Plane)
    }

    /// Whether evaluating this variant describes actual geometry
    ///
    /// An empty group evaluates to `0.0`, which must read as empty space
    /// rather than a surface.
    #[inline(always)]
    pub fn has_geometry(&self) -> bool {
        match self {
            NodeKind::Pivot => false,
            NodeKind::Group { children, .. } => !children.is_empty(),
            _ => true,
        }
    }

    /// Light config a node of this variant starts with
    pub fn default_light(&self) -> LightConfig {
        match self {
            NodeKind::Plane => LightConfig::FLOOR,
            _ => LightConfig::SOLID,
        }
    }

    /// Short variant name for logs and listings
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Box { .. } => "box",
            NodeKind::Capsule { .. } => "capsule",
            NodeKind::Octahedron { .. } => "octahedron",
            NodeKind::Orb { .. } => "orb",
            NodeKind::Plane => "plane",
            NodeKind::Repeater { .. } => "repeater",
            NodeKind::Group { .. } => "group",
            NodeKind::Pivot => "pivot",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities() {
        assert!(!NodeKind::Pivot.is_drawable());
        assert!(NodeKind::Pivot.is_movable());
        assert!(NodeKind::Plane.is_drawable());
        assert!(!NodeKind::Plane.is_movable());
        assert!(NodeKind::Orb { radius: 1.0 }.is_movable());
    }

    #[test]
    fn test_empty_group_has_no_geometry() {
        let empty = NodeKind::Group {
            children: Vec::new(),
            smoothing: 1.0,
        };
        assert!(empty.is_drawable());
        assert!(!empty.has_geometry());
        let full = NodeKind::Group {
            children: vec![NodeId(1)],
            smoothing: 1.0,
        };
        assert!(full.has_geometry());
    }

    #[test]
    fn test_default_lights() {
        assert_eq!(NodeKind::Plane.default_light(), LightConfig::FLOOR);
        assert_eq!(
            NodeKind::Octahedron { size: 1.0 }.default_light(),
            LightConfig::SOLID
        );
    }
}
