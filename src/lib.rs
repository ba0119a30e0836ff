//! # ascii-raymarch
//!
//! Signed distance field scenes sphere-traced into a character grid, one
//! frame at a time.
//!
//! ## Features
//!
//! - **Primitives**: Box (rounded), Capsule, Octahedron, Orb, Plane
//! - **Composites**: Smooth groups, endless repetition blended into a floor
//! - **Scene Graph**: Arena of nodes with parent links, easing-driven
//!   ping-pong motion, an orbiting light and a panning root
//! - **Rendering**: Parallel per-row sphere tracing, ambient + diffuse +
//!   specular shading, a 10-level glyph ramp
//! - **Overlay**: Chaos-game fractal stamped over the frame
//!
//! ## Example
//!
//! ```rust
//! use ascii_raymarch::prelude::*;
//!
//! // One orb at the origin
//! let mut scene = Scene::new();
//! scene.add_game_object(NodeBuilder::orb(1.0)).unwrap();
//! scene.on_update(0.016);
//!
//! // March the centre ray from the default camera
//! let ray = Ray::new(Vec3::new(0.0, 0.0, -7.0), Vec3::Z);
//! let hit = march(&scene, &ray, &MarchConfig::default()).unwrap();
//! assert!((hit.distance - 6.0).abs() < 0.15);
//!
//! // Render a small frame
//! let mut canvas = Canvas::new(40, 12, Vec3::new(0.0, 0.0, -7.0)).unwrap();
//! canvas.on_update(&scene, &MarchConfig::default());
//! let text = canvas.to_bordered_string("");
//! assert!(text.starts_with('┌'));
//! ```
//!
//! ## Author
//!
//! Moroya Sakamoto

#![warn(missing_docs)]

pub mod animation;
pub mod app;
pub mod canvas;
pub mod chaos;
pub mod config;
pub mod eval;
pub mod modifiers;
pub mod operations;
pub mod primitives;
pub mod raycast;
pub mod scene;
pub mod transforms;
pub mod types;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::animation::{Easing, Motion};
    pub use crate::app::{Action, App, AppError, FrameClock};
    pub use crate::canvas::{Canvas, CanvasError, GLYPH_RAMP};
    pub use crate::chaos::{Chaos, ChaosPreset};
    pub use crate::config::{AppConfig, ConfigError};
    pub use crate::eval::{eval, normal};
    pub use crate::operations::{smooth_min, smooth_min_fold};
    pub use crate::raycast::{calculate_light, march, march_brightness, MarchConfig};
    pub use crate::scene::{presets, Node, NodeBuilder, Scene, SceneBuilder, SceneError};
    pub use crate::transforms::Transform;
    pub use crate::types::{Hit, LightConfig, NodeId, NodeKind, Ray};
    pub use glam::Vec3;
}

// Re-exports for convenience
pub use canvas::Canvas;
pub use eval::eval;
pub use scene::{NodeBuilder, Scene};
