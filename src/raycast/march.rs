//! Sphere tracing against a scene (Deep Fried Edition)
//!
//! One march per canvas cell. Every step scans the scene's top-level
//! drawables in insertion order and stops the moment the running minimum
//! falls inside the hit threshold, so later drawables are not evaluated on
//! the step that hits.
//!
//! Author: Moroya Sakamoto

use super::calculate_light;
use crate::eval::{eval, normal};
use crate::scene::Scene;
use crate::types::{Hit, NodeId, Ray};
use serde::{Deserialize, Serialize};

/// Raymarch configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarchConfig {
    /// Maximum number of marching steps
    pub max_steps: u32,
    /// Distance past which a ray counts as escaped; also the depth fade range
    pub max_distance: f32,
    /// Distance at or below which a sample counts as a hit
    pub hit_threshold: f32,
    /// Offset for the central-difference normal
    pub normal_epsilon: f32,
}

impl Default for MarchConfig {
    fn default() -> Self {
        MarchConfig {
            max_steps: 100,
            max_distance: 100.0,
            hit_threshold: 0.1,
            normal_epsilon: 0.001,
        }
    }
}

/// March a ray through a scene (Deep Fried)
///
/// # Arguments
/// * `scene` - Scene with up-to-date world transforms
/// * `ray` - Camera ray; `direction` must be normalized
/// * `config` - Step budget and thresholds
///
/// # Returns
/// Shaded hit, or `None` if the ray escaped or ran out of steps
pub fn march(scene: &Scene, ray: &Ray, config: &MarchConfig) -> Option<Hit> {
    let mut distance = 0.0f32;

    for step in 0..config.max_steps {
        let point = ray.at(distance);
        let mut closest = f32::MAX;
        let mut hit_node: Option<NodeId> = None;

        for &id in scene.drawables() {
            if !scene.has_geometry(id) {
                continue;
            }
            let d = eval(scene, id, point);
            if d < closest {
                closest = d;
                hit_node = Some(id);
            }
            if closest <= config.hit_threshold {
                if let Some(node) = hit_node {
                    return Some(shade(scene, ray, config, point, distance, step, node));
                }
            }
        }

        // Nothing to hit at all
        if hit_node.is_none() {
            return None;
        }

        if distance >= config.max_distance {
            return None;
        }
        distance += closest;
    }

    None
}

/// Brightness of the first hit along a ray, `0.0` on a miss
///
/// Not clamped: callers quantising to glyphs clamp to `[0, 1]` themselves.
#[inline]
pub fn march_brightness(scene: &Scene, ray: &Ray, config: &MarchConfig) -> f32 {
    march(scene, ray, config).map_or(0.0, |hit| hit.brightness)
}

fn shade(
    scene: &Scene,
    ray: &Ray,
    config: &MarchConfig,
    point: glam::Vec3,
    distance: f32,
    steps: u32,
    node: NodeId,
) -> Hit {
    let n = normal(scene, node, point, config.normal_epsilon);
    let light_dir = (scene.light_position - point).normalize_or_zero();
    let light = calculate_light(ray.direction, n, light_dir, &scene.node(node).light);
    let fade = 1.0 - distance / config.max_distance;

    Hit {
        distance,
        point,
        normal: n,
        steps,
        node,
        brightness: light * fade,
    }
}
