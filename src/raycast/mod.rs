//! Raymarching for scenes (Deep Fried Edition)
//!
//! Sphere tracing of camera rays against a [`Scene`](crate::scene::Scene)
//! plus the per-hit shading model.
//!
//! # Deep Fried Optimizations
//!
//! - **Early Exit**: The drawable scan stops on the first sample inside the
//!   hit threshold.
//! - **Iteration Limits**: Prevents infinite loops in degenerate SDFs.
//! - **Hit-Node Normals**: Normals difference only the hit node, not the
//!   whole scene.
//!
//! Author: Moroya Sakamoto

mod march;

pub use march::{march, march_brightness, MarchConfig};

use crate::types::LightConfig;
use glam::Vec3;

/// Reflect `incident` about `normal`: `i - 2 (i . n) n`
#[inline(always)]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * incident.dot(normal) * normal
}

/// Ambient + diffuse + specular response of a surface
///
/// # Arguments
/// * `ray_dir` - Direction of the camera ray
/// * `normal` - Surface normal
/// * `light_dir` - Unit vector from the surface toward the light
/// * `light` - Surface response
///
/// The specular term compares the ray direction against the reflected
/// light direction and is skipped entirely when `specular_pow` is zero.
#[inline]
pub fn calculate_light(ray_dir: Vec3, normal: Vec3, light_dir: Vec3, light: &LightConfig) -> f32 {
    let diffuse = light.diffuse_contrib * normal.dot(light_dir).max(0.0);

    let specular = if light.specular_pow > 0.0 {
        ray_dir
            .dot(reflect(light_dir, normal))
            .max(0.0)
            .powf(light.specular_pow)
    } else {
        0.0
    };

    light.ambient + diffuse + specular
}
