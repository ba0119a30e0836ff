//! Preset scenes
//!
//! Three demo scenes sharing one cast: a spinning octahedron, a bobbing
//! capsule, a tumbling rounded box and a drifting orb over a floor.
//!
//! Author: Moroya Sakamoto

use super::{NodeBuilder, Scene, SceneBuilder, SceneError};
use crate::animation::Easing;
use crate::types::{LightConfig, NodeId, NodeKind};
use glam::Vec3;

/// Light config of the preset octahedron
const OCTAHEDRON_LIGHT: LightConfig = LightConfig::new(0.2, 0.5, 3.0);

fn preset_scene(light: Vec3) -> Scene {
    SceneBuilder::new()
        .light_position(light)
        .light_rotate_speed(Vec3::new(0.0, 2.0, 0.0))
        .move_speed(60.0)
        .build()
}

fn octahedron() -> NodeBuilder {
    NodeBuilder::octahedron(1.0)
        .light(OCTAHEDRON_LIGHT)
        .position(Vec3::new(3.0, 1.0, 0.0))
        .rotate_speed(Vec3::new(0.0, 45.0, 0.0))
        .moving(true)
}

fn capsule() -> NodeBuilder {
    NodeBuilder::capsule(1.0, 0.5)
        .position(Vec3::new(-4.0, -2.0, 3.0))
        .target(Vec3::new(-4.0, 2.0, 0.0))
        .move_speed(0.5)
        .easing(Easing::EaseInOutQuad)
        .moving(true)
}

fn rounded_box() -> NodeBuilder {
    NodeBuilder::cuboid(Vec3::new(0.5, 1.5, 0.2))
        .corner_radius(0.2)
        .position(Vec3::new(-2.0, 0.0, 1.0))
        .target(Vec3::new(2.0, 0.0, 1.0))
        .move_speed(0.1)
        .easing(Easing::EaseInOutQuad)
        .rotate_speed(Vec3::new(45.0, 15.0, 0.0))
        .moving(true)
}

fn orb() -> NodeBuilder {
    NodeBuilder::orb(0.4)
        .target(Vec3::new(-2.0, -2.0, 2.0))
        .move_speed(0.1)
        .easing(Easing::EaseInOutCubic)
        .moving(true)
}

/// Plain union of the cast over a floor
pub fn scene_one() -> Result<Scene, SceneError> {
    let mut scene = preset_scene(Vec3::new(5.0, 15.0, -5.0));

    scene.add_game_object(octahedron())?;
    scene.add_game_object(NodeBuilder::plane())?;
    scene.add_game_object(capsule())?;
    scene.add_game_object(rounded_box())?;
    scene.add_game_object(orb())?;

    log::debug!("preset: scene one with {} objects", scene.objects().len());
    Ok(scene)
}

/// The same cast blended into one smooth group (`k = 1.5`)
///
/// Members have no parent: the group's own transform already carries them,
/// so they pan once, with the rest of the scene.
pub fn scene_two() -> Result<Scene, SceneError> {
    let mut scene = preset_scene(Vec3::new(5.0, 15.0, -5.0));

    let group = scene.add_game_object(NodeBuilder::group(1.5))?;
    scene.add_to_group(group, rounded_box())?;
    scene.add_to_group(group, capsule())?;
    scene.add_to_group(group, orb())?;
    scene.add_to_group(group, octahedron())?;
    scene.add_to_group(group, NodeBuilder::plane())?;

    log::debug!("preset: scene two with one group");
    Ok(scene)
}

/// A bobbing box repeated every 10 units, melted into a floor
pub fn scene_three() -> Result<Scene, SceneError> {
    let mut scene = preset_scene(Vec3::new(5.0, 15.0, -15.0));

    let cell = scene.insert(
        NodeBuilder::cuboid(Vec3::new(0.5, 1.3, 1.2))
            .position(Vec3::new(0.0, 2.0, 0.0))
            .target(Vec3::new(0.0, -2.0, 0.0))
            .move_speed(0.3)
            .rotate_speed(Vec3::new(0.0, 90.0, 45.0))
            .easing(Easing::EaseInOutQuad)
            .moving(true),
    )?;
    let floor = scene.insert(NodeBuilder::plane())?;

    scene.add_game_object(
        NodeBuilder::repeater(cell, Some(floor))
            .smoothing(3.0)
            .repeat_dist(10.0)
            .rotate_speed(Vec3::new(15.0, 0.0, 0.0))
            .easing(Easing::EaseInOutCubic)
            .moving(true),
    )?;

    log::debug!("preset: scene three, repeating {:?}", cell);
    Ok(scene)
}

/// Every preset, in cycling order
pub fn all() -> Result<Vec<Scene>, SceneError> {
    Ok(vec![scene_one()?, scene_two()?, scene_three()?])
}

/// Number of drawable nodes a scene marches, counting group members and
/// repeater primitives once
pub fn drawable_count(scene: &Scene) -> usize {
    fn count(scene: &Scene, id: NodeId) -> usize {
        let node = scene.node(id);
        match &node.kind {
            NodeKind::Group { children, .. } => {
                children.iter().map(|&c| count(scene, c)).sum()
            }
            NodeKind::Repeater { primitive, floor, .. } => {
                count(scene, *primitive) + floor.map_or(0, |f| count(scene, f))
            }
            _ => usize::from(node.is_drawable()),
        }
    }
    scene.drawables().iter().map(|&id| count(scene, id)).sum()
}
