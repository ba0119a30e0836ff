//! Integration tests: Composite nodes
//!
//! Verifies smooth groups, the repeater lattice and its floor blend, and the
//! smooth-min operator they share.
//!
//! Author: Moroya Sakamoto

mod common;

use ascii_raymarch::prelude::*;
use common::*;

// ============================================================================
// smooth_min
// ============================================================================

#[test]
fn smooth_min_never_exceeds_min() {
    for &(a, b) in &[(0.0, 0.0), (1.0, 3.0), (-2.0, 0.5), (4.0, 4.1), (10.0, -1.0)] {
        for &k in &[0.1, 1.0, 10.0] {
            let s = smooth_min(a, b, k);
            assert!(s <= a.min(b) + 1e-6, "smooth_min({}, {}, {}) = {}", a, b, k, s);
        }
    }
}

#[test]
fn smooth_min_is_exact_when_far_apart() {
    assert_eq!(smooth_min(0.5, 4.5, 0.1), 0.5);
    assert_eq!(smooth_min(4.5, 0.5, 0.1), 0.5);
}

#[test]
fn smooth_min_blends_equal_inputs() {
    // h = 1/2 gives a dip of k / 4
    assert_close(smooth_min(1.0, 1.0, 2.0), 0.5, 1e-6, "equal inputs");
}

#[test]
fn smooth_min_fold_handles_empty_and_order() {
    assert_eq!(smooth_min_fold(&mut [], 1.0), None);

    let mut a = [3.0, 0.5, 2.0];
    let mut b = [2.0, 3.0, 0.5];
    assert_eq!(smooth_min_fold(&mut a, 1.0), smooth_min_fold(&mut b, 1.0));
}

// ============================================================================
// Groups
// ============================================================================

fn two_cube_group(offset: f32, k: f32) -> (Scene, NodeId) {
    let mut scene = Scene::new();
    let group = scene.add_game_object(NodeBuilder::group(k)).unwrap();
    scene
        .add_to_group(group, cube(0.5, Vec3::new(offset, 0.0, 0.0)))
        .unwrap();
    scene
        .add_to_group(group, cube(0.5, Vec3::new(-offset, 0.0, 0.0)))
        .unwrap();
    scene.on_update(0.0);
    (scene, group)
}

#[test]
fn far_apart_group_is_plain_union() {
    let (scene, group) = two_cube_group(3.0, 0.1);
    assert_close(eval(&scene, group, Vec3::new(2.0, 0.0, 0.0)), 0.5, 1e-5, "near +x cube");
    assert_close(eval(&scene, group, Vec3::new(-3.0, 0.0, 0.0)), -0.5, 1e-5, "inside -x cube");
}

#[test]
fn close_group_blends_below_min() {
    let (scene, group) = two_cube_group(1.0, 1.5);
    let p = Vec3::new(0.0, 1.0, 0.0);
    let single = std::f32::consts::FRAC_1_SQRT_2;

    let d = eval(&scene, group, p);
    assert!(d < single - 0.1, "blend should pull the surface out: {}", d);
}

#[test]
fn empty_group_is_invisible() {
    let mut scene = Scene::new();
    let group = scene.add_game_object(NodeBuilder::group(1.0)).unwrap();
    scene.on_update(0.0);

    assert_eq!(eval(&scene, group, Vec3::ZERO), 0.0);
    assert!(march(&scene, &ray_toward(Vec3::ZERO), &MarchConfig::default()).is_none());
}

#[test]
fn large_group_evaluates_every_member() {
    let mut scene = Scene::new();
    let group = scene.add_game_object(NodeBuilder::group(0.1)).unwrap();
    for i in 0..20 {
        scene
            .add_to_group(group, cube(0.5, Vec3::new(10.0 * i as f32, 0.0, 0.0)))
            .unwrap();
    }
    scene.on_update(0.0);

    assert_close(eval(&scene, group, Vec3::new(30.0, 0.0, 0.0)), -0.5, 1e-5, "4th member");
    assert_close(eval(&scene, group, Vec3::new(190.0, 0.0, 0.0)), -0.5, 1e-5, "last member");
}

#[test]
fn group_members_follow_group_transform() {
    let mut scene = Scene::new();
    let group = scene
        .add_game_object(NodeBuilder::group(0.1).position(Vec3::new(0.0, 4.0, 0.0)))
        .unwrap();
    scene.add_to_group(group, cube(0.5, Vec3::ZERO)).unwrap();
    scene.on_update(0.0);

    assert_close(eval(&scene, group, Vec3::new(0.0, 4.0, 0.0)), -0.5, 1e-5, "moved with group");
}

// ============================================================================
// Repeater
// ============================================================================

fn lattice(floor: bool) -> (Scene, NodeId) {
    let mut scene = Scene::new();
    let cell = scene.insert(cube(1.0, Vec3::ZERO)).unwrap();
    let floor = floor.then(|| scene.insert(NodeBuilder::plane()).unwrap());
    let repeater = scene
        .add_game_object(
            NodeBuilder::repeater(cell, floor)
                .repeat_dist(15.0)
                .smoothing(3.0),
        )
        .unwrap();
    scene.on_update(0.0);
    (scene, repeater)
}

#[test]
fn repeater_is_periodic() {
    let (scene, repeater) = lattice(false);
    for p in test_points() {
        let d = eval(&scene, repeater, p);
        for shift in [Vec3::ONE, Vec3::new(2.0, -1.0, 3.0)] {
            assert_close(
                eval(&scene, repeater, p + 15.0 * shift),
                d,
                1e-3,
                "lattice period",
            );
        }
    }
}

#[test]
fn repeater_copies_primitive_everywhere() {
    let (scene, repeater) = lattice(false);
    assert_close(eval(&scene, repeater, Vec3::new(45.0, -30.0, 15.0)), -1.0, 1e-4, "far cell");
}

#[test]
fn repeater_floor_blend_never_exceeds_either() {
    let (bare, bare_id) = lattice(false);
    let (blended, blended_id) = lattice(true);
    let floor = blended
        .get(NodeId(2))
        .map(|n| matches!(n.kind, NodeKind::Plane))
        .unwrap_or(false);
    assert!(floor, "floor node should be the plane");

    for p in test_points() {
        let lattice_d = eval(&bare, bare_id, p);
        let floor_d = eval(&blended, NodeId(2), p);
        let d = eval(&blended, blended_id, p);
        assert!(d <= lattice_d.min(floor_d) + 1e-4, "blend at {}", p);
    }
}

#[test]
fn repeater_inherits_primitive_light() {
    let mut scene = Scene::new();
    let custom = LightConfig::new(0.3, 0.4, 8.0);
    let cell = scene
        .insert(cube(1.0, Vec3::ZERO).light(custom))
        .unwrap();
    let repeater = scene
        .add_game_object(NodeBuilder::repeater(cell, None))
        .unwrap();
    assert_eq!(scene.node(repeater).light, custom);
}

// ============================================================================
// Normals
// ============================================================================

#[test]
fn cube_face_normal() {
    let mut scene = Scene::new();
    let id = scene.add_game_object(cube(0.5, Vec3::ZERO)).unwrap();
    scene.on_update(0.0);

    assert_vec_close(
        normal(&scene, id, Vec3::new(0.5, 0.1, -0.1), 0.001),
        Vec3::X,
        1e-3,
        "+x face",
    );
    assert_vec_close(
        normal(&scene, id, Vec3::new(0.1, -0.5, 0.2), 0.001),
        Vec3::NEG_Y,
        1e-3,
        "-y face",
    );
}
