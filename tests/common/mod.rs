//! Common test helpers for ascii-raymarch integration tests
//!
//! Author: Moroya Sakamoto

use ascii_raymarch::prelude::*;

// ============================================================================
// Standard test scenes
// ============================================================================

/// Default camera position
#[allow(dead_code)]
pub const CAMERA: Vec3 = Vec3::new(0.0, 0.0, -7.0);

/// Unit orb at the origin, light behind the camera
#[allow(dead_code)]
pub fn orb_scene() -> Scene {
    let mut scene = SceneBuilder::new()
        .light_position(Vec3::new(0.0, 0.0, -10.0))
        .build();
    scene
        .add_game_object(NodeBuilder::orb(1.0))
        .expect("orb scene");
    scene.on_update(0.0);
    scene
}

/// Floor plane only
#[allow(dead_code)]
pub fn floor_scene() -> Scene {
    let mut scene = SceneBuilder::new()
        .light_position(Vec3::new(0.0, 10.0, -7.0))
        .build();
    scene
        .add_game_object(NodeBuilder::plane())
        .expect("floor scene");
    scene.on_update(0.0);
    scene
}

/// Sharp-edged cube with half-extent `h` at `position`
#[allow(dead_code)]
pub fn cube(h: f32, position: Vec3) -> NodeBuilder {
    NodeBuilder::cuboid(Vec3::splat(h)).position(position)
}

/// Ray from the default camera toward `target`
#[allow(dead_code)]
pub fn ray_toward(target: Vec3) -> Ray {
    Ray::new(CAMERA, target - CAMERA)
}

// ============================================================================
// Standard test points
// ============================================================================

/// Scattered sample points around the origin
#[allow(dead_code)]
pub fn test_points() -> Vec<Vec3> {
    vec![
        Vec3::ZERO,
        Vec3::new(1.3, -0.7, 2.1),
        Vec3::new(-4.2, 3.3, 0.4),
        Vec3::new(6.9, 0.1, -5.5),
        Vec3::new(0.25, 0.25, 0.25),
        Vec3::new(-2.0, -6.0, 3.0),
    ]
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Assert two f32 values are close within tolerance
#[allow(dead_code)]
pub fn assert_close(a: f32, b: f32, tol: f32, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff={}, tol={})",
        msg,
        a,
        b,
        (a - b).abs(),
        tol
    );
}

/// Assert two vectors are close within tolerance
#[allow(dead_code)]
pub fn assert_vec_close(a: Vec3, b: Vec3, tol: f32, msg: &str) {
    assert!(
        (a - b).length() < tol,
        "{}: {} vs {} (diff={}, tol={})",
        msg,
        a,
        b,
        (a - b).length(),
        tol
    );
}
