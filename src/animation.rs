//! Node motion: easing and ping-pong travel
//!
//! A movable node travels from `initial_position` toward `target_position`
//! either at a fixed speed or along an easing curve, swaps the two endpoints
//! on arrival, and so bounces between them forever. Rotation accumulates
//! independently at `rotate_speed` degrees per second.
//!
//! Author: Moroya Sakamoto

use crate::transforms::Transform;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Squared distance below which a speed-driven node counts as arrived
pub const ARRIVAL_EPSILON_SQ: f32 = 1e-3;

/// Interpolation curve between two positions
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub enum Easing {
    /// Straight lerp
    #[default]
    Linear,
    /// Quadratic ease-in
    EaseInQuad,
    /// Quadratic ease-out
    EaseOutQuad,
    /// Quadratic ease-in-out
    EaseInOutQuad,
    /// Cubic ease-in
    EaseInCubic,
    /// Cubic ease-out
    EaseOutCubic,
    /// Cubic ease-in-out
    EaseInOutCubic,
    /// Forward then backward within one sweep of `t`
    PingPong,
    /// User-supplied curve `(start, end, t) -> position`
    #[serde(skip)]
    Custom(fn(Vec3, Vec3, f32) -> Vec3),
}

/// Named curves compare by name; custom curves never compare equal, not
/// even to themselves
impl PartialEq for Easing {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Easing::Custom(_), _) | (_, Easing::Custom(_)) => false,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}

impl Easing {
    /// Interpolate from `start` to `end` at progress `t`
    #[inline]
    pub fn apply(self, start: Vec3, end: Vec3, t: f32) -> Vec3 {
        let eased = match self {
            Easing::Custom(f) => return f(start, end, t),
            Easing::Linear => t,
            Easing::EaseInQuad => t * t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::EaseInCubic => t * t * t,
            Easing::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::PingPong => 1.0 - ((t * t) % 2.0 - 1.0).abs(),
        };
        start.lerp(end, eased)
    }
}

/// Motion state embedded in every movable node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    /// Units per second (speed mode) or progress per second (easing mode)
    pub move_speed: f32,
    /// Degrees per second about each axis
    pub rotate_speed: Vec3,
    /// Master switch; a stopped node neither moves nor rotates
    pub is_moving: bool,
    /// Travel at `move_speed` instead of along `easing`
    pub move_by_speed: bool,
    /// Current departure point
    pub initial_position: Vec3,
    /// Current destination
    pub target_position: Vec3,
    /// Interpolation curve for easing mode
    pub easing: Easing,
    t: f32,
}

impl Default for Motion {
    fn default() -> Self {
        Motion {
            move_speed: 0.0,
            rotate_speed: Vec3::ZERO,
            is_moving: false,
            move_by_speed: false,
            initial_position: Vec3::ZERO,
            target_position: Vec3::ZERO,
            easing: Easing::Linear,
            t: 0.0,
        }
    }
}

impl Motion {
    /// Normalised progress along the current leg (easing mode only)
    pub fn progress(&self) -> f32 {
        self.t
    }

    /// Advance one frame, writing the new position and rotation into
    /// `transform`
    pub fn advance(&mut self, transform: &mut Transform, dt: f32) {
        if !self.is_moving {
            return;
        }

        transform.rotation += self.rotate_speed * dt;

        if self.move_by_speed {
            let heading = (self.target_position - transform.position).normalize_or_zero();
            transform.position += heading * self.move_speed * dt;
            if self.target_position.distance_squared(transform.position) < ARRIVAL_EPSILON_SQ {
                self.swap_endpoints();
            }
        } else {
            self.t += dt * self.move_speed;
            if self.t >= 1.0 {
                self.swap_endpoints();
                self.t = 0.0;
            }
            transform.position = self
                .easing
                .apply(self.initial_position, self.target_position, self.t);
        }
    }

    #[inline]
    fn swap_endpoints(&mut self) {
        std::mem::swap(&mut self.initial_position, &mut self.target_position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mover(target: Vec3, speed: f32, by_speed: bool) -> (Motion, Transform) {
        let motion = Motion {
            move_speed: speed,
            is_moving: true,
            move_by_speed: by_speed,
            target_position: target,
            ..Default::default()
        };
        (motion, Transform::default())
    }

    #[test]
    fn test_easing_endpoints() {
        let a = Vec3::new(-1.0, 2.0, 0.0);
        let b = Vec3::new(3.0, 0.0, 1.0);
        for easing in [
            Easing::Linear,
            Easing::EaseInQuad,
            Easing::EaseOutQuad,
            Easing::EaseInOutQuad,
            Easing::EaseInCubic,
            Easing::EaseOutCubic,
            Easing::EaseInOutCubic,
        ] {
            assert!((easing.apply(a, b, 0.0) - a).length() < 1e-5, "{:?}", easing);
            assert!((easing.apply(a, b, 1.0) - b).length() < 1e-5, "{:?}", easing);
        }
    }

    #[test]
    fn test_easing_midpoints() {
        let a = Vec3::ZERO;
        let b = Vec3::X;
        assert!((Easing::EaseInQuad.apply(a, b, 0.5).x - 0.25).abs() < 1e-6);
        assert!((Easing::EaseOutQuad.apply(a, b, 0.5).x - 0.75).abs() < 1e-6);
        assert!((Easing::EaseInOutQuad.apply(a, b, 0.5).x - 0.5).abs() < 1e-6);
        assert!((Easing::EaseInOutCubic.apply(a, b, 0.5).x - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_ping_pong_curve() {
        let a = Vec3::ZERO;
        let b = Vec3::X;
        assert!(Easing::PingPong.apply(a, b, 0.0).x.abs() < 1e-6);
        assert!((Easing::PingPong.apply(a, b, 1.0).x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_custom_easing() {
        fn snap(_: Vec3, end: Vec3, _: f32) -> Vec3 {
            end
        }
        let custom = Easing::Custom(snap);
        let copy = custom;
        assert_ne!(custom, copy);
        assert_ne!(custom, Easing::Linear);
        assert_eq!(Easing::PingPong, Easing::PingPong);
        assert_ne!(Easing::EaseInQuad, Easing::EaseOutQuad);
        let p = custom.apply(Vec3::ZERO, Vec3::ONE, 0.1);
        assert_eq!(p, Vec3::ONE);
    }

    #[test]
    fn test_stopped_node_is_untouched() {
        let (mut motion, mut transform) = mover(Vec3::X, 1.0, false);
        motion.is_moving = false;
        motion.rotate_speed = Vec3::splat(90.0);
        motion.advance(&mut transform, 0.5);
        assert_eq!(transform.position, Vec3::ZERO);
        assert_eq!(transform.rotation, Vec3::ZERO);
    }

    #[test]
    fn test_rotation_accumulates() {
        let (mut motion, mut transform) = mover(Vec3::ZERO, 0.0, false);
        motion.rotate_speed = Vec3::new(0.0, 45.0, 10.0);
        motion.advance(&mut transform, 2.0);
        assert!((transform.rotation - Vec3::new(0.0, 90.0, 20.0)).length() < 1e-5);
    }

    #[test]
    fn test_eased_ping_pong_swaps_without_overshoot() {
        let (mut motion, mut transform) = mover(Vec3::X, 1.0, false);
        let dt = 0.1;
        let mut swapped = false;
        for _ in 0..25 {
            motion.advance(&mut transform, dt);
            assert!(transform.position.x <= 1.0 + dt + 1e-5);
            assert!(transform.position.x >= -1e-5);
            if motion.target_position == Vec3::ZERO {
                swapped = true;
            }
        }
        assert!(swapped, "endpoints never swapped");
    }

    #[test]
    fn test_swap_lands_on_old_target_then_returns() {
        let (mut motion, mut transform) = mover(Vec3::X, 1.0, false);
        motion.advance(&mut transform, 0.6);
        assert!((transform.position.x - 0.6).abs() < 1e-5);
        motion.advance(&mut transform, 0.6);
        // t passed 1.0: swapped and restarted from the old target
        assert_eq!(motion.initial_position, Vec3::X);
        assert_eq!(motion.target_position, Vec3::ZERO);
        assert!((transform.position.x - 1.0).abs() < 1e-5);
        motion.advance(&mut transform, 0.5);
        assert!((transform.position.x - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_speed_mode_arrives_and_swaps() {
        let (mut motion, mut transform) = mover(Vec3::new(0.0, 0.0, 1.0), 1.0, true);
        for _ in 0..10 {
            motion.advance(&mut transform, 0.1);
        }
        assert!(transform.position.distance(Vec3::new(0.0, 0.0, 1.0)) < 0.05);
        assert_eq!(motion.target_position, Vec3::ZERO);
    }

    #[test]
    fn test_speed_mode_at_target_does_not_nan() {
        let (mut motion, mut transform) = mover(Vec3::ZERO, 1.0, true);
        motion.advance(&mut transform, 0.1);
        assert!(transform.position.is_finite());
    }
}
