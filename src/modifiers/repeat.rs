//! Repetition modifier for SDFs (Deep Fried Edition)
//!
//! # Deep Fried Optimizations
//! - **Single Scale Factor**: One reciprocal for all three axes.
//! - **Forced Inlining**: `#[inline(always)]`.
//!
//! Author: Moroya Sakamoto

use glam::Vec3;

/// Infinite repetition along all axes with a uniform period
///
/// Folds the point into the tile centred at the origin:
/// `q = p - s * floor((p + s/2) / s)` per axis, so every component of the
/// result lies in `[-s/2, s/2)`.
#[inline(always)]
pub fn modifier_repeat_uniform(point: Vec3, spacing: f32) -> Vec3 {
    let half = Vec3::splat(0.5 * spacing);
    point - spacing * ((point + half) / spacing).floor()
}
