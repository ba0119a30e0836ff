//! Smooth blending for SDFs (Deep Fried Edition)
//!
//! # Deep Fried Optimizations
//! - **Branchless**: No `k <= 0` guard. Callers guarantee `k > 0`.
//! - **Forced Inlining**: `#[inline(always)]` guarantees no call overhead.
//!
//! Author: Moroya Sakamoto

#[inline(always)]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Polynomial smooth minimum, mix form
///
/// `h = clamp(0.5 + 0.5 (a - b) / k, 0, 1)`, then `lerp(a, b, h) - k h (1 - h)`.
///
/// Degenerates to `min(a, b)` as `k → 0`. `k == 0` divides by zero and is a
/// caller error; no guard is taken on the hot path.
#[inline(always)]
pub fn smooth_min(a: f32, b: f32, k: f32) -> f32 {
    let h = (0.5 + 0.5 * (a - b) / k).clamp(0.0, 1.0);
    lerp(a, b, h) - k * h * (1.0 - h)
}

/// Fold a slice of distances through [`smooth_min`], smallest first
///
/// Sorts `distances` in place (ascending, `total_cmp`) and folds left to
/// right. Returns `None` for an empty slice.
#[inline]
pub fn smooth_min_fold(distances: &mut [f32], k: f32) -> Option<f32> {
    distances.sort_unstable_by(|a, b| a.total_cmp(b));
    let (first, rest) = distances.split_first()?;
    Some(rest.iter().fold(*first, |acc, &d| smooth_min(acc, d, k)))
}
