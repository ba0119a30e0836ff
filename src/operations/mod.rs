//! Blending operations for SDFs (Deep Fried Edition)
//!
//! Groups and repeater floors both melt their distances through the same
//! polynomial smooth minimum.
//!
//! # Deep Fried Optimizations
//! - **Forced Inlining**: All functions use `#[inline(always)]`.
//! - **Branchless Smooth**: No safety checks for `k <= 0`.
//!
//! Author: Moroya Sakamoto

mod smooth;

pub use smooth::{smooth_min, smooth_min_fold};
