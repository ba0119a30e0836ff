//! Chaos-game overlay
//!
//! A point that jumps a fixed fraction of the way toward a randomly chosen
//! anchor every frame. Over many frames its trail traces a fractal (a
//! Sierpinski triangle for three anchors at one half). It lives in canvas
//! cell coordinates and is stamped on top of the rendered frame.
//!
//! Author: Moroya Sakamoto

use crate::canvas::Canvas;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Glyph of the wandering point
pub const POINT_GLYPH: char = '▲';
/// Glyph of each anchor
pub const ANCHOR_GLYPH: char = 'X';

/// Named anchor layouts sized from the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChaosPreset {
    /// Three corners at one half
    Sierpinski,
    /// Four corners at one half
    Square,
    /// Five points at 0.55
    Pentagon,
}

impl ChaosPreset {
    /// Build the overlay for a canvas of the given size
    ///
    /// Anchors that fall off a small canvas are reported once here and
    /// skipped silently when drawing.
    pub fn build(self, width: usize, height: usize) -> Chaos {
        let chaos = self.layout(width as f32, height as f32);
        let outside = chaos.anchors_outside(width, height);
        if outside > 0 {
            log::warn!(
                "chaos: {} of {} {:?} anchors lie outside the {}x{} canvas",
                outside,
                chaos.anchors.len(),
                self,
                width,
                height
            );
        }
        chaos
    }

    fn layout(self, w: f32, h: f32) -> Chaos {
        match self {
            ChaosPreset::Sierpinski => Chaos::new(
                0.5,
                vec![
                    Vec3::new(w / 2.0, 1.0, 0.0),
                    Vec3::new(2.0, h - 2.0, 0.0),
                    Vec3::new(w - 2.0, h - 2.0, 0.0),
                ],
            ),
            ChaosPreset::Square => Chaos::new(
                0.5,
                vec![
                    Vec3::new(2.0, 2.0, 0.0),
                    Vec3::new(w - 2.0, 2.0, 0.0),
                    Vec3::new(2.0, h - 2.0, 0.0),
                    Vec3::new(w - 2.0, h - 2.0, 0.0),
                ],
            ),
            ChaosPreset::Pentagon => Chaos::new(
                0.55,
                vec![
                    Vec3::new(w / 2.0, 2.0, 0.0),
                    Vec3::new(20.0, 25.0, 0.0),
                    Vec3::new(w - 20.0, 25.0, 0.0),
                    Vec3::new(40.0, h - 2.0, 0.0),
                    Vec3::new(w - 40.0, h - 2.0, 0.0),
                ],
            ),
        }
    }
}

/// Chaos-game state
#[derive(Debug, Clone)]
pub struct Chaos {
    /// Fraction of the way toward the chosen anchor per jump
    pub lerp_factor: f32,
    anchors: Vec<Vec3>,
    current: Vec3,
    previous: Option<usize>,
    rng: fastrand::Rng,
}

impl Chaos {
    /// Start at the centroid of `anchors` (in the z = 0 plane)
    pub fn new(lerp_factor: f32, anchors: Vec<Vec3>) -> Self {
        let n = anchors.len().max(1) as f32;
        let sum = anchors.iter().fold(Vec3::ZERO, |acc, &a| acc + a);
        Chaos {
            lerp_factor,
            current: Vec3::new(sum.x / n, sum.y / n, 0.0),
            anchors,
            previous: None,
            rng: fastrand::Rng::new(),
        }
    }

    /// Same as [`Chaos::new`] with a deterministic anchor sequence
    pub fn with_seed(lerp_factor: f32, anchors: Vec<Vec3>, seed: u64) -> Self {
        let mut chaos = Self::new(lerp_factor, anchors);
        chaos.rng = fastrand::Rng::with_seed(seed);
        chaos
    }

    /// Anchor points
    pub fn anchors(&self) -> &[Vec3] {
        &self.anchors
    }

    /// Current point
    pub fn current(&self) -> Vec3 {
        self.current
    }

    /// Number of anchors whose cell lies off a `width` x `height` grid
    pub fn anchors_outside(&self, width: usize, height: usize) -> usize {
        self.anchors
            .iter()
            .filter(|a| cell(**a, width, height).is_none())
            .count()
    }

    /// Jump toward a random anchor
    ///
    /// With four or more anchors the same one is never picked twice in a
    /// row.
    pub fn on_update(&mut self) {
        if self.anchors.is_empty() {
            return;
        }
        let count = self.anchors.len();
        let mut index = self.rng.usize(..count);
        while count >= 4 && Some(index) == self.previous {
            index = self.rng.usize(..count);
        }
        self.previous = Some(index);
        self.current = self.current.lerp(self.anchors[index], self.lerp_factor);
    }

    /// Stamp the point and the anchors onto the canvas
    ///
    /// Cells outside the grid are skipped.
    pub fn draw_on_canvas(&self, canvas: &mut Canvas) {
        stamp(canvas, self.current, POINT_GLYPH);
        for &anchor in &self.anchors {
            stamp(canvas, anchor, ANCHOR_GLYPH);
        }
    }
}

/// Grid cell `(row, col)` of a point, if it lands on the grid
fn cell(at: Vec3, width: usize, height: usize) -> Option<(usize, usize)> {
    let (x, y) = (at.x.round(), at.y.round());
    if x < 0.0 || y < 0.0 || x >= width as f32 || y >= height as f32 {
        return None;
    }
    Some((y as usize, x as usize))
}

fn stamp(canvas: &mut Canvas, at: Vec3, glyph: char) {
    match cell(at, canvas.width(), canvas.height()) {
        Some((row, col)) => {
            canvas.set(row, col, glyph);
        }
        None => log::trace!("chaos: ({}, {}) lies outside the canvas", at.x, at.y),
    }
}
