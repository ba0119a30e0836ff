//! Character-grid canvas
//!
//! The canvas owns one precomputed camera ray per cell and the glyph grid the
//! rays are resolved into. The camera never moves; panning moves the scene.
//!
//! Rows are the unit of parallel work: every frame fans out one rayon task
//! per row over disjoint slices of the glyph buffer and joins before the text
//! is assembled.
//!
//! Author: Moroya Sakamoto

use crate::raycast::{march_brightness, MarchConfig};
use crate::scene::Scene;
use crate::types::Ray;
use glam::Vec3;
use rayon::prelude::*;
use thiserror::Error;

/// Brightness ramp, sparsest to densest
pub const GLYPH_RAMP: [char; 10] = [' ', '.', ':', '-', '=', '+', 'X', '%', '#', '@'];

/// Horizontal and vertical spread of the pinhole projection
pub const FIELD_OF_VIEW: f32 = 0.2;

/// Canvas setup errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CanvasError {
    /// Width or height was zero
    #[error("invalid canvas size {width}x{height}")]
    InvalidSize {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
}

/// Glyph for a brightness value, clamped to `[0, 1]`
#[inline(always)]
pub fn glyph_for(brightness: f32) -> char {
    // NaN clamps to NaN and casts to 0
    let b = brightness.clamp(0.0, 1.0);
    GLYPH_RAMP[(b * (GLYPH_RAMP.len() - 1) as f32) as usize]
}

/// Fixed pinhole ray direction for cell `(x, y)` of a `width x height` grid
///
/// Character cells are roughly twice as tall as wide, so the vertical
/// coordinate is stretched by two.
#[inline]
pub fn ray_direction(x: usize, y: usize, width: usize, height: usize) -> Vec3 {
    let h = height as f32;
    let uv_x = (2.0 * x as f32 - width as f32) / h;
    let uv_y = 2.0 * (2.0 * y as f32 - h) / h;
    Vec3::new(uv_x * FIELD_OF_VIEW, -uv_y * FIELD_OF_VIEW, 1.0).normalize()
}

/// Glyph grid plus its camera rays
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    camera: Vec3,
    rays: Vec<Vec3>,
    glyphs: Vec<char>,
}

impl Canvas {
    /// Allocate a blank canvas and precompute its rays
    pub fn new(width: usize, height: usize, camera: Vec3) -> Result<Self, CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::InvalidSize { width, height });
        }

        let rays = (0..height)
            .flat_map(|y| (0..width).map(move |x| ray_direction(x, y, width, height)))
            .collect();

        log::info!("canvas: {}x{} cells, camera at {}", width, height, camera);
        Ok(Canvas {
            width,
            height,
            camera,
            rays,
            glyphs: vec![GLYPH_RAMP[0]; width * height],
        })
    }

    /// Columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Camera position every ray starts from
    pub fn camera(&self) -> Vec3 {
        self.camera
    }

    /// Camera ray of one cell
    pub fn ray(&self, y: usize, x: usize) -> Option<Ray> {
        self.index(y, x).map(|i| Ray {
            origin: self.camera,
            direction: self.rays[i],
        })
    }

    /// Glyph at row `y`, column `x`
    pub fn get(&self, y: usize, x: usize) -> Option<char> {
        self.index(y, x).map(|i| self.glyphs[i])
    }

    /// Overwrite one cell; returns `false` if it lies outside the grid
    pub fn set(&mut self, y: usize, x: usize, glyph: char) -> bool {
        match self.index(y, x) {
            Some(i) => {
                self.glyphs[i] = glyph;
                true
            }
            None => false,
        }
    }

    /// One row of glyphs
    pub fn row(&self, y: usize) -> Option<&[char]> {
        (y < self.height).then(|| &self.glyphs[y * self.width..(y + 1) * self.width])
    }

    #[inline]
    fn index(&self, y: usize, x: usize) -> Option<usize> {
        (y < self.height && x < self.width).then_some(y * self.width + x)
    }

    /// Resolve every cell against the scene, one parallel task per row
    pub fn on_update(&mut self, scene: &Scene, config: &MarchConfig) {
        let width = self.width;
        let camera = self.camera;
        let rays = &self.rays;

        self.glyphs
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                let row_rays = &rays[y * width..(y + 1) * width];
                for (cell, &direction) in row.iter_mut().zip(row_rays) {
                    let ray = Ray {
                        origin: camera,
                        direction,
                    };
                    *cell = glyph_for(march_brightness(scene, &ray, config));
                }
            });
    }

    /// Reset every cell to the blank glyph
    pub fn clear(&mut self) {
        self.glyphs.fill(GLYPH_RAMP[0]);
    }

    /// Frame the grid in box-drawing characters
    ///
    /// Every row is preceded by `prefix`. The block ends without a trailing
    /// newline.
    pub fn to_bordered_string(&self, prefix: &str) -> String {
        let rule: String = "─".repeat(self.width);
        let mut out = String::with_capacity(
            (self.width + prefix.len() + 3) * (self.height + 2) * 3,
        );

        out.push('┌');
        out.push_str(&rule);
        out.push_str("┐\n");
        for row in self.glyphs.chunks(self.width) {
            out.push_str(prefix);
            out.push('|');
            out.extend(row.iter());
            out.push_str("|\n");
        }
        out.push('└');
        out.push_str(&rule);
        out.push('┘');
        out
    }
}
