//! Frame driver context
//!
//! [`App`] owns the preset scenes, the canvas and the optional chaos overlay,
//! and runs one frame at a time: input actions, simulation, render, overlay.
//! Keyboard polling and terminal output stay outside; callers translate keys
//! with [`Action::from_key`] and print [`App::frame_text`].
//!
//! Author: Moroya Sakamoto

use crate::canvas::{Canvas, CanvasError};
use crate::chaos::Chaos;
use crate::config::{AppConfig, ConfigError};
use crate::scene::{presets, Scene, SceneError};
use std::time::Instant;
use thiserror::Error;

/// Startup errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Canvas allocation failed
    #[error("Canvas error: {0}")]
    Canvas(#[from] CanvasError),

    /// Config could not be read
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A preset scene failed to build
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    /// Nothing to show
    #[error("no scenes to run")]
    NoScenes,

    /// Starting scene index past the end of the list
    #[error("scene {index} out of range ({count} scenes)")]
    SceneOutOfRange {
        /// Requested index
        index: usize,
        /// Available scenes
        count: usize,
    },
}

/// Input intent for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Stop the frame loop
    Quit,
    /// Cycle to the next scene
    NextScene,
    /// Pan toward -X
    PanLeft,
    /// Pan toward +X
    PanRight,
    /// Pan toward +Z
    PanForward,
    /// Pan toward -Z
    PanBack,
    /// Start orbiting the light
    LightOrbitOn,
    /// Stop orbiting the light
    LightOrbitOff,
}

impl Action {
    /// Map a key to its action: Esc, space and `w a s d q e` in either case
    pub fn from_key(key: char) -> Option<Action> {
        match key.to_ascii_lowercase() {
            '\u{1b}' => Some(Action::Quit),
            ' ' => Some(Action::NextScene),
            'a' => Some(Action::PanLeft),
            'd' => Some(Action::PanRight),
            'w' => Some(Action::PanForward),
            's' => Some(Action::PanBack),
            'e' => Some(Action::LightOrbitOn),
            'q' => Some(Action::LightOrbitOff),
            _ => None,
        }
    }

    /// One-line key legend
    pub const LEGEND: &'static str =
        "Controls: Spacebar: next scene, WASD: move, Q/E: stop/start light orbit, Esc: exit";
}

/// Wall-clock frame timing plus the periodic FPS report
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    total: f64,
    interval: f32,
    timer: f32,
}

impl FrameClock {
    /// Start the clock; an FPS line is produced every `interval` seconds
    pub fn new(interval: f32) -> Self {
        FrameClock {
            last: Instant::now(),
            total: 0.0,
            interval,
            timer: 0.0,
        }
    }

    /// Seconds since the previous tick (or since creation)
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        self.total += f64::from(dt);
        dt
    }

    /// Total seconds ticked
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Feed one frame's `dt`; returns the FPS line when the interval elapsed
    pub fn profile(&mut self, dt: f32) -> Option<String> {
        let report = (self.timer >= self.interval).then(|| {
            self.timer -= self.interval;
            format_fps(dt)
        });
        self.timer += dt;
        report
    }
}

/// `FPS: 60.00; 16.67ms`
pub fn format_fps(dt: f32) -> String {
    if dt > 0.0 {
        format!("FPS: {:.2}; {:.2}ms", 1.0 / dt, dt * 1000.0)
    } else {
        format!("FPS: -; {:.2}ms", dt * 1000.0)
    }
}

/// Running application state
#[derive(Debug)]
pub struct App {
    config: AppConfig,
    scenes: Vec<Scene>,
    current: usize,
    canvas: Canvas,
    chaos: Option<Chaos>,
    running: bool,
}

impl App {
    /// Start on the preset scenes
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let scenes = presets::all()?;
        Self::with_scenes(config, scenes)
    }

    /// Start on a custom scene list
    pub fn with_scenes(config: AppConfig, scenes: Vec<Scene>) -> Result<Self, AppError> {
        config.validate()?;
        if scenes.is_empty() {
            return Err(AppError::NoScenes);
        }
        if config.start_scene >= scenes.len() {
            return Err(AppError::SceneOutOfRange {
                index: config.start_scene,
                count: scenes.len(),
            });
        }

        let canvas = Canvas::new(config.width, config.height, config.camera_position())?;
        let chaos = config
            .chaos
            .map(|preset| preset.build(config.width, config.height));

        log::info!(
            "app: {} scenes, starting on scene {}",
            scenes.len(),
            config.start_scene
        );
        Ok(App {
            current: config.start_scene,
            config,
            scenes,
            canvas,
            chaos,
            running: true,
        })
    }

    /// Whether `Quit` has not been received
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Active configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Index of the scene being shown
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Scene being shown
    pub fn scene(&self) -> &Scene {
        &self.scenes[self.current]
    }

    /// Scene being shown, mutably
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scenes[self.current]
    }

    /// Every scene, in cycling order
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// Rendered canvas
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Apply input without simulating
    ///
    /// A frame without any action stops the pan.
    pub fn handle_actions(&mut self, actions: &[Action]) {
        if actions.is_empty() {
            self.scene_mut().velocity = glam::Vec3::ZERO;
            return;
        }

        for &action in actions {
            match action {
                Action::Quit => self.running = false,
                Action::NextScene => {
                    self.current = (self.current + 1) % self.scenes.len();
                    log::info!("app: switched to scene {}", self.current);
                }
                Action::PanLeft => self.scene_mut().velocity.x = -1.0,
                Action::PanRight => self.scene_mut().velocity.x = 1.0,
                Action::PanForward => self.scene_mut().velocity.z = 1.0,
                Action::PanBack => self.scene_mut().velocity.z = -1.0,
                Action::LightOrbitOn => self.scene_mut().rotate_light = true,
                Action::LightOrbitOff => self.scene_mut().rotate_light = false,
            }
        }
    }

    /// Run one frame: input, simulation, render, overlay
    pub fn frame(&mut self, dt: f32, actions: &[Action]) {
        self.handle_actions(actions);

        let scene = &mut self.scenes[self.current];
        scene.on_update(dt);
        self.canvas.on_update(scene, &self.config.march);

        if let Some(chaos) = self.chaos.as_mut() {
            chaos.on_update();
            chaos.draw_on_canvas(&mut self.canvas);
        }
    }

    /// The last rendered frame as a bordered block
    pub fn frame_text(&self) -> String {
        self.canvas.to_bordered_string("")
    }
}
