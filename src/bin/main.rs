//! ascii-raymarch CLI
//!
//! Headless frame driver: runs the preset scenes and prints each frame to
//! stdout. Keyboard polling is left to the terminal front end, so `run`
//! drives the scene without input.
//!
//! Author: Moroya Sakamoto

#![allow(
    clippy::uninlined_format_args,
    clippy::needless_pass_by_value,
    clippy::cast_precision_loss
)]

#[cfg(feature = "cli")]
use ascii_raymarch::prelude::*;
#[cfg(feature = "cli")]
use std::io::Write;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

/// Move the cursor home without clearing, so frames overwrite in place
#[cfg(feature = "cli")]
const CURSOR_HOME: &str = "\x1b[H";

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "ascii-raymarch")]
#[command(author = "Moroya Sakamoto")]
#[command(version = ascii_raymarch::VERSION)]
#[command(about = "Sphere-traced SDF scenes in the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Run the frame loop, printing every frame
    Run {
        /// Stop after this many frames (runs forever if omitted)
        #[arg(short, long)]
        frames: Option<u64>,
        /// Starting preset scene
        #[arg(short, long)]
        scene: Option<usize>,
        /// JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Use a constant time step instead of wall-clock time
        #[arg(long)]
        fixed_dt: Option<f32>,
    },

    /// Simulate a scene for a while, then print one frame
    Snapshot {
        /// Preset scene
        #[arg(short, long, default_value = "0")]
        scene: usize,
        /// Seconds of simulated time
        #[arg(short, long, default_value = "1.0")]
        time: f32,
        /// Simulation steps to spread `time` over
        #[arg(long, default_value = "30")]
        steps: u32,
        /// JSON config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Time full frames (simulate + render)
    Bench {
        /// Number of frames
        #[arg(short, long, default_value = "100")]
        frames: u32,
        /// Preset scene
        #[arg(short, long, default_value = "0")]
        scene: usize,
    },

    /// List the preset scenes
    Info,
}

#[cfg(feature = "cli")]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            frames,
            scene,
            config,
            fixed_dt,
        } => cmd_run(frames, scene, config, fixed_dt),
        Commands::Snapshot {
            scene,
            time,
            steps,
            config,
        } => cmd_snapshot(scene, time, steps, config),
        Commands::Bench { frames, scene } => cmd_bench(frames, scene),
        Commands::Info => cmd_info(),
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI not enabled. Build with --features cli");
    std::process::exit(1);
}

#[cfg(feature = "cli")]
fn load_config(path: Option<PathBuf>) -> AppConfig {
    match path {
        Some(path) => match AppConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => AppConfig::default(),
    }
}

#[cfg(feature = "cli")]
fn start_app(config: AppConfig) -> App {
    match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(feature = "cli")]
fn cmd_run(frames: Option<u64>, scene: Option<usize>, config: Option<PathBuf>, fixed_dt: Option<f32>) {
    let mut config = load_config(config);
    if let Some(scene) = scene {
        config.start_scene = scene;
    }
    let mut clock = FrameClock::new(config.profiler_interval);
    let mut app = start_app(config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut status = String::new();
    let mut frame = 0u64;

    // Clear once, then overwrite in place
    if let Err(e) = write!(out, "\x1b[2J").and_then(|_| out.flush()) {
        eprintln!("Write error: {}", e);
        std::process::exit(1);
    }

    while app.is_running() && frames.map_or(true, |n| frame < n) {
        let measured = clock.tick();
        let dt = fixed_dt.unwrap_or(measured);
        if let Some(line) = clock.profile(measured) {
            log::debug!("{}", line);
            status = line;
        }

        app.frame(dt, &[]);

        let written = write!(
            out,
            "{}{}\n\t{}\n{}\n",
            CURSOR_HOME,
            app.frame_text(),
            status,
            Action::LEGEND
        )
        .and_then(|_| out.flush());
        if let Err(e) = written {
            eprintln!("Write error: {}", e);
            std::process::exit(1);
        }
        frame += 1;
    }
}

#[cfg(feature = "cli")]
fn cmd_snapshot(scene: usize, time: f32, steps: u32, config: Option<PathBuf>) {
    let mut config = load_config(config);
    config.start_scene = scene;
    let mut app = start_app(config);

    let steps = steps.max(1);
    let dt = time / steps as f32;
    for _ in 0..steps {
        app.frame(dt, &[]);
    }
    println!("{}", app.frame_text());
}

#[cfg(feature = "cli")]
fn cmd_bench(frames: u32, scene: usize) {
    let config = AppConfig {
        start_scene: scene,
        ..Default::default()
    };
    let (width, height) = (config.width, config.height);
    let mut app = start_app(config);

    println!("=== Frame Benchmark ===");
    println!("Scene: {}", scene);
    println!("Canvas: {}x{} ({} rays)", width, height, width * height);
    println!("Threads: {}", rayon::current_num_threads());

    let frames = frames.max(1);
    let start = std::time::Instant::now();
    for _ in 0..frames {
        app.frame(1.0 / 60.0, &[]);
    }
    let elapsed = start.elapsed().as_secs_f64();

    let per_frame_ms = elapsed * 1000.0 / f64::from(frames);
    println!("Frames: {}", frames);
    println!("Total: {:.1}ms", elapsed * 1000.0);
    println!("Per frame: {:.3}ms ({:.1} FPS)", per_frame_ms, 1000.0 / per_frame_ms);
}

#[cfg(feature = "cli")]
fn cmd_info() {
    let scenes = match presets::all() {
        Ok(scenes) => scenes,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("ascii-raymarch {}", ascii_raymarch::VERSION);
    for (i, scene) in scenes.iter().enumerate() {
        let kinds: Vec<&str> = scene
            .drawables()
            .iter()
            .map(|&id| scene.node(id).kind.name())
            .collect();
        println!(
            "  [{}] {} objects, {} drawables ({} shapes): {}",
            i,
            scene.objects().len(),
            scene.drawables().len(),
            presets::drawable_count(scene),
            kinds.join(", ")
        );
    }
}
