//! Headless simulation loop and the run report it produces.

use blossom_config::FlowerConfig;
use blossom_widget::{FlowerWidget, PointerEvent, SceneEnvironment};
use serde::{Deserialize, Serialize};

use crate::clock::FrameClock;
use crate::script::PointerScript;

/// Seed the binary uses when none is given, so bare runs replay exactly.
pub const DEFAULT_SEED: u32 = 0xB105_5EED;

/// Knobs for one headless run.
#[derive(Debug, Clone)]
pub struct SimulationOptions {
    pub frames: u32,
    pub fps: u32,
    pub seed: u32,
    /// Click instants in seconds.
    pub clicks: Vec<f64>,
    /// Hover spans in seconds, each `(enter, leave)`.
    pub hovers: Vec<(f64, f64)>,
    /// Prints `[player]` progress lines while running.
    pub verbose: bool,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            frames: 300,
            fps: 60,
            seed: DEFAULT_SEED,
            clicks: Vec::new(),
            hovers: Vec::new(),
            verbose: false,
        }
    }
}

/// Summary of one run. Identical inputs produce an identical report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub frames: u32,
    pub duration_seconds: f64,
    /// Accumulated rotation in radians after the last frame.
    pub final_rotation: f32,
    pub min_center_scale: f32,
    pub max_center_scale: f32,
    pub batches_emitted: u64,
    pub peak_live_particles: usize,
    pub live_particles_at_end: usize,
    pub environment: SceneEnvironment,
}

/// Drives a widget for `options.frames` frames of simulated time,
/// applying scripted pointer input as the clock passes each event.
///
/// Per frame: tick the clock, update the widget, then drain due script
/// events. A click therefore spawns with the exact frame timestamp and
/// shows up in the instance buffer on the following frame.
pub fn run_simulation(config: FlowerConfig, options: &SimulationOptions) -> SimulationReport {
    let mut widget = FlowerWidget::with_seed(config, options.seed);
    let mut clock = FrameClock::new(options.fps);
    let mut script = PointerScript::build(&options.clicks, &options.hovers);

    if options.verbose {
        println!(
            "[player] running {} frames at {} fps (seed {:#010x})",
            options.frames, options.fps, options.seed
        );
    }

    let mut min_scale = f32::INFINITY;
    let mut max_scale = f32::NEG_INFINITY;
    let mut peak_live = 0usize;
    let frames_per_log = options.fps.max(1) as u64;

    for _ in 0..options.frames {
        clock.tick();
        let now = clock.total_time;
        widget.update(now as f32);

        let pose = widget.pose();
        min_scale = min_scale.min(pose.center_scale);
        max_scale = max_scale.max(pose.center_scale);

        for &(at, event) in script.drain_due(now) {
            let batch = widget.handle_pointer(event);
            if options.verbose {
                match (event, batch) {
                    (PointerEvent::Clicked, Some(id)) => {
                        println!("[player] t={at:.2}s click spawned batch {id}")
                    }
                    (PointerEvent::Entered, _) => println!("[player] t={at:.2}s pointer entered"),
                    (PointerEvent::Left, _) => println!("[player] t={at:.2}s pointer left"),
                    _ => {}
                }
            }
        }

        peak_live = peak_live.max(widget.live_particles());

        if options.verbose && clock.frame() % frames_per_log == 0 {
            println!(
                "[player] t={now:>5.1}s rotation={:.3} scale={:.3} live={}",
                pose.rotation_angle,
                pose.center_scale,
                widget.live_particles()
            );
        }
    }

    let (min_center_scale, max_center_scale) = if options.frames == 0 {
        let s = widget.pose().center_scale;
        (s, s)
    } else {
        (min_scale, max_scale)
    };

    SimulationReport {
        frames: options.frames,
        duration_seconds: clock.total_time,
        final_rotation: widget.pose().rotation_angle,
        min_center_scale,
        max_center_scale,
        batches_emitted: widget.batches_emitted(),
        peak_live_particles: peak_live,
        live_particles_at_end: widget.live_particles(),
        environment: widget.environment().clone(),
    }
}
