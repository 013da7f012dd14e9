//! Blossom Player - headless demo runner for the flower widget
//!
//! Drives the widget for a fixed number of simulated frames with
//! scripted pointer input, then prints a run summary.
//!
//! Usage:
//!   blossom-player [--params "petalCount=8&speed=0.1"] [--config flower.toml]
//!                  [--frames 600] [--click 0.5 --click 2.0]
//!                  [--hover 1.0..3.0] [--format json]

use anyhow::{Context, Result};
use blossom_config::FlowerConfig;
use blossom_player::{parse_hover_span, run_simulation, SimulationOptions, DEFAULT_SEED};
use clap::Parser;

#[derive(Parser)]
#[command(name = "blossom-player")]
#[command(about = "Blossom widget player - run the flower headless and report what it did")]
struct Args {
    /// Query-string overrides, e.g. "petalCount=8&petalColor=ff0000"
    #[arg(long)]
    params: Option<String>,

    /// Path to a TOML config file; --params applies on top
    #[arg(long)]
    config: Option<String>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 300)]
    frames: u32,

    /// Simulated frames per second
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Seed for particle burst velocities
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u32,

    /// Click instant in seconds (repeatable)
    #[arg(long = "click")]
    clicks: Vec<f64>,

    /// Hover span in seconds as start..end (repeatable)
    #[arg(long = "hover")]
    hovers: Vec<String>,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => FlowerConfig::from_toml_file(path)
            .with_context(|| format!("failed to load config from {path}"))?,
        None => FlowerConfig::default(),
    };
    if let Some(params) = &args.params {
        config.apply_query(params);
    }

    let mut hovers = Vec::with_capacity(args.hovers.len());
    for raw in &args.hovers {
        hovers.push(parse_hover_span(raw).with_context(|| format!("bad --hover {raw}"))?);
    }

    let options = SimulationOptions {
        frames: args.frames,
        fps: args.fps,
        seed: args.seed,
        clicks: args.clicks,
        hovers,
        verbose: args.format != "json",
    };

    let report = run_simulation(config, &options);

    match args.format.as_str() {
        "json" => {
            let json =
                serde_json::to_string_pretty(&report).context("failed to serialize report")?;
            println!("{json}");
        }
        _ => {
            println!();
            println!("Run summary:");
            println!("  frames:          {}", report.frames);
            println!("  duration:        {:.2}s", report.duration_seconds);
            println!("  final rotation:  {:.3} rad", report.final_rotation);
            println!(
                "  center scale:    {:.3}..{:.3}",
                report.min_center_scale, report.max_center_scale
            );
            println!("  bursts emitted:  {}", report.batches_emitted);
            println!("  peak particles:  {}", report.peak_live_particles);
            println!("  live at end:     {}", report.live_particles_at_end);
        }
    }

    Ok(())
}
