//! Blossom Player - headless run library
//!
//! Hosts the pieces the `blossom-player` binary drives: a simulated
//! frame clock, a scripted pointer timeline, and the simulation loop
//! that turns a config plus a script into a run report.

pub mod clock;
pub mod script;
pub mod sim;

pub use clock::FrameClock;
pub use script::{parse_hover_span, PointerScript};
pub use sim::{run_simulation, SimulationOptions, SimulationReport, DEFAULT_SEED};
