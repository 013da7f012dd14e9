//! Burst particle simulation for the Blossom widget.
//!
//! Provides:
//! - Fixed-size particle bursts spawned from a point
//! - Age-based opacity fade over a configurable lifetime
//! - Deadline-driven batch removal, independent of the fade
//! - GPU-ready instance packing (`ParticleInstance`)
//! - A small deterministic RNG so hosts can replay a run

pub mod particle;
pub mod rand;
pub mod system;

pub use particle::{BatchId, Particle, ParticleInstance};
pub use rand::ParticleRng;
pub use system::ParticleSystem;

/// Seconds a batch stays in the live set after emission.
pub const PARTICLE_LIFETIME: f32 = 1.5;

/// Particles created by a single `emit` call.
pub const BURST_SIZE: usize = 15;

/// Distance multiplier applied to velocity once per tick. The step is fixed
/// per frame rather than scaled by elapsed time, so particle speed rides the
/// frame cadence exactly like the flower's rotation increment.
pub const FRAME_STEP: f32 = 0.02;
