//! Blossom Core - Foundational types for the Blossom widget
//!
//! This crate provides the types all other Blossom crates depend on:
//! - `Vec3` - Small 3D vector used for positions, velocities and box extents
//! - `Color` - RGBA color with hex parsing
//! - Error types and Result alias

mod error;
mod types;

pub use error::{BlossomError, Result};
pub use types::{Color, Vec3};
