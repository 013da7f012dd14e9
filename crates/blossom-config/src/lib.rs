//! Blossom Config - widget configuration with lenient parsing
//!
//! A `FlowerConfig` can come from query-string-style key/value pairs (the
//! widget's URL-parameter surface) or from a TOML table. Both sources
//! share the same discipline: absent or malformed values fall back to the
//! documented defaults, out-of-range values are clamped silently. The
//! simulation never sees an invalid config.

mod config;

pub use config::FlowerConfig;
