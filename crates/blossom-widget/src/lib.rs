//! Headless flower widget.
//!
//! Composes the pieces a renderer needs into one update loop:
//! - Static petal layout from the active [`FlowerConfig`](blossom_config::FlowerConfig)
//! - Rotation and center pulse via `blossom-animation`
//! - Click bursts via `blossom-particles`
//! - Pointer state (hover switches the rotation rate)
//!
//! The widget never draws. Each frame the host calls
//! [`FlowerWidget::update`] and then reads a [`FlowerScene`] snapshot,
//! which borrows straight from widget state without copying geometry.

pub mod events;
pub mod scene;
pub mod widget;

pub use events::PointerEvent;
pub use scene::{FlowerScene, SceneEnvironment};
pub use widget::FlowerWidget;
