//! Blossom Animation - per-frame flower motion
//!
//! Two pieces, both driven once per rendered frame by the host:
//! - `FlowerAnimator`: cumulative group rotation (faster while hovered)
//!   and the pulsing center scale, a pure function of elapsed time
//! - `petal_layout`: the static box-segment geometry, computed once at
//!   construction and never touched again

mod animator;
mod layout;

pub use animator::{center_scale, AnimationState, FlowerAnimator, FlowerPose};
pub use layout::{petal_layout, PetalSegment, CENTER_BOX_EDGE, PETAL_BOX_EDGE};
