//! Rotation and center-pulse state, advanced once per rendered frame

use blossom_config::FlowerConfig;

/// Transform values for one rendered frame, applied by the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowerPose {
    /// Rotation of the flower group about the Y axis, in radians
    pub rotation_angle: f32,
    /// Uniform scale of the center box
    pub center_scale: f32,
}

/// Mutable animation state owned by the animator
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    /// Monotonically increasing; never wrapped, the renderer takes it mod 2π
    pub rotation_angle: f32,
    pub center_scale: f32,
    /// Last hover flag seen by `advance`
    pub hovered: bool,
}

/// Drives the flower group's rotation and the pulsing center.
///
/// Rotation is cumulative: every `advance` call adds a fixed increment
/// (the configured speed while hovered, a fifth of it otherwise). The
/// increment is per call, not per second: the host calls once per rendered
/// frame, so rotation speed rides the frame cadence.
pub struct FlowerAnimator {
    speed: f32,
    state: AnimationState,
}

impl FlowerAnimator {
    pub fn new(config: &FlowerConfig) -> Self {
        Self {
            speed: config.speed,
            state: AnimationState {
                rotation_angle: 0.0,
                center_scale: center_scale(0.0),
                hovered: false,
            },
        }
    }

    /// Advance one frame: accumulate rotation, recompute the center scale.
    pub fn advance(&mut self, elapsed: f32, hovered: bool) -> FlowerPose {
        // Idle rotation runs at a fifth of the hover speed
        let increment = if hovered { self.speed } else { self.speed / 5.0 };
        self.state.rotation_angle += increment;
        self.state.center_scale = center_scale(elapsed);
        self.state.hovered = hovered;

        FlowerPose {
            rotation_angle: self.state.rotation_angle,
            center_scale: self.state.center_scale,
        }
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }
}

/// Pulsing center scale: `1.5 + 0.5·sin(3t)`, always within [1.0, 2.0].
///
/// Pure function of elapsed time, so it is safe to call at any cadence.
pub fn center_scale(elapsed: f32) -> f32 {
    1.5 + 0.5 * (elapsed * 3.0).sin()
}
