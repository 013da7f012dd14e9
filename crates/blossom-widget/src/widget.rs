//! Widget state machine: one `update` per rendered frame, pointer
//! events applied between frames.

use blossom_animation::{
    center_scale, petal_layout, FlowerAnimator, FlowerPose, PetalSegment, CENTER_BOX_EDGE,
    PETAL_BOX_EDGE,
};
use blossom_config::FlowerConfig;
use blossom_core::Vec3;
use blossom_particles::{BatchId, ParticleSystem};

use crate::events::PointerEvent;
use crate::scene::{FlowerScene, SceneEnvironment};

/// The whole decorative flower, headless. Owns every moving part and
/// exposes a per-frame [`FlowerScene`] snapshot for the renderer.
pub struct FlowerWidget {
    config: FlowerConfig,
    environment: SceneEnvironment,
    petals: Vec<PetalSegment>,
    animator: FlowerAnimator,
    particles: ParticleSystem,
    pose: FlowerPose,
    hovered: bool,
    elapsed: f32,
}

impl FlowerWidget {
    pub fn new(config: FlowerConfig) -> Self {
        Self::build(config, ParticleSystem::new())
    }

    /// Like [`new`](Self::new) but with a seeded particle system, so a
    /// host can replay the exact same bursts.
    pub fn with_seed(config: FlowerConfig, seed: u32) -> Self {
        Self::build(config, ParticleSystem::with_seed(seed))
    }

    fn build(config: FlowerConfig, particles: ParticleSystem) -> Self {
        Self {
            environment: SceneEnvironment::for_config(&config),
            petals: petal_layout(&config),
            animator: FlowerAnimator::new(&config),
            particles,
            pose: FlowerPose {
                rotation_angle: 0.0,
                center_scale: center_scale(0.0),
            },
            hovered: false,
            elapsed: 0.0,
            config,
        }
    }

    /// Applies one pointer event. A click spawns a burst at the flower
    /// center stamped with the widget's current elapsed time, and the
    /// new batch id is returned so hosts can track it.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<BatchId> {
        match event {
            PointerEvent::Entered => {
                self.hovered = true;
                None
            }
            PointerEvent::Left => {
                self.hovered = false;
                None
            }
            PointerEvent::Clicked => Some(self.particles.emit(
                Vec3::ZERO,
                self.config.petal_color,
                self.config.particle_size,
                self.elapsed,
            )),
        }
    }

    /// Advances the widget to `elapsed` seconds since creation: one
    /// animation step, one particle tick, and a fresh instance buffer.
    /// Hosts call this once per rendered frame with a monotonic clock.
    pub fn update(&mut self, elapsed: f32) {
        self.elapsed = elapsed;
        self.pose = self.animator.advance(elapsed, self.hovered);
        self.particles.tick(elapsed);
        self.particles.pack_instances();
    }

    /// Drawable snapshot of the current frame.
    pub fn scene(&self) -> FlowerScene<'_> {
        FlowerScene {
            environment: &self.environment,
            rotation_angle: self.pose.rotation_angle,
            center_scale: self.pose.center_scale,
            center_color: self.config.center_color,
            center_box_edge: CENTER_BOX_EDGE,
            petal_color: self.config.petal_color,
            petal_box_edge: PETAL_BOX_EDGE,
            petals: &self.petals,
            particles: self.particles.instances(),
        }
    }

    pub fn config(&self) -> &FlowerConfig {
        &self.config
    }

    pub fn environment(&self) -> &SceneEnvironment {
        &self.environment
    }

    pub fn pose(&self) -> FlowerPose {
        self.pose
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn live_particles(&self) -> usize {
        self.particles.live_count()
    }

    pub fn batches_emitted(&self) -> u64 {
        self.particles.batches_emitted()
    }
}
