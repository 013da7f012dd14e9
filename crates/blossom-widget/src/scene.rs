//! Scene description handed to renderers.

use blossom_animation::PetalSegment;
use blossom_config::FlowerConfig;
use blossom_core::{Color, Vec3};
use blossom_particles::ParticleInstance;
use serde::{Deserialize, Serialize};

/// Fixed staging around the flower: camera, lights, and canvas setup.
/// Everything here is constant for the life of the widget except the
/// viewport size, which comes from the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneEnvironment {
    pub camera_position: Vec3,
    pub camera_fov_degrees: f32,
    pub ambient_intensity: f32,
    pub point_light_position: Vec3,
    pub point_light_intensity: f32,
    /// The canvas behind the flower stays see-through so the widget
    /// floats over whatever the page puts beneath it.
    pub transparent_background: bool,
    pub viewport_size: u32,
}

impl SceneEnvironment {
    pub fn for_config(config: &FlowerConfig) -> Self {
        Self {
            camera_position: Vec3::new(0.0, 0.0, 5.0),
            camera_fov_degrees: 75.0,
            ambient_intensity: 1.0,
            point_light_position: Vec3::new(5.0, 5.0, 5.0),
            point_light_intensity: 2.0,
            transparent_background: true,
            viewport_size: config.viewport_size,
        }
    }
}

/// One frame's worth of drawable state, borrowed from the widget.
/// Cheap to build every frame; holds no copies of the geometry.
#[derive(Debug, Clone, Copy)]
pub struct FlowerScene<'a> {
    pub environment: &'a SceneEnvironment,
    /// Radians applied around the Y axis to the whole flower group.
    pub rotation_angle: f32,
    /// Uniform scale of the center box for the current frame.
    pub center_scale: f32,
    pub center_color: Color,
    pub center_box_edge: f32,
    pub petal_color: Color,
    pub petal_box_edge: f32,
    pub petals: &'a [PetalSegment],
    pub particles: &'a [ParticleInstance],
}
