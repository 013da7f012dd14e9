//! Static petal geometry, computed once per config

use blossom_config::FlowerConfig;
use blossom_core::Vec3;
use std::f32::consts::TAU;

/// Edge length of one petal segment box
pub const PETAL_BOX_EDGE: f32 = 0.4;

/// Edge length of the center box (before the pulse scale is applied)
pub const CENTER_BOX_EDGE: f32 = 0.35;

/// One box segment of a petal, positioned in the flower group's local space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PetalSegment {
    /// Petal index, counter-clockwise from +X
    pub petal: u32,
    /// Segment index along the petal, 0 nearest the center
    pub segment: u32,
    pub position: Vec3,
}

/// Lay out `petal_count` petals of `segment_count` boxes each.
///
/// Petal i sits at angle `2π·i/petal_count`; its segment j sits on that
/// radial at distance `petal_distance + j·segment_spacing`, z = 0. The
/// layout never changes after construction; only the enclosing group's
/// rotation does. Zero counts produce an empty layout.
pub fn petal_layout(config: &FlowerConfig) -> Vec<PetalSegment> {
    let count = (config.petal_count as usize) * (config.segment_count as usize);
    let mut segments = Vec::with_capacity(count);

    for i in 0..config.petal_count {
        let angle = i as f32 / config.petal_count as f32 * TAU;
        let (sin_a, cos_a) = angle.sin_cos();

        for j in 0..config.segment_count {
            let radial = config.petal_distance + j as f32 * config.segment_spacing;
            segments.push(PetalSegment {
                petal: i,
                segment: j,
                position: Vec3::new(cos_a * radial, sin_a * radial, 0.0),
            });
        }
    }

    segments
}
