//! Particle state and the packed per-instance GPU layout.

use blossom_core::{Color, Vec3};
use bytemuck::{Pod, Zeroable};

/// Identity of one emission burst. Ids are handed out by the owning
/// [`ParticleSystem`](crate::ParticleSystem) in emission order and are
/// never reused within a system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BatchId(u64);

impl BatchId {
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for BatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One live particle. Position and opacity are rewritten every tick;
/// the rest is fixed at spawn.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub batch: BatchId,
    pub position: Vec3,
    pub velocity: Vec3,
    /// Elapsed-time stamp at emission, used for the opacity fade.
    pub spawn_time: f32,
    pub color: Color,
    pub size: Vec3,
    pub opacity: f32,
}

impl Particle {
    /// Seconds since this particle spawned.
    pub fn age(&self, now: f32) -> f32 {
        now - self.spawn_time
    }

    /// Linear fade from 1 at spawn to 0 at `lifetime`, clamped at zero.
    /// A fully faded particle is still live; removal is scheduled
    /// separately by batch deadline.
    pub fn fade(&self, now: f32, lifetime: f32) -> f32 {
        (1.0 - self.age(now) / lifetime).max(0.0)
    }
}

/// Per-particle instance data, laid out as three vec4 rows so it can be
/// copied straight into a vertex buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct ParticleInstance {
    /// World position in xyz, opacity in w.
    pub pos_opacity: [f32; 4],
    /// Box half-extents per axis in xyz, w unused.
    pub size: [f32; 4],
    pub color: [f32; 4],
}

impl ParticleInstance {
    pub fn from_particle(p: &Particle) -> Self {
        Self {
            pos_opacity: [p.position.x, p.position.y, p.position.z, p.opacity],
            size: [p.size.x, p.size.y, p.size.z, 0.0],
            color: p.color.to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_particle(spawn_time: f32) -> Particle {
        Particle {
            batch: BatchId::from_raw(0),
            position: Vec3::new(1.0, 2.0, 3.0),
            velocity: Vec3::ZERO,
            spawn_time,
            color: Color::new(0.5, 0.25, 1.0, 1.0),
            size: Vec3::new(0.15, 0.15, 0.15),
            opacity: 0.75,
        }
    }

    #[test]
    fn instance_layout_is_three_vec4_rows() {
        assert_eq!(std::mem::size_of::<ParticleInstance>(), 48);
        assert_eq!(std::mem::align_of::<ParticleInstance>(), 4);
    }

    #[test]
    fn instance_packs_particle_fields() {
        let inst = ParticleInstance::from_particle(&test_particle(0.0));
        assert_eq!(inst.pos_opacity, [1.0, 2.0, 3.0, 0.75]);
        assert_eq!(inst.size, [0.15, 0.15, 0.15, 0.0]);
        assert_eq!(inst.color, [0.5, 0.25, 1.0, 1.0]);
    }

    #[test]
    fn fade_is_linear_and_clamped() {
        let p = test_particle(1.0);
        assert_eq!(p.fade(1.0, 1.5), 1.0);
        assert!((p.fade(1.75, 1.5) - 0.5).abs() < 1e-6);
        assert_eq!(p.fade(2.5, 1.5), 0.0);
        assert_eq!(p.fade(10.0, 1.5), 0.0);
    }

    #[test]
    fn age_is_relative_to_spawn() {
        let p = test_particle(2.0);
        assert_eq!(p.age(2.0), 0.0);
        assert!((p.age(3.25) - 1.25).abs() < 1e-6);
    }

    #[test]
    fn batch_ids_order_by_raw_value() {
        let a = BatchId::from_raw(1);
        let b = BatchId::from_raw(2);
        assert!(a < b);
        assert_eq!(format!("{a}"), "1");
    }
}
