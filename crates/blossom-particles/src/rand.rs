//! Small deterministic RNG for particle spawning.
//!
//! Xorshift32 is plenty for visual scatter and keeps runs reproducible
//! from a seed, which the tests and the player host rely on.

use blossom_core::Vec3;

/// Xorshift32 generator. Not cryptographic, just fast and repeatable.
#[derive(Debug, Clone)]
pub struct ParticleRng {
    state: u32,
}

impl ParticleRng {
    /// Creates a generator from a seed. A zero seed is remapped to 1
    /// because xorshift has a fixed point at zero.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform float in `[min, max)`.
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + (max - min) * self.next_f32()
    }

    /// Velocity for a freshly spawned burst particle: each axis drawn
    /// independently from `[-1, 1)`. The vector is deliberately not
    /// normalized, so corner-ish directions come out faster than
    /// axis-aligned ones and the burst looks like a loose puff.
    pub fn burst_velocity(&mut self) -> Vec3 {
        Vec3::new(
            self.range(-1.0, 1.0),
            self.range(-1.0, 1.0),
            self.range(-1.0, 1.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = ParticleRng::new(42);
        let mut b = ParticleRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn zero_seed_is_remapped() {
        let mut rng = ParticleRng::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn next_f32_stays_in_unit_interval() {
        let mut rng = ParticleRng::new(7);
        for _ in 0..1000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn range_respects_bounds() {
        let mut rng = ParticleRng::new(99);
        for _ in 0..1000 {
            let v = rng.range(-3.0, 5.0);
            assert!((-3.0..5.0).contains(&v));
        }
    }

    #[test]
    fn burst_velocity_axes_stay_in_unit_cube() {
        let mut rng = ParticleRng::new(0xB10553);
        for _ in 0..500 {
            let v = rng.burst_velocity();
            assert!((-1.0..1.0).contains(&v.x));
            assert!((-1.0..1.0).contains(&v.y));
            assert!((-1.0..1.0).contains(&v.z));
        }
    }

    #[test]
    fn burst_velocity_is_not_normalized() {
        let mut rng = ParticleRng::new(0xB10553);
        let mut lengths = Vec::new();
        for _ in 0..50 {
            lengths.push(rng.burst_velocity().length());
        }
        let min = lengths.iter().cloned().fold(f32::INFINITY, f32::min);
        let max = lengths.iter().cloned().fold(0.0_f32, f32::max);
        assert!(max - min > 0.1, "lengths should spread, got {min}..{max}");
    }
}
