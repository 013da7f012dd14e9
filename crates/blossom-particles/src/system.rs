//! Burst emission, per-tick integration, and batch expiry.
//!
//! Every `emit` call creates one batch of [`BURST_SIZE`] particles and
//! schedules the whole batch for removal at `now + lifetime`. Removal is
//! driven purely by that deadline queue; the opacity fade is computed
//! from particle age and never feeds back into removal. The two usually
//! line up because both default to the same lifetime, but nothing relies
//! on it, and the tests pin them apart on purpose.

use blossom_core::{Color, Vec3};

use crate::particle::{BatchId, Particle, ParticleInstance};
use crate::rand::ParticleRng;
use crate::{BURST_SIZE, FRAME_STEP, PARTICLE_LIFETIME};

/// Seed used by [`ParticleSystem::new`]. Hosts that replay runs should
/// construct through [`ParticleSystem::with_seed`] instead.
const DEFAULT_SEED: u32 = 0xB105_50ED;

/// Owns the live particle set and the batch expiry queue.
pub struct ParticleSystem {
    particles: Vec<Particle>,
    /// Batch deadlines sorted by descending time, soonest at the back,
    /// so draining due batches is a series of pops. Ties keep emission
    /// order. Nothing assumes batches expire in emission order.
    expiries: Vec<(f32, BatchId)>,
    next_batch: u64,
    lifetime: f32,
    rng: ParticleRng,
    instance_buffer: Vec<ParticleInstance>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Creates a system whose spawn velocities replay exactly for a
    /// given seed.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            particles: Vec::new(),
            expiries: Vec::new(),
            next_batch: 0,
            lifetime: PARTICLE_LIFETIME,
            rng: ParticleRng::new(seed),
            instance_buffer: Vec::new(),
        }
    }

    /// Overrides the batch lifetime, which controls both the fade slope
    /// and the scheduled removal deadline of subsequent bursts.
    pub fn with_lifetime(mut self, seconds: f32) -> Self {
        self.lifetime = seconds.max(f32::EPSILON);
        self
    }

    /// Spawns one batch of [`BURST_SIZE`] particles at `origin`, each
    /// with an independent per-axis velocity in `[-1, 1)`, and schedules
    /// the batch to be removed at `now + lifetime`.
    pub fn emit(&mut self, origin: Vec3, color: Color, size: Vec3, now: f32) -> BatchId {
        let batch = BatchId::from_raw(self.next_batch);
        self.next_batch += 1;

        self.particles.reserve(BURST_SIZE);
        for _ in 0..BURST_SIZE {
            self.particles.push(Particle {
                batch,
                position: origin,
                velocity: self.rng.burst_velocity(),
                spawn_time: now,
                color,
                size,
                opacity: 1.0,
            });
        }

        self.schedule_expiry(now + self.lifetime, batch);
        batch
    }

    /// Advances every live particle by one frame, then removes batches
    /// whose deadline has passed.
    ///
    /// Position moves by `velocity * FRAME_STEP` per call regardless of
    /// how much time passed since the previous tick; opacity is
    /// recomputed from `now` and clamps at zero while the batch stays
    /// live until its deadline.
    pub fn tick(&mut self, now: f32) {
        for p in &mut self.particles {
            p.position += p.velocity * FRAME_STEP;
            p.opacity = p.fade(now, self.lifetime);
        }

        while let Some(&(deadline, batch)) = self.expiries.last() {
            if deadline > now {
                break;
            }
            self.expiries.pop();
            self.particles.retain(|p| p.batch != batch);
        }
    }

    /// Inserts a deadline keeping the queue sorted descending. Equal
    /// deadlines land before existing entries so earlier batches pop
    /// first.
    fn schedule_expiry(&mut self, deadline: f32, batch: BatchId) {
        let idx = self.expiries.partition_point(|&(time, _)| time > deadline);
        self.expiries.insert(idx, (deadline, batch));
    }

    /// Rebuilds the instance buffer from the live set and returns it.
    pub fn pack_instances(&mut self) -> &[ParticleInstance] {
        self.instance_buffer.clear();
        self.instance_buffer
            .extend(self.particles.iter().map(ParticleInstance::from_particle));
        &self.instance_buffer
    }

    /// The most recently packed instance buffer.
    pub fn instances(&self) -> &[ParticleInstance] {
        &self.instance_buffer
    }

    /// Raw bytes of the last packed instance buffer, ready for upload.
    pub fn instance_data(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instance_buffer)
    }

    pub fn live_count(&self) -> usize {
        self.particles.len()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Batches emitted over the system's lifetime, including expired ones.
    pub fn batches_emitted(&self) -> u64 {
        self.next_batch
    }

    /// Batches still waiting on their removal deadline.
    pub fn pending_batches(&self) -> usize {
        self.expiries.len()
    }
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new()
    }
}
