//! Simulated frame clock for headless runs.

/// Fixed-rate clock advanced one frame per tick. Unlike a wall clock it
/// is exactly reproducible: frame `n` always lands on `n / fps` seconds.
pub struct FrameClock {
    /// Total elapsed simulated time in seconds
    pub total_time: f64,
    /// Simulated time between frames in seconds
    pub delta_time: f64,
    frame: u64,
}

impl FrameClock {
    /// Creates a clock running at `fps` frames per second. Zero is
    /// clamped to one frame per second.
    pub fn new(fps: u32) -> Self {
        let fps = fps.max(1);
        Self {
            total_time: 0.0,
            delta_time: 1.0 / fps as f64,
            frame: 0,
        }
    }

    /// Advances one frame. Total time is recomputed from the frame
    /// index so long runs do not accumulate float drift.
    pub fn tick(&mut self) {
        self.frame += 1;
        self.total_time = self.frame as f64 * self.delta_time;
    }

    /// Frames ticked so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_ticks_at_sixty_fps_is_one_second() {
        let mut clock = FrameClock::new(60);
        for _ in 0..60 {
            clock.tick();
        }
        assert!((clock.total_time - 1.0).abs() < 1e-9);
        assert_eq!(clock.frame(), 60);
    }

    #[test]
    fn time_is_frame_indexed_not_accumulated() {
        let mut a = FrameClock::new(60);
        for _ in 0..3600 {
            a.tick();
        }
        // One simulated minute stays exact to within one ulp-ish bound.
        assert!((a.total_time - 60.0).abs() < 1e-9);
    }

    #[test]
    fn zero_fps_clamps_to_one() {
        let mut clock = FrameClock::new(0);
        clock.tick();
        assert_eq!(clock.total_time, 1.0);
    }
}
