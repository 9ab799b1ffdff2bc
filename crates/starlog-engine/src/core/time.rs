/// Frame clock for the cover animation.
/// Counts ticks (orbits advance per tick) and accumulates elapsed seconds
/// (the central binary pair is driven by elapsed time).
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Seconds since the clock started.
    elapsed: f32,
    /// Number of ticks run.
    ticks: u64,
}

impl FrameClock {
    /// Frame delta cap in seconds. A backgrounded tab can deliver one huge
    /// delta on resume; the binary pair should not jump half an orbit.
    pub const MAX_FRAME_DT: f32 = 0.1;

    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one animation frame of `frame_dt` seconds.
    pub fn tick(&mut self, frame_dt: f32) {
        self.elapsed += frame_dt.clamp(0.0, Self::MAX_FRAME_DT);
        self.ticks += 1;
    }

    /// Elapsed seconds.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_accumulate_time() {
        let mut clock = FrameClock::new();
        clock.tick(1.0 / 60.0);
        clock.tick(1.0 / 60.0);
        assert_eq!(clock.ticks(), 2);
        assert!((clock.elapsed() - 2.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn huge_delta_is_capped() {
        let mut clock = FrameClock::new();
        clock.tick(5.0);
        assert!((clock.elapsed() - FrameClock::MAX_FRAME_DT).abs() < 1e-6);
    }

    #[test]
    fn negative_delta_is_ignored() {
        let mut clock = FrameClock::new();
        clock.tick(-1.0);
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.ticks(), 1);
    }
}
