//! The "enter" hyperspace warp played between the cover and the site.

/// Where the warp is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarpState {
    Ready,
    Running,
    Finished,
}

/// Result of advancing the warp by one animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarpStep {
    /// Fraction of the duration elapsed, clamped to [0, 1].
    pub progress: f32,
    /// True on the frame the warp completes.
    pub finished: bool,
}

/// Timestamp-driven warp. The first frame after `begin` fixes the start
/// time, so progress is measured from the first frame actually painted.
#[derive(Debug, Clone)]
pub struct EnterTransition {
    duration_ms: f64,
    start_ms: Option<f64>,
    state: WarpState,
}

impl EnterTransition {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms: duration_ms.max(1.0),
            start_ms: None,
            state: WarpState::Ready,
        }
    }

    /// Start the warp. Returns false if it already started.
    pub fn begin(&mut self) -> bool {
        if self.state != WarpState::Ready {
            return false;
        }
        log::info!("enter: hyperspace warp over {} ms", self.duration_ms);
        self.state = WarpState::Running;
        true
    }

    pub fn state(&self) -> WarpState {
        self.state
    }

    /// Advance to `timestamp_ms` (an animation-frame timestamp).
    /// Returns `None` unless the warp is running.
    pub fn frame(&mut self, timestamp_ms: f64) -> Option<WarpStep> {
        if self.state != WarpState::Running {
            return None;
        }
        let start = *self.start_ms.get_or_insert(timestamp_ms);
        let raw = (timestamp_ms - start) / self.duration_ms;
        let finished = raw >= 1.0;
        if finished {
            self.state = WarpState::Finished;
            log::info!("enter: warp finished");
        }
        Some(WarpStep {
            progress: raw.clamp(0.0, 1.0) as f32,
            finished,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_runs_from_first_frame() {
        let mut warp = EnterTransition::new(1500.0);
        assert!(warp.frame(0.0).is_none());
        assert!(warp.begin());
        assert!(!warp.begin());

        let first = warp.frame(10_000.0).unwrap();
        assert_eq!(first, WarpStep { progress: 0.0, finished: false });
        let mid = warp.frame(10_750.0).unwrap();
        assert!((mid.progress - 0.5).abs() < 1e-6);
        assert!(!mid.finished);

        let last = warp.frame(11_600.0).unwrap();
        assert_eq!(last, WarpStep { progress: 1.0, finished: true });
        assert_eq!(warp.state(), WarpState::Finished);
        assert!(warp.frame(12_000.0).is_none());
    }
}
