//! Hand-tracking input adapter
//!
//! The CV pipeline (MediaPipe on the JS side) reports a normalized palm
//! position whenever a hand is detected - which can be zero times per
//! rendered frame. The adapter keeps the last known sample so the sim always
//! has something to aim with, and flags whether the current sample is live
//! or carried over.

use glam::Vec2;

#[derive(Debug, Clone, Default)]
pub struct HandTracker {
    last: Option<Vec2>,
    fresh: bool,
}

impl HandTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a palm sample. Coordinates outside [-1, 1] (detector jitter at
    /// the frame edge) are clamped.
    pub fn submit(&mut self, x: f32, y: f32) {
        self.last = Some(Vec2::new(x.clamp(-1.0, 1.0), y.clamp(-1.0, 1.0)));
        self.fresh = true;
    }

    /// The sample to aim with this frame: the live one if a hand was seen
    /// since the last call, otherwise the last known position. `None` only
    /// before the first detection ever.
    pub fn sample(&mut self) -> Option<Vec2> {
        self.fresh = false;
        self.last
    }

    /// Whether an unconsumed live sample is pending
    pub fn is_tracking(&self) -> bool {
        self.fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_signal_before_first_detection() {
        let mut tracker = HandTracker::new();
        assert_eq!(tracker.sample(), None);
    }

    #[test]
    fn test_sample_clamped_to_unit_square() {
        let mut tracker = HandTracker::new();
        tracker.submit(1.7, -2.3);
        assert_eq!(tracker.sample(), Some(Vec2::new(1.0, -1.0)));
    }

    #[test]
    fn test_last_known_sample_carries_when_tracking_drops() {
        let mut tracker = HandTracker::new();
        tracker.submit(0.4, 0.2);
        assert!(tracker.is_tracking());
        assert_eq!(tracker.sample(), Some(Vec2::new(0.4, 0.2)));

        // No detection this frame: stale but usable
        assert!(!tracker.is_tracking());
        assert_eq!(tracker.sample(), Some(Vec2::new(0.4, 0.2)));
    }
}
