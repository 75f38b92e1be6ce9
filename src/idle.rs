use crate::{PeekShieldResult, platform};
use std::time::{Duration, Instant};
use tracing::trace;

/// Cursor movement (per axis, in pixels) that counts as user activity.
pub const DEFAULT_IDLE_THRESHOLD: i32 = 10;

/// Tracks how long the mouse cursor has been at rest.
///
/// The caller owns the tracker and decides when to sample; nothing runs in
/// the background.
#[derive(Debug, Clone)]
pub struct IdleTracker {
    threshold: i32,
    last_position: Option<(i32, i32)>,
    last_movement: Instant,
}

impl IdleTracker {
    pub fn new(now: Instant) -> Self {
        Self {
            threshold: DEFAULT_IDLE_THRESHOLD,
            last_position: None,
            last_movement: now,
        }
    }

    /// Set the movement threshold in pixels
    ///
    /// # Panics
    /// Panics if the threshold is negative
    pub fn with_threshold(mut self, threshold: i32) -> Self {
        if threshold < 0 {
            panic!("Idle threshold cannot be negative");
        }
        self.threshold = threshold;
        self
    }

    /// Record a cursor sample. Returns `true` if it counts as movement.
    ///
    /// The first sample only establishes the reference position.
    pub fn observe(&mut self, position: (i32, i32), now: Instant) -> bool {
        let Some((last_x, last_y)) = self.last_position else {
            self.last_position = Some(position);
            return false;
        };

        let moved = (position.0 - last_x).abs() > self.threshold
            || (position.1 - last_y).abs() > self.threshold;
        if moved {
            trace!("Cursor moved to {:?}", position);
            self.last_position = Some(position);
            self.last_movement = now;
        }
        moved
    }

    /// Time since the last movement.
    pub fn elapsed_idle(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.last_movement)
    }

    pub fn elapsed_idle_secs(&self, now: Instant) -> u64 {
        self.elapsed_idle(now).as_secs()
    }

    /// Sample the real cursor and return the idle time.
    pub fn poll(&mut self, now: Instant) -> PeekShieldResult<Duration> {
        let position = platform::cursor_position()?;
        self.observe(position, now);
        Ok(self.elapsed_idle(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_is_not_movement() {
        let start = Instant::now();
        let mut tracker = IdleTracker::new(start);
        assert!(!tracker.observe((500, 500), start + Duration::from_secs(3)));
        assert_eq!(tracker.elapsed_idle_secs(start + Duration::from_secs(3)), 3);
    }

    #[test]
    fn test_small_jitter_is_ignored() {
        let start = Instant::now();
        let mut tracker = IdleTracker::new(start);
        tracker.observe((100, 100), start);
        assert!(!tracker.observe((110, 92), start + Duration::from_secs(5)));
        assert_eq!(tracker.elapsed_idle(start + Duration::from_secs(5)), Duration::from_secs(5));
    }

    #[test]
    fn test_movement_resets_idle_time() {
        let start = Instant::now();
        let mut tracker = IdleTracker::new(start);
        tracker.observe((100, 100), start);
        assert!(tracker.observe((100, 111), start + Duration::from_secs(4)));
        assert_eq!(tracker.elapsed_idle_secs(start + Duration::from_secs(6)), 2);
    }

    #[test]
    fn test_reference_moves_only_on_movement() {
        let start = Instant::now();
        let mut tracker = IdleTracker::new(start);
        tracker.observe((0, 0), start);
        // Creeping by less than the threshold each step never counts.
        for step in 1..=5 {
            assert!(!tracker.observe((step * 2, 0), start + Duration::from_secs(step as u64)));
        }
        assert!(tracker.observe((11, 0), start + Duration::from_secs(6)));
    }

    #[test]
    fn test_clock_going_backwards_saturates() {
        let start = Instant::now();
        let tracker = IdleTracker::new(start + Duration::from_secs(10));
        assert_eq!(tracker.elapsed_idle(start), Duration::ZERO);
    }

    #[test]
    #[should_panic(expected = "Idle threshold cannot be negative")]
    fn test_negative_threshold_panics() {
        IdleTracker::new(Instant::now()).with_threshold(-1);
    }
}
