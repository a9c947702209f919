//! Time management utilities
//!
//! The simulation never reads a clock itself: `dt` is always handed in by the
//! driver. `Timer` is the wall-clock source a real-time driver uses for that.

use std::time::Instant;

/// Frame timer producing the elapsed time between successive frames
pub struct Timer {
    last_frame: Instant,
    delta_time: f64,
    total_time: f64,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Update the timer (should be called once per frame) and return the new delta
    pub fn update(&mut self) -> f64 {
        let now = Instant::now();
        self.advance(now.duration_since(self.last_frame).as_secs_f64());
        self.last_frame = now;
        self.delta_time
    }

    fn advance(&mut self, delta_time: f64) {
        self.delta_time = delta_time;
        self.total_time += delta_time;
        self.frame_count += 1;
    }

    /// Get the time since the last frame in seconds
    #[must_use]
    pub const fn delta_time(&self) -> f64 {
        self.delta_time
    }

    /// Get the total elapsed time since timer creation
    #[must_use]
    pub const fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Get the current frame count
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since timer creation
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_fps(&self) -> f64 {
        if self.total_time > 0.0 {
            self.frame_count as f64 / self.total_time
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_timer_starts_empty() {
        let timer = Timer::new();
        assert_eq!(timer.frame_count(), 0);
        assert_eq!(timer.delta_time(), 0.0);
        assert_eq!(timer.average_fps(), 0.0);
    }

    #[test]
    fn test_timer_accumulates() {
        let mut timer = Timer::new();
        timer.advance(0.5);
        timer.advance(0.25);

        assert_eq!(timer.frame_count(), 2);
        assert_relative_eq!(timer.delta_time(), 0.25);
        assert_relative_eq!(timer.total_time(), 0.75);
        assert_relative_eq!(timer.average_fps(), 2.0 / 0.75);
    }

    #[test]
    fn test_update_is_non_negative() {
        let mut timer = Timer::new();
        let delta = timer.update();
        assert!(delta >= 0.0);
        assert_eq!(timer.frame_count(), 1);
    }
}
