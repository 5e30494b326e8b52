//! Time management utilities

use std::time::Instant;

/// Frame timer.
///
/// Tracks elapsed time since creation either from the wall clock
/// ([`Timer::update`]) or by advancing a fixed step ([`Timer::advance`]) for
/// headless runs where simulated time should not depend on the host.
pub struct Timer {
    last_frame: Instant,
    delta_time: f32,
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
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Update the timer from the wall clock (should be called once per frame)
    pub fn update(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.record(elapsed.as_secs_f32());
    }

    /// Advance the timer by a fixed step in seconds
    pub fn advance(&mut self, step: f32) {
        self.record(step.max(0.0));
    }

    fn record(&mut self, delta: f32) {
        self.delta_time = delta;
        self.total_time += f64::from(delta);
        self.frame_count += 1;
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time in seconds
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since timer creation
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            (self.frame_count as f64 / self.total_time) as f32
        } else {
            0.0
        }
    }
}
