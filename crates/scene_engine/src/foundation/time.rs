//! Time management utilities

use std::time::Instant;

/// How the clock advances each frame
#[derive(Debug, Clone, Copy)]
enum ClockMode {
    /// Follow wall-clock time
    RealTime,

    /// Advance by a fixed step per update (headless runs and tests)
    FixedStep(f32),
}

/// Per-frame animation clock
///
/// Tracks the time since the last frame and the total elapsed time since
/// the clock started. `elapsed()` is monotonically non-decreasing, which
/// animation code relies on.
#[derive(Debug)]
pub struct FrameClock {
    last_frame: Instant,
    delta_time: f32,
    elapsed: f32,
    frame_count: u64,
    mode: ClockMode,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a clock driven by wall-clock time
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            elapsed: 0.0,
            frame_count: 0,
            mode: ClockMode::RealTime,
        }
    }

    /// Create a clock that advances by `step` seconds per update
    ///
    /// Negative steps are clamped to zero so elapsed time can never
    /// run backwards.
    pub fn fixed_step(step: f32) -> Self {
        Self {
            mode: ClockMode::FixedStep(step.max(0.0)),
            ..Self::new()
        }
    }

    /// Advance the clock (call once per frame)
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta_time = match self.mode {
            ClockMode::RealTime => now.duration_since(self.last_frame).as_secs_f32(),
            ClockMode::FixedStep(step) => step,
        };
        self.elapsed += self.delta_time;
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time in seconds since the clock started
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Get the number of completed updates
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
