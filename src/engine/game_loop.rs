/// Fixed timestep tick scheduling
///
/// Frame time is accumulated and spent in whole simulation ticks, so the
/// player controller and physics always advance by the same `dt` no matter
/// how fast frames arrive.
use std::time::Duration;

/// Target simulation rate (60 ticks per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;

/// Maximum number of ticks per frame to prevent spiral of death
pub const MAX_TICKS_PER_FRAME: u32 = 5;

/// Accumulator that converts frame time into simulation ticks
#[derive(Debug)]
pub struct FixedTimestep {
    step: Duration,
    accumulator: Duration,
    max_ticks: u32,
    paused: bool,
    tick_count: u64,
}

impl FixedTimestep {
    pub fn new(step: Duration, max_ticks: u32) -> Self {
        Self {
            step,
            accumulator: Duration::ZERO,
            max_ticks,
            paused: false,
            tick_count: 0,
        }
    }

    /// Feed one frame's elapsed time, returns the number of ticks to run
    pub fn advance(&mut self, frame_time: Duration) -> u32 {
        if self.paused || self.step.is_zero() {
            return 0;
        }

        self.accumulator += frame_time;

        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < self.max_ticks {
            self.accumulator -= self.step;
            ticks += 1;
        }

        // Whatever couldn't be simulated this frame is dropped
        if ticks == self.max_ticks && self.accumulator >= self.step {
            log::warn!(
                "Simulation fell behind, dropping {:.1}ms",
                self.accumulator.as_secs_f32() * 1000.0
            );
            self.accumulator = Duration::ZERO;
        }

        self.tick_count += u64::from(ticks);
        ticks
    }

    /// Tick length in seconds
    pub fn dt(&self) -> f32 {
        self.step.as_secs_f32()
    }

    /// Fraction of a tick left in the accumulator, for interpolation
    pub fn alpha(&self) -> f32 {
        if self.step.is_zero() {
            return 0.0;
        }
        self.accumulator.as_secs_f32() / self.step.as_secs_f32()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Total simulated time in seconds
    pub fn simulated_secs(&self) -> f64 {
        self.step.as_secs_f64() * self.tick_count as f64
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Simulation paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent a tick burst
            self.accumulator = Duration::ZERO;
            log::info!("Simulation resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(Duration::from_secs_f32(FIXED_TIMESTEP), MAX_TICKS_PER_FRAME)
    }
}
