//! Shared utilities

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Deterministic xorshift64 generator for reproducible scene layouts
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed.max(1) } // xorshift sticks at zero
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Random i32 in `[min, max]`; returns `min` for an empty range
    pub fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (max as i64 - min as i64 + 1) as u64;
        (min as i64 + (self.next_u64() % span) as i64) as i32
    }
}

// ============================================================================
// Frame timing
// ============================================================================

/// Rolling-window frame timer for the host loop
pub struct FpsCounter {
    frame_times: VecDeque<f32>,
    last_frame: Instant,
    sample_count: usize,
}

impl FpsCounter {
    pub fn new(sample_count: usize) -> Self {
        Self {
            frame_times: VecDeque::with_capacity(sample_count),
            last_frame: Instant::now(),
            sample_count: sample_count.max(1),
        }
    }

    /// Record a frame boundary now. Returns (delta_time, average_fps).
    pub fn tick(&mut self) -> (f32, f32) {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        self.record(dt)
    }

    /// Record a frame of the given duration
    pub fn record(&mut self, frame: Duration) -> (f32, f32) {
        let dt = frame.as_secs_f32();
        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.sample_count {
            self.frame_times.pop_front();
        }
        let avg = self.avg_frame_time();
        (dt, if avg > 0.0 { 1.0 / avg } else { 0.0 })
    }

    fn avg_frame_time(&self) -> f32 {
        self.frame_times.iter().sum::<f32>() / self.frame_times.len().max(1) as f32
    }

    pub fn avg_frame_time_ms(&self) -> f32 {
        self.avg_frame_time() * 1000.0
    }

    /// (min_fps, max_fps) over the sample window
    pub fn min_max_fps(&self) -> (f32, f32) {
        if self.frame_times.is_empty() {
            return (0.0, 0.0);
        }
        let fastest = self.frame_times.iter().copied().fold(f32::INFINITY, f32::min);
        let slowest = self.frame_times.iter().copied().fold(0.0, f32::max);
        let fps = |dt: f32| if dt > 0.0 { 1.0 / dt } else { 0.0 };
        (fps(slowest), fps(fastest))
    }

    pub fn frame_count(&self) -> usize {
        self.frame_times.len()
    }
}
