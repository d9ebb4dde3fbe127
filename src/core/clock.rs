//! Core domain: frame clock with an injectable time source.

use bevy::prelude::*;

/// Largest frame step handed to the simulation, in seconds.
pub const MAX_FRAME_STEP: f32 = 0.032;

/// Monotonic time in milliseconds.
pub trait TimeSource {
    fn now_ms(&self) -> f64;
}

impl TimeSource for Time {
    fn now_ms(&self) -> f64 {
        self.elapsed_secs_f64() * 1000.0
    }
}

/// Hand-driven time source for tests.
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ManualTime {
    now_ms: f64,
}

#[cfg(test)]
impl ManualTime {
    pub fn starting_at(now_ms: f64) -> Self {
        Self { now_ms }
    }

    pub fn advance_secs(&mut self, secs: f32) {
        self.now_ms += f64::from(secs) * 1000.0;
    }
}

#[cfg(test)]
impl TimeSource for ManualTime {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }
}

/// One frame's worth of time: the absolute timestamp and the clamped step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    pub now_ms: f64,
    pub dt: f32,
}

impl FrameTime {
    pub fn new(now_ms: f64, dt: f32) -> Self {
        Self { now_ms, dt }
    }
}

/// Turns successive timestamps into clamped frame steps.
#[derive(Resource, Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_step: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_STEP)
    }
}

impl FrameClock {
    pub fn new(max_step: f32) -> Self {
        Self {
            last_ms: None,
            max_step: max_step.max(0.0),
        }
    }

    pub fn max_step(&self) -> f32 {
        self.max_step
    }

    /// Sample the source and return the step since the previous tick.
    /// The first tick has a zero step.
    pub fn tick(&mut self, source: &impl TimeSource) -> FrameTime {
        let now_ms = source.now_ms();
        let raw = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);

        // Clamp order matters: a backwards clock yields 0, not a negative step.
        FrameTime::new(now_ms, raw.max(0.0).min(self.max_step))
    }
}
