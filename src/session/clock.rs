//! Frame timing: per-frame deltas, time-scale presets and the fixed-step
//! accumulator.

/// One presentation frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Real milliseconds since the previous frame.
    pub delta_ms: f64,
}

impl FrameTime {
    pub fn new(delta_ms: f64) -> Self {
        Self { delta_ms }
    }

    /// Frame of `delta_secs` real seconds.
    pub fn from_secs(delta_secs: f64) -> Self {
        Self { delta_ms: delta_secs * 1000.0 }
    }

    /// Game seconds this frame covers at `time_scale`.
    #[inline]
    pub fn scaled_secs(&self, time_scale: f64) -> f64 {
        (self.delta_ms / 1000.0 * time_scale).max(0.0)
    }
}

/// Speed buttons. Pressing one while it is active returns to normal speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpeedPreset {
    Pause,
    Fast,
    Super,
}

impl SpeedPreset {
    pub fn scale(self) -> f64 {
        match self {
            SpeedPreset::Pause => 0.0,
            SpeedPreset::Fast => 5.0,
            SpeedPreset::Super => 100.0,
        }
    }
}

/// Accumulates real time and hands out whole fixed steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedStep {
    step_secs: f64,
    max_steps: u32,
    accumulator: f64,
}

impl FixedStep {
    pub fn new(step_secs: f64, max_steps: u32) -> Self {
        Self { step_secs: step_secs.max(f64::EPSILON), max_steps: max_steps.max(1), accumulator: 0.0 }
    }

    pub fn step_secs(&self) -> f64 {
        self.step_secs
    }

    /// Unconsumed time.
    pub fn backlog(&self) -> f64 {
        self.accumulator
    }

    /// Add `elapsed_secs` and return `(steps, dropped_secs)`. At most
    /// `max_steps` run; anything beyond that is dropped so one long stall
    /// cannot snowball.
    pub fn accumulate(&mut self, elapsed_secs: f64) -> (u32, f64) {
        if elapsed_secs.is_finite() && elapsed_secs > 0.0 {
            self.accumulator += elapsed_secs;
        }
        let mut steps = 0;
        while self.accumulator >= self.step_secs && steps < self.max_steps {
            self.accumulator -= self.step_secs;
            steps += 1;
        }
        let mut dropped = 0.0;
        if self.accumulator >= self.step_secs {
            dropped = self.accumulator - self.accumulator % self.step_secs;
            self.accumulator -= dropped;
        }
        (steps, dropped)
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
