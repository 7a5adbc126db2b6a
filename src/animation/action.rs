use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoopMode {
    /// Play once and hold the end pose.
    Once,
    /// Wrap back to the start pose after each pass.
    Loop,
    /// Run forward, then backward (triangle wave).
    PingPong,
}

/// Maps elapsed wall time onto blend progress `t ∈ [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playback {
    /// Seconds for one start→end pass.
    pub duration: f32,
    pub loop_mode: LoopMode,
    pub time_scale: f32,
}

impl Playback {
    #[must_use]
    pub fn new(duration: f32, loop_mode: LoopMode) -> Self {
        Self {
            duration,
            loop_mode,
            time_scale: 1.0,
        }
    }

    /// Normalized progress for `elapsed` seconds since the clock epoch.
    #[must_use]
    pub fn progress(&self, elapsed: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }

        let cycles = elapsed * self.time_scale / self.duration;

        match self.loop_mode {
            LoopMode::Once => cycles.clamp(0.0, 1.0),
            LoopMode::Loop => cycles.rem_euclid(1.0),
            LoopMode::PingPong => {
                // Normalize into the [0, 2) double cycle, reverse on the second half
                let t = cycles.rem_euclid(2.0);
                if t > 1.0 { 2.0 - t } else { t }
            }
        }
    }

    /// `true` once a [`LoopMode::Once`] playback has reached its end.
    #[must_use]
    pub fn is_finished(&self, elapsed: f32) -> bool {
        self.loop_mode == LoopMode::Once && elapsed * self.time_scale >= self.duration
    }
}
