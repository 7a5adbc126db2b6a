/// Turns host frame timestamps into animation time.
///
/// The first timestamp seen becomes the epoch; later calls return seconds
/// since then. Timestamps earlier than the epoch read as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationClock {
    epoch_ms: Option<f64>,
    /// Number of `elapsed` calls since the last reset.
    pub frame_count: u64,
}

impl AnimationClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the epoch for a timestamp in milliseconds.
    pub fn elapsed(&mut self, timestamp_ms: f64) -> f32 {
        let epoch = *self.epoch_ms.get_or_insert(timestamp_ms);
        self.frame_count += 1;
        (((timestamp_ms - epoch) / 1000.0).max(0.0)) as f32
    }

    #[must_use]
    pub fn epoch_ms(&self) -> Option<f64> {
        self.epoch_ms
    }

    /// Forgets the epoch; the next timestamp starts a new one.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
