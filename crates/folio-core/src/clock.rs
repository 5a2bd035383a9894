use std::time::Duration;

/// Elapsed-time accumulator owned by a scene driver.
///
/// Deltas are `Duration`s, so elapsed time can only grow.
#[derive(Clone, Debug, Default)]
pub struct Clock {
    elapsed: Duration,
    ticks: u64,
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed += dt;
        self.ticks += 1;
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[inline]
    pub fn elapsed_secs(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
