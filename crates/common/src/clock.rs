use std::time::Instant;

/// Largest frame delta fed to animations, so a stalled window does not
/// make everything jump.
const MAX_FRAME_DELTA: f32 = 0.1;

/// Per-frame timing shared by every demo's update step.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    /// Seconds since the clock started.
    pub elapsed: f32,
    /// Seconds since the previous frame, clamped.
    pub dt: f32,
    /// Unclamped duration of the previous frame, for the fps readout.
    pub last_frame_secs: f32,
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            dt: 0.0,
            last_frame_secs: 0.0,
            last: Instant::now(),
        }
    }

    /// A clock frozen at `elapsed`, for headless frames and tests.
    pub fn at(elapsed: f32) -> Self {
        Self {
            elapsed,
            ..Self::new()
        }
    }

    /// Advance using the wall clock.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let secs = (now - self.last).as_secs_f32();
        self.last = now;
        self.advance(secs);
    }

    /// Advance by an explicit duration.
    pub fn advance(&mut self, secs: f32) {
        self.last_frame_secs = secs;
        self.dt = secs.min(MAX_FRAME_DELTA);
        self.elapsed += self.dt;
    }

    /// Frames per second implied by the last frame, if it had a duration.
    pub fn fps(&self) -> Option<f32> {
        (self.last_frame_secs > 0.0).then(|| 1.0 / self.last_frame_secs)
    }
}
