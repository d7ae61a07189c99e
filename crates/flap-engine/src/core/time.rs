/// Most steps a single frame may run. Time beyond that is dropped.
pub const MAX_STEPS_PER_FRAME: u32 = 10;

/// Turns variable frame times into a whole number of fixed steps.
pub struct FixedTimestep {
    dt: f32,
    /// Time not yet consumed by a step.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Bank `frame_dt` and return how many steps are due.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        let cap = self.dt * MAX_STEPS_PER_FRAME as f32;
        self.accumulator = (self.accumulator + frame_dt.max(0.0)).min(cap);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// Derives per-frame delta time from a monotonically increasing timestamp.
///
/// The first sample yields `0.0` so a freshly started world does not jump.
/// A timestamp that goes backwards is clamped to a zero delta.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Record `now` (seconds) and return the elapsed time since the previous sample.
    pub fn tick(&mut self, now: f64) -> f32 {
        let dt = match self.last {
            Some(last) => (now - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last = Some(now);
        dt
    }

    /// Forget the previous sample; the next `tick` yields zero.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
