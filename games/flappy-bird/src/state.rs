/// Where the run is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first tap; the bird hovers.
    Intro,
    Playing,
    /// Frozen after a crash until the next tap.
    Dead,
}

/// The one mutable record of a run. `is_dead` implies `is_started`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GameState {
    pub score: u32,
    pub is_dead: bool,
    pub is_started: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match (self.is_started, self.is_dead) {
            (false, _) => Phase::Intro,
            (true, false) => Phase::Playing,
            (true, true) => Phase::Dead,
        }
    }

    pub fn start(&mut self) {
        self.is_started = true;
    }

    /// Count a point. Ignored unless playing.
    pub fn add_point(&mut self) -> bool {
        if self.phase() != Phase::Playing {
            return false;
        }
        self.score += 1;
        true
    }

    /// End the run. Returns `false` if not playing, so a second crash is a no-op.
    pub fn die(&mut self) -> bool {
        if self.phase() != Phase::Playing {
            return false;
        }
        self.is_dead = true;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
