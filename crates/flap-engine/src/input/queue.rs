/// Key code the browser reports for the space bar.
pub const KEY_SPACE: u32 = 32;

/// Raw input forwarded by the host page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Touch or click at world coordinates.
    PointerDown { x: f32, y: f32 },
    KeyDown { key_code: u32 },
}

impl InputEvent {
    /// Any pointer press, or the space bar.
    pub fn is_tap(&self) -> bool {
        match self {
            InputEvent::PointerDown { .. } => true,
            InputEvent::KeyDown { key_code } => *key_code == KEY_SPACE,
        }
    }
}

/// Events collected between frames. The runner hands the queue to the game
/// once and then clears it.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(8),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// How many of the pending events count as taps.
    pub fn taps(&self) -> usize {
        self.events.iter().filter(|e| e.is_tap()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
