use bytemuck::{Pod, Zeroable};

/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// A sound event emitted by the game logic.
/// The low bits map to a game-defined sound in the TypeScript SoundManager.
/// When [`SoundEvent::CHAINED`] is set, the player waits for the previously
/// emitted sound to finish before starting this one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct SoundEvent(pub u32);

impl SoundEvent {
    /// High bit: "start after the previous sound in this frame completes".
    pub const CHAINED: u32 = 1 << 31;

    /// A sound that plays immediately (fire-and-forget).
    pub const fn play(id: u32) -> Self {
        Self(id & !Self::CHAINED)
    }

    /// A sound that waits for the previous one to finish.
    pub const fn after_previous(id: u32) -> Self {
        Self(id | Self::CHAINED)
    }

    /// The sound id without the chaining flag.
    pub const fn id(self) -> u32 {
        self.0 & !Self::CHAINED
    }

    pub const fn is_chained(self) -> bool {
        self.0 & Self::CHAINED != 0
    }
}

/// A game event communicated from Rust to TypeScript via shared memory.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chained_flag_round_trips_id() {
        let s = SoundEvent::after_previous(4);
        assert!(s.is_chained());
        assert_eq!(s.id(), 4);

        let plain = SoundEvent::play(4);
        assert!(!plain.is_chained());
        assert_eq!(plain.id(), 4);
    }

    #[test]
    fn game_event_is_four_floats() {
        assert_eq!(std::mem::size_of::<GameEvent>(), GameEvent::FLOATS * 4);
    }
}
