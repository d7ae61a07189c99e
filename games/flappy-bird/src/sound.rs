use flap_engine::SoundEvent;

/// The five effects the game plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Wing,
    Swooshing,
    Point,
    Hit,
    Die,
}

impl SoundEffect {
    /// Manifest key of the audio asset.
    pub const fn asset_name(self) -> &'static str {
        match self {
            SoundEffect::Wing => "sfx_wing",
            SoundEffect::Swooshing => "sfx_swooshing",
            SoundEffect::Point => "sfx_point",
            SoundEffect::Hit => "sfx_hit",
            SoundEffect::Die => "sfx_die",
        }
    }

    /// Numeric id the host's sound manager maps to the asset.
    pub const fn id(self) -> u32 {
        match self {
            SoundEffect::Wing => 1,
            SoundEffect::Swooshing => 2,
            SoundEffect::Point => 3,
            SoundEffect::Hit => 4,
            SoundEffect::Die => 5,
        }
    }

    /// Play immediately.
    pub const fn now(self) -> SoundEvent {
        SoundEvent::play(self.id())
    }

    /// Play once the previously emitted sound has finished.
    pub const fn after_previous(self) -> SoundEvent {
        SoundEvent::after_previous(self.id())
    }
}
