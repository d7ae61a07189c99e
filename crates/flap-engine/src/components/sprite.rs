/// Position of an atlas in the manifest's atlas list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AtlasId(pub u32);

/// An atlas cell plus draw settings. Size comes from the entity's `scale`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteComponent {
    pub atlas: AtlasId,
    pub col: f32,
    pub row: f32,
    /// 0 hides the sprite without removing it.
    pub alpha: f32,
    /// Higher draws later, on top.
    pub z: f32,
}

impl SpriteComponent {
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_z(mut self, z: f32) -> Self {
        self.z = z;
        self
    }
}

impl Default for SpriteComponent {
    fn default() -> Self {
        Self {
            atlas: AtlasId(0),
            col: 0.0,
            row: 0.0,
            alpha: 1.0,
            z: 0.0,
        }
    }
}
