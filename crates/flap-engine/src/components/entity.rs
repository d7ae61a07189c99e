use glam::Vec2;
use crate::api::types::EntityId;
use crate::components::animation::AnimationComponent;
use crate::components::sprite::SpriteComponent;
#[cfg(feature = "physics")]
use crate::core::physics::PhysicsBody;

/// Anything in the scene: a pipe, a ground tile, a digit, the bird.
/// Each capability is an optional field rather than a separate store.
#[derive(Debug, Clone)]
pub struct Entity {
    pub id: EntityId,
    /// Non-unique name used for lookups, e.g. "ground".
    pub tag: String,
    /// Inactive entities are skipped by the renderer.
    pub active: bool,
    /// Moves with the camera when it pans.
    pub pinned: bool,
    /// Centre in world space.
    pub pos: Vec2,
    pub rotation: f32,
    /// Drawn and collider size in world units.
    pub scale: Vec2,
    pub sprite: Option<SpriteComponent>,
    pub animation: Option<AnimationComponent>,
    #[cfg(feature = "physics")]
    pub body: Option<PhysicsBody>,
}

impl Entity {
    /// A bare, active entity at the origin with unit scale.
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pinned: false,
            pos: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
            sprite: None,
            animation: None,
            #[cfg(feature = "physics")]
            body: None,
        }
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_sprite(mut self, sprite: SpriteComponent) -> Self {
        self.sprite = Some(sprite);
        self
    }

    pub fn with_animation(mut self, animation: AnimationComponent) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn pinned(mut self) -> Self {
        self.pinned = true;
        self
    }

    #[cfg(feature = "physics")]
    pub fn with_body(mut self, body: PhysicsBody) -> Self {
        self.body = Some(body);
        self
    }

    #[cfg(feature = "physics")]
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    /// Right edge of the entity's rectangle.
    pub fn max_x(&self) -> f32 {
        self.pos.x + self.scale.x / 2.0
    }
}
