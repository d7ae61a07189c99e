use bytemuck::{Pod, Zeroable};

use crate::components::entity::Entity;
use crate::components::sprite::SpriteComponent;

/// One sprite as the host renderer reads it from wasm memory:
/// 8 consecutive `f32`s, 32 bytes per instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// Centre in world space.
    pub x: f32,
    pub y: f32,
    /// Radians.
    pub rotation: f32,
    pub width: f32,
    pub height: f32,
    /// Atlas cell.
    pub col: f32,
    pub row: f32,
    pub alpha: f32,
}

impl RenderInstance {
    /// Place `sprite` at the entity's transform. The entity's scale is the
    /// drawn size.
    pub fn from_entity(entity: &Entity, sprite: &SpriteComponent) -> Self {
        Self {
            x: entity.pos.x,
            y: entity.pos.y,
            rotation: entity.rotation,
            width: entity.scale.x,
            height: entity.scale.y,
            col: sprite.col,
            row: sprite.row,
            alpha: sprite.alpha,
        }
    }
}

/// The current frame's instances, back to front.
#[derive(Default)]
pub struct RenderBuffer {
    instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instances(&self) -> &[RenderInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}
