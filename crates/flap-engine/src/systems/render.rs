use crate::components::entity::Entity;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from a set of entities.
/// Inactive and sprite-less entities are skipped; the rest are sorted by the
/// sprite's `z` (stable, so equal z keeps spawn order) and capped at `max`.
pub fn build_render_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    buffer: &mut RenderBuffer,
    max: usize,
) {
    buffer.clear();

    let mut visible: Vec<(f32, RenderInstance)> = entities
        .filter(|e| e.active)
        .filter_map(|entity| {
            let sprite = entity.sprite.as_ref()?;
            Some((sprite.z, RenderInstance::from_entity(entity, sprite)))
        })
        .collect();

    visible.sort_by(|a, b| a.0.total_cmp(&b.0));

    if visible.len() > max {
        log::warn!("render buffer full: dropping {} sprites", visible.len() - max);
    }

    for (_, instance) in visible.into_iter().take(max) {
        buffer.push(instance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::sprite::SpriteComponent;
    use glam::Vec2;

    fn sprite_at(id: u32, x: f32, z: f32) -> Entity {
        Entity::new(EntityId(id))
            .with_pos(Vec2::new(x, 0.0))
            .with_scale(Vec2::new(10.0, 20.0))
            .with_sprite(SpriteComponent::default().with_z(z))
    }

    #[test]
    fn sorts_back_to_front_by_z() {
        let entities = vec![sprite_at(1, 1.0, 5.0), sprite_at(2, 2.0, -1.0), sprite_at(3, 3.0, 1.0)];
        let mut buffer = RenderBuffer::default();
        build_render_buffer(entities.iter(), &mut buffer, 16);

        let xs: Vec<f32> = buffer.instances().iter().map(|i| i.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 1.0]);
        assert_eq!(buffer.instances()[0].height, 20.0);
    }

    #[test]
    fn skips_inactive_and_invisible() {
        let mut hidden = sprite_at(1, 0.0, 0.0);
        hidden.active = false;
        let entities = vec![hidden, Entity::new(EntityId(2)), sprite_at(3, 0.0, 0.0)];
        let mut buffer = RenderBuffer::default();
        build_render_buffer(entities.iter(), &mut buffer, 16);
        assert_eq!(buffer.instance_count(), 1);
    }

    #[test]
    fn respects_capacity() {
        let entities: Vec<Entity> = (0..10).map(|i| sprite_at(i, i as f32, 0.0)).collect();
        let mut buffer = RenderBuffer::default();
        build_render_buffer(entities.iter(), &mut buffer, 4);
        assert_eq!(buffer.instance_count(), 4);
    }
}
