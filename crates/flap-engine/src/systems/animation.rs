//! Frame-by-frame sprite animation.

use crate::core::scene::Scene;

/// Advance every running animation by `dt` and point its sprite at the
/// current atlas cell. Entities without a sprite still advance.
pub fn tick_animations(scene: &mut Scene, dt: f32) {
    for entity in scene.iter_mut() {
        let Some(anim) = entity.animation.as_mut() else {
            continue;
        };
        anim.tick(dt);
        let (Some((col, row)), Some(sprite)) = (anim.current_frame(), entity.sprite.as_mut()) else {
            continue;
        };
        sprite.col = col;
        sprite.row = row;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::animation::{AnimationComponent, AnimationDef};
    use crate::components::entity::Entity;
    use crate::components::sprite::SpriteComponent;

    // up, mid, up, down
    fn wings() -> AnimationDef {
        AnimationDef::from_frames(vec![(0.0, 0.0), (1.0, 0.0), (0.0, 0.0), (2.0, 0.0)], 0.1, true)
    }

    fn cell(scene: &Scene) -> f32 {
        scene.get(EntityId(1)).unwrap().sprite.as_ref().unwrap().col
    }

    #[test]
    fn sprite_follows_the_frame_and_wraps() {
        let mut scene = Scene::new();
        scene.spawn(
            Entity::new(EntityId(1))
                .with_sprite(SpriteComponent::default())
                .with_animation(AnimationComponent::new(wings())),
        );

        tick_animations(&mut scene, 0.15);
        assert_eq!(cell(&scene), 1.0);
        tick_animations(&mut scene, 0.2);
        assert_eq!(cell(&scene), 2.0);
        tick_animations(&mut scene, 0.1);
        assert_eq!(cell(&scene), 0.0);
    }

    #[test]
    fn stopped_animation_freezes_the_sprite() {
        let mut anim = AnimationComponent::new(wings());
        anim.stop();
        let mut scene = Scene::new();
        scene.spawn(
            Entity::new(EntityId(1))
                .with_sprite(SpriteComponent::default().with_z(5.0))
                .with_animation(anim),
        );

        tick_animations(&mut scene, 0.5);
        assert_eq!(cell(&scene), 0.0);
    }
}
