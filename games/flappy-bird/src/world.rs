//! Builds the scene a run starts from.

use flap_engine::{
    AnimationComponent, AnimationDef, BodyDesc, ColliderDesc, ColliderMaterial, EngineContext,
    Entity, EntityId,
};
use glam::Vec2;

use crate::category::Category;
use crate::config::FlappyConfig;
use crate::digits::DigitDisplay;
use crate::scroller::{GROUND_TAG, GROUND_TILES};

pub const BIRD_TAG: &str = "bird";
pub const INTRO_TAG: &str = "intro";
pub const GAME_OVER_TAG: &str = "gameover";
pub const GAME_OVER_SPRITE: &str = "gameover";

const BACKGROUND_Z: f32 = -1.0;
const GROUND_Z: f32 = 1.0;
const BIRD_Z: f32 = 5.0;
const BANNER_Z: f32 = 20.0;

/// Bird sprite size used when the manifest does not say.
const BIRD_FALLBACK: Vec2 = Vec2::new(34.0, 24.0);
const WING_FRAMES: [&str; 4] = ["bird-1", "bird-2", "bird-1", "bird-3"];

/// Entities the game needs to reach after the world is built.
#[derive(Debug, Clone)]
pub struct World {
    pub bird: EntityId,
    pub background: EntityId,
    pub intro: EntityId,
    pub score: DigitDisplay,
}

/// Spawn everything a fresh run shows: ceiling, background, ground, bird,
/// hidden score and intro banner. The camera is assumed to be at its origin.
pub fn build(ctx: &mut EngineContext, cfg: &FlappyConfig) -> World {
    let (w, h) = (cfg.world_width, cfg.world_height);
    let material = ColliderMaterial { restitution: 0.0, ..ColliderMaterial::default() };

    // Ceiling
    let top_id = ctx.next_id();
    let top_size = Vec2::new(w, 1.0);
    ctx.spawn_with_body(
        Entity::new(top_id)
            .with_tag("ceiling")
            .with_pos(Vec2::new(w / 2.0, h))
            .with_scale(top_size)
            .pinned(),
        BodyDesc::kinematic(ColliderDesc::rect(top_size))
            .with_position(Vec2::new(w / 2.0, h))
            .with_fixed_rotation(true)
            .with_masks(Category::Obstacle.masks()),
        material,
    );

    let background = ctx.next_id();
    ctx.scene.spawn(
        Entity::new(background)
            .with_tag("background")
            .with_pos(Vec2::new(w / 2.0, h / 2.0))
            .with_scale(Vec2::new(w, h))
            .with_sprite(ctx.assets.resolve("FB_BG").sprite.with_z(BACKGROUND_Z))
            .pinned(),
    );

    let ground = Vec2::new(cfg.ground_tile_width, cfg.ground_height());
    let ground_sprite = ctx.assets.resolve("FB_Ground").sprite.with_z(GROUND_Z);
    for i in 0..GROUND_TILES {
        let id = ctx.next_id();
        let pos = Vec2::new(i as f32 * ground.x, ground.y / 2.0);
        ctx.spawn_with_body(
            Entity::new(id)
                .with_tag(GROUND_TAG)
                .with_pos(pos)
                .with_scale(ground)
                .with_sprite(ground_sprite.clone()),
            BodyDesc::fixed(ColliderDesc::rect(ground))
                .with_position(pos)
                .with_masks(Category::Obstacle.masks()),
            material,
        );
    }

    let bird = spawn_bird(ctx, cfg, material);

    let score = DigitDisplay::spawn(ctx, Vec2::new(w / 2.0, h - cfg.hud_offset), cfg.digit_scale);

    let native = ctx.assets.resolve("message");
    let intro_w = w * cfg.intro_width_ratio;
    let intro_h = intro_w * native.size.y / native.size.x;
    let intro = ctx.next_id();
    ctx.scene.spawn(
        Entity::new(intro)
            .with_tag(INTRO_TAG)
            .with_pos(Vec2::new(w / 2.0, h - cfg.hud_offset - intro_h / 2.0))
            .with_scale(Vec2::new(intro_w, intro_h))
            .with_sprite(native.sprite.with_z(BANNER_Z))
            .pinned(),
    );

    World {
        bird,
        background,
        intro,
        score,
    }
}

/// The bird hovers as a kinematic body until the run starts.
fn spawn_bird(ctx: &mut EngineContext, cfg: &FlappyConfig, material: ColliderMaterial) -> EntityId {
    let native = ctx.assets.size_or(WING_FRAMES[0], BIRD_FALLBACK);
    let size = Vec2::new(cfg.bird_height * native.x / native.y, cfg.bird_height);
    let pos = Vec2::new(cfg.world_width / 2.0 - 70.0, cfg.world_height / 2.0);

    let frames = WING_FRAMES
        .iter()
        .map(|name| {
            let sprite = ctx.assets.resolve(name).sprite;
            (sprite.col, sprite.row)
        })
        .collect();
    let flapping = AnimationComponent::new(AnimationDef::from_frames(frames, cfg.wing_frame_duration, true));
    let sprite = ctx.assets.resolve(WING_FRAMES[0]).sprite.with_z(BIRD_Z);

    let id = ctx.next_id();
    ctx.spawn_with_body(
        Entity::new(id)
            .with_tag(BIRD_TAG)
            .with_pos(pos)
            .with_scale(size)
            .with_sprite(sprite)
            .with_animation(flapping)
            .pinned(),
        BodyDesc::kinematic(ColliderDesc::rect(size))
            .with_position(pos)
            .with_fixed_rotation(true)
            .with_masks(Category::Bird.masks()),
        material,
    )
}

/// Show the game-over banner over the centre of the background.
pub fn spawn_game_over(ctx: &mut EngineContext, world: &World, scale: f32) -> EntityId {
    let center = ctx
        .scene
        .get(world.background)
        .map(|e| e.pos)
        .unwrap_or_else(|| ctx.camera.center);
    let banner = ctx.assets.resolve(GAME_OVER_SPRITE);
    let id = ctx.next_id();
    ctx.scene.spawn(
        Entity::new(id)
            .with_tag(GAME_OVER_TAG)
            .with_pos(center)
            .with_scale(banner.size * scale)
            .with_sprite(banner.sprite.with_z(BANNER_Z)),
    );
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::GLYPH_TAG;

    #[test]
    fn fresh_world_layout() {
        let cfg = FlappyConfig::default();
        let mut ctx = EngineContext::new();
        let world = build(&mut ctx, &cfg);

        assert_eq!(ctx.scene.count_tag(GROUND_TAG), GROUND_TILES);
        // ceiling + 3 ground tiles + bird
        assert_eq!(ctx.physics.body_count(), 5);

        let bird = ctx.scene.get(world.bird).unwrap();
        assert_eq!(bird.pos, Vec2::new(cfg.world_width / 2.0 - 70.0, cfg.world_height / 2.0));
        assert_eq!(bird.scale.y, 40.0);
        assert!(bird.pinned);
        assert!(!ctx.physics.is_dynamic(bird.body.as_ref().unwrap()));
        assert_eq!(bird.animation.as_ref().unwrap().def.frame_count(), 4);

        let intro = ctx.scene.get(world.intro).unwrap();
        assert!((intro.scale.x - cfg.world_width * 0.7).abs() < 1e-3);
        let intro_top = intro.pos.y + intro.scale.y / 2.0;
        assert!((intro_top - (cfg.world_height - 100.0)).abs() < 1e-3);

        assert!(!world.score.is_visible());
        assert_eq!(ctx.scene.count_tag(GLYPH_TAG), 0);
    }

    #[test]
    fn game_over_sits_on_background_centre() {
        let cfg = FlappyConfig::default();
        let mut ctx = EngineContext::new();
        let world = build(&mut ctx, &cfg);
        ctx.pan_camera(40.0);

        let id = spawn_game_over(&mut ctx, &world, 0.5);
        let banner = ctx.scene.get(id).unwrap();
        assert_eq!(banner.pos, Vec2::new(cfg.world_width / 2.0 + 40.0, cfg.world_height / 2.0));
        assert_eq!(banner.scale, flap_engine::assets::registry::PLACEHOLDER_SIZE * 0.5);
    }

    #[test]
    fn game_over_banner_uses_its_sprite_size() {
        let json = r#"{
            "atlases": [ { "name": "flappy", "cols": 16, "rows": 4, "path": "flappy.png" } ],
            "sprites": {
                "gameover": { "atlas": 0, "col": 4, "row": 2, "size": [192, 42] }
            }
        }"#;
        let cfg = FlappyConfig::default();
        let mut ctx = EngineContext::new();
        ctx.assets = flap_engine::SpriteRegistry::from_manifest(&flap_engine::AssetManifest::from_json(json).unwrap());
        let world = build(&mut ctx, &cfg);

        let id = spawn_game_over(&mut ctx, &world, cfg.game_over_scale);
        let banner = ctx.scene.get(id).unwrap();
        assert_eq!(banner.tag, GAME_OVER_TAG);
        assert_eq!(banner.scale, Vec2::new(96.0, 21.0));
        let sprite = banner.sprite.as_ref().unwrap();
        assert_eq!((sprite.col, sprite.row), (4.0, 2.0));
    }
}
