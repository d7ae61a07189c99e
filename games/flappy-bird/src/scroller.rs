//! Sideways scrolling: the camera and everything pinned to it move right at
//! a constant speed, and ground tiles that fall behind are moved ahead.

use flap_engine::{EngineContext, EntityId, FrameClock};
use glam::Vec2;

pub const GROUND_TAG: &str = "ground";
pub const GROUND_TILES: usize = 3;

/// Distance covered in `dt` seconds. Negative time covers nothing.
pub fn scroll_offset(speed: f32, dt: f32) -> f32 {
    speed * dt.max(0.0)
}

/// Move every ground tile whose right edge has passed the camera's left edge
/// two tile widths ahead. Returns how many tiles moved.
pub fn recycle_ground(ctx: &mut EngineContext) -> usize {
    let left = ctx.camera.rect().min_x;
    let behind: Vec<(EntityId, Vec2)> = ctx
        .scene
        .tagged(GROUND_TAG)
        .filter(|e| e.max_x() < left)
        .map(|e| (e.id, e.pos + Vec2::new(e.scale.x * 2.0, 0.0)))
        .collect();

    for &(id, pos) in &behind {
        ctx.set_position(id, pos);
    }
    behind.len()
}

/// Drives the camera from the simulation clock.
#[derive(Debug, Clone)]
pub struct Scroller {
    speed: f32,
    clock: FrameClock,
}

impl Scroller {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            clock: FrameClock::new(),
        }
    }

    /// Forget the last sample so the next frame moves nothing.
    pub fn reset(&mut self) {
        self.clock.reset();
    }

    /// Sample the clock, pan by the elapsed distance and recycle ground.
    /// Returns the elapsed time.
    pub fn advance(&mut self, ctx: &mut EngineContext) -> f32 {
        let dt = self.clock.tick(ctx.now());
        let dx = scroll_offset(self.speed, dt);
        if dx > 0.0 {
            ctx.pan_camera(dx);
        }
        let moved = recycle_ground(ctx);
        if moved > 0 {
            log::trace!("recycled {} ground tiles", moved);
        }
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flap_engine::Entity;
    use proptest::prelude::*;

    const TILE: f32 = 336.0;

    fn ground_ctx() -> EngineContext {
        let mut ctx = EngineContext::new();
        for i in 0..GROUND_TILES {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag(GROUND_TAG)
                    .with_pos(Vec2::new(i as f32 * TILE, 50.0))
                    .with_scale(Vec2::new(TILE, 100.0)),
            );
        }
        ctx
    }

    fn ground_xs(ctx: &EngineContext) -> Vec<f32> {
        ctx.scene.tagged(GROUND_TAG).map(|e| e.pos.x).collect()
    }

    #[test]
    fn first_frame_does_not_move() {
        let mut ctx = EngineContext::new();
        ctx.advance_time(5.0);
        let mut scroller = Scroller::new(180.0);
        assert_eq!(scroller.advance(&mut ctx), 0.0);
        assert_eq!(ctx.camera.rect().min_x, 0.0);

        ctx.advance_time(0.5);
        scroller.advance(&mut ctx);
        assert!((ctx.camera.rect().min_x - 90.0).abs() < 1e-3);
    }

    #[test]
    fn reset_restarts_the_clock() {
        let mut ctx = EngineContext::new();
        let mut scroller = Scroller::new(180.0);
        scroller.advance(&mut ctx);
        scroller.reset();
        ctx.advance_time(2.0);
        assert_eq!(scroller.advance(&mut ctx), 0.0);
    }

    #[test]
    fn tile_behind_camera_jumps_two_widths() {
        let mut ctx = ground_ctx();
        ctx.pan_camera(TILE / 2.0 - 1.0);
        assert_eq!(recycle_ground(&mut ctx), 0);

        ctx.pan_camera(2.0);
        assert_eq!(recycle_ground(&mut ctx), 1);
        assert_eq!(ground_xs(&ctx), vec![2.0 * TILE, TILE, 2.0 * TILE]);
    }

    proptest! {
        #[test]
        fn pinned_entities_move_by_speed_times_dt(
            speed in 0.0f32..600.0,
            dt in -0.1f32..0.5,
            xs in proptest::collection::vec(-500.0f32..500.0, 1..6),
        ) {
            let mut ctx = EngineContext::new();
            let mut ids = Vec::new();
            for &x in &xs {
                let id = ctx.next_id();
                ctx.scene.spawn(Entity::new(id).with_pos(Vec2::new(x, 10.0)).pinned());
                ids.push(id);
            }
            let fixed = ctx.next_id();
            ctx.scene.spawn(Entity::new(fixed).with_pos(Vec2::new(3.0, 4.0)));
            let cam = ctx.camera.center;

            let dx = scroll_offset(speed, dt);
            ctx.pan_camera(dx);

            prop_assert!(dx >= 0.0);
            for (id, x) in ids.iter().zip(&xs) {
                let e = ctx.scene.get(*id).unwrap();
                prop_assert!((e.pos.x - (x + dx)).abs() < 1e-3);
                prop_assert_eq!(e.pos.y, 10.0);
            }
            prop_assert!((ctx.camera.center.x - (cam.x + dx)).abs() < 1e-3);
            prop_assert_eq!(ctx.scene.get(fixed).unwrap().pos, Vec2::new(3.0, 4.0));
        }

        #[test]
        fn ground_always_has_three_tiles(steps in proptest::collection::vec(0.0f32..0.2, 1..200)) {
            let mut ctx = ground_ctx();
            let mut scroller = Scroller::new(180.0);
            for dt in steps {
                let before = ground_xs(&ctx);
                ctx.advance_time(dt);
                scroller.advance(&mut ctx);
                let after = ground_xs(&ctx);

                prop_assert_eq!(after.len(), GROUND_TILES);
                for (b, a) in before.iter().zip(&after) {
                    prop_assert!(a == b || (a - (b + 2.0 * TILE)).abs() < 1e-3);
                }
            }
        }
    }
}
