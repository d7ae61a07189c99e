//! Obstacle pairs: two pipes around a gap plus an invisible score trigger.

use std::f32::consts::PI;

use flap_engine::{BodyDesc, ColliderDesc, ColliderMaterial, EngineContext, Entity, EntityId};
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::category::Category;
use crate::config::FlappyConfig;

pub const PIPE_SPRITE: &str = "pipe green";
pub const TOP_PIPE_TAG: &str = "pipe-top";
pub const BOTTOM_PIPE_TAG: &str = "pipe-bottom";
pub const TRIGGER_TAG: &str = "score-trigger";
const PIPE_Z: f32 = 0.0;

/// Bounds for the top pipe's lower edge.
///
/// `lo` keeps the top pipe reaching the top of the viewport and the bottom
/// pipe clear of the ground; `hi` keeps the bottom pipe reaching the ground
/// and the gap below 90% of the height.
pub fn gap_range(world_height: f32, pipe_height: f32, ground_height: f32, gap: f32) -> (f32, f32) {
    let lo = (world_height - pipe_height).max(ground_height + gap + 0.1 * pipe_height);
    let hi = (pipe_height + ground_height + gap).min(0.9 * world_height);
    (lo, hi)
}

/// Draw the gap top uniformly from `[lo, hi]`, or `hi` when the range is empty.
pub fn sample_gap_top(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
    if lo > hi || !lo.is_finite() || !hi.is_finite() {
        log::warn!("empty gap range [{}, {}], using {}", lo, hi, hi);
        return hi;
    }
    rng.gen_range(lo..=hi)
}

/// Centres of the parts of a pair whose gap spans `[gap_top - gap, gap_top]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairLayout {
    pub top_pipe: Vec2,
    pub bottom_pipe: Vec2,
    pub trigger: Vec2,
    pub trigger_size: Vec2,
}

impl PairLayout {
    pub fn new(x: f32, gap_top: f32, pipe_size: Vec2, gap: f32) -> Self {
        let half_h = pipe_size.y / 2.0;
        Self {
            top_pipe: Vec2::new(x, gap_top + half_h),
            bottom_pipe: Vec2::new(x, gap_top - gap - half_h),
            trigger: Vec2::new(x, gap_top - gap / 2.0),
            trigger_size: Vec2::new(1.0, gap),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairId(pub u32);

/// One spawned obstacle pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ObstaclePair {
    pub id: PairId,
    pub top: EntityId,
    pub bottom: EntityId,
    pub trigger: EntityId,
    pub x: f32,
    pub gap_top: f32,
    /// Set once the bird has passed through and scored.
    pub scored: bool,
}

/// Creates, tracks and removes obstacle pairs.
pub struct Spawner {
    rng: SmallRng,
    pairs: Vec<ObstaclePair>,
    next_pair: u32,
}

impl Spawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            pairs: Vec::new(),
            next_pair: 1,
        }
    }

    /// Spawn a pair just past the right edge of the camera.
    pub fn spawn(&mut self, ctx: &mut EngineContext, cfg: &FlappyConfig) -> &ObstaclePair {
        let pipe = cfg.pipe_size();
        let (lo, hi) = gap_range(cfg.world_height, pipe.y, cfg.ground_height(), cfg.gap);
        let gap_top = sample_gap_top(&mut self.rng, lo, hi);
        let x = ctx.camera.rect().max_x + pipe.x / 2.0;
        let layout = PairLayout::new(x, gap_top, pipe, cfg.gap);

        let sprite = ctx.assets.resolve(PIPE_SPRITE).sprite.with_z(PIPE_Z);
        let material = ColliderMaterial { restitution: 0.0, ..ColliderMaterial::default() };
        let obstacle = Category::Obstacle.masks();

        let top = ctx.next_id();
        ctx.spawn_with_body(
            Entity::new(top)
                .with_tag(TOP_PIPE_TAG)
                .with_pos(layout.top_pipe)
                .with_rotation(PI)
                .with_scale(pipe)
                .with_sprite(sprite.clone()),
            BodyDesc::fixed(ColliderDesc::rect(pipe))
                .with_position(layout.top_pipe)
                .with_rotation(PI)
                .with_masks(obstacle),
            material,
        );

        let bottom = ctx.next_id();
        ctx.spawn_with_body(
            Entity::new(bottom)
                .with_tag(BOTTOM_PIPE_TAG)
                .with_pos(layout.bottom_pipe)
                .with_scale(pipe)
                .with_sprite(sprite),
            BodyDesc::fixed(ColliderDesc::rect(pipe))
                .with_position(layout.bottom_pipe)
                .with_masks(obstacle),
            material,
        );

        let trigger = ctx.next_id();
        ctx.spawn_with_body(
            Entity::new(trigger)
                .with_tag(TRIGGER_TAG)
                .with_pos(layout.trigger)
                .with_scale(layout.trigger_size),
            BodyDesc::fixed(ColliderDesc::rect(layout.trigger_size))
                .with_position(layout.trigger)
                .as_sensor()
                .with_masks(Category::ScoreTrigger.masks()),
            material,
        );

        let id = PairId(self.next_pair);
        self.next_pair += 1;
        log::debug!("spawned pair {} at x={:.1} gap_top={:.1}", id.0, x, gap_top);

        let index = self.pairs.len();
        self.pairs.push(ObstaclePair {
            id,
            top,
            bottom,
            trigger,
            x,
            gap_top,
            scored: false,
        });
        &self.pairs[index]
    }

    /// Despawn a pair and forget it. Returns `false` if it was already gone.
    pub fn expire(&mut self, ctx: &mut EngineContext, id: PairId) -> bool {
        let Some(index) = self.pairs.iter().position(|p| p.id == id) else {
            return false;
        };
        let pair = self.pairs.remove(index);
        for entity in [pair.top, pair.bottom, pair.trigger] {
            ctx.despawn(entity);
        }
        log::debug!("expired pair {}", id.0);
        true
    }

    /// Mark the pair owning `trigger` as scored. Returns `true` only the
    /// first time, and `false` for unknown triggers.
    pub fn consume_trigger(&mut self, trigger: EntityId) -> bool {
        match self.pairs.iter_mut().find(|p| p.trigger == trigger) {
            Some(pair) if !pair.scored => {
                pair.scored = true;
                true
            }
            _ => false,
        }
    }

    /// The most recently spawned live pair.
    pub fn latest(&self) -> Option<&ObstaclePair> {
        self.pairs.last()
    }

    pub fn pairs(&self) -> &[ObstaclePair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Forget all pairs without touching the scene; used after the world is wiped.
    pub fn clear(&mut self) {
        self.pairs.clear();
    }
}
