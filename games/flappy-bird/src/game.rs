//! Flappy Bird: tap to start, tap to flap, tap again after a crash to retry.
//!
//! Each step resolves the previous physics step's contacts, then input, then
//! scrolls the world and runs due timers. Nothing scrolls or fires once the
//! bird is dead.

use glam::Vec2;
use flap_engine::{
    AssetError, CollisionPair, EngineContext, EntityId, Game, GameConfig, GameEvent, InputQueue,
    Scheduler,
};

use crate::config::FlappyConfig;
use crate::contact::{self, Contact};
use crate::scroller::Scroller;
use crate::sound::SoundEffect;
use crate::spawner::{PairId, Spawner};
use crate::state::{GameState, Phase};
use crate::world::{self, World};

/// Game event kinds sent to the host page.
pub mod game_events {
    pub const SCORE: f32 = 1.0;
    pub const GAME_OVER: f32 = 2.0;
}

/// Work scheduled for later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimedAction {
    SpawnObstacle,
    ExpireObstacle(PairId),
}

pub struct FlappyBird {
    cfg: FlappyConfig,
    state: GameState,
    timers: Scheduler<TimedAction>,
    spawner: Spawner,
    scroller: Scroller,
    world: Option<World>,
}

impl FlappyBird {
    pub fn new() -> Self {
        Self::with_config(FlappyConfig::default())
    }

    pub fn with_config(cfg: FlappyConfig) -> Self {
        Self {
            state: GameState::new(),
            timers: Scheduler::new(),
            spawner: Spawner::new(cfg.seed),
            scroller: Scroller::new(cfg.scroll_speed),
            world: None,
            cfg,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn spawner(&self) -> &Spawner {
        &self.spawner
    }

    pub fn timers(&self) -> &Scheduler<TimedAction> {
        &self.timers
    }

    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    /// The single input: starts, flaps or restarts depending on the phase.
    pub fn tap(&mut self, ctx: &mut EngineContext) {
        match self.state.phase() {
            Phase::Intro => self.start(ctx),
            Phase::Playing => self.flap(ctx),
            Phase::Dead => self.restart(ctx),
        }
    }

    /// Apply contact-begin events. Once the bird is dead the rest are ignored.
    pub fn resolve_contacts(&mut self, ctx: &mut EngineContext, events: &[CollisionPair]) {
        for contact in contact::resolve(events) {
            if self.state.is_dead {
                break;
            }
            match contact {
                Contact::Score { trigger } => self.score_point(ctx, trigger),
                Contact::Crash => self.crash(ctx),
            }
        }
    }

    fn start(&mut self, ctx: &mut EngineContext) {
        let Some(world) = self.world.as_mut() else {
            return;
        };
        self.state.start();
        world.score.set_visible(ctx, true);
        self.timers.every(self.cfg.spawn_period, TimedAction::SpawnObstacle);
        ctx.despawn(world.intro);
        ctx.set_dynamic(world.bird, true);
        log::info!("run started");
        self.flap(ctx);
    }

    /// Same jump height whatever the bird was doing before.
    fn flap(&mut self, ctx: &mut EngineContext) {
        let Some(world) = &self.world else {
            return;
        };
        let bird = world.bird;
        ctx.set_velocity(bird, Vec2::ZERO);
        let impulse = ctx.mass(bird) * self.cfg.flap_speed;
        ctx.apply_impulse(bird, Vec2::new(0.0, impulse));
        ctx.emit_sound(SoundEffect::Wing.now());
    }

    fn restart(&mut self, ctx: &mut EngineContext) {
        ctx.emit_sound(SoundEffect::Swooshing.now());
        ctx.reset_world();
        self.init(ctx);
        log::info!("back to intro");
    }

    fn score_point(&mut self, ctx: &mut EngineContext, trigger: EntityId) {
        if self.state.phase() != Phase::Playing || !self.spawner.consume_trigger(trigger) {
            return;
        }
        self.state.add_point();
        ctx.emit_sound(SoundEffect::Point.now());
        if let Some(world) = self.world.as_mut() {
            world.score.rebuild(ctx, self.state.score);
        }
        ctx.emit_event(GameEvent {
            kind: game_events::SCORE,
            a: self.state.score as f32,
            ..GameEvent::default()
        });
    }

    fn crash(&mut self, ctx: &mut EngineContext) {
        if !self.state.die() {
            return;
        }
        let cancelled = self.timers.cancel_all();
        ctx.emit_sound(SoundEffect::Hit.now());
        ctx.emit_sound(SoundEffect::Die.after_previous());

        // Let the bird drop past the newest bottom pipe.
        if let Some(pair) = self.spawner.latest() {
            ctx.remove_body(pair.bottom);
        }

        if let Some(w) = &self.world {
            if let Some(anim) = ctx.scene.get_mut(w.bird).and_then(|e| e.animation.as_mut()) {
                anim.stop();
            }
            world::spawn_game_over(ctx, w, self.cfg.game_over_scale);
        }

        ctx.emit_event(GameEvent {
            kind: game_events::GAME_OVER,
            a: self.state.score as f32,
            ..GameEvent::default()
        });
        log::info!("crashed with score {} ({} timers cancelled)", self.state.score, cancelled);
    }

    fn run_timer(&mut self, ctx: &mut EngineContext, action: TimedAction) {
        match action {
            TimedAction::SpawnObstacle => {
                let id = self.spawner.spawn(ctx, &self.cfg).id;
                self.timers.after(self.cfg.pair_lifetime, TimedAction::ExpireObstacle(id));
            }
            TimedAction::ExpireObstacle(id) => {
                // Pairs stay on screen behind a dead bird.
                if !self.state.is_dead {
                    self.spawner.expire(ctx, id);
                }
            }
        }
    }
}

impl Default for FlappyBird {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for FlappyBird {
    fn config(&self) -> GameConfig {
        GameConfig {
            world_width: self.cfg.world_width,
            world_height: self.cfg.world_height,
            gravity: Vec2::new(0.0, self.cfg.gravity),
            ..GameConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        self.state.reset();
        self.timers = Scheduler::new();
        self.spawner.clear();
        self.scroller.reset();

        let mut world = world::build(ctx, &self.cfg);
        world.score.rebuild(ctx, self.state.score);
        self.world = Some(world);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        let events = ctx.collisions().to_vec();
        self.resolve_contacts(ctx, &events);

        for _ in 0..input.taps() {
            self.tap(ctx);
        }

        if self.state.is_dead {
            return;
        }
        let dt = self.scroller.advance(ctx);
        for action in self.timers.tick(dt) {
            self.run_timer(ctx, action);
        }
    }

    fn load_config(&mut self, json: &str) -> Result<(), AssetError> {
        let cfg = FlappyConfig::from_json(json)?;
        *self = Self::with_config(cfg);
        Ok(())
    }
}
