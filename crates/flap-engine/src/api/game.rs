use glam::Vec2;

use crate::api::types::{EntityId, GameEvent, SoundEvent};
use crate::assets::registry::SpriteRegistry;
use crate::core::scene::Scene;
use crate::error::AssetError;
use crate::input::queue::InputQueue;
use crate::renderer::camera::Camera2D;
#[cfg(feature = "physics")]
use crate::components::entity::Entity;
#[cfg(feature = "physics")]
use crate::core::physics::{BodyDesc, BodyType, CollisionPair, ColliderMaterial, PhysicsWorld};

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Viewport width in game units.
    pub world_width: f32,
    /// Viewport height in game units.
    pub world_height: f32,
    /// Maximum number of render instances (default: 256).
    pub max_instances: usize,
    /// Maximum number of sound events per frame (default: 16).
    pub max_sounds: usize,
    /// Maximum number of game events per frame (default: 16).
    pub max_events: usize,
    /// Gravity vector for physics simulation. Y-up, so negative Y falls.
    #[cfg(feature = "physics")]
    pub gravity: Vec2,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 390.0,
            world_height: 844.0,
            max_instances: 256,
            max_sounds: 16,
            max_events: 16,
            #[cfg(feature = "physics")]
            gravity: Vec2::ZERO,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Build the initial world. Also called after new assets are loaded,
    /// on a freshly cleared context.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed step of game logic. Physics is stepped by the runner afterwards.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Apply game-specific tuning from JSON. The runner rebuilds the world
    /// afterwards so new values take effect from a clean start.
    fn load_config(&mut self, _json: &str) -> Result<(), AssetError> {
        Ok(())
    }
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: Camera2D,
    pub assets: SpriteRegistry,
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
    /// Simulation time in seconds, advanced by the runner every fixed step.
    time: f64,
    next_id: u32,
    #[cfg(feature = "physics")]
    pub physics: PhysicsWorld,
    #[cfg(feature = "physics")]
    collision_events: Vec<CollisionPair>,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    /// Create a context sized and configured for `config`.
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            scene: Scene::new(),
            camera: Camera2D::new(config.world_width, config.world_height),
            assets: SpriteRegistry::new(),
            sounds: Vec::with_capacity(config.max_sounds),
            events: Vec::with_capacity(config.max_events),
            time: 0.0,
            next_id: 1,
            #[cfg(feature = "physics")]
            physics: Self::build_physics(config.gravity, config.fixed_dt),
            #[cfg(feature = "physics")]
            collision_events: Vec::new(),
        }
    }

    #[cfg(feature = "physics")]
    fn build_physics(gravity: Vec2, dt: f32) -> PhysicsWorld {
        let mut physics = PhysicsWorld::new(gravity);
        physics.set_dt(dt);
        physics
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Simulation time in seconds.
    pub fn now(&self) -> f64 {
        self.time
    }

    /// Advance simulation time. Called by the runner before each step.
    pub fn advance_time(&mut self, dt: f32) {
        self.time += dt.max(0.0) as f64;
    }

    /// Emit a sound event to be forwarded to TypeScript.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        self.sounds.push(event);
    }

    /// Emit a game event to be forwarded to TypeScript.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (sounds, events).
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }

    /// Pan the camera horizontally and carry every pinned entity (and its
    /// physics body) along by the same amount.
    pub fn pan_camera(&mut self, dx: f32) {
        let delta = Vec2::new(dx, 0.0);
        self.camera.pan(delta);
        for entity in self.scene.pinned_mut() {
            entity.pos += delta;
            #[cfg(feature = "physics")]
            if let Some(body) = &entity.body {
                self.physics.set_position(body, entity.pos);
            }
        }
    }

    /// Move an entity (and its body, if any) to `pos`.
    pub fn set_position(&mut self, id: EntityId, pos: Vec2) {
        if let Some(entity) = self.scene.get_mut(id) {
            entity.pos = pos;
            #[cfg(feature = "physics")]
            if let Some(body) = &entity.body {
                self.physics.set_position(body, pos);
            }
        }
    }

    /// Despawn an entity, cleaning up its physics body if present.
    pub fn despawn(&mut self, id: EntityId) {
        if let Some(_entity) = self.scene.despawn(id) {
            #[cfg(feature = "physics")]
            if let Some(body) = &_entity.body {
                self.physics.remove_body(body);
            }
        }
    }

    /// Throw away every entity, body and pending physics event, and put the
    /// camera back where it started. Entity IDs keep counting up.
    pub fn reset_world(&mut self) {
        self.scene.clear();
        self.camera.reset();
        #[cfg(feature = "physics")]
        {
            self.physics = Self::build_physics(self.physics.gravity(), self.physics.dt());
            self.collision_events.clear();
        }
    }

    // -- Physics convenience methods --

    /// Spawn an entity with a physics body. Returns the EntityId.
    #[cfg(feature = "physics")]
    pub fn spawn_with_body(
        &mut self,
        entity: Entity,
        desc: BodyDesc,
        material: ColliderMaterial,
    ) -> EntityId {
        let id = entity.id;
        let body = self.physics.create_body(id, &desc, material);
        self.scene.spawn(entity.with_body(body));
        id
    }

    /// Detach and destroy an entity's physics body, keeping the entity.
    /// Returns `false` if the entity is gone or had no body.
    #[cfg(feature = "physics")]
    pub fn remove_body(&mut self, id: EntityId) -> bool {
        let Some(body) = self.scene.get_mut(id).and_then(|e| e.body.take()) else {
            return false;
        };
        self.physics.remove_body(&body);
        true
    }

    /// Switch an entity's body between dynamic-with-gravity and kinematic.
    #[cfg(feature = "physics")]
    pub fn set_dynamic(&mut self, id: EntityId, dynamic: bool) {
        if let Some(body) = self.scene.get(id).and_then(|e| e.body.as_ref()) {
            let (body_type, gravity) = if dynamic {
                (BodyType::Dynamic, 1.0)
            } else {
                (BodyType::KinematicPositionBased, 0.0)
            };
            self.physics.set_body_type(body, body_type);
            self.physics.set_gravity_scale(body, gravity);
        }
    }

    /// Apply an instantaneous impulse to an entity's physics body.
    #[cfg(feature = "physics")]
    pub fn apply_impulse(&mut self, id: EntityId, impulse: Vec2) {
        if let Some(body) = self.scene.get(id).and_then(|e| e.body.as_ref()) {
            self.physics.apply_impulse(body, impulse);
        }
    }

    /// Mass of an entity's physics body, 0 when it has none.
    #[cfg(feature = "physics")]
    pub fn mass(&self, id: EntityId) -> f32 {
        self.scene
            .get(id)
            .and_then(|e| e.body.as_ref())
            .map(|body| self.physics.mass(body))
            .unwrap_or(0.0)
    }

    /// Set the linear velocity of an entity's physics body.
    #[cfg(feature = "physics")]
    pub fn set_velocity(&mut self, id: EntityId, vel: Vec2) {
        if let Some(body) = self.scene.get(id).and_then(|e| e.body.as_ref()) {
            self.physics.set_velocity(body, vel);
        }
    }

    /// Get the linear velocity of an entity's physics body.
    #[cfg(feature = "physics")]
    pub fn velocity(&self, id: EntityId) -> Vec2 {
        self.scene
            .get(id)
            .and_then(|e| e.body.as_ref())
            .map(|body| self.physics.velocity(body))
            .unwrap_or(Vec2::ZERO)
    }

    /// Contact events from the most recent physics step.
    #[cfg(feature = "physics")]
    pub fn collisions(&self) -> &[CollisionPair] {
        &self.collision_events
    }

    /// Step the physics simulation and sync positions back to entities.
    /// Called by the runner after `Game::update()`.
    #[cfg(feature = "physics")]
    pub fn step_physics(&mut self) {
        self.collision_events.clear();
        self.physics.step_into(&mut self.collision_events);

        for entity in self.scene.iter_mut() {
            if let Some(body) = &entity.body {
                if let Some((pos, rot)) = self.physics.body_position(body) {
                    entity.pos = pos;
                    entity.rotation = rot;
                }
            }
        }
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
