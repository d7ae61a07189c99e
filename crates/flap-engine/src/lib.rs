pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod error;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{EngineContext, Game, GameConfig};
pub use api::types::{EntityId, GameEvent, SoundEvent};
pub use assets::manifest::AssetManifest;
pub use assets::registry::{SpriteInfo, SpriteRegistry};
pub use components::animation::{AnimationComponent, AnimationDef};
pub use components::entity::Entity;
pub use components::sprite::{AtlasId, SpriteComponent};
pub use core::scene::Scene;
pub use core::schedule::{Scheduler, TimerId};
pub use core::time::{FixedTimestep, FrameClock};
pub use error::AssetError;
pub use input::queue::{InputEvent, InputQueue, KEY_SPACE};
pub use renderer::camera::{Camera2D, ViewRect};
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use systems::animation::tick_animations;
pub use systems::render::build_render_buffer;

#[cfg(feature = "physics")]
pub use core::physics::{
    BodyDesc, BodyMasks, BodyType, ColliderDesc, ColliderMaterial, CollisionPair, PhysicsBody,
    PhysicsWorld,
};
