use flap_engine::AssetError;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Every tuning value of the game. Missing JSON fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlappyConfig {
    pub world_width: f32,
    pub world_height: f32,
    /// Vertical gravity, negative pulls down.
    pub gravity: f32,
    /// Horizontal camera speed in units per second.
    pub scroll_speed: f32,
    /// Seconds between obstacle pairs.
    pub spawn_period: f32,
    /// Seconds an obstacle pair lives before it is removed.
    pub pair_lifetime: f32,
    /// Vertical opening between the two pipes of a pair.
    pub gap: f32,
    /// Upward speed a flap gives the bird, whatever its current velocity.
    pub flap_speed: f32,
    /// Rendered pipe size, `[width, height]`.
    pub pipe_size: [f32; 2],
    pub ground_tile_width: f32,
    pub bird_height: f32,
    pub wing_frame_duration: f32,
    pub digit_scale: f32,
    /// Intro banner width as a fraction of the viewport width.
    pub intro_width_ratio: f32,
    /// Distance from the top of the viewport to the score and intro banner.
    pub hud_offset: f32,
    pub game_over_scale: f32,
    /// Seed for gap placement.
    pub seed: u64,
}

impl Default for FlappyConfig {
    fn default() -> Self {
        Self {
            world_width: 390.0,
            world_height: 844.0,
            gravity: -1200.0,
            scroll_speed: 180.0,
            spawn_period: 1.5,
            pair_lifetime: 3.0,
            gap: 170.0,
            flap_speed: 420.0,
            pipe_size: [52.0, 320.0],
            ground_tile_width: 336.0,
            bird_height: 40.0,
            wing_frame_duration: 0.085,
            digit_scale: 0.5,
            intro_width_ratio: 0.7,
            hud_offset: 100.0,
            game_over_scale: 0.5,
            seed: 0x5eed_f1a9,
        }
    }
}

impl FlappyConfig {
    pub fn from_json(json: &str) -> Result<Self, AssetError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Ground strip height, proportional to the viewport width.
    pub fn ground_height(&self) -> f32 {
        self.world_width / 3.5
    }

    pub fn pipe_size(&self) -> Vec2 {
        Vec2::from(self.pipe_size)
    }
}
