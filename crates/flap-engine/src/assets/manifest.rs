use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::AssetError;

/// Asset manifest describing all atlases, named sprites and sounds for a game.
/// Loaded from a JSON file at runtime; the TypeScript side reads the same file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    /// List of texture atlases.
    pub atlases: Vec<AtlasDescriptor>,
    /// Named sprite lookup: name → atlas index + cell coordinates.
    #[serde(default)]
    pub sprites: HashMap<String, SpriteDescriptor>,
    /// Audio assets keyed by name.
    #[serde(default)]
    pub sounds: HashMap<String, SoundDescriptor>,
}

/// Describes a single texture atlas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasDescriptor {
    pub name: String,
    /// Number of columns in the atlas grid.
    pub cols: u32,
    /// Number of rows in the atlas grid.
    pub rows: u32,
    /// Relative path to the PNG file.
    pub path: String,
}

/// Describes a named sprite within an atlas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteDescriptor {
    /// Index into the atlases array.
    pub atlas: u32,
    pub col: u32,
    pub row: u32,
    /// Native size of the source image in world units, `[width, height]`.
    #[serde(default)]
    pub size: Option<[f32; 2]>,
}

/// Describes an audio asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundDescriptor {
    /// Relative path to the audio file.
    pub path: String,
    /// Numeric event ID that triggers this sound from Rust.
    #[serde(default)]
    pub event_id: Option<u32>,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string and check sprite → atlas references.
    pub fn from_json(json: &str) -> Result<Self, AssetError> {
        let manifest: Self = serde_json::from_str(json)?;
        for (name, sprite) in &manifest.sprites {
            if sprite.atlas as usize >= manifest.atlases.len() {
                return Err(AssetError::UnknownAtlas {
                    sprite: name.clone(),
                    atlas: sprite.atlas,
                    count: manifest.atlases.len(),
                });
            }
        }
        Ok(manifest)
    }
}
