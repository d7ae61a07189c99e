use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use glam::Vec2;

use crate::assets::manifest::AssetManifest;
use crate::components::sprite::{AtlasId, SpriteComponent};

/// Size reported for sprites whose native size is unknown.
pub const PLACEHOLDER_SIZE: Vec2 = Vec2::new(32.0, 32.0);

/// A named sprite: atlas cell plus native image size.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteInfo {
    pub sprite: SpriteComponent,
    pub size: Vec2,
}

impl SpriteInfo {
    fn placeholder() -> Self {
        Self {
            sprite: SpriteComponent::default(),
            size: PLACEHOLDER_SIZE,
        }
    }
}

/// Registry of named sprites, built from an AssetManifest.
///
/// Lookups never fail: an unknown name resolves to a placeholder and is
/// reported once through `log::warn!`.
#[derive(Default)]
pub struct SpriteRegistry {
    sprites: HashMap<String, SpriteInfo>,
    reported_missing: RefCell<HashSet<String>>,
}

impl SpriteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a parsed AssetManifest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let sprites = manifest
            .sprites
            .iter()
            .map(|(name, desc)| {
                let info = SpriteInfo {
                    sprite: SpriteComponent {
                        atlas: AtlasId(desc.atlas),
                        col: desc.col as f32,
                        row: desc.row as f32,
                        ..SpriteComponent::default()
                    },
                    size: desc.size.map(Vec2::from).unwrap_or(PLACEHOLDER_SIZE),
                };
                (name.clone(), info)
            })
            .collect();
        Self {
            sprites,
            reported_missing: RefCell::new(HashSet::new()),
        }
    }

    /// Look up a sprite by name.
    pub fn get(&self, name: &str) -> Option<&SpriteInfo> {
        self.sprites.get(name)
    }

    /// Look up a sprite by name, falling back to the placeholder.
    pub fn resolve(&self, name: &str) -> SpriteInfo {
        match self.sprites.get(name) {
            Some(info) => info.clone(),
            None => {
                if self.reported_missing.borrow_mut().insert(name.to_string()) {
                    log::warn!("sprite `{}` not in manifest, using placeholder", name);
                }
                SpriteInfo::placeholder()
            }
        }
    }

    /// Native size of a sprite, or `fallback` when unknown.
    pub fn size_or(&self, name: &str, fallback: Vec2) -> Vec2 {
        self.sprites.get(name).map(|s| s.size).unwrap_or(fallback)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}
