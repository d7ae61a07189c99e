use thiserror::Error;

/// Failures loading data handed over from the host page.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("atlas index {atlas} for sprite `{sprite}` is out of range ({count} atlases)")]
    UnknownAtlas {
        sprite: String,
        atlas: u32,
        count: usize,
    },
}
