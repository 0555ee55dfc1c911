//! Text engine errors

use thiserror::Error;

/// Errors surfaced while loading font atlas assets.
///
/// Per-glyph problems at render time (a character missing from a loaded
/// atlas) are not errors: they degrade to a fallback advance and a
/// once-per-character warning.
#[derive(Error, Debug)]
pub enum TextError {
    #[error("Failed to parse atlas metadata: {0}")]
    Metadata(#[from] serde_json::Error),

    #[error("Failed to decode atlas bitmap: {0}")]
    Bitmap(#[from] image::ImageError),

    #[error("Failed to create atlas texture: {0}")]
    Texture(String),
}
