//! Font atlas loading
//!
//! Parses msdf-atlas-gen JSON metadata and uploads the matching PNG bitmap
//! as a GL texture. Atlases are immutable once loaded; the engine keys them
//! by family + style and never mutates glyph data at render time.

use glow::HasContext;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::error::TextError;

/// Rectangle bounds as emitted by msdf-atlas-gen.
///
/// `plane_bounds` are em-space with Y up; `atlas_bounds` are texture pixels
/// with the origin per the atlas' `yOrigin` (bottom for our assets).
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
    pub top: f32,
}

/// Per-character metrics.
///
/// Glyphs without bounds (space) advance the cursor but emit no geometry.
#[derive(Clone, Copy, Debug)]
pub struct GlyphMetadata {
    pub advance: f32,
    pub plane_bounds: Option<Bounds>,
    pub atlas_bounds: Option<Bounds>,
}

/// Font-wide metrics, in em units
#[derive(Clone, Copy, Debug)]
pub struct AtlasMetrics {
    pub ascender: f32,
    pub descender: f32,
    pub line_height: f32,
    /// Signed-distance range in atlas pixels, fed to the MSDF shader
    pub distance_range: f32,
    pub atlas_width: f32,
    pub atlas_height: f32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AtlasJson {
    atlas: AtlasSection,
    metrics: MetricsSection,
    glyphs: Vec<GlyphJson>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AtlasSection {
    distance_range: f32,
    width: f32,
    height: f32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetricsSection {
    ascender: f32,
    descender: f32,
    line_height: f32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GlyphJson {
    unicode: u32,
    advance: f32,
    plane_bounds: Option<Bounds>,
    atlas_bounds: Option<Bounds>,
}

/// One loaded distance-field atlas: glyph table, metrics, and (once
/// uploaded) the GL texture.
pub struct FontAtlas {
    glyphs: FxHashMap<char, GlyphMetadata>,
    metrics: AtlasMetrics,
    texture: Option<glow::Texture>,
}

impl FontAtlas {
    /// Parse msdf-atlas-gen JSON metadata. No GL involvement; the bitmap is
    /// uploaded separately via [`upload_bitmap`](Self::upload_bitmap).
    pub fn from_json(json: &str) -> Result<Self, TextError> {
        let parsed: AtlasJson = serde_json::from_str(json)?;

        let mut glyphs = FxHashMap::default();
        for glyph in parsed.glyphs {
            if let Some(c) = char::from_u32(glyph.unicode) {
                glyphs.insert(
                    c,
                    GlyphMetadata {
                        advance: glyph.advance,
                        plane_bounds: glyph.plane_bounds,
                        atlas_bounds: glyph.atlas_bounds,
                    },
                );
            }
        }

        Ok(Self {
            glyphs,
            metrics: AtlasMetrics {
                ascender: parsed.metrics.ascender,
                descender: parsed.metrics.descender,
                line_height: parsed.metrics.line_height,
                distance_range: parsed.atlas.distance_range,
                atlas_width: parsed.atlas.width,
                atlas_height: parsed.atlas.height,
            },
            texture: None,
        })
    }

    /// Decode the PNG bitmap and upload it as a linear-filtered RGBA
    /// texture. Render-thread only, with the host GL context current.
    pub fn upload_bitmap(&mut self, gl: &glow::Context, png: &[u8]) -> Result<(), TextError> {
        let img = image::load_from_memory(png)?.to_rgba8();
        let (width, height) = img.dimensions();

        unsafe {
            let texture = gl.create_texture().map_err(TextError::Texture)?;
            gl.bind_texture(glow::TEXTURE_2D, Some(texture));
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA8 as i32,
                width as i32,
                height as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                glow::PixelUnpackData::Slice(Some(img.as_raw())),
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MIN_FILTER,
                glow::LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_MAG_FILTER,
                glow::LINEAR as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_S,
                glow::CLAMP_TO_EDGE as i32,
            );
            gl.tex_parameter_i32(
                glow::TEXTURE_2D,
                glow::TEXTURE_WRAP_T,
                glow::CLAMP_TO_EDGE as i32,
            );
            gl.bind_texture(glow::TEXTURE_2D, None);
            self.texture = Some(texture);
        }
        Ok(())
    }

    pub fn glyph(&self, c: char) -> Option<&GlyphMetadata> {
        self.glyphs.get(&c)
    }

    /// Advance for `c` in em units, if the atlas knows the character
    pub fn advance(&self, c: char) -> Option<f32> {
        self.glyphs.get(&c).map(|g| g.advance)
    }

    /// Fallback advance for characters missing from the atlas: the space
    /// advance, or a fixed quarter-em when even space is absent.
    pub fn fallback_advance(&self) -> f32 {
        self.advance(' ').unwrap_or(0.25)
    }

    pub fn metrics(&self) -> &AtlasMetrics {
        &self.metrics
    }

    /// GL texture handle, present once [`upload_bitmap`](Self::upload_bitmap)
    /// has run
    pub fn texture(&self) -> Option<glow::Texture> {
        self.texture
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "atlas": { "type": "msdf", "distanceRange": 2.0, "size": 32.0,
                   "width": 256.0, "height": 256.0, "yOrigin": "bottom" },
        "metrics": { "emSize": 1.0, "lineHeight": 1.2, "ascender": 0.9,
                     "descender": -0.3 },
        "glyphs": [
            { "unicode": 32, "advance": 0.25 },
            { "unicode": 65, "advance": 0.6,
              "planeBounds": { "left": 0.02, "bottom": 0.0, "right": 0.58, "top": 0.7 },
              "atlasBounds": { "left": 10.0, "bottom": 20.0, "right": 28.0, "top": 44.0 } }
        ]
    }"#;

    #[test]
    fn parses_metrics_and_glyphs() {
        let atlas = FontAtlas::from_json(SAMPLE).unwrap();
        assert_eq!(atlas.metrics().ascender, 0.9);
        assert_eq!(atlas.metrics().distance_range, 2.0);
        assert_eq!(atlas.advance('A'), Some(0.6));
    }

    #[test]
    fn space_has_advance_but_no_bounds() {
        let atlas = FontAtlas::from_json(SAMPLE).unwrap();
        let space = atlas.glyph(' ').unwrap();
        assert_eq!(space.advance, 0.25);
        assert!(space.plane_bounds.is_none());
        assert!(space.atlas_bounds.is_none());
    }

    #[test]
    fn missing_character_falls_back_to_space_advance() {
        let atlas = FontAtlas::from_json(SAMPLE).unwrap();
        assert_eq!(atlas.advance('Z'), None);
        assert_eq!(atlas.fallback_advance(), 0.25);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(FontAtlas::from_json("{ not json").is_err());
    }
}
