//! Font variant resolution
//!
//! A [`Font`] groups the atlases for one family. Styled runs request a
//! variant; variants without a loaded atlas fall back to regular, so a
//! family is usable with only its regular atlas present.

use rustc_hash::FxHashMap;

use crate::atlas::FontAtlas;

/// Requested font variant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub fn from_flags(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (true, true) => FontStyle::BoldItalic,
            (true, false) => FontStyle::Bold,
            (false, true) => FontStyle::Italic,
            (false, false) => FontStyle::Regular,
        }
    }
}

/// One font family: a regular atlas plus optional styled variants
pub struct Font {
    regular: FontAtlas,
    variants: FxHashMap<FontStyle, FontAtlas>,
}

impl Font {
    /// The regular atlas is mandatory; it is the fallback for every
    /// unloaded variant.
    pub fn new(regular: FontAtlas) -> Self {
        Self {
            regular,
            variants: FxHashMap::default(),
        }
    }

    pub fn with_variant(mut self, style: FontStyle, atlas: FontAtlas) -> Self {
        self.variants.insert(style, atlas);
        self
    }

    /// Resolve a variant, falling back to regular when it is not loaded
    pub fn atlas_for(&self, style: FontStyle) -> &FontAtlas {
        if style == FontStyle::Regular {
            return &self.regular;
        }
        self.variants.get(&style).unwrap_or(&self.regular)
    }
}
