//! Glint Text Engine
//!
//! MSDF text rendering on top of the shared batch pipeline:
//!
//! - **Atlas**: msdf-atlas-gen JSON metadata + PNG bitmap, loaded once per
//!   family/style pair
//! - **Font**: variant resolution (regular/bold/italic) with fallback
//! - **Span**: styled text-run tree with explicit shallow-copy semantics
//! - **Layout**: whitespace-token word wrap with forced `\n` breaks
//! - **Renderer**: glyph quads batched into the shared mesh, decorations in
//!   a second pass

pub mod atlas;
pub mod font;
pub mod layout;
pub mod renderer;
pub mod span;

mod error;

pub use atlas::{AtlasMetrics, FontAtlas, GlyphMetadata};
pub use error::TextError;
pub use font::{Font, FontStyle};
pub use layout::{layout_runs, measure_text, Line, LineSegment, LINE_HEIGHT};
pub use renderer::TextRenderer;
pub use span::{ResolvedRun, TextSpan};
