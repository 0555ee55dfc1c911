//! Glyph batching and decoration pass
//!
//! Walks laid-out lines and emits one textured quad per visible glyph into
//! the shared text batch, flushing whenever the active atlas texture
//! changes. Underline and strikethrough rectangles are collected during
//! glyph emission but drawn afterwards through the solid pipeline, so the
//! plain-color geometry never interleaves with the distance-field shader
//! inside one batch.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;
use tracing::warn;

use glint_core::{Color, Rect};
use glint_render::RenderContext;

use crate::atlas::FontAtlas;
use crate::font::Font;
use crate::layout::{layout_runs, LINE_HEIGHT};
use crate::span::TextSpan;

/// Reseed interval for obfuscated-glyph scrambling. Every draw inside one
/// quantum shares a random stream, so the whole frame flickers in unison
/// instead of per character.
const OBFUSCATION_QUANTUM_MS: u64 = 50;

const DECORATION_THICKNESS: f32 = 1.0;

/// Stateful text drawing front-end.
///
/// Holds the warned-glyph set so a character missing from the atlas is
/// logged once, not every frame.
#[derive(Default)]
pub struct TextRenderer {
    warned: FxHashSet<char>,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay out and draw a span tree at `(x, y)` logical pixels.
    ///
    /// `size` is the visual glyph size; lines advance by the fixed
    /// [`LINE_HEIGHT`] regardless. `time_ms` drives obfuscated-glyph
    /// reseeding. Runs without an explicit color use `default_color`.
    /// Atlases whose bitmap was never uploaded lay out but draw nothing.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &mut self,
        ctx: &mut RenderContext,
        font: &Font,
        span: &TextSpan,
        x: f32,
        y: f32,
        size: f32,
        max_width: Option<f32>,
        time_ms: u64,
        default_color: Color,
    ) {
        let runs = span.runs();
        if runs.is_empty() {
            return;
        }
        let lines = layout_runs(font, &runs, size, max_width);

        // Anything already batched must land under the glyphs.
        ctx.flush_solid();

        let mut rng = SmallRng::seed_from_u64(time_ms / OBFUSCATION_QUANTUM_MS);
        let mut decorations: Vec<(Rect, Color)> = Vec::new();
        let mut active: Option<(glow::Texture, f32)> = None;

        for (line_index, line) in lines.iter().enumerate() {
            let line_top = y + line_index as f32 * LINE_HEIGHT;
            let mut cursor = x;

            for segment in &line.segments {
                let run = &runs[segment.run];
                let atlas = font.atlas_for(run.font_style());
                let color = run.color.unwrap_or(default_color);
                let baseline = line_top + atlas.metrics().ascender * size;

                if let Some(texture) = atlas.texture() {
                    let range = atlas.metrics().distance_range;
                    if let Some((current, current_range)) = active {
                        if current != texture {
                            ctx.flush_text(current, current_range);
                            active = Some((texture, range));
                        }
                    } else {
                        active = Some((texture, range));
                    }
                }

                let segment_start = cursor;
                for c in segment.text.chars() {
                    let visible = if run.obfuscated && !c.is_whitespace() {
                        rng.gen_range(b'!'..=b'~') as char
                    } else {
                        c
                    };
                    cursor += self.emit_glyph(ctx, atlas, visible, cursor, baseline, size, color);
                }

                if run.underline {
                    decorations.push((
                        Rect::new(
                            segment_start,
                            baseline + DECORATION_THICKNESS,
                            cursor - segment_start,
                            DECORATION_THICKNESS,
                        ),
                        color,
                    ));
                }
                if run.strikethrough {
                    decorations.push((
                        Rect::new(
                            segment_start,
                            line_top + LINE_HEIGHT * 0.45,
                            cursor - segment_start,
                            DECORATION_THICKNESS,
                        ),
                        color,
                    ));
                }
            }
        }

        if let Some((texture, range)) = active {
            ctx.flush_text(texture, range);
        }

        // Second pass: decorations through the solid pipeline, drawn over
        // the already-flushed glyphs.
        for (rect, color) in decorations {
            ctx.fill_rect(rect, color);
        }
    }

    /// Emit one glyph quad if the atlas has geometry for it; always return
    /// the advance in logical pixels.
    fn emit_glyph(
        &mut self,
        ctx: &mut RenderContext,
        atlas: &FontAtlas,
        c: char,
        cursor: f32,
        baseline: f32,
        size: f32,
        color: Color,
    ) -> f32 {
        let Some(glyph) = atlas.glyph(c) else {
            if self.warned.insert(c) {
                warn!(character = %c, "glyph missing from atlas, using fallback advance");
            }
            return atlas.fallback_advance() * size;
        };

        if let (Some(plane), Some(bounds), Some(_)) =
            (glyph.plane_bounds, glyph.atlas_bounds, atlas.texture())
        {
            let metrics = atlas.metrics();
            // Plane bounds are em-space with Y up; screen Y grows downward.
            let gx = cursor + plane.left * size;
            let gy = baseline - plane.top * size;
            let gw = (plane.right - plane.left) * size;
            let gh = (plane.top - plane.bottom) * size;

            // Atlas bounds use a bottom-left origin; flip V for sampling.
            let u0 = bounds.left / metrics.atlas_width;
            let u1 = bounds.right / metrics.atlas_width;
            let v0 = 1.0 - bounds.top / metrics.atlas_height;
            let v1 = 1.0 - bounds.bottom / metrics.atlas_height;

            ctx.text_mesh_mut().quad_uv(gx, gy, gw, gh, color, u0, v0, u1, v1);
        }

        glyph.advance * size
    }
}
