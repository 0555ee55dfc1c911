//! Word-wrap layout
//!
//! Splits flattened runs into visual lines by accumulating
//! whitespace-delimited word tokens until the wrap width overflows. Literal
//! `\n` characters force a break unconditionally. Widths come from the
//! run's resolved font variant; line height is a fixed 9 logical pixels
//! regardless of the backing font's metrics, so mixed-variant text stacks
//! consistently.

use crate::atlas::FontAtlas;
use crate::font::Font;
use crate::span::ResolvedRun;

/// Fixed logical line height shared by every font backend
pub const LINE_HEIGHT: f32 = 9.0;

/// A slice of one run placed on a line
#[derive(Clone, Debug, PartialEq)]
pub struct LineSegment {
    /// Index into the run list the layout was built from
    pub run: usize,
    pub text: String,
    pub width: f32,
}

/// One visual line
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Line {
    pub segments: Vec<LineSegment>,
    pub width: f32,
}

impl Line {
    fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Concatenated segment text
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Advance-sum width of `text` at the given visual size. Characters the
/// atlas does not know contribute the fallback advance.
pub fn measure_text(atlas: &FontAtlas, text: &str, size: f32) -> f32 {
    text.chars()
        .map(|c| atlas.advance(c).unwrap_or_else(|| atlas.fallback_advance()) * size)
        .sum()
}

enum Token {
    Word { run: usize, text: String, width: f32 },
    Break,
}

/// Wrap flattened runs to `max_width` logical pixels (no wrapping when
/// `None`). Whitespace collapses to single spaces between words, so
/// re-wrapping joined output reproduces the same break structure.
pub fn layout_runs(
    font: &Font,
    runs: &[ResolvedRun],
    size: f32,
    max_width: Option<f32>,
) -> Vec<Line> {
    let mut tokens = Vec::new();
    for (index, run) in runs.iter().enumerate() {
        let atlas = font.atlas_for(run.font_style());
        let mut pieces = run.text.split('\n').peekable();
        while let Some(piece) = pieces.next() {
            for word in piece.split_whitespace() {
                tokens.push(Token::Word {
                    run: index,
                    text: word.to_string(),
                    width: measure_text(atlas, word, size),
                });
            }
            if pieces.peek().is_some() {
                tokens.push(Token::Break);
            }
        }
    }

    let mut lines = Vec::new();
    let mut line = Line::default();

    for token in tokens {
        match token {
            Token::Break => {
                lines.push(std::mem::take(&mut line));
            }
            Token::Word { run, text, width } => {
                let space = if line.is_empty() {
                    0.0
                } else {
                    let atlas = font.atlas_for(runs[run].font_style());
                    atlas.advance(' ').unwrap_or_else(|| atlas.fallback_advance()) * size
                };

                if let Some(max) = max_width {
                    if !line.is_empty() && line.width + space + width > max {
                        lines.push(std::mem::take(&mut line));
                        push_word(&mut line, run, text, width, 0.0);
                        continue;
                    }
                }
                push_word(&mut line, run, text, width, space);
            }
        }
    }
    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

fn push_word(line: &mut Line, run: usize, text: String, width: f32, space: f32) {
    match line.segments.last_mut() {
        Some(last) if last.run == run => {
            if space > 0.0 {
                last.text.push(' ');
            }
            last.text.push_str(&text);
            last.width += space + width;
        }
        Some(last) if space > 0.0 => {
            // Word starts a new run mid-line; the joining space stays with
            // the previous segment.
            last.text.push(' ');
            last.width += space;
            line.segments.push(LineSegment { run, text, width });
        }
        _ => {
            line.segments.push(LineSegment { run, text, width });
        }
    }
    line.width += space + width;
}
