//! Styled text-run tree
//!
//! A [`TextSpan`] is one styled run plus an ordered list of sibling spans
//! appended after it, forming a tree rather than a flat string. Siblings
//! inherit unset attributes from their parent when the tree is flattened
//! for layout.

use glint_core::Color;

use crate::font::FontStyle;

/// One node of the styled text tree
#[derive(Clone, Debug, Default)]
pub struct TextSpan {
    pub text: String,
    pub color: Option<Color>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub obfuscated: bool,
    siblings: Vec<TextSpan>,
}

impl TextSpan {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    pub fn obfuscated(mut self) -> Self {
        self.obfuscated = true;
        self
    }

    /// Append a sibling span rendered after this one
    pub fn append(mut self, sibling: TextSpan) -> Self {
        self.siblings.push(sibling);
        self
    }

    pub fn siblings(&self) -> &[TextSpan] {
        &self.siblings
    }

    /// Copy this node's text and style attributes, never its siblings.
    ///
    /// The shallowness is deliberate and part of the contract: callers that
    /// want the whole subtree clone the span instead.
    pub fn copy_style_only(&self) -> TextSpan {
        TextSpan {
            text: self.text.clone(),
            color: self.color,
            bold: self.bold,
            italic: self.italic,
            underline: self.underline,
            strikethrough: self.strikethrough,
            obfuscated: self.obfuscated,
            siblings: Vec::new(),
        }
    }

    /// Flatten the tree into resolved runs, depth-first, with siblings
    /// inheriting unset color and accumulating boolean attributes from
    /// their parent.
    pub fn runs(&self) -> Vec<ResolvedRun> {
        let mut out = Vec::new();
        self.collect(None, &ResolvedRun::default(), &mut out);
        out
    }

    fn collect(&self, inherited_color: Option<Color>, parent: &ResolvedRun, out: &mut Vec<ResolvedRun>) {
        let resolved = ResolvedRun {
            text: self.text.clone(),
            color: self.color.or(inherited_color),
            bold: self.bold || parent.bold,
            italic: self.italic || parent.italic,
            underline: self.underline || parent.underline,
            strikethrough: self.strikethrough || parent.strikethrough,
            obfuscated: self.obfuscated || parent.obfuscated,
        };
        if !resolved.text.is_empty() {
            out.push(resolved.clone());
        }
        for sibling in &self.siblings {
            sibling.collect(resolved.color, &resolved, out);
        }
    }
}

/// A flattened run with all inheritance applied
#[derive(Clone, Debug, Default)]
pub struct ResolvedRun {
    pub text: String,
    pub color: Option<Color>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub obfuscated: bool,
}

impl ResolvedRun {
    pub fn font_style(&self) -> FontStyle {
        FontStyle::from_flags(self.bold, self.italic)
    }
}
