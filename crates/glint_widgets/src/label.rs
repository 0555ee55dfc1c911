//! Label widget
//!
//! A styled-span text block. Wrapping is driven by the label's width;
//! the obfuscated flicker effect takes its time quantum from the frame
//! clock.

use std::sync::Arc;

use glint_core::{Color, Rect};
use glint_render::RenderContext;
use glint_text::{Font, TextRenderer, TextSpan};

use crate::context::UiContext;
use crate::widget::Widget;

pub struct Label {
    /// Bounds in the parent's content space; width is the wrap limit
    pub bounds: Rect,
    pub span: TextSpan,
    pub size: f32,
    pub wrap: bool,
    pub color: Color,
    font: Arc<Font>,
    renderer: TextRenderer,
}

impl Label {
    pub fn new(font: Arc<Font>, bounds: Rect, span: TextSpan) -> Self {
        Self {
            bounds,
            span,
            size: 8.0,
            wrap: true,
            color: Color::WHITE,
            font,
            renderer: TextRenderer::new(),
        }
    }
}

impl Widget for Label {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn render(&mut self, ui: &mut UiContext, ctx: &mut RenderContext) {
        let max_width = self.wrap.then_some(self.bounds.width);
        self.renderer.draw(
            ctx,
            &self.font,
            &self.span,
            self.bounds.x,
            self.bounds.y,
            self.size,
            max_width,
            ui.time_ms(),
            self.color,
        );
    }
}
