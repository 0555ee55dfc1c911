//! Widget effects
//!
//! A closed sum of render wrappers a widget can carry. Dispatch is an
//! exhaustive match; adding a variant forces every consumer to handle it.

use glint_core::{ContentPoint, Rect};
use glint_render::RenderContext;

/// Render-time wrapper applied around a widget's draw calls
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Effect {
    /// Clip the subtree to a rect in the widget's content space
    Clip(Rect),
    /// Transform the subtree
    Transform {
        translate: (f32, f32),
        rotate_deg: f32,
        scale: (f32, f32),
    },
}

impl Effect {
    /// Enter the effect. Must be paired with [`end`](Self::end) in reverse
    /// order; both clip and transform stacks panic on imbalance.
    pub fn begin(&self, ctx: &mut RenderContext) {
        match *self {
            Effect::Clip(rect) => ctx.enable_clip(rect),
            Effect::Transform {
                translate,
                rotate_deg,
                scale,
            } => {
                ctx.push_transform();
                ctx.translate(translate.0, translate.1);
                if rotate_deg != 0.0 {
                    ctx.rotate_z(rotate_deg);
                }
                if scale != (1.0, 1.0) {
                    ctx.scale(scale.0, scale.1);
                }
            }
        }
    }

    pub fn end(&self, ctx: &mut RenderContext) {
        match *self {
            Effect::Clip(_) => ctx.disable_clip(),
            Effect::Transform { .. } => ctx.pop_transform(),
        }
    }

    /// Whether this effect vetoes hover for descendants at `point`
    /// (a clip region the pointer lies outside of)
    pub fn vetoes_hover_at(&self, point: ContentPoint) -> bool {
        match *self {
            Effect::Clip(rect) => !rect.contains(point.x, point.y),
            Effect::Transform { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_vetoes_hover_outside_its_rect() {
        let clip = Effect::Clip(Rect::new(0.0, 0.0, 50.0, 50.0));
        assert!(!clip.vetoes_hover_at(ContentPoint::new(25.0, 25.0)));
        assert!(clip.vetoes_hover_at(ContentPoint::new(75.0, 25.0)));
    }

    #[test]
    fn transforms_never_veto_hover() {
        let t = Effect::Transform {
            translate: (10.0, 0.0),
            rotate_deg: 45.0,
            scale: (2.0, 2.0),
        };
        assert!(!t.vetoes_hover_at(ContentPoint::new(-100.0, -100.0)));
    }
}
