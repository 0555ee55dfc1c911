//! Scroll container
//!
//! Renders children under a `-scroll_offset` translation with a clip
//! region activated *after* the translate, and remaps pointer coordinates
//! by `+scroll_offset` when forwarding events, keeping visual space and
//! hit-test space in lockstep.

use glint_core::{ContentPoint, Rect};
use glint_render::RenderContext;

use crate::context::{UiContext, WidgetId};
use crate::widget::{Widget, WidgetEvent};

/// Logical pixels scrolled per wheel notch
const SCROLL_STEP: f32 = 12.0;

pub struct ScrollContainer {
    id: WidgetId,
    /// Viewport bounds in the parent's content space
    pub bounds: Rect,
    /// Total height of the scrollable content
    pub content_height: f32,
    scroll_offset: f32,
    children: Vec<Box<dyn Widget>>,
}

impl ScrollContainer {
    pub fn new(ui: &mut UiContext, bounds: Rect, content_height: f32) -> Self {
        Self {
            id: ui.allocate_id(),
            bounds,
            content_height,
            scroll_offset: 0.0,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Add a child; its bounds are interpreted in this container's content
    /// space (y = 0 is the top of the content, not the viewport).
    pub fn push_child(&mut self, child: Box<dyn Widget>) {
        self.children.push(child);
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    fn max_offset(&self) -> f32 {
        (self.content_height - self.bounds.height).max(0.0)
    }

    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll_offset = (self.scroll_offset + delta).clamp(0.0, self.max_offset());
    }

    /// Hit-test against the viewport in the parent's content space
    pub fn is_mouse_over(&self, point: ContentPoint) -> bool {
        self.bounds.contains(point.x, point.y)
    }
}

impl Widget for ScrollContainer {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn render(&mut self, ui: &mut UiContext, ctx: &mut RenderContext) {
        ctx.push_transform();
        // Content origin moves up as the offset grows.
        ctx.translate(self.bounds.x, self.bounds.y - self.scroll_offset);
        // Clip after the translate: in post-translate coordinates the
        // viewport sits at y = scroll_offset, which lands the physical clip
        // region back on the (fixed) viewport bounds.
        ctx.enable_clip(Rect::new(
            0.0,
            self.scroll_offset,
            self.bounds.width,
            self.bounds.height,
        ));

        for child in &mut self.children {
            child.render(ui, ctx);
        }

        ctx.disable_clip();
        ctx.pop_transform();
    }

    fn handle_event(&mut self, ui: &mut UiContext, event: &WidgetEvent) -> bool {
        let pointer = event.pointer();
        let inside = self.is_mouse_over(pointer.position);

        if let WidgetEvent::Scroll { delta, .. } = event {
            if inside {
                self.scroll_by(-delta.y * SCROLL_STEP);
                return true;
            }
        }

        // Children see content-space coordinates; the clip veto covers the
        // whole subtree while the pointer is outside the viewport.
        let forwarded = event.remapped((self.bounds.x, self.bounds.y), self.scroll_offset);
        ui.push_hover_veto(!inside);
        let mut consumed = false;
        for child in &mut self.children {
            if child.handle_event(ui, &forwarded) {
                consumed = true;
                break;
            }
        }
        ui.pop_hover_veto();
        consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{ScreenPoint, ScrollDelta};
    use crate::widget::PointerInfo;

    fn container(ui: &mut UiContext) -> ScrollContainer {
        // 100-tall viewport over 300-tall content: max offset 200.
        ScrollContainer::new(ui, Rect::new(10.0, 20.0, 80.0, 100.0), 300.0)
    }

    #[test]
    fn offset_clamps_to_content_range() {
        let mut ui = UiContext::new();
        let mut scroll = container(&mut ui);
        scroll.scroll_by(-50.0);
        assert_eq!(scroll.scroll_offset(), 0.0);
        scroll.scroll_by(1000.0);
        assert_eq!(scroll.scroll_offset(), 200.0);
    }

    #[test]
    fn wheel_inside_viewport_scrolls_and_consumes() {
        let mut ui = UiContext::new();
        let mut scroll = container(&mut ui);
        let event = WidgetEvent::Scroll {
            pointer: PointerInfo::from_screen(ScreenPoint::new(50.0, 60.0)),
            delta: ScrollDelta { x: 0.0, y: -2.0 },
        };
        assert!(scroll.handle_event(&mut ui, &event));
        assert_eq!(scroll.scroll_offset(), 2.0 * SCROLL_STEP);
    }

    #[test]
    fn wheel_outside_viewport_is_ignored() {
        let mut ui = UiContext::new();
        let mut scroll = container(&mut ui);
        let event = WidgetEvent::Scroll {
            pointer: PointerInfo::from_screen(ScreenPoint::new(200.0, 60.0)),
            delta: ScrollDelta { x: 0.0, y: -2.0 },
        };
        assert!(!scroll.handle_event(&mut ui, &event));
        assert_eq!(scroll.scroll_offset(), 0.0);
    }

    #[test]
    fn short_content_never_scrolls() {
        let mut ui = UiContext::new();
        let mut scroll = ScrollContainer::new(&mut ui, Rect::new(0.0, 0.0, 50.0, 100.0), 40.0);
        scroll.scroll_by(30.0);
        assert_eq!(scroll.scroll_offset(), 0.0);
    }
}
