//! Scissor/clip stack
//!
//! Tracks nested clip rectangles in physical pixels. Every pushed region is
//! intersected with its parent, so a child can only ever shrink the visible
//! window. The stack itself issues no GL calls; [`crate::RenderContext`]
//! applies the returned rectangles, which keeps the intersection math
//! testable without a GL context.
//!
//! Clip regions bake in the transform stack's translation at push time, so
//! activation must happen *after* any translate for the frame (scroll
//! containers translate first, then clip) or the window will not track the
//! scrolled content.

use glint_core::Rect;

/// Result of a stack operation, to be applied by the GL layer
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScissorUpdate {
    /// Enable scissoring to this physical-pixel rect (top-left origin)
    Apply(Rect),
    /// No clip regions remain; disable scissoring
    Disable,
}

/// Stack of physical-pixel clip rectangles
#[derive(Clone, Debug, Default)]
pub struct ScissorStack {
    stack: Vec<Rect>,
}

impl ScissorStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a clip region given in logical coordinates.
    ///
    /// `translation` is the current transform-stack translation (logical
    /// pixels), added so clip regions follow scroll offsets; `scale_factor`
    /// converts logical to physical pixels. The request is intersected with
    /// the current top (or used as-is when the stack is empty) and the
    /// resulting physical rect is returned for the GL layer to apply.
    pub fn push_logical(
        &mut self,
        rect: Rect,
        translation: (f32, f32),
        scale_factor: f64,
    ) -> Rect {
        let scale = scale_factor as f32;
        let physical = Rect::new(
            (rect.x + translation.0) * scale,
            (rect.y + translation.1) * scale,
            rect.width * scale,
            rect.height * scale,
        );

        let clipped = match self.stack.last() {
            Some(parent) => parent.intersect(&physical),
            None => physical,
        };
        self.stack.push(clipped);
        clipped
    }

    /// Pop the current region, restoring the parent (or disabling clipping
    /// when the stack empties).
    ///
    /// # Panics
    ///
    /// Panics when the stack is already empty: an unbalanced disable call
    /// is a programming error, same as popping the root transform state.
    pub fn pop(&mut self) -> ScissorUpdate {
        if self.stack.pop().is_none() {
            panic!("scissor stack underflow: disable without matching enable");
        }
        match self.stack.last() {
            Some(parent) => ScissorUpdate::Apply(*parent),
            None => ScissorUpdate::Disable,
        }
    }

    /// Drop every region, returning to the unclipped root state
    pub fn reset(&mut self) {
        self.stack.clear();
    }

    /// Current clip region in physical pixels, if any
    pub fn current(&self) -> Option<Rect> {
        self.stack.last().copied()
    }

    /// Current clip region converted back to logical pixels.
    ///
    /// Callers outside the render pipeline (hit-testing against ancestor
    /// clip regions) intersect in logical space, so this reverses the
    /// physical conversion.
    pub fn current_logical(&self, scale_factor: f64) -> Option<Rect> {
        let scale = scale_factor as f32;
        self.stack.last().map(|r| {
            Rect::new(
                r.x / scale,
                r.y / scale,
                r.width / scale,
                r.height / scale,
            )
        })
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Convert a top-left-origin physical rect to GL scissor-box values.
    ///
    /// GL's origin is bottom-left, so Y flips against the viewport height.
    pub fn to_gl_box(rect: Rect, viewport_height: u32) -> (i32, i32, i32, i32) {
        let x = rect.x.round() as i32;
        let y = (viewport_height as f32 - rect.y - rect.height).round() as i32;
        (x, y, rect.width.round() as i32, rect.height.round() as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_region_is_contained_in_parent() {
        let mut stack = ScissorStack::new();
        let parent = stack.push_logical(Rect::new(10.0, 10.0, 100.0, 100.0), (0.0, 0.0), 1.0);
        let child = stack.push_logical(Rect::new(50.0, 0.0, 200.0, 80.0), (0.0, 0.0), 1.0);

        assert!(child.x >= parent.x);
        assert!(child.right() <= parent.right());
        assert!(child.y >= parent.y);
        assert!(child.bottom() <= parent.bottom());
    }

    #[test]
    fn disjoint_child_yields_zero_area() {
        let mut stack = ScissorStack::new();
        stack.push_logical(Rect::new(0.0, 0.0, 50.0, 50.0), (0.0, 0.0), 1.0);
        let child = stack.push_logical(Rect::new(500.0, 500.0, 20.0, 20.0), (0.0, 0.0), 1.0);
        assert_eq!(child.width, 0.0);
        assert_eq!(child.height, 0.0);
    }

    #[test]
    fn translation_follows_scroll_offset() {
        let mut stack = ScissorStack::new();
        // Content translated up by 30 logical pixels (scrolled down)
        let region = stack.push_logical(Rect::new(0.0, 100.0, 50.0, 50.0), (0.0, -30.0), 2.0);
        assert_eq!(region.y, 140.0); // (100 - 30) * 2
        assert_eq!(region.height, 100.0);
    }

    #[test]
    fn pop_restores_parent_then_disables() {
        let mut stack = ScissorStack::new();
        let parent = stack.push_logical(Rect::new(0.0, 0.0, 100.0, 100.0), (0.0, 0.0), 1.0);
        stack.push_logical(Rect::new(10.0, 10.0, 10.0, 10.0), (0.0, 0.0), 1.0);

        assert_eq!(stack.pop(), ScissorUpdate::Apply(parent));
        assert_eq!(stack.pop(), ScissorUpdate::Disable);
    }

    #[test]
    fn reset_discards_leaked_regions() {
        let mut stack = ScissorStack::new();
        stack.push_logical(Rect::new(0.0, 0.0, 10.0, 10.0), (0.0, 0.0), 1.0);
        stack.push_logical(Rect::new(2.0, 2.0, 4.0, 4.0), (0.0, 0.0), 1.0);
        stack.reset();

        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.current(), None);
        // A fresh push after reset is unconstrained by the old regions.
        let region = stack.push_logical(Rect::new(50.0, 50.0, 20.0, 20.0), (0.0, 0.0), 1.0);
        assert_eq!(region, Rect::new(50.0, 50.0, 20.0, 20.0));
    }

    #[test]
    #[should_panic(expected = "scissor stack underflow")]
    fn unbalanced_pop_panics() {
        let mut stack = ScissorStack::new();
        stack.pop();
    }

    #[test]
    fn logical_round_trip_at_scale() {
        let mut stack = ScissorStack::new();
        stack.push_logical(Rect::new(8.0, 16.0, 32.0, 64.0), (0.0, 0.0), 2.0);
        let logical = stack.current_logical(2.0).unwrap();
        assert_eq!(logical, Rect::new(8.0, 16.0, 32.0, 64.0));
    }

    #[test]
    fn gl_box_flips_y() {
        let (x, y, w, h) = ScissorStack::to_gl_box(Rect::new(10.0, 20.0, 30.0, 40.0), 200);
        assert_eq!((x, y, w, h), (10, 140, 30, 40));
    }
}
