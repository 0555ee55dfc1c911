//! Root UI context
//!
//! One explicitly constructed object per UI surface. It hands out widget
//! ids, tracks the frame clock, and owns the two hover-veto mechanisms:
//! the obstructor registry (dropdowns and modals claiming exclusive hover
//! over a screen region) and the ancestor-clip veto stack maintained by
//! containers during event dispatch. Nothing here is global or static.

use glint_core::{Rect, ScreenPoint};
use tracing::debug;

/// Opaque widget identity, allocated by [`UiContext::allocate_id`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

#[derive(Clone, Copy, Debug)]
struct Obstruction {
    owner: WidgetId,
    region: Rect,
}

/// Frame clock, id allocator, and hover-veto state for one UI surface
pub struct UiContext {
    next_id: u64,
    time_ms: u64,
    dt: f32,
    obstructions: Vec<Obstruction>,
    hover_vetoes: Vec<bool>,
}

impl UiContext {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            time_ms: 0,
            dt: 0.0,
            obstructions: Vec::new(),
            hover_vetoes: Vec::new(),
        }
    }

    pub fn allocate_id(&mut self) -> WidgetId {
        let id = WidgetId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Advance the frame clock. `time_ms` is the host's monotonic frame
    /// time; the derived delta drives every decay animation this frame.
    pub fn begin_frame(&mut self, time_ms: u64) {
        self.dt = time_ms.saturating_sub(self.time_ms) as f32 / 1000.0;
        self.time_ms = time_ms;
    }

    /// Seconds since the previous frame
    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn time_ms(&self) -> u64 {
        self.time_ms
    }

    // --- obstructor registry ---------------------------------------------

    /// Claim exclusive hover over a screen region (an open dropdown, a
    /// modal). Replaces the owner's previous claim, if any.
    pub fn obstruct(&mut self, owner: WidgetId, region: Rect) {
        self.release_obstruction(owner);
        debug!(?owner, ?region, "hover obstruction claimed");
        self.obstructions.push(Obstruction { owner, region });
    }

    pub fn release_obstruction(&mut self, owner: WidgetId) {
        self.obstructions.retain(|o| o.owner != owner);
    }

    /// Whether `owner` may take hover at `point`: every obstruction
    /// covering the point must belong to the asking widget itself.
    pub fn hover_allowed(&self, owner: WidgetId, point: ScreenPoint) -> bool {
        self.obstructions
            .iter()
            .all(|o| o.owner == owner || !o.region.contains(point.x, point.y))
    }

    // --- ancestor-clip veto stack ----------------------------------------

    /// Containers push `true` while dispatching with the pointer outside
    /// their own bounds, vetoing hover for the whole subtree.
    pub fn push_hover_veto(&mut self, vetoed: bool) {
        self.hover_vetoes.push(vetoed);
    }

    /// # Panics
    ///
    /// Panics on an unbalanced pop, like the render-side stacks: a
    /// container that pops without pushing would silently drop an
    /// ancestor's veto for the rest of the dispatch.
    pub fn pop_hover_veto(&mut self) {
        if self.hover_vetoes.pop().is_none() {
            panic!("hover-veto stack underflow: pop without matching push");
        }
    }

    fn clip_vetoed(&self) -> bool {
        self.hover_vetoes.iter().any(|v| *v)
    }

    /// Combined hover verdict: in-bounds widgets still lose hover to an
    /// obstructor region or a clipping ancestor the pointer is outside of.
    pub fn hover_permitted(&self, owner: WidgetId, screen: ScreenPoint) -> bool {
        !self.clip_vetoed() && self.hover_allowed(owner, screen)
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn obstruction_vetoes_everyone_but_its_owner() {
        let mut ui = UiContext::new();
        let dropdown = ui.allocate_id();
        let button = ui.allocate_id();
        ui.obstruct(dropdown, Rect::new(0.0, 0.0, 100.0, 100.0));

        let inside = ScreenPoint::new(50.0, 50.0);
        let outside = ScreenPoint::new(150.0, 50.0);
        assert!(ui.hover_allowed(dropdown, inside));
        assert!(!ui.hover_allowed(button, inside));
        assert!(ui.hover_allowed(button, outside));
    }

    #[test]
    fn releasing_an_obstruction_restores_hover() {
        let mut ui = UiContext::new();
        let modal = ui.allocate_id();
        let other = ui.allocate_id();
        ui.obstruct(modal, Rect::new(0.0, 0.0, 10.0, 10.0));
        ui.release_obstruction(modal);
        assert!(ui.hover_allowed(other, ScreenPoint::new(5.0, 5.0)));
    }

    #[test]
    fn any_ancestor_veto_blocks_hover() {
        let mut ui = UiContext::new();
        let id = ui.allocate_id();
        let p = ScreenPoint::new(1.0, 1.0);

        ui.push_hover_veto(false);
        assert!(ui.hover_permitted(id, p));
        ui.push_hover_veto(true);
        assert!(!ui.hover_permitted(id, p));
        ui.pop_hover_veto();
        assert!(ui.hover_permitted(id, p));
        ui.pop_hover_veto();
    }

    #[test]
    #[should_panic(expected = "hover-veto stack underflow")]
    fn unbalanced_veto_pop_panics() {
        let mut ui = UiContext::new();
        ui.push_hover_veto(true);
        ui.pop_hover_veto();
        ui.pop_hover_veto();
    }

    #[test]
    fn frame_clock_derives_dt() {
        let mut ui = UiContext::new();
        ui.begin_frame(1000);
        ui.begin_frame(1016);
        assert!((ui.dt() - 0.016).abs() < 1e-6);
        assert_eq!(ui.time_ms(), 1016);
    }
}
