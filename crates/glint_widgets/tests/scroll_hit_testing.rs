use std::cell::RefCell;
use std::rc::Rc;

use glint_core::{ContentPoint, Rect, ScreenPoint};
use glint_render::RenderContext;
use glint_widgets::{PointerInfo, ScrollContainer, UiContext, Widget, WidgetEvent, WidgetId};

/// Test widget that records what the traversal delivered to it.
struct Probe {
    id: WidgetId,
    bounds: Rect,
    log: Rc<RefCell<ProbeLog>>,
}

#[derive(Default)]
struct ProbeLog {
    last_position: Option<ContentPoint>,
    hovered: bool,
}

impl Probe {
    fn new(ui: &mut UiContext, bounds: Rect) -> (Self, Rc<RefCell<ProbeLog>>) {
        let log = Rc::new(RefCell::new(ProbeLog::default()));
        (
            Self {
                id: ui.allocate_id(),
                bounds,
                log: log.clone(),
            },
            log,
        )
    }
}

impl Widget for Probe {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn render(&mut self, _ui: &mut UiContext, _ctx: &mut RenderContext) {}

    fn handle_event(&mut self, ui: &mut UiContext, event: &WidgetEvent) -> bool {
        if let WidgetEvent::PointerMove { pointer } = event {
            let mut log = self.log.borrow_mut();
            log.last_position = Some(pointer.position);
            log.hovered = self.bounds.contains(pointer.position.x, pointer.position.y)
                && ui.hover_permitted(self.id, pointer.screen);
        }
        false
    }
}

fn pointer_move(x: f32, y: f32) -> WidgetEvent {
    WidgetEvent::PointerMove {
        pointer: PointerInfo::from_screen(ScreenPoint::new(x, y)),
    }
}

#[test]
fn pointer_coordinates_follow_the_scroll_offset() {
    let mut ui = UiContext::new();
    // 100-tall viewport over 300-tall content.
    let mut scroll = ScrollContainer::new(&mut ui, Rect::new(0.0, 0.0, 100.0, 100.0), 300.0);
    // Child sits at content y 150..190, below the fold initially.
    let (probe, log) = Probe::new(&mut ui, Rect::new(10.0, 150.0, 80.0, 40.0));
    scroll.push_child(Box::new(probe));

    scroll.handle_event(&mut ui, &pointer_move(50.0, 60.0));
    assert_eq!(
        log.borrow().last_position,
        Some(ContentPoint::new(50.0, 60.0))
    );
    assert!(!log.borrow().hovered, "child is scrolled out of view");

    scroll.scroll_by(100.0);
    scroll.handle_event(&mut ui, &pointer_move(50.0, 60.0));
    assert_eq!(
        log.borrow().last_position,
        Some(ContentPoint::new(50.0, 160.0)),
        "content coordinates shift by the scroll offset"
    );
    assert!(log.borrow().hovered);
}

#[test]
fn pointer_outside_the_viewport_vetoes_child_hover() {
    let mut ui = UiContext::new();
    let mut scroll = ScrollContainer::new(&mut ui, Rect::new(0.0, 0.0, 100.0, 100.0), 300.0);
    let (probe, log) = Probe::new(&mut ui, Rect::new(10.0, 200.0, 80.0, 40.0));
    scroll.push_child(Box::new(probe));
    scroll.scroll_by(110.0);

    // Screen y 110 is below the viewport, but remaps to content y 220,
    // inside the child's bounds. The clipping ancestor must veto hover.
    scroll.handle_event(&mut ui, &pointer_move(50.0, 110.0));
    assert_eq!(
        log.borrow().last_position,
        Some(ContentPoint::new(50.0, 220.0))
    );
    assert!(!log.borrow().hovered);
}

#[test]
fn veto_state_does_not_leak_between_dispatches() {
    let mut ui = UiContext::new();
    let mut scroll = ScrollContainer::new(&mut ui, Rect::new(0.0, 0.0, 100.0, 100.0), 300.0);
    let (probe, log) = Probe::new(&mut ui, Rect::new(10.0, 10.0, 80.0, 40.0));
    scroll.push_child(Box::new(probe));

    // Outside first, then inside: the second dispatch must not inherit the
    // first dispatch's veto.
    scroll.handle_event(&mut ui, &pointer_move(500.0, 500.0));
    assert!(!log.borrow().hovered);
    scroll.handle_event(&mut ui, &pointer_move(50.0, 20.0));
    assert!(log.borrow().hovered);
}

#[test]
fn obstruction_blocks_hover_through_the_whole_tree() {
    let mut ui = UiContext::new();
    let mut scroll = ScrollContainer::new(&mut ui, Rect::new(0.0, 0.0, 100.0, 100.0), 300.0);
    let (probe, log) = Probe::new(&mut ui, Rect::new(10.0, 10.0, 80.0, 40.0));
    scroll.push_child(Box::new(probe));

    let modal = ui.allocate_id();
    ui.obstruct(modal, Rect::new(0.0, 0.0, 200.0, 200.0));
    scroll.handle_event(&mut ui, &pointer_move(50.0, 20.0));
    assert!(!log.borrow().hovered, "obstructed region vetoes hover");

    ui.release_obstruction(modal);
    scroll.handle_event(&mut ui, &pointer_move(50.0, 20.0));
    assert!(log.borrow().hovered);
}
