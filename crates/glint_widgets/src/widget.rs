//! Widget trait and event model
//!
//! Pointer positions reach widgets as [`ContentPoint`]s in their parent's
//! content space; containers remap the position at every scroll hop. The
//! untranslated [`ScreenPoint`] rides along for checks that are inherently
//! screen-global (the obstructor registry).

use glint_core::{ContentPoint, InputEvent, MouseButton, Rect, ScreenPoint, ScrollDelta};
use glint_render::RenderContext;

use crate::context::UiContext;

/// Pointer position in both relevant spaces
#[derive(Clone, Copy, Debug)]
pub struct PointerInfo {
    /// Position in the receiving widget's parent content space
    pub position: ContentPoint,
    /// Original top-level screen position, never remapped
    pub screen: ScreenPoint,
}

impl PointerInfo {
    /// Root-level entry: screen space is the root's content space, made
    /// explicit with a zero-offset conversion.
    pub fn from_screen(screen: ScreenPoint) -> Self {
        Self {
            position: screen.to_content(0.0, 0.0),
            screen,
        }
    }

    /// Remap into a child content space shifted by `origin` and scrolled by
    /// `scroll_y`. The screen position is deliberately left untouched.
    pub fn remapped(self, origin: (f32, f32), scroll_y: f32) -> Self {
        Self {
            position: ContentPoint::new(
                self.position.x - origin.0,
                self.position.y - origin.1 + scroll_y,
            ),
            screen: self.screen,
        }
    }
}

/// An input event with its pointer position in parent content space
#[derive(Clone, Copy, Debug)]
pub enum WidgetEvent {
    PointerMove {
        pointer: PointerInfo,
    },
    PointerDown {
        pointer: PointerInfo,
        button: MouseButton,
    },
    PointerUp {
        pointer: PointerInfo,
        button: MouseButton,
    },
    PointerDrag {
        pointer: PointerInfo,
        button: MouseButton,
    },
    Scroll {
        pointer: PointerInfo,
        delta: ScrollDelta,
    },
}

impl WidgetEvent {
    /// Convert a host event for root dispatch. Key events carry no
    /// position and do not enter the widget tree here.
    pub fn from_input(event: &InputEvent) -> Option<Self> {
        match *event {
            InputEvent::PointerMove { position } => Some(WidgetEvent::PointerMove {
                pointer: PointerInfo::from_screen(position),
            }),
            InputEvent::PointerDown { position, button } => Some(WidgetEvent::PointerDown {
                pointer: PointerInfo::from_screen(position),
                button,
            }),
            InputEvent::PointerUp { position, button } => Some(WidgetEvent::PointerUp {
                pointer: PointerInfo::from_screen(position),
                button,
            }),
            InputEvent::PointerDrag { position, button } => Some(WidgetEvent::PointerDrag {
                pointer: PointerInfo::from_screen(position),
                button,
            }),
            InputEvent::Scroll { position, delta } => Some(WidgetEvent::Scroll {
                pointer: PointerInfo::from_screen(position),
                delta,
            }),
            InputEvent::KeyDown { .. } | InputEvent::KeyUp { .. } => None,
        }
    }

    pub fn pointer(&self) -> PointerInfo {
        match *self {
            WidgetEvent::PointerMove { pointer }
            | WidgetEvent::PointerDown { pointer, .. }
            | WidgetEvent::PointerUp { pointer, .. }
            | WidgetEvent::PointerDrag { pointer, .. }
            | WidgetEvent::Scroll { pointer, .. } => pointer,
        }
    }

    /// The same event with its pointer remapped into a child content space
    pub fn remapped(self, origin: (f32, f32), scroll_y: f32) -> Self {
        let remap = |p: PointerInfo| p.remapped(origin, scroll_y);
        match self {
            WidgetEvent::PointerMove { pointer } => WidgetEvent::PointerMove {
                pointer: remap(pointer),
            },
            WidgetEvent::PointerDown { pointer, button } => WidgetEvent::PointerDown {
                pointer: remap(pointer),
                button,
            },
            WidgetEvent::PointerUp { pointer, button } => WidgetEvent::PointerUp {
                pointer: remap(pointer),
                button,
            },
            WidgetEvent::PointerDrag { pointer, button } => WidgetEvent::PointerDrag {
                pointer: remap(pointer),
                button,
            },
            WidgetEvent::Scroll { pointer, delta } => WidgetEvent::Scroll {
                pointer: remap(pointer),
                delta,
            },
        }
    }
}

/// A node in the retained widget tree
pub trait Widget {
    /// Bounds in the parent's content space
    fn bounds(&self) -> Rect;

    fn render(&mut self, ui: &mut UiContext, ctx: &mut RenderContext);

    /// Handle an event; return `true` when consumed
    fn handle_event(&mut self, _ui: &mut UiContext, _event: &WidgetEvent) -> bool {
        false
    }
}
