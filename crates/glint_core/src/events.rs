//! Input events delivered by the host engine
//!
//! The host calls into the toolkit synchronously, once per input callback.
//! Pointer positions are logical pixels in top-level screen space; scroll
//! containers convert them before propagating to children.

use crate::geometry::ScreenPoint;

/// Mouse button index as reported by the host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u8),
}

impl MouseButton {
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => MouseButton::Left,
            1 => MouseButton::Right,
            2 => MouseButton::Middle,
            n => MouseButton::Other(n),
        }
    }
}

/// Scroll wheel delta (positive y = away from the user)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollDelta {
    pub x: f32,
    pub y: f32,
}

/// A single input event
#[derive(Clone, Debug)]
pub enum InputEvent {
    PointerMove {
        position: ScreenPoint,
    },
    PointerDown {
        position: ScreenPoint,
        button: MouseButton,
    },
    PointerUp {
        position: ScreenPoint,
        button: MouseButton,
    },
    PointerDrag {
        position: ScreenPoint,
        button: MouseButton,
    },
    Scroll {
        position: ScreenPoint,
        delta: ScrollDelta,
    },
    KeyDown {
        key_code: u32,
    },
    KeyUp {
        key_code: u32,
    },
}

impl InputEvent {
    /// Pointer position carried by the event, if any
    pub fn position(&self) -> Option<ScreenPoint> {
        match self {
            InputEvent::PointerMove { position }
            | InputEvent::PointerDown { position, .. }
            | InputEvent::PointerUp { position, .. }
            | InputEvent::PointerDrag { position, .. }
            | InputEvent::Scroll { position, .. } => Some(*position),
            InputEvent::KeyDown { .. } | InputEvent::KeyUp { .. } => None,
        }
    }
}
