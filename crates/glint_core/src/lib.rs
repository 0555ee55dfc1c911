//! Glint Core Primitives
//!
//! Shared foundation for the Glint UI toolkit:
//!
//! - **Colors**: RGBA colors with interpolation helpers
//! - **Geometry**: rectangles, corner radii, coordinate-space-tagged points
//! - **Interaction states**: the per-widget state driving style resolution
//! - **Input events**: pointer/scroll/key events delivered by the host

pub mod color;
pub mod events;
pub mod geometry;
pub mod state;

pub use color::Color;
pub use events::{InputEvent, MouseButton, ScrollDelta};
pub use geometry::{ContentPoint, CornerRadius, Point, Rect, ScreenPoint};
pub use state::InteractionState;
