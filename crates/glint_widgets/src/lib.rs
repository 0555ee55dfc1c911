//! Glint Widgets
//!
//! The retained widget layer on top of the render, style, and text crates:
//!
//! - **UiContext**: the explicitly constructed root object holding the
//!   frame clock, widget ids, obstructor registry, and hover-veto stack.
//!   No globals.
//! - **Widget trait**: render + event dispatch in content-space coordinates
//! - **Effects**: a closed sum of clip and transform wrappers
//! - **ScrollContainer**: translates content, clips after translating, and
//!   remaps pointer coordinates in lockstep
//! - **Panel / Label**: leaf widgets exercising the style/animation and
//!   text engines

pub mod context;
pub mod effect;
pub mod label;
pub mod panel;
pub mod scroll;
pub mod widget;

pub use context::{UiContext, WidgetId};
pub use effect::Effect;
pub use label::Label;
pub use panel::Panel;
pub use scroll::ScrollContainer;
pub use widget::{PointerInfo, Widget, WidgetEvent};
