//! Glint Styling System
//!
//! Widgets resolve their appearance through three layers:
//!
//! 1. **Typed properties** ([`ColorProp`], [`FloatProp`]) with hardcoded
//!    defaults: a closed enum set, not a runtime property registry, so
//!    resolution is an array index instead of a map lookup.
//! 2. **Per-state override tables** ([`StyleSheet`]) consulted with the
//!    fallback chain exact state → Default state → hardcoded default.
//! 3. **Animated live values** ([`AnimatedStyle`]) that chase the resolved
//!    target with exponential decay, one live value per property per widget.

pub mod animated;
pub mod props;
pub mod sheet;

pub use animated::AnimatedStyle;
pub use props::{ColorProp, FloatProp};
pub use sheet::StyleSheet;
