//! Glint Animation System
//!
//! Time-delta-driven animation primitives, evaluated synchronously each
//! frame on the render thread:
//!
//! - **Easing curves**: standard curve set plus CSS cubic-bezier
//! - **Exponential decay**: framerate-independent smoothing toward a target
//! - **Keyframe timelines**: time-sorted keyframes with per-segment easing
//!
//! Nothing here spawns threads or timers; callers advance state by passing
//! the frame's delta time.

pub mod decay;
pub mod easing;
pub mod timeline;

pub use decay::{decay_factor, AnimatedColor, AnimatedF32};
pub use easing::Easing;
pub use timeline::{Discrete, Interpolate, Keyframe, KeyframeTimeline};
