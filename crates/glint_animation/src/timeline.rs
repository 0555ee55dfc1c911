//! Keyframe timelines
//!
//! A timeline is an ordered list of `(time, value, easing)` keyframes.
//! Sampling between two keyframes applies the *end* keyframe's easing to the
//! linear progress, then interpolates. Outside the keyframe range the
//! boundary value is held constant; the primitive never extrapolates and
//! never loops (looping is a caller concern, via `elapsed % duration`).

use glint_core::Color;
use smallvec::SmallVec;

use crate::easing::Easing;

/// How a timeline value blends between keyframes
pub trait Interpolate: Clone {
    fn interpolate(&self, target: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, target: &Self, t: f32) -> Self {
        self + (target - self) * t
    }
}

impl Interpolate for Color {
    fn interpolate(&self, target: &Self, t: f32) -> Self {
        self.lerp(*target, t)
    }
}

/// Wrapper giving any cloneable value hard-snap interpolation: the start
/// value holds until the midpoint, then the end value takes over.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Discrete<T: Clone>(pub T);

impl<T: Clone> Interpolate for Discrete<T> {
    fn interpolate(&self, target: &Self, t: f32) -> Self {
        if t < 0.5 {
            self.clone()
        } else {
            target.clone()
        }
    }
}

/// A single keyframe
#[derive(Clone, Debug)]
pub struct Keyframe<T> {
    /// Time position in seconds from timeline start
    pub time: f32,
    /// Value at this keyframe
    pub value: T,
    /// Easing applied when transitioning TO this keyframe
    pub easing: Easing,
}

/// A keyframe timeline over any interpolatable value
#[derive(Clone, Debug, Default)]
pub struct KeyframeTimeline<T> {
    // Most timelines are a handful of keyframes; keep them inline.
    keyframes: SmallVec<[Keyframe<T>; 4]>,
}

impl<T: Interpolate> KeyframeTimeline<T> {
    pub fn new() -> Self {
        Self {
            keyframes: SmallVec::new(),
        }
    }

    /// Insert a keyframe, keeping the list sorted by time.
    ///
    /// Equal-time keyframes keep insertion order, so a later insert at the
    /// same time samples after the earlier one.
    pub fn add_keyframe(&mut self, time: f32, value: T, easing: Easing) -> &mut Self {
        let kf = Keyframe {
            time,
            value,
            easing,
        };
        let idx = self
            .keyframes
            .partition_point(|existing| existing.time <= time);
        self.keyframes.insert(idx, kf);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    pub fn keyframes(&self) -> &[Keyframe<T>] {
        &self.keyframes
    }

    /// Total duration (time of the last keyframe), 0 when empty
    pub fn duration(&self) -> f32 {
        self.keyframes.last().map(|kf| kf.time).unwrap_or(0.0)
    }

    /// Sample the timeline at `time` seconds.
    ///
    /// Returns `None` only when the timeline has no keyframes.
    pub fn value_at(&self, time: f32) -> Option<T> {
        let first = self.keyframes.first()?;
        if time <= first.time {
            return Some(first.value.clone());
        }
        let last = self.keyframes.last()?;
        if time >= last.time {
            return Some(last.value.clone());
        }

        // Find the bracketing pair. `end` is the first keyframe strictly
        // after `time`, so landing exactly on a keyframe returns its exact
        // value with no easing artifact.
        let end_idx = self.keyframes.partition_point(|kf| kf.time <= time);
        let start = &self.keyframes[end_idx - 1];
        let end = &self.keyframes[end_idx];

        let span = end.time - start.time;
        if span <= f32::EPSILON {
            return Some(start.value.clone());
        }
        let progress = (time - start.time) / span;
        let eased = end.easing.apply(progress);
        Some(start.value.interpolate(&end.value, eased))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> KeyframeTimeline<f32> {
        let mut tl = KeyframeTimeline::new();
        tl.add_keyframe(1.0, 10.0, Easing::Linear)
            .add_keyframe(3.0, 30.0, Easing::Linear)
            .add_keyframe(2.0, 0.0, Easing::EaseInOut);
        tl
    }

    #[test]
    fn keyframes_stay_sorted_regardless_of_insert_order() {
        let tl = sample_timeline();
        let times: Vec<f32> = tl.keyframes().iter().map(|kf| kf.time).collect();
        assert_eq!(times, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn before_first_holds_first_value() {
        let tl = sample_timeline();
        assert_eq!(tl.value_at(-5.0), Some(10.0));
        assert_eq!(tl.value_at(1.0), Some(10.0));
    }

    #[test]
    fn after_last_holds_last_value() {
        let tl = sample_timeline();
        assert_eq!(tl.value_at(3.0), Some(30.0));
        assert_eq!(tl.value_at(100.0), Some(30.0));
    }

    #[test]
    fn interior_keyframe_time_returns_exact_value() {
        let tl = sample_timeline();
        assert_eq!(tl.value_at(2.0), Some(0.0));
    }

    #[test]
    fn segment_uses_end_keyframe_easing() {
        let mut tl = KeyframeTimeline::new();
        tl.add_keyframe(0.0, 0.0, Easing::Linear)
            .add_keyframe(1.0, 1.0, Easing::EaseInQuad);
        // EaseInQuad at t=0.5 is 0.25
        let v = tl.value_at(0.5).unwrap();
        assert!((v - 0.25).abs() < 1e-6);
    }

    #[test]
    fn empty_timeline_returns_none() {
        let tl: KeyframeTimeline<f32> = KeyframeTimeline::new();
        assert_eq!(tl.value_at(0.0), None);
    }

    #[test]
    fn discrete_values_snap_at_midpoint() {
        let mut tl = KeyframeTimeline::new();
        tl.add_keyframe(0.0, Discrete("start"), Easing::Linear)
            .add_keyframe(1.0, Discrete("end"), Easing::Linear);
        assert_eq!(tl.value_at(0.4), Some(Discrete("start")));
        assert_eq!(tl.value_at(0.6), Some(Discrete("end")));
    }

    #[test]
    fn color_timeline_interpolates_per_channel() {
        use glint_core::Color;
        let mut tl = KeyframeTimeline::new();
        tl.add_keyframe(0.0, Color::BLACK, Easing::Linear)
            .add_keyframe(2.0, Color::WHITE, Easing::Linear);
        let mid = tl.value_at(1.0).unwrap();
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert!((mid.a - 1.0).abs() < 1e-6);
    }
}
