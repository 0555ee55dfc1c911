//! Per-widget animated style state
//!
//! The stylesheet gives each frame a *target* value; the live value chases
//! it with exponential decay so state changes glide instead of snapping.
//! Live values persist across frames and are created lazily the first time
//! a property is queried (seeded at the target, so a widget's first frame
//! shows its resolved style with no fade-in from a bogus origin).

use glint_animation::{AnimatedColor, AnimatedF32};
use glint_core::{Color, InteractionState};

use crate::props::{ColorProp, FloatProp};
use crate::sheet::StyleSheet;

/// Default decay speed when a widget does not specify one
pub const DEFAULT_SPEED: f32 = 14.0;

/// Live animated values for one widget, keyed by property
#[derive(Clone, Debug, Default)]
pub struct AnimatedStyle {
    colors: [Option<AnimatedColor>; ColorProp::COUNT],
    floats: [Option<AnimatedF32>; FloatProp::COUNT],
}

impl AnimatedStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the live color for `prop` toward `target` and return it
    pub fn animate_color(&mut self, prop: ColorProp, target: Color, speed: f32, dt: f32) -> Color {
        let slot = &mut self.colors[prop.index()];
        match slot {
            Some(live) => live.step(target, speed, dt),
            None => {
                *slot = Some(AnimatedColor::new(target));
                target
            }
        }
    }

    /// Advance the live float for `prop` toward `target` and return it
    pub fn animate_float(&mut self, prop: FloatProp, target: f32, speed: f32, dt: f32) -> f32 {
        let slot = &mut self.floats[prop.index()];
        match slot {
            Some(live) => live.step(target, speed, dt),
            None => {
                *slot = Some(AnimatedF32::new(target));
                target
            }
        }
    }

    /// Resolve a color from the sheet for `state` and chase it
    pub fn resolve_color(
        &mut self,
        sheet: &StyleSheet,
        state: InteractionState,
        prop: ColorProp,
        dt: f32,
    ) -> Color {
        let target = sheet.resolve_color(state, prop);
        self.animate_color(prop, target, DEFAULT_SPEED, dt)
    }

    /// Resolve a float from the sheet for `state` and chase it
    pub fn resolve_float(
        &mut self,
        sheet: &StyleSheet,
        state: InteractionState,
        prop: FloatProp,
        dt: f32,
    ) -> f32 {
        let target = sheet.resolve_float(state, prop);
        self.animate_float(prop, target, DEFAULT_SPEED, dt)
    }

    /// Drop all live values (e.g. when a widget is recycled)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_query_seeds_at_target() {
        let mut anim = AnimatedStyle::new();
        let v = anim.animate_float(FloatProp::Opacity, 0.5, 10.0, 1.0 / 60.0);
        assert_eq!(v, 0.5);
    }

    #[test]
    fn live_value_chases_new_target() {
        let mut anim = AnimatedStyle::new();
        anim.animate_float(FloatProp::Opacity, 0.0, 10.0, 1.0 / 60.0);
        let v = anim.animate_float(FloatProp::Opacity, 1.0, 10.0, 1.0 / 60.0);
        assert!(v > 0.0 && v < 1.0, "one step should land strictly between");
    }

    #[test]
    fn properties_animate_independently() {
        let mut anim = AnimatedStyle::new();
        anim.animate_color(ColorProp::BackgroundColor, Color::BLACK, 10.0, 0.016);
        let border = anim.animate_color(ColorProp::BorderColor, Color::WHITE, 10.0, 0.016);
        assert_eq!(border, Color::WHITE);
    }
}
