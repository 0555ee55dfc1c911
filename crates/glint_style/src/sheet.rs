//! Per-state style override tables

use glint_core::{Color, InteractionState};

use crate::props::{ColorProp, FloatProp};

const STATE_COUNT: usize = 4;

const fn state_index(state: InteractionState) -> usize {
    match state {
        InteractionState::Default => 0,
        InteractionState::Hover => 1,
        InteractionState::Active => 2,
        InteractionState::Disabled => 3,
    }
}

/// A set of per-state style overrides for one widget.
///
/// Resolution is a pure function of (sheet, state): exact-state override,
/// then Default-state override, then the property's hardcoded default.
#[derive(Clone, Debug, Default)]
pub struct StyleSheet {
    colors: [[Option<Color>; ColorProp::COUNT]; STATE_COUNT],
    floats: [[Option<f32>; FloatProp::COUNT]; STATE_COUNT],
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a color override for a state (builder form)
    pub fn color(mut self, state: InteractionState, prop: ColorProp, value: Color) -> Self {
        self.set_color(state, prop, value);
        self
    }

    /// Set a float override for a state (builder form)
    pub fn float(mut self, state: InteractionState, prop: FloatProp, value: f32) -> Self {
        self.set_float(state, prop, value);
        self
    }

    pub fn set_color(&mut self, state: InteractionState, prop: ColorProp, value: Color) {
        self.colors[state_index(state)][prop.index()] = Some(value);
    }

    pub fn set_float(&mut self, state: InteractionState, prop: FloatProp, value: f32) {
        self.floats[state_index(state)][prop.index()] = Some(value);
    }

    /// Resolve a color for an interaction state
    pub fn resolve_color(&self, state: InteractionState, prop: ColorProp) -> Color {
        self.colors[state_index(state)][prop.index()]
            .or(self.colors[state_index(InteractionState::Default)][prop.index()])
            .unwrap_or_else(|| prop.default_value())
    }

    /// Resolve a float for an interaction state
    pub fn resolve_float(&self, state: InteractionState, prop: FloatProp) -> f32 {
        self.floats[state_index(state)][prop.index()]
            .or(self.floats[state_index(InteractionState::Default)][prop.index()])
            .unwrap_or_else(|| prop.default_value())
    }
}
