//! Widget interaction states
//!
//! Every widget resolves its styles against one of these states each frame.
//! The state is recomputed from focus/hover flags; it is never stored across
//! frames as authoritative data.

/// Interaction state driving style resolution
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InteractionState {
    /// No interaction
    #[default]
    Default,
    /// Pointer is over the widget and nothing vetoes hover
    Hover,
    /// Widget is focused/pressed
    Active,
    /// Widget ignores input entirely
    Disabled,
}

impl InteractionState {
    /// Compute the state for a frame. Disabled wins outright; Active takes
    /// priority over Hover, Hover over Default.
    pub fn compute(disabled: bool, active: bool, hovered: bool) -> Self {
        if disabled {
            InteractionState::Disabled
        } else if active {
            InteractionState::Active
        } else if hovered {
            InteractionState::Hover
        } else {
            InteractionState::Default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_order() {
        assert_eq!(
            InteractionState::compute(true, true, true),
            InteractionState::Disabled
        );
        assert_eq!(
            InteractionState::compute(false, true, true),
            InteractionState::Active
        );
        assert_eq!(
            InteractionState::compute(false, false, true),
            InteractionState::Hover
        );
        assert_eq!(
            InteractionState::compute(false, false, false),
            InteractionState::Default
        );
    }
}
