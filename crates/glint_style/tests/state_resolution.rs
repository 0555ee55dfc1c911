use glint_core::{Color, InteractionState};
use glint_style::{AnimatedStyle, ColorProp, FloatProp, StyleSheet};

#[test]
fn hover_only_override_is_invisible_to_active_state() {
    let hover_bg = Color::from_argb(0xFF446688);
    let default_bg = Color::from_argb(0xFF111111);
    let sheet = StyleSheet::new()
        .color(InteractionState::Default, ColorProp::BackgroundColor, default_bg)
        .color(InteractionState::Hover, ColorProp::BackgroundColor, hover_bg);

    // Active was never styled: the chain skips Hover entirely and lands on
    // the Default-state override.
    assert_eq!(
        sheet.resolve_color(InteractionState::Active, ColorProp::BackgroundColor),
        default_bg
    );
    assert_eq!(
        sheet.resolve_color(InteractionState::Hover, ColorProp::BackgroundColor),
        hover_bg
    );
}

#[test]
fn completely_unstyled_property_uses_hardcoded_default() {
    let sheet = StyleSheet::new();
    assert_eq!(
        sheet.resolve_float(InteractionState::Disabled, FloatProp::Opacity),
        FloatProp::Opacity.default_value()
    );
}

#[test]
fn state_change_glides_to_the_new_target() {
    let sheet = StyleSheet::new()
        .float(InteractionState::Default, FloatProp::CornerRadius, 2.0)
        .float(InteractionState::Hover, FloatProp::CornerRadius, 8.0);
    let mut animated = AnimatedStyle::new();
    let dt = 1.0 / 60.0;

    // Settle in Default first.
    let start = animated.resolve_float(&sheet, InteractionState::Default, FloatProp::CornerRadius, dt);
    assert_eq!(start, 2.0);

    // One Hover frame lands strictly between the two targets.
    let first = animated.resolve_float(&sheet, InteractionState::Hover, FloatProp::CornerRadius, dt);
    assert!(first > 2.0 && first < 8.0, "got {first}");

    // Enough frames converge onto the Hover target.
    let mut value = first;
    for _ in 0..600 {
        value = animated.resolve_float(&sheet, InteractionState::Hover, FloatProp::CornerRadius, dt);
    }
    assert!((value - 8.0).abs() < 1e-3, "got {value}");
}

#[test]
fn color_transition_interpolates_every_channel() {
    let black = Color::BLACK;
    let white = Color::WHITE;
    let sheet = StyleSheet::new()
        .color(InteractionState::Default, ColorProp::AccentColor, black)
        .color(InteractionState::Active, ColorProp::AccentColor, white);
    let mut animated = AnimatedStyle::new();
    let dt = 1.0 / 60.0;

    animated.resolve_color(&sheet, InteractionState::Default, ColorProp::AccentColor, dt);
    let mid = animated.resolve_color(&sheet, InteractionState::Active, ColorProp::AccentColor, dt);
    assert!(mid.r > 0.0 && mid.r < 1.0);
    assert_eq!(mid.r, mid.g);
    assert_eq!(mid.g, mid.b);
}
