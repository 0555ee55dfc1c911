//! Panel widget
//!
//! A rounded-rect surface whose colors and corner radius are resolved
//! through the stylesheet for the current interaction state and chased by
//! the per-widget animated style, so hover/active transitions glide.

use glint_core::{InteractionState, Rect};
use glint_render::RenderContext;
use glint_style::{AnimatedStyle, ColorProp, FloatProp, StyleSheet};

use crate::context::{UiContext, WidgetId};
use crate::effect::Effect;
use crate::widget::{Widget, WidgetEvent};

pub struct Panel {
    id: WidgetId,
    /// Bounds in the parent's content space
    pub bounds: Rect,
    pub sheet: StyleSheet,
    pub effects: Vec<Effect>,
    pub disabled: bool,
    animated: AnimatedStyle,
    hovered: bool,
    active: bool,
}

impl Panel {
    pub fn new(ui: &mut UiContext, bounds: Rect) -> Self {
        Self {
            id: ui.allocate_id(),
            bounds,
            sheet: StyleSheet::new(),
            effects: Vec::new(),
            disabled: false,
            animated: AnimatedStyle::new(),
            hovered: false,
            active: false,
        }
    }

    pub fn with_sheet(mut self, sheet: StyleSheet) -> Self {
        self.sheet = sheet;
        self
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Interaction state for this frame
    pub fn state(&self) -> InteractionState {
        InteractionState::compute(self.disabled, self.active, self.hovered)
    }
}

impl Widget for Panel {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn render(&mut self, ui: &mut UiContext, ctx: &mut RenderContext) {
        for effect in &self.effects {
            effect.begin(ctx);
        }

        let state = self.state();
        let dt = ui.dt();
        let background = self
            .animated
            .resolve_color(&self.sheet, state, ColorProp::BackgroundColor, dt);
        let radius = self
            .animated
            .resolve_float(&self.sheet, state, FloatProp::CornerRadius, dt);
        let thickness = self
            .animated
            .resolve_float(&self.sheet, state, FloatProp::BorderThickness, dt);

        ctx.fill_rounded_rect(self.bounds, background, radius.into());
        if thickness > 0.0 {
            let border = self
                .animated
                .resolve_color(&self.sheet, state, ColorProp::BorderColor, dt);
            ctx.stroke_rounded_rect(self.bounds, border, radius.into(), thickness);
        }

        for effect in self.effects.iter().rev() {
            effect.end(ctx);
        }
    }

    fn handle_event(&mut self, ui: &mut UiContext, event: &WidgetEvent) -> bool {
        if self.disabled {
            return false;
        }
        match event {
            WidgetEvent::PointerMove { pointer } | WidgetEvent::PointerDrag { pointer, .. } => {
                let in_bounds = self.bounds.contains(pointer.position.x, pointer.position.y);
                let clip_veto = self
                    .effects
                    .iter()
                    .any(|e| e.vetoes_hover_at(pointer.position));
                self.hovered = in_bounds
                    && !clip_veto
                    && ui.hover_permitted(self.id, pointer.screen);
                false
            }
            WidgetEvent::PointerDown { pointer, .. } => {
                if self.bounds.contains(pointer.position.x, pointer.position.y) {
                    self.active = true;
                    true
                } else {
                    false
                }
            }
            WidgetEvent::PointerUp { .. } => {
                let was_active = self.active;
                self.active = false;
                was_active
            }
            WidgetEvent::Scroll { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::PointerInfo;
    use glint_core::{MouseButton, ScreenPoint};

    fn pointer_move(x: f32, y: f32) -> WidgetEvent {
        WidgetEvent::PointerMove {
            pointer: PointerInfo::from_screen(ScreenPoint::new(x, y)),
        }
    }

    #[test]
    fn hover_follows_pointer() {
        let mut ui = UiContext::new();
        let mut panel = Panel::new(&mut ui, Rect::new(10.0, 10.0, 50.0, 50.0));

        panel.handle_event(&mut ui, &pointer_move(30.0, 30.0));
        assert_eq!(panel.state(), InteractionState::Hover);

        panel.handle_event(&mut ui, &pointer_move(200.0, 30.0));
        assert_eq!(panel.state(), InteractionState::Default);
    }

    #[test]
    fn click_makes_the_panel_active_until_release() {
        let mut ui = UiContext::new();
        let mut panel = Panel::new(&mut ui, Rect::new(0.0, 0.0, 20.0, 20.0));
        let down = WidgetEvent::PointerDown {
            pointer: PointerInfo::from_screen(ScreenPoint::new(5.0, 5.0)),
            button: MouseButton::Left,
        };
        let up = WidgetEvent::PointerUp {
            pointer: PointerInfo::from_screen(ScreenPoint::new(5.0, 5.0)),
            button: MouseButton::Left,
        };

        assert!(panel.handle_event(&mut ui, &down));
        assert_eq!(panel.state(), InteractionState::Active);
        assert!(panel.handle_event(&mut ui, &up));
        assert_eq!(panel.state(), InteractionState::Default);
    }

    #[test]
    fn disabled_wins_over_everything() {
        let mut ui = UiContext::new();
        let mut panel = Panel::new(&mut ui, Rect::new(0.0, 0.0, 20.0, 20.0));
        panel.disabled = true;
        panel.handle_event(&mut ui, &pointer_move(5.0, 5.0));
        assert_eq!(panel.state(), InteractionState::Disabled);
    }

    #[test]
    fn obstructor_vetoes_hover_inside_bounds() {
        let mut ui = UiContext::new();
        let mut panel = Panel::new(&mut ui, Rect::new(0.0, 0.0, 50.0, 50.0));
        let dropdown = ui.allocate_id();
        ui.obstruct(dropdown, Rect::new(0.0, 0.0, 100.0, 100.0));

        panel.handle_event(&mut ui, &pointer_move(25.0, 25.0));
        assert_eq!(panel.state(), InteractionState::Default);

        ui.release_obstruction(dropdown);
        panel.handle_event(&mut ui, &pointer_move(25.0, 25.0));
        assert_eq!(panel.state(), InteractionState::Hover);
    }

    #[test]
    fn own_clip_effect_vetoes_hover_outside_clip() {
        let mut ui = UiContext::new();
        let mut panel = Panel::new(&mut ui, Rect::new(0.0, 0.0, 100.0, 100.0));
        panel.effects.push(Effect::Clip(Rect::new(0.0, 0.0, 40.0, 40.0)));

        panel.handle_event(&mut ui, &pointer_move(20.0, 20.0));
        assert_eq!(panel.state(), InteractionState::Hover);

        panel.handle_event(&mut ui, &pointer_move(80.0, 80.0));
        assert_eq!(panel.state(), InteractionState::Default);
    }
}
