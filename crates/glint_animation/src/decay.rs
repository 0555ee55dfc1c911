//! Framerate-independent exponential-decay smoothing
//!
//! Each step moves the live value toward its target by
//! `1 - exp(-speed * dt)`. The closed form makes the visual speed
//! independent of the frame rate: stepping once with `dt` lands on the same
//! value as stepping twice with `dt / 2`.

use glint_core::Color;

/// Per-step interpolation factor for exponential decay.
///
/// `dt = 0` yields 0 (no movement); large `speed * dt` saturates at 1.
pub fn decay_factor(speed: f32, dt: f32) -> f32 {
    1.0 - (-speed * dt).exp()
}

/// A float smoothed toward a target with exponential decay
#[derive(Clone, Copy, Debug)]
pub struct AnimatedF32 {
    value: f32,
}

impl AnimatedF32 {
    pub fn new(value: f32) -> Self {
        Self { value }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Snap to a value without animating
    pub fn set(&mut self, value: f32) {
        self.value = value;
    }

    /// Advance one frame toward `target`. Returns the new live value.
    pub fn step(&mut self, target: f32, speed: f32, dt: f32) -> f32 {
        self.value += (target - self.value) * decay_factor(speed, dt);
        self.value
    }
}

/// A color smoothed toward a target, each channel independently
#[derive(Clone, Copy, Debug)]
pub struct AnimatedColor {
    value: Color,
}

impl AnimatedColor {
    pub fn new(value: Color) -> Self {
        Self { value }
    }

    pub fn value(&self) -> Color {
        self.value
    }

    /// Snap to a color without animating
    pub fn set(&mut self, value: Color) {
        self.value = value;
    }

    /// Advance one frame toward `target`. Channels are interpolated with the
    /// same factor and clamped on reassembly.
    pub fn step(&mut self, target: Color, speed: f32, dt: f32) -> Color {
        self.value = self.value.lerp(target, decay_factor(speed, dt));
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dt_leaves_value_unchanged() {
        let mut v = AnimatedF32::new(3.0);
        assert_eq!(v.step(10.0, 8.0, 0.0), 3.0);
    }

    #[test]
    fn converges_monotonically() {
        let mut v = AnimatedF32::new(0.0);
        let mut prev = 0.0;
        for _ in 0..200 {
            let next = v.step(100.0, 10.0, 1.0 / 60.0);
            assert!(next >= prev, "must approach the target monotonically");
            prev = next;
        }
        assert!((prev - 100.0).abs() < 1e-3);
    }

    #[test]
    fn framerate_independence() {
        // One big step lands where two half steps do.
        let mut coarse = AnimatedF32::new(0.0);
        coarse.step(1.0, 5.0, 0.032);

        let mut fine = AnimatedF32::new(0.0);
        fine.step(1.0, 5.0, 0.016);
        fine.step(1.0, 5.0, 0.016);

        assert!((coarse.value() - fine.value()).abs() < 1e-6);
    }

    #[test]
    fn color_channels_clamp() {
        let mut c = AnimatedColor::new(Color::BLACK);
        for _ in 0..500 {
            c.step(Color::WHITE, 20.0, 1.0 / 60.0);
        }
        let v = c.value();
        assert!(v.r <= 1.0 && v.g <= 1.0 && v.b <= 1.0 && v.a <= 1.0);
        assert!((v.r - 1.0).abs() < 1e-3);
    }
}
