//! Easing functions for animations

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the easing function to a progress value (0.0 to 1.0).
    ///
    /// The power families all derive from one accelerating curve `t^n`:
    /// the `Out` forms mirror it, the `InOut` forms splice the two halves.
    /// The bare `EaseIn`/`EaseOut`/`EaseInOut` aliases are the cubic
    /// family.
    pub fn apply(&self, t: f32) -> f32 {
        match *self {
            Easing::Linear => t,
            Easing::EaseInQuad => power_in(t, 2),
            Easing::EaseOutQuad => power_out(t, 2),
            Easing::EaseInOutQuad => power_in_out(t, 2),
            Easing::EaseIn | Easing::EaseInCubic => power_in(t, 3),
            Easing::EaseOut | Easing::EaseOutCubic => power_out(t, 3),
            Easing::EaseInOut | Easing::EaseInOutCubic => power_in_out(t, 3),
            Easing::EaseInQuart => power_in(t, 4),
            Easing::EaseOutQuart => power_out(t, 4),
            Easing::EaseInOutQuart => power_in_out(t, 4),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, x1, y1, x2, y2),
        }
    }
}

/// `t^n`: starts slow, finishes fast
fn power_in(t: f32, n: i32) -> f32 {
    t.powi(n)
}

/// Point-mirror of [`power_in`]: starts fast, settles slow
fn power_out(t: f32, n: i32) -> f32 {
    1.0 - (1.0 - t).powi(n)
}

/// [`power_in`] compressed into the first half, its mirror into the second
fn power_in_out(t: f32, n: i32) -> f32 {
    if t < 0.5 {
        power_in(2.0 * t, n) / 2.0
    } else {
        1.0 - power_in(2.0 - 2.0 * t, n) / 2.0
    }
}

/// CSS `cubic-bezier(x1, y1, x2, y2)` timing.
///
/// Sampling the curve means inverting its X polynomial for the bezier
/// parameter, then evaluating Y there. The inversion is a bracketed
/// Newton iteration in f64: a `[lo, hi]` interval always encloses the
/// root, and any Newton step that leaves the interval (or lands on a
/// degenerate slope) is replaced by the interval midpoint, so the loop
/// cannot diverge for any control points.
fn cubic_bezier(progress: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // Endpoints are pinned exactly.
    if progress <= 0.0 {
        return 0.0;
    }
    if progress >= 1.0 {
        return 1.0;
    }

    let target = progress as f64;
    let (x1, y1, x2, y2) = (x1 as f64, y1 as f64, x2 as f64, y2 as f64);

    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    let mut u = target;
    for _ in 0..24 {
        let err = bernstein(u, x1, x2) - target;
        if err.abs() < 1e-7 {
            break;
        }
        if err > 0.0 {
            hi = u;
        } else {
            lo = u;
        }
        let slope = bernstein_derivative(u, x1, x2);
        let newton = u - err / slope;
        u = if slope.abs() > 1e-6 && newton > lo && newton < hi {
            newton
        } else {
            (lo + hi) / 2.0
        };
    }
    bernstein(u, y1, y2) as f32
}

/// One coordinate of the unit bezier (endpoints pinned at 0 and 1),
/// Bernstein form
fn bernstein(u: f64, c1: f64, c2: f64) -> f64 {
    let v = 1.0 - u;
    3.0 * v * v * u * c1 + 3.0 * v * u * u * c2 + u * u * u
}

fn bernstein_derivative(u: f64, c1: f64, c2: f64) -> f64 {
    let v = 1.0 - u;
    3.0 * v * v * c1 + 6.0 * v * u * (c2 - c1) + 3.0 * u * u * (1.0 - c2)
}
