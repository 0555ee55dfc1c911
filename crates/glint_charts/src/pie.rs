//! Pie and donut charts
//!
//! Slices sweep clockwise from the top, each covering `value / total` of
//! the full circle. A zero total is a routine transient state (all samples
//! drained) and draws nothing. Hit-testing is angular + radial so donut
//! holes do not capture hover.

use glint_core::{Color, Rect};
use glint_render::RenderContext;

/// Slices start at 12 o'clock
const START_ANGLE_DEG: f32 = -90.0;

#[derive(Clone, Debug)]
pub struct PieChartStyle {
    pub palette: Vec<Color>,
    /// Donut hole radius as a fraction of the outer radius; 0 is a solid pie
    pub inner_ratio: f32,
    /// Extra outer radius for the hovered slice, logical pixels
    pub hover_grow: f32,
}

impl Default for PieChartStyle {
    fn default() -> Self {
        Self {
            palette: vec![
                Color::from_rgba8(90, 166, 255, 230),
                Color::from_rgba8(242, 140, 89, 230),
                Color::from_rgba8(102, 217, 140, 230),
                Color::from_rgba8(230, 191, 64, 230),
                Color::from_rgba8(191, 140, 242, 230),
                Color::from_rgba8(64, 204, 217, 230),
            ],
            inner_ratio: 0.0,
            hover_grow: 3.0,
        }
    }
}

pub struct PieChartModel {
    pub values: Vec<f32>,
    pub style: PieChartStyle,
    pub hover_slice: Option<usize>,
}

impl PieChartModel {
    pub fn new(values: Vec<f32>) -> anyhow::Result<Self> {
        anyhow::ensure!(!values.is_empty(), "PieChartModel requires at least one value");
        anyhow::ensure!(
            values.iter().all(|v| v.is_finite() && *v >= 0.0),
            "PieChartModel values must be finite and non-negative"
        );
        Ok(Self {
            values,
            style: PieChartStyle::default(),
            hover_slice: None,
        })
    }

    pub fn donut(values: Vec<f32>, inner_ratio: f32) -> anyhow::Result<Self> {
        anyhow::ensure!(
            (0.0..1.0).contains(&inner_ratio),
            "donut inner ratio must be in [0, 1)"
        );
        let mut model = Self::new(values)?;
        model.style.inner_ratio = inner_ratio;
        Ok(model)
    }

    /// Start/end angle (degrees, clockwise from the top) per slice.
    ///
    /// Cumulative sums keep the final end angle at exactly
    /// `START_ANGLE_DEG + 360`. Empty when the total is zero.
    pub fn slice_angles(&self) -> Vec<(f32, f32)> {
        let total: f32 = self.values.iter().sum();
        if total <= 0.0 {
            return Vec::new();
        }
        let mut angles = Vec::with_capacity(self.values.len());
        let mut cumulative = 0.0;
        for &value in &self.values {
            let start = START_ANGLE_DEG + cumulative / total * 360.0;
            cumulative += value;
            let end = START_ANGLE_DEG + cumulative / total * 360.0;
            angles.push((start, end));
        }
        angles
    }

    fn geometry(&self, width: f32, height: f32) -> (f32, f32, f32, f32) {
        let cx = width / 2.0;
        let cy = height / 2.0;
        let outer = width.min(height) / 2.0;
        let inner = outer * self.style.inner_ratio;
        (cx, cy, outer, inner)
    }

    /// Render into `bounds` (logical pixels). A zero total silently skips.
    pub fn draw(&self, ctx: &mut RenderContext, bounds: Rect) {
        if bounds.is_empty() {
            return;
        }
        let angles = self.slice_angles();
        if angles.is_empty() {
            return;
        }
        let (cx, cy, outer, inner) = self.geometry(bounds.width, bounds.height);
        let inner = (inner > 0.0).then_some(inner);

        for (i, (start, end)) in angles.iter().enumerate() {
            let palette = &self.style.palette;
            let color = palette[i % palette.len()];
            let radius = if self.hover_slice == Some(i) {
                outer + self.style.hover_grow
            } else {
                outer
            };
            ctx.fill_arc(bounds.x + cx, bounds.y + cy, radius, inner, *start, *end, color);
        }
    }

    /// Slice under a point given in chart-local coordinates, or `None`
    /// inside the donut hole / outside the outer radius.
    pub fn slice_at(&self, local_x: f32, local_y: f32, width: f32, height: f32) -> Option<usize> {
        let (cx, cy, outer, inner) = self.geometry(width, height);
        let dx = local_x - cx;
        let dy = local_y - cy;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance > outer || distance < inner {
            return None;
        }

        let angles = self.slice_angles();
        if angles.is_empty() {
            return None;
        }

        // Screen-space atan2 increases clockwise; rebase to the top.
        let angle = dy.atan2(dx).to_degrees();
        let relative = (angle - START_ANGLE_DEG).rem_euclid(360.0);

        let start_base = START_ANGLE_DEG;
        angles
            .iter()
            .position(|(start, end)| {
                relative >= start - start_base && relative < end - start_base
            })
            .or_else(|| {
                // 360.0 exactly lands past the last slice's half-open range.
                (relative >= 360.0 - 1e-4).then_some(angles.len() - 1)
            })
    }

    pub fn on_mouse_move(&mut self, local_x: f32, local_y: f32, width: f32, height: f32) {
        self.hover_slice = self.slice_at(local_x, local_y, width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweeps_are_proportional_and_sum_to_full_circle() {
        let model = PieChartModel::new(vec![30.0, 70.0]).unwrap();
        let angles = model.slice_angles();

        let sweep0 = angles[0].1 - angles[0].0;
        let sweep1 = angles[1].1 - angles[1].0;
        assert_eq!(sweep0, 108.0);
        assert_eq!(sweep1, 252.0);
        assert_eq!(sweep0 + sweep1, 360.0);
        assert_eq!(angles[1].1, START_ANGLE_DEG + 360.0);
    }

    #[test]
    fn zero_total_yields_no_slices() {
        let model = PieChartModel::new(vec![0.0, 0.0]).unwrap();
        assert!(model.slice_angles().is_empty());
    }

    #[test]
    fn drained_chart_never_reports_a_hovered_slice() {
        let model = PieChartModel::new(vec![0.0]).unwrap();
        // Includes a point a hair's width counter-clockwise of 12 o'clock,
        // whose rebased angle wraps to just under 360 degrees.
        assert_eq!(model.slice_at(50.0, 10.0, 100.0, 100.0), None);
        assert_eq!(model.slice_at(49.99995, 10.0, 100.0, 100.0), None);
        assert_eq!(model.slice_at(50.0, 50.0, 100.0, 100.0), None);
    }

    #[test]
    fn negative_values_are_rejected() {
        assert!(PieChartModel::new(vec![1.0, -2.0]).is_err());
        assert!(PieChartModel::new(vec![]).is_err());
        assert!(PieChartModel::new(vec![f32::NAN]).is_err());
    }

    #[test]
    fn hit_test_resolves_slices_clockwise_from_top() {
        let model = PieChartModel::new(vec![30.0, 70.0]).unwrap();
        // First slice covers -90..18 degrees; straight up and straight
        // right both land in it on a 100x100 chart.
        assert_eq!(model.slice_at(50.0, 10.0, 100.0, 100.0), Some(0));
        assert_eq!(model.slice_at(90.0, 50.0, 100.0, 100.0), Some(0));
        // Straight left is deep inside the second slice.
        assert_eq!(model.slice_at(10.0, 50.0, 100.0, 100.0), Some(1));
    }

    #[test]
    fn donut_hole_and_outside_are_not_hoverable() {
        let model = PieChartModel::donut(vec![30.0, 70.0], 0.6).unwrap();
        // Center: inside the hole (inner radius 30 on a 100x100 chart).
        assert_eq!(model.slice_at(50.0, 50.0, 100.0, 100.0), None);
        // Within the ring.
        assert_eq!(model.slice_at(50.0, 10.0, 100.0, 100.0), Some(0));
        // Beyond the outer radius.
        assert_eq!(model.slice_at(0.0, 0.0, 100.0, 100.0), None);
    }

    #[test]
    fn invalid_inner_ratio_is_rejected() {
        assert!(PieChartModel::donut(vec![1.0], 1.0).is_err());
        assert!(PieChartModel::donut(vec![1.0], -0.1).is_err());
    }
}
