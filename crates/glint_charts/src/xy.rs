//! XY series charts
//!
//! One chart model serves line, area, and bar presentations: the series
//! data and auto-scaling are shared, and the presentation is a
//! [`SeriesRenderer`] value picked at construction. No chart subclassing.

use glint_core::{Color, Rect};
use glint_render::RenderContext;

use crate::series::{min_max, DataSeries};

/// Presentation strategy for a [`SeriesChartModel`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeriesRenderer {
    #[default]
    Line,
    Area,
    Bar,
}

#[derive(Clone, Debug)]
pub struct SeriesChartStyle {
    pub stroke: Color,
    pub fill_alpha: f32,
    pub stroke_width: f32,
    /// Fraction of a bar slot occupied by the bar
    pub bar_fill: f32,
    /// Fixed scale bounds; `None` auto-scales to the retained values
    pub min_value: Option<f32>,
    pub max_value: Option<f32>,
}

impl Default for SeriesChartStyle {
    fn default() -> Self {
        Self {
            stroke: Color::from_rgba8(90, 166, 255, 217),
            fill_alpha: 0.25,
            stroke_width: 1.0,
            bar_fill: 0.8,
            min_value: None,
            max_value: None,
        }
    }
}

/// A chart over one ring-buffer series
pub struct SeriesChartModel {
    pub series: DataSeries,
    pub renderer: SeriesRenderer,
    pub style: SeriesChartStyle,
}

impl SeriesChartModel {
    pub fn new(capacity: usize, renderer: SeriesRenderer) -> Self {
        Self {
            series: DataSeries::new(capacity),
            renderer,
            style: SeriesChartStyle::default(),
        }
    }

    /// Scale bounds for a snapshot: explicit style bounds win, otherwise
    /// auto-scale; a flat series is padded so it draws mid-plot.
    fn scale(&self, values: &[f32]) -> Option<(f32, f32)> {
        let (auto_min, auto_max) = min_max(values)?;
        let mut min = self.style.min_value.unwrap_or(auto_min);
        let mut max = self.style.max_value.unwrap_or(auto_max);
        if min >= max {
            min -= 0.5;
            max += 0.5;
        }
        Some((min, max))
    }

    /// Render into `bounds` (logical pixels). Empty series or degenerate
    /// bounds draw nothing.
    pub fn draw(&self, ctx: &mut RenderContext, bounds: Rect) {
        if bounds.is_empty() {
            return;
        }
        let values = self.series.snapshot();
        let Some((min, max)) = self.scale(&values) else {
            return;
        };

        let project_y =
            |v: f32| bounds.bottom() - (v.clamp(min, max) - min) / (max - min) * bounds.height;

        match self.renderer {
            SeriesRenderer::Line => self.draw_line(ctx, bounds, &values, project_y),
            SeriesRenderer::Area => self.draw_area(ctx, bounds, &values, project_y),
            SeriesRenderer::Bar => self.draw_bars(ctx, bounds, &values, project_y),
        }
    }

    fn draw_line(
        &self,
        ctx: &mut RenderContext,
        bounds: Rect,
        values: &[f32],
        project_y: impl Fn(f32) -> f32,
    ) {
        if values.len() < 2 {
            return;
        }
        let step = bounds.width / (values.len() - 1) as f32;
        for (i, pair) in values.windows(2).enumerate() {
            let x0 = bounds.x + step * i as f32;
            ctx.line(
                x0,
                project_y(pair[0]),
                x0 + step,
                project_y(pair[1]),
                self.style.stroke_width,
                self.style.stroke,
            );
        }
    }

    fn draw_area(
        &self,
        ctx: &mut RenderContext,
        bounds: Rect,
        values: &[f32],
        project_y: impl Fn(f32) -> f32,
    ) {
        if values.len() < 2 {
            return;
        }
        let fill = self.style.stroke.with_alpha(self.style.fill_alpha);
        let base = bounds.bottom();
        let step = bounds.width / (values.len() - 1) as f32;

        for (i, pair) in values.windows(2).enumerate() {
            let x0 = bounds.x + step * i as f32;
            let x1 = x0 + step;
            let y0 = project_y(pair[0]);
            let y1 = project_y(pair[1]);
            ctx.fill_triangle((x0, y0), (x0, base), (x1, base), fill);
            ctx.fill_triangle((x0, y0), (x1, base), (x1, y1), fill);
        }
        self.draw_line(ctx, bounds, values, project_y);
    }

    fn draw_bars(
        &self,
        ctx: &mut RenderContext,
        bounds: Rect,
        values: &[f32],
        project_y: impl Fn(f32) -> f32,
    ) {
        let slot = bounds.width / values.len() as f32;
        let bar_width = slot * self.style.bar_fill.clamp(0.0, 1.0);
        let inset = (slot - bar_width) / 2.0;
        for (i, &v) in values.iter().enumerate() {
            let top = project_y(v);
            ctx.fill_rect(
                Rect::new(
                    bounds.x + slot * i as f32 + inset,
                    top,
                    bar_width,
                    bounds.bottom() - top,
                ),
                self.style.stroke,
            );
        }
    }
}
