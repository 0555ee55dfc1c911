//! Glint Charts
//!
//! Data-driven chart widgets on top of the render pipeline:
//!
//! - **Series**: fixed-capacity ring buffer behind a mutex, so producer
//!   threads push samples while the render thread snapshots
//! - **XY charts**: one shared series model with composable line/area/bar
//!   renderers
//! - **Pie/donut**: proportional slices with angular + radial hit-testing
//!
//! All drawing happens through `glint_render::RenderContext` on the render
//! thread; only sample ingestion is cross-thread.

pub mod pie;
pub mod series;
pub mod xy;

pub use pie::{PieChartModel, PieChartStyle};
pub use series::{min_max, DataSeries, RingBuffer};
pub use xy::{SeriesChartModel, SeriesChartStyle, SeriesRenderer};
