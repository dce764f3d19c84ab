//! Chart rendering
//!
//! Renderers are pure: fetched data in, [`Visual`] out. They never touch
//! the network and never panic on empty or oddly-shaped input.

pub mod format;
pub mod render;
pub mod series;
mod visual;

pub use series::SeriesSchema;
pub use visual::{
    CartesianChart, ChartKind, EMPTY_MESSAGE, HeatmapGrid, PieChart, ReferenceLine, Series, Slice,
    StatCard, Visual,
};
