//! Chart Widgets
//!
//! Chart descriptions for the external charting library (Chart.js). The
//! crate never draws anything itself: it produces configuration objects whose
//! series are the literal datasets, passed through unmodified.

pub mod catalog;
pub mod error;
pub mod types;

pub use catalog::{ChartCatalog, Gauge};
pub use error::ChartError;
pub use types::{Axis, ChartBuilder, ChartKind, ChartOptions, ChartSpec, Dataset, LegendPosition, Paint};
