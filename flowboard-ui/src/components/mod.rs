//! UI Components
//!
//! Leptos components for the dashboard. Each one reads the view-model
//! from [`DashboardState`](crate::state::DashboardState) and sends DOM
//! events back through it.

pub mod chart;
pub mod filters;
pub mod header;
pub mod metric_card;
pub mod patient_table;
pub mod tabs;

pub use chart::{ChartCanvas, SlaGauges};
pub use filters::Filters;
pub use header::Header;
pub use metric_card::MetricCards;
pub use patient_table::PatientTable;
pub use tabs::Tabs;
