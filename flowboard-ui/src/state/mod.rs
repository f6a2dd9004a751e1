//! State Management
//!
//! The dashboard view-model wrapped in Leptos signals.

pub mod dashboard;

pub use dashboard::{provide_dashboard_state, DashboardState};
