//! Dashboard error types
//!
//! A failing event handler returns one of these and leaves the view-model
//! untouched; callers log it and carry on with the next event.

use thiserror::Error;

use crate::charts::ChartError;
use crate::table::TableKind;

/// Errors that can occur while handling dashboard events
#[derive(Error, Debug)]
pub enum DashboardError {
    /// No element or chart is bound to this identifier
    #[error("Unknown element: {0}")]
    UnknownElement(String),

    /// Row id is not present in the table
    #[error("Unknown row {id} in {table} table")]
    UnknownRow { table: TableKind, id: u32 },

    /// Search result index is outside the current result list
    #[error("No search result at index {0}")]
    UnknownResult(usize),

    /// View mode string did not name a mode
    #[error("Invalid view mode: {0}")]
    InvalidViewMode(String),

    /// Event text could not be parsed
    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    /// Chart construction failed
    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashboardError::UnknownRow {
            table: TableKind::Group,
            id: 42,
        };
        assert_eq!(err.to_string(), "Unknown row 42 in group table");

        let err = DashboardError::UnknownElement("gaugeXX".to_string());
        assert_eq!(err.to_string(), "Unknown element: gaugeXX");
    }

    #[test]
    fn test_chart_error_conversion() {
        let chart_err = ChartError::GaugeOutOfRange {
            canvas_id: "gaugeLab".to_string(),
            value: 120.0,
        };
        let err: DashboardError = chart_err.into();
        assert!(matches!(err, DashboardError::Chart(_)));
    }
}
