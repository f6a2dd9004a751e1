//! Chart construction errors

use thiserror::Error;

/// Errors raised while assembling a chart
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// Gauge percentage outside 0..=100
    #[error("Gauge {canvas_id} value {value} is outside 0..=100")]
    GaugeOutOfRange { canvas_id: String, value: f64 },

    /// A dataset does not have one point per label
    #[error("Chart {canvas_id} dataset {dataset:?} has {points} points for {labels} labels")]
    LabelMismatch {
        canvas_id: String,
        dataset: String,
        labels: usize,
        points: usize,
    },

    /// A chart was built without data
    #[error("Chart {0} has no datasets")]
    Empty(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChartError::GaugeOutOfRange {
            canvas_id: "gaugeCI".to_string(),
            value: -3.0,
        };
        assert_eq!(err.to_string(), "Gauge gaugeCI value -3 is outside 0..=100");

        let err = ChartError::Empty("barChart".to_string());
        assert_eq!(err.to_string(), "Chart barChart has no datasets");
    }
}
