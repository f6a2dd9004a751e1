//! Chart description types
//!
//! A [`ChartSpec`] mirrors the subset of the Chart.js configuration schema the
//! dashboard uses. [`ChartSpec::to_config`] renders it to the JSON object the
//! library's constructor expects.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::error::ChartError;

/// Chart.js chart type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Radar,
    Doughnut,
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartKind::Line => write!(f, "line"),
            ChartKind::Bar => write!(f, "bar"),
            ChartKind::Radar => write!(f, "radar"),
            ChartKind::Doughnut => write!(f, "doughnut"),
        }
    }
}

/// A colour for a whole dataset or one per point
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Paint {
    Solid(String),
    PerPoint(Vec<String>),
}

impl From<&str> for Paint {
    fn from(color: &str) -> Self {
        Paint::Solid(color.to_string())
    }
}

/// One data series
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cutout: Option<String>,
}

impl Dataset {
    /// Unlabelled series
    pub fn new(data: impl Into<Vec<f64>>) -> Self {
        Self {
            label: None,
            data: data.into(),
            background_color: None,
            border_color: None,
            border_width: None,
            fill: None,
            tension: None,
            point_background_color: None,
            cutout: None,
        }
    }

    /// Series with a legend / tooltip label
    pub fn labeled(label: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::new(data)
        }
    }

    /// Builder method: fill colour
    pub fn background(mut self, paint: impl Into<Paint>) -> Self {
        self.background_color = Some(paint.into());
        self
    }

    /// Builder method: border colour
    pub fn border_color(mut self, color: impl Into<String>) -> Self {
        self.border_color = Some(color.into());
        self
    }

    /// Builder method: border width in pixels
    pub fn border_width(mut self, width: u32) -> Self {
        self.border_width = Some(width);
        self
    }

    /// Builder method: fill the area under a line
    pub fn fill(mut self, fill: bool) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Builder method: bezier curve tension of a line
    pub fn tension(mut self, tension: f64) -> Self {
        self.tension = Some(tension);
        self
    }

    /// Builder method: point marker colour
    pub fn point_color(mut self, color: impl Into<String>) -> Self {
        self.point_background_color = Some(color.into());
        self
    }

    /// Builder method: doughnut hole size, e.g. `"80%"`
    pub fn cutout(mut self, cutout: impl Into<String>) -> Self {
        self.cutout = Some(cutout.into());
        self
    }
}

/// Legend placement
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LegendPosition {
    Top,
    Bottom,
    Left,
    Right,
}

/// Value axis of a chart
#[derive(Debug, Clone, PartialEq)]
pub enum Axis {
    /// Cartesian `y` scale
    Y {
        begin_at_zero: bool,
        title: Option<String>,
    },
    /// Radial `r` scale of a radar chart
    Radial { begin_at_zero: bool },
}

impl Axis {
    fn to_json(&self) -> Value {
        match self {
            Axis::Y {
                begin_at_zero,
                title,
            } => {
                let mut y = json!({ "beginAtZero": begin_at_zero });
                if let Some(text) = title {
                    y["title"] = json!({ "display": true, "text": text });
                }
                json!({ "y": y })
            }
            Axis::Radial { begin_at_zero } => json!({ "r": { "beginAtZero": begin_at_zero } }),
        }
    }
}

/// Chart-level options
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    /// `None` hides the legend
    pub legend: Option<LegendPosition>,
    pub tooltips: bool,
    pub axis: Option<Axis>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            responsive: true,
            maintain_aspect_ratio: false,
            legend: None,
            tooltips: true,
            axis: None,
        }
    }
}

/// Everything needed to construct one chart widget
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub canvas_id: String,
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    pub options: ChartOptions,
}

impl ChartSpec {
    /// Start building a chart for a canvas
    pub fn builder(canvas_id: impl Into<String>, kind: ChartKind) -> ChartBuilder {
        ChartBuilder {
            spec: ChartSpec {
                canvas_id: canvas_id.into(),
                kind,
                labels: Vec::new(),
                datasets: Vec::new(),
                options: ChartOptions::default(),
            },
        }
    }

    /// Render the Chart.js configuration object
    pub fn to_config(&self) -> Value {
        let legend = match self.options.legend {
            Some(position) => json!({ "display": true, "position": position }),
            None => json!({ "display": false }),
        };

        let mut plugins = json!({ "legend": legend });
        if !self.options.tooltips {
            plugins["tooltip"] = json!({ "enabled": false });
        }

        let mut options = json!({
            "responsive": self.options.responsive,
            "maintainAspectRatio": self.options.maintain_aspect_ratio,
            "plugins": plugins,
        });
        if let Some(axis) = &self.options.axis {
            options["scales"] = axis.to_json();
        }

        let mut data = json!({ "datasets": self.datasets });
        if !self.labels.is_empty() {
            data["labels"] = json!(self.labels);
        }

        json!({
            "type": self.kind,
            "data": data,
            "options": options,
        })
    }
}

/// Builder for [`ChartSpec`]
#[derive(Debug, Clone)]
pub struct ChartBuilder {
    spec: ChartSpec,
}

impl ChartBuilder {
    /// Category labels, one per data point
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.spec.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn dataset(mut self, dataset: Dataset) -> Self {
        self.spec.datasets.push(dataset);
        self
    }

    pub fn legend(mut self, position: LegendPosition) -> Self {
        self.spec.options.legend = Some(position);
        self
    }

    pub fn tooltips(mut self, enabled: bool) -> Self {
        self.spec.options.tooltips = enabled;
        self
    }

    pub fn maintain_aspect_ratio(mut self, maintain: bool) -> Self {
        self.spec.options.maintain_aspect_ratio = maintain;
        self
    }

    pub fn y_axis(mut self, begin_at_zero: bool, title: Option<&str>) -> Self {
        self.spec.options.axis = Some(Axis::Y {
            begin_at_zero,
            title: title.map(str::to_string),
        });
        self
    }

    pub fn radial_axis(mut self, begin_at_zero: bool) -> Self {
        self.spec.options.axis = Some(Axis::Radial { begin_at_zero });
        self
    }

    /// Check the chart and hand it over
    pub fn build(self) -> Result<ChartSpec, ChartError> {
        let spec = self.spec;
        if spec.datasets.is_empty() {
            return Err(ChartError::Empty(spec.canvas_id));
        }

        // Label-less charts (gauges) carry free-form series
        if !spec.labels.is_empty() {
            if let Some(bad) = spec
                .datasets
                .iter()
                .find(|ds| ds.data.len() != spec.labels.len())
            {
                return Err(ChartError::LabelMismatch {
                    canvas_id: spec.canvas_id.clone(),
                    dataset: bad.label.clone().unwrap_or_default(),
                    labels: spec.labels.len(),
                    points: bad.data.len(),
                });
            }
        }

        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_serialization_skips_unset_fields() {
        let ds = Dataset::labeled("Paciente", vec![1.0, 2.0])
            .background("#5385B7")
            .border_width(1);
        let value = serde_json::to_value(&ds).unwrap();

        assert_eq!(value["label"], "Paciente");
        assert_eq!(value["backgroundColor"], "#5385B7");
        assert_eq!(value["borderWidth"], 1);
        assert!(value.get("tension").is_none());
        assert!(value.get("pointBackgroundColor").is_none());
    }

    #[test]
    fn test_per_point_paint() {
        let ds = Dataset::new(vec![1.0, 2.0])
            .background(Paint::PerPoint(vec!["#111".into(), "#222".into()]));
        let value = serde_json::to_value(&ds).unwrap();
        assert_eq!(value["backgroundColor"], json!(["#111", "#222"]));
    }

    #[test]
    fn test_config_shape() {
        let spec = ChartSpec::builder("c", ChartKind::Line)
            .labels(["a", "b"])
            .dataset(Dataset::new(vec![1.0, 2.0]))
            .y_axis(false, Some("Minutos"))
            .build()
            .unwrap();
        let config = spec.to_config();

        assert_eq!(config["type"], "line");
        assert_eq!(config["data"]["labels"], json!(["a", "b"]));
        assert_eq!(config["options"]["responsive"], true);
        assert_eq!(config["options"]["maintainAspectRatio"], false);
        assert_eq!(config["options"]["plugins"]["legend"]["display"], false);
        assert!(config["options"]["plugins"].get("tooltip").is_none());
        assert_eq!(config["options"]["scales"]["y"]["beginAtZero"], false);
        assert_eq!(config["options"]["scales"]["y"]["title"]["text"], "Minutos");
    }

    #[test]
    fn test_legend_and_radial_axis() {
        let spec = ChartSpec::builder("r", ChartKind::Radar)
            .labels(["a"])
            .dataset(Dataset::new(vec![1.0]))
            .legend(LegendPosition::Top)
            .radial_axis(true)
            .build()
            .unwrap();
        let config = spec.to_config();

        assert_eq!(config["options"]["plugins"]["legend"]["position"], "top");
        assert_eq!(config["options"]["scales"]["r"]["beginAtZero"], true);
    }

    #[test]
    fn test_build_rejects_mismatched_series() {
        let err = ChartSpec::builder("bad", ChartKind::Bar)
            .labels(["a", "b", "c"])
            .dataset(Dataset::labeled("short", vec![1.0]))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ChartError::LabelMismatch {
                canvas_id: "bad".to_string(),
                dataset: "short".to_string(),
                labels: 3,
                points: 1,
            }
        );

        let err = ChartSpec::builder("empty", ChartKind::Bar).build().unwrap_err();
        assert_eq!(err, ChartError::Empty("empty".to_string()));
    }
}
