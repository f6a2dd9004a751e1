//! The dashboard's chart widgets, built once from the literal datasets

use super::error::ChartError;
use super::types::{ChartKind, ChartSpec, Dataset, LegendPosition, Paint};
use crate::data::{
    Stage, AREA_AVERAGE_MINUTES, GAUGE_TRACK_COLOR, PATIENT_MINUTES, STAGE_AVERAGE_MINUTES,
    TIMELINE_LABELS, TIMELINE_MINUTES,
};
use crate::error::{DashboardError, DashboardResult};
use crate::view::ids;

const MINUTES_AXIS: &str = "Minutos";
const AVERAGE_TIME_LABEL: &str = "Tiempo promedio (minutos)";

/// A ring chart showing one percentage against its complement
#[derive(Debug, Clone, PartialEq)]
pub struct Gauge {
    canvas_id: String,
    value: f64,
    color: String,
}

impl Gauge {
    /// Gauge for a percentage in `0..=100`
    pub fn new(
        canvas_id: impl Into<String>,
        value: f64,
        color: impl Into<String>,
    ) -> Result<Self, ChartError> {
        let canvas_id = canvas_id.into();
        if !(0.0..=100.0).contains(&value) {
            return Err(ChartError::GaugeOutOfRange { canvas_id, value });
        }
        Ok(Self {
            canvas_id,
            value,
            color: color.into(),
        })
    }

    pub fn canvas_id(&self) -> &str {
        &self.canvas_id
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Text overlaid in the ring, e.g. `92%`
    pub fn label(&self) -> String {
        format!("{:.0}%", self.value)
    }

    pub fn to_spec(&self) -> Result<ChartSpec, ChartError> {
        ChartSpec::builder(self.canvas_id.clone(), ChartKind::Doughnut)
            .dataset(
                Dataset::new(vec![self.value, 100.0 - self.value])
                    .background(Paint::PerPoint(vec![
                        self.color.clone(),
                        GAUGE_TRACK_COLOR.to_string(),
                    ]))
                    .border_width(0)
                    .cutout("80%"),
            )
            .maintain_aspect_ratio(true)
            .tooltips(false)
            .build()
    }
}

/// Every chart on the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct ChartCatalog {
    charts: Vec<ChartSpec>,
    gauges: Vec<(Stage, Gauge)>,
}

impl ChartCatalog {
    /// The dashboard's charts: timeline, stage averages, patient comparison,
    /// all-areas radar and one SLA gauge per stage.
    pub fn standard() -> Result<Self, ChartError> {
        let stage_labels = Stage::all().iter().map(|s| s.label());

        let timeline = ChartSpec::builder(ids::TIMELINE_CHART, ChartKind::Line)
            .labels(TIMELINE_LABELS)
            .dataset(
                Dataset::labeled(AVERAGE_TIME_LABEL, TIMELINE_MINUTES)
                    .border_color("#5385B7")
                    .background("rgba(83, 133, 183, 0.1)")
                    .border_width(2)
                    .fill(true)
                    .tension(0.4),
            )
            .y_axis(false, Some(MINUTES_AXIS))
            .build()?;

        let stage_colors = Stage::all().iter().map(|s| s.color().to_string()).collect();
        let bar = ChartSpec::builder(ids::BAR_CHART, ChartKind::Bar)
            .labels(stage_labels.clone())
            .dataset(
                Dataset::labeled(AVERAGE_TIME_LABEL, STAGE_AVERAGE_MINUTES)
                    .background(Paint::PerPoint(stage_colors))
                    .border_width(1),
            )
            .y_axis(true, Some(MINUTES_AXIS))
            .build()?;

        let comparison = ChartSpec::builder(ids::COMPARISON_CHART, ChartKind::Bar)
            .labels(stage_labels.clone())
            .dataset(
                Dataset::labeled("Paciente", PATIENT_MINUTES)
                    .background("#5385B7")
                    .border_width(1),
            )
            .dataset(
                Dataset::labeled("Promedio del área", AREA_AVERAGE_MINUTES)
                    .background("#E6B800")
                    .border_width(1),
            )
            .legend(LegendPosition::Top)
            .y_axis(true, Some(MINUTES_AXIS))
            .build()?;

        let all_areas = ChartSpec::builder(ids::ALL_AREAS_CHART, ChartKind::Radar)
            .labels(stage_labels)
            .dataset(
                Dataset::labeled("Paciente", PATIENT_MINUTES)
                    .background("rgba(83, 133, 183, 0.2)")
                    .border_color("#5385B7")
                    .border_width(2)
                    .point_color("#5385B7"),
            )
            .dataset(
                Dataset::labeled("Promedio general", AREA_AVERAGE_MINUTES)
                    .background("rgba(230, 184, 0, 0.2)")
                    .border_color("#E6B800")
                    .border_width(2)
                    .point_color("#E6B800"),
            )
            .legend(LegendPosition::Top)
            .radial_axis(true)
            .build()?;

        let mut charts = vec![timeline, bar, comparison, all_areas];
        let mut gauges = Vec::with_capacity(Stage::all().len());
        for stage in Stage::all() {
            let gauge = Gauge::new(ids::gauge_id(*stage), stage.sla_compliance(), stage.color())?;
            charts.push(gauge.to_spec()?);
            gauges.push((*stage, gauge));
        }

        tracing::debug!(charts = charts.len(), "chart catalog built");

        Ok(Self { charts, gauges })
    }

    pub fn charts(&self) -> &[ChartSpec] {
        &self.charts
    }

    pub fn gauges(&self) -> impl Iterator<Item = (Stage, &Gauge)> {
        self.gauges.iter().map(|(stage, gauge)| (*stage, gauge))
    }

    pub fn gauge(&self, stage: Stage) -> Option<&Gauge> {
        self.gauges
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|(_, gauge)| gauge)
    }

    /// Chart bound to a canvas id
    pub fn get(&self, canvas_id: &str) -> DashboardResult<&ChartSpec> {
        self.charts
            .iter()
            .find(|c| c.canvas_id == canvas_id)
            .ok_or_else(|| DashboardError::UnknownElement(canvas_id.to_string()))
    }
}
