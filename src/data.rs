//! Literal dashboard data
//!
//! Every figure shown on the dashboard is a literal defined here. Nothing in
//! the crate recomputes them; the date-range control only acknowledges a new
//! period.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::DashboardError;

/// Hospital process stage a patient passes through
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Triage,
    AdmissionConsult,
    Labs,
    Imaging,
    Interconsult,
    Reassessment,
}

impl Stage {
    /// All stages in process order
    pub fn all() -> &'static [Stage] {
        &[
            Stage::Triage,
            Stage::AdmissionConsult,
            Stage::Labs,
            Stage::Imaging,
            Stage::Interconsult,
            Stage::Reassessment,
        ]
    }

    /// Position in process order, used to index the literal series
    pub fn index(self) -> usize {
        match self {
            Stage::Triage => 0,
            Stage::AdmissionConsult => 1,
            Stage::Labs => 2,
            Stage::Imaging => 3,
            Stage::Interconsult => 4,
            Stage::Reassessment => 5,
        }
    }

    /// Short key used in element ids
    pub fn key(self) -> &'static str {
        match self {
            Stage::Triage => "triaje",
            Stage::AdmissionConsult => "ci",
            Stage::Labs => "lab",
            Stage::Imaging => "ix",
            Stage::Interconsult => "ic",
            Stage::Reassessment => "rv",
        }
    }

    /// Category label on charts and cards
    pub fn label(self) -> &'static str {
        match self {
            Stage::Triage => "Triaje",
            Stage::AdmissionConsult => "Consulta de Ingreso",
            Stage::Labs => "Laboratorios",
            Stage::Imaging => "Imágenes",
            Stage::Interconsult => "Interconsulta",
            Stage::Reassessment => "Re-valoración",
        }
    }

    /// Series colour shared by the bar chart and the SLA gauge
    pub fn color(self) -> &'static str {
        match self {
            Stage::Triage => "#28a745",
            Stage::AdmissionConsult => "#5385B7",
            Stage::Labs => "#E6B800",
            Stage::Imaging => "#4A7296",
            Stage::Interconsult => "#659BD1",
            Stage::Reassessment => "#B75353",
        }
    }

    /// What the stage's time measures
    pub fn description(self) -> &'static str {
        match self {
            Stage::Triage => "Tiempo desde \"No realizado\" hasta clasificación",
            Stage::AdmissionConsult => "Tiempo desde \"No realizado\" hasta \"Realizado\"",
            Stage::Labs => "Tiempo desde solicitud hasta resultados",
            Stage::Imaging => "Tiempo desde solicitud hasta lectura",
            Stage::Interconsult => "Tiempo desde solicitud hasta respuesta",
            Stage::Reassessment => "Tiempo desde resultados hasta re-valoración",
        }
    }

    /// Literal SLA compliance percentage
    pub fn sla_compliance(self) -> f64 {
        SLA_COMPLIANCE[self.index()]
    }

    /// Traffic-light band for the stage card
    pub fn traffic_light(self) -> TrafficLight {
        TrafficLight::for_compliance(self.sla_compliance())
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Stage card colouring by SLA compliance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficLight {
    Green,
    Yellow,
    Red,
}

impl TrafficLight {
    pub fn for_compliance(percent: f64) -> Self {
        if percent >= 80.0 {
            TrafficLight::Green
        } else if percent >= 70.0 {
            TrafficLight::Yellow
        } else {
            TrafficLight::Red
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            TrafficLight::Green => "semaforo-verde",
            TrafficLight::Yellow => "semaforo-amarillo",
            TrafficLight::Red => "semaforo-rojo",
        }
    }
}

/// Care area of the emergency department
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Area {
    /// Every area (selector default)
    #[default]
    All,
    Antigua,
    Amarilla,
    Pediatria,
    Pasillos,
    Clini,
    SalaEspera,
}

impl Area {
    /// Selector options in display order
    pub fn all() -> &'static [Area] {
        &[
            Area::All,
            Area::Antigua,
            Area::Amarilla,
            Area::Pediatria,
            Area::Pasillos,
            Area::Clini,
            Area::SalaEspera,
        ]
    }

    /// `<option value>` of the area selector
    pub fn value(self) -> &'static str {
        match self {
            Area::All => "todas",
            Area::Antigua => "Antigua",
            Area::Amarilla => "Amarilla",
            Area::Pediatria => "Pediatría",
            Area::Pasillos => "Pasillos",
            Area::Clini => "Clini",
            Area::SalaEspera => "Sala de espera",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Area::All => "Todas las áreas",
            other => other.value(),
        }
    }
}

impl FromStr for Area {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Area::all()
            .iter()
            .copied()
            .find(|area| area.value().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashboardError::UnknownElement(format!("area option {:?}", s)))
    }
}

/// Where a patient's visit ended up
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DischargeStatus {
    Discharged,
    Admitted,
    InCare,
}

impl DischargeStatus {
    pub fn label(self) -> &'static str {
        match self {
            DischargeStatus::Discharged => "Alta",
            DischargeStatus::Admitted => "Hospitalización",
            DischargeStatus::InCare => "En atención",
        }
    }

    /// Badge colouring in the patient tables
    pub fn badge_class(self) -> &'static str {
        match self {
            DischargeStatus::Discharged => "bg-green-100 text-green-800",
            DischargeStatus::Admitted => "bg-blue-100 text-blue-800",
            DischargeStatus::InCare => "bg-yellow-100 text-yellow-800",
        }
    }
}

/// Progress of one stage for one patient
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    Completed,
    Open,
    NotDone,
}

impl StageStatus {
    pub fn label(self) -> &'static str {
        match self {
            StageStatus::Completed => "Completado",
            StageStatus::Open => "Abierta",
            StageStatus::NotDone => "No realizada",
        }
    }

    /// Font Awesome icon and colour class
    pub fn icon_class(self) -> &'static str {
        match self {
            StageStatus::Completed => "fas fa-check-circle text-[#28a745]",
            StageStatus::Open => "fas fa-exclamation-triangle text-[#E6B800]",
            StageStatus::NotDone => "fas fa-times-circle text-[#B75353]",
        }
    }
}

/// A patient on the literal roster
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Patient {
    pub id: u32,
    pub name: &'static str,
    pub document: &'static str,
    pub area: Area,
    /// Admission time, `YYYY-MM-DD HH:MM:SS`
    pub admitted_at: &'static str,
    pub total_minutes: u32,
    pub status: DischargeStatus,
    /// Minutes per stage, `None` while pending
    pub stage_minutes: [Option<u32>; 6],
    pub stage_status: [StageStatus; 6],
}

/// One stage line of an expanded patient row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageDetail {
    pub stage: Stage,
    pub minutes: Option<u32>,
    /// Minutes above (+) or below (-) the area average
    pub difference: Option<i64>,
    pub status: StageStatus,
}

impl StageDetail {
    /// `"(-5 min)"` / `"(+8 min)"`, empty while pending
    pub fn difference_label(&self) -> String {
        match self.difference {
            Some(diff) if diff > 0 => format!("(+{} min)", diff),
            Some(diff) => format!("({} min)", diff),
            None => String::new(),
        }
    }

    /// Faster than the area average
    pub fn is_favorable(&self) -> bool {
        self.difference.map(|d| d <= 0).unwrap_or(false)
    }
}

impl Patient {
    /// Text of this patient's entry in the search results
    pub fn result_label(&self) -> String {
        format!("{} - {} - {}", self.name, self.document, self.area.label())
    }

    /// Admission time parsed, if well-formed
    pub fn admitted_at(&self) -> Option<chrono::NaiveDateTime> {
        chrono::NaiveDateTime::parse_from_str(self.admitted_at, "%Y-%m-%d %H:%M:%S").ok()
    }

    /// Per-stage lines for the expanded row
    pub fn stage_details(&self) -> Vec<StageDetail> {
        Stage::all()
            .iter()
            .map(|stage| {
                let idx = stage.index();
                let minutes = self.stage_minutes[idx];
                StageDetail {
                    stage: *stage,
                    minutes,
                    difference: minutes.map(|m| m as i64 - AREA_AVERAGE_MINUTES[idx] as i64),
                    status: self.stage_status[idx],
                }
            })
            .collect()
    }
}

/// Mean / median / P90 of a stage across all patients
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupStats {
    pub mean: f64,
    pub median: f64,
    pub p90: f64,
}

/// Content of one metric card, both variants
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    /// `None` for the total-time card
    pub stage: Option<Stage>,
    pub title: &'static str,
    /// Individual variant
    pub patient_minutes: Option<f64>,
    pub area_average: f64,
    /// Group variant
    pub group: GroupStats,
}

impl MetricSummary {
    /// Element id key (`total`, `triaje`, ...)
    pub fn key(&self) -> &'static str {
        self.stage.map(Stage::key).unwrap_or(crate::view::ids::TOTAL_CARD_KEY)
    }

    /// Comparison line of the individual variant
    pub fn comparison_label(&self) -> String {
        match self.patient_minutes {
            Some(minutes) => {
                let diff = minutes - self.area_average;
                if diff <= 0.0 {
                    format!("{:.0} min por debajo del promedio del área", diff.abs())
                } else {
                    format!("{:.0} min por encima del promedio del área", diff)
                }
            }
            None => "Pendiente".to_string(),
        }
    }
}

pub const TIMELINE_LABELS: [&str; 15] = [
    "1 Dic", "2 Dic", "3 Dic", "4 Dic", "5 Dic", "6 Dic", "7 Dic", "8 Dic", "9 Dic", "10 Dic",
    "11 Dic", "12 Dic", "13 Dic", "14 Dic", "15 Dic",
];

/// Average total attention time per day
pub const TIMELINE_MINUTES: [f64; 15] = [
    240.0, 255.0, 235.0, 270.0, 220.0, 210.0, 230.0, 245.0, 260.0, 250.0, 240.0, 235.0, 225.0,
    240.0, 255.0,
];

/// Average minutes per stage across all patients (bar chart)
pub const STAGE_AVERAGE_MINUTES: [f64; 6] = [17.0, 20.0, 65.0, 70.0, 50.0, 40.0];

/// The selected patient's minutes per stage (comparison charts)
pub const PATIENT_MINUTES: [f64; 6] = [12.0, 28.0, 55.0, 53.0, 22.0, 0.0];

/// Area average minutes per stage (comparison charts)
pub const AREA_AVERAGE_MINUTES: [f64; 6] = [17.0, 20.0, 65.0, 70.0, 15.0, 40.0];

/// SLA compliance percentage per stage (gauges)
pub const SLA_COMPLIANCE: [f64; 6] = [92.0, 85.0, 78.0, 82.0, 65.0, 70.0];

/// Colour of the unfilled part of a gauge
pub const GAUGE_TRACK_COLOR: &str = "#E8F0F7";

const STAGE_MEDIANS: [f64; 6] = [15.0, 18.0, 60.0, 66.0, 45.0, 38.0];
const STAGE_P90: [f64; 6] = [28.0, 34.0, 98.0, 105.0, 80.0, 62.0];

const TOTAL_GROUP: GroupStats = GroupStats {
    mean: 240.0,
    median: 238.0,
    p90: 270.0,
};

/// Area average of the total time
pub const AREA_TOTAL_MINUTES: f64 = 240.0;

/// Id of the patient shown in the individual view
pub const SELECTED_PATIENT_ID: u32 = 1;

/// Metric cards in display order: total first, then one per stage
pub fn metric_summaries() -> Vec<MetricSummary> {
    let selected = ROSTER.iter().find(|p| p.id == SELECTED_PATIENT_ID);

    let mut summaries = vec![MetricSummary {
        stage: None,
        title: "Tiempo Total de Atención",
        patient_minutes: selected.map(|p| f64::from(p.total_minutes)),
        area_average: AREA_TOTAL_MINUTES,
        group: TOTAL_GROUP,
    }];

    summaries.extend(Stage::all().iter().map(|stage| {
        let idx = stage.index();
        MetricSummary {
            stage: Some(*stage),
            title: stage.label(),
            patient_minutes: selected.and_then(|p| p.stage_minutes[idx]).map(f64::from),
            area_average: AREA_AVERAGE_MINUTES[idx],
            group: GroupStats {
                mean: STAGE_AVERAGE_MINUTES[idx],
                median: STAGE_MEDIANS[idx],
                p90: STAGE_P90[idx],
            },
        }
    }));

    summaries
}

use DischargeStatus::*;
use StageStatus::*;

/// Literal patient roster
pub const ROSTER: &[Patient] = &[
    Patient {
        id: 1,
        name: "Jose Mauricio Unda Ortiz",
        document: "1114565784",
        area: Area::Amarilla,
        admitted_at: "2025-05-02 09:39:27",
        total_minutes: 56,
        status: Discharged,
        stage_minutes: [Some(12), Some(28), Some(55), Some(53), Some(22), None],
        stage_status: [Completed, Completed, Completed, Completed, Open, NotDone],
    },
    Patient {
        id: 2,
        name: "Maria Fernanda Rios Cardona",
        document: "1006789123",
        area: Area::Antigua,
        admitted_at: "2025-05-02 10:12:05",
        total_minutes: 134,
        status: Admitted,
        stage_minutes: [Some(9), Some(25), Some(70), None, Some(18), Some(35)],
        stage_status: [Completed, Completed, Completed, NotDone, Completed, Completed],
    },
    Patient {
        id: 3,
        name: "Carlos Andres Gomez Lopez",
        document: "94512876",
        area: Area::Pasillos,
        admitted_at: "2025-05-02 11:47:52",
        total_minutes: 212,
        status: InCare,
        stage_minutes: [Some(21), Some(19), Some(82), Some(74), None, None],
        stage_status: [Completed, Completed, Completed, Completed, Open, NotDone],
    },
    Patient {
        id: 4,
        name: "Luisa Valentina Perez Mora",
        document: "1112233445",
        area: Area::Pediatria,
        admitted_at: "2025-05-02 12:05:10",
        total_minutes: 88,
        status: Discharged,
        stage_minutes: [Some(14), Some(16), Some(48), None, None, Some(30)],
        stage_status: [Completed, Completed, Completed, NotDone, NotDone, Completed],
    },
    Patient {
        id: 5,
        name: "Andres Felipe Castano Ruiz",
        document: "16789432",
        area: Area::Clini,
        admitted_at: "2025-05-02 13:30:44",
        total_minutes: 167,
        status: Admitted,
        stage_minutes: [Some(18), Some(23), Some(61), Some(66), Some(40), None],
        stage_status: [Completed, Completed, Completed, Completed, Completed, Open],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order_matches_series() {
        for (i, stage) in Stage::all().iter().enumerate() {
            assert_eq!(stage.index(), i);
        }
        assert_eq!(Stage::Labs.label(), "Laboratorios");
    }

    #[test]
    fn test_detail_differences_match_area_average() {
        let patient = &ROSTER[0];
        let labels: Vec<_> = patient
            .stage_details()
            .iter()
            .map(|d| d.difference_label())
            .collect();
        assert_eq!(
            labels,
            vec!["(-5 min)", "(+8 min)", "(-10 min)", "(-17 min)", "(+7 min)", ""]
        );
    }

    #[test]
    fn test_result_label() {
        assert_eq!(
            ROSTER[0].result_label(),
            "Jose Mauricio Unda Ortiz - 1114565784 - Amarilla"
        );
    }

    #[test]
    fn test_admission_times_parse() {
        for patient in ROSTER {
            assert!(patient.admitted_at().is_some(), "{}", patient.name);
        }
    }

    #[test]
    fn test_area_parse() {
        assert_eq!("todas".parse::<Area>().unwrap(), Area::All);
        assert_eq!("Sala de espera".parse::<Area>().unwrap(), Area::SalaEspera);
        assert!("Roja".parse::<Area>().is_err());
    }

    #[test]
    fn test_metric_summaries() {
        let summaries = metric_summaries();
        assert_eq!(summaries.len(), 7);
        assert_eq!(summaries[0].key(), "total");
        assert_eq!(summaries[0].patient_minutes, Some(f64::from(ROSTER[0].total_minutes)));
        assert_eq!(summaries[1].patient_minutes, Some(12.0));
        assert_eq!(summaries[6].patient_minutes, None);
        assert_eq!(summaries[6].comparison_label(), "Pendiente");
        assert_eq!(
            summaries[1].comparison_label(),
            "5 min por debajo del promedio del área"
        );
    }

    #[test]
    fn test_area_labels() {
        assert_eq!(Area::All.label(), "Todas las áreas");
        assert_eq!(Area::Pediatria.label(), Area::Pediatria.value());
    }

    #[test]
    fn test_traffic_light() {
        assert_eq!(Stage::Triage.traffic_light(), TrafficLight::Green);
        assert_eq!(Stage::Labs.traffic_light(), TrafficLight::Yellow);
        assert_eq!(Stage::Interconsult.traffic_light(), TrafficLight::Red);
    }
}
