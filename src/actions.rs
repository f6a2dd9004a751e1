//! Export, report and date-range actions
//!
//! These are placeholders: each one only produces a [`Notification`]. No
//! file is written, nothing is sent anywhere and chart data stays as it is.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Severity of a notification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Warning,
}

/// A blocking message for the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Warning,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Placeholder actions wired to the header and filter buttons
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    ExportPdf,
    ExportExcel,
    GenerateReport,
}

impl Action {
    pub fn all() -> &'static [Action] {
        &[Action::ExportPdf, Action::ExportExcel, Action::GenerateReport]
    }

    pub fn notification(self) -> Notification {
        Notification::info(match self {
            Action::ExportPdf => "Exportando informe en formato PDF...",
            Action::ExportExcel => "Exportando informe en formato Excel...",
            Action::GenerateReport => "Generando informe con los filtros seleccionados...",
        })
    }
}

/// Shown when the individual report is requested with an empty search box
pub const PATIENT_REQUIRED_MESSAGE: &str =
    "Por favor, seleccione un paciente antes de generar el informe individual.";

/// Notification for the individual report button, given the search box text
pub fn individual_report_notification(patient: &str) -> Notification {
    let patient = patient.trim();
    if patient.is_empty() {
        Notification::warning(PATIENT_REQUIRED_MESSAGE)
    } else {
        Notification::info(format!("Generando informe individual para {}...", patient))
    }
}

/// The two chart date pickers, kept as typed
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Both values as `YYYY-MM-DD` dates, if they parse
    pub fn parsed(&self) -> Option<(NaiveDate, NaiveDate)> {
        let start = NaiveDate::parse_from_str(self.start.trim(), "%Y-%m-%d").ok()?;
        let end = NaiveDate::parse_from_str(self.end.trim(), "%Y-%m-%d").ok()?;
        Some((start, end))
    }

    /// Whether the range parses and does not run backwards
    pub fn is_well_formed(&self) -> bool {
        self.parsed().map(|(start, end)| start <= end).unwrap_or(false)
    }

    /// Acknowledge a chart update for this period, values verbatim
    pub fn update_notification(&self) -> Notification {
        if !self.is_well_formed() {
            tracing::warn!(start = %self.start, end = %self.end, "chart date range is not a valid period");
        }
        Notification::info(format!(
            "Actualizando gráficos para el período: {} - {}",
            self.start, self.end
        ))
    }
}

/// Kind of group report, chosen in `tipoReporteGrupal`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    /// Whole department
    #[default]
    General,
    /// Broken down by care area
    Areas,
}

impl ReportType {
    /// Map a selector value. Anything other than `areas` is a general report.
    pub fn from_value(value: &str) -> Self {
        if value.trim() == "areas" {
            ReportType::Areas
        } else {
            ReportType::General
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            ReportType::General => "general",
            ReportType::Areas => "areas",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportType::General => "General",
            ReportType::Areas => "Por áreas",
        }
    }

    /// The area selector is only relevant to per-area reports
    pub fn shows_area_selector(self) -> bool {
        self == ReportType::Areas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_messages() {
        assert_eq!(
            Action::ExportPdf.notification().message,
            "Exportando informe en formato PDF..."
        );
        assert_eq!(
            Action::ExportExcel.notification().message,
            "Exportando informe en formato Excel..."
        );
        assert_eq!(
            Action::GenerateReport.notification().message,
            "Generando informe con los filtros seleccionados..."
        );
    }

    #[test]
    fn test_individual_report_needs_patient() {
        for blank in ["", "   "] {
            let notification = individual_report_notification(blank);
            assert_eq!(notification.kind, NotificationKind::Warning);
            assert_eq!(notification.message, PATIENT_REQUIRED_MESSAGE);
        }

        let notification = individual_report_notification(" Juan Pérez - 1234567890 ");
        assert_eq!(notification.kind, NotificationKind::Info);
        assert_eq!(
            notification.message,
            "Generando informe individual para Juan Pérez - 1234567890..."
        );
    }

    #[test]
    fn test_date_range_is_verbatim() {
        let range = DateRange::new("2024-12-01", "2024-12-15");
        assert_eq!(
            range.update_notification().message,
            "Actualizando gráficos para el período: 2024-12-01 - 2024-12-15"
        );
        assert!(range.is_well_formed());

        // Garbage still goes through untouched
        let range = DateRange::new("ayer", "");
        assert_eq!(
            range.update_notification().message,
            "Actualizando gráficos para el período: ayer - "
        );
        assert!(!range.is_well_formed());
    }

    #[test]
    fn test_reversed_range() {
        let range = DateRange::new("2024-12-15", "2024-12-01");
        assert!(range.parsed().is_some());
        assert!(!range.is_well_formed());
    }

    #[test]
    fn test_report_type_controls_area_selector() {
        assert!(ReportType::from_value("areas").shows_area_selector());
        assert!(!ReportType::from_value("general").shows_area_selector());
        assert!(!ReportType::from_value("").shows_area_selector());
    }
}
