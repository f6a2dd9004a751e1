//! Element identifiers and the visibility binding table
//!
//! Every DOM id the dashboard relies on lives here; nothing else in the crate
//! spells one out.

use super::ViewMode;
use crate::data::Stage;

pub const TAB_INDIVIDUAL: &str = "tabIndividual";
pub const TAB_GROUP: &str = "tabGrupal";

pub const FILTER_INDIVIDUAL: &str = "filtroIndividual";
pub const FILTER_GROUP: &str = "filtroGrupal";

pub const CHARTS_INDIVIDUAL: &str = "graficos-individuales";
pub const CHARTS_GROUP: &str = "graficos-grupales";
pub const SLA_COMPLIANCE: &str = "cumplimiento-sla";

pub const TABLE_INDIVIDUAL: &str = "tabla-paciente-individual";
pub const TABLE_GROUP: &str = "tabla-pacientes-grupal";

pub const REPORT_BUTTON_INDIVIDUAL: &str = "generarInformeIndividual";
pub const REPORT_BUTTON_GROUP: &str = "generarInformeGrupal";

pub const INDIVIDUAL_METRICS_PREFIX: &str = "metricas-individuales-";
pub const GROUP_METRICS_PREFIX: &str = "metricas-grupales-";

pub const SEARCH_INPUT: &str = "searchPatient";
pub const SEARCH_RESULTS: &str = "patientResults";

pub const REPORT_TYPE: &str = "tipoReporteGrupal";
pub const AREA_SELECTOR: &str = "areaSelector";

pub const EXPORT_PDF: &str = "exportPdf";
pub const EXPORT_EXCEL: &str = "exportExcel";
pub const GENERATE_REPORT: &str = "generarInforme";

pub const DATE_START: &str = "chartDateStart";
pub const DATE_END: &str = "chartDateEnd";
pub const UPDATE_CHARTS: &str = "actualizarGraficos";

pub const TIMELINE_CHART: &str = "timelineChart";
pub const BAR_CHART: &str = "barChart";
pub const COMPARISON_CHART: &str = "comparisonChart";
pub const ALL_AREAS_CHART: &str = "allAreasChart";

/// Canvas id of a stage's SLA gauge
pub fn gauge_id(stage: Stage) -> &'static str {
    match stage {
        Stage::Triage => "gaugeTriaje",
        Stage::AdmissionConsult => "gaugeCI",
        Stage::Labs => "gaugeLab",
        Stage::Imaging => "gaugeIX",
        Stage::Interconsult => "gaugeIC",
        Stage::Reassessment => "gaugeRV",
    }
}

/// Class toggled to hide an element
pub const HIDDEN_CLASS: &str = "hidden";
/// Class marking the selected tab
pub const ACTIVE_CLASS: &str = "active";

/// Suffix of the total-time metric card ids
pub const TOTAL_CARD_KEY: &str = "total";

/// How a binding picks its elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// Exactly one element
    Id(&'static str),
    /// Every element whose id starts with the prefix
    Prefix(&'static str),
}

impl Selector {
    /// Check whether an element id is selected
    pub fn matches(&self, id: &str) -> bool {
        match self {
            Selector::Id(exact) => id == *exact,
            Selector::Prefix(prefix) => id.starts_with(prefix) && id.len() > prefix.len(),
        }
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::Id(id) => write!(f, "#{}", id),
            Selector::Prefix(prefix) => write!(f, "[id^=\"{}\"]", prefix),
        }
    }
}

/// An element group shown only while its mode is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub selector: Selector,
    pub mode: ViewMode,
}

const fn bind(selector: Selector, mode: ViewMode) -> Binding {
    Binding { selector, mode }
}

/// Visibility rules for the tab toggle: an element is visible iff its mode is
/// the selected one.
pub const BINDINGS: &[Binding] = &[
    bind(Selector::Id(FILTER_INDIVIDUAL), ViewMode::Individual),
    bind(Selector::Id(FILTER_GROUP), ViewMode::Group),
    bind(Selector::Prefix(INDIVIDUAL_METRICS_PREFIX), ViewMode::Individual),
    bind(Selector::Prefix(GROUP_METRICS_PREFIX), ViewMode::Group),
    bind(Selector::Id(CHARTS_INDIVIDUAL), ViewMode::Individual),
    bind(Selector::Id(CHARTS_GROUP), ViewMode::Group),
    bind(Selector::Id(TABLE_INDIVIDUAL), ViewMode::Individual),
    bind(Selector::Id(TABLE_GROUP), ViewMode::Group),
    bind(Selector::Id(REPORT_BUTTON_INDIVIDUAL), ViewMode::Individual),
    bind(Selector::Id(REPORT_BUTTON_GROUP), ViewMode::Group),
];

/// Look up the binding governing an element, if any
pub fn binding_for(id: &str) -> Option<&'static Binding> {
    BINDINGS.iter().find(|b| b.selector.matches(id))
}

/// Id of a metric card for the given mode, e.g. `metricas-grupales-lab`
pub fn metric_card_id(mode: ViewMode, key: &str) -> String {
    let prefix = match mode {
        ViewMode::Individual => INDIVIDUAL_METRICS_PREFIX,
        ViewMode::Group => GROUP_METRICS_PREFIX,
    };
    format!("{}{}", prefix, key)
}

/// Id of a stage's metric card for the given mode
pub fn stage_card_id(mode: ViewMode, stage: Stage) -> String {
    metric_card_id(mode, stage.key())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_matching() {
        let id = Selector::Id(CHARTS_GROUP);
        assert!(id.matches("graficos-grupales"));
        assert!(!id.matches("graficos-grupales-extra"));

        let prefix = Selector::Prefix(GROUP_METRICS_PREFIX);
        assert!(prefix.matches("metricas-grupales-lab"));
        assert!(!prefix.matches("metricas-grupales-"));
        assert!(!prefix.matches("metricas-individuales-lab"));
    }

    #[test]
    fn test_every_mode_binds_five_groups() {
        for mode in ViewMode::all() {
            let bound: Vec<_> = BINDINGS.iter().filter(|b| b.mode == *mode).collect();
            // filter, metric cards, charts, table, report button
            assert_eq!(bound.len(), 5);
        }
    }

    #[test]
    fn test_card_ids() {
        assert_eq!(
            stage_card_id(ViewMode::Individual, Stage::Triage),
            "metricas-individuales-triaje"
        );
        assert_eq!(
            metric_card_id(ViewMode::Group, TOTAL_CARD_KEY),
            "metricas-grupales-total"
        );
        assert_eq!(
            binding_for("metricas-grupales-rv").map(|b| b.mode),
            Some(ViewMode::Group)
        );
        assert!(binding_for(SEARCH_INPUT).is_none());
    }
}
