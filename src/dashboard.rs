//! Dashboard View-Model
//!
//! [`Dashboard`] owns every piece of dashboard state. Frontends feed it
//! [`Event`]s through [`Dashboard::dispatch`], render from its accessors and
//! carry out the [`Effect`]s it returns (notifications and the search-hide
//! timer). A handler that fails returns an error before touching any state.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

use crate::actions::{
    individual_report_notification, Action, DateRange, Notification, NotificationKind, ReportType,
};
use crate::charts::ChartCatalog;
use crate::data::{Area, Patient, SELECTED_PATIENT_ID};
use crate::error::{DashboardError, DashboardResult};
use crate::search::{HideTicket, PatientRoster, SearchBox, DEFAULT_MIN_QUERY_CHARS};
use crate::table::{PatientTable, TableKind};
use crate::view::{ids, ViewMode, ViewState};

/// Tunables of the dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardSettings {
    /// Tab selected at load
    #[serde(default)]
    pub default_mode: ViewMode,

    /// Delay between search blur and hiding the results
    #[serde(default = "default_hide_delay_ms")]
    pub search_hide_delay_ms: u64,

    /// Minimum query length before the roster is filtered
    #[serde(default = "default_min_chars")]
    pub search_min_chars: usize,

    /// Initial value of the chart start date picker
    #[serde(default = "default_date_start")]
    pub date_start: String,

    /// Initial value of the chart end date picker
    #[serde(default = "default_date_end")]
    pub date_end: String,
}

fn default_hide_delay_ms() -> u64 {
    200
}

fn default_min_chars() -> usize {
    DEFAULT_MIN_QUERY_CHARS
}

fn default_date_start() -> String {
    "2024-12-01".to_string()
}

fn default_date_end() -> String {
    "2024-12-15".to_string()
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            default_mode: ViewMode::default(),
            search_hide_delay_ms: default_hide_delay_ms(),
            search_min_chars: default_min_chars(),
            date_start: default_date_start(),
            date_end: default_date_end(),
        }
    }
}

/// User input the dashboard reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SelectTab(ViewMode),
    SearchFocus,
    SearchBlur,
    SearchInput(String),
    SearchHideElapsed(HideTicket),
    /// Index into [`Dashboard::results`]
    SelectResult(usize),
    ToggleRow { table: TableKind, patient_id: u32 },
    ExportPdf,
    ExportExcel,
    GenerateReport,
    /// Individual report button; needs a patient in the search box
    GenerateIndividualReport,
    ReportTypeChanged(String),
    AreaChanged(String),
    DateStartChanged(String),
    DateEndChanged(String),
    UpdateCharts,
}

impl Event {
    /// Element the event originates from
    pub fn source_element(&self) -> Option<&'static str> {
        match self {
            Event::SelectTab(mode) => Some(mode.tab_id()),
            Event::SearchFocus | Event::SearchBlur | Event::SearchInput(_) => Some(ids::SEARCH_INPUT),
            Event::SelectResult(_) => Some(ids::SEARCH_RESULTS),
            Event::ToggleRow { table, .. } => Some(match table {
                TableKind::Individual => ids::TABLE_INDIVIDUAL,
                TableKind::Group => ids::TABLE_GROUP,
            }),
            Event::ExportPdf => Some(ids::EXPORT_PDF),
            Event::ExportExcel => Some(ids::EXPORT_EXCEL),
            Event::GenerateReport => Some(ids::GENERATE_REPORT),
            Event::GenerateIndividualReport => Some(ids::REPORT_BUTTON_INDIVIDUAL),
            Event::ReportTypeChanged(_) => Some(ids::REPORT_TYPE),
            Event::AreaChanged(_) => Some(ids::AREA_SELECTOR),
            Event::DateStartChanged(_) => Some(ids::DATE_START),
            Event::DateEndChanged(_) => Some(ids::DATE_END),
            Event::UpdateCharts => Some(ids::UPDATE_CHARTS),
            Event::SearchHideElapsed(_) => None,
        }
    }
}

impl FromStr for Event {
    type Err = DashboardError;

    /// Compact text form used by the CLI, e.g. `tab:group`, `row:group:3`,
    /// `select:0`, `export:pdf`, `start:2024-12-01`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DashboardError::InvalidEvent(s.to_string());
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };

        let event = match (name, arg) {
            ("tab", Some(mode)) => Event::SelectTab(mode.parse()?),
            ("focus", None) => Event::SearchFocus,
            ("blur", None) => Event::SearchBlur,
            ("input", Some(text)) => Event::SearchInput(text.to_string()),
            ("select", Some(index)) => Event::SelectResult(index.parse().map_err(|_| invalid())?),
            ("row", Some(rest)) => {
                let (table, id) = rest.split_once(':').ok_or_else(invalid)?;
                let table = match table {
                    "individual" => TableKind::Individual,
                    "group" => TableKind::Group,
                    _ => return Err(invalid()),
                };
                Event::ToggleRow {
                    table,
                    patient_id: id.parse().map_err(|_| invalid())?,
                }
            }
            ("export", Some("pdf")) => Event::ExportPdf,
            ("export", Some("excel")) => Event::ExportExcel,
            ("report", None) => Event::GenerateReport,
            ("report", Some("individual")) => Event::GenerateIndividualReport,
            ("report-type", Some(value)) => Event::ReportTypeChanged(value.to_string()),
            ("area", Some(value)) => Event::AreaChanged(value.to_string()),
            ("start", Some(date)) => Event::DateStartChanged(date.to_string()),
            ("end", Some(date)) => Event::DateEndChanged(date.to_string()),
            ("update", None) => Event::UpdateCharts,
            _ => return Err(invalid()),
        };
        Ok(event)
    }
}

/// Work the frontend must carry out after an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a blocking notification
    Notify(Notification),
    /// Arm a timer that dispatches `SearchHideElapsed(ticket)` after `delay`
    ScheduleHide { ticket: HideTicket, delay: Duration },
    /// Drop the timer armed for `ticket`
    CancelHide(HideTicket),
}

/// The dashboard view-model
#[derive(Debug, Clone)]
pub struct Dashboard {
    settings: DashboardSettings,
    view: ViewState,
    search: SearchBox,
    roster: PatientRoster,
    individual_table: PatientTable,
    group_table: PatientTable,
    report_type: ReportType,
    area: Area,
    dates: DateRange,
    charts: ChartCatalog,
}

impl Dashboard {
    /// Build the dashboard and its charts from the literal datasets
    pub fn new(settings: DashboardSettings) -> DashboardResult<Self> {
        let roster = PatientRoster::default();
        let charts = ChartCatalog::standard()?;

        Ok(Self {
            view: ViewState::new(settings.default_mode),
            search: SearchBox::new(Duration::from_millis(settings.search_hide_delay_ms)),
            individual_table: PatientTable::new(
                TableKind::Individual,
                &roster,
                &[SELECTED_PATIENT_ID],
            ),
            group_table: PatientTable::from_roster(TableKind::Group, &roster),
            report_type: ReportType::default(),
            area: Area::default(),
            dates: DateRange::new(settings.date_start.clone(), settings.date_end.clone()),
            roster,
            charts,
            settings,
        })
    }

    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn search(&self) -> &SearchBox {
        &self.search
    }

    pub fn roster(&self) -> &PatientRoster {
        &self.roster
    }

    pub fn table(&self, kind: TableKind) -> &PatientTable {
        match kind {
            TableKind::Individual => &self.individual_table,
            TableKind::Group => &self.group_table,
        }
    }

    fn table_mut(&mut self, kind: TableKind) -> &mut PatientTable {
        match kind {
            TableKind::Individual => &mut self.individual_table,
            TableKind::Group => &mut self.group_table,
        }
    }

    pub fn report_type(&self) -> ReportType {
        self.report_type
    }

    pub fn area(&self) -> Area {
        self.area
    }

    pub fn dates(&self) -> &DateRange {
        &self.dates
    }

    pub fn charts(&self) -> &ChartCatalog {
        &self.charts
    }

    /// Patient shown in the individual view
    pub fn selected_patient(&self) -> Option<&'static Patient> {
        self.roster.get(SELECTED_PATIENT_ID)
    }

    /// Roster entries matching the current search text
    pub fn results(&self) -> Vec<&'static Patient> {
        self.roster
            .search(self.search.query(), self.settings.search_min_chars)
    }

    pub fn area_selector_visible(&self) -> bool {
        self.report_type.shows_area_selector()
    }

    /// Apply one event and return the effects to carry out
    pub fn dispatch(&mut self, event: Event) -> DashboardResult<Vec<Effect>> {
        tracing::debug!(?event, "dispatching dashboard event");

        let effects = match event {
            Event::SelectTab(mode) => {
                if self.view.select(mode) {
                    tracing::info!(%mode, "view mode changed");
                }
                Vec::new()
            }
            Event::SearchFocus => self.search.focus().map(Effect::CancelHide).into_iter().collect(),
            Event::SearchBlur => {
                let scheduled = self.search.blur();
                vec![Effect::ScheduleHide {
                    ticket: scheduled.ticket,
                    delay: scheduled.delay,
                }]
            }
            Event::SearchInput(text) => {
                self.search.set_query(text);
                Vec::new()
            }
            Event::SearchHideElapsed(ticket) => {
                if !self.search.hide_elapsed(ticket) {
                    tracing::debug!(%ticket, "ignoring stale search hide");
                }
                Vec::new()
            }
            Event::SelectResult(index) => {
                let label = self
                    .results()
                    .get(index)
                    .map(|patient| patient.result_label())
                    .ok_or(DashboardError::UnknownResult(index))?;
                self.search.select(label).map(Effect::CancelHide).into_iter().collect()
            }
            Event::ToggleRow { table, patient_id } => {
                let state = self.table_mut(table).toggle(patient_id)?;
                tracing::debug!(%table, patient_id, ?state, "row toggled");
                Vec::new()
            }
            Event::ExportPdf => vec![notify(Action::ExportPdf.notification())],
            Event::ExportExcel => vec![notify(Action::ExportExcel.notification())],
            Event::GenerateReport => vec![notify(Action::GenerateReport.notification())],
            Event::GenerateIndividualReport => {
                let notification = individual_report_notification(self.search.query());
                if notification.kind == NotificationKind::Info {
                    self.view.select(ViewMode::Individual);
                }
                vec![notify(notification)]
            }
            Event::ReportTypeChanged(value) => {
                self.report_type = ReportType::from_value(&value);
                Vec::new()
            }
            Event::AreaChanged(value) => {
                self.area = value.parse()?;
                Vec::new()
            }
            Event::DateStartChanged(date) => {
                self.dates.start = date;
                Vec::new()
            }
            Event::DateEndChanged(date) => {
                self.dates.end = date;
                Vec::new()
            }
            Event::UpdateCharts => vec![notify(self.dates.update_notification())],
        };

        Ok(effects)
    }
}

fn notify(notification: Notification) -> Effect {
    match notification.kind {
        NotificationKind::Info => tracing::info!(message = %notification.message, "notification"),
        NotificationKind::Warning => tracing::warn!(message = %notification.message, "notification"),
    }
    Effect::Notify(notification)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::RowState;

    fn dashboard() -> Dashboard {
        Dashboard::new(DashboardSettings::default()).unwrap()
    }

    #[test]
    fn test_defaults() {
        let d = dashboard();
        assert_eq!(d.view().mode(), ViewMode::Individual);
        assert!(!d.search().results_visible());
        assert_eq!(d.table(TableKind::Individual).rows().len(), 1);
        assert_eq!(d.table(TableKind::Group).rows().len(), d.roster().patients().len());
        assert_eq!(d.dates(), &DateRange::new("2024-12-01", "2024-12-15"));
    }

    #[test]
    fn test_tab_selection() {
        let mut d = dashboard();
        d.dispatch(Event::SelectTab(ViewMode::Group)).unwrap();
        assert!(d.view().is_visible(ids::FILTER_GROUP));
        assert!(!d.view().is_visible(ids::FILTER_INDIVIDUAL));

        d.dispatch(Event::SelectTab(ViewMode::Individual)).unwrap();
        assert!(d.view().is_visible(ids::TABLE_INDIVIDUAL));
        assert!(!d.view().is_visible(ids::TABLE_GROUP));
    }

    #[test]
    fn test_search_blur_then_elapse() {
        let mut d = dashboard();
        assert!(d.dispatch(Event::SearchFocus).unwrap().is_empty());
        assert!(d.search().results_visible());

        let effects = d.dispatch(Event::SearchBlur).unwrap();
        let ticket = match effects.as_slice() {
            [Effect::ScheduleHide { ticket, delay }] => {
                assert_eq!(*delay, Duration::from_millis(200));
                *ticket
            }
            other => panic!("unexpected effects {:?}", other),
        };

        d.dispatch(Event::SearchHideElapsed(ticket)).unwrap();
        assert!(!d.search().results_visible());
    }

    #[test]
    fn test_select_result_before_delay() {
        let mut d = dashboard();
        d.dispatch(Event::SearchFocus).unwrap();
        d.dispatch(Event::SearchInput("unda".to_string())).unwrap();
        assert_eq!(d.results().len(), 1);

        let ticket = match d.dispatch(Event::SearchBlur).unwrap().as_slice() {
            [Effect::ScheduleHide { ticket, .. }] => *ticket,
            other => panic!("unexpected effects {:?}", other),
        };

        let effects = d.dispatch(Event::SelectResult(0)).unwrap();
        assert_eq!(effects, vec![Effect::CancelHide(ticket)]);
        assert_eq!(
            d.search().query(),
            "Jose Mauricio Unda Ortiz - 1114565784 - Amarilla"
        );
        assert!(!d.search().results_visible());

        // The selected text still finds its patient
        assert_eq!(d.results().len(), 1);
    }

    #[test]
    fn test_select_unknown_result_leaves_state() {
        let mut d = dashboard();
        d.dispatch(Event::SearchFocus).unwrap();
        d.dispatch(Event::SearchInput("nobody-here".to_string())).unwrap();

        let err = d.dispatch(Event::SelectResult(0)).unwrap_err();
        assert!(matches!(err, DashboardError::UnknownResult(0)));
        assert!(d.search().results_visible());
        assert_eq!(d.search().query(), "nobody-here");
    }

    #[test]
    fn test_row_toggle_involution() {
        let mut d = dashboard();
        let toggle = Event::ToggleRow {
            table: TableKind::Group,
            patient_id: 2,
        };
        d.dispatch(toggle.clone()).unwrap();
        assert_eq!(d.table(TableKind::Group).state(2), Some(RowState::Expanded));
        d.dispatch(toggle).unwrap();
        assert_eq!(d.table(TableKind::Group).state(2), Some(RowState::Collapsed));

        let err = d
            .dispatch(Event::ToggleRow {
                table: TableKind::Individual,
                patient_id: 2,
            })
            .unwrap_err();
        assert!(matches!(err, DashboardError::UnknownRow { .. }));
    }

    #[test]
    fn test_actions_only_notify() {
        let mut d = dashboard();
        let charts_before = d.charts().clone();
        let view_before = d.view().clone();

        for event in [Event::ExportPdf, Event::ExportExcel, Event::GenerateReport] {
            let effects = d.dispatch(event).unwrap();
            assert_eq!(effects.len(), 1);
            assert!(matches!(effects[0], Effect::Notify(_)));
        }

        assert_eq!(d.charts(), &charts_before);
        assert_eq!(d.view(), &view_before);
    }

    #[test]
    fn test_individual_report_without_patient_warns() {
        let mut d = dashboard();
        d.dispatch(Event::SelectTab(ViewMode::Group)).unwrap();
        d.dispatch(Event::SearchInput("  ".to_string())).unwrap();

        let effects = d.dispatch(Event::GenerateIndividualReport).unwrap();
        assert_eq!(
            effects,
            vec![Effect::Notify(Notification::warning(
                "Por favor, seleccione un paciente antes de generar el informe individual."
            ))]
        );
        assert_eq!(d.view().mode(), ViewMode::Group);
    }

    #[test]
    fn test_individual_report_with_patient_forces_individual_mode() {
        let mut d = dashboard();
        d.dispatch(Event::SelectTab(ViewMode::Group)).unwrap();
        d.dispatch(Event::SearchInput("unda".to_string())).unwrap();
        d.dispatch(Event::SelectResult(0)).unwrap();
        let label = d.search().query().to_string();

        let effects = d.dispatch(Event::GenerateIndividualReport).unwrap();
        match effects.as_slice() {
            [Effect::Notify(notification)] => {
                assert_eq!(notification.kind, NotificationKind::Info);
                assert!(notification.message.contains(&label));
            }
            other => panic!("unexpected effects: {:?}", other),
        }
        assert_eq!(d.view().mode(), ViewMode::Individual);
    }

    #[test]
    fn test_update_charts_reports_dates_verbatim() {
        let mut d = dashboard();
        let charts_before = d.charts().clone();

        d.dispatch(Event::DateStartChanged("2025-01-03".to_string())).unwrap();
        d.dispatch(Event::DateEndChanged("2025-01-09".to_string())).unwrap();
        let effects = d.dispatch(Event::UpdateCharts).unwrap();

        assert_eq!(
            effects,
            vec![Effect::Notify(Notification::info(
                "Actualizando gráficos para el período: 2025-01-03 - 2025-01-09"
            ))]
        );
        assert_eq!(d.charts(), &charts_before);
    }

    #[test]
    fn test_report_type_and_area() {
        let mut d = dashboard();
        assert!(!d.area_selector_visible());

        d.dispatch(Event::ReportTypeChanged("areas".to_string())).unwrap();
        assert!(d.area_selector_visible());

        d.dispatch(Event::ReportTypeChanged("general".to_string())).unwrap();
        assert!(!d.area_selector_visible());

        d.dispatch(Event::AreaChanged("Pediatría".to_string())).unwrap();
        assert_eq!(d.area(), Area::Pediatria);
        assert!(d.dispatch(Event::AreaChanged("Roja".to_string())).is_err());
        assert_eq!(d.area(), Area::Pediatria);
    }

    #[test]
    fn test_event_parsing() {
        assert_eq!("tab:group".parse::<Event>().unwrap(), Event::SelectTab(ViewMode::Group));
        assert_eq!("focus".parse::<Event>().unwrap(), Event::SearchFocus);
        assert_eq!("select:2".parse::<Event>().unwrap(), Event::SelectResult(2));
        assert_eq!(
            "row:group:3".parse::<Event>().unwrap(),
            Event::ToggleRow {
                table: TableKind::Group,
                patient_id: 3
            }
        );
        assert_eq!("export:excel".parse::<Event>().unwrap(), Event::ExportExcel);
        assert_eq!(
            "start:2024-12-02".parse::<Event>().unwrap(),
            Event::DateStartChanged("2024-12-02".to_string())
        );
        assert!("row:sideways:1".parse::<Event>().is_err());
        assert_eq!("report".parse::<Event>().unwrap(), Event::GenerateReport);
        assert_eq!(
            "report:individual".parse::<Event>().unwrap(),
            Event::GenerateIndividualReport
        );
        assert!("report:monthly".parse::<Event>().is_err());
        assert!("export:csv".parse::<Event>().is_err());
        assert!("focus:now".parse::<Event>().is_err());
    }

    #[test]
    fn test_source_elements() {
        assert_eq!(Event::SelectTab(ViewMode::Group).source_element(), Some("tabGrupal"));
        assert_eq!(Event::UpdateCharts.source_element(), Some("actualizarGraficos"));
        assert_eq!(Event::ExportPdf.source_element(), Some("exportPdf"));
        assert_eq!(
            Event::GenerateIndividualReport.source_element(),
            Some("generarInformeIndividual")
        );
    }
}
