//! Expandable Patient Rows
//!
//! Each patient row owns a detail row below it. Clicking the row flips the
//! detail row and the chevron together; rows never affect each other.

use serde::{Deserialize, Serialize};

use crate::data::Patient;
use crate::error::{DashboardError, DashboardResult};
use crate::search::PatientRoster;

/// Which of the two patient tables a row belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    Individual,
    Group,
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableKind::Individual => write!(f, "individual"),
            TableKind::Group => write!(f, "group"),
        }
    }
}

/// Expansion state of one row
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RowState {
    #[default]
    Collapsed,
    Expanded,
}

impl RowState {
    pub fn toggled(self) -> RowState {
        match self {
            RowState::Collapsed => RowState::Expanded,
            RowState::Expanded => RowState::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == RowState::Expanded
    }

    /// `style.display` of the detail row
    pub fn detail_display(self) -> &'static str {
        match self {
            RowState::Expanded => "table-row",
            RowState::Collapsed => "none",
        }
    }

    /// Chevron class of the row's toggle icon
    pub fn icon_class(self) -> &'static str {
        match self {
            RowState::Expanded => "fa-chevron-up",
            RowState::Collapsed => "fa-chevron-down",
        }
    }
}

/// A patient row with its detail row
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandableRow {
    pub patient: &'static Patient,
    pub state: RowState,
}

/// One patient table
#[derive(Debug, Clone)]
pub struct PatientTable {
    kind: TableKind,
    rows: Vec<ExpandableRow>,
}

impl PatientTable {
    /// Build a table from roster patients, all collapsed. Unknown ids are
    /// skipped.
    pub fn new(kind: TableKind, roster: &PatientRoster, patient_ids: &[u32]) -> Self {
        let rows = patient_ids
            .iter()
            .filter_map(|id| roster.get(*id))
            .map(|patient| ExpandableRow {
                patient,
                state: RowState::Collapsed,
            })
            .collect();
        Self { kind, rows }
    }

    /// Every roster patient, in roster order
    pub fn from_roster(kind: TableKind, roster: &PatientRoster) -> Self {
        let ids: Vec<u32> = roster.patients().iter().map(|p| p.id).collect();
        Self::new(kind, roster, &ids)
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn rows(&self) -> &[ExpandableRow] {
        &self.rows
    }

    pub fn state(&self, patient_id: u32) -> Option<RowState> {
        self.rows
            .iter()
            .find(|row| row.patient.id == patient_id)
            .map(|row| row.state)
    }

    /// Flip one row and return its new state
    pub fn toggle(&mut self, patient_id: u32) -> DashboardResult<RowState> {
        let kind = self.kind;
        let row = self
            .rows
            .iter_mut()
            .find(|row| row.patient.id == patient_id)
            .ok_or(DashboardError::UnknownRow {
                table: kind,
                id: patient_id,
            })?;

        row.state = row.state.toggled();
        Ok(row.state)
    }

    pub fn expanded_count(&self) -> usize {
        self.rows.iter().filter(|row| row.state.is_expanded()).count()
    }
}
