//! Patient roster lookup behind the search box

use crate::data::{Patient, ROSTER};

/// Message shown when a query matches nobody
pub const NO_RESULTS_MESSAGE: &str = "No se encontraron resultados";

/// Queries shorter than this list the whole roster
pub const DEFAULT_MIN_QUERY_CHARS: usize = 3;

/// Read-only patient list searchable by name or document
#[derive(Debug, Clone)]
pub struct PatientRoster {
    patients: &'static [Patient],
}

impl Default for PatientRoster {
    fn default() -> Self {
        Self::new(ROSTER)
    }
}

impl PatientRoster {
    pub fn new(patients: &'static [Patient]) -> Self {
        Self { patients }
    }

    pub fn patients(&self) -> &'static [Patient] {
        self.patients
    }

    pub fn get(&self, id: u32) -> Option<&'static Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    /// Case-insensitive substring match on name or document. A query equal to
    /// a patient's result label (what selecting a result leaves in the input)
    /// finds that patient.
    ///
    /// Queries with fewer than `min_chars` characters (after trimming) match
    /// every patient, so the panel is populated as soon as it opens.
    pub fn search(&self, query: &str, min_chars: usize) -> Vec<&'static Patient> {
        let needle = query.trim().to_lowercase();
        if needle.chars().count() < min_chars {
            return self.patients.iter().collect();
        }

        self.patients
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.document.contains(&needle)
                    || p.result_label().to_lowercase() == needle
            })
            .collect()
    }
}
