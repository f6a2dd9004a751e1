//! Individual / group view mode

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::ids;
use crate::error::DashboardError;

/// Which of the two mutually exclusive dashboard views is shown
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// A single patient's journey compared with the area averages
    #[default]
    Individual,
    /// Aggregated figures for every patient in the period
    Group,
}

impl ViewMode {
    /// Both modes, in tab order
    pub fn all() -> &'static [ViewMode] {
        &[ViewMode::Individual, ViewMode::Group]
    }

    /// The other mode
    pub fn sibling(self) -> ViewMode {
        match self {
            ViewMode::Individual => ViewMode::Group,
            ViewMode::Group => ViewMode::Individual,
        }
    }

    /// Element id of the tab control that selects this mode
    pub fn tab_id(self) -> &'static str {
        match self {
            ViewMode::Individual => ids::TAB_INDIVIDUAL,
            ViewMode::Group => ids::TAB_GROUP,
        }
    }

    /// Tab caption
    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Individual => "Reporte Individual",
            ViewMode::Group => "Reporte Grupal",
        }
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewMode::Individual => write!(f, "individual"),
            ViewMode::Group => write!(f, "group"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "individual" => Ok(ViewMode::Individual),
            "group" | "grupal" => Ok(ViewMode::Group),
            _ => Err(DashboardError::InvalidViewMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sibling_is_involution() {
        for mode in ViewMode::all() {
            assert_ne!(mode.sibling(), *mode);
            assert_eq!(mode.sibling().sibling(), *mode);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("Group".parse::<ViewMode>().unwrap(), ViewMode::Group);
        assert_eq!("grupal".parse::<ViewMode>().unwrap(), ViewMode::Group);
        assert_eq!(" individual ".parse::<ViewMode>().unwrap(), ViewMode::Individual);
        assert!("both".parse::<ViewMode>().is_err());
    }

    #[test]
    fn test_tab_ids() {
        assert_eq!(ViewMode::Individual.tab_id(), "tabIndividual");
        assert_eq!(ViewMode::Group.tab_id(), "tabGrupal");
    }
}
