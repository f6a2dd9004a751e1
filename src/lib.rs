//! # Flowboard
//!
//! Patient-flow metrics dashboard for a hospital emergency department.
//!
//! The crate holds the platform-independent half of the dashboard: an explicit
//! view-model that the WASM frontend (`flowboard-ui`) renders from, and that the
//! `flowboard` CLI drives headlessly.
//!
//! ## Modules
//!
//! - [`view`]: Individual / group view mode and the element binding table
//! - [`search`]: Patient search box with a cancellable blur-hide timer
//! - [`table`]: Expandable patient rows
//! - [`charts`]: Chart catalogue and Chart.js configuration builder
//! - [`actions`]: Export / report / date-range notification stubs
//! - [`dashboard`]: The [`Dashboard`] view-model and its event dispatcher
//! - [`data`]: Literal datasets shown on the dashboard
//!
//! ## Quick Start
//!
//! ```rust
//! use flowboard::{Dashboard, DashboardSettings, Effect, Event, ViewMode};
//!
//! let mut dashboard = Dashboard::new(DashboardSettings::default())?;
//!
//! dashboard.dispatch(Event::SelectTab(ViewMode::Group))?;
//! assert!(dashboard.view().is_visible("graficos-grupales"));
//! assert!(!dashboard.view().is_visible("graficos-individuales"));
//!
//! let effects = dashboard.dispatch(Event::ExportPdf)?;
//! assert!(matches!(effects.as_slice(), [Effect::Notify(_)]));
//! # Ok::<(), flowboard::DashboardError>(())
//! ```

pub mod actions;
pub mod charts;
#[cfg(feature = "cli")]
pub mod config;
pub mod dashboard;
pub mod data;
pub mod error;
pub mod search;
pub mod table;
pub mod view;

pub use actions::{Action, DateRange, Notification, NotificationKind, ReportType};
pub use charts::{ChartCatalog, ChartError, ChartKind, ChartSpec, Dataset, Gauge};
pub use dashboard::{Dashboard, DashboardSettings, Effect, Event};
pub use data::{Area, DischargeStatus, Patient, Stage, StageStatus};
pub use error::{DashboardError, DashboardResult};
pub use search::{HideTicket, PatientRoster, SearchBox};
pub use table::{PatientTable, RowState, TableKind};
pub use view::{ViewMode, ViewState};

#[cfg(feature = "cli")]
pub use config::{Config, ConfigError, LoggingConfig};
