//! View Mode State
//!
//! Tracks which tab is selected and answers visibility questions for every
//! element covered by the binding table in [`ids`].

pub mod ids;
pub mod mode;

pub use ids::{Binding, Selector, BINDINGS};
pub use mode::ViewMode;

/// Visibility state of the tabbed part of the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    mode: ViewMode,
}

impl ViewState {
    /// Create a view state showing the given mode
    pub fn new(mode: ViewMode) -> Self {
        Self { mode }
    }

    /// Currently selected mode
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Activate a tab. Returns `true` when the mode actually changed.
    pub fn select(&mut self, mode: ViewMode) -> bool {
        let changed = self.mode != mode;
        self.mode = mode;
        changed
    }

    /// Visibility of an element governed by the binding table.
    ///
    /// Returns `None` for elements the tab toggle does not touch.
    pub fn visibility(&self, id: &str) -> Option<bool> {
        ids::binding_for(id).map(|binding| binding.mode == self.mode)
    }

    /// Whether an element is visible. Elements outside the binding table are
    /// always visible as far as the tab toggle is concerned.
    pub fn is_visible(&self, id: &str) -> bool {
        self.visibility(id).unwrap_or(true)
    }

    /// Class list fragment for an element: `"hidden"` or empty
    pub fn class_for(&self, id: &str) -> &'static str {
        if self.is_visible(id) {
            ""
        } else {
            ids::HIDDEN_CLASS
        }
    }

    /// Whether the tab for `mode` carries the active marker
    pub fn is_tab_active(&self, mode: ViewMode) -> bool {
        self.mode == mode
    }

    /// Class list fragment for a tab control: `"active"` or empty
    pub fn tab_class(&self, mode: ViewMode) -> &'static str {
        if self.is_tab_active(mode) {
            ids::ACTIVE_CLASS
        } else {
            ""
        }
    }

    /// Every binding with its current visibility
    pub fn snapshot(&self) -> Vec<(Selector, bool)> {
        BINDINGS
            .iter()
            .map(|binding| (binding.selector, binding.mode == self.mode))
            .collect()
    }
}
