//! Patient Search Box
//!
//! The results panel opens on focus and closes a short delay after blur, so a
//! click on a result still lands. The delay is an explicit, cancellable timer:
//! every blur hands out a fresh [`HideTicket`], and only the newest ticket may
//! close the panel. A stale timer from an earlier blur can therefore never
//! hide a panel that a later focus reopened.

pub mod roster;

pub use roster::{PatientRoster, DEFAULT_MIN_QUERY_CHARS, NO_RESULTS_MESSAGE};

use serde::Serialize;
use std::time::Duration;

/// Default delay between blur and hiding the results panel
pub const DEFAULT_HIDE_DELAY: Duration = Duration::from_millis(200);

/// Identifies one scheduled hide of the results panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HideTicket(u64);

impl HideTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for HideTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hide#{}", self.0)
    }
}

/// A hide the caller must arm a timer for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledHide {
    pub ticket: HideTicket,
    pub delay: Duration,
}

/// Search input plus results panel
#[derive(Debug, Clone)]
pub struct SearchBox {
    query: String,
    results_visible: bool,
    next_ticket: u64,
    pending: Option<HideTicket>,
    hide_delay: Duration,
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::new(DEFAULT_HIDE_DELAY)
    }
}

impl SearchBox {
    pub fn new(hide_delay: Duration) -> Self {
        Self {
            query: String::new(),
            results_visible: false,
            next_ticket: 0,
            pending: None,
            hide_delay,
        }
    }

    /// Current input text
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    /// Ticket of the hide currently waiting on its timer
    pub fn pending_hide(&self) -> Option<HideTicket> {
        self.pending
    }

    pub fn hide_delay(&self) -> Duration {
        self.hide_delay
    }

    /// Input gained focus: show the panel and cancel any pending hide.
    ///
    /// Returns the cancelled ticket so the caller can drop its timer.
    pub fn focus(&mut self) -> Option<HideTicket> {
        self.results_visible = true;
        self.pending.take()
    }

    /// Input lost focus: schedule the panel to hide after the delay.
    ///
    /// A hide that was already pending is superseded by the new ticket.
    pub fn blur(&mut self) -> ScheduledHide {
        self.next_ticket += 1;
        let ticket = HideTicket(self.next_ticket);
        self.pending = Some(ticket);
        ScheduledHide {
            ticket,
            delay: self.hide_delay,
        }
    }

    /// The timer for `ticket` fired. Hides the panel only if that ticket is
    /// still the pending one; returns whether it did.
    pub fn hide_elapsed(&mut self, ticket: HideTicket) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        self.results_visible = false;
        true
    }

    /// Text typed into the input
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// A result was clicked: copy its text into the input and hide the panel
    /// now. Returns the cancelled ticket, if a hide was pending.
    pub fn select(&mut self, text: impl Into<String>) -> Option<HideTicket> {
        self.query = text.into();
        self.results_visible = false;
        self.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_shows_results() {
        let mut search = SearchBox::default();
        assert!(!search.results_visible());
        search.focus();
        assert!(search.results_visible());
    }

    #[test]
    fn test_blur_hides_after_delay() {
        let mut search = SearchBox::default();
        search.focus();

        let scheduled = search.blur();
        assert_eq!(scheduled.delay, Duration::from_millis(200));
        // Still open until the timer fires
        assert!(search.results_visible());

        assert!(search.hide_elapsed(scheduled.ticket));
        assert!(!search.results_visible());
        assert_eq!(search.pending_hide(), None);
    }

    #[test]
    fn test_select_before_delay() {
        let mut search = SearchBox::default();
        search.focus();
        let scheduled = search.blur();

        let cancelled = search.select("Jose Mauricio Unda Ortiz - 1114565784 - Amarilla");
        assert_eq!(cancelled, Some(scheduled.ticket));
        assert_eq!(search.query(), "Jose Mauricio Unda Ortiz - 1114565784 - Amarilla");
        assert!(!search.results_visible());

        // Late timer is a no-op
        assert!(!search.hide_elapsed(scheduled.ticket));
    }

    #[test]
    fn test_stale_timer_does_not_hide_reopened_panel() {
        let mut search = SearchBox::default();
        search.focus();
        let first = search.blur();

        // Quick re-focus before the first timer fires
        assert_eq!(search.focus(), Some(first.ticket));
        assert!(!search.hide_elapsed(first.ticket));
        assert!(search.results_visible());
    }

    #[test]
    fn test_newer_blur_supersedes_older() {
        let mut search = SearchBox::default();
        search.focus();
        let first = search.blur();
        let second = search.blur();
        assert_ne!(first.ticket, second.ticket);

        assert!(!search.hide_elapsed(first.ticket));
        assert!(search.results_visible());
        assert!(search.hide_elapsed(second.ticket));
    }
}
