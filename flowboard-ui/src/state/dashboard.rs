//! Dashboard State
//!
//! Reactive wrapper around [`flowboard::Dashboard`]. Components read through
//! the signal and send every DOM event through [`DashboardState::dispatch`],
//! which also carries out the returned effects.

use flowboard::{
    Dashboard, DashboardError, DashboardSettings, Effect, Event, HideTicket, Notification,
};
use gloo_timers::callback::Timeout;
use leptos::*;
use std::time::Duration;

/// Dashboard state provided to all components
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// The view-model; every render reads from here
    pub dashboard: RwSignal<Dashboard>,
    /// Armed search-hide timer
    hide_timer: StoredValue<HideTimer<Timeout>>,
}

/// Build the view-model and provide it to the component tree
pub fn provide_dashboard_state() -> Result<(), DashboardError> {
    let dashboard = Dashboard::new(DashboardSettings::default())?;
    provide_context(DashboardState::new(dashboard));
    Ok(())
}

impl DashboardState {
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            dashboard: create_rw_signal(dashboard),
            hide_timer: store_value(HideTimer::default()),
        }
    }

    /// Apply an event. A failing handler is logged and leaves the
    /// dashboard as it was.
    pub fn dispatch(&self, event: Event) {
        match self.dashboard.try_update(|dashboard| dashboard.dispatch(event)) {
            Some(Ok(effects)) => {
                for effect in effects {
                    self.run(effect);
                }
            }
            Some(Err(e)) => {
                web_sys::console::error_1(&format!("Dashboard event failed: {}", e).into());
            }
            None => {}
        }
    }

    fn run(&self, effect: Effect) {
        let state = *self;
        let mut notification = None;
        self.hide_timer.update_value(|timer| {
            notification = timer.apply(effect, |ticket, delay| {
                Timeout::new(timer_millis(delay), move || {
                    state.dispatch(Event::SearchHideElapsed(ticket));
                })
            });
        });
        if let Some(notification) = notification {
            notify(&notification);
        }
    }

    /// Ticket of the armed search-hide timer
    pub fn armed_hide(&self) -> Option<HideTicket> {
        self.hide_timer.with_value(|timer| timer.ticket())
    }

    /// `hidden` while the element's view mode is not selected
    pub fn class_for(&self, id: &str) -> &'static str {
        self.dashboard.with(|d| d.view().class_for(id))
    }
}

/// Handle of the search-hide timer and the ticket it fires with.
///
/// Replacing or releasing a handle drops it, which for a gloo `Timeout`
/// clears the timer.
#[derive(Debug)]
pub struct HideTimer<H> {
    armed: Option<(HideTicket, H)>,
}

impl<H> Default for HideTimer<H> {
    fn default() -> Self {
        Self { armed: None }
    }
}

impl<H> HideTimer<H> {
    pub fn ticket(&self) -> Option<HideTicket> {
        self.armed.as_ref().map(|(ticket, _)| *ticket)
    }

    /// Carry out the timer side of an effect, building a handle with `arm`
    /// when one is scheduled. Returns the notification left to show.
    pub fn apply(
        &mut self,
        effect: Effect,
        arm: impl FnOnce(HideTicket, Duration) -> H,
    ) -> Option<Notification> {
        match effect {
            Effect::Notify(notification) => return Some(notification),
            Effect::ScheduleHide { ticket, delay } => {
                self.armed = Some((ticket, arm(ticket, delay)));
            }
            Effect::CancelHide(ticket) => {
                if self.ticket() == Some(ticket) {
                    self.armed = None;
                }
            }
        }
        None
    }
}

/// Blocking notification, mirrored to the console
fn notify(notification: &Notification) {
    web_sys::console::log_1(&format!("{:?}: {}", notification.kind, notification).into());
    if let Err(e) = window().alert_with_message(&notification.message) {
        web_sys::console::error_1(&e);
    }
}

/// Timer delay in the unit `setTimeout` takes
fn timer_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts how many handles were dropped
    struct Handle(Rc<Cell<u32>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn run_all(
        timer: &mut HideTimer<Handle>,
        effects: Vec<Effect>,
        dropped: &Rc<Cell<u32>>,
    ) -> Vec<Notification> {
        effects
            .into_iter()
            .filter_map(|effect| timer.apply(effect, |_, _| Handle(dropped.clone())))
            .collect()
    }

    #[test]
    fn test_timer_millis() {
        assert_eq!(timer_millis(Duration::from_millis(200)), 200);
        assert_eq!(timer_millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }

    #[test]
    fn test_focus_after_blur_releases_timer() {
        let mut dashboard = Dashboard::new(DashboardSettings::default()).unwrap();
        let mut timer = HideTimer::default();
        let dropped = Rc::new(Cell::new(0));

        let effects = dashboard.dispatch(Event::SearchBlur).unwrap();
        assert!(run_all(&mut timer, effects, &dropped).is_empty());
        assert_eq!(timer.ticket(), dashboard.search().pending_hide());
        assert!(timer.ticket().is_some());

        let effects = dashboard.dispatch(Event::SearchFocus).unwrap();
        run_all(&mut timer, effects, &dropped);
        assert_eq!(timer.ticket(), None);
        assert_eq!(dropped.get(), 1);
    }

    #[test]
    fn test_second_blur_replaces_timer() {
        let mut dashboard = Dashboard::new(DashboardSettings::default()).unwrap();
        let mut timer = HideTimer::default();
        let dropped = Rc::new(Cell::new(0));

        let effects = dashboard.dispatch(Event::SearchBlur).unwrap();
        run_all(&mut timer, effects, &dropped);
        let first = timer.ticket();

        let effects = dashboard.dispatch(Event::SearchBlur).unwrap();
        run_all(&mut timer, effects, &dropped);
        assert_ne!(timer.ticket(), first);
        assert_eq!(timer.ticket(), dashboard.search().pending_hide());
        assert_eq!(dropped.get(), 1);

        // A stale cancel leaves the newer timer armed
        let stale = first.unwrap();
        run_all(&mut timer, vec![Effect::CancelHide(stale)], &dropped);
        assert!(timer.ticket().is_some());
        assert_eq!(dropped.get(), 1);
    }

    #[test]
    fn test_notifications_pass_through() {
        let mut dashboard = Dashboard::new(DashboardSettings::default()).unwrap();
        let mut timer = HideTimer::default();
        let dropped = Rc::new(Cell::new(0));

        let effects = dashboard.dispatch(Event::GenerateIndividualReport).unwrap();
        let shown = run_all(&mut timer, effects, &dropped);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].kind, flowboard::NotificationKind::Warning);
        assert_eq!(timer.ticket(), None);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_dispatch_arms_and_cancels_timeout() {
        let runtime = create_runtime();
        let state = DashboardState::new(Dashboard::new(DashboardSettings::default()).unwrap());

        state.dispatch(Event::SearchBlur);
        assert!(state.armed_hide().is_some());
        assert_eq!(
            state.armed_hide(),
            state.dashboard.with_untracked(|d| d.search().pending_hide())
        );

        state.dispatch(Event::SearchFocus);
        assert_eq!(state.armed_hide(), None);

        runtime.dispose();
    }

    #[wasm_bindgen_test]
    fn test_failed_dispatch_leaves_dashboard() {
        let runtime = create_runtime();
        let state = DashboardState::new(Dashboard::new(DashboardSettings::default()).unwrap());

        state.dispatch(Event::SelectResult(99));
        assert_eq!(state.dashboard.with_untracked(|d| d.search().query().to_string()), "");
        assert_eq!(state.armed_hide(), None);

        runtime.dispose();
    }
}
