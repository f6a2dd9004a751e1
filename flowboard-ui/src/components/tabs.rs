//! Tab Component
//!
//! Individual / group report tabs.

use flowboard::{Event, ViewMode};
use leptos::*;

use crate::state::DashboardState;

/// Report tabs, one per view mode
#[component]
pub fn Tabs() -> impl IntoView {
    view! {
        <nav class="border-b border-gray-200 mb-6">
            <div class="flex">
                {ViewMode::all()
                    .iter()
                    .map(|mode| view! { <TabButton mode=*mode /> })
                    .collect_view()}
            </div>
        </nav>
    }
}

#[component]
fn TabButton(mode: ViewMode) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <div
            id=mode.tab_id()
            class=move || {
                let active = state.dashboard.with(|d| d.view().tab_class(mode));
                format!("tab px-4 py-2 font-medium cursor-pointer text-gray-600 {}", active)
            }
            on:click=move |_| state.dispatch(Event::SelectTab(mode))
        >
            {mode.label()}
        </div>
    }
}
