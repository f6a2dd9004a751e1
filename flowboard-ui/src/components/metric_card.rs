//! Metric Card Component
//!
//! Total-time and per-stage cards, one row per view mode.

use flowboard::data::{metric_summaries, MetricSummary};
use flowboard::view::ids;
use flowboard::ViewMode;
use leptos::*;

use crate::state::DashboardState;

/// All metric cards of one view mode
#[component]
pub fn MetricCards(mode: ViewMode) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-4 lg:grid-cols-7 gap-4 mb-6">
            {metric_summaries()
                .into_iter()
                .map(|summary| view! { <MetricCard mode=mode summary=summary /> })
                .collect_view()}
        </div>
    }
}

/// Metric card component
#[component]
fn MetricCard(mode: ViewMode, summary: MetricSummary) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let id = ids::metric_card_id(mode, summary.key());
    let class_id = id.clone();

    let light = summary.stage.map(|stage| {
        view! {
            <span
                class=format!("w-3 h-3 rounded-full {}", stage.traffic_light().css_class())
                title=stage.description()
            />
        }
    });

    let body = match mode {
        ViewMode::Individual => {
            let value = summary
                .patient_minutes
                .map(|m| format!("{:.0} min", m))
                .unwrap_or_else(|| "—".to_string());
            let favorable = summary
                .patient_minutes
                .map(|m| m <= summary.area_average)
                .unwrap_or(true);
            let comparison_class = if favorable {
                "text-sm mt-2 text-[#28a745]"
            } else {
                "text-sm mt-2 text-[#B75353]"
            };
            view! {
                <div class="text-3xl font-bold mt-2">{value}</div>
                <div class=comparison_class>
                    {summary.comparison_label()}
                </div>
            }
            .into_view()
        }
        ViewMode::Group => {
            let stats = summary.group;
            view! {
                <div class="text-3xl font-bold mt-2">{format!("{:.0} min", stats.mean)}</div>
                <div class="text-xs text-gray-500 mt-2 space-x-2">
                    <span>{format!("Mediana {:.0}", stats.median)}</span>
                    <span>{format!("P90 {:.0}", stats.p90)}</span>
                </div>
            }
            .into_view()
        }
    };

    view! {
        <div
            id=id
            class=move || format!("bg-white rounded-lg shadow-md p-4 {}", state.class_for(&class_id))
        >
            <div class="flex items-center justify-between">
                <span class="text-gray-600 text-sm font-semibold">{summary.title}</span>
                {light}
            </div>
            {body}
        </div>
    }
}
