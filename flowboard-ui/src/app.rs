//! App Root Component
//!
//! Builds the dashboard state and lays out the page.

use flowboard::view::ids;
use flowboard::{TableKind, ViewMode};
use leptos::*;

use crate::components::{ChartCanvas, Filters, Header, MetricCards, PatientTable, SlaGauges, Tabs};
use crate::state::{provide_dashboard_state, DashboardState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    if let Err(e) = provide_dashboard_state() {
        web_sys::console::error_1(&format!("Dashboard failed to start: {}", e).into());
        return view! {
            <div class="flex flex-col items-center justify-center min-h-screen text-center">
                <h1 class="text-2xl font-bold mb-2">"No se pudo cargar el dashboard"</h1>
                <p class="text-gray-500">{e.to_string()}</p>
            </div>
        }
        .into_view();
    }

    view! {
        <div class="container mx-auto px-4 py-6 text-[#333333]">
            <Header />
            <Tabs />
            <Filters />

            <MetricCards mode=ViewMode::Individual />
            <MetricCards mode=ViewMode::Group />

            <IndividualCharts />
            <GroupCharts />
            <SlaGauges />

            <PatientTable kind=TableKind::Individual />
            <PatientTable kind=TableKind::Group />
        </div>
    }
    .into_view()
}

/// Patient against area average
#[component]
fn IndividualCharts() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <section
            id=ids::CHARTS_INDIVIDUAL
            class=move || format!("grid grid-cols-1 lg:grid-cols-2 gap-6 mb-6 {}", state.class_for(ids::CHARTS_INDIVIDUAL))
        >
            <ChartCanvas canvas_id=ids::COMPARISON_CHART title="Paciente vs. promedio del área" />
            <ChartCanvas canvas_id=ids::ALL_AREAS_CHART title="Comparación por etapa" />
        </section>
    }
}

/// Department-wide trends
#[component]
fn GroupCharts() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <section
            id=ids::CHARTS_GROUP
            class=move || format!("grid grid-cols-1 lg:grid-cols-2 gap-6 mb-6 {}", state.class_for(ids::CHARTS_GROUP))
        >
            <ChartCanvas canvas_id=ids::TIMELINE_CHART title="Tiempo total de atención por día" />
            <ChartCanvas canvas_id=ids::BAR_CHART title="Tiempo promedio por etapa" />
        </section>
    }
}
