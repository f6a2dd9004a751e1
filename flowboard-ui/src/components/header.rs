//! Header Component
//!
//! Page title and the export / report buttons.

use flowboard::view::ids;
use flowboard::Event;
use leptos::*;

use crate::state::DashboardState;

/// Dashboard header
#[component]
pub fn Header() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <header class="flex justify-between items-center mb-6">
            <h1 class="text-3xl font-bold text-[#333333]">"Dashboard de Métricas de Urgencias"</h1>
            <div class="flex space-x-2">
                <HeaderButton id=ids::EXPORT_PDF icon="fas fa-file-pdf" label="Exportar PDF"
                    on_click=move || state.dispatch(Event::ExportPdf) />
                <HeaderButton id=ids::EXPORT_EXCEL icon="fas fa-file-excel" label="Exportar Excel"
                    on_click=move || state.dispatch(Event::ExportExcel) />
                <HeaderButton id=ids::GENERATE_REPORT icon="fas fa-file-alt" label="Generar Informe"
                    on_click=move || state.dispatch(Event::GenerateReport) />
            </div>
        </header>
    }
}

#[component]
fn HeaderButton<F>(
    id: &'static str,
    icon: &'static str,
    label: &'static str,
    on_click: F,
) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <button
            id=id
            class="px-4 py-2 rounded-lg text-sm font-medium text-white bg-[#5385B7] hover:bg-[#4A7296] transition-colors"
            on:click=move |_| on_click()
        >
            <i class=format!("{} mr-2", icon)></i>
            {label}
        </button>
    }
}
