//! Filter Panel Component
//!
//! Chart period, patient search (individual view), report type and care
//! area (group view), and the generate-report buttons.

use flowboard::search::NO_RESULTS_MESSAGE;
use flowboard::view::ids;
use flowboard::{Area, Event, ReportType};
use leptos::*;

use crate::state::DashboardState;

/// Filter panel
#[component]
pub fn Filters() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <section class="bg-white rounded-lg shadow-md p-4 mb-6">
            <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                <DateRangePicker />

                <PatientSearch />
                <GroupFilter />

                <div class="flex items-end">
                    <ReportButton
                        id=ids::REPORT_BUTTON_GROUP
                        label="Generar Informe Grupal"
                        event=Event::GenerateReport
                    />
                    <ReportButton
                        id=ids::REPORT_BUTTON_INDIVIDUAL
                        label="Generar Informe Individual"
                        event=Event::GenerateIndividualReport
                    />
                </div>
            </div>

            <div class="flex justify-end mt-4">
                <button
                    id=ids::UPDATE_CHARTS
                    class="px-4 py-2 rounded-lg text-sm font-medium text-white bg-[#5385B7] hover:bg-[#4A7296]"
                    on:click=move |_| state.dispatch(Event::UpdateCharts)
                >
                    <i class="fas fa-chart-line mr-2"></i>
                    "Actualizar gráficos"
                </button>
            </div>
        </section>
    }
}

/// Start and end date pickers
#[component]
fn DateRangePicker() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <div>
            <label class="block text-sm font-medium mb-1" for=ids::DATE_START>"Fecha Inicio"</label>
            <input
                type="date"
                id=ids::DATE_START
                class="w-full rounded border p-2"
                prop:value=move || state.dashboard.with(|d| d.dates().start.clone())
                on:change=move |ev| state.dispatch(Event::DateStartChanged(event_target_value(&ev)))
            />
        </div>
        <div>
            <label class="block text-sm font-medium mb-1" for=ids::DATE_END>"Fecha Fin"</label>
            <input
                type="date"
                id=ids::DATE_END
                class="w-full rounded border p-2"
                prop:value=move || state.dashboard.with(|d| d.dates().end.clone())
                on:change=move |ev| state.dispatch(Event::DateEndChanged(event_target_value(&ev)))
            />
        </div>
    }
}

/// Patient search box with its result list
#[component]
fn PatientSearch() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let results = create_memo(move |_| state.dashboard.with(|d| d.results()));
    let results_visible = create_memo(move |_| state.dashboard.with(|d| d.search().results_visible()));
    let min_chars = state.dashboard.with_untracked(|d| d.settings().search_min_chars);

    view! {
        <div
            id=ids::FILTER_INDIVIDUAL
            class=move || format!("col-span-2 {}", state.class_for(ids::FILTER_INDIVIDUAL))
        >
            <label class="block text-sm font-medium text-[#333333] mb-1" for=ids::SEARCH_INPUT>"Paciente"</label>
            <div class="relative">
                <input
                    type="text"
                    id=ids::SEARCH_INPUT
                    class="w-full border border-gray-300 rounded-md px-3 py-2"
                    placeholder="Buscar por nombre o documento..."
                    prop:value=move || state.dashboard.with(|d| d.search().query().to_string())
                    on:focus=move |_| state.dispatch(Event::SearchFocus)
                    on:blur=move |_| state.dispatch(Event::SearchBlur)
                    on:input=move |ev| state.dispatch(Event::SearchInput(event_target_value(&ev)))
                />
                <div
                    id=ids::SEARCH_RESULTS
                    class=move || {
                        let hidden = if results_visible.get() { "" } else { ids::HIDDEN_CLASS };
                        format!("absolute z-10 bg-white w-full mt-1 rounded-md shadow-lg max-h-60 overflow-y-auto {}", hidden)
                    }
                >
                    {move || {
                        let results = results.get();
                        if results.is_empty() {
                            return view! {
                                <div class="px-3 py-2 text-sm text-gray-500">{NO_RESULTS_MESSAGE}</div>
                            }.into_view();
                        }

                        results
                            .into_iter()
                            .enumerate()
                            .map(|(index, patient)| view! {
                                <div
                                    class="px-3 py-2 text-sm hover:bg-gray-100 cursor-pointer"
                                    on:click=move |_| state.dispatch(Event::SelectResult(index))
                                >
                                    {patient.result_label()}
                                </div>
                            })
                            .collect_view()
                    }}
                </div>
            </div>
            <p class="text-xs text-gray-500 mt-1">
                {format!("Escriba al menos {} caracteres para filtrar", min_chars)}
            </p>
        </div>
    }
}

/// Report type and care area selectors of the group view
#[component]
fn GroupFilter() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <div
            id=ids::FILTER_GROUP
            class=move || format!("col-span-2 grid grid-cols-2 gap-4 {}", state.class_for(ids::FILTER_GROUP))
        >
            <div>
                <label class="block text-sm font-medium text-[#333333] mb-1" for=ids::REPORT_TYPE>"Tipo de reporte"</label>
                <select
                    id=ids::REPORT_TYPE
                    class="w-full border border-gray-300 rounded-md px-3 py-2"
                    on:change=move |ev| state.dispatch(Event::ReportTypeChanged(event_target_value(&ev)))
                >
                    {[ReportType::General, ReportType::Areas]
                        .into_iter()
                        .map(|report| view! {
                            <option
                                value=report.value()
                                selected=move || state.dashboard.with(|d| d.report_type() == report)
                            >
                                {report.label()}
                            </option>
                        })
                        .collect_view()}
                </select>
            </div>

            <div
                id=ids::AREA_SELECTOR
                class=move || {
                    if state.dashboard.with(|d| d.area_selector_visible()) { "" } else { ids::HIDDEN_CLASS }
                }
            >
                <label class="block text-sm font-medium text-[#333333] mb-1">"Área Asistencial"</label>
                <select
                    class="w-full border border-gray-300 rounded-md px-3 py-2"
                    on:change=move |ev| state.dispatch(Event::AreaChanged(event_target_value(&ev)))
                >
                    {Area::all()
                        .iter()
                        .map(|area| {
                            let area = *area;
                            view! {
                                <option
                                    value=area.value()
                                    selected=move || state.dashboard.with(|d| d.area() == area)
                                >
                                    {area.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}

/// Generate-report button of one view mode
#[component]
fn ReportButton(id: &'static str, label: &'static str, event: Event) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <button
            id=id
            class=move || {
                format!(
                    "w-full px-4 py-2 rounded-lg text-sm font-medium text-white bg-[#5385B7] hover:bg-[#4A7296] {}",
                    state.class_for(id)
                )
            }
            on:click=move |_| state.dispatch(event.clone())
        >
            <i class="fas fa-sync-alt mr-2"></i>
            {label}
        </button>
    }
}
