//! Patient Table Component
//!
//! Patient rows whose per-stage detail expands and collapses on click.

use flowboard::data::{Patient, StageDetail};
use flowboard::view::ids;
use flowboard::{Event, TableKind};
use leptos::*;

use crate::state::DashboardState;

/// Patient table of one view
#[component]
pub fn PatientTable(kind: TableKind) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let (id, title) = match kind {
        TableKind::Individual => (ids::TABLE_INDIVIDUAL, "Detalle del paciente"),
        TableKind::Group => (ids::TABLE_GROUP, "Pacientes"),
    };

    // The row set is fixed; only each row's state changes
    let patients: Vec<&'static Patient> = state
        .dashboard
        .with_untracked(|d| d.table(kind).rows().iter().map(|row| row.patient).collect());

    view! {
        <section
            id=id
            class=move || format!("bg-white rounded-lg shadow-md p-4 mb-6 overflow-x-auto {}", state.class_for(id))
        >
            <h3 class="text-lg font-semibold text-[#333333] mb-4">{title}</h3>
            <table class="min-w-full text-sm">
                <thead>
                    <tr class="text-left text-gray-600 border-b">
                        <th class="py-2 px-3">"Paciente"</th>
                        <th class="py-2 px-3">"Documento"</th>
                        <th class="py-2 px-3">"Área"</th>
                        <th class="py-2 px-3">"Ingreso"</th>
                        <th class="py-2 px-3">"Tiempo total"</th>
                        <th class="py-2 px-3">"Estado"</th>
                        <th class="py-2 px-3"></th>
                    </tr>
                </thead>
                <tbody>
                    {patients
                        .into_iter()
                        .map(|patient| view! { <PatientRow kind=kind patient=patient /> })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}

/// A summary row followed by its detail row
#[component]
fn PatientRow(kind: TableKind, patient: &'static Patient) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let patient_id = patient.id;

    let row_state = create_memo(move |_| {
        state
            .dashboard
            .with(|d| d.table(kind).state(patient_id).unwrap_or_default())
    });

    let admitted = patient
        .admitted_at()
        .map(|at| at.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_else(|| patient.admitted_at.to_string());

    view! {
        <tr
            class="border-b hover:bg-gray-50 cursor-pointer"
            on:click=move |_| state.dispatch(Event::ToggleRow { table: kind, patient_id })
        >
            <td class="py-2 px-3 font-medium">{patient.name}</td>
            <td class="py-2 px-3">{patient.document}</td>
            <td class="py-2 px-3">{patient.area.label()}</td>
            <td class="py-2 px-3">{admitted}</td>
            <td class="py-2 px-3">{format!("{} min", patient.total_minutes)}</td>
            <td class="py-2 px-3">
                <span class=format!("px-2 py-1 rounded-full text-xs {}", patient.status.badge_class())>
                    {patient.status.label()}
                </span>
            </td>
            <td class="py-2 px-3 text-right">
                <i class=move || format!("fas {}", row_state.get().icon_class())></i>
            </td>
        </tr>
        <tr style:display=move || row_state.get().detail_display()>
            <td colspan="7" class="bg-gray-50 px-6 py-3">
                <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-3">
                    {patient
                        .stage_details()
                        .into_iter()
                        .map(|detail| view! { <StageCell detail=detail /> })
                        .collect_view()}
                </div>
            </td>
        </tr>
    }
}

#[component]
fn StageCell(detail: StageDetail) -> impl IntoView {
    let minutes = detail
        .minutes
        .map(|m| format!("{} min", m))
        .unwrap_or_else(|| "—".to_string());
    let difference_class = if detail.is_favorable() {
        "text-xs text-[#28a745]"
    } else {
        "text-xs text-[#B75353]"
    };

    view! {
        <div class="flex items-start space-x-2">
            <i class=detail.status.icon_class() title=detail.status.label()></i>
            <div>
                <div class="text-xs text-gray-500">{detail.stage.label()}</div>
                <div class="font-semibold">
                    {minutes}
                    " "
                    <span class=difference_class>{detail.difference_label()}</span>
                </div>
            </div>
        </div>
    }
}
