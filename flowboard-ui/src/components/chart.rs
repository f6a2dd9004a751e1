//! Chart Component
//!
//! Canvas widgets rendered by Chart.js. The configuration comes from the
//! view-model's chart catalogue.

use flowboard::view::ids;
use flowboard::Stage;
use leptos::*;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use crate::state::DashboardState;

#[wasm_bindgen]
extern "C" {
    /// `window.Chart`, loaded from the page
    #[wasm_bindgen(js_name = Chart)]
    type ChartJs;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<ChartJs, JsValue>;

    #[wasm_bindgen(method)]
    fn destroy(this: &ChartJs);
}

/// A canvas bound to one chart of the catalogue
#[component]
pub fn ChartCanvas(
    /// Canvas id, e.g. `barChart`
    canvas_id: &'static str,
    #[prop(optional)]
    title: Option<&'static str>,
) -> impl IntoView {
    let canvas_ref = bind_chart(canvas_id);

    view! {
        <div class="bg-white rounded-lg shadow-md p-4">
            {title.map(|title| view! {
                <h3 class="text-lg font-semibold text-[#333333] mb-2">{title}</h3>
            })}
            <div class="chart-container relative h-80 w-full">
                <canvas id=canvas_id node_ref=canvas_ref />
            </div>
        </div>
    }
}

/// Render the catalogue chart for `canvas_id` once its canvas is mounted,
/// and destroy it when the owner is cleaned up.
fn bind_chart(canvas_id: &'static str) -> NodeRef<html::Canvas> {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();
    let instance = store_value(None::<ChartJs>);

    create_effect(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };

        let config = state
            .dashboard
            .with_untracked(|d| d.charts().get(canvas_id).map(|chart| chart.to_config()));
        let config = match config {
            Ok(config) => config,
            Err(e) => {
                web_sys::console::error_1(&format!("Chart {}: {}", canvas_id, e).into());
                return;
            }
        };

        match render_chart(&canvas, &config) {
            Ok(chart) => instance.update_value(|current| {
                if let Some(old) = current.replace(chart) {
                    old.destroy();
                }
            }),
            Err(e) => {
                web_sys::console::error_2(&format!("Chart {} failed:", canvas_id).into(), &e);
            }
        }
    });

    on_cleanup(move || {
        instance.update_value(|current| {
            if let Some(chart) = current.take() {
                chart.destroy();
            }
        });
    });

    canvas_ref
}

/// Hand a configuration to Chart.js
fn render_chart(canvas: &HtmlCanvasElement, config: &serde_json::Value) -> Result<ChartJs, JsValue> {
    let config = js_sys::JSON::parse(&config.to_string())?;
    ChartJs::new(canvas, &config)
}

/// The SLA compliance section: one gauge per stage
#[component]
pub fn SlaGauges() -> impl IntoView {
    view! {
        <section id=ids::SLA_COMPLIANCE class="bg-white rounded-lg shadow-md p-4 mb-6">
            <h3 class="text-lg font-semibold text-[#333333] mb-4">"Cumplimiento de SLA"</h3>
            <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-6 gap-4">
                {Stage::all()
                    .iter()
                    .map(|stage| view! { <SlaGauge stage=*stage /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn SlaGauge(stage: Stage) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let canvas_id = ids::gauge_id(stage);
    let canvas_ref = bind_chart(canvas_id);
    let label = state
        .dashboard
        .with_untracked(|d| d.charts().gauge(stage).map(|gauge| gauge.label()))
        .unwrap_or_default();

    view! {
        <div class="text-center">
            <div class="relative h-32">
                <canvas id=canvas_id node_ref=canvas_ref />
                <div class="absolute inset-0 flex items-center justify-center text-lg font-bold">
                    {label}
                </div>
            </div>
            <div class="flex items-center justify-center space-x-2 mt-2">
                <span class=format!("w-3 h-3 rounded-full {}", stage.traffic_light().css_class()) />
                <span class="text-sm text-gray-600">{stage.label()}</span>
            </div>
        </div>
    }
}
