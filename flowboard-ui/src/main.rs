//! Flowboard Dashboard
//!
//! Emergency department patient-flow dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Individual and group report tabs
//! - Patient search with a result list
//! - Expandable per-stage patient rows
//! - Chart.js timeline, bar, radar and SLA gauge charts
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All state lives in the `flowboard` view-model; components
//! render from it and forward DOM events to it.

use leptos::*;

mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
