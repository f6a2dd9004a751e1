//! Flowboard CLI
//!
//! Drives the dashboard view-model without a browser:
//! - Print the Chart.js configuration of every widget
//! - Search the patient roster
//! - Replay a sequence of UI events and show the resulting state
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flowboard::config::{generate_default_config, Config, LoadedConfig, LoggingConfig};
use flowboard::search::NO_RESULTS_MESSAGE;
use flowboard::{Dashboard, Effect, Event, TableKind};

#[derive(Parser)]
#[command(name = "flowboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Patient-flow metrics dashboard")]
#[command(long_about = "Flowboard shows emergency department process times per patient and per group.\nThis tool drives the dashboard model from the command line.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print Chart.js configurations
    Charts {
        /// Only this canvas id (e.g. barChart, gaugeLab)
        #[arg(long)]
        id: Option<String>,
    },

    /// Search the patient roster by name or document
    Search {
        /// Query text
        query: String,
    },

    /// Replay UI events, e.g. `tab:group focus blur elapse row:group:2 export:pdf`
    Simulate {
        /// Events in order; `elapse` fires the pending search-hide timer
        events: Vec<String>,
    },

    /// Print or write the default configuration
    InitConfig {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => LoadedConfig {
            config: Config::load_with_env(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            source: Some(path.clone()),
            errors: Vec::new(),
        },
        None => Config::load_default(),
    };
    init_logging(&loaded.config.logging);

    for error in &loaded.errors {
        tracing::warn!("{}", error);
    }
    match &loaded.source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }
    let config = loaded.config;

    tracing::debug!("Flowboard v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Charts { id } => print_charts(&config, id.as_deref()),
        Commands::Search { query } => print_search(&config, &query, &cli.format),
        Commands::Simulate { events } => simulate(&config, &events, &cli.format),
        Commands::InitConfig { output } => init_config(output),
    }
}

fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("flowboard={}", config.level)));

    let registry = tracing_subscriber::registry().with(filter);
    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_charts(config: &Config, id: Option<&str>) -> anyhow::Result<()> {
    let dashboard = Dashboard::new(config.dashboard.clone())?;
    let charts = dashboard.charts();

    let output = match id {
        Some(id) => charts.get(id)?.to_config(),
        None => charts
            .charts()
            .iter()
            .map(|chart| json!({ "canvas": chart.canvas_id, "config": chart.to_config() }))
            .collect(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_search(config: &Config, query: &str, format: &str) -> anyhow::Result<()> {
    let dashboard = Dashboard::new(config.dashboard.clone())?;
    let results = dashboard
        .roster()
        .search(query, dashboard.settings().search_min_chars);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("{}", NO_RESULTS_MESSAGE);
    }
    for patient in results {
        println!(
            "{:>3}  {:<32} {:<12} {:<16} {}",
            patient.id,
            patient.name,
            patient.document,
            patient.area.label(),
            patient.status.label()
        );
    }
    Ok(())
}

fn simulate(config: &Config, events: &[String], format: &str) -> anyhow::Result<()> {
    let mut dashboard = Dashboard::new(config.dashboard.clone())?;
    let mut log = Vec::new();

    for token in events {
        let event = if token == "elapse" {
            match dashboard.search().pending_hide() {
                Some(ticket) => Event::SearchHideElapsed(ticket),
                None => {
                    log.push(format!("{}: no pending hide", token));
                    continue;
                }
            }
        } else {
            match token.parse::<Event>() {
                Ok(event) => event,
                Err(e) => {
                    tracing::warn!("Skipping {:?}: {}", token, e);
                    log.push(format!("{}: {}", token, e));
                    continue;
                }
            }
        };

        // A failing handler only aborts itself
        match dashboard.dispatch(event) {
            Ok(effects) if effects.is_empty() => log.push(format!("{}: ok", token)),
            Ok(effects) => {
                for effect in effects {
                    log.push(format!("{}: {}", token, describe(&effect)));
                }
            }
            Err(e) => {
                tracing::warn!("Event {:?} failed: {}", token, e);
                log.push(format!("{}: error: {}", token, e));
            }
        }
    }

    let view = dashboard.view();
    if format == "json" {
        let rows = |kind: TableKind| -> Vec<serde_json::Value> {
            dashboard
                .table(kind)
                .rows()
                .iter()
                .map(|row| json!({ "patient": row.patient.id, "state": row.state }))
                .collect()
        };
        let state = json!({
            "events": log,
            "mode": view.mode(),
            "visibility": view
                .snapshot()
                .iter()
                .map(|(selector, visible)| json!({ "selector": selector.to_string(), "visible": visible }))
                .collect::<Vec<_>>(),
            "search": {
                "query": dashboard.search().query(),
                "results_visible": dashboard.search().results_visible(),
            },
            "rows": { "individual": rows(TableKind::Individual), "group": rows(TableKind::Group) },
            "report_type": dashboard.report_type(),
            "area_selector_visible": dashboard.area_selector_visible(),
            "area": dashboard.area(),
            "dates": dashboard.dates(),
        });
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    for line in &log {
        println!("{}", line);
    }
    println!();
    println!("mode: {}", view.mode());
    for (selector, visible) in view.snapshot() {
        println!("  {:<36} {}", selector.to_string(), if visible { "visible" } else { "hidden" });
    }
    println!(
        "search: {:?} (results {})",
        dashboard.search().query(),
        if dashboard.search().results_visible() { "shown" } else { "hidden" }
    );
    for kind in [TableKind::Individual, TableKind::Group] {
        for row in dashboard.table(kind).rows() {
            println!(
                "  {} row {}: {} ({})",
                kind,
                row.patient.id,
                row.state.detail_display(),
                row.state.icon_class()
            );
        }
    }
    println!(
        "area selector: {}",
        if dashboard.area_selector_visible() { "visible" } else { "hidden" }
    );
    Ok(())
}

fn describe(effect: &Effect) -> String {
    match effect {
        Effect::Notify(notification) => format!("notify {:?}", notification.message),
        Effect::ScheduleHide { ticket, delay } => {
            format!("schedule {} in {}ms", ticket, delay.as_millis())
        }
        Effect::CancelHide(ticket) => format!("cancel {}", ticket),
    }
}

fn init_config(output: Option<PathBuf>) -> anyhow::Result<()> {
    let content = generate_default_config();
    match output {
        Some(path) => {
            std::fs::write(&path, content)
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!("Wrote default config to {:?}", path);
        }
        None => print!("{}", content),
    }
    Ok(())
}
