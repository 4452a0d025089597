//! Campus Assistant Server Entry Point

use std::net::SocketAddr;

use chrono::Local;
use tracing_subscriber::EnvFilter;

use campus_assistant_agent::ResponseComposer;
use campus_assistant_config::{load_settings, AcademicCalendar, Settings, WeeklyTimetable};
use campus_assistant_persistence::demo_stores;
use campus_assistant_server::{create_router, init_metrics, AppState, ServerError};
use campus_assistant_text_processing::create_translator;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // Priority: env vars > config/{env}.toml > config/default.toml > defaults
    let env = std::env::var("CAMPUS_ENV").ok();
    let settings = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Tracing not yet initialized, use eprintln for early logging
            eprintln!("Warning: failed to load config: {e}. Using defaults.");
            Settings::default()
        }
    };

    init_tracing(&settings);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?settings.environment,
        "Starting Campus Assistant Server"
    );

    let metrics_handle = init_metrics();
    if metrics_handle.is_some() {
        tracing::info!("Initialized Prometheus metrics at /metrics");
    }

    // Datasets degrade to "unavailable" replies when missing
    let timetable = match WeeklyTimetable::load(&settings.datasets.timetable) {
        Ok(timetable) => Some(timetable),
        Err(e) => {
            tracing::warn!(path = %settings.datasets.timetable, error = %e, "Timetable dataset not loaded");
            None
        }
    };
    let calendar = match AcademicCalendar::load(&settings.datasets.calendar) {
        Ok(calendar) => Some(calendar),
        Err(e) => {
            tracing::warn!(path = %settings.datasets.calendar, error = %e, "Calendar dataset not loaded");
            None
        }
    };

    let translator = create_translator(&settings.translation);
    let stores = demo_stores(Local::now().date_naive());

    let mut composer = ResponseComposer::new(
        stores.documents,
        stores.faqs,
        stores.attendance,
        stores.lectures,
        translator,
    );
    if let Some(timetable) = timetable {
        composer = composer.with_timetable(timetable);
    }
    if let Some(calendar) = calendar {
        composer = composer.with_calendar(calendar);
    }

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .map_err(|e| ServerError::Bind(format!("invalid listen address: {e}")))?;

    let state = AppState::new(settings, composer);
    let router = create_router(state, metrics_handle);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::Bind(e.to_string()))?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, router)
        .await
        .map_err(|e| ServerError::Internal(e.to_string()))?;

    Ok(())
}

/// Initialize tracing; JSON output in production, pretty elsewhere
fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.environment.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
