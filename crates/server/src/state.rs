//! Application State
//!
//! Shared state across all handlers.

use std::sync::Arc;

use campus_assistant_agent::ResponseComposer;
use campus_assistant_config::Settings;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// Configuration snapshot taken at startup
    pub settings: Arc<Settings>,
    /// The per-message orchestrator
    pub composer: Arc<ResponseComposer>,
}

impl AppState {
    /// Create new application state
    pub fn new(settings: Settings, composer: ResponseComposer) -> Self {
        Self {
            settings: Arc::new(settings),
            composer: Arc::new(composer),
        }
    }
}
