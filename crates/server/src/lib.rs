//! Campus Assistant Server
//!
//! HTTP endpoints over the response composer: chat, language-detection
//! diagnostics, health, and metrics.

pub mod http;
pub mod metrics;
pub mod state;

pub use http::{create_router, ChatRequest, ChatResponse};
pub use metrics::{init_metrics, record_chat_latency, record_request};
pub use state::AppState;

use thiserror::Error;

/// Server errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Bind error: {0}")]
    Bind(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
