//! Core error types

use thiserror::Error;

/// Core errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid time slot: {0}")]
    InvalidTimeSlot(String),

    #[error("Translation error: {0}")]
    Translation(String),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, Error>;
