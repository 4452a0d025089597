//! Configuration management for the campus assistant
//!
//! Supports loading configuration from:
//! - TOML files under config/
//! - Environment variables (CAMPUS__ prefix)
//!
//! Also owns the static schedule datasets (weekly timetable, academic
//! calendar), parsed into typed structures at the load boundary, and the
//! centralized threshold constants.

pub mod constants;
pub mod datasets;
pub mod settings;

pub use datasets::{
    AcademicCalendar, DaySchedule, FacultyClass, FacultyInfo, TimetableSlot, WeeklyTimetable,
};
pub use settings::{
    load_settings, DatasetPaths, RuntimeEnvironment, ServerConfig, Settings, TranslationProvider,
    TranslationSettings,
};

use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Dataset loading errors
///
/// `Unavailable` covers missing or unreadable files, `Malformed` covers
/// files that read but do not match the expected schema. Both degrade to
/// a user-visible "data unavailable" reply downstream.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Dataset unavailable: {0}")]
    Unavailable(String),

    #[error("Dataset malformed: {0}")]
    Malformed(String),
}
