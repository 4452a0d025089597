//! Core traits and types for the campus assistant
//!
//! This crate provides the foundational pieces used across all other
//! crates:
//! - Domain entities (documents, FAQs, attendance, lectures)
//! - Language and script definitions
//! - Store traits for the external persistence collaborators
//! - The `Translator` trait injected into the response composer
//! - Error types

pub mod domain;
pub mod error;
pub mod language;
pub mod traits;

pub use domain::{
    weekday_lower, AttendanceRecord, DocType, Document, Faq, FaqCategory, Intent, Lecture,
    StudentId, TimeSlot,
};
pub use error::{Error, Result};
pub use language::{Language, Script};
pub use traits::{
    AttendanceStore, DocumentFilter, DocumentStore, FaqStore, LectureStore, Translator,
};
