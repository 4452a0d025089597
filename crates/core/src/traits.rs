//! Store and translator traits
//!
//! The stores are external collaborators (relational store, session
//! layer, file storage); the assistant only reads through these
//! interfaces. The translator is injected so the composer never holds a
//! process-wide client, and tests can run with a no-op implementation.

use async_trait::async_trait;
use chrono::{NaiveDate, Weekday};

use crate::domain::{AttendanceRecord, DocType, Document, Faq, Lecture, StudentId};
use crate::error::Result;
use crate::language::Language;

/// Filter for document listing; all fields are conjunctive
#[derive(Debug, Clone, Default)]
pub struct DocumentFilter {
    pub active: Option<bool>,
    /// Matched case-insensitively against the document subject
    pub subject: Option<String>,
    pub doc_type: Option<DocType>,
    pub unit: Option<u32>,
}

impl DocumentFilter {
    /// Only documents currently visible to students
    pub fn active() -> Self {
        Self {
            active: Some(true),
            ..Default::default()
        }
    }

    /// Whether a document passes the filter
    pub fn matches(&self, doc: &Document) -> bool {
        if let Some(active) = self.active {
            if doc.is_active != active {
                return false;
            }
        }
        if let Some(ref subject) = self.subject {
            if !doc.subject.eq_ignore_ascii_case(subject) {
                return false;
            }
        }
        if let Some(doc_type) = self.doc_type {
            if doc.doc_type != doc_type {
                return false;
            }
        }
        if let Some(unit) = self.unit {
            if doc.unit != Some(unit) {
                return false;
            }
        }
        true
    }
}

/// Read access to the document store
pub trait DocumentStore: Send + Sync {
    /// List documents matching the filter, in upload order
    fn list(&self, filter: &DocumentFilter) -> Vec<Document>;

    /// Distinct subjects present in the store
    fn subjects(&self) -> Vec<String>;
}

/// Read access to the FAQ store
pub trait FaqStore: Send + Sync {
    fn list(&self) -> Vec<Faq>;
}

/// Read access to per-student attendance counters
pub trait AttendanceStore: Send + Sync {
    /// Records for a student, optionally restricted to one subject
    /// (matched case-insensitively)
    fn list(&self, student: StudentId, subject: Option<&str>) -> Vec<AttendanceRecord>;
}

/// Read access to a student's scheduled lectures
pub trait LectureStore: Send + Sync {
    /// Lectures scheduled for the student on the given weekday and date
    fn today(&self, student: StudentId, weekday: Weekday, date: NaiveDate) -> Vec<Lecture>;
}

/// Translation interface
///
/// Implementations:
/// - `RemoteTranslator` - HTTP translation service
/// - `GlossTranslator` - curated dictionary
/// - `FallbackTranslator` - remote with dictionary fallback
/// - `NoopTranslator` - pass-through (tests, disabled)
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate text between languages
    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String>;

    /// Check if a language pair is supported
    fn supports_pair(&self, from: Language, to: Language) -> bool;

    /// Get translator name for logging
    fn name(&self) -> &str;
}
