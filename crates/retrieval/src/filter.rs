//! Hierarchical document filter
//!
//! Deterministic subject → unit → type narrowing, the precise
//! counterpart to the TF-IDF ranker. Each step operates on the
//! survivors of the previous step and short-circuits to empty when it
//! eliminates everything; a subject that was clearly asked for but
//! cannot be resolved also returns empty instead of falling through to
//! an unfiltered set.

use campus_assistant_config::constants::retrieval::MIN_SUBJECT_TOKEN_LEN;
use campus_assistant_core::{DocType, Document};

/// Discipline words and abbreviations that signal the student named a
/// subject, even when no stored subject matches
const SUBJECT_KEYWORDS: [&str; 21] = [
    "se",
    "daa",
    "dvd",
    "ep",
    "toc",
    "aws",
    "pce",
    "software",
    "engineering",
    "design",
    "algorithm",
    "data",
    "visualization",
    "analytics",
    "enterprise",
    "programming",
    "theory",
    "computation",
    "professionalism",
    "corporate",
    "ethics",
];

/// Query word → document type synonym table
const DOC_TYPE_SYNONYMS: [(&str, DocType); 14] = [
    ("ppt", DocType::Ppt),
    ("powerpoint", DocType::Ppt),
    ("presentation", DocType::Ppt),
    ("notes", DocType::Notes),
    ("note", DocType::Notes),
    ("syllabus", DocType::Syllabus),
    ("syllabi", DocType::Syllabus),
    ("assignment", DocType::Assignment),
    ("assignments", DocType::Assignment),
    ("circular", DocType::Circular),
    ("circulars", DocType::Circular),
    ("question", DocType::QuestionPaper),
    ("paper", DocType::QuestionPaper),
    ("exam", DocType::QuestionPaper),
];

/// Subject → unit → type narrowing filter
#[derive(Debug, Clone, Copy, Default)]
pub struct HierarchicalFilter;

impl HierarchicalFilter {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the requested subject against the store's distinct
    /// subject labels: exact token match first, then substring match for
    /// query tokens longer than three characters
    fn requested_subject<'a>(query_words: &[&str], subjects: &'a [String]) -> Option<&'a String> {
        for word in query_words {
            if let Some(subject) = subjects.iter().find(|s| s.to_lowercase() == *word) {
                return Some(subject);
            }
        }

        subjects.iter().find(|subject| {
            let subject_lower = subject.to_lowercase();
            query_words.iter().any(|word| {
                word.chars().count() > MIN_SUBJECT_TOKEN_LEN && subject_lower.contains(*word)
            })
        })
    }

    /// First purely-numeric query token, the requested unit
    fn requested_unit(query_words: &[&str]) -> Option<u32> {
        query_words
            .iter()
            .find(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_digit()))
            .and_then(|word| word.parse().ok())
    }

    /// Requested document type via the synonym table
    fn requested_type(query_words: &[&str]) -> Option<DocType> {
        for word in query_words {
            if let Some((_, doc_type)) = DOC_TYPE_SYNONYMS.iter().find(|(syn, _)| syn == word) {
                return Some(*doc_type);
            }
        }
        None
    }

    /// Narrow documents by subject, then unit, then type
    ///
    /// `subjects` is the distinct subject list from the store, which may
    /// be wider than the candidate set.
    pub fn filter(
        &self,
        query: &str,
        documents: &[Document],
        subjects: &[String],
    ) -> Vec<Document> {
        let query = query.to_lowercase();
        let query_words: Vec<&str> = query.split_whitespace().collect();

        let requested_subject = Self::requested_subject(&query_words, subjects);

        let mut filtered: Vec<Document> = documents.to_vec();

        // Step 1: subject
        match requested_subject {
            Some(subject) => {
                filtered.retain(|doc| doc.subject.eq_ignore_ascii_case(subject));
                if filtered.is_empty() {
                    return Vec::new();
                }
            }
            None => {
                // A subject was named but none resolved: explicit miss
                if SUBJECT_KEYWORDS.iter().any(|k| query.contains(k)) {
                    tracing::debug!(query = %query, "Subject keyword present but unresolved");
                    return Vec::new();
                }
            }
        }

        // Step 2: unit
        if let Some(unit) = Self::requested_unit(&query_words) {
            filtered.retain(|doc| doc.unit == Some(unit));
            if filtered.is_empty() {
                return Vec::new();
            }
        }

        // Step 3: type
        if let Some(doc_type) = Self::requested_type(&query_words) {
            filtered.retain(|doc| doc.doc_type == doc_type);
            if filtered.is_empty() {
                return Vec::new();
            }
        }

        filtered
    }
}
