//! Document-request handler
//!
//! Hierarchical subject → unit → type narrowing first; when that yields
//! nothing the TF-IDF ranker takes a pass over the same candidates.
//! Results render as an HTML list with download links; a miss reports
//! the available subjects as a correction hint.

use campus_assistant_config::constants::retrieval::MAX_DOCUMENT_RESULTS;
use campus_assistant_core::DocumentFilter;

use super::{ComposedResponse, ResponseComposer};

impl ResponseComposer {
    pub(super) fn handle_documents(&self, query: &str) -> Option<ComposedResponse> {
        let active = self.documents.list(&DocumentFilter::active());
        let subjects = self.documents.subjects();

        let mut found = self.filter.filter(query, &active, &subjects);
        if found.is_empty() {
            found = self.ranker.rank(query, &active);
        }

        if found.is_empty() {
            return Some(ComposedResponse::text(format!(
                "I couldn't find documents matching your request. Available subjects: {}. \
                 Please contact admin if you need specific documents.",
                subjects.join(", ")
            )));
        }

        let mut text = String::from("I found these documents for you:\n");
        for doc in found.iter().take(MAX_DOCUMENT_RESULTS) {
            let unit_info = doc
                .unit
                .map(|unit| format!(" (Unit {unit})"))
                .unwrap_or_default();
            text.push_str(&format!(
                "- {} <a href='{}' style='color: #3f51b5; text-decoration: none;' \
                 target='_blank'>{}{}</a>\n",
                doc.doc_type.icon(),
                doc.download_path(),
                doc.title,
                unit_info
            ));
        }

        Some(ComposedResponse::html(text))
    }
}
