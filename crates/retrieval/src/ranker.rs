//! Relevance ranking
//!
//! TF-IDF cosine scoring of a query against candidate documents, and the
//! single-pair FAQ matcher used by the general-intent handler.

use campus_assistant_config::constants::retrieval::{
    FAQ_MATCH_THRESHOLD, MAX_DOCUMENT_RESULTS, RANK_SCORE_FLOOR,
};
use campus_assistant_core::{Document, Faq};

use crate::tfidf::{cosine, similarity, TfIdfVectorizer};

/// Ranker configuration
#[derive(Debug, Clone)]
pub struct RankerConfig {
    /// Maximum results returned
    pub max_results: usize,
    /// Results scoring at or below this are dropped
    pub score_floor: f64,
}

impl Default for RankerConfig {
    fn default() -> Self {
        Self {
            max_results: MAX_DOCUMENT_RESULTS,
            score_floor: RANK_SCORE_FLOOR,
        }
    }
}

/// TF-IDF document ranker
#[derive(Debug, Clone, Default)]
pub struct RelevanceRanker {
    config: RankerConfig,
}

impl RelevanceRanker {
    pub fn new(config: RankerConfig) -> Self {
        Self { config }
    }

    /// Text representation of a candidate document
    ///
    /// Extracted full text is preferred; metadata stands in when
    /// extraction produced nothing.
    fn candidate_text(doc: &Document) -> String {
        let mut text = if !doc.extracted_text.is_empty() {
            format!("{} {} {}", doc.title, doc.subject, doc.extracted_text)
        } else {
            format!(
                "{} {} {} {}",
                doc.title, doc.subject, doc.description, doc.doc_type
            )
        };
        if let Some(unit) = doc.unit {
            text.push_str(&format!(" unit {unit}"));
        }
        text
    }

    /// Rank candidates against a query
    ///
    /// Returns the top matches above the score floor, best first; empty
    /// on a degenerate corpus rather than an error.
    pub fn rank(&self, query: &str, candidates: &[Document]) -> Vec<Document> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let texts: Vec<String> = candidates.iter().map(Self::candidate_text).collect();
        let mut corpus: Vec<&str> = texts.iter().map(|s| s.as_str()).collect();
        corpus.push(query);

        let Some(vectorizer) = TfIdfVectorizer::fit(&corpus) else {
            tracing::debug!("Degenerate ranking corpus, returning no matches");
            return Vec::new();
        };

        let query_vector = vectorizer.vector(query);
        let mut scored: Vec<(usize, f64)> = texts
            .iter()
            .enumerate()
            .map(|(index, text)| (index, cosine(&query_vector, &vectorizer.vector(text))))
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        scored
            .into_iter()
            .take(self.config.max_results)
            .filter(|(_, score)| *score > self.config.score_floor)
            .map(|(index, _)| candidates[index].clone())
            .collect()
    }
}

/// Best-match FAQ lookup
#[derive(Debug, Clone, Copy, Default)]
pub struct FaqMatcher;

impl FaqMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Highest-similarity FAQ above the acceptance threshold
    ///
    /// Strictly-greater comparison keeps the earliest-seen candidate on
    /// exact score ties.
    pub fn best_match<'a>(&self, query: &str, faqs: &'a [Faq]) -> Option<&'a Faq> {
        let mut best: Option<&Faq> = None;
        let mut highest = 0.0;

        for faq in faqs {
            let score = similarity(query, &faq.question.to_lowercase());
            if score > highest && score > FAQ_MATCH_THRESHOLD {
                highest = score;
                best = Some(faq);
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_assistant_core::{DocType, FaqCategory};

    fn doc(id: u64, title: &str, subject: &str, doc_type: DocType, unit: Option<u32>) -> Document {
        Document {
            id,
            title: title.to_string(),
            description: String::new(),
            subject: subject.to_string(),
            unit,
            doc_type,
            extracted_text: String::new(),
            is_active: true,
        }
    }

    #[test]
    fn test_rank_prefers_matching_subject() {
        let ranker = RelevanceRanker::default();
        let candidates = vec![
            doc(1, "Unit 2 Slides", "Software Engineering", DocType::Ppt, Some(2)),
            doc(2, "Mess Menu", "Hostel", DocType::Circular, None),
        ];
        let results = ranker.rank("software engineering unit 2 ppt", &candidates);
        assert!(!results.is_empty());
        assert_eq!(results[0].id, 1);
    }

    #[test]
    fn test_rank_caps_results_at_five() {
        let ranker = RelevanceRanker::default();
        let candidates: Vec<Document> = (0..8)
            .map(|i| {
                doc(
                    i,
                    &format!("Software Engineering Notes {i}"),
                    "Software Engineering",
                    DocType::Notes,
                    None,
                )
            })
            .collect();
        let results = ranker.rank("software engineering notes", &candidates);
        assert!(results.len() <= 5);
        assert!(!results.is_empty());
    }

    #[test]
    fn test_rank_drops_low_scores() {
        let ranker = RelevanceRanker::default();
        let candidates = vec![doc(1, "Mess Menu", "Hostel", DocType::Circular, None)];
        let results = ranker.rank("software engineering unit 2 ppt", &candidates);
        assert!(results.is_empty());
    }

    #[test]
    fn test_rank_empty_candidates() {
        let ranker = RelevanceRanker::default();
        assert!(ranker.rank("anything", &[]).is_empty());
    }

    #[test]
    fn test_rank_degenerate_corpus() {
        let ranker = RelevanceRanker::default();
        let candidates = vec![doc(1, "", "", DocType::Notes, None)];
        // Query and candidate tokenize to nothing useful
        let results = ranker.rank("", &candidates);
        assert!(results.is_empty());
    }

    #[test]
    fn test_rank_uses_extracted_text() {
        let ranker = RelevanceRanker::default();
        let mut with_text = doc(1, "Week 3", "Software Engineering", DocType::Notes, None);
        with_text.extracted_text =
            "requirements elicitation interviews and prototyping techniques".to_string();
        let other = doc(2, "Week 4", "Software Engineering", DocType::Notes, None);
        let results = ranker.rank("requirements elicitation techniques", &[with_text, other]);
        assert!(!results.is_empty());
        assert_eq!(results[0].id, 1);
    }

    fn faq(question: &str, answer: &str) -> Faq {
        Faq {
            question: question.to_string(),
            answer: answer.to_string(),
            category: FaqCategory::General,
        }
    }

    #[test]
    fn test_faq_best_match() {
        let matcher = FaqMatcher::new();
        let faqs = vec![
            faq("When is the exam form deadline?", "November 15th."),
            faq("What are the hostel fees?", "25,000 per semester."),
        ];
        let hit = matcher.best_match("what are the hostel fees", &faqs).unwrap();
        assert_eq!(hit.answer, "25,000 per semester.");
    }

    #[test]
    fn test_faq_below_threshold_is_none() {
        let matcher = FaqMatcher::new();
        let faqs = vec![faq("When is the exam form deadline?", "November 15th.")];
        assert!(matcher
            .best_match("tell me a joke about compilers", &faqs)
            .is_none());
    }

    #[test]
    fn test_faq_tie_keeps_earliest() {
        let matcher = FaqMatcher::new();
        let faqs = vec![
            faq("What are the hostel fees?", "first"),
            faq("What are the hostel fees?", "second"),
        ];
        let hit = matcher.best_match("what are the hostel fees", &faqs).unwrap();
        assert_eq!(hit.answer, "first");
    }
}
