//! Intent classification
//!
//! Ordered regex pattern table mapping a lowercased query to one of the
//! seven intents. Categories are scanned in a fixed priority order and
//! the first category with any matching pattern wins; a query matching
//! nothing is `General`. The table covers English tokens and common
//! Hindi/Gujarati transliterations (haziri, samay, abhi) so intent lands
//! before translation runs.

use regex::Regex;

use campus_assistant_core::Intent;

/// One intent category with its patterns, in priority order
const PATTERN_TABLE: &[(Intent, &[&str])] = &[
    (
        Intent::DocumentRequest,
        &[
            r"(send|give|provide|get|need|want|chahiye|joiye).*(ppt|notes|pdf|document|file|syllabus|assignment)",
            r"(ppt|notes|pdf|document|file|syllabus|assignment).*(send|give|provide|get|need|want|chahiye|joiye)",
            r"(unit|chapter).*\d+",
        ],
    ),
    (
        Intent::AttendanceQuery,
        &[
            r"attendance|haziri|upasthiti|kitna|percentage|%",
            r"how many.*class|kitni.*class",
        ],
    ),
    (
        Intent::TimetableQuery,
        &[
            r"(timetable|schedule|time table|samay|vartaman)",
            r"(current|now|abhi|aj).*(class|lecture|period)",
        ],
    ),
    (
        Intent::FacultyQuery,
        &[
            r"(faculty|teacher|professor|sir|maam|madam)",
            r"(email|contact|phone|number)",
            r"(schedule|timing|office hours)",
        ],
    ),
    (
        Intent::CurrentLecture,
        &[
            r"(current|now|abhi).*(lecture|class|period)",
            r"which.*(lecture|class).*now",
        ],
    ),
    (
        Intent::AcademicCalendar,
        &[r"(calendar|academic calendar|holiday|vacation|exam)"],
    ),
];

/// Regex-table intent classifier
pub struct IntentClassifier {
    categories: Vec<(Intent, Vec<Regex>)>,
}

impl IntentClassifier {
    /// Compile the pattern table; malformed patterns are skipped with a
    /// warning rather than failing construction
    pub fn new() -> Self {
        let categories = PATTERN_TABLE
            .iter()
            .map(|(intent, patterns)| {
                let compiled = patterns
                    .iter()
                    .filter_map(|pattern| match Regex::new(&format!("(?i){pattern}")) {
                        Ok(regex) => Some(regex),
                        Err(e) => {
                            tracing::warn!(
                                intent = intent.as_str(),
                                pattern,
                                error = %e,
                                "Failed to compile intent pattern, skipping"
                            );
                            None
                        }
                    })
                    .collect();
                (*intent, compiled)
            })
            .collect();

        Self { categories }
    }

    /// Classify a lowercased query; pure and deterministic
    pub fn classify(&self, query: &str) -> Intent {
        for (intent, patterns) in &self.categories {
            if patterns.iter().any(|p| p.is_match(query)) {
                return *intent;
            }
        }
        Intent::General
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_request_both_orders() {
        let classifier = IntentClassifier::new();
        assert_eq!(
            classifier.classify("send me the se ppt"),
            Intent::DocumentRequest
        );
        assert_eq!(
            classifier.classify("ppt of unit 2 send karo"),
            Intent::DocumentRequest
        );
    }

    #[test]
    fn test_document_request_unit_number() {
        let classifier = IntentClassifier::new();
        assert_eq!(classifier.classify("unit 3 of toc"), Intent::DocumentRequest);
        assert_eq!(classifier.classify("chapter 5"), Intent::DocumentRequest);
    }

    #[test]
    fn test_document_request_transliterated() {
        let classifier = IntentClassifier::new();
        assert_eq!(
            classifier.classify("mujhe se ka notes chahiye"),
            Intent::DocumentRequest
        );
    }

    #[test]
    fn test_attendance_query() {
        let classifier = IntentClassifier::new();
        assert_eq!(
            classifier.classify("what is my attendance in daa"),
            Intent::AttendanceQuery
        );
        assert_eq!(classifier.classify("meri haziri kitni hai"), Intent::AttendanceQuery);
        assert_eq!(
            classifier.classify("how many more class do i need"),
            Intent::AttendanceQuery
        );
    }

    #[test]
    fn test_timetable_query() {
        let classifier = IntentClassifier::new();
        assert_eq!(classifier.classify("show my timetable"), Intent::TimetableQuery);
        assert_eq!(
            classifier.classify("aj ka class batao"),
            Intent::TimetableQuery
        );
    }

    #[test]
    fn test_faculty_query() {
        let classifier = IntentClassifier::new();
        assert_eq!(
            classifier.classify("who is the software engineering professor"),
            Intent::FacultyQuery
        );
        assert_eq!(
            classifier.classify("email of gaurav sir"),
            Intent::FacultyQuery
        );
    }

    #[test]
    fn test_current_lecture_reachable_via_which_now() {
        let classifier = IntentClassifier::new();
        // "now" after "class" misses the timetable pattern but hits the
        // current-lecture "which ... now" phrasing
        assert_eq!(
            classifier.classify("which class is going on now"),
            Intent::CurrentLecture
        );
    }

    #[test]
    fn test_academic_calendar() {
        let classifier = IntentClassifier::new();
        assert_eq!(
            classifier.classify("when is the diwali vacation"),
            Intent::AcademicCalendar
        );
    }

    #[test]
    fn test_general_fallback() {
        let classifier = IntentClassifier::new();
        assert_eq!(classifier.classify("what are the hostel fees"), Intent::General);
        assert_eq!(classifier.classify(""), Intent::General);
    }

    #[test]
    fn test_priority_order_is_stable() {
        let classifier = IntentClassifier::new();
        // Mentions both a document noun and attendance; the document
        // category is scanned first
        assert_eq!(
            classifier.classify("i need the attendance notes"),
            Intent::DocumentRequest
        );
    }

    #[test]
    fn test_pure_function() {
        let classifier = IntentClassifier::new();
        let query = "send me the se ppt";
        assert_eq!(classifier.classify(query), classifier.classify(query));
    }
}
