//! Entity extraction from normalized queries
//!
//! Small extractors shared by the attendance handler: target-percentage
//! cues and values, and the first numeric token used for unit narrowing.

/// Words that signal the student is asking about a target percentage
const TARGET_CUES: [&str; 8] = [
    "target",
    "reach",
    "achieve",
    "kitne",
    "kaise",
    "how many",
    "percentage",
    "%",
];

/// Whether the query carries a target-attendance cue
pub fn has_target_cue(query: &str) -> bool {
    TARGET_CUES.iter().any(|cue| query.contains(cue))
}

/// Extract a target percentage from the query
///
/// Accepts the first bare integer token in 0..=100, or an "NN%" token.
pub fn extract_target_percentage(query: &str) -> Option<u32> {
    for word in query.split_whitespace() {
        if word.chars().all(|c| c.is_ascii_digit()) && !word.is_empty() {
            if let Ok(num) = word.parse::<u32>() {
                if num <= 100 {
                    return Some(num);
                }
            }
        } else if let Some(stripped) = word.strip_suffix('%') {
            if !stripped.is_empty() && stripped.chars().all(|c| c.is_ascii_digit()) {
                if let Ok(num) = stripped.parse::<u32>() {
                    if num <= 100 {
                        return Some(num);
                    }
                }
            }
        }
    }
    None
}

/// First purely-numeric token in the query, for unit narrowing
pub fn first_numeric_token(query: &str) -> Option<u32> {
    query
        .split_whitespace()
        .find(|word| !word.is_empty() && word.chars().all(|c| c.is_ascii_digit()))
        .and_then(|word| word.parse().ok())
}
