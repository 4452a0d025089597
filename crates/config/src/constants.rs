//! Centralized constants
//!
//! Tunables shared across the retrieval and dispatch crates live here so
//! each threshold has a single owner.

/// Retrieval thresholds
pub mod retrieval {
    /// Maximum documents presented for one request
    pub const MAX_DOCUMENT_RESULTS: usize = 5;

    /// Ranked documents at or below this cosine score are dropped
    pub const RANK_SCORE_FLOOR: f64 = 0.1;

    /// Minimum similarity for an FAQ answer to be used
    pub const FAQ_MATCH_THRESHOLD: f64 = 0.3;

    /// Query tokens must be longer than this to participate in subject
    /// substring matching
    pub const MIN_SUBJECT_TOKEN_LEN: usize = 3;
}

/// Language detection thresholds
pub mod detection {
    /// Script character count at which a message is attributed to that
    /// script's language
    pub const SCRIPT_CHAR_MIN: usize = 2;

    /// Script character share of the whole message at which the message
    /// is attributed to that script's language
    pub const SCRIPT_RATIO_MIN: f64 = 0.1;
}
