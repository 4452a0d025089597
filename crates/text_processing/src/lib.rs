//! Query understanding for the campus assistant
//!
//! Everything that happens to a message before a handler sees it:
//! - Language detection (two strategies, see `detect`)
//! - Translation (remote service, gloss dictionary, fallback wiring)
//! - Transliterated-query normalization to English search tokens
//! - Regex-table intent classification
//! - Entity extraction (target percentages, numeric tokens)

pub mod detect;
pub mod entities;
pub mod intent;
pub mod normalize;
pub mod translation;

pub use detect::{
    romanized_hint, LanguageDetector, ScriptRatioDetector, ScriptStats, ThresholdDetector,
};
pub use entities::{extract_target_percentage, first_numeric_token, has_target_cue};
pub use intent::IntentClassifier;
pub use normalize::{extract_english_keywords, normalize_to_english};
pub use translation::{
    create_translator, FallbackTranslator, GlossTranslator, NoopTranslator, RemoteTranslator,
    RemoteTranslatorConfig,
};
