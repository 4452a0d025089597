//! Language detection strategies
//!
//! Two detectors coexist deliberately. `ThresholdDetector` is the
//! general-purpose path: a statistical pass first, then Unicode block
//! counting with an absolute threshold. `ScriptRatioDetector` is the
//! stricter variant used at message dispatch, where short mixed-script
//! queries ("SE ka ppt chahiye") need the ratio rule to avoid
//! misattributing a mostly-Latin message. Callers pick the strategy for
//! their call site; do not unify them.

use campus_assistant_config::constants::detection::{SCRIPT_CHAR_MIN, SCRIPT_RATIO_MIN};
use campus_assistant_core::{Language, Script};

/// Language detection interface
pub trait LanguageDetector: Send + Sync {
    /// Detect the language of a text; total, never panics
    fn detect(&self, text: &str) -> Language;

    /// Detector name for logging
    fn name(&self) -> &'static str;
}

/// General-purpose detector: statistical pass, then block counting
///
/// The statistical pass runs whatlang; its verdict is used only when it
/// lands on one of the three supported languages. Anything else
/// (unsupported language, no verdict, empty input) falls back to
/// counting Devanagari and Gujarati block characters with an absolute
/// threshold of more than one character.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdDetector;

impl ThresholdDetector {
    pub fn new() -> Self {
        Self
    }

    fn statistical(text: &str) -> Option<Language> {
        let info = whatlang::detect(text)?;
        match info.lang() {
            whatlang::Lang::Eng => Some(Language::English),
            whatlang::Lang::Hin => Some(Language::Hindi),
            whatlang::Lang::Guj => Some(Language::Gujarati),
            _ => None,
        }
    }
}

impl LanguageDetector for ThresholdDetector {
    fn detect(&self, text: &str) -> Language {
        if text.trim().is_empty() {
            return Language::English;
        }

        if let Some(lang) = Self::statistical(text) {
            return lang;
        }

        let hindi = Script::Devanagari.count_chars(text);
        let gujarati = Script::Gujarati.count_chars(text);

        if hindi > 1 {
            Language::Hindi
        } else if gujarati > 1 {
            Language::Gujarati
        } else {
            Language::English
        }
    }

    fn name(&self) -> &'static str {
        "threshold-detector"
    }
}

/// Dispatch-time detector: script share over the whole message
///
/// Attributes the message to Hindi or Gujarati when that script reaches
/// either two characters or a tenth of the message length. Hindi is
/// checked first; ties default to English.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptRatioDetector;

impl ScriptRatioDetector {
    pub fn new() -> Self {
        Self
    }

    fn significant(count: usize, total: usize) -> bool {
        count > 0 && (count >= SCRIPT_CHAR_MIN || count as f64 / total as f64 > SCRIPT_RATIO_MIN)
    }
}

impl LanguageDetector for ScriptRatioDetector {
    fn detect(&self, text: &str) -> Language {
        let text = text.to_lowercase();
        let total = text.chars().count();
        if total == 0 {
            return Language::English;
        }

        let hindi = Script::Devanagari.count_chars(&text);
        let gujarati = Script::Gujarati.count_chars(&text);

        if Self::significant(hindi, total) {
            Language::Hindi
        } else if Self::significant(gujarati, total) {
            Language::Gujarati
        } else {
            Language::English
        }
    }

    fn name(&self) -> &'static str {
        "script-ratio-detector"
    }
}

/// Marker words that flag a Latin-script message as transliterated
/// Hindi or Gujarati
///
/// Script counting alone attributes "mujhe SE ka ppt chahiye" to
/// English. The composer consults this hint after a Latin verdict so a
/// Hindi-flavored query is normalized and answered as Hindi.
pub fn romanized_hint(text: &str) -> Option<Language> {
    const HINDI_MARKERS: [&str; 6] = ["mujhe", "chahiye", "chaihye", "haziri", "kitna", "kitni"];
    const GUJARATI_MARKERS: [&str; 4] = ["mane", "joiye", "jaroor", "upasthiti"];

    let lower = text.to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();

    if words.iter().any(|w| HINDI_MARKERS.contains(w)) {
        return Some(Language::Hindi);
    }
    if words.iter().any(|w| GUJARATI_MARKERS.contains(w)) {
        return Some(Language::Gujarati);
    }
    None
}

/// Per-script character statistics for one text, used by the detection
/// diagnostic endpoint
#[derive(Debug, Clone, serde::Serialize)]
pub struct ScriptStats {
    pub total_chars: usize,
    pub hindi_chars: usize,
    pub hindi_percent: f64,
    pub gujarati_chars: usize,
    pub gujarati_percent: f64,
    pub english_chars: usize,
    pub english_percent: f64,
}

impl ScriptStats {
    pub fn of(text: &str) -> Self {
        let total = text.chars().count();
        let hindi = Script::Devanagari.count_chars(text);
        let gujarati = Script::Gujarati.count_chars(text);
        let english = text.chars().filter(|c| c.is_ascii_alphabetic()).count();

        let percent = |count: usize| {
            if total == 0 {
                0.0
            } else {
                (count as f64 / total as f64 * 1000.0).round() / 10.0
            }
        };

        Self {
            total_chars: total,
            hindi_chars: hindi,
            hindi_percent: percent(hindi),
            gujarati_chars: gujarati,
            gujarati_percent: percent(gujarati),
            english_chars: english,
            english_percent: percent(english),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_empty_is_english() {
        let detector = ThresholdDetector::new();
        assert_eq!(detector.detect(""), Language::English);
        assert_eq!(detector.detect("   "), Language::English);
    }

    #[test]
    fn test_threshold_devanagari() {
        let detector = ThresholdDetector::new();
        assert_eq!(detector.detect("मुझे नोट्स चाहिए"), Language::Hindi);
    }

    #[test]
    fn test_threshold_gujarati() {
        let detector = ThresholdDetector::new();
        assert_eq!(detector.detect("મને નોટ્સ જોઈએ છે"), Language::Gujarati);
    }

    #[test]
    fn test_threshold_english() {
        let detector = ThresholdDetector::new();
        assert_eq!(
            detector.detect("what is my attendance percentage"),
            Language::English
        );
    }

    #[test]
    fn test_ratio_mixed_script_counts() {
        let detector = ScriptRatioDetector::new();
        // Two Devanagari characters inside a Latin message trip the
        // absolute rule even though the ratio is below a tenth
        assert_eq!(
            detector.detect("please send the ppt for unit दो today"),
            Language::Hindi
        );
    }

    #[test]
    fn test_ratio_plain_english() {
        let detector = ScriptRatioDetector::new();
        assert_eq!(detector.detect("send me the SE notes"), Language::English);
        assert_eq!(detector.detect(""), Language::English);
    }

    #[test]
    fn test_ratio_gujarati() {
        let detector = ScriptRatioDetector::new();
        assert_eq!(detector.detect("મને સિલેબસ જોઈએ"), Language::Gujarati);
    }

    #[test]
    fn test_detectors_always_supported_language() {
        let texts = ["", "hello", "नमस्ते", "નમસ્તે", "123 !!", "مرحبا"];
        for text in texts {
            let a = ThresholdDetector::new().detect(text);
            let b = ScriptRatioDetector::new().detect(text);
            assert!(Language::all().contains(&a));
            assert!(Language::all().contains(&b));
        }
    }

    #[test]
    fn test_romanized_hint() {
        assert_eq!(
            romanized_hint("mujhe SE ka unit 2 ppt chahiye"),
            Some(Language::Hindi)
        );
        assert_eq!(
            romanized_hint("mane SE no syllabus joiye"),
            Some(Language::Gujarati)
        );
        assert_eq!(romanized_hint("send me the se notes"), None);
    }

    #[test]
    fn test_script_stats() {
        let stats = ScriptStats::of("ab नम");
        assert_eq!(stats.total_chars, 5);
        assert_eq!(stats.hindi_chars, 2);
        assert_eq!(stats.english_chars, 2);
        assert_eq!(stats.hindi_percent, 40.0);
    }
}
