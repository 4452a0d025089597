//! Query normalization
//!
//! Students write Hindi and Gujarati queries in Latin transliteration
//! ("mujhe SE ka unit 2 ppt chahiye"). Before search-query construction,
//! transliterated tokens are mapped to English, numeral words become
//! digits, and noise tokens are dropped. Subject names, English words,
//! and numbers pass through.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use campus_assistant_core::Language;

static HINDI_TO_ENGLISH: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("chahiye", "need"),
        ("chaihye", "need"),
        ("mujhe", "i"),
        ("myjhe", "i"),
        ("mein", "in"),
        ("ka", "of"),
        ("ki", "of"),
        ("notes", "notes"),
        ("ppt", "ppt"),
        ("syllabus", "syllabus"),
        ("book", "book"),
        ("assignment", "assignment"),
        ("project", "project"),
        ("report", "report"),
        ("unit", "unit"),
        ("chapter", "chapter"),
        ("lecture", "lecture"),
        ("class", "class"),
        ("unit1", "1"),
        ("unit2", "2"),
        ("unit3", "3"),
        ("unit4", "4"),
        ("unit5", "5"),
        ("unit6", "6"),
        ("unit7", "7"),
        ("unit8", "8"),
        ("unit9", "9"),
        ("unit10", "10"),
        ("ek", "1"),
        ("do", "2"),
        ("teen", "3"),
        ("char", "4"),
        ("panch", "5"),
        ("che", "6"),
        ("saat", "7"),
        ("aath", "8"),
        ("nau", "9"),
        ("das", "10"),
        ("pustak", "book"),
        ("kaksha", "class"),
        ("path", "chapter"),
        ("prashn", "question"),
    ])
});

static GUJARATI_TO_ENGLISH: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("joiye", "need"),
        ("jaroor", "need"),
        ("mane", "i"),
        ("ma", "in"),
        ("no", "of"),
        ("ni", "of"),
        ("notes", "notes"),
        ("ppt", "ppt"),
        ("syllabus", "syllabus"),
        ("pustak", "book"),
        ("assignment", "assignment"),
        ("project", "project"),
        ("report", "report"),
        ("unit", "unit"),
        ("chapter", "chapter"),
        ("lecture", "lecture"),
        ("class", "class"),
        ("unit1", "1"),
        ("unit2", "2"),
        ("unit3", "3"),
        ("unit4", "4"),
        ("unit5", "5"),
        ("unit6", "6"),
        ("unit7", "7"),
        ("unit8", "8"),
        ("unit9", "9"),
        ("unit10", "10"),
        ("ek", "1"),
        ("be", "2"),
        ("tran", "3"),
        ("char", "4"),
        ("panch", "5"),
        ("cha", "6"),
        ("sat", "7"),
        ("aath", "8"),
        ("nav", "9"),
        ("das", "10"),
        ("kaksha", "class"),
        ("prakaran", "chapter"),
        ("prashna", "question"),
    ])
});

/// Academic keywords recognized inside mixed-script tokens
const ACADEMIC_KEYWORDS: [&str; 12] = [
    "ppt", "notes", "pdf", "syllabus", "assignment", "project", "unit", "chapter", "lecture",
    "subject", "document", "file",
];

/// Map a transliterated query to English tokens for search
///
/// English input is only lowercased. For Hindi and Gujarati, each token
/// is looked up in the transliteration table; unmapped tokens survive
/// when they carry a Latin letter or digit or are longer than two
/// characters, and are dropped otherwise.
pub fn normalize_to_english(text: &str, source: Language) -> String {
    let table = match source {
        Language::Hindi => &*HINDI_TO_ENGLISH,
        Language::Gujarati => &*GUJARATI_TO_ENGLISH,
        Language::English => return text.to_lowercase(),
    };

    let mut out = Vec::new();
    for word in text.split_whitespace() {
        let lower = word.to_lowercase();
        if let Some(mapped) = table.get(lower.as_str()) {
            out.push((*mapped).to_string());
        } else if lower.chars().any(|c| c.is_ascii_alphabetic())
            || lower.chars().any(|c| c.is_ascii_digit())
            || lower.chars().count() > 2
        {
            out.push(lower);
        }
    }
    out.join(" ")
}

/// Pull English keywords out of mixed-language text
///
/// Keeps words that are purely Latin-script, and recovers academic
/// keywords embedded inside mixed tokens ("युनिटppt" yields "ppt").
pub fn extract_english_keywords(text: &str) -> String {
    let mut out = Vec::new();

    for word in text.split_whitespace() {
        let lower = word.to_lowercase();
        let has_latin = lower.chars().any(|c| c.is_ascii_lowercase());
        let has_indic = word.chars().any(|c| {
            let code = c as u32;
            (0x0900..=0x097F).contains(&code) || (0x0A80..=0x0AFF).contains(&code)
        });

        if has_latin && !has_indic {
            out.push(lower);
        } else if ACADEMIC_KEYWORDS.iter().any(|k| lower.contains(k)) {
            for keyword in ACADEMIC_KEYWORDS {
                if lower.contains(keyword) {
                    out.push(keyword.to_string());
                }
            }
        }
    }

    out.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_is_lowercased_only() {
        assert_eq!(
            normalize_to_english("Send me the SE Notes", Language::English),
            "send me the se notes"
        );
    }

    #[test]
    fn test_hindi_transliteration() {
        assert_eq!(
            normalize_to_english("mujhe SE ka unit 2 ppt chahiye", Language::Hindi),
            "i se of unit 2 ppt need"
        );
    }

    #[test]
    fn test_hindi_numeral_words() {
        assert_eq!(
            normalize_to_english("unit do ka notes chahiye", Language::Hindi),
            "unit 2 of notes need"
        );
        assert_eq!(normalize_to_english("unit2", Language::Hindi), "2");
    }

    #[test]
    fn test_gujarati_transliteration() {
        assert_eq!(
            normalize_to_english("mane SE no syllabus joiye", Language::Gujarati),
            "i se of syllabus need"
        );
        assert_eq!(normalize_to_english("tran", Language::Gujarati), "3");
    }

    #[test]
    fn test_short_unknown_tokens_dropped() {
        // "ho" has Latin letters so it survives; a two-character
        // Devanagari token with no mapping is dropped
        assert_eq!(normalize_to_english("हो notes", Language::Hindi), "notes");
    }

    #[test]
    fn test_long_tokens_kept_as_subject_candidates() {
        assert_eq!(
            normalize_to_english("engineering chahiye", Language::Hindi),
            "engineering need"
        );
    }

    #[test]
    fn test_extract_english_keywords() {
        // Bare digits carry no Latin letters and are not keywords
        assert_eq!(extract_english_keywords("मुझे ppt चाहिए unit 2"), "ppt unit");
        assert_eq!(extract_english_keywords("send notes"), "send notes");
    }

    #[test]
    fn test_extract_keyword_inside_mixed_token() {
        assert_eq!(extract_english_keywords("युनिटnotes"), "notes");
    }
}
