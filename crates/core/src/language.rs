//! Language and script definitions
//!
//! The assistant answers in English, Hindi, and Gujarati. Hindi and
//! Gujarati are identified by their Unicode blocks; everything else is
//! treated as English.

use serde::{Deserialize, Serialize};

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Gujarati,
}

impl Language {
    /// Get ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Gujarati => "gu",
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Gujarati => "Gujarati",
        }
    }

    /// Get script used by this language
    pub fn script(&self) -> Script {
        match self {
            Self::English => Script::Latin,
            Self::Hindi => Script::Devanagari,
            Self::Gujarati => Script::Gujarati,
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "eng" | "english" => Some(Self::English),
            "hi" | "hin" | "hindi" => Some(Self::Hindi),
            "gu" | "guj" | "gujarati" => Some(Self::Gujarati),
            _ => None,
        }
    }

    /// Get all supported languages
    pub fn all() -> &'static [Language] {
        &[Self::English, Self::Hindi, Self::Gujarati]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Script systems used by the supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Script {
    Latin,
    Devanagari,
    Gujarati,
}

impl Script {
    /// Get Unicode range for this script
    pub fn unicode_range(&self) -> (u32, u32) {
        match self {
            Self::Latin => (0x0000, 0x007F),
            Self::Devanagari => (0x0900, 0x097F),
            Self::Gujarati => (0x0A80, 0x0AFF),
        }
    }

    /// Check if a character belongs to this script
    pub fn contains_char(&self, c: char) -> bool {
        let code = c as u32;
        let (start, end) = self.unicode_range();
        code >= start && code <= end
    }

    /// Count characters of this script in a text
    pub fn count_chars(&self, text: &str) -> usize {
        text.chars().filter(|c| self.contains_char(*c)).count()
    }
}
