//! Gloss-dictionary translator
//!
//! Curated phrase-to-phrase tables covering the assistant's response
//! strings and common academic terms for en→hi and en→gu. Used as the
//! offline fallback when the remote translation service is unreachable,
//! and as the whole translation layer in dictionary-only deployments.
//!
//! Lookup order: the full string first, then word by word. Words without
//! a gloss pass through unchanged; words glossed to nothing (articles)
//! are dropped.

use std::collections::HashMap;

use async_trait::async_trait;
use once_cell::sync::Lazy;

use campus_assistant_core::{Language, Result, Translator};

static EN_TO_HI: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Response phrases
        ("Hello! How can I help you today?", "नमस्ते! मैं आपकी आज कैसे मदद कर सकता हूँ?"),
        ("Here are some documents that might be relevant", "यहाँ कुछ दस्तावेज़ हैं जो प्रासंगिक हो सकते हैं"),
        ("Your overall attendance is", "आपकी कुल उपस्थिति है"),
        ("Today's schedule", "आज का कार्यक्रम"),
        ("Sorry, I did not understand that", "क्षमा करें, मैं समझ नहीं पाया"),
        ("Math", "गणित"),
        ("Physics", "भौतिक विज्ञान"),
        ("Chemistry", "रसायन विज्ञान"),
        ("Computer Science", "कंप्यूटर विज्ञान"),
        ("Your current lecture is", "आपकी वर्तमान कक्षा है"),
        ("with", "के साथ"),
        ("in", "में"),
        ("Faculty email:", "शिक्षक ईमेल:"),
        ("You don't have any lecture right now according to your timetable.", "आपके समय सारणी के अनुसार आपकी अभी कोई कक्षा नहीं है।"),
        ("Your timetable for", "आपकी समय सारणी"),
        ("You don't have any classes scheduled for today.", "आज के लिए आपकी कोई कक्षाएं निर्धारित नहीं हैं।"),
        ("Your attendance in", "में आपकी उपस्थिति"),
        ("classes", "कक्षाएं"),
        ("Your attendance:", "आपकी उपस्थिति:"),
        ("No attendance records found for you.", "आपके लिए कोई उपस्थिति रिकॉर्ड नहीं मिला।"),
        ("Faculty:", "शिक्षक:"),
        ("Subject:", "विषय:"),
        ("Email:", "ईमेल:"),
        ("Usually teaches in:", "आमतौर पर पढ़ाते हैं:"),
        ("For", "के लिए"),
        ("Today's schedule:", "आज का कार्यक्रम:"),
        ("No special events scheduled for today according to the academic calendar.", "शैक्षणिक कैलेंडर के अनुसार आज के लिए कोई विशेष कार्यक्रम निर्धारित नहीं है।"),
        ("Exam dates:", "परीक्षा की तारीखें:"),
        ("Mid Semester Exams:", "मध्य सेमेस्टर परीक्षाएं:"),
        ("End Semester Theory Exams:", "अंत सेमेस्टर सिद्धांत परीक्षाएं:"),
        ("Diwali Vacation:", "दिवाली अवकाश:"),
        ("Academic Calendar Highlights:", "शैक्षणिक कैलेंडर के मुख्य बिंदु:"),
        ("Term:", "सत्र:"),
        ("Teaching End:", "शिक्षण समाप्ति:"),
        ("Programs:", "कार्यक्रम:"),
        ("Semesters:", "सेमेस्टर:"),
        ("Key dates available. Ask about specific events like exams or vacations.", "मुख्य तिथियां उपलब्ध हैं। परीक्षा या अवकाश जैसे विशेष कार्यक्रमों के बारे में पूछें।"),
        ("Academic calendar data is not available at the moment.", "शैक्षणिक कैलेंडर डेटा इस समय उपलब्ध नहीं है।"),
        // Request verbs
        ("send", "भेजो"),
        ("me", "मुझे"),
        ("i need", "मुझे चाहिए"),
        ("give me", "मुझे दो"),
        ("provide", "उपलब्ध कराओ"),
        ("want", "चाहिए"),
        // Document nouns
        ("presentation", "प्रस्तुति"),
        ("slide", "स्लाइड"),
        ("lecture", "व्याख्यान"),
        ("material", "सामग्री"),
        ("book", "किताब"),
        // Common verbs
        ("download", "डाउनलोड"),
        ("see", "देखो"),
        ("show", "दिखाओ"),
        ("find", "खोजो"),
        ("search", "खोजो"),
        // Subject abbreviations
        ("se", "सॉफ्टवेयर इंजीनियरिंग"),
        ("daa", "एल्गोरिदम का डिजाइन और विश्लेषण"),
        ("dvd", "डेटा विज़ुअलाइज़ेशन और डेटा एनालिटिक्स"),
        ("ep", "एंटरप्राइज प्रोग्रामिंग"),
        ("toc", "कम्प्यूटेशन का सिद्धांत"),
        ("aws", "AWS फंडामेंटल्स"),
        ("pce", "पेशेवरता और कॉर्पोरेट नैतिकता"),
        // Function words
        ("of", "का"),
        ("for", "के लिए"),
        ("the", ""),
        ("please", "कृपया"),
        ("thank you", "धन्यवाद"),
    ])
});

static EN_TO_GU: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Response phrases
        ("Hello! How can I help you today?", "નમસ્તે! હું તમને આજે કેવી રીતે મદદ કરી શકું?"),
        ("Here are some documents that might be relevant", "અહીં કેટલાક દસ્તાવેજો છે જે સંબંધિત હોઈ શકે છે"),
        ("Your overall attendance is", "તમારી એકંદર હાજરી છે"),
        ("Today's schedule", "આજનું શેડ્યૂલ"),
        ("Sorry, I did not understand that", "માફ કરશો, હું તે સમજી શક્યો નથી"),
        ("Math", "ગણિત"),
        ("Physics", "ભૌતિક વિજ્ઞાન"),
        ("Chemistry", "રસાયણ શાસ્ત્ર"),
        ("Computer Science", "કમ્પ્યુટર વિજ્ઞાન"),
        ("Your current lecture is", "તમારું વર્તમાન લેક્ચર છે"),
        ("with", "સાથે"),
        ("in", "માં"),
        ("Faculty email:", "ફેકલ્ટી ઇમેઇલ:"),
        ("You don't have any lecture right now according to your timetable.", "તમારા ટાઇમટેબલ મુજબ તમારું હમણાં કોઈ લેક્ચર નથી."),
        ("Your timetable for", "માટે તમારું ટાઇમટેબલ"),
        ("You don't have any classes scheduled for today.", "આજે માટે તમારી કોઈ ક્લાસ સ્કેડ્યુલ નથી."),
        ("Your attendance in", "માં તમારી હાજરી"),
        ("classes", "વર્ગો"),
        ("Your attendance:", "તમારી હાજરી:"),
        ("No attendance records found for you.", "તમારા માટે કોઈ હાજરી રેકોર્ડ્સ મળ્યા નથી."),
        ("Faculty:", "ફેકલ્ટી:"),
        ("Subject:", "વિષય:"),
        ("Email:", "ઇમેઇલ:"),
        ("Usually teaches in:", "સામાન્ય રીતે આમાં શિક્ષણ આપે છે:"),
        ("For", "માટે"),
        ("Today's schedule:", "આજનું શેડ્યૂલ:"),
        ("No special events scheduled for today according to the academic calendar.", "એકેડેમિક કેલેન્ડર મુજબ આજે માટે કોઈ ખાસ ઇવેન્ટ્સ સ્કેડ્યુલ નથી."),
        ("Exam dates:", "પરીક્ષાની તારીખો:"),
        ("Mid Semester Exams:", "મિડ સેમેસ્ટર પરીક્ષાઓ:"),
        ("End Semester Theory Exams:", "અંત સેમેસ્ટર સિદ્ધાંત પરીક્ષાઓ:"),
        ("Diwali Vacation:", "દિવાળી વેકેશન:"),
        ("Academic Calendar Highlights:", "એકેડેમિક કેલેન્ડર હાઇલાઇટ્સ:"),
        ("Term:", "ટર્મ:"),
        ("Teaching End:", "શિક્ષણ સમાપ્તિ:"),
        ("Programs:", "પ્રોગ્રામ્સ:"),
        ("Semesters:", "સેમેસ્ટર્સ:"),
        ("Key dates available. Ask about specific events like exams or vacations.", "મુખ્ય તારીખો ઉપલબ્ધ છે. પરીક્ષા અથવા વેકેશન જેવી ચોક્કસ ઘટનાઓ વિશે પૂછો."),
        ("Academic calendar data is not available at the moment.", "એકેડેમિક કેલેન્ડર ડેટા હાલમાં ઉપલબ્ધ નથી."),
        // Request verbs
        ("send", "મોકલો"),
        ("me", "મને"),
        ("i need", "મને જોઈએ છે"),
        ("give me", "મને આપો"),
        ("provide", "પૂરું પાડો"),
        ("want", "જોઈએ"),
        // Document nouns
        ("presentation", "પ્રેઝન્ટેશન"),
        ("slide", "સ્લાઇડ"),
        ("lecture", "લેક્ચર"),
        ("material", "સામગ્રી"),
        ("book", "પુસ્તક"),
        // Common verbs
        ("download", "ડાઉનલોડ"),
        ("see", "જુઓ"),
        ("show", "બતાવો"),
        ("find", "શોધો"),
        ("search", "શોધો"),
        // Subject abbreviations
        ("se", "સોફ્ટવેર એન્જિનિયરિંગ"),
        ("daa", "અલ્ગોરિધમની ડિઝાઇન અને વિશ્લેષણ"),
        ("dvd", "ડેટા વિઝ્યુલાઇઝેશન અને ડેટા એનાલિટિક્સ"),
        ("ep", "એન્ટરપ્રાઇઝ પ્રોગ્રામિંગ"),
        ("toc", "કમ્પ્યુટેશનનો સિદ્ધાંત"),
        ("aws", "AWS ફંડામેન્ટલ્સ"),
        ("pce", "પ્રોફેશનલિઝમ અને કોર્પોરેટ એથિક્સ"),
        // Function words
        ("of", "નું"),
        ("for", "માટે"),
        ("the", ""),
        ("please", "કૃપા કરીને"),
        ("thank you", "આભાર"),
    ])
});

fn gloss_table(to: Language) -> Option<&'static HashMap<&'static str, &'static str>> {
    match to {
        Language::Hindi => Some(&EN_TO_HI),
        Language::Gujarati => Some(&EN_TO_GU),
        Language::English => None,
    }
}

/// Dictionary-backed translator, infallible and offline
#[derive(Debug, Clone, Copy, Default)]
pub struct GlossTranslator;

impl GlossTranslator {
    pub fn new() -> Self {
        Self
    }

    /// Translate using the gloss tables; identity when the pair is
    /// unsupported or the text is empty
    pub fn gloss(text: &str, to: Language) -> String {
        let Some(table) = gloss_table(to) else {
            return text.to_string();
        };
        if text.is_empty() {
            return text.to_string();
        }

        // Whole string first
        if let Some(hit) = table.get(text) {
            return (*hit).to_string();
        }

        // Then word by word; empty glosses drop the word
        text.split_whitespace()
            .filter_map(|word| match table.get(word) {
                Some(&"") => None,
                Some(hit) => Some((*hit).to_string()),
                None => Some(word.to_string()),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[async_trait]
impl Translator for GlossTranslator {
    async fn translate(&self, text: &str, from: Language, to: Language) -> Result<String> {
        if from == to || to == Language::English {
            return Ok(text.to_string());
        }
        if !self.supports_pair(from, to) {
            tracing::warn!(?from, ?to, "Gloss pair not supported, passing through");
            return Ok(text.to_string());
        }
        Ok(Self::gloss(text, to))
    }

    fn supports_pair(&self, from: Language, to: Language) -> bool {
        from == Language::English && matches!(to, Language::Hindi | Language::Gujarati)
    }

    fn name(&self) -> &str {
        "gloss-translator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_to_english_is_identity() {
        let translator = GlossTranslator::new();
        let text = "Anything at all, even अनुवादित text";
        let out = translator
            .translate(text, Language::Hindi, Language::English)
            .await
            .unwrap();
        assert_eq!(out, text);
    }

    #[tokio::test]
    async fn test_full_phrase_lookup() {
        let translator = GlossTranslator::new();
        let out = translator
            .translate(
                "Sorry, I did not understand that",
                Language::English,
                Language::Hindi,
            )
            .await
            .unwrap();
        assert_eq!(out, "क्षमा करें, मैं समझ नहीं पाया");
    }

    #[tokio::test]
    async fn test_word_by_word_with_passthrough() {
        let translator = GlossTranslator::new();
        let out = translator
            .translate("send me the syllabus", Language::English, Language::Gujarati)
            .await
            .unwrap();
        // "the" is dropped, "syllabus" has no gloss and passes through
        assert_eq!(out, "મોકલો મને syllabus");
    }

    #[test]
    fn test_curated_phrases_deterministic_both_tables() {
        assert_eq!(
            GlossTranslator::gloss("Your overall attendance is", Language::Hindi),
            "आपकी कुल उपस्थिति है"
        );
        assert_eq!(
            GlossTranslator::gloss("Your overall attendance is", Language::Gujarati),
            "તમારી એકંદર હાજરી છે"
        );
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(GlossTranslator::gloss("", Language::Hindi), "");
    }
}
