//! Response Composer
//!
//! Orchestrates one message end to end: detect language → normalize →
//! classify intent → dispatch to the intent handler → localize the
//! reply. A single synchronous pass per message; the only await points
//! are the translator calls. Handlers live in sibling modules as
//! `impl ResponseComposer` blocks.

mod attendance;
mod calendar;
mod documents;
mod schedule;

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use campus_assistant_config::{AcademicCalendar, WeeklyTimetable};
use campus_assistant_core::{
    AttendanceStore, DocumentStore, FaqStore, Intent, Language, LectureStore, StudentId,
    Translator,
};
use campus_assistant_retrieval::{FaqMatcher, HierarchicalFilter, RelevanceRanker};
use campus_assistant_text_processing::{
    detect::{romanized_hint, LanguageDetector, ScriptRatioDetector},
    normalize_to_english, IntentClassifier,
};

/// How the client should render the reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    Text,
    Html,
}

/// One composed reply
#[derive(Debug, Clone, Serialize)]
pub struct ComposedResponse {
    pub text: String,
    pub format: ResponseFormat,
}

impl ComposedResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: ResponseFormat::Text,
        }
    }

    pub fn html(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: ResponseFormat::Html,
        }
    }
}

/// Per-message orchestrator over the stores and understanding pipeline
pub struct ResponseComposer {
    pub(crate) documents: Arc<dyn DocumentStore>,
    pub(crate) faqs: Arc<dyn FaqStore>,
    pub(crate) attendance: Arc<dyn AttendanceStore>,
    pub(crate) lectures: Arc<dyn LectureStore>,
    translator: Arc<dyn Translator>,
    pub(crate) timetable: Option<WeeklyTimetable>,
    pub(crate) calendar: Option<AcademicCalendar>,
    detector: ScriptRatioDetector,
    classifier: IntentClassifier,
    pub(crate) ranker: RelevanceRanker,
    pub(crate) filter: HierarchicalFilter,
    pub(crate) faq_matcher: FaqMatcher,
}

impl ResponseComposer {
    /// Build a composer over injected stores and translator
    pub fn new(
        documents: Arc<dyn DocumentStore>,
        faqs: Arc<dyn FaqStore>,
        attendance: Arc<dyn AttendanceStore>,
        lectures: Arc<dyn LectureStore>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            documents,
            faqs,
            attendance,
            lectures,
            translator,
            timetable: None,
            calendar: None,
            detector: ScriptRatioDetector::new(),
            classifier: IntentClassifier::new(),
            ranker: RelevanceRanker::default(),
            filter: HierarchicalFilter::new(),
            faq_matcher: FaqMatcher::new(),
        }
    }

    /// Attach the weekly timetable dataset
    pub fn with_timetable(mut self, timetable: WeeklyTimetable) -> Self {
        self.timetable = Some(timetable);
        self
    }

    /// Attach the academic calendar dataset
    pub fn with_calendar(mut self, calendar: AcademicCalendar) -> Self {
        self.calendar = Some(calendar);
        self
    }

    /// The apology used when no handler produced a reply
    fn default_apology() -> ComposedResponse {
        ComposedResponse::text("I'm sorry, I didn't understand that. Could you rephrase?")
    }

    /// Handle one message at the current wall-clock time
    pub async fn handle_message(
        &self,
        student: Option<StudentId>,
        raw_text: &str,
    ) -> ComposedResponse {
        self.handle_message_at(student, raw_text, Local::now().naive_local())
            .await
    }

    /// Handle one message at an explicit instant
    ///
    /// The instant feeds the timetable, current-lecture, and calendar
    /// handlers; tests pin it.
    pub async fn handle_message_at(
        &self,
        student: Option<StudentId>,
        raw_text: &str,
        now: NaiveDateTime,
    ) -> ComposedResponse {
        let mut language = self.detector.detect(raw_text);
        if language == Language::English {
            if let Some(hint) = romanized_hint(raw_text) {
                language = hint;
            }
        }

        let query = if language != Language::English {
            normalize_to_english(raw_text, language)
        } else {
            raw_text.to_lowercase()
        };

        let intent = self.classifier.classify(&query);
        tracing::debug!(
            language = language.code(),
            intent = intent.as_str(),
            query = %query,
            "Dispatching message"
        );

        let response = match intent {
            Intent::DocumentRequest => self.handle_documents(&query),
            Intent::AttendanceQuery => self.handle_attendance(student, &query, now),
            Intent::TimetableQuery => self.handle_timetable(student, now),
            Intent::FacultyQuery => self.handle_faculty(student, &query),
            Intent::CurrentLecture => self.handle_current_lecture(student, now),
            Intent::AcademicCalendar => self.handle_calendar(&query, now),
            Intent::General => self.handle_faq(&query),
        }
        .unwrap_or_else(Self::default_apology);

        self.localize(response, language).await
    }

    /// Translate the composed English reply into the input language
    ///
    /// Translation failure keeps the English reply; localization must
    /// never lose an answer.
    async fn localize(&self, mut response: ComposedResponse, language: Language) -> ComposedResponse {
        if language == Language::English {
            return response;
        }

        match self
            .translator
            .translate(&response.text, Language::English, language)
            .await
        {
            Ok(text) => response.text = text,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    translator = self.translator.name(),
                    to = language.code(),
                    "Response localization failed, replying in English"
                );
            }
        }

        response
    }

    /// Best-match FAQ answer for everything that is not a recognized
    /// intent
    fn handle_faq(&self, query: &str) -> Option<ComposedResponse> {
        let faqs = self.faqs.list();
        match self.faq_matcher.best_match(query, &faqs) {
            Some(faq) => Some(ComposedResponse::text(faq.answer.clone())),
            None => Some(ComposedResponse::text(
                "I'm sorry, I couldn't find information about that. Could you try rephrasing \
                 your question?",
            )),
        }
    }
}
