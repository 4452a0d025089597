//! Domain entities
//!
//! Read-only views of the records owned by the external stores: course
//! documents, FAQs, attendance counters, and scheduled lectures. The
//! assistant core never mutates these; lifecycle belongs to the stores.

use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Classified purpose of a user message
///
/// Computed per message by the intent classifier, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    DocumentRequest,
    AttendanceQuery,
    TimetableQuery,
    FacultyQuery,
    CurrentLecture,
    AcademicCalendar,
    #[default]
    General,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DocumentRequest => "document_request",
            Self::AttendanceQuery => "attendance_query",
            Self::TimetableQuery => "timetable_query",
            Self::FacultyQuery => "faculty_query",
            Self::CurrentLecture => "current_lecture",
            Self::AcademicCalendar => "academic_calendar",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Document categories accepted by the document store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocType {
    Notes,
    Ppt,
    Syllabus,
    Circular,
    Assignment,
    QuestionPaper,
}

impl DocType {
    /// Store-facing identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Notes => "notes",
            Self::Ppt => "ppt",
            Self::Syllabus => "syllabus",
            Self::Circular => "circular",
            Self::Assignment => "assignment",
            Self::QuestionPaper => "question_paper",
        }
    }

    /// Icon shown next to a result of this type
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Ppt => "📊",
            Self::Notes => "📝",
            Self::Syllabus => "📄",
            Self::Circular => "📢",
            Self::Assignment => "📋",
            Self::QuestionPaper => "📑",
        }
    }

    /// Parse a store identifier
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "notes" => Some(Self::Notes),
            "ppt" => Some(Self::Ppt),
            "syllabus" => Some(Self::Syllabus),
            "circular" => Some(Self::Circular),
            "assignment" => Some(Self::Assignment),
            "question_paper" => Some(Self::QuestionPaper),
            _ => None,
        }
    }
}

impl std::fmt::Display for DocType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Course document metadata with extracted full text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Free-text subject label, matched case-insensitively
    pub subject: String,
    /// Unit number when the document belongs to one (1-10)
    #[serde(default)]
    pub unit: Option<u32>,
    pub doc_type: DocType,
    /// Full text pulled out of the uploaded file, empty when extraction
    /// was not possible
    #[serde(default)]
    pub extracted_text: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Document {
    /// Relative download link served by the file layer
    pub fn download_path(&self) -> String {
        format!("/download-document/{}/", self.id)
    }
}

/// FAQ categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FaqCategory {
    Admission,
    Examination,
    Scholarship,
    Hostel,
    #[default]
    General,
}

/// Frequently asked question record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub category: FaqCategory,
}

/// Opaque student identifier assigned by the session layer
pub type StudentId = u64;

/// Per-subject attendance counters for one student
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub student: StudentId,
    pub subject: String,
    pub total_classes: u32,
    pub attended_classes: u32,
}

impl AttendanceRecord {
    /// Attendance percentage rounded to two decimals, 0 when no classes
    /// have been held yet
    pub fn percentage(&self) -> f64 {
        if self.total_classes == 0 {
            return 0.0;
        }
        let pct = self.attended_classes as f64 / self.total_classes as f64 * 100.0;
        (pct * 100.0).round() / 100.0
    }
}

/// A lecture time range within one day, "HH:MM-HH:MM"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    /// Parse a "HH:MM-HH:MM" range
    pub fn parse(s: &str) -> Result<Self> {
        let (start_str, end_str) = s
            .split_once('-')
            .ok_or_else(|| Error::InvalidTimeSlot(s.to_string()))?;
        let start = NaiveTime::parse_from_str(start_str.trim(), "%H:%M")
            .map_err(|_| Error::InvalidTimeSlot(s.to_string()))?;
        let end = NaiveTime::parse_from_str(end_str.trim(), "%H:%M")
            .map_err(|_| Error::InvalidTimeSlot(s.to_string()))?;
        Ok(Self { start, end })
    }

    /// Whether the instant falls inside the range, endpoints included
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time <= self.end
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::parse(&s)
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

/// One scheduled lecture for a student
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lecture {
    pub student: StudentId,
    pub subject: String,
    pub faculty: String,
    pub classroom: String,
    #[serde(default)]
    pub email: String,
    #[serde(with = "weekday_lower")]
    pub weekday: Weekday,
    pub slot: TimeSlot,
    pub date: NaiveDate,
    #[serde(default)]
    pub is_attended: bool,
}

/// Serde helper for lowercase weekday names ("monday", ...)
pub mod weekday_lower {
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &Weekday, ser: S) -> std::result::Result<S::Ok, S::Error> {
        ser.serialize_str(&day.to_string().to_lowercase())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        de: D,
    ) -> std::result::Result<Weekday, D::Error> {
        let s = String::deserialize(de)?;
        parse(&s).ok_or_else(|| serde::de::Error::custom(format!("unknown weekday: {s}")))
    }

    /// Parse a full lowercase weekday name
    pub fn parse(s: &str) -> Option<Weekday> {
        match s.trim().to_lowercase().as_str() {
            "monday" => Some(Weekday::Mon),
            "tuesday" => Some(Weekday::Tue),
            "wednesday" => Some(Weekday::Wed),
            "thursday" => Some(Weekday::Thu),
            "friday" => Some(Weekday::Fri),
            "saturday" => Some(Weekday::Sat),
            "sunday" => Some(Weekday::Sun),
            _ => None,
        }
    }

    /// Full capitalized weekday name ("Monday", ...)
    pub fn display(day: Weekday) -> &'static str {
        match day {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_rounding() {
        let record = AttendanceRecord {
            student: 1,
            subject: "Design and Analysis of Algorithms".to_string(),
            total_classes: 30,
            attended_classes: 22,
        };
        assert_eq!(record.percentage(), 73.33);
    }

    #[test]
    fn test_percentage_zero_total() {
        let record = AttendanceRecord {
            student: 1,
            subject: "Software Engineering".to_string(),
            total_classes: 0,
            attended_classes: 0,
        };
        assert_eq!(record.percentage(), 0.0);
    }

    #[test]
    fn test_time_slot_parse() {
        let slot = TimeSlot::parse("09:00-10:00").unwrap();
        assert_eq!(slot.to_string(), "09:00-10:00");
        assert!(slot.contains(NaiveTime::from_hms_opt(9, 30, 0).unwrap()));
        assert!(slot.contains(NaiveTime::from_hms_opt(9, 0, 0).unwrap()));
        assert!(slot.contains(NaiveTime::from_hms_opt(10, 0, 0).unwrap()));
        assert!(!slot.contains(NaiveTime::from_hms_opt(10, 0, 1).unwrap()));
    }

    #[test]
    fn test_time_slot_malformed() {
        assert!(TimeSlot::parse("nine to ten").is_err());
        assert!(TimeSlot::parse("09:00").is_err());
    }

    #[test]
    fn test_doc_type_roundtrip() {
        assert_eq!(DocType::from_str_loose("question_paper"), Some(DocType::QuestionPaper));
        assert_eq!(DocType::QuestionPaper.as_str(), "question_paper");
        assert_eq!(DocType::Ppt.icon(), "📊");
    }

    #[test]
    fn test_weekday_parse() {
        assert_eq!(weekday_lower::parse("monday"), Some(Weekday::Mon));
        assert_eq!(weekday_lower::parse("Friday"), Some(Weekday::Fri));
        assert_eq!(weekday_lower::parse("someday"), None);
        assert_eq!(weekday_lower::display(Weekday::Wed), "Wednesday");
    }
}
