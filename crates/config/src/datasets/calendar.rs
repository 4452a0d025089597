//! Academic calendar dataset
//!
//! Day-keyed event labels plus term metadata, parsed from the published
//! academic calendar JSON. A date counts as a teaching day when any of
//! its events mention "Teaching" or "Weekly".

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::DatasetError;

#[derive(Debug, Deserialize)]
struct CalendarFile {
    #[serde(rename = "Academic Calendar")]
    calendar: CalendarBody,
}

#[derive(Debug, Deserialize)]
struct CalendarBody {
    #[serde(rename = "Term")]
    term: String,
    #[serde(rename = "Programs", default)]
    programs: Vec<String>,
    #[serde(rename = "Semester", default)]
    semesters: Vec<String>,
    #[serde(rename = "Daywise Schedule", default)]
    daywise: BTreeMap<String, Vec<String>>,
}

/// Parsed academic calendar
#[derive(Debug, Clone)]
pub struct AcademicCalendar {
    pub term: String,
    pub programs: Vec<String>,
    pub semesters: Vec<String>,
    daywise: BTreeMap<NaiveDate, Vec<String>>,
}

impl AcademicCalendar {
    /// Load and validate the calendar JSON
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| DatasetError::Unavailable(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&raw)
    }

    /// Parse from a JSON string; date keys must be ISO dates
    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let file: CalendarFile =
            serde_json::from_str(raw).map_err(|e| DatasetError::Malformed(e.to_string()))?;

        let mut daywise = BTreeMap::new();
        for (key, events) in file.calendar.daywise {
            let date = NaiveDate::parse_from_str(&key, "%Y-%m-%d")
                .map_err(|_| DatasetError::Malformed(format!("bad date key: {key}")))?;
            daywise.insert(date, events);
        }

        Ok(Self {
            term: file.calendar.term,
            programs: file.calendar.programs,
            semesters: file.calendar.semesters,
            daywise,
        })
    }

    /// Events scheduled on a date
    pub fn events_on(&self, date: NaiveDate) -> Option<&[String]> {
        self.daywise.get(&date).map(|v| v.as_slice())
    }

    /// Whether the date is a teaching day
    pub fn is_teaching_day(&self, date: NaiveDate) -> bool {
        self.events_on(date)
            .map(|events| {
                events
                    .iter()
                    .any(|e| e.contains("Teaching") || e.contains("Weekly"))
            })
            .unwrap_or(false)
    }

    /// Whether any day carries the given event label
    pub fn has_event(&self, label: &str) -> bool {
        self.daywise
            .values()
            .any(|events| events.iter().any(|e| e == label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "Academic Calendar": {
            "Term": "July - November 2025 (Odd Term)",
            "Programs": ["B.Tech"],
            "Semester": ["5th Semester", "7th Semester"],
            "Daywise Schedule": {
                "2025-07-28": ["Mid Sem Exam Start"],
                "2025-08-04": ["Teaching Day"],
                "2025-08-05": ["Weekly Test", "Teaching Day"],
                "2025-10-19": ["Diwali Vacation Start"]
            }
        }
    }"#;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_parse_and_lookup() {
        let cal = AcademicCalendar::from_json(SAMPLE).unwrap();
        assert_eq!(cal.term, "July - November 2025 (Odd Term)");
        assert_eq!(cal.programs, ["B.Tech"]);
        assert_eq!(
            cal.events_on(date("2025-07-28")),
            Some(&["Mid Sem Exam Start".to_string()][..])
        );
        assert_eq!(cal.events_on(date("2025-07-29")), None);
    }

    #[test]
    fn test_teaching_day() {
        let cal = AcademicCalendar::from_json(SAMPLE).unwrap();
        assert!(cal.is_teaching_day(date("2025-08-04")));
        assert!(cal.is_teaching_day(date("2025-08-05")));
        assert!(!cal.is_teaching_day(date("2025-07-28")));
        assert!(!cal.is_teaching_day(date("2025-12-25")));
    }

    #[test]
    fn test_has_event() {
        let cal = AcademicCalendar::from_json(SAMPLE).unwrap();
        assert!(cal.has_event("Mid Sem Exam Start"));
        assert!(!cal.has_event("End Sem Theory Exam"));
    }

    #[test]
    fn test_bad_date_key_rejected() {
        let raw = r#"{
            "Academic Calendar": {
                "Term": "t",
                "Daywise Schedule": { "next tuesday": ["x"] }
            }
        }"#;
        assert!(matches!(
            AcademicCalendar::from_json(raw),
            Err(DatasetError::Malformed(_))
        ));
    }
}
