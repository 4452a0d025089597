//! Weekly timetable dataset
//!
//! The timetable ships as a JSON file keyed by weekday, then time slot.
//! A slot is either a class (subject, faculty, classroom, email) or a
//! non-class activity (break, library hour). Parsing is validated here
//! at the load boundary so the handlers downstream consume typed data
//! instead of poking at nested JSON.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use campus_assistant_core::weekday_lower;

use crate::DatasetError;

/// One timetable cell
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimetableSlot {
    /// A scheduled class
    Class {
        subject: String,
        faculty: String,
        classroom: String,
        #[serde(default)]
        email: String,
    },
    /// A non-class slot (break, library, sports)
    Activity { activity: String },
}

impl TimetableSlot {
    /// Subject name when this is a class slot
    pub fn subject(&self) -> Option<&str> {
        match self {
            Self::Class { subject, .. } => Some(subject),
            Self::Activity { .. } => None,
        }
    }
}

/// Slots for one day, ordered by the "HH:MM-HH:MM" slot key
pub type DaySchedule = BTreeMap<String, TimetableSlot>;

/// One class in a faculty member's schedule
#[derive(Debug, Clone, Serialize)]
pub struct FacultyClass {
    pub time_slot: String,
    pub subject: String,
    pub classroom: String,
}

/// Class details for one faculty member
#[derive(Debug, Clone, Serialize)]
pub struct FacultyInfo {
    pub name: String,
    pub subject: String,
    pub classroom: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
struct TimetableFile {
    #[serde(rename = "Timetable")]
    timetable: HashMap<String, DaySchedule>,
}

/// Parsed weekly timetable
#[derive(Debug, Clone)]
pub struct WeeklyTimetable {
    days: HashMap<String, DaySchedule>,
}

impl WeeklyTimetable {
    /// Load and validate the timetable JSON
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| DatasetError::Unavailable(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&raw)
    }

    /// Parse from a JSON string
    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let file: TimetableFile =
            serde_json::from_str(raw).map_err(|e| DatasetError::Malformed(e.to_string()))?;

        // Reject day keys that are not weekday names; a misspelled day
        // would otherwise silently drop a whole column of classes.
        for day in file.timetable.keys() {
            if weekday_lower::parse(day).is_none() {
                return Err(DatasetError::Malformed(format!("unknown weekday: {day}")));
            }
        }

        let days = file
            .timetable
            .into_iter()
            .map(|(day, slots)| (day.to_lowercase(), slots))
            .collect();

        Ok(Self { days })
    }

    /// Schedule for one weekday, empty when the day is not listed
    pub fn day(&self, weekday: Weekday) -> Option<&DaySchedule> {
        self.days
            .get(&weekday_lower::display(weekday).to_lowercase())
    }

    /// All class slots for a faculty member, grouped by day in week order
    ///
    /// Matches case-insensitively on a substring so "gaurav" finds
    /// "Gaurav Soni".
    pub fn faculty_schedule(&self, name: &str) -> Vec<(Weekday, Vec<FacultyClass>)> {
        let needle = name.to_lowercase();
        let mut schedule = Vec::new();

        for weekday in WEEK {
            let Some(slots) = self.day(weekday) else {
                continue;
            };
            let classes: Vec<FacultyClass> = slots
                .iter()
                .filter_map(|(time_slot, slot)| match slot {
                    TimetableSlot::Class {
                        subject,
                        faculty,
                        classroom,
                        ..
                    } if faculty.to_lowercase().contains(&needle) => Some(FacultyClass {
                        time_slot: time_slot.clone(),
                        subject: subject.clone(),
                        classroom: classroom.clone(),
                    }),
                    _ => None,
                })
                .collect();
            if !classes.is_empty() {
                schedule.push((weekday, classes));
            }
        }

        schedule
    }

    /// Look up the class details for a faculty member mentioned anywhere
    /// in the timetable
    pub fn faculty_info(&self, name: &str) -> Option<FacultyInfo> {
        let needle = name.to_lowercase();
        for weekday in WEEK {
            let Some(slots) = self.day(weekday) else {
                continue;
            };
            for slot in slots.values() {
                if let TimetableSlot::Class {
                    subject,
                    faculty,
                    classroom,
                    email,
                } = slot
                {
                    if faculty.to_lowercase().contains(&needle) {
                        return Some(FacultyInfo {
                            name: faculty.clone(),
                            subject: subject.clone(),
                            classroom: classroom.clone(),
                            email: email.clone(),
                        });
                    }
                }
            }
        }
        None
    }

    /// Distinct faculty names across the week
    pub fn faculty_names(&self) -> Vec<String> {
        let mut names = Vec::new();
        for slots in self.days.values() {
            for slot in slots.values() {
                if let TimetableSlot::Class { faculty, .. } = slot {
                    if !names.iter().any(|n: &String| n == faculty) {
                        names.push(faculty.clone());
                    }
                }
            }
        }
        names
    }

    /// Weekly occurrences of a subject: (weekday, slot key) pairs
    pub fn weekly_occurrences(&self, subject: &str) -> Vec<(Weekday, String)> {
        let mut occurrences = Vec::new();
        for weekday in WEEK {
            let Some(slots) = self.day(weekday) else {
                continue;
            };
            for (time_slot, slot) in slots {
                if slot.subject() == Some(subject) {
                    occurrences.push((weekday, time_slot.clone()));
                }
            }
        }
        occurrences
    }
}

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];
