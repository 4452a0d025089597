//! Static schedule datasets
//!
//! The weekly timetable and academic calendar ship as JSON files
//! maintained outside the relational store. Both parse into typed
//! structures here; a missing or corrupt file surfaces as a
//! `DatasetError` so callers degrade to an "unavailable" reply instead
//! of failing the request.

mod calendar;
mod timetable;

pub use calendar::AcademicCalendar;
pub use timetable::{DaySchedule, FacultyClass, FacultyInfo, TimetableSlot, WeeklyTimetable};
