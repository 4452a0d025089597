//! Remaining-classes estimation
//!
//! Turns a classes-needed count into a rough week estimate by walking
//! the weekly timetable for the subject and keeping the next occurrence
//! of each slot that lands on a teaching day per the academic calendar.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};

use campus_assistant_config::{AcademicCalendar, TimetableSlot, WeeklyTimetable};
use campus_assistant_core::TimeSlot;

/// One upcoming class occurrence
#[derive(Debug, Clone)]
pub struct UpcomingClass {
    pub date: NaiveDate,
    pub time_slot: String,
    pub classroom: String,
}

/// Next occurrences of a subject's weekly slots
///
/// For each timetable slot teaching the subject, finds its next
/// calendar date from `today`: a slot later today counts as today,
/// otherwise the same weekday next week. Occurrences are kept only when
/// the calendar marks that date as a teaching day. The returned count is
/// the subject's classes-per-week baseline for the week estimate.
pub fn remaining_classes(
    subject: &str,
    timetable: &WeeklyTimetable,
    calendar: &AcademicCalendar,
    today: NaiveDate,
    now: NaiveTime,
) -> Vec<UpcomingClass> {
    let mut upcoming = Vec::new();

    for (weekday, slot_key) in timetable.weekly_occurrences(subject) {
        let classroom = timetable
            .day(weekday)
            .and_then(|slots| slots.get(&slot_key))
            .and_then(|slot| match slot {
                TimetableSlot::Class { classroom, .. } => Some(classroom.clone()),
                TimetableSlot::Activity { .. } => None,
            })
            .unwrap_or_default();

        let mut days_until = (weekday.num_days_from_monday() as i64
            - today.weekday().num_days_from_monday() as i64)
            .rem_euclid(7);

        if days_until == 0 {
            // Same weekday: later today counts, an already-started slot
            // moves to next week
            match TimeSlot::parse(&slot_key) {
                Ok(slot) if now < slot.start => {}
                Ok(_) => days_until = 7,
                Err(e) => {
                    tracing::warn!(slot = %slot_key, error = %e, "Skipping malformed time slot");
                    continue;
                }
            }
        }

        let class_date = today + Duration::days(days_until);
        if calendar.is_teaching_day(class_date) {
            upcoming.push(UpcomingClass {
                date: class_date,
                time_slot: slot_key,
                classroom,
            });
        }
    }

    upcoming
}

/// Weeks needed to attend `needed` classes at `classes_per_week`
///
/// Ceiling division; `None` when no weekly occurrences remain, in which
/// case the caller omits the estimate instead of reporting zero weeks.
pub fn weeks_to_target(needed: u32, classes_per_week: usize) -> Option<u32> {
    if classes_per_week == 0 {
        return None;
    }
    let per_week = classes_per_week as u32;
    Some(needed.div_ceil(per_week))
}
