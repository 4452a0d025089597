//! Timetable, faculty, and current-lecture handlers

use chrono::{Datelike, NaiveDateTime};

use campus_assistant_config::TimetableSlot;
use campus_assistant_core::{weekday_lower, StudentId};

use super::{ComposedResponse, ResponseComposer};

/// Sub-intent tokens for a contact request
const CONTACT_TOKENS: [&str; 4] = ["email", "mail", "contact", "id"];

/// Sub-intent tokens for a schedule request
const SCHEDULE_TOKENS: [&str; 5] = ["schedule", "lecture", "time", "when", "day"];

const PROFILE_MISSING: &str =
    "I couldn't find your student profile. Please contact administration.";

const TIMETABLE_UNAVAILABLE: &str = "Timetable data is not available at the moment.";

impl ResponseComposer {
    pub(super) fn handle_timetable(
        &self,
        student: Option<StudentId>,
        now: NaiveDateTime,
    ) -> Option<ComposedResponse> {
        if student.is_none() {
            return Some(ComposedResponse::text(PROFILE_MISSING));
        }
        let Some(timetable) = self.timetable.as_ref() else {
            return Some(ComposedResponse::text(TIMETABLE_UNAVAILABLE));
        };

        let weekday = now.date().weekday();
        let day_name = weekday_lower::display(weekday);

        let Some(schedule) = timetable.day(weekday).filter(|day| !day.is_empty()) else {
            return Some(ComposedResponse::text(
                "You don't have any classes scheduled for today.",
            ));
        };

        let mut text = format!("Your timetable for {day_name}:\n");
        for (slot, details) in schedule {
            match details {
                TimetableSlot::Class {
                    subject,
                    faculty,
                    classroom,
                    ..
                } => {
                    text.push_str(&format!("{slot}: {subject} ({classroom}) with {faculty}\n"));
                }
                TimetableSlot::Activity { activity } => {
                    text.push_str(&format!("{slot}: {activity}\n"));
                }
            }
        }

        Some(ComposedResponse::text(text))
    }

    /// Faculty lookup with sub-intent branching
    ///
    /// Returns `None` when no faculty name from the timetable appears in
    /// the query, leaving the default apology in place.
    pub(super) fn handle_faculty(
        &self,
        student: Option<StudentId>,
        query: &str,
    ) -> Option<ComposedResponse> {
        if student.is_none() {
            return Some(ComposedResponse::text(PROFILE_MISSING));
        }
        let Some(timetable) = self.timetable.as_ref() else {
            return Some(ComposedResponse::text(TIMETABLE_UNAVAILABLE));
        };

        let faculty_name = timetable
            .faculty_names()
            .into_iter()
            .find(|name| query.contains(&name.to_lowercase()))?;

        let info = timetable.faculty_info(&faculty_name)?;

        if CONTACT_TOKENS.iter().any(|token| query.contains(token)) {
            let email = if info.email.is_empty() {
                "Not available".to_string()
            } else {
                info.email
            };
            return Some(ComposedResponse::text(format!(
                "{faculty_name}'s email: {email}"
            )));
        }

        if SCHEDULE_TOKENS.iter().any(|token| query.contains(token)) {
            let schedule = timetable.faculty_schedule(&faculty_name);
            if schedule.is_empty() {
                return Some(ComposedResponse::text(format!(
                    "No schedule found for {faculty_name}."
                )));
            }

            let mut text = format!("{faculty_name}'s schedule:\n");
            for (weekday, classes) in schedule {
                text.push_str(&format!("{}:\n", weekday_lower::display(weekday)));
                for class in classes {
                    text.push_str(&format!(
                        "  {}: {} ({})\n",
                        class.time_slot, class.subject, class.classroom
                    ));
                }
            }
            return Some(ComposedResponse::text(text));
        }

        Some(ComposedResponse::text(format!(
            "Faculty: {}\nSubject: {}\nEmail: {}\nUsually teaches in: {}",
            info.name,
            info.subject,
            if info.email.is_empty() {
                "Not available"
            } else {
                info.email.as_str()
            },
            info.classroom
        )))
    }

    pub(super) fn handle_current_lecture(
        &self,
        student: Option<StudentId>,
        now: NaiveDateTime,
    ) -> Option<ComposedResponse> {
        let Some(student) = student else {
            return Some(ComposedResponse::text(PROFILE_MISSING));
        };

        let lectures = self
            .lectures
            .today(student, now.date().weekday(), now.date());
        let current = lectures
            .iter()
            .find(|lecture| lecture.slot.contains(now.time()));

        match current {
            Some(lecture) => {
                let mut text = format!(
                    "Your current lecture is {} with {} in {}.",
                    lecture.subject, lecture.faculty, lecture.classroom
                );
                if !lecture.email.is_empty() {
                    text.push_str(&format!(" Faculty email: {}", lecture.email));
                }
                Some(ComposedResponse::text(text))
            }
            None => Some(ComposedResponse::text(
                "You don't have any lecture right now according to your timetable.",
            )),
        }
    }
}
