//! Academic-calendar handler
//!
//! Branches on query cues (today, exams, diwali, other events) against
//! the calendar dataset. A missing dataset is a graceful "not
//! available" reply, never a crash.

use chrono::NaiveDateTime;

use super::{ComposedResponse, ResponseComposer};

const TODAY_CUES: [&str; 3] = ["today", "aj", "aaj"];
const EVENT_CUES: [&str; 5] = ["exam", "midterm", "end sem", "diwali", "vacation"];

impl ResponseComposer {
    pub(super) fn handle_calendar(
        &self,
        query: &str,
        now: NaiveDateTime,
    ) -> Option<ComposedResponse> {
        let Some(calendar) = self.calendar.as_ref() else {
            return Some(ComposedResponse::text(
                "Academic calendar data is not available at the moment.",
            ));
        };

        if TODAY_CUES.iter().any(|cue| query.contains(cue)) {
            let text = match calendar.events_on(now.date()) {
                Some(events) => format!("Today's schedule: {}", events.join(", ")),
                None => "No special events scheduled for today according to the academic \
                         calendar."
                    .to_string(),
            };
            return Some(ComposedResponse::text(text));
        }

        if EVENT_CUES.iter().any(|cue| query.contains(cue)) {
            if query.contains("exam") {
                let mut text = String::from("Exam dates:\n");
                if calendar.has_event("Mid Sem Exam Start") {
                    text.push_str("Mid Semester Exams: July 28 - August 2, 2025\n");
                }
                if calendar.has_event("End Sem Theory Exam") {
                    text.push_str("End Semester Theory Exams: November 10-22, 2025\n");
                }
                return Some(ComposedResponse::text(text));
            }

            if query.contains("diwali") {
                return Some(ComposedResponse::text(
                    "Diwali Vacation: October 19 - November 2, 2025",
                ));
            }

            let mut text = String::from("Academic Calendar Highlights:\n");
            text.push_str(&format!("Term: {}\n", calendar.term));
            text.push_str("Teaching End: October 11, 2025\n");
            text.push_str("Diwali Vacation: October 19 - November 2, 2025\n");
            text.push_str("End Semester Exams: November 10-22, 2025");
            return Some(ComposedResponse::text(text));
        }

        let mut text = format!("Academic Calendar: {}\n", calendar.term);
        text.push_str(&format!("Programs: {}\n", calendar.programs.join(", ")));
        text.push_str(&format!("Semesters: {}\n", calendar.semesters.join(", ")));
        text.push_str("Key dates available. Ask about specific events like exams or vacations.");
        Some(ComposedResponse::text(text))
    }
}
