//! Attendance handler
//!
//! Resolves a specific subject by token overlap or the abbreviation
//! table, falling back to the aggregate across all subjects. When the
//! query carries a target cue with a parsable percentage, the
//! projection arithmetic chains on, and for subject-specific targets a
//! timetable-driven week estimate is appended when one exists.

use chrono::NaiveDateTime;

use campus_assistant_core::{AttendanceRecord, StudentId};
use campus_assistant_text_processing::{extract_target_percentage, has_target_cue};
use campus_assistant_tools::{project, remaining_classes, weeks_to_target};

use super::{ComposedResponse, ResponseComposer};

/// Abbreviation → full subject label, checked in this order
const SUBJECT_ABBREVIATIONS: [(&str, &str); 7] = [
    ("daa", "Design and Analysis of Algorithms"),
    ("se", "Software Engineering"),
    ("dvd", "Data Visualization & Data Analytics"),
    ("ep", "Enterprise Programming"),
    ("toc", "Theory of Computation"),
    ("aws", "AWS Fundamentals"),
    ("pce", "Professionalism & Corporate Ethics"),
];

impl ResponseComposer {
    pub(super) fn handle_attendance(
        &self,
        student: Option<StudentId>,
        query: &str,
        now: NaiveDateTime,
    ) -> Option<ComposedResponse> {
        let Some(student) = student else {
            return Some(ComposedResponse::text(
                "I couldn't find your student profile. Please contact administration.",
            ));
        };

        let records = self.attendance.list(student, None);

        match self.resolve_subject_record(query, &records) {
            Some(record) => Some(self.subject_attendance_reply(record, query, now)),
            None => Some(self.aggregate_attendance_reply(&records, query)),
        }
    }

    /// Find the record for a subject named in the query
    ///
    /// Token overlap first: any subject word longer than three
    /// characters appearing in the query. Then the abbreviation table,
    /// matched as a substring the way students type it ("daa ka
    /// attendance").
    fn resolve_subject_record<'a>(
        &self,
        query: &str,
        records: &'a [AttendanceRecord],
    ) -> Option<&'a AttendanceRecord> {
        for record in records {
            let matched = record
                .subject
                .to_lowercase()
                .split_whitespace()
                .any(|word| word.chars().count() > 3 && query.contains(word));
            if matched {
                return Some(record);
            }
        }

        for (abbr, full_name) in SUBJECT_ABBREVIATIONS {
            if query.contains(abbr) {
                if let Some(record) = records
                    .iter()
                    .find(|r| r.subject.eq_ignore_ascii_case(full_name))
                {
                    return Some(record);
                }
            }
        }

        None
    }

    fn subject_attendance_reply(
        &self,
        record: &AttendanceRecord,
        query: &str,
        now: NaiveDateTime,
    ) -> ComposedResponse {
        let mut text = format!(
            "Your attendance in {} is {}% ({}/{} classes).",
            record.subject,
            record.percentage(),
            record.attended_classes,
            record.total_classes
        );

        if let Some(target) = self.requested_target(query) {
            let projection = project(
                record.percentage(),
                target,
                record.total_classes,
                record.attended_classes,
            );
            let mut message = projection.message();

            if projection.classes_needed > 0 {
                if let Some(weeks) = self.weeks_estimate(&record.subject, projection.classes_needed, now)
                {
                    message.push_str(&format!(
                        " You can achieve this in approximately {weeks} weeks."
                    ));
                }
            }

            text.push(' ');
            text.push_str(&message);
        }

        ComposedResponse::text(text)
    }

    fn aggregate_attendance_reply(
        &self,
        records: &[AttendanceRecord],
        query: &str,
    ) -> ComposedResponse {
        let total: u32 = records.iter().map(|r| r.total_classes).sum();
        let attended: u32 = records.iter().map(|r| r.attended_classes).sum();

        if records.is_empty() || total == 0 {
            return ComposedResponse::text("No attendance records found for you.");
        }

        let overall = (attended as f64 / total as f64 * 10000.0).round() / 100.0;
        let mut text = format!(
            "Your overall attendance is {overall}% ({attended}/{total} classes across all \
             subjects)."
        );

        if let Some(target) = self.requested_target(query) {
            let projection = project(overall, target, total, attended);
            text.push(' ');
            text.push_str(&projection.message());
        }

        ComposedResponse::text(text)
    }

    /// Target percentage when the query both cues a target and names one
    fn requested_target(&self, query: &str) -> Option<u32> {
        if !has_target_cue(query) {
            return None;
        }
        extract_target_percentage(query)
    }

    /// Week estimate from the subject's remaining weekly occurrences
    ///
    /// `None` when either dataset is missing or the subject has no
    /// upcoming teaching-day classes; the caller omits the sentence.
    fn weeks_estimate(&self, subject: &str, needed: u32, now: NaiveDateTime) -> Option<u32> {
        let timetable = self.timetable.as_ref()?;
        let calendar = self.calendar.as_ref()?;
        let upcoming = remaining_classes(subject, timetable, calendar, now.date(), now.time());
        weeks_to_target(needed, upcoming.len())
    }
}
