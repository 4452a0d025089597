//! In-memory store implementations
//!
//! Backing stores for development, tests, and single-node deployments.
//! The relational store behind the admin dashboard satisfies the same
//! traits in production; the assistant core only ever reads.

use chrono::{NaiveDate, Weekday};
use dashmap::DashMap;
use parking_lot::RwLock;

use campus_assistant_core::{
    AttendanceRecord, AttendanceStore, Document, DocumentFilter, DocumentStore, Faq, FaqStore,
    Lecture, LectureStore, StudentId,
};

/// Document store over a concurrent map keyed by document id
#[derive(Default)]
pub struct MemoryDocumentStore {
    documents: DashMap<u64, Document>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a document
    pub fn insert(&self, document: Document) {
        self.documents.insert(document.id, document);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn list(&self, filter: &DocumentFilter) -> Vec<Document> {
        let mut documents: Vec<Document> = self
            .documents
            .iter()
            .filter(|entry| filter.matches(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        documents.sort_by_key(|doc| doc.id);
        documents
    }

    fn subjects(&self) -> Vec<String> {
        let mut documents: Vec<Document> =
            self.documents.iter().map(|e| e.value().clone()).collect();
        documents.sort_by_key(|doc| doc.id);

        let mut subjects: Vec<String> = Vec::new();
        for doc in documents {
            if !subjects
                .iter()
                .any(|s| s.eq_ignore_ascii_case(&doc.subject))
            {
                subjects.push(doc.subject);
            }
        }
        subjects
    }
}

/// FAQ store preserving insertion order
#[derive(Default)]
pub struct MemoryFaqStore {
    faqs: RwLock<Vec<Faq>>,
}

impl MemoryFaqStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, faq: Faq) {
        self.faqs.write().push(faq);
    }
}

impl FaqStore for MemoryFaqStore {
    fn list(&self) -> Vec<Faq> {
        self.faqs.read().clone()
    }
}

/// Attendance counters keyed by student
#[derive(Default)]
pub struct MemoryAttendanceStore {
    records: DashMap<StudentId, Vec<AttendanceRecord>>,
}

impl MemoryAttendanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, record: AttendanceRecord) {
        self.records.entry(record.student).or_default().push(record);
    }
}

impl AttendanceStore for MemoryAttendanceStore {
    fn list(&self, student: StudentId, subject: Option<&str>) -> Vec<AttendanceRecord> {
        let Some(records) = self.records.get(&student) else {
            return Vec::new();
        };
        records
            .iter()
            .filter(|record| {
                subject
                    .map(|s| record.subject.eq_ignore_ascii_case(s))
                    .unwrap_or(true)
            })
            .cloned()
            .collect()
    }
}

/// Scheduled lectures keyed by student
#[derive(Default)]
pub struct MemoryLectureStore {
    lectures: DashMap<StudentId, Vec<Lecture>>,
}

impl MemoryLectureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, lecture: Lecture) {
        self.lectures
            .entry(lecture.student)
            .or_default()
            .push(lecture);
    }
}

impl LectureStore for MemoryLectureStore {
    fn today(&self, student: StudentId, weekday: Weekday, date: NaiveDate) -> Vec<Lecture> {
        let Some(lectures) = self.lectures.get(&student) else {
            return Vec::new();
        };
        lectures
            .iter()
            .filter(|lecture| lecture.weekday == weekday && lecture.date == date)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_assistant_core::{DocType, TimeSlot};

    fn doc(id: u64, subject: &str, doc_type: DocType, active: bool) -> Document {
        Document {
            id,
            title: format!("doc-{id}"),
            description: String::new(),
            subject: subject.to_string(),
            unit: None,
            doc_type,
            extracted_text: String::new(),
            is_active: active,
        }
    }

    #[test]
    fn test_document_store_filters_and_orders() {
        let store = MemoryDocumentStore::new();
        store.insert(doc(3, "SE", DocType::Notes, true));
        store.insert(doc(1, "SE", DocType::Ppt, true));
        store.insert(doc(2, "TOC", DocType::Ppt, false));

        let active = store.list(&DocumentFilter::active());
        assert_eq!(active.iter().map(|d| d.id).collect::<Vec<_>>(), [1, 3]);

        let ppt = store.list(&DocumentFilter {
            doc_type: Some(DocType::Ppt),
            ..Default::default()
        });
        assert_eq!(ppt.iter().map(|d| d.id).collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn test_subjects_distinct_case_insensitive() {
        let store = MemoryDocumentStore::new();
        store.insert(doc(1, "SE", DocType::Ppt, true));
        store.insert(doc(2, "se", DocType::Notes, true));
        store.insert(doc(3, "TOC", DocType::Ppt, true));
        assert_eq!(store.subjects(), ["SE", "TOC"]);
    }

    #[test]
    fn test_attendance_store_subject_lookup() {
        let store = MemoryAttendanceStore::new();
        store.insert(AttendanceRecord {
            student: 7,
            subject: "Software Engineering".to_string(),
            total_classes: 30,
            attended_classes: 24,
        });
        store.insert(AttendanceRecord {
            student: 7,
            subject: "Theory of Computation".to_string(),
            total_classes: 28,
            attended_classes: 20,
        });

        assert_eq!(store.list(7, None).len(), 2);
        assert_eq!(store.list(7, Some("software engineering")).len(), 1);
        assert!(store.list(8, None).is_empty());
    }

    #[test]
    fn test_lecture_store_today() {
        let store = MemoryLectureStore::new();
        let date = NaiveDate::from_ymd_opt(2025, 8, 7).unwrap();
        store.insert(Lecture {
            student: 7,
            subject: "Software Engineering".to_string(),
            faculty: "Gaurav Soni".to_string(),
            classroom: "A-204".to_string(),
            email: String::new(),
            weekday: Weekday::Thu,
            slot: TimeSlot::parse("09:00-10:00").unwrap(),
            date,
            is_attended: false,
        });

        assert_eq!(store.today(7, Weekday::Thu, date).len(), 1);
        assert!(store.today(7, Weekday::Fri, date).is_empty());
    }
}
