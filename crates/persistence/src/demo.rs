//! Demo data seeding
//!
//! Populates the in-memory stores with a small realistic corpus so the
//! assistant answers out of the box in development deployments.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use campus_assistant_core::{
    AttendanceRecord, DocType, Document, Faq, FaqCategory, Lecture, StudentId, TimeSlot,
};

use crate::memory::{
    MemoryAttendanceStore, MemoryDocumentStore, MemoryFaqStore, MemoryLectureStore,
};

/// The student id every demo record belongs to
pub const DEMO_STUDENT: StudentId = 1;

/// Fully seeded in-memory stores
pub struct DemoStores {
    pub documents: Arc<MemoryDocumentStore>,
    pub faqs: Arc<MemoryFaqStore>,
    pub attendance: Arc<MemoryAttendanceStore>,
    pub lectures: Arc<MemoryLectureStore>,
}

/// Build and seed the demo stores
pub fn demo_stores(today: NaiveDate) -> DemoStores {
    let documents = Arc::new(MemoryDocumentStore::new());
    let faqs = Arc::new(MemoryFaqStore::new());
    let attendance = Arc::new(MemoryAttendanceStore::new());
    let lectures = Arc::new(MemoryLectureStore::new());

    seed_documents(&documents);
    seed_faqs(&faqs);
    seed_attendance(&attendance);
    seed_lectures(&lectures, today);

    tracing::info!(
        documents = documents.len(),
        "Seeded demo stores for student {DEMO_STUDENT}"
    );

    DemoStores {
        documents,
        faqs,
        attendance,
        lectures,
    }
}

fn document(
    id: u64,
    title: &str,
    subject: &str,
    doc_type: DocType,
    unit: Option<u32>,
    description: &str,
) -> Document {
    Document {
        id,
        title: title.to_string(),
        description: description.to_string(),
        subject: subject.to_string(),
        unit,
        doc_type,
        extracted_text: String::new(),
        is_active: true,
    }
}

fn seed_documents(store: &MemoryDocumentStore) {
    store.insert(document(
        1,
        "Requirements Engineering Slides",
        "SE",
        DocType::Ppt,
        Some(2),
        "Unit 2 lecture slides",
    ));
    store.insert(document(
        2,
        "Design Patterns Notes",
        "SE",
        DocType::Notes,
        Some(3),
        "Creational and structural patterns",
    ));
    store.insert(document(
        3,
        "Software Engineering Syllabus",
        "SE",
        DocType::Syllabus,
        None,
        "Course outline and evaluation scheme",
    ));
    store.insert(document(
        4,
        "Greedy Algorithms Slides",
        "DAA",
        DocType::Ppt,
        Some(4),
        "Unit 4 lecture slides",
    ));
    store.insert(document(
        5,
        "Dynamic Programming Assignment",
        "DAA",
        DocType::Assignment,
        Some(5),
        "Problems on LCS and knapsack",
    ));
    store.insert(document(
        6,
        "Pumping Lemma Notes",
        "TOC",
        DocType::Notes,
        Some(2),
        "Regular language proofs",
    ));
    store.insert(document(
        7,
        "Mid Semester Question Paper 2024",
        "TOC",
        DocType::QuestionPaper,
        None,
        "Previous year paper",
    ));
    store.insert(document(
        8,
        "Exam Form Circular",
        "EP",
        DocType::Circular,
        None,
        "Exam form submission dates",
    ));
}

fn seed_faqs(store: &MemoryFaqStore) {
    store.insert(Faq {
        question: "When is the exam form deadline?".to_string(),
        answer: "The exam form deadline is November 15th, 2025.".to_string(),
        category: FaqCategory::Examination,
    });
    store.insert(Faq {
        question: "How do I apply for scholarships?".to_string(),
        answer: "Scholarship applications can be submitted through the student portal \
                 between September 1st and October 15th."
            .to_string(),
        category: FaqCategory::Scholarship,
    });
    store.insert(Faq {
        question: "What are the hostel fees?".to_string(),
        answer: "Hostel fees are ₹25,000 per semester which includes accommodation and meals."
            .to_string(),
        category: FaqCategory::Hostel,
    });
}

fn seed_attendance(store: &MemoryAttendanceStore) {
    let records = [
        ("Software Engineering", 32, 27),
        ("Design and Analysis of Algorithms", 30, 22),
        ("Data Visualization & Data Analytics", 28, 25),
        ("Enterprise Programming", 26, 19),
        ("Theory of Computation", 30, 21),
    ];
    for (subject, total, attended) in records {
        store.insert(AttendanceRecord {
            student: DEMO_STUDENT,
            subject: subject.to_string(),
            total_classes: total,
            attended_classes: attended,
        });
    }
}

fn seed_lectures(store: &MemoryLectureStore, today: NaiveDate) {
    let slots = [
        ("09:00-10:00", "Software Engineering", "Gaurav Soni", "A-204"),
        (
            "10:00-11:00",
            "Design and Analysis of Algorithms",
            "Keerthana S",
            "A-207",
        ),
        ("11:00-12:00", "Theory of Computation", "Nidhi Patel", "A-210"),
    ];
    for (slot, subject, faculty, classroom) in slots {
        let slot = match TimeSlot::parse(slot) {
            Ok(slot) => slot,
            Err(e) => {
                tracing::warn!(error = %e, "Skipping demo lecture with bad slot");
                continue;
            }
        };
        store.insert(Lecture {
            student: DEMO_STUDENT,
            subject: subject.to_string(),
            faculty: faculty.to_string(),
            classroom: classroom.to_string(),
            email: format!(
                "{}@example.edu",
                faculty.to_lowercase().replace(' ', ".")
            ),
            weekday: today.weekday(),
            slot,
            date: today,
            is_attended: false,
        });
    }
}
