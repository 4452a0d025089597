//! In-memory persistence for the campus assistant
//!
//! Implements the core store traits over concurrent maps, plus demo
//! data seeding for development deployments and tests. The production
//! relational store is an external collaborator behind the same traits.

pub mod demo;
pub mod memory;

pub use demo::{demo_stores, DemoStores, DEMO_STUDENT};
pub use memory::{
    MemoryAttendanceStore, MemoryDocumentStore, MemoryFaqStore, MemoryLectureStore,
};
