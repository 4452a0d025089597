//! Attendance projection tools
//!
//! Pure arithmetic consumed by the attendance handler: the
//! classes-needed closed form and the timetable-driven week estimate.

pub mod projection;
pub mod remaining;

pub use projection::{project, Projection, ProjectionOutcome};
pub use remaining::{remaining_classes, weeks_to_target, UpcomingClass};
