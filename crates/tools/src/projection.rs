//! Attendance projection
//!
//! Closed-form answer to "how many more classes until I reach N%".
//! Solving (attended + x) / (total + x) = target/100 for x gives
//! x = (target·total − 100·attended) / (100 − target); the target=100
//! case is handled before the division ever happens.
//!
//! Rounding uses `f64::round` (half away from zero).

use serde::Serialize;

/// Which branch of the projection applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionOutcome {
    /// Current attendance already meets the target
    AlreadyMet,
    /// Target is 100%, every remaining class is needed
    AttendAll,
    /// Rounded to zero classes but target not yet met
    Maintain,
    /// A positive number of classes is needed
    Attend,
}

/// Projection result
#[derive(Debug, Clone, Serialize)]
pub struct Projection {
    pub classes_needed: u32,
    pub outcome: ProjectionOutcome,
    target_pct: u32,
}

impl Projection {
    /// Student-facing message for this outcome
    pub fn message(&self) -> String {
        match self.outcome {
            ProjectionOutcome::AlreadyMet => {
                "You have already achieved your target attendance!".to_string()
            }
            ProjectionOutcome::AttendAll => format!(
                "You need to attend all remaining {} classes to reach 100% attendance.",
                self.classes_needed
            ),
            ProjectionOutcome::Maintain => {
                "You're very close to your target! Just maintain your attendance.".to_string()
            }
            ProjectionOutcome::Attend => format!(
                "You need to attend {} more classes to reach {}% attendance.",
                self.classes_needed, self.target_pct
            ),
        }
    }
}

/// Project classes needed to reach a target percentage
///
/// Percentages are plain numbers 0-100. Tolerates attended > total
/// without panicking.
pub fn project(current_pct: f64, target_pct: u32, total: u32, attended: u32) -> Projection {
    if current_pct >= target_pct as f64 {
        return Projection {
            classes_needed: 0,
            outcome: ProjectionOutcome::AlreadyMet,
            target_pct,
        };
    }

    if target_pct == 100 {
        return Projection {
            classes_needed: total.saturating_sub(attended),
            outcome: ProjectionOutcome::AttendAll,
            target_pct,
        };
    }

    let x = (target_pct as f64 * total as f64 - 100.0 * attended as f64)
        / (100.0 - target_pct as f64);
    let needed = x.round().max(0.0) as u32;

    if needed == 0 {
        return Projection {
            classes_needed: 0,
            outcome: ProjectionOutcome::Maintain,
            target_pct,
        };
    }

    Projection {
        classes_needed: needed,
        outcome: ProjectionOutcome::Attend,
        target_pct,
    }
}
