//! Lesson Schedule Engine
//!
//! Partitions a word set into a day-by-day new/review plan and keeps that
//! plan internally consistent across manual edits:
//!
//! - [`generator`] — front-loaded allocation with decay, review propagation
//! - [`validator`] — invariant checking over any candidate schedule
//! - [`editor`] — all-or-nothing application of a single manual move
//!
//! Schedule invariants:
//!
//! - **introduction-once**: every word appears in exactly one day's new list
//! - **review-after-learn**: a word reviews only after its introduction day
//! - **terminal day is review-only**: the last day introduces nothing
//!   (unless the lesson is a single day)
//! - **review propagation default**: generated schedules review a word on
//!   every day after its introduction; edits may drop individual review
//!   occurrences but never review before the introduction

pub mod editor;
pub mod generator;
pub mod validator;

pub use editor::apply_move;
pub use generator::generate;
pub use validator::{validate, ValidationResult};

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ==================== Violations ====================

/// One schedule invariant violation, with the offending word/day so the UI
/// can point at the exact problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Violation {
    /// Word from the word set never introduced.
    MissingIntroduction { word: String },
    /// Word introduced on more than one day.
    DuplicateIntroduction { word: String },
    /// Review occurrence on or before the introduction day.
    ReviewBeforeLearn { word: String, day: usize },
    /// Last day of a multi-day lesson introduces words.
    FinalDayHasNewWords { day: usize },
    /// Word listed twice within a single day.
    DuplicateInDay { word: String, day: usize },
    /// Schedule references a word that is not in the word set.
    UnknownWord { word: String, day: usize },
}

// ==================== Errors ====================

/// Schedule generation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Caller-correctable: scheduling needs at least one word.
    #[error("word set is empty")]
    EmptyWordSet,

    /// Caller-correctable: lesson length out of the supported range.
    #[error("day count {day_count} out of range")]
    InvalidDayCount { day_count: usize },

    /// Defensive check tripped: the generator produced a schedule its own
    /// validator rejects. Indicates a bug, not bad input.
    #[error("generated schedule violates invariants: {0:?}")]
    GeneratorInvariant(Vec<Violation>),
}

/// Schedule edit failure. The expected, frequent-case error path: most
/// invalid drags are user mistakes, so rejection is cheap and the original
/// schedule is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("move would violate schedule invariants: {0:?}")]
    WouldViolate(Vec<Violation>),

    #[error("day {day} out of range")]
    DayOutOfRange { day: usize },

    #[error("word {word:?} is not on day {day}")]
    WordNotInDay { word: String, day: usize },
}
