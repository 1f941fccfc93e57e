//! Common Types and Constants
//!
//! Shared data structures used across all scheduling modules.

use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Fraction of the word set introduced on day 0 (front-loading)
pub const FRONT_LOAD_RATIO: f64 = 0.4;

/// Fraction of the remaining words an interior day receives (decay)
pub const CARRY_DECAY_RATIO: f64 = 0.8;

/// Minimum lesson length in days
pub const MIN_DAY_COUNT: usize = 1;

/// Maximum lesson length in days
pub const MAX_DAY_COUNT: usize = 15;

/// Maximum word length in characters (after trim)
pub const MAX_WORD_CHARS: usize = 50;

// ==================== Activity Types ====================

/// Daily activity kind a word can be assigned to.
///
/// The declaration order is the canonical processing order for a day:
/// Vocabulary → Phonics → Spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityKind {
    Vocabulary,
    Phonics,
    Spelling,
}

impl ActivityKind {
    /// All kinds in canonical processing order.
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Vocabulary,
        ActivityKind::Phonics,
        ActivityKind::Spelling,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "vocabulary" => Some(ActivityKind::Vocabulary),
            "phonics" => Some(ActivityKind::Phonics),
            "spelling" => Some(ActivityKind::Spelling),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Vocabulary => "vocabulary",
            ActivityKind::Phonics => "phonics",
            ActivityKind::Spelling => "spelling",
        }
    }
}

// ==================== Word Types ====================

/// A single vocabulary item.
///
/// `text` is normalized (trimmed, lowercased) by the normalizer; two words
/// are the same entity iff their normalized texts are equal. `activities` is
/// non-empty, deduplicated, and kept in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub text: String,
    pub activities: Vec<ActivityKind>,
}

impl Word {
    pub fn has_activity(&self, kind: ActivityKind) -> bool {
        self.activities.contains(&kind)
    }
}

/// Deduplicated collection of words destined for one lesson.
///
/// No two entries share normalized text; first-seen input order is preserved
/// so that schedule generation is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordSet {
    pub words: Vec<Word>,
}

impl WordSet {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.words.iter().any(|w| w.text == text)
    }

    pub fn get(&self, text: &str) -> Option<&Word> {
        self.words.iter().find(|w| w.text == text)
    }
}

// ==================== Schedule Types ====================

/// One day of the lesson schedule.
///
/// Words are referenced by normalized text. `new_words` is the ordered list
/// of introductions; `review_words` carries reinforcement occurrences and is
/// kept in introduction order for deterministic processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    pub day_index: usize,
    pub new_words: Vec<String>,
    pub review_words: Vec<String>,
}

impl Day {
    pub fn new(day_index: usize) -> Self {
        Self {
            day_index,
            new_words: Vec::new(),
            review_words: Vec::new(),
        }
    }

    /// Derived display count, not stored.
    pub fn new_count(&self) -> usize {
        self.new_words.len()
    }

    /// Derived display count, not stored.
    pub fn review_count(&self) -> usize {
        self.review_words.len()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.new_words.iter().any(|w| w == text) || self.review_words.iter().any(|w| w == text)
    }
}

/// Day-by-day new/review plan for one lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub days: Vec<Day>,
}

impl Schedule {
    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Total introductions across all days (equals the word set size for a
    /// valid schedule).
    pub fn total_new_words(&self) -> usize {
        self.days.iter().map(|d| d.new_words.len()).sum()
    }

    /// Day index on which `text` is introduced, if any.
    ///
    /// For an invalid schedule with duplicate introductions this returns the
    /// earliest one.
    pub fn introduction_day(&self, text: &str) -> Option<usize> {
        self.days
            .iter()
            .find(|d| d.new_words.iter().any(|w| w == text))
            .map(|d| d.day_index)
    }
}

// ==================== Tests ====================
