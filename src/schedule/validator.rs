//! Schedule Validation
//!
//! Checks any candidate schedule (generated or manually edited) against the
//! schedule invariants. All violations are collected in one pass, no
//! short-circuit, so the UI can show every problem at once. Pure, read-only.

use std::collections::HashMap;

use crate::types::{Schedule, WordSet};

use super::Violation;

/// Outcome of a validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(Vec<Violation>),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            ValidationResult::Valid => &[],
            ValidationResult::Invalid(v) => v,
        }
    }
}

/// Validates `schedule` against `words`.
///
/// Checks, independently:
/// - every word is introduced exactly once
/// - no review occurrence before its introduction day
/// - the final day of a multi-day lesson introduces nothing
/// - no word appears twice within the same day
/// - every scheduled word exists in the word set
pub fn validate(schedule: &Schedule, words: &WordSet) -> ValidationResult {
    let mut violations = Vec::new();

    // 每个词的引入日集合
    let mut introductions: HashMap<&str, Vec<usize>> = HashMap::new();
    for day in &schedule.days {
        for text in &day.new_words {
            introductions
                .entry(text.as_str())
                .or_default()
                .push(day.day_index);
        }
    }

    for word in &words.words {
        match introductions.get(word.text.as_str()).map(|d| d.len()) {
            None | Some(0) => violations.push(Violation::MissingIntroduction {
                word: word.text.clone(),
            }),
            Some(1) => {}
            Some(_) => violations.push(Violation::DuplicateIntroduction {
                word: word.text.clone(),
            }),
        }
    }

    for day in &schedule.days {
        for text in day.new_words.iter().chain(day.review_words.iter()) {
            if !words.contains(text) {
                violations.push(Violation::UnknownWord {
                    word: text.clone(),
                    day: day.day_index,
                });
            }
        }

        for text in &day.review_words {
            let intro = introductions
                .get(text.as_str())
                .and_then(|days| days.iter().min().copied());
            match intro {
                Some(intro_day) if intro_day < day.day_index => {}
                _ => violations.push(Violation::ReviewBeforeLearn {
                    word: text.clone(),
                    day: day.day_index,
                }),
            }
        }

        let mut seen: Vec<&str> = Vec::new();
        let mut reported: Vec<&str> = Vec::new();
        for text in day.new_words.iter().chain(day.review_words.iter()) {
            if seen.contains(&text.as_str()) {
                // 同一天同一词只报一次
                if !reported.contains(&text.as_str()) {
                    reported.push(text.as_str());
                    violations.push(Violation::DuplicateInDay {
                        word: text.clone(),
                        day: day.day_index,
                    });
                }
            } else {
                seen.push(text.as_str());
            }
        }
    }

    if let Some(last) = schedule.days.last() {
        if schedule.day_count() > 1 && !last.new_words.is_empty() {
            violations.push(Violation::FinalDayHasNewWords {
                day: last.day_index,
            });
        }
    }

    if violations.is_empty() {
        ValidationResult::Valid
    } else {
        ValidationResult::Invalid(violations)
    }
}

// ==================== Tests ====================
