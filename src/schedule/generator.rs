//! Schedule Generation
//!
//! Builds the initial day-by-day allocation: a front-loaded share of the
//! word set on day 0, a decaying share of the remainder on each interior
//! day, a review-only final day, and full review propagation.

use crate::types::{
    Day, Schedule, WordSet, CARRY_DECAY_RATIO, FRONT_LOAD_RATIO, MAX_DAY_COUNT, MIN_DAY_COUNT,
};

use super::validator::{validate, ValidationResult};
use super::ScheduleError;

/// Generates the initial schedule for `words` over `day_count` days.
///
/// Allocation (word order = word set order, so output is reproducible):
///
/// 1. `day_count == 1`: everything is new on day 0, no review exists.
/// 2. Day 0 receives `ceil(N * FRONT_LOAD_RATIO)` words, clamped to `[1, N]`.
/// 3. Each interior day (all but first and last) receives
///    `ceil(remaining * CARRY_DECAY_RATIO)` from the front of the remaining
///    queue, capped at what remains; exhausted interior days get zero.
/// 4. The final day introduces nothing. Leftovers the rounding never placed
///    are re-homed onto the second-to-last day instead.
/// 5. Every day reviews the union of all earlier introductions.
///
/// The result is checked against the validator before being returned; a
/// failure there is a programming error, surfaced as
/// [`ScheduleError::GeneratorInvariant`] and logged.
pub fn generate(words: &WordSet, day_count: usize) -> Result<Schedule, ScheduleError> {
    if words.is_empty() {
        return Err(ScheduleError::EmptyWordSet);
    }
    if !(MIN_DAY_COUNT..=MAX_DAY_COUNT).contains(&day_count) {
        return Err(ScheduleError::InvalidDayCount { day_count });
    }

    let texts: Vec<String> = words.words.iter().map(|w| w.text.clone()).collect();
    let total = texts.len();
    let mut days: Vec<Day> = (0..day_count).map(Day::new).collect();

    if day_count == 1 {
        days[0].new_words = texts;
    } else {
        let day0_count = ceil_ratio(total, FRONT_LOAD_RATIO).clamp(1, total);
        let mut queue = texts.into_iter();

        days[0].new_words = queue.by_ref().take(day0_count).collect();
        let mut remaining = total - day0_count;

        for day in days.iter_mut().take(day_count - 1).skip(1) {
            if remaining == 0 {
                break;
            }
            let take = ceil_ratio(remaining, CARRY_DECAY_RATIO).min(remaining);
            day.new_words = queue.by_ref().take(take).collect();
            remaining -= take;
        }

        // ceil on a shrinking remainder drains before the last day whenever
        // an interior day exists; the two-day case and any rounding surprise
        // land here instead of on the review-only final day.
        if remaining > 0 {
            days[day_count - 2].new_words.extend(queue);
        }
    }

    propagate_reviews(&mut days);

    let schedule = Schedule { days };
    if let ValidationResult::Invalid(violations) = validate(&schedule, words) {
        log::error!(
            "generator produced invalid schedule for {} words over {} days: {:?}",
            total,
            day_count,
            violations
        );
        return Err(ScheduleError::GeneratorInvariant(violations));
    }

    Ok(schedule)
}

/// Day D reviews the union of introductions from all days before D, in
/// introduction order (review propagation default).
fn propagate_reviews(days: &mut [Day]) {
    let mut introduced: Vec<String> = Vec::new();
    for day in days.iter_mut() {
        day.review_words = introduced.clone();
        introduced.extend(day.new_words.iter().cloned());
    }
}

fn ceil_ratio(count: usize, ratio: f64) -> usize {
    (count as f64 * ratio).ceil() as usize
}

// ==================== Tests ====================
