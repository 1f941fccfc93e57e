//! Schedule Editing
//!
//! Applies one discrete teacher action (a completed drag-and-drop) to an
//! existing schedule. The edit is all-or-nothing: a candidate schedule is
//! built, run through the validator, and either returned whole or rejected
//! whole. The input schedule is never mutated.

use crate::types::{Schedule, WordSet};

use super::validator::{validate, ValidationResult};
use super::EditError;

/// Moves `word` out of `from_day` and into `to_day`, as a new introduction
/// (`as_new`) or as a review occurrence.
///
/// Moving an introduction re-homes the word's review occurrences
/// mechanically: all of them are dropped, then regenerated on every day
/// after the new introduction day, so one drag keeps the downstream days
/// consistent instead of requiring the teacher to fix each one.
///
/// The candidate is validated against `words`; a rejection returns
/// [`EditError::WouldViolate`] with the full violation list and leaves the
/// original schedule untouched.
pub fn apply_move(
    schedule: &Schedule,
    words: &WordSet,
    word: &str,
    from_day: usize,
    to_day: usize,
    as_new: bool,
) -> Result<Schedule, EditError> {
    let day_count = schedule.day_count();
    if from_day >= day_count {
        return Err(EditError::DayOutOfRange { day: from_day });
    }
    if to_day >= day_count {
        return Err(EditError::DayOutOfRange { day: to_day });
    }
    if !schedule.days[from_day].contains(word) {
        return Err(EditError::WordNotInDay {
            word: word.to_string(),
            day: from_day,
        });
    }

    let mut candidate = schedule.clone();

    {
        let source = &mut candidate.days[from_day];
        source.new_words.retain(|w| w != word);
        source.review_words.retain(|w| w != word);
    }

    if as_new {
        candidate.days[to_day].new_words.push(word.to_string());

        // 引入日变更: 清掉旧的复习出现, 在新引入日之后整体重建
        for day in candidate.days.iter_mut() {
            day.review_words.retain(|w| w != word);
        }
        for day in candidate.days.iter_mut().skip(to_day + 1) {
            day.review_words.push(word.to_string());
        }
    } else {
        candidate.days[to_day].review_words.push(word.to_string());
    }

    match validate(&candidate, words) {
        ValidationResult::Valid => Ok(candidate),
        ValidationResult::Invalid(violations) => {
            log::debug!(
                "rejected move of {word:?} from day {from_day} to day {to_day} (as_new={as_new}): {violations:?}"
            );
            Err(EditError::WouldViolate(violations))
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{generate, Violation};
    use crate::types::{ActivityKind, Word};

    fn word_set(texts: &[&str]) -> WordSet {
        WordSet {
            words: texts
                .iter()
                .map(|t| Word {
                    text: t.to_string(),
                    activities: vec![ActivityKind::Vocabulary],
                })
                .collect(),
        }
    }

    fn base() -> (Schedule, WordSet) {
        let words = word_set(&["cat", "dog", "bird", "fish", "lion"]);
        let schedule = generate(&words, 5).unwrap();
        (schedule, words)
    }

    // ============ 合法移动 ============

    #[test]
    fn test_move_introduction_later_repropagates_reviews() {
        let (schedule, words) = base();
        let intro = schedule.introduction_day("cat").unwrap();
        assert_eq!(intro, 0);

        let edited = apply_move(&schedule, &words, "cat", 0, 2, true).unwrap();

        assert_eq!(edited.introduction_day("cat"), Some(2));
        // 引入日及之前不再复习, 之后每天都复习
        for day in &edited.days {
            let has_review = day.review_words.iter().any(|w| w == "cat");
            assert_eq!(has_review, day.day_index > 2, "day {}", day.day_index);
        }
        assert!(validate(&edited, &words).is_valid());
    }

    #[test]
    fn test_move_result_is_valid() {
        let (schedule, words) = base();
        let edited = apply_move(&schedule, &words, "bird", 1, 3, true).unwrap();
        assert!(validate(&edited, &words).is_valid());
    }

    #[test]
    fn test_move_review_occurrence_to_open_day() {
        let (mut schedule, words) = base();
        // 老师先手动去掉了 day3 的 cat 复习
        schedule.days[3].review_words.retain(|w| w != "cat");
        assert!(validate(&schedule, &words).is_valid());

        // 再把 day2 的 cat 复习拖到 day3
        let edited = apply_move(&schedule, &words, "cat", 2, 3, false).unwrap();

        assert!(!edited.days[2].review_words.iter().any(|w| w == "cat"));
        assert!(edited.days[3].review_words.iter().any(|w| w == "cat"));
        assert!(validate(&edited, &words).is_valid());
    }

    #[test]
    fn test_edit_does_not_mutate_original() {
        let (schedule, words) = base();
        let snapshot = schedule.clone();

        let _ = apply_move(&schedule, &words, "cat", 0, 2, true).unwrap();
        assert_eq!(schedule, snapshot);
    }

    // ============ 拒绝路径 ============

    #[test]
    fn test_move_new_word_to_final_day_rejected() {
        // bird 拖到最后一天作为新词必须被拒
        let (schedule, words) = base();
        let intro = schedule.introduction_day("bird").unwrap();

        let err = apply_move(&schedule, &words, "bird", intro, 4, true).unwrap_err();
        match err {
            EditError::WouldViolate(violations) => {
                assert!(violations.contains(&Violation::FinalDayHasNewWords { day: 4 }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_move_review_before_introduction_rejected() {
        // fish 在引入前被拖进 day0 复习
        let (schedule, words) = base();
        let intro = schedule.introduction_day("fish").unwrap();
        assert!(intro > 0);

        let err = apply_move(&schedule, &words, "fish", intro, 0, false).unwrap_err();
        match err {
            EditError::WouldViolate(violations) => {
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, Violation::ReviewBeforeLearn { word, .. } if word == "fish")));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_demote_introduction_to_review_rejected() {
        // 把引入本身改成复习会让词失去引入日
        let (schedule, words) = base();
        let err = apply_move(&schedule, &words, "cat", 0, 3, false).unwrap_err();
        match err {
            EditError::WouldViolate(violations) => {
                assert!(violations
                    .contains(&Violation::MissingIntroduction { word: "cat".into() }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_review_in_day_rejected() {
        let (schedule, words) = base();
        // day3 已经复习 cat, 再把 day2 的复习拖过去
        let err = apply_move(&schedule, &words, "cat", 2, 3, false).unwrap_err();
        assert!(matches!(err, EditError::WouldViolate(_)));
    }

    #[test]
    fn test_rejection_leaves_original_untouched_and_valid() {
        let (schedule, words) = base();
        let snapshot = schedule.clone();

        let result = apply_move(&schedule, &words, "bird", 1, 4, true);
        assert!(result.is_err());
        assert_eq!(schedule, snapshot);
        assert!(validate(&schedule, &words).is_valid());
    }

    #[test]
    fn test_day_out_of_range() {
        let (schedule, words) = base();
        assert_eq!(
            apply_move(&schedule, &words, "cat", 9, 1, false).unwrap_err(),
            EditError::DayOutOfRange { day: 9 }
        );
        assert_eq!(
            apply_move(&schedule, &words, "cat", 0, 9, true).unwrap_err(),
            EditError::DayOutOfRange { day: 9 }
        );
    }

    #[test]
    fn test_word_not_in_day() {
        let (schedule, words) = base();
        // lion 的引入日不是 day0
        assert_eq!(
            apply_move(&schedule, &words, "lion", 0, 2, true).unwrap_err(),
            EditError::WordNotInDay {
                word: "lion".into(),
                day: 0
            }
        );
    }
}
