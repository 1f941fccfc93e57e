//! Word Set Normalization
//!
//! Turns raw teacher input (manual entry, file import, OCR tokens) into a
//! deduplicated [`WordSet`]:
//!
//! - Trims and lowercases word text
//! - Merges duplicate words by unioning their activity sets
//! - Rejects invalid entries with an exhaustive problem list, never silently
//!
//! Pure function over its input; `normalize(normalize(x)) == normalize(x)`
//! up to ordering.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{ActivityKind, Word, WordSet, MAX_WORD_CHARS};

// ==================== Input Contract ====================

/// One raw entry as delivered by the input boundary (manual entry, import
/// parser, OCR tokenizer). Activity tags arrive as plain strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    pub text: String,
    pub activities: Vec<String>,
}

impl RawEntry {
    pub fn new(text: &str, activities: &[&str]) -> Self {
        Self {
            text: text.to_string(),
            activities: activities.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// ==================== Errors ====================

/// Caller-correctable input problem. The normalizer collects every problem in
/// one pass so the UI can show complete feedback at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Empty after trim, or longer than [`MAX_WORD_CHARS`] characters.
    #[error("entry {index}: invalid word {text:?}")]
    InvalidWord { index: usize, text: String },

    /// Every word must be assigned to at least one activity type.
    #[error("entry {index}: word {text:?} has no activity assigned")]
    MissingActivity { index: usize, text: String },

    /// Activity tag is not one of vocabulary/phonics/spelling.
    #[error("entry {index}: word {text:?} has unknown activity {activity:?}")]
    UnknownActivity {
        index: usize,
        text: String,
        activity: String,
    },
}

// ==================== Normalizer ====================

/// Normalizes a raw entry list into a deduplicated [`WordSet`].
///
/// Duplicate normalized texts are merged by unioning their activity sets;
/// the merge is order-independent and idempotent. First-seen input order is
/// preserved so downstream scheduling is reproducible.
///
/// Returns every problem found rather than failing on the first one.
pub fn normalize(entries: &[RawEntry]) -> Result<WordSet, Vec<InputError>> {
    let mut errors = Vec::new();
    let mut words: Vec<Word> = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        let text = entry.text.trim().to_lowercase();

        let text_ok = !text.is_empty() && text.chars().count() <= MAX_WORD_CHARS;
        if !text_ok {
            errors.push(InputError::InvalidWord {
                index,
                text: entry.text.clone(),
            });
        }

        if entry.activities.is_empty() {
            errors.push(InputError::MissingActivity {
                index,
                text: entry.text.clone(),
            });
        }

        let mut kinds = Vec::new();
        for tag in &entry.activities {
            match ActivityKind::from_str(tag) {
                Some(kind) => kinds.push(kind),
                None => errors.push(InputError::UnknownActivity {
                    index,
                    text: entry.text.clone(),
                    activity: tag.clone(),
                }),
            }
        }

        if !text_ok {
            continue;
        }

        match words.iter_mut().find(|w| w.text == text) {
            Some(existing) => {
                for kind in kinds {
                    if !existing.activities.contains(&kind) {
                        existing.activities.push(kind);
                    }
                }
                existing.activities.sort();
            }
            None => {
                kinds.sort();
                kinds.dedup();
                words.push(Word {
                    text,
                    activities: kinds,
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(WordSet { words })
    } else {
        Err(errors)
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    fn entries_from(set: &WordSet) -> Vec<RawEntry> {
        set.words
            .iter()
            .map(|w| RawEntry {
                text: w.text.clone(),
                activities: w.activities.iter().map(|a| a.as_str().to_string()).collect(),
            })
            .collect()
    }

    // ============ 基本归一化 ============

    #[test]
    fn test_normalize_trims_and_lowercases() {
        let set = normalize(&[RawEntry::new("  Cat  ", &["vocabulary"])]).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.words[0].text, "cat");
    }

    #[test]
    fn test_normalize_preserves_input_order() {
        let set = normalize(&[
            RawEntry::new("bird", &["phonics"]),
            RawEntry::new("cat", &["vocabulary"]),
            RawEntry::new("dog", &["spelling"]),
        ])
        .unwrap();

        let texts: Vec<&str> = set.words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["bird", "cat", "dog"]);
    }

    #[test]
    fn test_normalize_empty_input_is_empty_set() {
        // 空词集在这里是合法的，调度前才要求非空
        let set = normalize(&[]).unwrap();
        assert!(set.is_empty());
    }

    // ============ 去重合并 ============

    #[test]
    fn test_normalize_merges_duplicates_by_union() {
        let set = normalize(&[
            RawEntry::new("cat", &["vocabulary"]),
            RawEntry::new("CAT ", &["spelling"]),
            RawEntry::new("cat", &["vocabulary", "phonics"]),
        ])
        .unwrap();

        assert_eq!(set.len(), 1);
        assert_eq!(
            set.words[0].activities,
            vec![
                ActivityKind::Vocabulary,
                ActivityKind::Phonics,
                ActivityKind::Spelling
            ]
        );
    }

    #[test]
    fn test_normalize_merge_is_order_independent() {
        let forward = normalize(&[
            RawEntry::new("cat", &["vocabulary"]),
            RawEntry::new("cat", &["spelling"]),
        ])
        .unwrap();
        let backward = normalize(&[
            RawEntry::new("cat", &["spelling"]),
            RawEntry::new("cat", &["vocabulary"]),
        ])
        .unwrap();

        assert_eq!(forward.words[0].activities, backward.words[0].activities);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let set = normalize(&[
            RawEntry::new("  Cat", &["spelling", "vocabulary"]),
            RawEntry::new("cat", &["phonics"]),
            RawEntry::new("Dog", &["vocabulary"]),
        ])
        .unwrap();

        let again = normalize(&entries_from(&set)).unwrap();
        assert_eq!(again, set);
    }

    #[test]
    fn test_normalize_dedups_activities_within_entry() {
        let set = normalize(&[RawEntry::new("cat", &["vocabulary", "Vocabulary"])]).unwrap();
        assert_eq!(set.words[0].activities, vec![ActivityKind::Vocabulary]);
    }

    // ============ 错误收集 ============

    #[test]
    fn test_normalize_rejects_empty_text() {
        let errors = normalize(&[RawEntry::new("   ", &["vocabulary"])]).unwrap_err();
        assert_eq!(
            errors,
            vec![InputError::InvalidWord {
                index: 0,
                text: "   ".into()
            }]
        );
    }

    #[test]
    fn test_normalize_rejects_overlong_text() {
        let long = "a".repeat(MAX_WORD_CHARS + 1);
        let errors = normalize(&[RawEntry::new(&long, &["vocabulary"])]).unwrap_err();
        assert!(matches!(errors[0], InputError::InvalidWord { index: 0, .. }));
    }

    #[test]
    fn test_normalize_accepts_max_length_text() {
        let max = "a".repeat(MAX_WORD_CHARS);
        let set = normalize(&[RawEntry::new(&max, &["vocabulary"])]).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_normalize_rejects_missing_activity() {
        let errors = normalize(&[RawEntry::new("cat", &[])]).unwrap_err();
        assert_eq!(
            errors,
            vec![InputError::MissingActivity {
                index: 0,
                text: "cat".into()
            }]
        );
    }

    #[test]
    fn test_normalize_rejects_unknown_activity() {
        let errors = normalize(&[RawEntry::new("cat", &["vocabulary", "reading"])]).unwrap_err();
        assert_eq!(
            errors,
            vec![InputError::UnknownActivity {
                index: 0,
                text: "cat".into(),
                activity: "reading".into()
            }]
        );
    }

    #[test]
    fn test_normalize_collects_all_errors() {
        // 一次返回全部问题，UI 可以整体展示
        let errors = normalize(&[
            RawEntry::new("", &[]),
            RawEntry::new("cat", &["vocabulary"]),
            RawEntry::new("dog", &["reading"]),
        ])
        .unwrap_err();

        assert_eq!(errors.len(), 3);
        assert!(matches!(errors[0], InputError::InvalidWord { index: 0, .. }));
        assert!(matches!(errors[1], InputError::MissingActivity { index: 0, .. }));
        assert!(matches!(errors[2], InputError::UnknownActivity { index: 2, .. }));
    }

    #[test]
    fn test_normalize_error_does_not_drop_valid_entries_silently() {
        // 只要有错误，整体拒绝；不能部分接受
        let result = normalize(&[
            RawEntry::new("cat", &["vocabulary"]),
            RawEntry::new(" ", &["phonics"]),
        ]);
        assert!(result.is_err());
    }
}
