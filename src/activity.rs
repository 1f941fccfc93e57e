//! Daily Activity Sequencing
//!
//! Materializes one day of a confirmed schedule into the ordered activity
//! list a learner works through. The order is deterministic so that two runs
//! over the same schedule produce the same sequence (resumable sessions):
//! Vocabulary → Phonics → Spelling, and within each activity type new words
//! before review words.
//!
//! Phonics chunks are resolved here, at activity time, and attached to the
//! scheduled occurrence.

use serde::{Deserialize, Serialize};

use crate::phonics::ChunkResolver;
use crate::types::{ActivityKind, Schedule, WordSet};

/// One playable activity step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    pub word: String,
    pub activity: ActivityKind,
    pub is_review: bool,
    /// Phonics segmentation, present only for phonics items. Always
    /// non-empty: chunk resolution cannot fail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunks: Option<Vec<String>>,
}

/// Builds the activity sequence for `day_index`.
///
/// Words missing from the word set are skipped (a valid schedule has none).
/// Returns `None` for an out-of-range day.
pub fn day_activities(
    schedule: &Schedule,
    words: &WordSet,
    day_index: usize,
    resolver: &mut ChunkResolver,
) -> Option<Vec<ActivityItem>> {
    let day = schedule.days.get(day_index)?;
    let mut items = Vec::new();

    for kind in ActivityKind::ALL {
        for (list, is_review) in [(&day.new_words, false), (&day.review_words, true)] {
            for text in list.iter() {
                let word = match words.get(text) {
                    Some(w) => w,
                    None => continue,
                };
                if !word.has_activity(kind) {
                    continue;
                }

                let chunks = (kind == ActivityKind::Phonics).then(|| resolver.resolve(text));
                items.push(ActivityItem {
                    word: text.clone(),
                    activity: kind,
                    is_review,
                    chunks,
                });
            }
        }
    }

    Some(items)
}

// ==================== Tests ====================
