//! Lesson Persistence Port
//!
//! Narrow storage interface for confirmed lessons. The scheduling core never
//! touches storage itself; the application layer injects a [`LessonStore`]
//! and decides when to save. Two implementations ship with the crate:
//!
//! - [`JsonFileStore`] — one JSON file per lesson with atomic replace writes
//! - [`MemoryStore`] — in-process map, for tests and optimistic UI flows

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::types::{Schedule, WordSet};

// ==================== Durable Shape ====================

/// The durable record for one confirmed lesson: plain data only, words
/// referenced by normalized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonRecord {
    pub lesson_id: String,
    pub word_set: WordSet,
    pub schedule: Schedule,
}

// ==================== Errors ====================

/// Storage failure.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid lesson id {0:?}")]
    InvalidLessonId(String),

    #[error("lock poisoned: {0}")]
    Lock(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

// ==================== Port ====================

/// Persistence port for confirmed lessons.
pub trait LessonStore {
    fn save(&self, record: &LessonRecord) -> StoreResult<()>;

    fn load(&self, lesson_id: &str) -> StoreResult<Option<LessonRecord>>;

    /// Returns whether a record was actually removed.
    fn delete(&self, lesson_id: &str) -> StoreResult<bool>;
}

/// Lesson ids become file names, so only a conservative charset is allowed.
fn check_lesson_id(lesson_id: &str) -> StoreResult<()> {
    let ok = !lesson_id.is_empty()
        && lesson_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if ok {
        Ok(())
    } else {
        Err(StoreError::InvalidLessonId(lesson_id.to_string()))
    }
}

// ==================== JSON File Store ====================

/// File-backed store: `<dir>/<lesson_id>.json`.
///
/// Writes go through a temp file in the same directory followed by an atomic
/// rename, so a crash mid-write never leaves a truncated record.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: Into<PathBuf>>(dir: P) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn record_path(&self, lesson_id: &str) -> PathBuf {
        self.dir.join(format!("{lesson_id}.json"))
    }
}

impl LessonStore for JsonFileStore {
    fn save(&self, record: &LessonRecord) -> StoreResult<()> {
        check_lesson_id(&record.lesson_id)?;

        let json = serde_json::to_vec_pretty(record)?;
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(&json)?;
        tmp.persist(self.record_path(&record.lesson_id))
            .map_err(|e| StoreError::Io(e.error))?;

        log::debug!("saved lesson {}", record.lesson_id);
        Ok(())
    }

    fn load(&self, lesson_id: &str) -> StoreResult<Option<LessonRecord>> {
        check_lesson_id(lesson_id)?;

        match fs::read_to_string(self.record_path(lesson_id)) {
            Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn delete(&self, lesson_id: &str) -> StoreResult<bool> {
        check_lesson_id(lesson_id)?;

        match fs::remove_file(self.record_path(lesson_id)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}

// ==================== Memory Store ====================

/// In-memory store for tests and optimistic UI flows.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, LessonRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LessonStore for MemoryStore {
    fn save(&self, record: &LessonRecord) -> StoreResult<()> {
        check_lesson_id(&record.lesson_id)?;
        let mut records = self
            .records
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))?;
        records.insert(record.lesson_id.clone(), record.clone());
        Ok(())
    }

    fn load(&self, lesson_id: &str) -> StoreResult<Option<LessonRecord>> {
        check_lesson_id(lesson_id)?;
        let records = self
            .records
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))?;
        Ok(records.get(lesson_id).cloned())
    }

    fn delete(&self, lesson_id: &str) -> StoreResult<bool> {
        check_lesson_id(lesson_id)?;
        let mut records = self
            .records
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))?;
        Ok(records.remove(lesson_id).is_some())
    }
}

// ==================== Tests ====================
