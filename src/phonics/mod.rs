//! Phonics Chunk Resolution
//!
//! Maps a word to an ordered list of sub-word chunks for segmentation
//! practice. A curated table (hand-authored, loaded by the caller) is
//! authoritative; words absent from it go through a deterministic rule-based
//! fallback splitter.
//!
//! Hard contract: resolution never fails. Any non-empty word yields at least
//! one chunk whose concatenation reconstructs the word exactly, so phonics
//! activities are always playable.

use std::collections::HashMap;

// ==================== Fallback Splitter ====================

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

/// Rule-based syllable approximator.
///
/// Scans left to right and closes the current chunk immediately after a
/// vowel that is followed by a consonant which is either word-final or
/// itself followed by another vowel. Zero splits return the whole word as a
/// single chunk.
///
/// Deterministic and total; chunks are non-empty and concatenate back to the
/// input exactly.
pub fn fallback_split(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let len = chars.len();
    if len == 0 {
        return vec![String::new()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        current.push(c);

        let split_here = is_vowel(c)
            && i + 1 < len
            && !is_vowel(chars[i + 1])
            && (i + 2 == len || is_vowel(chars[i + 2]));

        if split_here {
            chunks.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

// ==================== Resolver ====================

/// Resolves phonics chunks from a curated table with a fallback splitter.
///
/// The curated table is static content, and the fallback splitter is a pure
/// function of the word text, so resolved chunks are memoized indefinitely
/// keyed by normalized word text.
#[derive(Debug, Clone, Default)]
pub struct ChunkResolver {
    curated: HashMap<String, Vec<String>>,
    cache: HashMap<String, Vec<String>>,
}

impl ChunkResolver {
    /// Creates a resolver over a caller-supplied curated table.
    ///
    /// Curated entries are assumed pre-validated to concatenate back to
    /// their word; they are returned unmodified.
    pub fn new(curated: HashMap<String, Vec<String>>) -> Self {
        Self {
            curated,
            cache: HashMap::new(),
        }
    }

    /// Returns the ordered chunk list for `word`.
    ///
    /// Curated entries win; otherwise the fallback splitter runs. Never
    /// fails: any non-empty input yields at least one non-empty chunk.
    pub fn resolve(&mut self, word: &str) -> Vec<String> {
        if let Some(cached) = self.cache.get(word) {
            return cached.clone();
        }

        let chunks = match self.curated.get(word) {
            Some(entry) => entry.clone(),
            None => fallback_split(word),
        };

        self.cache.insert(word.to_string(), chunks.clone());
        chunks
    }

    pub fn has_curated(&self, word: &str) -> bool {
        self.curated.contains_key(word)
    }
}

// ==================== Tests ====================
