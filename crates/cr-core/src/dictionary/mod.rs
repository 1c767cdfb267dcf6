//! Dictionary service: the set of words the game accepts.
//!
//! A [`Dictionary`] is loaded once from a [`WordSource`] and is read-only
//! afterwards. When the source fails, the compiled-in fallback list is used
//! and the dictionary switches to degraded mode, where any purely alphabetic
//! word of three or more letters passes.

pub mod fallback;
pub mod source;

use std::collections::HashSet;

use log::{info, warn};
use serde::Serialize;

pub use fallback::FALLBACK_WORDS;
pub use source::{FileSource, StaticSource, WordSource, parse_word_list};

/// Minimum length of a playable word.
pub const MIN_WORD_LEN: usize = 3;

/// Where the active word set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DictionaryMode {
    /// Loaded from a word source; membership is checked.
    Full,
    /// The source failed; validation falls back to a letters-only check.
    Fallback,
}

/// The set of known words.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: HashSet<String>,
    mode: DictionaryMode,
}

impl Dictionary {
    /// Build a dictionary in full mode from already-parsed words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
            mode: DictionaryMode::Full,
        }
    }

    /// The compiled-in fallback dictionary, in degraded mode.
    pub fn fallback() -> Self {
        Self {
            words: FALLBACK_WORDS.iter().map(|w| w.to_string()).collect(),
            mode: DictionaryMode::Fallback,
        }
    }

    /// Load the word list from `source`.
    ///
    /// Never fails: a source error is logged and answered with
    /// [`Dictionary::fallback`].
    pub fn load(source: &dyn WordSource) -> Self {
        match source.fetch() {
            Ok(text) => {
                let words = parse_word_list(&text);
                info!("loaded {} words from {}", words.len(), source.describe());
                Self {
                    words,
                    mode: DictionaryMode::Full,
                }
            }
            Err(e) => {
                warn!("failed to load word list: {e}");
                let dict = Self::fallback();
                warn!("using fallback word list with {} words", dict.len());
                dict
            }
        }
    }

    /// Whether `word` is playable.
    ///
    /// In full mode this is a case-insensitive membership test. In degraded
    /// mode, or when the loaded set is empty, the word only has to be at
    /// least three ASCII letters long.
    pub fn is_valid(&self, word: &str) -> bool {
        if self.uses_fallback() || self.words.is_empty() {
            return word.len() >= MIN_WORD_LEN && word.chars().all(|c| c.is_ascii_alphabetic());
        }
        self.words.contains(&word.to_lowercase())
    }

    /// Whether the fallback list is active.
    pub fn uses_fallback(&self) -> bool {
        self.mode == DictionaryMode::Fallback
    }

    /// Where the active word set came from.
    pub fn mode(&self) -> DictionaryMode {
        self.mode
    }

    /// Number of known words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the word set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Dictionary {
        Dictionary::from_words(["fire", "heat", "Flame"])
    }

    #[test]
    fn membership_is_case_insensitive() {
        let d = small();
        assert!(d.is_valid("HEAT"));
        assert!(d.is_valid("heat"));
        assert!(d.is_valid("flame"));
        assert!(!d.is_valid("ember"));
    }

    #[test]
    fn full_mode_rejects_unknown_alpha_words() {
        let d = small();
        assert!(!d.uses_fallback());
        assert!(!d.is_valid("zzzqq"));
    }

    #[test]
    fn degraded_mode_pattern_check() {
        let d = Dictionary::fallback();
        assert!(d.uses_fallback());
        assert!(d.is_valid("zzzqq"));
        assert!(d.is_valid("ZZZQQ"));
        assert!(!d.is_valid("ab"));
        assert!(!d.is_valid("abc123"));
        assert!(!d.is_valid("two words"));
    }

    #[test]
    fn empty_set_is_lenient() {
        let d = Dictionary::load(&StaticSource::new("a\nb\n"));
        assert!(d.is_empty());
        assert!(!d.uses_fallback());
        assert!(d.is_valid("anything"));
        assert!(!d.is_valid("no"));
    }

    #[test]
    fn load_success() {
        let d = Dictionary::load(&StaticSource::new("fire\nheat\nok\n"));
        assert_eq!(d.mode(), DictionaryMode::Full);
        assert_eq!(d.len(), 2);
        assert!(d.is_valid("Fire"));
        assert!(!d.is_valid("ok"));
    }

    #[test]
    fn load_failure_uses_fallback() {
        let d = Dictionary::load(&StaticSource::failing("network down"));
        assert_eq!(d.mode(), DictionaryMode::Fallback);
        assert!(!d.is_empty());
        assert!(d.is_valid("heat"));
    }

    #[test]
    fn load_missing_file_uses_fallback() {
        let d = Dictionary::load(&FileSource::new("/no/such/words_alpha.txt"));
        assert!(d.uses_fallback());
    }

    #[test]
    fn mode_serializes_snake_case() {
        let json = serde_json::to_string(&DictionaryMode::Fallback).unwrap();
        assert_eq!(json, "\"fallback\"");
    }
}
