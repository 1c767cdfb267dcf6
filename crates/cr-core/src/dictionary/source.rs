//! Word list sources and the plain-text word list format.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{DictionaryError, DictionaryResult};

use super::MIN_WORD_LEN;

/// Something that can hand over a newline-delimited word list.
///
/// The dictionary calls [`WordSource::fetch`] exactly once, at load time.
/// Any transport (file, network, embedded asset) can implement it.
pub trait WordSource {
    /// Return the raw word list text.
    fn fetch(&self) -> DictionaryResult<String>;

    /// Short human-readable name of the source, used in log messages.
    fn describe(&self) -> String;
}

/// A word list stored in a local file, one word per line.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileSource {
    fn fetch(&self) -> DictionaryResult<String> {
        std::fs::read_to_string(&self.path).map_err(|source| DictionaryError::Io {
            path: self.path.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// An in-memory source: either fixed text or a fixed failure.
#[derive(Debug, Clone)]
pub struct StaticSource {
    text: Result<String, String>,
}

impl StaticSource {
    /// A source that always returns `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Ok(text.into()),
        }
    }

    /// A source that always fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            text: Err(reason.into()),
        }
    }
}

impl WordSource for StaticSource {
    fn fetch(&self) -> DictionaryResult<String> {
        self.text.clone().map_err(DictionaryError::Unavailable)
    }

    fn describe(&self) -> String {
        "in-memory word list".to_string()
    }
}

/// Parse newline-delimited text into a word set.
///
/// Each line is trimmed and lower-cased; entries shorter than three
/// characters are dropped.
pub fn parse_word_list(text: &str) -> HashSet<String> {
    text.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| word.chars().count() >= MIN_WORD_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_trims_and_lowercases() {
        let words = parse_word_list("Heat\r\n  FLAME \nember\n");
        assert_eq!(words.len(), 3);
        assert!(words.contains("heat"));
        assert!(words.contains("flame"));
        assert!(words.contains("ember"));
    }

    #[test]
    fn parse_drops_short_entries() {
        let words = parse_word_list("a\nab\nabc\n\n   \n");
        assert_eq!(words.len(), 1);
        assert!(words.contains("abc"));
    }

    #[test]
    fn file_source_reads_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "fire\nheat").unwrap();
        let source = FileSource::new(file.path());
        assert_eq!(source.fetch().unwrap(), "fire\nheat\n");
        assert_eq!(source.path(), file.path());
    }

    #[test]
    fn file_source_missing_file() {
        let source = FileSource::new("/definitely/not/here/words.txt");
        let err = source.fetch().unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
        assert!(source.describe().contains("words.txt"));
    }

    #[test]
    fn static_source_failing() {
        let err = StaticSource::failing("offline").fetch().unwrap_err();
        assert_eq!(err.to_string(), "word list unavailable: offline");
    }
}
