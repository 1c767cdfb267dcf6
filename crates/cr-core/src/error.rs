//! Error and rejection types for the chain game.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for dictionary loading.
pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// Errors a word source can report while fetching its word list.
///
/// None of these are fatal: [`crate::Dictionary::load`] recovers from every
/// variant by switching to the fallback word list.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The word list file could not be read.
    #[error("cannot read word list {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The source answered but not with a usable word list.
    #[error("word list unavailable: {0}")]
    Unavailable(String),
}

/// Why a submitted word was turned away.
///
/// A rejection is a normal outcome, not a failure: the game state is left
/// untouched and the player may try again immediately. The `Display` text is
/// the message shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Nothing but whitespace was submitted.
    #[error("Please enter a word!")]
    Empty,

    /// Fewer than three letters.
    #[error("Words must be at least 3 letters long!")]
    TooShort,

    /// The dictionary does not know the word.
    #[error("\"{0}\" is not a valid English word!")]
    UnknownWord(String),

    /// The word is already part of the chain.
    #[error("You already used that word!")]
    AlreadyUsed,

    /// The word is the seed word of this round.
    #[error("You cannot use the starting word again!")]
    StartWord,

    /// No round has been started yet.
    #[error("Start a new game first!")]
    NotStarted,

    /// The clock has run out.
    #[error("Time's up! Start a new game to keep playing.")]
    GameOver,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_messages() {
        assert_eq!(Rejection::Empty.to_string(), "Please enter a word!");
        assert_eq!(
            Rejection::TooShort.to_string(),
            "Words must be at least 3 letters long!"
        );
        assert_eq!(
            Rejection::UnknownWord("XYZZY".into()).to_string(),
            "\"XYZZY\" is not a valid English word!"
        );
        assert_eq!(
            Rejection::AlreadyUsed.to_string(),
            "You already used that word!"
        );
        assert_eq!(
            Rejection::StartWord.to_string(),
            "You cannot use the starting word again!"
        );
    }

    #[test]
    fn io_error_names_path() {
        let err = DictionaryError::Io {
            path: PathBuf::from("/nope/words.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/nope/words.txt"));
    }
}
