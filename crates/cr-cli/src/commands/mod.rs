pub mod check;
pub mod play;
pub mod seeds;

use std::path::Path;

use cr_core::{Dictionary, FileSource};
use log::info;

/// Load the dictionary from a word list file, or the fallback list when no
/// file is given. Never fails: unreadable files also fall back.
pub fn load_dictionary(path: Option<&Path>) -> Dictionary {
    match path {
        Some(path) => Dictionary::load(&FileSource::new(path)),
        None => {
            info!("no word list given, using fallback word list");
            Dictionary::fallback()
        }
    }
}

/// Notice shown while the fallback list is active.
pub const FALLBACK_NOTICE: &str =
    "Word validation will be basic (couldn't load full dictionary)";

/// How to get full validation when the fallback list is active.
pub const FULL_DICTIONARY_HINT: &str =
    "Pass --words path/to/words_alpha.txt for full word validation";
