//! Background dictionary loading.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use cr_core::Dictionary;
use log::warn;

use crate::commands::load_dictionary;

/// Loads the dictionary off the UI thread and hands it over once.
pub struct DictionaryLoader {
    rx: Option<Receiver<Dictionary>>,
}

impl DictionaryLoader {
    /// Start loading from `path` (or the fallback list) on a worker thread.
    pub fn spawn(path: Option<PathBuf>) -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            // The receiver may be gone if the player quit while loading.
            let _ = tx.send(load_dictionary(path.as_deref()));
        });
        Self { rx: Some(rx) }
    }

    /// A loader that already holds its dictionary.
    #[cfg(test)]
    pub fn ready(dictionary: Dictionary) -> Self {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(dictionary);
        Self { rx: Some(rx) }
    }

    /// Whether the dictionary has not been handed over yet.
    pub fn is_pending(&self) -> bool {
        self.rx.is_some()
    }

    /// Take the dictionary if loading has finished.
    pub fn try_take(&mut self) -> Option<Dictionary> {
        let rx = self.rx.as_ref()?;
        let dictionary = match rx.try_recv() {
            Ok(dictionary) => dictionary,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                warn!("dictionary loader stopped without a result, using fallback word list");
                Dictionary::fallback()
            }
        };
        self.rx = None;
        Some(dictionary)
    }
}
