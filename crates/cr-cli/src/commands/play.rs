//! Launch the interactive game.

use std::path::PathBuf;

use cr_core::GameConfig;

use crate::tui;

/// Play in the terminal until the player quits.
pub fn run(words: Option<PathBuf>, seed: Option<u64>, seconds: u32) -> Result<(), String> {
    let mut config = GameConfig::default().with_round_seconds(seconds);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }

    let loader = tui::DictionaryLoader::spawn(words);
    tui::run(tui::App::new(config, loader))
}
