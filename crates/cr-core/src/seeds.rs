//! Seed words that open each round, with their hints.

use rand::Rng;
use serde::Serialize;

/// A word a round can start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedWord {
    /// The word itself, uppercase.
    pub word: &'static str,
    /// A nudge toward related words.
    pub hint: &'static str,
}

/// The fixed seed list.
pub const SEED_WORDS: [SeedWord; 16] = [
    SeedWord {
        word: "FIRE",
        hint: "Think heat, energy, or things that burn...",
    },
    SeedWord {
        word: "OCEAN",
        hint: "Think water, waves, or sea creatures...",
    },
    SeedWord {
        word: "MUSIC",
        hint: "Think sounds, instruments, or rhythm...",
    },
    SeedWord {
        word: "LIGHT",
        hint: "Think brightness, sun, or illumination...",
    },
    SeedWord {
        word: "DREAM",
        hint: "Think sleep, wishes, or imagination...",
    },
    SeedWord {
        word: "STORM",
        hint: "Think weather, wind, or chaos...",
    },
    SeedWord {
        word: "MAGIC",
        hint: "Think spells, wonder, or mystery...",
    },
    SeedWord {
        word: "SPACE",
        hint: "Think stars, planets, or the cosmos...",
    },
    SeedWord {
        word: "DANCE",
        hint: "Think movement, rhythm, or celebration...",
    },
    SeedWord {
        word: "HEART",
        hint: "Think love, emotion, or the body...",
    },
    SeedWord {
        word: "TIGER",
        hint: "Think stripes, jungle, or strength...",
    },
    SeedWord {
        word: "RIVER",
        hint: "Think flowing water, nature, or journey...",
    },
    SeedWord {
        word: "CLOUD",
        hint: "Think sky, weather, or floating...",
    },
    SeedWord {
        word: "SPARK",
        hint: "Think electricity, inspiration, or small flames...",
    },
    SeedWord {
        word: "FROST",
        hint: "Think cold, winter, or ice crystals...",
    },
    SeedWord {
        word: "BLOOM",
        hint: "Think flowers, growth, or spring...",
    },
];

/// Pick a seed word uniformly at random.
pub fn pick_seed<R: Rng + ?Sized>(rng: &mut R) -> SeedWord {
    SEED_WORDS[rng.random_range(0..SEED_WORDS.len())]
}

/// Look up a seed word by name (case-insensitive).
pub fn find_seed(word: &str) -> Option<SeedWord> {
    SEED_WORDS
        .iter()
        .find(|s| s.word.eq_ignore_ascii_case(word.trim()))
        .copied()
}
