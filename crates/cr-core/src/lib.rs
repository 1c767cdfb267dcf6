//! Word chain game engine for Chain Reaction.
//!
//! Provides the dictionary service (word list loading with an offline
//! fallback), the seed word list, scoring and celebration rules, and a
//! reducer-style game state where every transition returns a new state
//! together with the feedback and celebration it produced.

pub mod celebration;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod scoring;
pub mod seeds;

pub use celebration::{Celebration, CelebrationKind};
pub use config::GameConfig;
pub use dictionary::{Dictionary, FileSource, StaticSource, WordSource};
pub use error::{DictionaryError, DictionaryResult, Rejection};
pub use game::{Feedback, GameState, Phase, Step};
pub use seeds::SeedWord;
