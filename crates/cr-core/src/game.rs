//! The chain game state machine.
//!
//! `GameState` is a value. Every transition ([`GameState::start`],
//! [`GameState::submit_word`], [`GameState::tick`]) leaves the current state
//! untouched and returns a [`Step`]: the next state plus whatever feedback
//! and celebration the transition produced.
//!
//! ```text
//! NotStarted --start--> Playing --tick to 0--> GameOver
//!                          ^                      |
//!                          +--------start---------+
//! ```

use std::collections::HashSet;
use std::fmt;

use log::debug;
use rand::Rng;
use serde::Serialize;

use crate::celebration::{self, Celebration};
use crate::config::GameConfig;
use crate::dictionary::{Dictionary, MIN_WORD_LEN};
use crate::error::Rejection;
use crate::scoring::{ScoreRating, score_word};
use crate::seeds::{SeedWord, pick_seed};

/// Lifecycle phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// No round has been started.
    #[default]
    NotStarted,
    /// A round is running.
    Playing,
    /// The clock ran out.
    GameOver,
}

/// Message for the player produced by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// A new round began from `seed`.
    Started {
        /// The seed word.
        seed: &'static str,
    },
    /// A word joined the chain.
    Accepted {
        /// Points earned by the word.
        points: u32,
        /// Chain length including the new word.
        chain_len: usize,
    },
    /// A submission was turned away.
    Rejected(Rejection),
    /// The round ended.
    TimeUp {
        /// Score at the end of the round.
        final_score: u32,
    },
}

impl Feedback {
    /// Whether this feedback reports a rejected submission.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Feedback::Rejected(_))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Started { seed } => write!(f, "Start your chain from \"{seed}\"!"),
            Feedback::Accepted { points, chain_len } => {
                write!(f, "Nice! +{points} points. Chain length: {chain_len}")
            }
            Feedback::Rejected(reason) => write!(f, "{reason}"),
            Feedback::TimeUp { final_score } => {
                write!(f, "Time's up! Final score: {final_score}")
            }
        }
    }
}

/// The outcome of one transition.
#[derive(Debug, Clone)]
pub struct Step {
    /// The state after the transition.
    pub state: GameState,
    /// Feedback to show, if the transition produced any.
    pub feedback: Option<Feedback>,
    /// Celebration to display, if one fired.
    pub celebration: Option<Celebration>,
}

impl Step {
    fn quiet(state: GameState) -> Self {
        Self {
            state,
            feedback: None,
            celebration: None,
        }
    }

    fn with_feedback(state: GameState, feedback: Feedback) -> Self {
        Self {
            state,
            feedback: Some(feedback),
            celebration: None,
        }
    }
}

/// Complete state of one game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    phase: Phase,
    seed: Option<SeedWord>,
    chain: Vec<String>,
    used_words: HashSet<String>,
    score: u32,
    streak: u32,
    time_left: u32,
    last_score: u32,
}

impl GameState {
    /// A fresh state with no round started.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new round with a random seed word.
    pub fn start<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Step {
        Self::start_with(pick_seed(rng), config.round_seconds)
    }

    /// Start a new round from a specific seed word.
    pub fn start_with(seed: SeedWord, round_seconds: u32) -> Step {
        let round_seconds = round_seconds.max(1);
        debug!("starting round from {} ({round_seconds}s)", seed.word);
        let state = Self {
            phase: Phase::Playing,
            seed: Some(seed),
            chain: vec![seed.word.to_string()],
            used_words: HashSet::from([seed.word.to_lowercase()]),
            score: 0,
            streak: 0,
            time_left: round_seconds,
            last_score: 0,
        };
        Step::with_feedback(state, Feedback::Started { seed: seed.word })
    }

    /// Submit the player's next word.
    ///
    /// Rejections leave the state unchanged. On acceptance the word (in
    /// uppercase) joins the chain, the score grows by [`score_word`], and
    /// the streak goes up by one.
    pub fn submit_word(&self, raw: &str, dictionary: &Dictionary) -> Step {
        let word = match self.check_word(raw, dictionary) {
            Ok(word) => word,
            Err(reason) => {
                debug!("rejected {raw:?}: {reason}");
                return Step::with_feedback(self.clone(), Feedback::Rejected(reason));
            }
        };

        let word_len = word.chars().count();
        let points = score_word(word_len, self.streak).total();

        let mut next = self.clone();
        next.used_words.insert(word.to_lowercase());
        next.chain.push(word);
        next.last_score = self.score;
        next.score = self.score + points;
        next.streak = self.streak + 1;
        debug!(
            "accepted {} for {points} points (score {}, streak {})",
            next.chain.last().map(String::as_str).unwrap_or_default(),
            next.score,
            next.streak
        );

        let celebration = celebration::evaluate(next.score, self.score, word_len, next.streak);
        let feedback = Feedback::Accepted {
            points,
            chain_len: next.chain.len(),
        };

        Step {
            state: next,
            feedback: Some(feedback),
            celebration,
        }
    }

    /// Run the submission checks without changing anything.
    ///
    /// Returns the normalized (trimmed, uppercase) word on success. Checks
    /// run in order and stop at the first failure.
    pub fn check_word(&self, raw: &str, dictionary: &Dictionary) -> Result<String, Rejection> {
        match self.phase {
            Phase::NotStarted => return Err(Rejection::NotStarted),
            Phase::GameOver => return Err(Rejection::GameOver),
            Phase::Playing => {}
        }

        let word = raw.trim().to_uppercase();
        if word.is_empty() {
            return Err(Rejection::Empty);
        }
        if word.chars().count() < MIN_WORD_LEN {
            return Err(Rejection::TooShort);
        }
        if !dictionary.is_valid(&word) {
            return Err(Rejection::UnknownWord(word));
        }
        if self.used_words.contains(&word.to_lowercase()) {
            return Err(Rejection::AlreadyUsed);
        }
        if self.seed.is_some_and(|s| s.word == word) {
            return Err(Rejection::StartWord);
        }
        Ok(word)
    }

    /// Advance the clock by one second.
    ///
    /// Only has an effect while playing. Reaching zero ends the round.
    pub fn tick(&self) -> Step {
        if self.phase != Phase::Playing || self.time_left == 0 {
            return Step::quiet(self.clone());
        }

        let mut next = self.clone();
        next.time_left -= 1;
        if next.time_left > 0 {
            return Step::quiet(next);
        }

        next.phase = Phase::GameOver;
        debug!("round over with score {}", next.score);
        let final_score = next.score;
        Step::with_feedback(next, Feedback::TimeUp { final_score })
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a round is running.
    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    /// Whether the clock has run out.
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// The seed word of the current round.
    pub fn seed(&self) -> Option<SeedWord> {
        self.seed
    }

    /// The seed word text, or `""` before the first round.
    pub fn start_word(&self) -> &str {
        self.seed.map(|s| s.word).unwrap_or_default()
    }

    /// Accepted words, seed first.
    pub fn chain(&self) -> &[String] {
        &self.chain
    }

    /// Lowercase forms of every word in the chain.
    pub fn used_words(&self) -> &HashSet<String> {
        &self.used_words
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Score before the most recent accepted word.
    pub fn last_score(&self) -> u32 {
        self.last_score
    }

    /// Whether the score is above [`GameState::last_score`].
    ///
    /// Rejections and ticks leave `last_score` alone, so this stays true from
    /// the first accepted word until the next start.
    pub fn score_above_last(&self) -> bool {
        self.score > self.last_score
    }

    /// Consecutive accepted words this round.
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// Seconds left on the clock.
    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    /// Rating for the current score.
    pub fn rating(&self) -> ScoreRating {
        ScoreRating::for_score(self.score)
    }
}
