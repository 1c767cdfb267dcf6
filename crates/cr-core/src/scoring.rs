//! Points for accepted words, plus the score and streak labels.

use std::fmt;

use serde::Serialize;

/// Points every accepted word earns.
pub const BASE_POINTS: u32 = 10;
/// Bonus for words of six letters or more.
pub const LONG_WORD_BONUS: u32 = 5;
/// Extra bonus for words of eight letters or more, on top of the long bonus.
pub const EPIC_WORD_BONUS: u32 = 10;
/// Streak length at which the streak bonus starts paying.
pub const STREAK_BONUS_FROM: u32 = 3;

/// How the points for one word add up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    /// Base points.
    pub base: u32,
    /// Length bonus (0, 5, or 15).
    pub length_bonus: u32,
    /// Streak bonus (the streak itself once it reaches three).
    pub streak_bonus: u32,
}

impl ScoreBreakdown {
    /// Total points.
    pub fn total(&self) -> u32 {
        self.base + self.length_bonus + self.streak_bonus
    }
}

/// Score a word of `word_len` letters submitted with `streak` prior
/// consecutive accepts.
pub fn score_word(word_len: usize, streak: u32) -> ScoreBreakdown {
    let mut length_bonus = 0;
    if word_len >= 6 {
        length_bonus += LONG_WORD_BONUS;
    }
    if word_len >= 8 {
        length_bonus += EPIC_WORD_BONUS;
    }
    let streak_bonus = if streak >= STREAK_BONUS_FROM { streak } else { 0 };

    ScoreBreakdown {
        base: BASE_POINTS,
        length_bonus,
        streak_bonus,
    }
}

/// A label for the player's current score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreRating {
    /// Under 50.
    KeepGoing,
    /// 50 and up.
    GettingGood,
    /// 100 and up.
    WordSmith,
    /// 150 and up.
    ChainMaster,
    /// 200 and up.
    WordWizard,
}

impl ScoreRating {
    /// Rate a score.
    pub fn for_score(score: u32) -> Self {
        match score {
            200.. => ScoreRating::WordWizard,
            150.. => ScoreRating::ChainMaster,
            100.. => ScoreRating::WordSmith,
            50.. => ScoreRating::GettingGood,
            _ => ScoreRating::KeepGoing,
        }
    }
}

impl fmt::Display for ScoreRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScoreRating::KeepGoing => "Keep Going!",
            ScoreRating::GettingGood => "Getting Good!",
            ScoreRating::WordSmith => "Word Smith!",
            ScoreRating::ChainMaster => "Chain Master!",
            ScoreRating::WordWizard => "Word Wizard!",
        };
        f.write_str(label)
    }
}

/// How a word in the chain is decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordTier {
    /// The round's seed word.
    Seed,
    /// Under six letters.
    Plain,
    /// Six or seven letters.
    Long,
    /// Eight letters or more.
    Epic,
}

impl WordTier {
    /// Tier of the chain word at `index`.
    pub fn of(index: usize, word: &str) -> Self {
        let len = word.chars().count();
        if index == 0 {
            WordTier::Seed
        } else if len >= 8 {
            WordTier::Epic
        } else if len >= 6 {
            WordTier::Long
        } else {
            WordTier::Plain
        }
    }

    /// Marker drawn after the word, if any.
    pub fn marker(self) -> &'static str {
        match self {
            WordTier::Seed | WordTier::Plain => "",
            WordTier::Long => " \u{2728}",
            WordTier::Epic => " \u{2728}\u{1f31f}",
        }
    }
}

/// Banner text for a running streak, or `None` below three.
pub fn streak_banner(streak: u32) -> Option<String> {
    if streak < STREAK_BONUS_FROM {
        return None;
    }
    let mut text = format!("\u{1f525} On fire! {streak} word streak!");
    if streak >= 10 {
        text.push_str(" \u{1f4a5}");
    }
    if streak >= 15 {
        text.push_str(" \u{26a1}");
    }
    if streak >= 20 {
        text.push_str(" \u{1f31f}");
    }
    Some(text)
}
