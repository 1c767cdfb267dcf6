//! Celebrations: short-lived announcements for milestones, long words, and
//! streaks.
//!
//! Evaluation is pure. The driving layer owns the single display slot and
//! clears it once [`Celebration::duration`] has elapsed; a newer celebration
//! simply replaces an unexpired one.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

/// Score thresholds that are announced the first time they are reached.
pub const MILESTONES: [u32; 6] = [50, 100, 150, 200, 300, 500];

/// What kind of achievement is being celebrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CelebrationKind {
    /// A score milestone was crossed.
    Milestone,
    /// A word of six letters or more was accepted.
    LongWord,
    /// The streak hit 5, 10, 15, or 20+.
    Streak,
}

/// A transient announcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Celebration {
    /// Category, which picks the overlay style.
    pub kind: CelebrationKind,
    /// Leading emoji.
    pub icon: &'static str,
    /// Announcement text.
    pub text: String,
    /// How long the announcement stays on screen.
    #[serde(serialize_with = "serialize_millis")]
    pub duration: Duration,
}

impl Celebration {
    fn new(kind: CelebrationKind, icon: &'static str, text: String, millis: u64) -> Self {
        Self {
            kind,
            icon,
            text,
            duration: Duration::from_millis(millis),
        }
    }
}

impl fmt::Display for Celebration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.text)
    }
}

fn serialize_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(d.as_millis() as u64)
}

/// Every celebration an accepted word triggers, in firing order.
///
/// A crossed milestone suppresses the other checks; only the lowest newly
/// crossed threshold is announced. Otherwise the long-word celebration (if
/// any) fires before the streak celebration (if any).
pub fn celebrations(
    new_score: u32,
    old_score: u32,
    word_len: usize,
    new_streak: u32,
) -> Vec<Celebration> {
    if let Some(milestone) = crossed_milestone(new_score, old_score) {
        return vec![milestone_celebration(milestone)];
    }

    let mut fired = Vec::new();
    if let Some(c) = long_word_celebration(word_len) {
        fired.push(c);
    }
    if let Some(c) = streak_celebration(new_streak) {
        fired.push(c);
    }
    fired
}

/// The celebration left in the display slot after an accepted word: the
/// last one [`celebrations`] fires.
pub fn evaluate(
    new_score: u32,
    old_score: u32,
    word_len: usize,
    new_streak: u32,
) -> Option<Celebration> {
    celebrations(new_score, old_score, word_len, new_streak).pop()
}

/// The lowest milestone with `old_score < m <= new_score`.
pub fn crossed_milestone(new_score: u32, old_score: u32) -> Option<u32> {
    MILESTONES
        .iter()
        .copied()
        .find(|&m| old_score < m && m <= new_score)
}

fn milestone_celebration(milestone: u32) -> Celebration {
    let (icon, text) = match milestone {
        50 => ("\u{1f389}", "First Milestone! 50 Points!"),
        100 => ("\u{1f3c6}", "Century Club! 100 Points!"),
        150 => ("\u{2b50}", "Rising Star! 150 Points!"),
        200 => ("\u{1f525}", "On Fire! 200 Points!"),
        300 => ("\u{1f48e}", "Diamond Tier! 300 Points!"),
        _ => ("\u{1f451}", "LEGENDARY! 500 Points!"),
    };
    Celebration::new(CelebrationKind::Milestone, icon, text.to_string(), 3000)
}

fn long_word_celebration(len: usize) -> Option<Celebration> {
    let (icon, shout, millis) = match len {
        8.. => ("\u{1f92f}", "INCREDIBLE!", 2500),
        7 => ("\u{1f680}", "AMAZING!", 2000),
        6 => ("\u{2728}", "GREAT!", 1500),
        _ => return None,
    };
    Some(Celebration::new(
        CelebrationKind::LongWord,
        icon,
        format!("{shout} {len} letters!"),
        millis,
    ))
}

fn streak_celebration(streak: u32) -> Option<Celebration> {
    let (icon, text, millis) = match streak {
        5 => ("\u{1f525}", "5-Word Streak!", 2000),
        10 => ("\u{1f4a5}", "10-Word Combo!", 2500),
        15 => ("\u{26a1}", "UNSTOPPABLE! 15 Words!", 3000),
        20.. => ("\u{1f31f}", "GODLIKE! 20+ Streak!", 3000),
        _ => return None,
    };
    Some(Celebration::new(
        CelebrationKind::Streak,
        icon,
        text.to_string(),
        millis,
    ))
}
