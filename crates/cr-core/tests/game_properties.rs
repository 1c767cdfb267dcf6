//! Property tests for the chain game engine.

use std::collections::HashSet;

use proptest::prelude::*;

use cr_core::game::{Feedback, GameState};
use cr_core::scoring::score_word;
use cr_core::seeds::SEED_WORDS;
use cr_core::{Dictionary, Rejection};

/// Words of 2-10 lowercase letters, some of which repeat. The two-letter
/// ones are turned away as too short.
fn submissions() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-d]{1,2}[a-z]{1,8}", 0..40)
}

proptest! {
    #[test]
    fn accepted_words_raise_score_and_streak(
        seed_index in 0..SEED_WORDS.len(),
        words in submissions(),
    ) {
        let dict = Dictionary::fallback();
        let mut state = GameState::start_with(SEED_WORDS[seed_index], 60).state;

        for w in &words {
            let before = state.clone();
            let step = state.submit_word(w, &dict);
            match step.feedback {
                Some(Feedback::Accepted { points, .. }) => {
                    prop_assert!(step.state.score() > before.score());
                    prop_assert_eq!(step.state.score(), before.score() + points);
                    prop_assert_eq!(step.state.streak(), before.streak() + 1);
                }
                Some(Feedback::Rejected(_)) => {
                    prop_assert_eq!(&step.state, &before);
                }
                other => prop_assert!(false, "unexpected feedback {:?}", other),
            }
            state = step.state;
        }
    }

    #[test]
    fn used_words_mirror_chain(words in submissions()) {
        let dict = Dictionary::fallback();
        let mut state = GameState::start_with(SEED_WORDS[0], 60).state;
        for w in &words {
            state = state.submit_word(w, &dict).state;
        }
        let expected: HashSet<String> = state.chain().iter().map(|w| w.to_lowercase()).collect();
        prop_assert_eq!(state.used_words(), &expected);
        prop_assert_eq!(state.chain()[0].as_str(), SEED_WORDS[0].word);
    }

    #[test]
    fn long_words_get_fifteen_bonus(len in 8usize..30, streak in 0u32..50) {
        let s = score_word(len, streak);
        prop_assert_eq!(s.base + s.length_bonus, 25);
        let expected_streak = if streak >= 3 { streak } else { 0 };
        prop_assert_eq!(s.total(), 25 + expected_streak);
    }

    #[test]
    fn repeat_rejected_regardless_of_case(word in "[a-z]{3,9}", upper in any::<bool>()) {
        let dict = Dictionary::fallback();
        let state = GameState::start_with(SEED_WORDS[1], 60).state;
        let first = state.submit_word(&word, &dict);
        prop_assume!(matches!(first.feedback, Some(Feedback::Accepted { .. })));

        let again = if upper { word.to_uppercase() } else { word.clone() };
        let second = first.state.submit_word(&again, &dict);
        prop_assert_eq!(second.feedback, Some(Feedback::Rejected(Rejection::AlreadyUsed)));
        prop_assert_eq!(second.state, first.state);
    }

    #[test]
    fn nothing_changes_after_time_up(words in submissions()) {
        let dict = Dictionary::fallback();
        let mut state = GameState::start_with(SEED_WORDS[2], 1).state.tick().state;
        prop_assert!(state.is_game_over());
        for w in &words {
            let step = state.submit_word(w, &dict);
            prop_assert_eq!(&step.state, &state);
            state = step.state;
        }
    }
}

#[test]
fn fire_heat_example() {
    let dict = Dictionary::from_words(["fire", "heat"]);
    let fire = cr_core::seeds::find_seed("FIRE").unwrap();
    let state = GameState::start_with(fire, 60).state;

    let step = state.submit_word("heat", &dict);
    assert_eq!(step.state.chain(), ["FIRE", "HEAT"]);
    assert_eq!(step.state.score(), 10);
    assert_eq!(step.state.streak(), 1);

    let again = step.state.submit_word("heat", &dict);
    assert_eq!(
        again.feedback.map(|f| f.to_string()).as_deref(),
        Some("You already used that word!")
    );
    assert_eq!(again.state, step.state);
}

#[test]
fn score_crossing_fifty_celebrates_once() {
    let dict = Dictionary::fallback();
    let mut state = GameState::start_with(SEED_WORDS[0], 60).state;
    let mut milestone_hits = 0;
    for w in ["heat", "flame", "ember", "ash", "smoke", "blaze", "torch", "coal"] {
        let step = state.submit_word(w, &dict);
        if step
            .celebration
            .as_ref()
            .is_some_and(|c| c.text.contains("50 Points"))
        {
            milestone_hits += 1;
        }
        state = step.state;
    }
    assert!(state.score() > 50);
    assert_eq!(milestone_hits, 1);
}
