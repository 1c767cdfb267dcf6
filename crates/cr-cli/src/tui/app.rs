use std::time::{Duration, Instant};

use cr_core::{Dictionary, Feedback, GameConfig, GameState, Step};
use rand::rngs::StdRng;

use super::clock::{Overlay, RoundTimer};
use super::loader::DictionaryLoader;

/// Longest the event loop waits for input before redrawing.
const MAX_IDLE: Duration = Duration::from_millis(250);

pub struct App {
    pub config: GameConfig,
    pub game: GameState,
    pub dictionary: Option<Dictionary>,
    pub input: String,
    pub feedback: Option<Feedback>,
    pub overlay: Overlay,
    pub show_help: bool,
    pub should_quit: bool,

    loader: DictionaryLoader,
    timer: RoundTimer,
    rng: StdRng,
}

impl App {
    pub fn new(config: GameConfig, loader: DictionaryLoader) -> Self {
        let rng = config.rng();
        Self {
            config,
            game: GameState::new(),
            dictionary: None,
            input: String::new(),
            feedback: None,
            overlay: Overlay::default(),
            show_help: false,
            should_quit: false,
            loader,
            timer: RoundTimer::default(),
            rng,
        }
    }

    /// Pick up the dictionary once the loader has finished.
    pub fn poll_loader(&mut self) {
        if !self.loader.is_pending() {
            return;
        }
        if let Some(dictionary) = self.loader.try_take() {
            self.dictionary = Some(dictionary);
        }
    }

    pub fn is_loading(&self) -> bool {
        self.dictionary.is_none()
    }

    pub fn uses_fallback(&self) -> bool {
        self.dictionary.as_ref().is_some_and(Dictionary::uses_fallback)
    }

    /// Whether the score should be drawn highlighted: the latest
    /// submission was accepted and raised it.
    pub fn score_highlighted(&self) -> bool {
        matches!(self.feedback, Some(Feedback::Accepted { .. })) && self.game.score_above_last()
    }

    /// Start a fresh round. Ignored while the dictionary is still loading.
    pub fn start_game(&mut self, now: Instant) {
        if self.is_loading() {
            return;
        }
        let step = GameState::start(&self.config, &mut self.rng);
        self.input.clear();
        self.overlay.clear();
        self.timer.arm(now);
        self.apply(step, now);
    }

    /// Submit the input line as the next word.
    pub fn submit(&mut self, now: Instant) {
        let Some(dictionary) = self.dictionary.as_ref() else {
            return;
        };
        let step = self.game.submit_word(&self.input, dictionary);
        if !step.feedback.as_ref().is_some_and(Feedback::is_rejection) {
            self.input.clear();
        }
        self.apply(step, now);
    }

    /// Advance the countdown and expire the overlay.
    pub fn on_clock(&mut self, now: Instant) {
        for _ in 0..self.timer.take_due(now) {
            let step = self.game.tick();
            self.apply(step, now);
            if !self.game.is_playing() {
                self.timer.disarm();
                break;
            }
        }
        self.overlay.expire(now);
    }

    /// How long the event loop may block before the next clock event.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        [self.timer.until_next(now), self.overlay.until_expiry(now)]
            .into_iter()
            .flatten()
            .fold(MAX_IDLE, Duration::min)
    }

    fn apply(&mut self, step: Step, now: Instant) {
        self.game = step.state;
        if let Some(feedback) = step.feedback {
            self.feedback = Some(feedback);
        }
        if let Some(celebration) = step.celebration {
            self.overlay.show(celebration, now);
        }
    }

    // Input editing

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}
