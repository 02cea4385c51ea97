use crate::confetti::Confetti;
use crate::game::GameSession;
use crate::history::{self, GameRecord};

/// Which screen the player is on.
#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Playing,
    Summary,
}

/// Presentation state wrapped around one owned [`GameSession`].
#[derive(Debug)]
pub struct App {
    pub session: GameSession,
    pub guess: String,
    pub wrong_guess: bool,
    pub state: AppState,
    pub confetti: Confetti,
    pub list_label: String,
}

impl App {
    pub fn new(session: GameSession, list_label: impl Into<String>) -> Self {
        Self {
            session,
            guess: String::new(),
            wrong_guess: false,
            state: AppState::Playing,
            confetti: Confetti::new(),
            list_label: list_label.into(),
        }
    }

    pub fn type_char(&mut self, c: char) {
        if self.state == AppState::Playing {
            self.guess.push(c);
            self.wrong_guess = false;
        }
    }

    pub fn backspace(&mut self) {
        if self.state == AppState::Playing {
            self.guess.pop();
            self.wrong_guess = false;
        }
    }

    /// Submit the buffered guess. A hit clears the buffer and moves on to
    /// the next round, or to the summary screen when the rounds are spent;
    /// a miss flags the buffer and changes nothing else.
    pub fn submit(&mut self) {
        if self.state != AppState::Playing {
            return;
        }
        if self.session.submit_guess(&self.guess) {
            self.guess.clear();
            self.wrong_guess = false;
            if !self.session.advance_round() {
                self.finish();
            }
        } else {
            self.wrong_guess = true;
        }
    }

    /// Skip the current word without scoring.
    pub fn skip(&mut self) {
        if self.state != AppState::Playing {
            return;
        }
        self.guess.clear();
        self.wrong_guess = false;
        if !self.session.advance_round() {
            self.finish();
        }
    }

    pub fn on_tick(&mut self) {
        self.confetti.on_tick();
    }

    /// Start over with the same configuration.
    pub fn replay(&mut self) {
        self.session.reset();
        self.guess.clear();
        self.wrong_guess = false;
        self.state = AppState::Playing;
    }

    /// Every round guessed at full value.
    pub fn is_perfect(&self) -> bool {
        self.session.score_increment() > 0
            && self.session.score()
                == self.session.max_rounds() as u32 * self.session.score_increment()
    }

    pub fn start_confetti_if_perfect(&mut self, width: u16, height: u16) {
        if self.state == AppState::Summary && self.is_perfect() && !self.confetti.is_active() {
            self.confetti.start(width, height);
        }
    }

    fn finish(&mut self) {
        self.state = AppState::Summary;
        let _ = history::append(&GameRecord {
            rounds: self.session.round_count(),
            score: self.session.score(),
            word_list: self.list_label.clone(),
        });
    }
}
