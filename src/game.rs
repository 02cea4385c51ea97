use std::collections::HashSet;

use crate::error::ConfigError;
use crate::scramble::scramble;
use crate::wordlist::WordPool;

pub const DEFAULT_ROUNDS: usize = 10;
pub const DEFAULT_POINTS: u32 = 20;

/// One play-through of the unscramble game: the pool, the words already
/// shown, the live word/scramble pair, and the score and round bookkeeping.
///
/// Single-writer by construction; callers that need shared access must
/// serialize calls themselves.
#[derive(Debug)]
pub struct GameSession {
    pool: WordPool,
    max_rounds: usize,
    score_increment: u32,
    used_words: HashSet<String>,
    current_word: String,
    current_scramble: String,
    score: u32,
    round_count: usize,
}

impl GameSession {
    /// Build a session and immediately select the round-1 word.
    pub fn new(
        pool: WordPool,
        max_rounds: usize,
        score_increment: u32,
    ) -> Result<Self, ConfigError> {
        if max_rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        let mut session = Self {
            pool,
            max_rounds,
            score_increment,
            used_words: HashSet::new(),
            current_word: String::new(),
            current_scramble: String::new(),
            score: 0,
            round_count: 0,
        };
        session.next_word();
        Ok(session)
    }

    fn next_word(&mut self) {
        // Repeats are allowed once the whole pool has been shown.
        let word = match self.pool.choose_unused(&self.used_words) {
            Some(w) => w.to_string(),
            None => self.pool.choose_any().to_string(),
        };
        self.current_scramble = scramble(&word);
        self.used_words.insert(word.clone());
        self.current_word = word;
        self.round_count += 1;
    }

    /// Move on to the next round. Returns `false` and leaves the session
    /// untouched once the round budget is spent.
    pub fn advance_round(&mut self) -> bool {
        if self.round_count >= self.max_rounds {
            return false;
        }
        self.next_word();
        true
    }

    /// Compare a guess against the current word, whitespace-trimmed and
    /// case-insensitive. A hit banks the score increment. The round does not
    /// advance either way; that is a separate caller action.
    pub fn submit_guess(&mut self, candidate: &str) -> bool {
        let correct = candidate.trim().to_lowercase() == self.current_word.to_lowercase();
        if correct {
            self.score += self.score_increment;
        }
        correct
    }

    /// Back to a fresh round 1 with the same configuration.
    pub fn reset(&mut self) {
        self.score = 0;
        self.round_count = 0;
        self.used_words.clear();
        self.next_word();
    }

    pub fn current_word(&self) -> &str {
        &self.current_word
    }

    pub fn current_scramble(&self) -> &str {
        &self.current_scramble
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn score_increment(&self) -> u32 {
        self.score_increment
    }

    pub fn round_count(&self) -> usize {
        self.round_count
    }

    pub fn max_rounds(&self) -> usize {
        self.max_rounds
    }

    /// True while the last round of the session is live; `advance_round`
    /// will be rejected from here on.
    pub fn on_last_round(&self) -> bool {
        self.round_count >= self.max_rounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn pool(words: &[&str]) -> WordPool {
        WordPool::new(words.iter().map(|w| w.to_string()).collect()).unwrap()
    }

    fn session(words: &[&str], rounds: usize) -> GameSession {
        GameSession::new(pool(words), rounds, DEFAULT_POINTS).unwrap()
    }

    #[test]
    fn test_new_session_seeds_round_one() {
        let session = session(&["kotlin", "java", "rust"], 10);

        assert_eq!(session.round_count(), 1);
        assert_eq!(session.score(), 0);
        assert!(!session.current_word().is_empty());
        assert!(!session.current_scramble().is_empty());
    }

    #[test]
    fn test_zero_rounds_is_rejected() {
        let result = GameSession::new(pool(&["kotlin"]), 0, DEFAULT_POINTS);
        assert_matches!(result, Err(ConfigError::ZeroRounds));
    }

    #[test]
    fn test_single_word_session() {
        // pool {"kotlin"}, one round, 20 points per hit
        let mut session = GameSession::new(pool(&["kotlin"]), 1, 20).unwrap();

        assert_eq!(session.current_word(), "kotlin");
        assert_eq!(session.current_scramble().len(), 6);
        assert_ne!(session.current_scramble(), "kotlin");

        assert!(session.submit_guess("KOTLIN"));
        assert_eq!(session.score(), 20);

        assert!(!session.advance_round());
        assert_eq!(session.round_count(), 1);
    }

    #[test]
    fn test_two_word_session_never_repeats() {
        for _ in 0..50 {
            let mut session = GameSession::new(pool(&["java", "kotlin"]), 2, 20).unwrap();

            let first = session.current_word().to_string();
            assert!(session.advance_round());
            let second = session.current_word().to_string();

            assert_ne!(first, second);
            assert!(!session.advance_round());
            assert_eq!(session.round_count(), 2);
        }
    }

    #[test]
    fn test_no_repeats_across_a_full_pool() {
        let words = ["alpha", "bravo", "charlie", "delta", "echo", "foxtrot"];
        let mut session = session(&words, 6);
        let mut seen = vec![session.current_word().to_string()];

        while session.advance_round() {
            seen.push(session.current_word().to_string());
        }

        assert_eq!(seen.len(), 6);
        let mut unique = seen.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn test_exhausted_pool_permits_repeats_and_terminates() {
        // 2 words, 5 rounds: rounds 3..5 must still get a word
        let mut session = session(&["java", "kotlin"], 5);

        for _ in 0..4 {
            assert!(session.advance_round());
            assert!(!session.current_word().is_empty());
        }
        assert!(!session.advance_round());
        assert_eq!(session.round_count(), 5);
    }

    #[test]
    fn test_scramble_is_a_permutation_of_the_word() {
        let mut session = session(&["banana", "kotlin", "zigzag"], 3);

        loop {
            let mut word: Vec<char> = session.current_word().chars().collect();
            let mut scrambled: Vec<char> = session.current_scramble().chars().collect();
            word.sort_unstable();
            scrambled.sort_unstable();
            assert_eq!(word, scrambled);
            assert_ne!(session.current_scramble(), session.current_word());

            if !session.advance_round() {
                break;
            }
        }
    }

    #[test]
    fn test_correct_guess_banks_points_and_keeps_the_word() {
        let mut session = GameSession::new(pool(&["kotlin"]), 3, 20).unwrap();
        let word = session.current_word().to_string();
        let scrambled = session.current_scramble().to_string();

        assert!(session.submit_guess(&word));
        assert_eq!(session.score(), 20);
        assert_eq!(session.current_word(), word);
        assert_eq!(session.current_scramble(), scrambled);
    }

    #[test]
    fn test_wrong_guess_changes_nothing() {
        let mut session = session(&["kotlin", "java"], 5);
        let word = session.current_word().to_string();
        let round = session.round_count();

        for _ in 0..5 {
            assert!(!session.submit_guess("definitelywrong"));
            assert_eq!(session.score(), 0);
            assert_eq!(session.current_word(), word);
            assert_eq!(session.round_count(), round);
        }
    }

    #[test]
    fn test_guess_is_trimmed_and_case_insensitive() {
        let mut session = GameSession::new(pool(&["kotlin"]), 1, 20).unwrap();

        assert!(session.submit_guess("  Kotlin  "));
        assert!(session.submit_guess("kOtLiN"));
        assert_eq!(session.score(), 40);
    }

    #[test]
    fn test_score_moves_in_fixed_increments() {
        let mut session = GameSession::new(pool(&["java", "kotlin", "rust"]), 3, 7).unwrap();
        let mut expected = 0;

        loop {
            let word = session.current_word().to_string();
            assert!(!session.submit_guess("nope"));
            assert_eq!(session.score(), expected);

            assert!(session.submit_guess(&word));
            expected += 7;
            assert_eq!(session.score(), expected);

            if !session.advance_round() {
                break;
            }
        }
        assert_eq!(session.score(), 21);
    }

    #[test]
    fn test_advance_round_stops_exactly_at_the_budget() {
        let mut session = session(&["one", "two", "three", "four", "five"], 3);
        // round 1 live already
        assert!(!session.on_last_round());
        assert!(session.advance_round());
        assert!(session.advance_round());
        assert!(session.on_last_round());

        // repeated rejections are side-effect free
        for _ in 0..3 {
            assert!(!session.advance_round());
            assert_eq!(session.round_count(), 3);
        }
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut session = session(&["alpha", "bravo", "charlie"], 3);
        let word = session.current_word().to_string();
        session.submit_guess(&word);
        session.advance_round();
        session.advance_round();
        assert!(session.score() > 0);
        assert_eq!(session.round_count(), 3);

        session.reset();

        assert_eq!(session.score(), 0);
        assert_eq!(session.round_count(), 1);
        assert!(!session.current_word().is_empty());
        assert_ne!(session.current_scramble(), session.current_word());
    }

    #[test]
    fn test_reset_forgets_used_words() {
        // after reset the full pool is available again: a 3-word pool still
        // fills 3 distinct rounds
        let mut session = session(&["alpha", "bravo", "charlie"], 3);
        while session.advance_round() {}

        session.reset();

        let mut seen = vec![session.current_word().to_string()];
        while session.advance_round() {
            seen.push(session.current_word().to_string());
        }
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_zero_increment_scores_nothing() {
        let mut session = GameSession::new(pool(&["kotlin"]), 1, 0).unwrap();

        assert!(session.submit_guess("kotlin"));
        assert_eq!(session.score(), 0);
    }
}
