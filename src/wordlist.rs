use crate::error::ConfigError;
use include_dir::{include_dir, Dir};
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_json::from_str;
use std::collections::HashSet;

static WORDS_DIR: Dir = include_dir!("src/words");

/// Random draws retry this many times before falling back to scanning the
/// pool for the unused words directly.
const MAX_DRAW_ATTEMPTS: usize = 16;

/// On-disk shape of an embedded word list file.
#[allow(dead_code)]
#[derive(Deserialize, Clone, Debug)]
pub struct WordListFile {
    pub name: String,
    pub size: u32,
    pub words: Vec<String>,
}

/// A validated, immutable pool of candidate words. Guaranteed non-empty,
/// with every entry a non-empty run of letters.
#[derive(Debug, Clone)]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    pub fn new(words: Vec<String>) -> Result<Self, ConfigError> {
        if words.is_empty() {
            return Err(ConfigError::EmptyPool);
        }
        for word in &words {
            if word.is_empty() || !word.chars().all(char::is_alphabetic) {
                return Err(ConfigError::InvalidWord(word.clone()));
            }
        }
        Ok(Self { words })
    }

    /// Load one of the embedded word lists by name (e.g. "common").
    pub fn load(name: &str) -> Result<Self, ConfigError> {
        let file = WORDS_DIR
            .get_file(format!("{name}.json"))
            .ok_or_else(|| ConfigError::UnknownWordList(name.to_string()))?;

        let contents = file.contents_utf8().ok_or_else(|| {
            ConfigError::MalformedWordList(name.to_string(), "not valid utf-8".to_string())
        })?;

        let list: WordListFile = from_str(contents)
            .map_err(|e| ConfigError::MalformedWordList(name.to_string(), e.to_string()))?;

        Self::new(list.words)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Draw a random word that is not in `used`. Tries random picks first,
    /// then falls back to drawing from the leftovers directly. `None` once
    /// every pool word has been used.
    pub fn choose_unused(&self, used: &HashSet<String>) -> Option<&str> {
        let mut rng = rand::thread_rng();
        for _ in 0..MAX_DRAW_ATTEMPTS {
            let word = self.words.choose(&mut rng).expect("pool is never empty");
            if !used.contains(word) {
                return Some(word);
            }
        }
        let unused: Vec<&String> = self.words.iter().filter(|w| !used.contains(*w)).collect();
        unused.choose(&mut rng).map(|w| w.as_str())
    }

    /// Draw any random word, used or not.
    pub fn choose_any(&self) -> &str {
        self.words
            .choose(&mut rand::thread_rng())
            .expect("pool is never empty")
    }
}
