use thiserror::Error;

/// Failures raised while assembling a game. All variants are fatal to
/// session creation; no partial session is ever handed out.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("word pool is empty")]
    EmptyPool,

    #[error("unusable word {0:?}: entries must be non-empty and letters only")]
    InvalidWord(String),

    #[error("a game needs at least one round")]
    ZeroRounds,

    #[error("unknown word list {0:?}")]
    UnknownWordList(String),

    #[error("word list {0:?} could not be decoded: {1}")]
    MalformedWordList(String, String),
}
