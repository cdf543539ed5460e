use std::fmt;

/// Errors raised around planet generation.
///
/// Generation itself is total: out-of-range percentages are clamped by the
/// probability primitives instead of being reported here.
#[derive(Debug)]
pub enum GameError {
    /// Invalid input provided by the caller
    InvalidInput(String),
    /// Failed to serialize generated planets
    Serialization(serde_json::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            GameError::Serialization(err) => write!(f, "Serialization error: {}", err),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Serialization(err)
    }
}
