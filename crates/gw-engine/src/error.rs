//! Error types for the game engine.

use thiserror::Error;

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors that can occur while starting or playing a game.
///
/// Running out of candidates is not an error: it ends the session with
/// [`crate::ExhaustReason::NoMatch`].
#[derive(Debug, Error)]
pub enum GameError {
    /// The answer is not one of the allowed answers. Nothing changed; ask again.
    #[error("please answer one of: {allowed}")]
    InputInvalid {
        /// The rejected input.
        input: String,
        /// The allowed answers, comma separated.
        allowed: String,
    },

    /// An answer was given while no question was pending.
    #[error("no question is pending")]
    NoPendingQuestion,

    /// The catalog could not be loaded or is empty. No session was created.
    #[error("catalog unavailable: {0}")]
    DataUnavailable(String),
}
