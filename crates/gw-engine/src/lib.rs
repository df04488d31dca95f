//! Question selection and candidate filtering for Guess Who.
//!
//! A [`GameSession`] narrows a catalog of people down one answered question
//! at a time. Questions come from a [`QuestionStrategy`]; the default
//! [`TieredStrategy`] picks them from the size and make-up of the remaining
//! [`CandidateSet`].

pub mod candidates;
pub mod config;
pub mod error;
pub mod question;
pub mod session;
pub mod strategy;
pub mod transcript;

pub use candidates::CandidateSet;
pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use question::{Answer, Question};
pub use session::{ExhaustReason, GameSession, SessionStatus, Turn};
pub use strategy::{QuestionStrategy, TieredStrategy};
pub use transcript::{Transcript, TranscriptEntry};
