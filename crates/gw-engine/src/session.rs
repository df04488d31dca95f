//! Game session management.
//!
//! A [`GameSession`] owns the candidate set, the question counter and the
//! budget. The caller drives it one question at a time: ask
//! [`next_question`](GameSession::next_question), collect an answer, hand it
//! to [`answer`](GameSession::answer). Nothing here touches the console.

use gw_core::{Person, PersonSource};

use crate::candidates::CandidateSet;
use crate::config::GameConfig;
use crate::error::{GameError, GameResult};
use crate::question::{Answer, Question};
use crate::strategy::{QuestionStrategy, TieredStrategy};
use crate::transcript::{Transcript, TranscriptEntry};

/// Why a session ended without a single answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExhaustReason {
    /// The answers ruled out everyone.
    NoMatch,
    /// The question budget ran out.
    BudgetSpent,
    /// More than one candidate is left but no question can tell them apart.
    NoQuestionLeft,
}

/// Where a session stands, evaluated at the start of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// More questions to come.
    InProgress,
    /// Exactly one candidate is left.
    Solved,
    /// The session ended without a single candidate.
    Exhausted(ExhaustReason),
}

impl SessionStatus {
    /// Whether the session is over.
    pub fn is_terminal(self) -> bool {
        self != Self::InProgress
    }
}

/// The outcome of one answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// The question that was answered.
    pub question: Question,
    /// The validated answer.
    pub answer: Answer,
    /// Candidates left after applying the answer.
    pub remaining: usize,
}

/// A single guessing game.
pub struct GameSession<S = TieredStrategy> {
    candidates: CandidateSet,
    questions_asked: u32,
    budget: u32,
    pending: Option<Question>,
    asked: Vec<Question>,
    transcript: Transcript,
    strategy: S,
}

impl GameSession<TieredStrategy> {
    /// Start a session over every person in `source`, using the default
    /// question tree.
    pub fn start(source: &impl PersonSource, config: GameConfig) -> GameResult<Self> {
        Self::with_strategy(source, config, TieredStrategy)
    }
}

impl<S: QuestionStrategy> GameSession<S> {
    /// Start a session with a custom question strategy.
    pub fn with_strategy(
        source: &impl PersonSource,
        config: GameConfig,
        strategy: S,
    ) -> GameResult<Self> {
        let people = source
            .all_people()
            .map_err(|e| GameError::DataUnavailable(e.to_string()))?;
        if people.is_empty() {
            return Err(GameError::DataUnavailable("catalog is empty".to_string()));
        }
        log::debug!(
            "new session: {} candidates, budget {}",
            people.len(),
            config.budget
        );

        Ok(Self {
            candidates: CandidateSet::new(people),
            questions_asked: 0,
            budget: config.budget.max(1),
            pending: None,
            asked: Vec::new(),
            transcript: Transcript::new(),
            strategy,
        })
    }

    /// Current status.
    ///
    /// While a follow-up question is pending the round is still open and the
    /// session stays in progress.
    pub fn status(&self) -> SessionStatus {
        if self.pending.is_some() {
            return SessionStatus::InProgress;
        }
        match self.candidates.len() {
            1 => SessionStatus::Solved,
            0 => SessionStatus::Exhausted(ExhaustReason::NoMatch),
            _ if self.questions_asked >= self.budget => {
                SessionStatus::Exhausted(ExhaustReason::BudgetSpent)
            }
            _ if self.strategy.opening(&self.candidates, &self.asked).is_none() => {
                SessionStatus::Exhausted(ExhaustReason::NoQuestionLeft)
            }
            _ => SessionStatus::InProgress,
        }
    }

    /// The question awaiting an answer, choosing a new one if a round starts.
    /// Returns `None` once the session is over.
    pub fn next_question(&mut self) -> Option<&Question> {
        if self.pending.is_none() && self.status() == SessionStatus::InProgress {
            self.pending = self.strategy.opening(&self.candidates, &self.asked);
        }
        self.pending.as_ref()
    }

    /// Apply a raw answer to the pending question.
    ///
    /// Invalid input is rejected with [`GameError::InputInvalid`] and leaves
    /// the session untouched, so the same question can be asked again.
    pub fn answer(&mut self, raw: &str) -> GameResult<Turn> {
        let answer = self
            .pending
            .as_ref()
            .ok_or(GameError::NoPendingQuestion)?
            .parse_answer(raw)?;
        let Some(question) = self.pending.take() else {
            return Err(GameError::NoPendingQuestion);
        };

        self.candidates.retain(|p| question.keeps(answer, p));
        self.questions_asked += 1;
        let remaining = self.candidates.len();
        log::debug!(
            "q{}: {} -> {answer}, {remaining} left",
            self.questions_asked,
            question.prompt()
        );

        self.transcript.record(TranscriptEntry {
            number: self.questions_asked,
            prompt: question.prompt(),
            answer: answer.to_string(),
            remaining,
        });

        if self.questions_asked < self.budget && remaining > 1 {
            self.pending = self.strategy.follow_up(&question, answer, &self.candidates);
        }
        self.asked.push(question.clone());

        Ok(Turn {
            question,
            answer,
            remaining,
        })
    }

    /// The question awaiting an answer, without starting a new round.
    pub fn pending(&self) -> Option<&Question> {
        self.pending.as_ref()
    }

    /// The sole remaining candidate once solved.
    pub fn solution(&self) -> Option<&Person> {
        match self.status() {
            SessionStatus::Solved => self.candidates.first(),
            _ => None,
        }
    }

    /// The remaining candidates, in catalog order.
    pub fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Number of questions answered so far.
    pub fn questions_asked(&self) -> u32 {
        self.questions_asked
    }

    /// Maximum number of questions.
    pub fn budget(&self) -> u32 {
        self.budget
    }

    /// Questions answered so far.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }
}
