//! Picking the next question from the size and make-up of the candidate set.
//!
//! A round opens with one question chosen by set size:
//!
//! | remaining | opening question |
//! |---|---|
//! | > 20 | gender |
//! | 11–20 | entertainment industry |
//! | 6–10 | plurality nationality, if shared by more than one candidate |
//! | 3–5 | over forty |
//!
//! A question already asked in the session cannot narrow the set again, so
//! the round falls through to the next tier down instead of repeating it.
//!
//! An entertainment "yes" is followed in the same round by the sports
//! branch (sports, then tennis and/or ball sport while more than three remain)
//! or, when nobody left plays a sport, by the film-versus-music question.

use gw_core::predicate;

use crate::candidates::CandidateSet;
use crate::question::{Answer, Question};

/// Above this size the round opens with the gender question.
pub const GENDER_ABOVE: usize = 20;
/// Above this size the round opens with the entertainment question.
pub const ENTERTAINMENT_ABOVE: usize = 10;
/// Above this size the round opens with the nationality question.
pub const NATIONALITY_ABOVE: usize = 5;
/// The nationality and age questions need more than this many candidates.
pub const NARROWING_ABOVE: usize = 2;
/// Tennis and ball-sport follow-ups need more than this many candidates.
pub const SPORT_DETAIL_ABOVE: usize = 3;

/// Decides which question to ask.
pub trait QuestionStrategy {
    /// The question that opens a round, or `None` if nothing would help.
    /// `asked` lists every question answered so far in the session.
    fn opening(&self, candidates: &CandidateSet, asked: &[Question]) -> Option<Question>;

    /// A follow-up asked in the same round after `asked` was answered.
    /// `candidates` is the set after the answer was applied.
    fn follow_up(
        &self,
        asked: &Question,
        answer: Answer,
        candidates: &CandidateSet,
    ) -> Option<Question>;
}

/// The hand-authored question tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct TieredStrategy;

impl TieredStrategy {
    fn nationality(candidates: &CandidateSet) -> Option<Question> {
        if candidates.len() <= NARROWING_ABOVE {
            return None;
        }
        let (nationality, count) = candidates.plurality_nationality()?;
        (count > 1).then(|| Question::Nationality(nationality.to_string()))
    }

    fn age(candidates: &CandidateSet) -> Option<Question> {
        (candidates.len() > NARROWING_ABOVE).then_some(Question::OverForty)
    }

    fn tennis(candidates: &CandidateSet) -> Option<Question> {
        (candidates.len() > SPORT_DETAIL_ABOVE && candidates.any(predicate::plays_tennis))
            .then_some(Question::PlaysTennis)
    }

    fn ball_sport(candidates: &CandidateSet) -> Option<Question> {
        (candidates.len() > SPORT_DETAIL_ABOVE && candidates.any(predicate::plays_ball_sport))
            .then_some(Question::PlaysBallSport)
    }
}

impl QuestionStrategy for TieredStrategy {
    fn opening(&self, candidates: &CandidateSet, asked: &[Question]) -> Option<Question> {
        let n = candidates.len();
        [
            (n > GENDER_ABOVE).then_some(Question::Gender),
            (n > ENTERTAINMENT_ABOVE).then_some(Question::Entertainment),
            (n > NATIONALITY_ABOVE)
                .then(|| Self::nationality(candidates))
                .flatten(),
            Self::age(candidates),
        ]
        .into_iter()
        .flatten()
        .find(|q| !asked.contains(q))
    }

    fn follow_up(
        &self,
        asked: &Question,
        answer: Answer,
        candidates: &CandidateSet,
    ) -> Option<Question> {
        match (asked, answer) {
            (Question::Entertainment, Answer::Yes) => {
                if candidates.any(predicate::plays_sport) {
                    Some(Question::PlaysSport)
                } else {
                    Some(Question::FilmOrMusic)
                }
            }
            (Question::PlaysSport, _) => {
                Self::tennis(candidates).or_else(|| Self::ball_sport(candidates))
            }
            (Question::PlaysTennis, _) => Self::ball_sport(candidates),
            _ => None,
        }
    }
}
