//! Question descriptors and the answers they accept.

use std::fmt;

use gw_core::predicate;
use gw_core::{Gender, Person};

use crate::error::{GameError, GameResult};

/// Age above which the age question answers yes.
pub const AGE_THRESHOLD: u32 = 40;

const GENDER_ANSWERS: &[&str] = &["M", "F"];
const YES_NO_ANSWERS: &[&str] = &["Y", "N"];

/// A question the game can ask about the hidden person.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Question {
    /// Male or female.
    Gender,
    /// Works in sports, music or film.
    Entertainment,
    /// Works in sports.
    PlaysSport,
    /// Occupation mentions tennis.
    PlaysTennis,
    /// Occupation mentions a ball sport.
    PlaysBallSport,
    /// Yes keeps film, no keeps music. Anyone else is dropped either way.
    FilmOrMusic,
    /// Exact, case-sensitive nationality match.
    Nationality(String),
    /// Older than [`AGE_THRESHOLD`].
    OverForty,
}

/// A validated answer to a [`Question`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Answer {
    /// Answer to [`Question::Gender`].
    Gender(Gender),
    /// Yes.
    Yes,
    /// No.
    No,
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gender(g) => write!(f, "{g}"),
            Self::Yes => write!(f, "Y"),
            Self::No => write!(f, "N"),
        }
    }
}

impl Question {
    /// The text shown to the player.
    pub fn prompt(&self) -> String {
        match self {
            Self::Gender => "Is the person male or female?".to_string(),
            Self::Entertainment => "Is the person in an entertainment industry?".to_string(),
            Self::PlaysSport => "Does the person play sports?".to_string(),
            Self::PlaysTennis => "Does the person play tennis?".to_string(),
            Self::PlaysBallSport => "Does the person play a ball sport?".to_string(),
            Self::FilmOrMusic => {
                "Is the person more associated with visual media than audio media?".to_string()
            }
            Self::Nationality(n) => format!("Is the person from {n}?"),
            Self::OverForty => format!("Is the person over {AGE_THRESHOLD} years old?"),
        }
    }

    /// The answers this question accepts, upper-case.
    pub fn allowed_answers(&self) -> &'static [&'static str] {
        match self {
            Self::Gender => GENDER_ANSWERS,
            _ => YES_NO_ANSWERS,
        }
    }

    /// Validate raw input. Surrounding whitespace and case are ignored; any
    /// other deviation from the allowed answers is rejected.
    pub fn parse_answer(&self, raw: &str) -> GameResult<Answer> {
        let normalized = raw.trim().to_uppercase();
        let answer = match (self, normalized.as_str()) {
            (Self::Gender, "M") => Some(Answer::Gender(Gender::Male)),
            (Self::Gender, "F") => Some(Answer::Gender(Gender::Female)),
            (Self::Gender, _) => None,
            (_, "Y") => Some(Answer::Yes),
            (_, "N") => Some(Answer::No),
            _ => None,
        };
        answer.ok_or_else(|| GameError::InputInvalid {
            input: raw.to_string(),
            allowed: self.allowed_answers().join(", "),
        })
    }

    /// Whether `p` is still a candidate after `answer`.
    pub fn keeps(&self, answer: Answer, p: &Person) -> bool {
        match (self, answer) {
            (Self::Gender, Answer::Gender(g)) => p.gender() == g,
            (Self::Gender, _) | (_, Answer::Gender(_)) => false,
            (Self::FilmOrMusic, Answer::Yes) => predicate::is_film(p),
            (Self::FilmOrMusic, Answer::No) => predicate::is_music(p),
            (q, Answer::Yes) => q.holds(p),
            (q, Answer::No) => !q.holds(p),
        }
    }

    fn holds(&self, p: &Person) -> bool {
        match self {
            Self::Entertainment => predicate::is_entertainment(p),
            Self::PlaysSport => predicate::plays_sport(p),
            Self::PlaysTennis => predicate::plays_tennis(p),
            Self::PlaysBallSport => predicate::plays_ball_sport(p),
            Self::Nationality(n) => p.nationality() == n.as_str(),
            Self::OverForty => p.age() > AGE_THRESHOLD,
            Self::Gender | Self::FilmOrMusic => false,
        }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.prompt(), self.allowed_answers().join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(gender: &str, age: i64, occupation: &str, industry: &str, nat: &str) -> Person {
        Person::new(1, "Test", gender, age, occupation, industry, nat).unwrap()
    }

    #[test]
    fn parse_gender_answers() {
        let q = Question::Gender;
        assert_eq!(q.parse_answer("m").unwrap(), Answer::Gender(Gender::Male));
        assert_eq!(q.parse_answer(" F ").unwrap(), Answer::Gender(Gender::Female));
        assert!(q.parse_answer("Y").is_err());
        assert!(q.parse_answer("male").is_err());
    }

    #[test]
    fn parse_yes_no_answers() {
        let q = Question::OverForty;
        assert_eq!(q.parse_answer("y").unwrap(), Answer::Yes);
        assert_eq!(q.parse_answer("N").unwrap(), Answer::No);
        assert!(q.parse_answer("M").is_err());
        assert!(q.parse_answer("").is_err());
    }

    #[test]
    fn invalid_answer_lists_allowed() {
        let err = Question::Entertainment.parse_answer("maybe").unwrap_err();
        assert_eq!(err.to_string(), "please answer one of: Y, N");
        match err {
            GameError::InputInvalid { input, .. } => assert_eq!(input, "maybe"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn gender_filter() {
        let f = person("F", 30, "Singer", "MUSIC", "USA");
        assert!(Question::Gender.keeps(Answer::Gender(Gender::Female), &f));
        assert!(!Question::Gender.keeps(Answer::Gender(Gender::Male), &f));
        assert!(!Question::Gender.keeps(Answer::Yes, &f));
    }

    #[test]
    fn yes_no_filters_are_complements() {
        let people = [
            person("M", 42, "Tennis", "SPORTS", "Switzerland"),
            person("F", 34, "Singer", "MUSIC", "USA"),
            person("M", 76, "Physicist", "SCIENCE", "Germany"),
        ];
        let questions = [
            Question::Entertainment,
            Question::PlaysSport,
            Question::PlaysTennis,
            Question::PlaysBallSport,
            Question::Nationality("USA".to_string()),
            Question::OverForty,
        ];
        for q in &questions {
            for p in &people {
                assert_ne!(q.keeps(Answer::Yes, p), q.keeps(Answer::No, p), "{q} / {p}");
            }
        }
    }

    #[test]
    fn film_or_music_drops_everyone_else() {
        let q = Question::FilmOrMusic;
        let actor = person("M", 49, "Actor", "FILM", "USA");
        let singer = person("F", 34, "Singer", "MUSIC", "USA");
        let athlete = person("M", 42, "Tennis", "SPORTS", "Switzerland");
        assert!(q.keeps(Answer::Yes, &actor));
        assert!(q.keeps(Answer::No, &singer));
        assert!(!q.keeps(Answer::Yes, &athlete));
        assert!(!q.keeps(Answer::No, &athlete));
    }

    #[test]
    fn age_threshold_is_exclusive() {
        let forty = person("M", 40, "Actor", "FILM", "USA");
        assert!(!Question::OverForty.keeps(Answer::Yes, &forty));
        assert!(Question::OverForty.keeps(Answer::No, &forty));
    }

    #[test]
    fn nationality_is_case_sensitive() {
        let p = person("M", 40, "Actor", "FILM", "usa");
        assert!(!Question::Nationality("USA".into()).keeps(Answer::Yes, &p));
    }

    #[test]
    fn display_includes_allowed_answers() {
        insta::assert_snapshot!(
            Question::Nationality("India".into()).to_string(),
            @"Is the person from India? (Y/N)"
        );
        insta::assert_snapshot!(Question::Gender.to_string(), @"Is the person male or female? (M/F)");
    }
}
