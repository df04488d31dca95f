//! Classifications of a person used to branch the question tree.
//!
//! Every predicate is total and works on the normalized fields stored in
//! [`Person`], so no case handling is needed for gender or industry.
//!
//! The sport checks are keyword heuristics over the free-text occupation,
//! not a controlled taxonomy: any occupation that merely *contains* one of the
//! keywords matches, false positives included.

use std::fmt;

use crate::person::{Industry, Person};

/// Occupation keywords that count as a ball sport.
pub const BALL_SPORT_KEYWORDS: [&str; 5] =
    ["football", "basketball", "tennis", "cricket", "baseball"];

/// Industry is sports, music or film.
pub fn is_entertainment(p: &Person) -> bool {
    p.industry().is_entertainment()
}

/// Industry is sports.
pub fn plays_sport(p: &Person) -> bool {
    p.industry() == Industry::Sports
}

/// Industry is music.
pub fn is_music(p: &Person) -> bool {
    p.industry() == Industry::Music
}

/// Industry is film.
pub fn is_film(p: &Person) -> bool {
    p.industry() == Industry::Film
}

/// Occupation mentions tennis.
pub fn plays_tennis(p: &Person) -> bool {
    p.occupation().to_lowercase().contains("tennis")
}

/// Occupation mentions any of [`BALL_SPORT_KEYWORDS`].
pub fn plays_ball_sport(p: &Person) -> bool {
    let occupation = p.occupation().to_lowercase();
    BALL_SPORT_KEYWORDS.iter().any(|kw| occupation.contains(kw))
}

/// A named predicate, so callers can pick and evaluate them uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// See [`is_entertainment`].
    Entertainment,
    /// See [`plays_sport`].
    Sport,
    /// See [`is_music`].
    Music,
    /// See [`is_film`].
    Film,
    /// See [`plays_tennis`].
    Tennis,
    /// See [`plays_ball_sport`]. Heuristic.
    BallSport,
}

impl Attribute {
    /// All attributes.
    pub const ALL: [Attribute; 6] = [
        Self::Entertainment,
        Self::Sport,
        Self::Music,
        Self::Film,
        Self::Tennis,
        Self::BallSport,
    ];

    /// Evaluate the predicate for a person.
    pub fn holds(self, p: &Person) -> bool {
        match self {
            Self::Entertainment => is_entertainment(p),
            Self::Sport => plays_sport(p),
            Self::Music => is_music(p),
            Self::Film => is_film(p),
            Self::Tennis => plays_tennis(p),
            Self::BallSport => plays_ball_sport(p),
        }
    }

    /// Parse an attribute by its display name, case-insensitively.
    /// Hyphens and underscores stand in for spaces.
    pub fn parse(s: &str) -> Option<Self> {
        let name = s.trim().to_lowercase().replace(['-', '_'], " ");
        Self::ALL.into_iter().find(|a| a.to_string() == name)
    }

    /// Whether the predicate is a keyword heuristic over free text.
    pub fn is_heuristic(self) -> bool {
        matches!(self, Self::Tennis | Self::BallSport)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Entertainment => "entertainment",
            Self::Sport => "sport",
            Self::Music => "music",
            Self::Film => "film",
            Self::Tennis => "tennis",
            Self::BallSport => "ball sport",
        };
        f.write_str(s)
    }
}
