//! The set of people still consistent with the answers so far.

use gw_core::Person;

/// An ordered set of candidates. Only ever shrinks; order is never changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    people: Vec<Person>,
}

impl CandidateSet {
    /// Start from the given people, keeping their order.
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }

    /// The ordered subsequence of candidates satisfying `pred`.
    pub fn filter(&self, pred: impl Fn(&Person) -> bool) -> Self {
        Self {
            people: self.people.iter().filter(|&p| pred(p)).cloned().collect(),
        }
    }

    /// In-place form of [`filter`](Self::filter).
    pub fn retain(&mut self, pred: impl Fn(&Person) -> bool) {
        self.people.retain(|p| pred(p));
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Whether no candidate is left.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Whether any candidate satisfies `pred`.
    pub fn any(&self, pred: impl Fn(&Person) -> bool) -> bool {
        self.people.iter().any(pred)
    }

    /// The first remaining candidate.
    pub fn first(&self) -> Option<&Person> {
        self.people.first()
    }

    /// All candidates in order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Iterate over candidates in order.
    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.people.iter()
    }

    /// The most common nationality and how often it occurs.
    ///
    /// Ties go to the nationality encountered first.
    pub fn plurality_nationality(&self) -> Option<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for p in &self.people {
            match counts.iter_mut().find(|(n, _)| *n == p.nationality()) {
                Some(entry) => entry.1 += 1,
                None => counts.push((p.nationality(), 1)),
            }
        }

        let mut best: Option<(&str, usize)> = None;
        for (nationality, count) in counts {
            if best.is_none_or(|(_, c)| count > c) {
                best = Some((nationality, count));
            }
        }
        best
    }
}
