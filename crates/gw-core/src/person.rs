use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Catalog identifier of a person. Catalogs iterate in ascending id order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub u32);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Gender as stored in the catalog: a single upper-case letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Stored as `M`.
    Male,
    /// Stored as `F`.
    Female,
}

impl Gender {
    /// Parse `m`, `f`, `male` or `female`, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Some(Self::Male),
            "f" | "female" => Some(Self::Female),
            _ => None,
        }
    }

    /// The single-letter storage form.
    pub fn letter(self) -> char {
        match self {
            Self::Male => 'M',
            Self::Female => 'F',
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::parse(s).ok_or_else(|| CoreError::InvalidField {
            field: "gender",
            value: s.to_string(),
        })
    }
}

/// The closed set of industries a person can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Industry {
    /// Athletes of any discipline.
    Sports,
    /// Politicians and activists.
    Politics,
    /// Scientists and engineers.
    Science,
    /// Musicians and singers.
    Music,
    /// Actors and film makers.
    Film,
    /// Entrepreneurs and investors.
    Business,
}

impl Industry {
    /// All industries in label order.
    pub const ALL: [Industry; 6] = [
        Self::Sports,
        Self::Politics,
        Self::Science,
        Self::Music,
        Self::Film,
        Self::Business,
    ];

    /// Parse an industry label, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "SPORTS" => Some(Self::Sports),
            "POLITICS" => Some(Self::Politics),
            "SCIENCE" => Some(Self::Science),
            "MUSIC" => Some(Self::Music),
            "FILM" => Some(Self::Film),
            "BUSINESS" => Some(Self::Business),
            _ => None,
        }
    }

    /// The upper-case storage label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sports => "SPORTS",
            Self::Politics => "POLITICS",
            Self::Science => "SCIENCE",
            Self::Music => "MUSIC",
            Self::Film => "FILM",
            Self::Business => "BUSINESS",
        }
    }

    /// Sports, music and film count as entertainment.
    pub fn is_entertainment(self) -> bool {
        matches!(self, Self::Sports | Self::Music | Self::Film)
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Industry {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        Self::parse(s).ok_or_else(|| CoreError::InvalidField {
            field: "industry",
            value: s.to_string(),
        })
    }
}

/// Raw, unvalidated person data as it appears in a catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// Catalog id.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Gender text; only the first letter matters.
    pub gender: String,
    /// Age in years.
    pub age: i64,
    /// Free-text occupation.
    pub occupation: String,
    /// Industry label.
    pub industry: String,
    /// Free-text nationality.
    pub nationality: String,
}

/// A person in the catalog. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PersonRecord", into = "PersonRecord")]
pub struct Person {
    id: PersonId,
    name: String,
    gender: Gender,
    age: u32,
    occupation: String,
    industry: Industry,
    nationality: String,
}

impl Person {
    /// Build a person, normalizing and validating every field.
    pub fn new(
        id: u32,
        name: &str,
        gender: &str,
        age: i64,
        occupation: &str,
        industry: &str,
        nationality: &str,
    ) -> CoreResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::InvalidField {
                field: "name",
                value: name.to_string(),
            });
        }
        let age = u32::try_from(age).map_err(|_| CoreError::InvalidField {
            field: "age",
            value: age.to_string(),
        })?;

        Ok(Self {
            id: PersonId(id),
            name: name.to_string(),
            gender: gender.parse()?,
            age,
            occupation: occupation.trim().to_string(),
            industry: industry.parse()?,
            nationality: nationality.trim().to_string(),
        })
    }

    /// Catalog id.
    pub fn id(&self) -> PersonId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized gender.
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Age in years.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Free-text occupation, as entered.
    pub fn occupation(&self) -> &str {
        &self.occupation
    }

    /// Normalized industry.
    pub fn industry(&self) -> Industry {
        self.industry
    }

    /// Nationality, as entered. Compared case-sensitively by the game.
    pub fn nationality(&self) -> &str {
        &self.nationality
    }
}

impl TryFrom<PersonRecord> for Person {
    type Error = CoreError;

    fn try_from(r: PersonRecord) -> CoreResult<Self> {
        Self::new(
            r.id,
            &r.name,
            &r.gender,
            r.age,
            &r.occupation,
            &r.industry,
            &r.nationality,
        )
    }
}

impl From<Person> for PersonRecord {
    fn from(p: Person) -> Self {
        Self {
            id: p.id.0,
            name: p.name,
            gender: p.gender.to_string(),
            age: i64::from(p.age),
            occupation: p.occupation,
            industry: p.industry.label().to_string(),
            nationality: p.nationality,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {}, {}, {}, {})",
            self.name, self.gender, self.age, self.occupation, self.industry, self.nationality
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn federer() -> Person {
        Person::new(3, "Roger Federer", "M", 42, "Tennis", "SPORTS", "Switzerland").unwrap()
    }

    #[test]
    fn gender_parse_accepts_words_and_letters() {
        assert_eq!(Gender::parse("M"), Some(Gender::Male));
        assert_eq!(Gender::parse("female"), Some(Gender::Female));
        assert_eq!(Gender::parse("  f"), Some(Gender::Female));
        assert_eq!(Gender::parse(" MALE "), Some(Gender::Male));
        assert_eq!(Gender::parse("x"), None);
        assert_eq!(Gender::parse(""), None);
    }

    #[test]
    fn gender_parse_rejects_other_words() {
        assert_eq!(Gender::parse("Frank"), None);
        assert_eq!(Gender::parse("martian"), None);
        assert_eq!(Gender::parse("fe"), None);
        assert!(Person::new(9, "Frank Ocean", "Frank", 36, "Singer", "MUSIC", "USA").is_err());
    }

    #[test]
    fn industry_parse_is_case_insensitive() {
        assert_eq!(Industry::parse("film"), Some(Industry::Film));
        assert_eq!(Industry::parse(" Sports "), Some(Industry::Sports));
        assert_eq!(Industry::parse("cooking"), None);
    }

    #[test]
    fn entertainment_industries() {
        let ent: Vec<_> = Industry::ALL
            .into_iter()
            .filter(|i| i.is_entertainment())
            .collect();
        assert_eq!(ent, vec![Industry::Sports, Industry::Music, Industry::Film]);
    }

    #[test]
    fn new_normalizes_fields() {
        let p = Person::new(7, "  Serena Williams ", "female", 41, " Tennis", "sports", "USA ")
            .unwrap();
        assert_eq!(p.name(), "Serena Williams");
        assert_eq!(p.gender(), Gender::Female);
        assert_eq!(p.industry(), Industry::Sports);
        assert_eq!(p.occupation(), "Tennis");
        assert_eq!(p.nationality(), "USA");
    }

    #[test]
    fn new_rejects_invalid_fields() {
        let err = Person::new(1, "A", "X", 30, "Singer", "MUSIC", "USA").unwrap_err();
        assert!(matches!(err, CoreError::InvalidField { field: "gender", .. }));

        let err = Person::new(1, "A", "M", 30, "Chef", "COOKING", "USA").unwrap_err();
        assert!(matches!(err, CoreError::InvalidField { field: "industry", .. }));

        let err = Person::new(1, "A", "M", -1, "Singer", "MUSIC", "USA").unwrap_err();
        assert!(matches!(err, CoreError::InvalidField { field: "age", .. }));

        let err = Person::new(1, "   ", "M", 30, "Singer", "MUSIC", "USA").unwrap_err();
        assert!(matches!(err, CoreError::InvalidField { field: "name", .. }));
    }

    #[test]
    fn display_form() {
        insta::assert_snapshot!(
            federer().to_string(),
            @"Roger Federer (M, 42, Tennis, SPORTS, Switzerland)"
        );
    }

    #[test]
    fn serializes_as_upper_case_labels() {
        let json = serde_json::to_value(federer()).unwrap();
        assert_eq!(json["gender"], "M");
        assert_eq!(json["industry"], "SPORTS");
        assert_eq!(json["id"], 3);
    }

    #[test]
    fn deserialize_validates() {
        let ok: Person = serde_json::from_str(
            r#"{"id":9,"name":"Simone Biles","gender":"f","age":26,
                "occupation":"Gymnastics","industry":"sports","nationality":"USA"}"#,
        )
        .unwrap();
        assert_eq!(ok.gender(), Gender::Female);

        let bad = serde_json::from_str::<Person>(
            r#"{"id":9,"name":"Nobody","gender":"q","age":26,
                "occupation":"x","industry":"SPORTS","nationality":"USA"}"#,
        );
        assert!(bad.is_err());
    }
}
