use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::person::{Person, PersonId};
use crate::query::QueryBuilder;
use crate::sample;

/// Bulk read access to a collection of people.
///
/// The game engine only depends on this trait, so any backing store that can
/// list its people in stable id order can feed a game.
pub trait PersonSource {
    /// Every person, in ascending id order.
    fn all_people(&self) -> CoreResult<Vec<Person>>;
}

/// The on-disk shape of a catalog file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogFile {
    people: Vec<Person>,
}

/// An in-memory record store of people, keyed and ordered by id.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    people: BTreeMap<PersonId, Person>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog of notable people.
    pub fn sample() -> Self {
        let mut catalog = Self::new();
        catalog.insert_many(sample::people());
        catalog
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let text = fs::read_to_string(path)?;
        let file: CatalogFile = serde_json::from_str(&text)?;
        let mut catalog = Self::new();
        for person in file.people {
            catalog.insert(person)?;
        }
        log::debug!("loaded {} people from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Write the catalog to a JSON file, replacing any existing content.
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        let file = CatalogFile {
            people: self.people.values().cloned().collect(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        fs::write(path, json)?;
        log::debug!("saved {} people to {}", self.len(), path.display());
        Ok(())
    }

    /// Add a person. Fails if the id is already taken.
    pub fn insert(&mut self, person: Person) -> CoreResult<PersonId> {
        let id = person.id();
        if self.people.contains_key(&id) {
            return Err(CoreError::DuplicateId(id));
        }
        self.people.insert(id, person);
        Ok(id)
    }

    /// Add several people, skipping (and logging) the ones that are rejected.
    /// Returns how many were added.
    pub fn insert_many(&mut self, people: impl IntoIterator<Item = Person>) -> usize {
        let mut added = 0;
        for person in people {
            let name = person.name().to_string();
            match self.insert(person) {
                Ok(_) => added += 1,
                Err(e) => log::warn!("skipping {name}: {e}"),
            }
        }
        added
    }

    /// Look up a person by id.
    pub fn get(&self, id: PersonId) -> Option<&Person> {
        self.people.get(&id)
    }

    /// Number of people in the catalog.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Iterate over people in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    /// One past the highest id in use.
    pub fn next_id(&self) -> u32 {
        self.people
            .keys()
            .next_back()
            .map_or(1, |id| id.0.saturating_add(1))
    }

    /// Start a criteria query over this catalog.
    pub fn query(&self) -> QueryBuilder<'_> {
        QueryBuilder::new(self)
    }
}

impl PersonSource for Catalog {
    fn all_people(&self) -> CoreResult<Vec<Person>> {
        Ok(self.iter().cloned().collect())
    }
}
