//! Core types for Guess Who: people, the predicates that classify them, and
//! the catalog record store the game draws its candidates from.
//!
//! The catalog is a plain in-memory store that can be saved to and loaded
//! from a JSON file. Game logic lives in `gw-engine` and only sees people
//! through the [`PersonSource`] trait.

/// In-memory record store keyed by person id.
pub mod catalog;
/// Error types used throughout the crate.
pub mod error;
/// The person value type and its normalized fields.
pub mod person;
/// Pure classifications of a person.
pub mod predicate;
/// Query builder for filtering a catalog by simple criteria.
pub mod query;
/// The built-in sample catalog.
pub mod sample;

/// Re-export the record store types.
pub use catalog::{Catalog, PersonSource};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export person types.
pub use person::{Gender, Industry, Person, PersonId, PersonRecord};
/// Re-export the named predicate type.
pub use predicate::Attribute;
