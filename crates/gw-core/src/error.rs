use crate::person::PersonId;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur when building people or working with a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A person field failed validation at construction time.
    #[error("invalid {field}: \"{value}\"")]
    InvalidField {
        /// Name of the rejected field.
        field: &'static str,
        /// The raw value that was rejected.
        value: String,
    },

    /// A person with the same id is already in the catalog.
    #[error("person already exists: id {0}")]
    DuplicateId(PersonId),

    /// The catalog file could not be read or written.
    #[error("catalog i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not valid JSON or contains invalid records.
    #[error("catalog format error: {0}")]
    Json(#[from] serde_json::Error),
}
