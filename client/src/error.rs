//! Error types for storage access and user-facing validation.
//!
//! Every failure in an event handler is one of these. Handlers log the error
//! and show its `Display` text in a blocking alert; nothing is retried.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failures talking to the browser key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("local storage rejected the write for {key}")]
    WriteRejected { key: String },
    #[error("stored data under {key} is malformed: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not encode data for {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Application-level failures surfaced to the user.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Please click on the deck plan to set the material location first.")]
    MissingPin,
    #[error("Please fill in the required field: {0}.")]
    MissingField(&'static str),
    #[error("Please select at least one hazardous material.")]
    NoHazardTags,
    #[error("Completion must be between 0 and 100 (got {0}).")]
    CompletionOutOfRange(i64),
    #[error("Please select a destination deck section.")]
    NoDestination,
    #[error("Deck section \"{0}\" is not known for this vessel.")]
    UnknownSection(String),
    #[error("Deck section \"{0}\" could not be loaded; reload the page before adding materials.")]
    SectionNotLoaded(String),
    #[error("Material entry {0} was not found in this section.")]
    EntryNotFound(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
