//! Error types for the itinerary library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all itinerary and routing operations.
#[derive(Error, Debug)]
pub enum ItineraryError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Store failures that do not originate from SQLite
    #[error("Storage error: {message}")]
    Storage { message: String },
    /// Itinerary not found for the given ID
    #[error("Itinerary with ID {id} not found")]
    ItineraryNotFound { id: u64 },
    /// Destination not found for the given ID
    #[error("Destination with ID {id} not found")]
    DestinationNotFound { id: u64 },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Proposed order would put two same-named destinations next to each other
    #[error("Two destinations named '{name}' cannot be adjacent in the itinerary")]
    AdjacentDuplicateName { name: String },
    /// A store failure while re-sequencing positions after a delete. The
    /// itinerary's positions can no longer be trusted.
    #[error("Failed to re-sequence itinerary {itinerary_id}; positions may be inconsistent: {source}")]
    RenormalizationFailed {
        itinerary_id: u64,
        #[source]
        source: Box<ItineraryError>,
    },
    /// Positions read back from the store are not exactly 1..=N
    #[error("Itinerary {itinerary_id} has a corrupt position sequence: {positions:?}")]
    CorruptSequence {
        itinerary_id: u64,
        positions: Vec<u32>,
    },
    /// Routing provider is missing its credential or is otherwise unusable
    #[error("Routing configuration error: {message}")]
    RoutingConfiguration { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ItineraryError {
    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.to_string(),
            source,
        }
    }

    /// Creates an input validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Bad input from the caller. The operation was a no-op.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::AdjacentDuplicateName { .. }
        )
    }

    /// The caller referenced an itinerary or destination that does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ItineraryNotFound { .. } | Self::DestinationNotFound { .. }
        )
    }

    /// Errors that leave an itinerary unusable or abort routing entirely.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::RenormalizationFailed { .. }
                | Self::CorruptSequence { .. }
                | Self::RoutingConfiguration { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| ItineraryError::database_error(message, e))
    }
}

/// Result type alias for itinerary operations
pub type Result<T> = std::result::Result<T, ItineraryError>;
