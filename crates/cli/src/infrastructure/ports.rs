//! Port traits for scenario storage, result publishing, and time.
//!
//! Use cases depend on these traits only; the file-backed adapters live in
//! [`super::file_store`] and [`super::clock`].

use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;
use tactica_domain::Scenario;
use tactica_shared::{Decoded, SchemaError};

// =============================================================================
// Errors
// =============================================================================

/// Storage errors, each carrying the file it concerns.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The file could not be read, written, or replaced.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not JSON.
    #[error("{} is not valid JSON: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file is JSON but not a scenario.
    #[error("{} is not a scenario: {source}", .path.display())]
    Schema {
        path: PathBuf,
        #[source]
        source: SchemaError,
    },

    /// Serializing a document for writing failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn parse(path: impl AsRef<Path>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn schema(path: impl AsRef<Path>, source: SchemaError) -> Self {
        Self::Schema {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// The file does not exist (as opposed to being unreadable or malformed).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

// =============================================================================
// Types
// =============================================================================

/// One scored choice, as handed to an external results collector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    pub title: String,
    /// Color of the chosen team
    pub selected: String,
    pub correct: bool,
    /// Text shown to the trainee
    pub message: String,
}

// =============================================================================
// Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait ScenarioRepo: Send + Sync {
    /// Read and decode a scenario, with whatever the decoder glossed over.
    fn load(&self, path: &Path) -> Result<Decoded, StoreError>;

    /// Encode and write a scenario. On failure the previous file is intact.
    fn save(&self, scenario: &Scenario, path: &Path) -> Result<(), StoreError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait ResultSink: Send + Sync {
    fn publish(&self, record: &ResultRecord, path: &Path) -> Result<(), StoreError>;
}

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    /// Local calendar date.
    fn today(&self) -> NaiveDate;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_distinguished() {
        let missing = StoreError::io("a.json", io::Error::from(io::ErrorKind::NotFound));
        let denied = StoreError::io("a.json", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(missing.is_not_found());
        assert!(!denied.is_not_found());
    }

    #[test]
    fn messages_name_the_file() {
        let err = StoreError::schema("drills/ford.json", SchemaError::missing("background"));
        assert_eq!(
            err.to_string(),
            "drills/ford.json is not a scenario: Missing required field: background"
        );
    }
}
