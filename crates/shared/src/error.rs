//! Schema errors raised while decoding a scenario document.

use thiserror::Error;

/// The document does not have the shape of a scenario.
///
/// `path` locates the offending field, e.g. `teams[1].squads[0].move_2.x`.
/// The document root is `$`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A required field is absent (or null)
    #[error("Missing required field: {path}")]
    MissingField { path: String },

    /// A field is present but holds the wrong kind of value
    #[error("Field {path} must be {expected}")]
    WrongShape {
        path: String,
        expected: &'static str,
    },
}

impl SchemaError {
    pub fn missing(path: impl Into<String>) -> Self {
        Self::MissingField { path: path.into() }
    }

    pub fn wrong_shape(path: impl Into<String>, expected: &'static str) -> Self {
        Self::WrongShape {
            path: path.into(),
            expected,
        }
    }

    /// Location of the offending field.
    pub fn path(&self) -> &str {
        match self {
            Self::MissingField { path } | Self::WrongShape { path, .. } => path,
        }
    }
}

/// A gap-policy name that is neither `stop` nor `skip`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown gap policy: {0} (expected `stop` or `skip`)")]
pub struct UnknownGapPolicy(pub String);
