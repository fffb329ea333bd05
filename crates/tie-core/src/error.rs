//! Error types for the TIE domain crates.

use thiserror::Error;

/// A shared error type for the TIE crates.
///
/// Domain construction only ever fails with `InvalidEnumValue`; the remaining
/// variants are produced by the infrastructure layer when reading question
/// definitions and configuration from disk.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TieError {
    /// A plain record carried a tag outside the closed set for its kind.
    #[error("Invalid {kind} type: {value}")]
    InvalidEnumValue { kind: &'static str, value: String },

    /// A conversation log entry could not be rebuilt.
    #[error("Invalid conversation log entry at index {index}: {source}")]
    InvalidLogEntry {
        index: usize,
        #[source]
        source: Box<TieError>,
    },

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TieError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an InvalidEnumValue error
    pub fn invalid_enum_value(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidEnumValue {
            kind,
            value: value.into(),
        }
    }

    /// Wraps an error raised while rebuilding entry `index` of a log
    pub fn invalid_log_entry(index: usize, source: TieError) -> Self {
        Self::InvalidLogEntry {
            index,
            source: Box::new(source),
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an InvalidEnumValue error, directly or inside a log entry
    pub fn is_invalid_enum_value(&self) -> bool {
        match self {
            Self::InvalidEnumValue { .. } => true,
            Self::InvalidLogEntry { source, .. } => source.is_invalid_enum_value(),
            _ => false,
        }
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for TieError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for TieError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for TieError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for TieError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, TieError>`.
pub type Result<T> = std::result::Result<T, TieError>;
