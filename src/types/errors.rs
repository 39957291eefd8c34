use std::fmt;

// === ProviderError ===

/// Errors raised by a history provider while answering a query.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderError {
    /// The provider ran the query but it failed.
    QueryFailed(String),
    /// The provider's backing source could not be reached or opened.
    Unavailable(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::QueryFailed(msg) => write!(f, "History query failed: {}", msg),
            ProviderError::Unavailable(msg) => {
                write!(f, "History provider unavailable: {}", msg)
            }
        }
    }
}

impl std::error::Error for ProviderError {}

// === StoreError ===

/// Errors related to pin store persistence.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The store could not be opened or reached.
    Unavailable(String),
    /// Stored bytes could not be parsed as a pin set.
    Corrupt(String),
    /// Database operation failed.
    DatabaseError(String),
    /// Failed to serialize the pin set.
    SerializationError(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "Pin store unavailable: {}", msg),
            StoreError::Corrupt(msg) => write!(f, "Pin store corrupt: {}", msg),
            StoreError::DatabaseError(msg) => write!(f, "Pin store database error: {}", msg),
            StoreError::SerializationError(msg) => {
                write!(f, "Pin store serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for StoreError {}

// === RecordError ===

/// A visit record that cannot be turned into a resource.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordError {
    /// A required field was absent.
    MissingField(String),
    /// The record's URL could not be parsed.
    InvalidUrl(String),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::MissingField(field) => {
                write!(f, "Malformed visit record: missing {}", field)
            }
            RecordError::InvalidUrl(url) => {
                write!(f, "Malformed visit record: invalid url {}", url)
            }
        }
    }
}

impl std::error::Error for RecordError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
