use std::fmt;

// === MirrorError ===

/// Errors related to the durable session mirror.
#[derive(Debug)]
pub enum MirrorError {
    /// The underlying store is unavailable (disabled storage, quota, lost connection).
    Unavailable(String),
    /// An I/O or database operation failed.
    Io(String),
    /// Failed to serialize or deserialize mirrored data.
    SerializationError(String),
}

impl fmt::Display for MirrorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MirrorError::Unavailable(msg) => write!(f, "Session mirror unavailable: {}", msg),
            MirrorError::Io(msg) => write!(f, "Session mirror I/O error: {}", msg),
            MirrorError::SerializationError(msg) => {
                write!(f, "Session mirror serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for MirrorError {}

// === ConfigError ===

/// Errors related to engine configuration loading and saving.
#[derive(Debug)]
pub enum ConfigError {
    /// An I/O error occurred while reading or writing the config file.
    IoError(String),
    /// Failed to serialize or deserialize the configuration.
    SerializationError(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "Config I/O error: {}", msg),
            ConfigError::SerializationError(msg) => {
                write!(f, "Config serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
