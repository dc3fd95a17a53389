//! Error types and handling for evfleet
//!
//! The fleet core is total and never fails; these errors cover the
//! surrounding layers: configuration, logging setup and console I/O.

use thiserror::Error;

/// Result type alias for evfleet operations
pub type Result<T> = std::result::Result<T, FleetError>;

/// Main error type for evfleet
#[derive(Debug, Error)]
pub enum FleetError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// File and console I/O errors
    #[error("I/O error: {message}")]
    Io { message: String },

    /// Validation errors
    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    /// Operator input that could not be interpreted
    #[error("Input error: {message}")]
    Input { message: String },
}

impl FleetError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new input error
    pub fn input<S: Into<String>>(message: S) -> Self {
        Self::Input {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for FleetError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

impl From<serde_yaml::Error> for FleetError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<serde_json::Error> for FleetError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = FleetError::config("test config error");
        assert!(matches!(err, FleetError::Config { .. }));

        let err = FleetError::input("9");
        assert!(matches!(err, FleetError::Input { .. }));

        let err = FleetError::validation("field", "test validation error");
        assert!(matches!(err, FleetError::Validation { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = FleetError::config("test error");
        assert_eq!(format!("{}", err), "Configuration error: test error");

        let err = FleetError::validation("thresholds.low_battery", "out of range");
        assert_eq!(
            format!("{}", err),
            "Validation error: thresholds.low_battery - out of range"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: FleetError = io.into();
        assert!(matches!(err, FleetError::Io { .. }));
        assert!(err.to_string().contains("missing"));
    }
}
