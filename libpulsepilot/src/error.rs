//! Error types for PulsePilot
//!
//! The session core itself is total: its operations substitute defensive
//! defaults instead of failing. Errors exist only at the ambient boundary
//! (configuration files, CLI input, the outbound CRM hook).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PulsePilotError>;

#[derive(Error, Debug)]
pub enum PulsePilotError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("CRM sync failed: {0}")]
    Crm(String),
}

impl PulsePilotError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PulsePilotError::InvalidInput(_) => 3,
            PulsePilotError::Config(_) => 1,
            PulsePilotError::Crm(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_invalid_input() {
        let error = PulsePilotError::InvalidInput("Empty topic".to_string());
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_config_error() {
        let error = PulsePilotError::Config(ConfigError::MissingField("defaults".to_string()));
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn test_error_display() {
        let error = PulsePilotError::InvalidInput("bad time".to_string());
        assert_eq!(error.to_string(), "Invalid input: bad time");
    }
}
