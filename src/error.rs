use thiserror::Error;

use crate::{
    configuration::ConfigurationError, exit_codes::PivnetExitCode, format::FormattingError,
    pivnet::ApiError,
};

/// Error types that can occur during CLI command execution
#[derive(Debug, Error)]
pub enum CliError {
    /// Error when an unsupported or undefined subcommand is encountered
    #[error("Undefined or unsupported subcommand: {0}")]
    UnsupportedSubcommand(String),
    /// Error when a required command-line argument is missing
    #[error("Missing required argument: {0}")]
    MissingRequiredArgument(String),
    /// Error related to configuration loading
    #[error("Configuration error: {0}")]
    ConfigurationError(#[from] ConfigurationError),
    /// Error related to data formatting
    #[error("Formatting error: {0}")]
    FormattingError(#[from] FormattingError),
    #[error("{0}")]
    ApiError(#[from] ApiError),
}

impl CliError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> PivnetExitCode {
        match self {
            CliError::UnsupportedSubcommand(_) => PivnetExitCode::UsageError,
            CliError::MissingRequiredArgument(_) => PivnetExitCode::UsageError,
            CliError::ConfigurationError(_) => PivnetExitCode::ConfigError,
            CliError::FormattingError(_) => PivnetExitCode::DataError,
            CliError::ApiError(error) => match error {
                ApiError::NotFound { .. } => PivnetExitCode::NotFound,
                ApiError::UnexpectedStatus { .. } => PivnetExitCode::ApiError,
                ApiError::JsonError(_) => PivnetExitCode::DataError,
                ApiError::HttpError(_) => PivnetExitCode::NetworkError,
                ApiError::InvalidHost(_) => PivnetExitCode::UsageError,
            },
        }
    }
}
