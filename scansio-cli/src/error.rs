//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// Processing error from core
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_variants() {
        let error = CliError::FileNotFound("cicero.txt".to_string());
        assert_eq!(error.to_string(), "File not found: cicero.txt");

        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");

        let error = CliError::ConfigError("bad glyph".to_string());
        assert_eq!(error.to_string(), "Configuration error: bad glyph");

        let error = CliError::ProcessingError("scan failed".to_string());
        assert_eq!(error.to_string(), "Processing error: scan failed");
    }

    #[test]
    fn test_error_trait_implementation() {
        let error = CliError::FileNotFound("cicero.txt".to_string());
        let _: &dyn std::error::Error = &error;

        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("FileNotFound"));
    }

    #[test]
    fn test_cli_result_type_alias() {
        let failure: CliResult<String> = Err(anyhow::anyhow!("test error"));
        assert!(failure.is_err());
    }
}
