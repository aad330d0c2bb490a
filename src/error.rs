//! CLI error types and exit codes

use thiserror::Error;

/// Exit codes for the CLI
/// - 0: Success
/// - 1: General error
/// - 2: Authentication required
/// - 3: Network error
/// - 4: Validation error
/// - 5: Server error
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("No API key provided. Use --key, --key-file, or set DIRCLI_API_KEY.")]
    MissingApiKey,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Connection failed: {0}\n\nTroubleshooting:\n  - Check your internet connection\n  - Verify the API endpoint is correct\n  - Try again in a few moments")]
    ConnectionFailed(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::MissingApiKey => 2,
            CliError::Network(_) | CliError::ConnectionFailed(_) => 3,
            CliError::Validation(_) => 4,
            CliError::NotFound(_) | CliError::Conflict(_) => 4,
            CliError::Api { status, .. } => {
                if *status >= 500 {
                    5
                } else if *status == 401 || *status == 403 {
                    2
                } else {
                    4
                }
            }
            CliError::Config(_) => 1,
            CliError::Io(_) => 1,
        }
    }

    /// Print the error to stderr with appropriate formatting
    pub fn print(&self) {
        let use_color = std::env::var("NO_COLOR").is_err();

        if use_color {
            eprintln!("\x1b[31mError:\x1b[0m {}", self);
        } else {
            eprintln!("Error: {}", self);
        }

        // Print suggested action if available
        if let Some(suggestion) = self.suggestion() {
            if use_color {
                eprintln!("\n\x1b[33mSuggestion:\x1b[0m {}", suggestion);
            } else {
                eprintln!("\nSuggestion: {}", suggestion);
            }
        }
    }

    /// Get a suggested action for this error
    fn suggestion(&self) -> Option<&'static str> {
        match self {
            CliError::MissingApiKey => {
                Some("Generate an API key in the admin console and pass it with --key.")
            }
            CliError::ConnectionFailed(_) => Some("Check your network connection and try again."),
            CliError::Api { status, .. } if *status == 401 => {
                Some("The API key was rejected. Verify it has not been revoked.")
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CliError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            CliError::ConnectionFailed(e.to_string())
        } else if e.is_timeout() {
            CliError::Network("Request timed out".to_string())
        } else {
            CliError::Network(e.to_string())
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Config(format!("JSON error: {}", e))
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(e: serde_yaml::Error) -> Self {
        CliError::Config(format!("YAML error: {}", e))
    }
}

impl From<dialoguer::Error> for CliError {
    fn from(e: dialoguer::Error) -> Self {
        CliError::Io(format!("Dialog error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_missing_api_key() {
        assert_eq!(CliError::MissingApiKey.exit_code(), 2);
    }

    #[test]
    fn test_exit_code_network_error() {
        assert_eq!(CliError::Network("test".to_string()).exit_code(), 3);
    }

    #[test]
    fn test_exit_code_connection_failed() {
        assert_eq!(
            CliError::ConnectionFailed("test".to_string()).exit_code(),
            3
        );
    }

    #[test]
    fn test_exit_code_validation_error() {
        assert_eq!(CliError::Validation("test".to_string()).exit_code(), 4);
    }

    #[test]
    fn test_exit_code_not_found() {
        assert_eq!(CliError::NotFound("user dave".to_string()).exit_code(), 4);
    }

    #[test]
    fn test_exit_code_api_error_5xx() {
        assert_eq!(
            CliError::Api {
                status: 500,
                message: "test".to_string()
            }
            .exit_code(),
            5
        );
    }

    #[test]
    fn test_exit_code_api_error_401() {
        assert_eq!(
            CliError::Api {
                status: 401,
                message: "test".to_string()
            }
            .exit_code(),
            2
        );
    }

    #[test]
    fn test_exit_code_config_error() {
        assert_eq!(CliError::Config("bad file".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_error_display_missing_key() {
        let error = CliError::MissingApiKey;
        assert!(error.to_string().contains("DIRCLI_API_KEY"));
    }
}
