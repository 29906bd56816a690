use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodeaidError {
    #[error("Missing required argument: --{name}")]
    MissingArgument { name: String },

    #[error("Goal '{goal}' is not recognized")]
    UnknownGoal { goal: String },

    #[error("Goal '{goal}' requires a target language (--target)")]
    MissingTarget { goal: String },

    #[error("Source file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("Source file could not be read: {}: {}", .path.display(), .source)]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("API credential missing: environment variable {var} is not set")]
    AuthenticationMissing { var: String },

    #[error("Model request failed: {message}")]
    RequestFailed { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl CodeaidError {
    /// Errors caused by how the tool was invoked; the driver follows these
    /// with the usage text.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            CodeaidError::MissingArgument { .. }
                | CodeaidError::UnknownGoal { .. }
                | CodeaidError::MissingTarget { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CodeaidError::FileUnreadable { path, .. } => {
                format!("Could not read source file {}", path.display())
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CodeaidError::MissingArgument { .. } => "Pass both --goal and --filename",
            CodeaidError::UnknownGoal { .. } => "Run with --list-goals to see the available goals",
            CodeaidError::MissingTarget { .. } => {
                "Name the output language, for example --target Go"
            }
            CodeaidError::FileNotFound { .. } => "Check the path given to --filename",
            CodeaidError::FileUnreadable { .. } => {
                "Make sure the file is readable and contains UTF-8 text"
            }
            CodeaidError::AuthenticationMissing { .. } => {
                "Export your API key in the named environment variable"
            }
            CodeaidError::RequestFailed { .. } => {
                "Check network connectivity, the API key and the --api-base endpoint"
            }
            CodeaidError::IoError(_) => "Check that standard output is writable",
            CodeaidError::ConfigError { .. } | CodeaidError::InvalidConfigValue { .. } => {
                "Review the settings file and command-line flags"
            }
        }
    }
}

impl From<reqwest::Error> for CodeaidError {
    fn from(err: reqwest::Error) -> Self {
        CodeaidError::RequestFailed {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CodeaidError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_errors() {
        assert!(CodeaidError::UnknownGoal { goal: "bogus".into() }.is_usage_error());
        assert!(CodeaidError::MissingTarget { goal: "translate".into() }.is_usage_error());
        assert!(!CodeaidError::AuthenticationMissing { var: "OPENAI_KEY".into() }.is_usage_error());
    }

    #[test]
    fn test_authentication_message_names_variable() {
        let err = CodeaidError::AuthenticationMissing {
            var: "OPENAI_KEY".to_string(),
        };
        assert!(err.user_friendly_message().contains("OPENAI_KEY"));
    }

    #[test]
    fn test_request_failed_message_is_display_text() {
        let err = CodeaidError::RequestFailed {
            message: "API returned 500 Internal Server Error".to_string(),
        };
        assert_eq!(err.user_friendly_message(), err.to_string());
        assert_eq!(err.user_friendly_message().matches("failed").count(), 1);
    }
}
