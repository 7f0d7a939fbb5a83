//! # Bug Tracker Error Types
//!
//! Every fallible report operation returns a [`BugTrackError`]. Variants carry
//! enough context (operation, path, raw input) to print a useful message to
//! the person at the terminal; nothing here is ever retried.
//!
//! ## Error Categories
//!
//! - **System Errors**: I/O failures while opening, writing or reading reports
//! - **Configuration Errors**: unreadable or malformed settings
//! - **Input Errors**: menu or status choices that match no option

use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification used for logging and hint selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorCategory {
    /// Input that matched none of the offered choices
    Input,
    /// Settings that could not be loaded
    Configuration,
    /// I/O and other environment failures
    System,
}

/// Result type for all report store operations.
pub type BugTrackResult<T> = Result<T, BugTrackError>;

#[derive(Debug, Error)]
pub enum BugTrackError {
    /// E_IO - A report file could not be opened, written or read
    #[error("I/O error in {operation}{}: {source}", display_path(.path))]
    Io {
        /// Operation that was being performed
        operation: String,
        /// Report path involved, when known
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    /// E_CONFIG - Settings could not be loaded
    #[error("Invalid configuration{}: {reason}", display_path(.path))]
    Config {
        path: Option<PathBuf>,
        reason: String,
    },

    /// E_INVALID_CHOICE - Input matched none of the numbered options
    #[error("Invalid {context} choice '{input}'")]
    InvalidChoice {
        /// Which prompt rejected the input ("menu", "status")
        context: &'static str,
        /// Raw line as typed
        input: String,
    },

    /// E_INPUT_CLOSED - The input stream ended while an answer was expected
    #[error("Input closed while waiting for {expected}")]
    InputClosed { expected: String },
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" for '{}'", p.display()),
        None => String::new(),
    }
}

impl BugTrackError {
    /// Builds an I/O error with an optional path and an operation name.
    pub fn io<P, S>(path: P, operation: S, source: std::io::Error) -> Self
    where
        P: Into<Option<PathBuf>>,
        S: Into<String>,
    {
        Self::Io {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    pub fn invalid_choice(context: &'static str, input: impl Into<String>) -> Self {
        Self::InvalidChoice {
            context,
            input: input.into(),
        }
    }

    /// Stable identifier for this failure mode.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "E_IO",
            Self::Config { .. } => "E_CONFIG",
            Self::InvalidChoice { .. } => "E_INVALID_CHOICE",
            Self::InputClosed { .. } => "E_INPUT_CLOSED",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Io { .. } => ErrorCategory::System,
            Self::Config { .. } => ErrorCategory::Configuration,
            Self::InvalidChoice { .. } | Self::InputClosed { .. } => ErrorCategory::Input,
        }
    }

    /// Short, actionable suggestions, most likely fix first.
    pub fn recovery_hints(&self) -> Vec<String> {
        match self {
            Self::Io { source, path, .. } => {
                let target = path
                    .as_ref()
                    .map(|p| format!("'{}'", p.display()))
                    .unwrap_or_else(|| "the report".to_string());
                match source.kind() {
                    std::io::ErrorKind::NotFound => vec![
                        format!("Check that {target} exists and the name is spelled correctly"),
                        "File a new bug first if this report was never created".to_string(),
                    ],
                    std::io::ErrorKind::PermissionDenied => vec![
                        format!("Check the permissions of {target} and its directory"),
                        "Choose a reports directory you can write to with --dir".to_string(),
                    ],
                    _ => vec![
                        format!("Verify that {target} is a regular, accessible file"),
                        "Check available disk space".to_string(),
                    ],
                }
            }
            Self::Config { .. } => vec![
                "Fix the TOML syntax of the configuration file".to_string(),
                "Remove the file or unset BUGTRACK_CONFIG to use defaults".to_string(),
            ],
            Self::InvalidChoice { .. } => {
                vec!["Enter one of the listed numbers and press enter".to_string()]
            }
            Self::InputClosed { .. } => {
                vec!["Run bugtrack from an interactive terminal or pipe a complete script".to_string()]
            }
        }
    }

    pub fn input_closed(expected: impl Into<String>) -> Self {
        Self::InputClosed {
            expected: expected.into(),
        }
    }

    /// True when the error came from a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn io_error_message_mentions_operation_and_path() {
        let err = BugTrackError::io(
            Some(PathBuf::from("bug1.txt")),
            "read_report",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        let msg = err.to_string();
        assert!(msg.contains("read_report"));
        assert!(msg.contains("bug1.txt"));
        assert!(msg.contains("No such file"));
        assert_eq!(err.error_code(), "E_IO");
        assert_eq!(err.category(), ErrorCategory::System);
        assert!(err.is_not_found());
    }

    #[test]
    fn io_error_without_path() {
        let err = BugTrackError::io(None, "flush", io::Error::other("disk full"));
        assert_eq!(err.to_string(), "I/O error in flush: disk full");
        assert!(!err.is_not_found());
    }

    #[test]
    fn hints_depend_on_io_kind() {
        let missing = BugTrackError::io(
            Some(PathBuf::from("x.txt")),
            "read_report",
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(missing.recovery_hints()[0].contains("exists"));

        let denied = BugTrackError::io(
            Some(PathBuf::from("x.txt")),
            "create_report",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(denied.recovery_hints()[0].contains("permissions"));
    }

    #[test]
    fn invalid_choice_is_an_input_error() {
        let err = BugTrackError::invalid_choice("status", "9");
        assert_eq!(err.to_string(), "Invalid status choice '9'");
        assert_eq!(err.error_code(), "E_INVALID_CHOICE");
        assert_eq!(err.category(), ErrorCategory::Input);
    }

    #[test]
    fn input_closed_names_the_prompt() {
        let err = BugTrackError::input_closed("the bug type");
        assert_eq!(err.to_string(), "Input closed while waiting for the bug type");
        assert_eq!(err.error_code(), "E_INPUT_CLOSED");
        assert_eq!(err.category(), ErrorCategory::Input);
    }
}
