use thiserror::Error;
use tracing::{error, warn};

/// Error severity for logging and host diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,     // informational
    Warning,  // recoverable
    Error,    // operation failed
}

/// Domain-specific errors for the palette host
#[derive(Error, Debug)]
pub enum HostError {
    #[error("Failed to parse protocol request: {0}")]
    ProtocolParse(#[from] serde_json::Error),

    #[error("Theme loading failed for '{path}': {source}")]
    ThemeLoad {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Clipboard operation failed: {0}")]
    Clipboard(String),
}

impl HostError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ProtocolParse(_) => ErrorSeverity::Warning,
            Self::ThemeLoad { .. } => ErrorSeverity::Warning,
            Self::Config(_) => ErrorSeverity::Warning,
            Self::Clipboard(_) => ErrorSeverity::Error,
        }
    }
}

pub type Result<T> = std::result::Result<T, HostError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the extension doesn't need to know.
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?err,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?err,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_error_is_error_severity() {
        let err = HostError::Clipboard("denied".to_string());
        assert_eq!(err.severity(), ErrorSeverity::Error);
    }

    #[test]
    fn test_protocol_parse_from_serde_error() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{{{").unwrap_err();
        let err: HostError = serde_err.into();
        assert!(matches!(err, HostError::ProtocolParse(_)));
        assert_eq!(err.severity(), ErrorSeverity::Warning);
        assert!(err.to_string().starts_with("Failed to parse protocol request"));
    }

    #[test]
    fn test_theme_load_error_carries_path() {
        let err = HostError::ThemeLoad {
            path: "/tmp/theme.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::Other, "is a directory"),
        };
        assert!(err.to_string().contains("/tmp/theme.json"));
        assert_eq!(err.severity(), ErrorSeverity::Warning);
    }

    #[test]
    fn test_config_error_is_warning_severity() {
        let err = HostError::Config("bad field".to_string());
        assert_eq!(err.severity(), ErrorSeverity::Warning);
    }

    #[test]
    fn test_log_err_returns_value_on_ok() {
        let result: std::result::Result<i32, String> = Ok(7);
        assert_eq!(result.log_err(), Some(7));
    }

    #[test]
    fn test_warn_on_err_returns_none_on_err() {
        let result: std::result::Result<i32, String> = Err("nope".to_string());
        assert_eq!(result.warn_on_err(), None);
    }
}
