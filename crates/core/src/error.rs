//! Error types for scenario configuration.

/// Errors raised while deriving the scenario from the kernel command line.
///
/// Every variant is fatal to the run: without a scenario there is nothing
/// to test, so the controller fails fast with a FAIL verdict.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The command-line source could not be opened or read.
    #[error("cannot read kernel cmdline: {0}")]
    Unreadable(#[from] std::io::Error),

    /// No `ima_test_mode=` token on the command line.
    #[error("no ima_test_mode= on cmdline")]
    MissingKey,

    /// The mode token is not one of the known scenarios.
    #[error("unknown mode '{token}'")]
    UnknownMode {
        /// The offending raw token, kept for the diagnostic line.
        token: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_mode_message_names_token() {
        let err = ConfigError::UnknownMode {
            token: "enforce_sgined".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "unknown mode 'enforce_sgined'",
            "diagnostic should carry the offending token"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no /proc");
        let err: ConfigError = io_err.into();
        assert!(matches!(err, ConfigError::Unreadable(_)));
    }
}
