//! Error types for the `clockface` binary.
//!
//! [`CliError`] wraps every failure mode a command can hit so `run` can
//! propagate with `?` and `main` can print one message.

/// Top-level error for the `clockface` binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: clockface_core::config::ConfigError,
    },

    /// The `--zone` argument or configured zone is invalid.
    #[error("{source}")]
    Zone {
        /// The underlying resolver error.
        #[from]
        source: clockface_core::ResolverError,
    },

    /// The glyph passed to `parse` is not a clock face.
    #[error("{source}")]
    Symbol {
        /// The underlying symbol error.
        #[from]
        source: clockface_types::SymbolError,
    },

    /// The reading passed to `at` is not an `HH:MM` time.
    #[error("invalid time '{value}': expected HH:MM ({source})")]
    Time {
        /// The rejected argument.
        value: String,
        /// The underlying parse error.
        source: chrono::ParseError,
    },
}
