//! Error types for the `clockface-types` crate.

/// Errors raised when text cannot be mapped onto a [`ClockSymbol`].
///
/// This is the only failure a caller of the conversion facade can see.
/// Rounding a time and reconstructing a time from a symbol are total.
///
/// [`ClockSymbol`]: crate::ClockSymbol
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SymbolError {
    /// The input did not exactly match any of the 24 clock face glyphs.
    #[error("Argument is not a valid clock face emoji.")]
    Unrecognized {
        /// The rejected input, kept verbatim for logging.
        input: String,
    },
}

impl SymbolError {
    /// Build a [`SymbolError::Unrecognized`] from the rejected text.
    pub fn unrecognized(input: &str) -> Self {
        Self::Unrecognized {
            input: input.to_owned(),
        }
    }

    /// Return the rejected input.
    pub fn input(&self) -> &str {
        match self {
            Self::Unrecognized { input } => input,
        }
    }
}
