//! Shared type definitions for the Clockface workspace.
//!
//! This crate owns the closed set of 24 half-hour clock face symbols and
//! the one error a caller can hit when turning text back into a symbol.
//! [`ClockSymbol`] flows downstream to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`symbol`] -- The [`ClockSymbol`] enumeration with its glyph, label,
//!   and slot tables
//! - [`error`] -- [`SymbolError`], raised for unrecognized glyphs

pub mod error;
pub mod symbol;

// Re-export all public types at crate root for convenience.
pub use error::SymbolError;
pub use symbol::{ClockSymbol, HALF_HOUR_SECONDS, SLOT_COUNT};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation for exported types.

    #[test]
    fn export_bindings() {
        // The files are written to the `bindings/` directory relative to
        // the crate root.
        use ts_rs::TS;

        let _ = crate::symbol::ClockSymbol::export_all();
    }
}
