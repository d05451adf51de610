//! Conversion between points in time and half-hour clock face symbols.
//!
//! This crate owns both directions of the mapping: rounding a time of day
//! to the nearest [`ClockSymbol`], and reconstructing a canonical instant
//! from a symbol. Everything here is pure and synchronous; the only input
//! that depends on the host is the calendar used to read hour and minute
//! off an instant, and that is injected through [`TimeResolver`].
//!
//! # Modules
//!
//! - [`rounding`] -- Fractional hour, 12-hour fold, and the ordered
//!   boundary table that picks a symbol.
//! - [`reconstruction`] -- Reference epoch and symbol-to-instant mapping.
//! - [`resolver`] -- [`TimeResolver`] trait and the [`ZoneSetting`] resolver.
//! - [`formatter`] -- [`ClockFormatter`], the four-entry-point facade.
//! - [`config`] -- Configuration loading from `clockface-config.yaml`.
//!
//! [`ClockSymbol`]: clockface_types::ClockSymbol
//! [`TimeResolver`]: resolver::TimeResolver
//! [`ZoneSetting`]: resolver::ZoneSetting
//! [`ClockFormatter`]: formatter::ClockFormatter

pub mod config;
pub mod formatter;
pub mod reconstruction;
pub mod resolver;
pub mod rounding;

pub use formatter::ClockFormatter;
pub use resolver::{ResolverError, TimeResolver, ZoneSetting};
