//! Reconstructing a canonical instant from a clock face symbol.
//!
//! Every symbol maps to `reference_epoch() + slot_index * 1800s`. The
//! reference epoch is 1970-01-01T01:00:00Z. Under a UTC resolver that
//! instant reads as 1:00, which the rounding table files under 12:00, and
//! each later slot lands on the reading the table assigns to its symbol.
//! Reconstructed instants therefore round back to the symbol they came
//! from.

use chrono::{DateTime, TimeDelta, Utc};
use clockface_types::ClockSymbol;

/// Seconds between the Unix epoch and the reference epoch.
pub const REFERENCE_EPOCH_SECONDS: i64 = 3600;

/// Return the instant that slot 0 ([`ClockSymbol::Twelve`]) maps to.
pub fn reference_epoch() -> DateTime<Utc> {
    DateTime::from_timestamp(REFERENCE_EPOCH_SECONDS, 0).unwrap_or_default()
}

/// Return the canonical instant for a symbol.
pub fn time_for_symbol(symbol: ClockSymbol) -> DateTime<Utc> {
    let epoch = reference_epoch();
    let offset = TimeDelta::seconds(i64::from(symbol.offset_seconds()));
    // At most 41_400s past a 1970 instant, well inside chrono's range.
    epoch.checked_add_signed(offset).unwrap_or(epoch)
}

/// Return the whole seconds between the reference epoch and `instant`.
///
/// Negative for instants before the reference epoch.
pub fn offset_from_epoch(instant: &DateTime<Utc>) -> i64 {
    instant.signed_duration_since(reference_epoch()).num_seconds()
}
