//! The formatter facade: four conversion entry points over one resolver.
//!
//! [`ClockFormatter`] pairs the pure rounding and reconstruction functions
//! with a [`TimeResolver`] that decides how an instant is read as a
//! wall-clock time. It holds no other state, so a single formatter can be
//! shared freely across threads.
//!
//! | Entry point | Direction | Failure |
//! |---|---|---|
//! | [`format`](ClockFormatter::format) | instant -> glyph | never |
//! | [`parse`](ClockFormatter::parse) | glyph -> instant | [`SymbolError`] |
//! | [`symbol_for`](ClockFormatter::symbol_for) | instant -> symbol | never |
//! | [`time_for`](ClockFormatter::time_for) | symbol -> instant | never |
//!
//! [`format_value`](ClockFormatter::format_value) is the permissive variant
//! of `format` for call sites holding an arbitrary value: anything that is
//! not a recognized time type produces `None`.

use std::any::Any;
use std::time::SystemTime;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, NaiveTime, Utc};
use clockface_types::{ClockSymbol, SymbolError};
use tracing::{debug, trace};

use crate::reconstruction::time_for_symbol;
use crate::resolver::TimeResolver;
use crate::rounding::symbol_for_time;

/// Converts between instants and clock face glyphs.
///
/// The resolver type defaults to [`Utc`].
#[derive(Debug, Clone, Default)]
pub struct ClockFormatter<R = Utc> {
    /// Reads hour and minute off an instant.
    resolver: R,
}

impl ClockFormatter<Utc> {
    /// Create a formatter that reads instants in UTC.
    pub const fn new() -> Self {
        Self { resolver: Utc }
    }
}

impl<R: TimeResolver> ClockFormatter<R> {
    /// Create a formatter with an explicit resolver.
    pub const fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }

    /// Return the resolver in use.
    pub const fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Replace the resolver.
    pub fn set_resolver(&mut self, resolver: R) {
        self.resolver = resolver;
    }

    /// Round an instant to its clock face symbol.
    pub fn symbol_for(&self, instant: &DateTime<Utc>) -> ClockSymbol {
        let wall_clock = self.resolver.wall_clock(instant);
        let symbol = symbol_for_time(wall_clock);
        trace!(%instant, %wall_clock, symbol = symbol.label(), "rounded instant");
        symbol
    }

    /// Return the canonical instant for a symbol.
    #[allow(clippy::unused_self)]
    pub fn time_for(&self, symbol: ClockSymbol) -> DateTime<Utc> {
        time_for_symbol(symbol)
    }

    /// Round an instant and return the glyph of the resulting symbol.
    pub fn format(&self, instant: &DateTime<Utc>) -> String {
        self.symbol_for(instant).glyph().to_owned()
    }

    /// Format any value that carries a time, or return `None`.
    ///
    /// Absolute instants (`DateTime` in any of the `chrono` zones handled
    /// here, and [`SystemTime`]) go through the resolver. Naive values are
    /// taken as wall-clock readings that are already resolved.
    pub fn format_value(&self, value: &dyn Any) -> Option<String> {
        let symbol = if let Some(instant) = value.downcast_ref::<DateTime<Utc>>() {
            self.symbol_for(instant)
        } else if let Some(instant) = value.downcast_ref::<DateTime<FixedOffset>>() {
            self.symbol_for(&instant.with_timezone(&Utc))
        } else if let Some(instant) = value.downcast_ref::<DateTime<Local>>() {
            self.symbol_for(&instant.with_timezone(&Utc))
        } else if let Some(time) = value.downcast_ref::<SystemTime>() {
            self.symbol_for(&DateTime::<Utc>::from(*time))
        } else if let Some(time) = value.downcast_ref::<NaiveTime>() {
            symbol_for_time(*time)
        } else if let Some(datetime) = value.downcast_ref::<NaiveDateTime>() {
            symbol_for_time(datetime.time())
        } else {
            trace!("value is not a time, nothing to format");
            return None;
        };
        Some(symbol.glyph().to_owned())
    }

    /// Parse a clock face glyph into its canonical instant.
    ///
    /// The glyph must match one of the 24 clock faces exactly.
    #[allow(clippy::unused_self)]
    pub fn parse(&self, glyph: &str) -> Result<DateTime<Utc>, SymbolError> {
        let Some(symbol) = ClockSymbol::from_glyph(glyph) else {
            debug!(input = glyph, "rejected unrecognized clock face glyph");
            return Err(SymbolError::unrecognized(glyph));
        };
        Ok(time_for_symbol(symbol))
    }

    /// Parse a clock face glyph, discarding the error.
    pub fn parse_lenient(&self, glyph: &str) -> Option<DateTime<Utc>> {
        self.parse(glyph).ok()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::resolver::ZoneSetting;

    fn utc(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2016, 8, 21, h, m, 0).unwrap()
    }

    #[test]
    fn format_uses_glyph() {
        let formatter = ClockFormatter::new();
        assert_eq!(formatter.format(&utc(7, 5)), "🕕");
        assert_eq!(formatter.format(&utc(7, 20)), "🕡");
    }

    #[test]
    fn resolver_changes_reading() {
        let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
        let formatter = ClockFormatter::with_resolver(plus_two);
        // 05:00 UTC reads as 07:00.
        assert_eq!(formatter.symbol_for(&utc(5, 0)), ClockSymbol::Six);
    }

    #[test]
    fn set_resolver_replaces_zone() {
        let mut formatter = ClockFormatter::with_resolver(ZoneSetting::Utc);
        assert_eq!(formatter.symbol_for(&utc(4, 0)), ClockSymbol::Three);
        formatter.set_resolver("+01:00".parse().unwrap());
        assert_eq!(formatter.symbol_for(&utc(4, 0)), ClockSymbol::Four);
        assert_eq!(formatter.resolver().to_string(), "+01:00");
    }

    #[test]
    fn parse_rejects_unknown_text() {
        let formatter = ClockFormatter::new();
        let err = formatter.parse("not-an-emoji").unwrap_err();
        assert_eq!(err.to_string(), "Argument is not a valid clock face emoji.");
        assert!(formatter.parse_lenient("not-an-emoji").is_none());
    }

    #[test]
    fn parse_returns_canonical_instant() {
        let formatter = ClockFormatter::new();
        let instant = formatter.parse("🕧").unwrap();
        assert_eq!(instant, formatter.time_for(ClockSymbol::TwelveThirty));
    }

    #[test]
    fn format_value_accepts_time_types() {
        let formatter = ClockFormatter::new();
        let instant = utc(9, 40);
        let expected = Some("🕣".to_owned());

        assert_eq!(formatter.format_value(&instant), expected);
        assert_eq!(
            formatter.format_value(&instant.with_timezone(&FixedOffset::east_opt(0).unwrap())),
            expected
        );
        assert_eq!(formatter.format_value(&SystemTime::from(instant)), expected);
        assert_eq!(formatter.format_value(&instant.naive_utc()), expected);
        assert_eq!(formatter.format_value(&instant.time()), expected);
    }

    #[test]
    fn format_value_reads_local_instants_through_resolver() {
        // The local offset is dropped; the formatter's UTC resolver decides.
        let formatter = ClockFormatter::new();
        let local = utc(9, 40).with_timezone(&Local);
        assert_eq!(formatter.format_value(&local), Some("🕣".to_owned()));
    }

    #[test]
    fn format_value_ignores_other_types() {
        let formatter = ClockFormatter::new();
        assert_eq!(formatter.format_value(&42_u32), None);
        assert_eq!(formatter.format_value(&"🕛"), None);
        assert_eq!(formatter.format_value(&ClockSymbol::Twelve), None);
    }
}
