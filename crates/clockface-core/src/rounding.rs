//! Rounding a time of day to the nearest half-hour clock face.
//!
//! The computation has three steps:
//!
//! 1. Combine hour and minute into a fractional hour in `[0, 24)`.
//! 2. Fold it into the comparison band `[1, 13)`: the hour after midnight
//!    moves up by 12 so it sits next to 11:xx and 12:xx, and everything
//!    after 13:00 moves down by 12.
//! 3. Walk [`BOUNDARIES`] in ascending order and take the first window
//!    whose upper bound is strictly greater than the folded value. A value
//!    on a boundary therefore belongs to the later window. Anything past
//!    the last bound (and NaN) lands on 12:00.
//!
//! The 12:00 window is the only discontiguous one: it takes both the tail
//! below 1.25 and everything from 12.75 upwards.

use chrono::{NaiveTime, Timelike};
use clockface_types::ClockSymbol;

/// Minutes in one hour, as the divisor for the fractional part.
const MINUTES_PER_HOUR: f64 = 60.0;

/// Width of the fold applied at either end of the day.
const FOLD_HOURS: f64 = 12.0;

/// Fractional hours below this value fold upwards.
const FOLD_LOWER: f64 = 1.0;

/// Fractional hours above this value fold downwards.
const FOLD_UPPER: f64 = 13.0;

/// Ordered window upper bounds and the symbol each window yields.
///
/// Bounds are exclusive and strictly ascending. A folded value at or above
/// the last bound falls through to [`ClockSymbol::Twelve`].
pub const BOUNDARIES: [(f64, ClockSymbol); 24] = [
    (1.25, ClockSymbol::Twelve),
    (1.75, ClockSymbol::TwelveThirty),
    (2.25, ClockSymbol::One),
    (2.75, ClockSymbol::OneThirty),
    (3.25, ClockSymbol::Two),
    (3.75, ClockSymbol::TwoThirty),
    (4.25, ClockSymbol::Three),
    (4.75, ClockSymbol::ThreeThirty),
    (5.25, ClockSymbol::Four),
    (5.75, ClockSymbol::FourThirty),
    (6.25, ClockSymbol::Five),
    (6.75, ClockSymbol::FiveThirty),
    (7.25, ClockSymbol::Six),
    (7.75, ClockSymbol::SixThirty),
    (8.25, ClockSymbol::Seven),
    (8.75, ClockSymbol::SevenThirty),
    (9.25, ClockSymbol::Eight),
    (9.75, ClockSymbol::EightThirty),
    (10.25, ClockSymbol::Nine),
    (10.75, ClockSymbol::NineThirty),
    (11.25, ClockSymbol::Ten),
    (11.75, ClockSymbol::TenThirty),
    (12.25, ClockSymbol::Eleven),
    (12.75, ClockSymbol::ElevenThirty),
];

/// Symbol for folded values past the last boundary.
const FALLTHROUGH: ClockSymbol = ClockSymbol::Twelve;

/// Combine an hour of day and a minute of hour into a fractional hour.
pub fn fractional_hour(hour: u32, minute: u32) -> f64 {
    f64::from(hour) + f64::from(minute) / MINUTES_PER_HOUR
}

/// Fold a fractional hour onto the `[1, 13)` comparison band.
///
/// Only used for comparison against [`BOUNDARIES`]; the result is not a
/// clock reading.
pub const fn fold_to_comparison_band(fractional_hour: f64) -> f64 {
    if fractional_hour < FOLD_LOWER {
        fractional_hour + FOLD_HOURS
    } else if fractional_hour > FOLD_UPPER {
        fractional_hour - FOLD_HOURS
    } else {
        fractional_hour
    }
}

/// Round a fractional hour of day to its clock face symbol.
///
/// Total over all `f64` inputs.
pub fn symbol_for_fractional_hour(fractional_hour: f64) -> ClockSymbol {
    let folded = fold_to_comparison_band(fractional_hour);
    BOUNDARIES
        .iter()
        .find(|&&(upper, _)| folded < upper)
        .map_or(FALLTHROUGH, |&(_, symbol)| symbol)
}

/// Round an `(hour, minute)` wall-clock reading to its clock face symbol.
pub fn symbol_for_hour_minute(hour: u32, minute: u32) -> ClockSymbol {
    symbol_for_fractional_hour(fractional_hour(hour, minute))
}

/// Round a wall-clock time to its clock face symbol.
///
/// Seconds and sub-second components are ignored.
pub fn symbol_for_time(time: NaiveTime) -> ClockSymbol {
    symbol_for_hour_minute(time.hour(), time.minute())
}
