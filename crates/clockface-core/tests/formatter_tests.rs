//! End-to-end tests for the `clockface-core` formatter facade.
//!
//! These exercise the public surface only: rounding through a resolver,
//! reconstruction, and the glyph round trips in both directions.

// Integration tests use unwrap extensively for clarity -- panicking on
// failure is the correct behavior in test code.
#![allow(clippy::unwrap_used, clippy::float_cmp)]

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use clockface_core::reconstruction::{offset_from_epoch, reference_epoch};
use clockface_core::rounding::{BOUNDARIES, symbol_for_fractional_hour, symbol_for_hour_minute};
use clockface_core::{ClockFormatter, ZoneSetting};
use clockface_types::{ClockSymbol, SymbolError};

// =============================================================================
// Round trips
// =============================================================================

#[test]
fn every_glyph_survives_parse_then_format() {
    let formatter = ClockFormatter::new();
    for symbol in ClockSymbol::ALL {
        let glyph = symbol.glyph();
        let instant = formatter.parse(glyph).unwrap();
        assert_eq!(formatter.format(&instant), glyph, "{}", symbol.label());
    }
}

#[test]
fn every_slot_survives_reconstruction_then_rounding() {
    let formatter = ClockFormatter::new();
    for index in 0..24_u8 {
        let symbol = ClockSymbol::from_slot_index(index);
        let instant = formatter.time_for(symbol);
        assert_eq!(formatter.symbol_for(&instant).slot_index(), index);
    }
}

#[test]
fn zone_setting_resolver_round_trips_in_utc() {
    let formatter = ClockFormatter::with_resolver(ZoneSetting::Utc);
    for symbol in ClockSymbol::ALL {
        let instant = formatter.parse(symbol.glyph()).unwrap();
        assert_eq!(formatter.symbol_for(&instant), symbol);
    }
}

// =============================================================================
// Reconstruction
// =============================================================================

#[test]
fn twelve_thirty_is_epoch_plus_one_half_hour() {
    let formatter = ClockFormatter::new();
    let instant = formatter.time_for(ClockSymbol::from_slot_index(1));
    assert_eq!(offset_from_epoch(&instant), 1800);
    assert_eq!(instant.timestamp() - reference_epoch().timestamp(), 1800);
}

#[test]
fn parsed_offsets_stay_on_the_dial() {
    let formatter = ClockFormatter::new();
    for symbol in ClockSymbol::ALL {
        let offset = offset_from_epoch(&formatter.parse(symbol.glyph()).unwrap());
        assert!((0..=41_400).contains(&offset));
        assert_eq!(offset % 1800, 0);
    }
}

// =============================================================================
// Rounding through the facade
// =============================================================================

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2016, 8, 21, hour, minute, 0).unwrap()
}

#[test]
fn worked_examples() {
    let formatter = ClockFormatter::new();
    assert_eq!(formatter.symbol_for(&at(0, 0)), ClockSymbol::Eleven);
    assert_eq!(formatter.symbol_for(&at(12, 0)), ClockSymbol::Eleven);
    assert_eq!(formatter.symbol_for(&at(0, 45)), ClockSymbol::Twelve);
    assert_eq!(formatter.format(&at(12, 0)), "🕚");
    assert_eq!(formatter.format(&at(0, 45)), "🕛");
}

#[test]
fn boundary_values_belong_to_later_window() {
    for (index, &(upper, own)) in (0_u8..).zip(BOUNDARIES.iter()) {
        let next = ClockSymbol::from_slot_index(index + 1);
        assert_eq!(symbol_for_fractional_hour(upper), next);
        assert_eq!(symbol_for_fractional_hour(upper - 1e-6), own);
    }
}

#[test]
fn quarter_hours_land_on_boundaries() {
    // 2:15 is exactly the 2.25 bound, so it rounds to the window above.
    assert_eq!(symbol_for_hour_minute(2, 14), ClockSymbol::One);
    assert_eq!(symbol_for_hour_minute(2, 15), ClockSymbol::OneThirty);
    assert_eq!(symbol_for_hour_minute(14, 15), ClockSymbol::OneThirty);
}

#[test]
fn resolver_offset_moves_the_hand() {
    let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
    let formatter = ClockFormatter::with_resolver(tokyo);
    // 22:00 UTC is 07:00 the next morning in UTC+9.
    assert_eq!(formatter.symbol_for(&at(22, 0)), ClockSymbol::Six);
}

// =============================================================================
// Errors and permissive entry points
// =============================================================================

#[test]
fn unrecognized_glyph_is_reported() {
    let formatter = ClockFormatter::new();
    let err = formatter.parse("not-an-emoji").unwrap_err();
    assert!(matches!(err, SymbolError::Unrecognized { ref input } if input == "not-an-emoji"));
    assert_eq!(err.to_string(), "Argument is not a valid clock face emoji.");
}

#[test]
fn non_time_values_format_to_nothing() {
    let formatter = ClockFormatter::new();
    assert!(formatter.format_value(&String::from("12:00")).is_none());
    assert!(formatter.format_value(&1.5_f64).is_none());
    assert_eq!(formatter.format_value(&at(3, 0)), Some("🕑".to_owned()));
}

#[test]
fn formatter_is_shareable_across_threads() {
    let formatter = std::sync::Arc::new(ClockFormatter::new());
    let handles: Vec<_> = (0..4_u32)
        .map(|hour| {
            let formatter = std::sync::Arc::clone(&formatter);
            std::thread::spawn(move || formatter.symbol_for(&at(hour + 2, 0)))
        })
        .collect();
    let symbols: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        symbols,
        vec![
            ClockSymbol::One,
            ClockSymbol::Two,
            ClockSymbol::Three,
            ClockSymbol::Four
        ]
    );
}
