//! The 24 half-hour clock face symbols.
//!
//! Each [`ClockSymbol`] carries two fixed attributes:
//!
//! - a display glyph (one of the Unicode clock faces U+1F550..U+1F567),
//!   which is also the only accepted text form when parsing, and
//! - a slot index in `0..24`, counting half-hour steps after 12:00.
//!
//! The glyph, variant, and slot index form a bijection. Slot-to-symbol
//! lookups go through [`ClockSymbol::ALL`]; glyph-to-symbol lookups go
//! through an ordered table built once on first use.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::SymbolError;

/// Number of half-hour slots on a 12-hour clock face.
pub const SLOT_COUNT: usize = 24;

/// Length of one slot in seconds.
pub const HALF_HOUR_SECONDS: u32 = 1800;

/// Slot count as the index type, for modular arithmetic on slot indices.
const SLOT_COUNT_U8: u8 = 24;

/// Glyph-to-symbol lookup table, built from [`ClockSymbol::ALL`].
static BY_GLYPH: LazyLock<BTreeMap<&'static str, ClockSymbol>> = LazyLock::new(|| {
    ClockSymbol::ALL
        .iter()
        .map(|&symbol| (symbol.glyph(), symbol))
        .collect()
});

// ---------------------------------------------------------------------------
// ClockSymbol
// ---------------------------------------------------------------------------

/// One half-hour position on a 12-hour analog clock face.
///
/// Variants are declared in slot order, so the derived `Ord` sorts them
/// the way the hands move starting from 12:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[repr(u8)]
pub enum ClockSymbol {
    /// 12:00, slot 0.
    Twelve,
    /// 12:30, slot 1.
    TwelveThirty,
    /// 1:00, slot 2.
    One,
    /// 1:30, slot 3.
    OneThirty,
    /// 2:00, slot 4.
    Two,
    /// 2:30, slot 5.
    TwoThirty,
    /// 3:00, slot 6.
    Three,
    /// 3:30, slot 7.
    ThreeThirty,
    /// 4:00, slot 8.
    Four,
    /// 4:30, slot 9.
    FourThirty,
    /// 5:00, slot 10.
    Five,
    /// 5:30, slot 11.
    FiveThirty,
    /// 6:00, slot 12.
    Six,
    /// 6:30, slot 13.
    SixThirty,
    /// 7:00, slot 14.
    Seven,
    /// 7:30, slot 15.
    SevenThirty,
    /// 8:00, slot 16.
    Eight,
    /// 8:30, slot 17.
    EightThirty,
    /// 9:00, slot 18.
    Nine,
    /// 9:30, slot 19.
    NineThirty,
    /// 10:00, slot 20.
    Ten,
    /// 10:30, slot 21.
    TenThirty,
    /// 11:00, slot 22.
    Eleven,
    /// 11:30, slot 23.
    ElevenThirty,
}

impl ClockSymbol {
    /// Every symbol, indexed by slot.
    pub const ALL: [Self; SLOT_COUNT] = [
        Self::Twelve,
        Self::TwelveThirty,
        Self::One,
        Self::OneThirty,
        Self::Two,
        Self::TwoThirty,
        Self::Three,
        Self::ThreeThirty,
        Self::Four,
        Self::FourThirty,
        Self::Five,
        Self::FiveThirty,
        Self::Six,
        Self::SixThirty,
        Self::Seven,
        Self::SevenThirty,
        Self::Eight,
        Self::EightThirty,
        Self::Nine,
        Self::NineThirty,
        Self::Ten,
        Self::TenThirty,
        Self::Eleven,
        Self::ElevenThirty,
    ];

    /// Return the clock face glyph for this symbol.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Twelve => "\u{1F55B}",
            Self::TwelveThirty => "\u{1F567}",
            Self::One => "\u{1F550}",
            Self::OneThirty => "\u{1F55C}",
            Self::Two => "\u{1F551}",
            Self::TwoThirty => "\u{1F55D}",
            Self::Three => "\u{1F552}",
            Self::ThreeThirty => "\u{1F55E}",
            Self::Four => "\u{1F553}",
            Self::FourThirty => "\u{1F55F}",
            Self::Five => "\u{1F554}",
            Self::FiveThirty => "\u{1F560}",
            Self::Six => "\u{1F555}",
            Self::SixThirty => "\u{1F561}",
            Self::Seven => "\u{1F556}",
            Self::SevenThirty => "\u{1F562}",
            Self::Eight => "\u{1F557}",
            Self::EightThirty => "\u{1F563}",
            Self::Nine => "\u{1F558}",
            Self::NineThirty => "\u{1F564}",
            Self::Ten => "\u{1F559}",
            Self::TenThirty => "\u{1F565}",
            Self::Eleven => "\u{1F55A}",
            Self::ElevenThirty => "\u{1F566}",
        }
    }

    /// Return the plain-text clock reading, e.g. `"12:30"` or `"7:00"`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Twelve => "12:00",
            Self::TwelveThirty => "12:30",
            Self::One => "1:00",
            Self::OneThirty => "1:30",
            Self::Two => "2:00",
            Self::TwoThirty => "2:30",
            Self::Three => "3:00",
            Self::ThreeThirty => "3:30",
            Self::Four => "4:00",
            Self::FourThirty => "4:30",
            Self::Five => "5:00",
            Self::FiveThirty => "5:30",
            Self::Six => "6:00",
            Self::SixThirty => "6:30",
            Self::Seven => "7:00",
            Self::SevenThirty => "7:30",
            Self::Eight => "8:00",
            Self::EightThirty => "8:30",
            Self::Nine => "9:00",
            Self::NineThirty => "9:30",
            Self::Ten => "10:00",
            Self::TenThirty => "10:30",
            Self::Eleven => "11:00",
            Self::ElevenThirty => "11:30",
        }
    }

    /// Look up the symbol whose glyph equals `glyph` exactly.
    ///
    /// No trimming or normalization is applied: `" \u{1F55B}"` is not a
    /// match.
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        BY_GLYPH.get(glyph).copied()
    }

    /// Return the slot index (half-hour steps after 12:00), in `0..24`.
    pub const fn slot_index(self) -> u8 {
        self as u8
    }

    /// Return the symbol at `index`, or `None` if `index >= 24`.
    pub fn try_from_slot_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Return the symbol at `index`, wrapping around the dial.
    ///
    /// Callers are expected to pass an index already in `0..24`; larger
    /// values are reduced modulo 24 so the lookup stays total.
    pub fn from_slot_index(index: u8) -> Self {
        index
            .checked_rem(SLOT_COUNT_U8)
            .and_then(Self::try_from_slot_index)
            .unwrap_or(Self::Twelve)
    }

    /// Return the offset of this slot from the 12:00 slot, in seconds.
    ///
    /// Always a multiple of [`HALF_HOUR_SECONDS`] in `0..=41_400`.
    pub const fn offset_seconds(self) -> u32 {
        (self as u32).saturating_mul(HALF_HOUR_SECONDS)
    }
}

impl fmt::Display for ClockSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

impl FromStr for ClockSymbol {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_glyph(s).ok_or_else(|| SymbolError::unrecognized(s))
    }
}
