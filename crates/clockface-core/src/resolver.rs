//! Injected calendar capability: reading a wall-clock time off an instant.
//!
//! Rounding only needs an hour and a minute. Which hour and minute an
//! instant carries depends on the time zone the host wants to display,
//! so that decision sits behind [`TimeResolver`] instead of being fixed in
//! the formatter.
//!
//! Every `chrono` time zone (`Utc`, `FixedOffset`, `Local`, ...) is a
//! resolver. [`ZoneSetting`] is the configurable one the CLI uses.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, NaiveTime, TimeZone, Utc};

/// Errors that can occur when building a resolver from configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolverError {
    /// The zone string was not `utc`, `local`, or a `+HH:MM` offset.
    #[error("invalid zone '{value}': expected \"utc\", \"local\", or an offset like \"+05:30\"")]
    InvalidZone {
        /// The rejected zone string.
        value: String,
    },
}

/// Resolves an absolute instant into the wall-clock time to round.
pub trait TimeResolver: Send + Sync {
    /// Return the time of day `instant` shows in this resolver's zone.
    fn wall_clock(&self, instant: &DateTime<Utc>) -> NaiveTime;
}

impl<Tz> TimeResolver for Tz
where
    Tz: TimeZone + Send + Sync,
    Tz::Offset: Send + Sync,
{
    fn wall_clock(&self, instant: &DateTime<Utc>) -> NaiveTime {
        instant.with_timezone(self).time()
    }
}

/// A configurable choice of display zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoneSetting {
    /// Coordinated Universal Time.
    #[default]
    Utc,
    /// Whatever zone the host reports.
    Local,
    /// A fixed offset from UTC.
    Fixed(FixedOffset),
}

impl TimeResolver for ZoneSetting {
    fn wall_clock(&self, instant: &DateTime<Utc>) -> NaiveTime {
        match self {
            Self::Utc => Utc.wall_clock(instant),
            Self::Local => Local.wall_clock(instant),
            Self::Fixed(offset) => offset.wall_clock(instant),
        }
    }
}

impl FromStr for ZoneSetting {
    type Err = ResolverError;

    /// Accepts `utc`, `z`, `local` (case-insensitive) or a `+HH:MM` offset.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "utc" | "z" => Ok(Self::Utc),
            "local" => Ok(Self::Local),
            _ => trimmed
                .parse::<FixedOffset>()
                .map(Self::Fixed)
                .map_err(|source| {
                    tracing::debug!(value = s, error = %source, "rejected zone setting");
                    ResolverError::InvalidZone {
                        value: s.to_owned(),
                    }
                }),
        }
    }
}

impl fmt::Display for ZoneSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utc => f.write_str("utc"),
            Self::Local => f.write_str("local"),
            Self::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}
