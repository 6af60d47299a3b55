//! Error types for Hebrew calendar validation.

use luach_time::TimeError;

use crate::epoch::MAX_JEWISH_YEAR;

/// Errors from Hebrew date and molad validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Error from the Gregorian layer.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Hebrew year past the supported range.
    #[error("invalid Hebrew year: {year} (must be <= {max})", max = MAX_JEWISH_YEAR)]
    InvalidYear { year: i32 },
    /// Month number outside 1..=12, or 13 in a common year.
    #[error("invalid Hebrew month {month} for year {year} (must be 1..={last})")]
    InvalidMonth { year: i32, month: u32, last: u32 },
    /// Day of month outside 1..=30.
    #[error("invalid Hebrew day: {day} (must be 1..=30)")]
    InvalidDay { day: u32 },
    /// Hebrew date earlier than 18 Teves 3761, the first day of the Gregorian count.
    #[error("Hebrew date {year}-{month}-{day} is before 18 Teves 3761")]
    BeforeGregorianEpoch { year: i32, month: u32, day: u32 },
    /// Molad time of day out of range.
    #[error(
        "invalid molad time {hours}h {minutes}m {chalakim}p (hours 0..=23, minutes 0..=59, chalakim 0..=17)"
    )]
    InvalidMoladTime {
        hours: u32,
        minutes: u32,
        chalakim: u32,
    },
}
