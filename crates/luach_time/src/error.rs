//! Error types for Gregorian calendar arithmetic.

use crate::gregorian::MAX_GREGORIAN_YEAR;

/// Errors from Gregorian date validation and conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Year before 1 CE or after [`MAX_GREGORIAN_YEAR`]. Absolute day 1 is
    /// January 1 of year 1.
    #[error("invalid Gregorian year: {year} (must be 1..={max})", max = MAX_GREGORIAN_YEAR)]
    InvalidYear { year: i32 },
    /// Month outside 1..=12.
    #[error("invalid Gregorian month: {month} (must be 1..=12)")]
    InvalidMonth { month: u32 },
    /// Day of month below 1. Days past the end of the month are clamped, not rejected.
    #[error("invalid Gregorian day: {day} (must be >= 1)")]
    InvalidDay { day: u32 },
    /// Absolute day number that no `chrono` date can represent.
    #[error("absolute day {absolute_day} is outside the representable date range")]
    OutOfRange { absolute_day: i64 },
}
