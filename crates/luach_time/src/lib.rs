//! Gregorian calendar arithmetic over a continuous absolute day count.
//!
//! This crate provides:
//! - Proleptic Gregorian date to absolute day number conversion and back
//! - Gregorian leap year and month length rules
//! - Day of the week from an absolute day number
//! - Interop with `chrono::NaiveDate` and `chrono::Weekday`

pub mod error;
pub mod gregorian;
pub mod weekday;

pub use error::TimeError;
pub use gregorian::{
    MAX_ABSOLUTE_DAY, MAX_GREGORIAN_YEAR, absolute_from_gregorian_parts, absolute_from_naive_date,
    absolute_to_gregorian, days_in_gregorian_month, gregorian_to_absolute, is_gregorian_leap_year,
    naive_date_from_absolute, validate_gregorian_date,
};
pub use weekday::{ALL_DAYS_OF_WEEK, DayOfWeek};
