//! Error types for date construction and cycle lookups.

use chrono::NaiveDate;
use luach_base::CalendarError;
use luach_time::TimeError;

/// Errors from building a [`JewishDate`](crate::JewishDate) or querying a study cycle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DateError {
    /// Error from Hebrew calendar validation.
    #[error("calendar error: {0}")]
    Calendar(#[from] CalendarError),
    /// Error from Gregorian validation.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Date earlier than the first day of a Daf Yomi cycle.
    #[error("{date} is before the {cycle} cycle began on {start}")]
    BeforeCycleStart {
        cycle: &'static str,
        date: NaiveDate,
        start: NaiveDate,
    },
    /// UTC offset that `chrono` cannot represent (beyond one day).
    #[error("invalid UTC offset: {seconds} seconds")]
    InvalidOffset { seconds: i32 },
    /// Step count below 1.
    #[error("invalid amount: {amount} (must be >= 1)")]
    InvalidAmount { amount: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_before_cycle_start() {
        let err = DateError::BeforeCycleStart {
            cycle: "Daf Yomi Bavli",
            date: NaiveDate::from_ymd_opt(1920, 1, 1).unwrap(),
            start: NaiveDate::from_ymd_opt(1923, 9, 11).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "1920-01-01 is before the Daf Yomi Bavli cycle began on 1923-09-11"
        );
    }

    #[test]
    fn wraps_lower_layers() {
        let err: DateError = CalendarError::InvalidDay { day: 31 }.into();
        assert!(err.to_string().starts_with("calendar error:"));
        let err: DateError = TimeError::InvalidYear { year: 0 }.into();
        assert!(matches!(err, DateError::Time(TimeError::InvalidYear { year: 0 })));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<DateError>();
    }
}
