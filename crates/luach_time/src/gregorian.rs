//! Proleptic Gregorian calendar and absolute day numbers.
//!
//! Absolute day 1 is Monday, January 1 of year 1 in the proleptic Gregorian
//! calendar, the same origin `chrono` uses for `num_days_from_ce`. Every other
//! calendar in this workspace is expressed as an offset on this count.

use chrono::{Datelike, NaiveDate};

use crate::error::TimeError;

/// Latest Gregorian year accepted by validation.
pub const MAX_GREGORIAN_YEAR: i32 = 1_000_000;

/// Absolute day number of 31 December [`MAX_GREGORIAN_YEAR`]. Conversions
/// back to calendar fields accept days within this distance of the origin.
pub const MAX_ABSOLUTE_DAY: i64 = absolute_from_gregorian_parts(MAX_GREGORIAN_YEAR, 12, 31);

/// Whether `year` has a February 29th.
pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`.
///
/// `month` is expected in 1..=12; anything else is treated as a 31-day month.
pub const fn days_in_gregorian_month(month: u32, year: i32) -> u32 {
    match month {
        2 => {
            if is_gregorian_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Absolute day number of a Gregorian date without validation.
///
/// Usable in `const` items for fixed epochs. Years before 1 follow the
/// proleptic calendar with floor division, so year 0 is a leap year.
pub const fn absolute_from_gregorian_parts(year: i32, month: u32, day: u32) -> i64 {
    let mut abs = day as i64;
    let mut m = 1;
    while m < month {
        abs += days_in_gregorian_month(m, year) as i64;
        m += 1;
    }
    let prior = year as i64 - 1;
    abs + 365 * prior + prior.div_euclid(4) - prior.div_euclid(100) + prior.div_euclid(400)
}

/// Absolute day number of a validated Gregorian date.
///
/// A day past the end of the month is clamped to the month's last day.
///
/// # Errors
///
/// Returns [`TimeError`] if `year` is outside 1..=[`MAX_GREGORIAN_YEAR`],
/// `month` is outside 1..=12, or `day < 1`.
pub fn gregorian_to_absolute(year: i32, month: u32, day: u32) -> Result<i64, TimeError> {
    let day = validate_gregorian_date(year, month, day)?;
    Ok(absolute_from_gregorian_parts(year, month, day))
}

/// Validate a Gregorian date, returning the day of month after clamping.
///
/// # Errors
///
/// Returns [`TimeError`] if `year` is outside 1..=[`MAX_GREGORIAN_YEAR`],
/// `month` is outside 1..=12, or `day < 1`.
pub fn validate_gregorian_date(year: i32, month: u32, day: u32) -> Result<u32, TimeError> {
    if !(1..=MAX_GREGORIAN_YEAR).contains(&year) {
        return Err(TimeError::InvalidYear { year });
    }
    if !(1..=12).contains(&month) {
        return Err(TimeError::InvalidMonth { month });
    }
    if day < 1 {
        return Err(TimeError::InvalidDay { day });
    }
    let last = days_in_gregorian_month(month, year);
    if day > last {
        tracing::debug!(year, month, day, last, "clamping Gregorian day of month");
        return Ok(last);
    }
    Ok(day)
}

/// Gregorian `(year, month, day)` of an absolute day number.
///
/// The year is estimated from `abs / 366` and refined by scanning whole
/// years, then months, until the cumulative count passes `abs`.
///
/// # Errors
///
/// Returns [`TimeError::OutOfRange`] if `abs` is further than
/// [`MAX_ABSOLUTE_DAY`] from the origin.
pub fn absolute_to_gregorian(abs: i64) -> Result<(i32, u32, u32), TimeError> {
    let out_of_range = TimeError::OutOfRange { absolute_day: abs };
    if !(-MAX_ABSOLUTE_DAY..=MAX_ABSOLUTE_DAY).contains(&abs) {
        return Err(out_of_range);
    }
    let mut year = i32::try_from(abs.div_euclid(366)).map_err(|_| out_of_range)?;
    while abs < absolute_from_gregorian_parts(year, 1, 1) {
        year -= 1;
    }
    while abs >= absolute_from_gregorian_parts(year + 1, 1, 1) {
        year += 1;
    }
    let mut month = 1;
    while month < 12
        && abs > absolute_from_gregorian_parts(year, month, days_in_gregorian_month(month, year))
    {
        month += 1;
    }
    let day = abs - absolute_from_gregorian_parts(year, month, 1) + 1;
    Ok((year, month, day as u32))
}

/// Absolute day number of a `chrono` date.
pub fn absolute_from_naive_date(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce())
}

/// `chrono` date for an absolute day number.
///
/// # Errors
///
/// Returns [`TimeError::OutOfRange`] if `chrono` cannot represent the date.
pub fn naive_date_from_absolute(abs: i64) -> Result<NaiveDate, TimeError> {
    i32::try_from(abs)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .ok_or(TimeError::OutOfRange { absolute_day: abs })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_rules() {
        assert!(is_gregorian_leap_year(2024));
        assert!(!is_gregorian_leap_year(2023));
        assert!(!is_gregorian_leap_year(1900));
        assert!(is_gregorian_leap_year(2000));
    }

    #[test]
    fn february_length() {
        assert_eq!(days_in_gregorian_month(2, 2024), 29);
        assert_eq!(days_in_gregorian_month(2, 2100), 28);
        assert_eq!(days_in_gregorian_month(9, 2024), 30);
        assert_eq!(days_in_gregorian_month(12, 2024), 31);
    }

    #[test]
    fn epoch_is_day_one() {
        assert_eq!(absolute_from_gregorian_parts(1, 1, 1), 1);
        assert_eq!(absolute_to_gregorian(1), Ok((1, 1, 1)));
    }

    #[test]
    fn year_zero_is_leap() {
        assert_eq!(absolute_to_gregorian(0), Ok((0, 12, 31)));
        assert_eq!(absolute_from_gregorian_parts(0, 1, 1), -365);
    }

    #[test]
    fn known_absolute_day() {
        // Rosh Hashana 5785
        assert_eq!(gregorian_to_absolute(2024, 10, 3).unwrap(), 739_162);
    }

    #[test]
    fn day_past_month_end_is_clamped() {
        assert_eq!(
            gregorian_to_absolute(2023, 2, 31).unwrap(),
            gregorian_to_absolute(2023, 2, 28).unwrap()
        );
        assert_eq!(validate_gregorian_date(2024, 4, 31).unwrap(), 30);
    }

    #[test]
    fn invalid_fields_rejected() {
        assert_eq!(
            gregorian_to_absolute(2024, 13, 1),
            Err(TimeError::InvalidMonth { month: 13 })
        );
        assert_eq!(
            gregorian_to_absolute(2024, 0, 1),
            Err(TimeError::InvalidMonth { month: 0 })
        );
        assert_eq!(
            gregorian_to_absolute(2024, 1, 0),
            Err(TimeError::InvalidDay { day: 0 })
        );
        assert_eq!(
            gregorian_to_absolute(0, 1, 1),
            Err(TimeError::InvalidYear { year: 0 })
        );
    }

    #[test]
    fn years_past_the_supported_range_are_rejected() {
        assert_eq!(validate_gregorian_date(MAX_GREGORIAN_YEAR, 12, 31), Ok(31));
        assert_eq!(
            validate_gregorian_date(MAX_GREGORIAN_YEAR + 1, 1, 1),
            Err(TimeError::InvalidYear { year: MAX_GREGORIAN_YEAR + 1 })
        );
        assert_eq!(
            gregorian_to_absolute(i32::MAX, 1, 1),
            Err(TimeError::InvalidYear { year: i32::MAX })
        );
    }

    #[test]
    fn absolute_days_past_the_supported_range_are_rejected() {
        assert_eq!(
            absolute_to_gregorian(MAX_ABSOLUTE_DAY),
            Ok((MAX_GREGORIAN_YEAR, 12, 31))
        );
        assert_eq!(
            absolute_to_gregorian(MAX_ABSOLUTE_DAY + 1),
            Err(TimeError::OutOfRange { absolute_day: MAX_ABSOLUTE_DAY + 1 })
        );
        for abs in [i64::MAX, i64::MIN] {
            assert_eq!(
                absolute_to_gregorian(abs),
                Err(TimeError::OutOfRange { absolute_day: abs })
            );
        }
    }

    #[test]
    fn last_day_of_year() {
        let abs = gregorian_to_absolute(2023, 12, 31).unwrap();
        assert_eq!(absolute_to_gregorian(abs), Ok((2023, 12, 31)));
        assert_eq!(absolute_to_gregorian(abs + 1), Ok((2024, 1, 1)));
    }

    #[test]
    fn chrono_agrees_on_origin() {
        let date = NaiveDate::from_ymd_opt(2024, 10, 3).unwrap();
        assert_eq!(absolute_from_naive_date(date), 739_162);
        assert_eq!(naive_date_from_absolute(739_162).unwrap(), date);
    }

    #[test]
    fn naive_date_out_of_range() {
        assert!(matches!(
            naive_date_from_absolute(i64::MAX),
            Err(TimeError::OutOfRange { .. })
        ));
    }
}
