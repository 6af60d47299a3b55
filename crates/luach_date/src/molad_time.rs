//! Molad and Kiddush Levana instants.
//!
//! The molad is announced in Jerusalem local mean time. Instants are returned
//! at Jerusalem standard time (UTC+2) all year round; callers convert to any
//! other zone, including Israeli daylight time, themselves.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta};
use luach_base::{GeoLocation, JewishMonth, MOLAD_LOCATION, molad};
use luach_time::naive_date_from_absolute;

use crate::error::DateError;

pub(crate) fn standard_offset(location: &GeoLocation) -> Result<FixedOffset, DateError> {
    FixedOffset::east_opt(location.standard_offset_seconds).ok_or(DateError::InvalidOffset {
        seconds: location.standard_offset_seconds,
    })
}

/// Midnight starting `date` on a clock running at `offset`.
pub(crate) fn local_midnight(date: NaiveDate, offset: FixedOffset) -> DateTime<FixedOffset> {
    let utc = date.and_time(NaiveTime::MIN) - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
    DateTime::from_naive_utc_and_offset(utc, offset)
}

/// Molad of `month` in `year` as an instant at UTC+2.
pub fn molad_instant(year: i32, month: JewishMonth) -> Result<DateTime<FixedOffset>, DateError> {
    let molad = molad(year, month);
    let offset = standard_offset(&MOLAD_LOCATION)?;
    let day = naive_date_from_absolute(molad.absolute_day)?;
    let into_day = molad.time.milliseconds() - MOLAD_LOCATION.local_mean_time_offset_ms();
    Ok(local_midnight(day, offset) + TimeDelta::milliseconds(into_day))
}

/// Three days (72 hours) after the molad.
pub fn tchilas_zman_kidush_levana_3_days(
    year: i32,
    month: JewishMonth,
) -> Result<DateTime<FixedOffset>, DateError> {
    Ok(molad_instant(year, month)? + TimeDelta::hours(72))
}

/// Seven days (168 hours) after the molad.
pub fn tchilas_zman_kidush_levana_7_days(
    year: i32,
    month: JewishMonth,
) -> Result<DateTime<FixedOffset>, DateError> {
    Ok(molad_instant(year, month)? + TimeDelta::hours(168))
}

/// Half a mean month after the molad: 14 days, 18 hours, 22 minutes and
/// 1.666 seconds.
pub fn sof_zman_kidush_levana_between_moldos(
    year: i32,
    month: JewishMonth,
) -> Result<DateTime<FixedOffset>, DateError> {
    let half_month = TimeDelta::days(14)
        + TimeDelta::hours(18)
        + TimeDelta::minutes(22)
        + TimeDelta::seconds(1)
        + TimeDelta::milliseconds(666);
    Ok(molad_instant(year, month)? + half_month)
}

/// Fifteen days after the molad.
pub fn sof_zman_kidush_levana_15_days(
    year: i32,
    month: JewishMonth,
) -> Result<DateTime<FixedOffset>, DateError> {
    Ok(molad_instant(year, month)? + TimeDelta::days(15))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn molad_tishrei_5785() {
        let instant = molad_instant(5785, JewishMonth::Tishrei).unwrap();
        assert_eq!(instant, at("2024-10-03T03:00:46.837+02:00"));
        assert_eq!(instant.offset().local_minus_utc(), 7200);
    }

    #[test]
    fn molad_cheshvan_5785() {
        let instant = molad_instant(5785, JewishMonth::Cheshvan).unwrap();
        assert_eq!(instant, at("2024-11-01T15:44:50.170+02:00"));
    }

    #[test]
    fn kiddush_levana_offsets() {
        let (year, month) = (5785, JewishMonth::Tishrei);
        assert_eq!(
            tchilas_zman_kidush_levana_3_days(year, month).unwrap(),
            at("2024-10-06T03:00:46.837+02:00")
        );
        assert_eq!(
            tchilas_zman_kidush_levana_7_days(year, month).unwrap(),
            at("2024-10-10T03:00:46.837+02:00")
        );
        assert_eq!(
            sof_zman_kidush_levana_between_moldos(year, month).unwrap(),
            at("2024-10-17T21:22:48.503+02:00")
        );
        assert_eq!(
            sof_zman_kidush_levana_15_days(year, month).unwrap(),
            at("2024-10-18T03:00:46.837+02:00")
        );
    }

    #[test]
    fn local_midnight_respects_offset() {
        let date = NaiveDate::from_ymd_opt(2024, 10, 3).unwrap();
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(local_midnight(date, offset), at("2024-10-03T00:00:00-05:00"));
    }

    #[test]
    fn invalid_location_offset() {
        let nowhere = GeoLocation::new("Nowhere", 0.0, 0.0, 90_000);
        assert_eq!(
            standard_offset(&nowhere),
            Err(DateError::InvalidOffset { seconds: 90_000 })
        );
    }
}
