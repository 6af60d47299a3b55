//! Immutable Hebrew date bound to its Gregorian date and absolute day number.
//!
//! A [`JewishDate`] carries all three representations at once. Stepping by a
//! day updates each of them incrementally; every other change goes through
//! validation and returns a new value.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use chrono::NaiveDate;
use luach_base::{
    JewishMonth, JewishYear, Kviah, Molad, absolute_to_jewish, chalakim_since_molad_tohu,
    molad, next_month, previous_month, validate_jewish_date,
};
use luach_time::{
    DayOfWeek, MAX_ABSOLUTE_DAY, TimeError, absolute_from_naive_date, absolute_to_gregorian,
    days_in_gregorian_month, gregorian_to_absolute, naive_date_from_absolute,
};

use crate::error::DateError;

/// A day in both calendars.
///
/// Equality, ordering and hashing use the absolute day number only. With
/// the `serde` feature a date serializes as its absolute day number.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i64", into = "i64")
)]
pub struct JewishDate {
    absolute: i64,
    year: JewishYear,
    month: JewishMonth,
    day: u32,
    gregorian_year: i32,
    gregorian_month: u32,
    gregorian_day: u32,
    day_of_week: DayOfWeek,
}

impl JewishDate {
    /// Date of an absolute day number (1 = 1 January 1 CE).
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::OutOfRange`] for days before absolute day 1 or
    /// after [`MAX_ABSOLUTE_DAY`].
    pub fn from_absolute(absolute: i64) -> Result<Self, DateError> {
        if !(1..=MAX_ABSOLUTE_DAY).contains(&absolute) {
            return Err(TimeError::OutOfRange {
                absolute_day: absolute,
            }
            .into());
        }
        let (year, month, day) = absolute_to_jewish(absolute)?;
        Self::assemble(absolute, JewishYear::new(year), month, day)
    }

    /// Date of a Gregorian year, month and day. A day past the end of the
    /// month is clamped to its last day.
    pub fn from_gregorian(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        let absolute = gregorian_to_absolute(year, month, day)?;
        Self::from_absolute(absolute)
    }

    /// Date of a Hebrew year, month and day. A day of 30 in a 29-day month
    /// is clamped to 29.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::Calendar`] if `year` is out of range, the month
    /// does not exist in `year`, the day is outside 1..=30, or the date
    /// precedes 18 Teves 3761.
    pub fn from_jewish(year: i32, month: JewishMonth, day: u32) -> Result<Self, DateError> {
        let day = validate_jewish_date(year, month, day)?;
        let info = JewishYear::new(year);
        let absolute = info.to_absolute(month, day);
        Self::assemble(absolute, info, month, day)
    }

    /// Date of a `chrono` date.
    pub fn from_naive_date(date: NaiveDate) -> Result<Self, DateError> {
        Self::from_absolute(absolute_from_naive_date(date))
    }

    /// The current date on the local clock.
    pub fn today() -> Result<Self, DateError> {
        Self::from_naive_date(chrono::Local::now().date_naive())
    }

    fn assemble(
        absolute: i64,
        year: JewishYear,
        month: JewishMonth,
        day: u32,
    ) -> Result<Self, DateError> {
        let (gregorian_year, gregorian_month, gregorian_day) = absolute_to_gregorian(absolute)?;
        Ok(Self {
            absolute,
            year,
            month,
            day,
            gregorian_year,
            gregorian_month,
            gregorian_day,
            day_of_week: DayOfWeek::from_absolute(absolute),
        })
    }

    /// The Gregorian date as a `chrono` date.
    pub fn to_naive_date(&self) -> Result<NaiveDate, DateError> {
        Ok(naive_date_from_absolute(self.absolute)?)
    }

    // -----------------------------------------------------------------------
    // Fields
    // -----------------------------------------------------------------------

    /// Days since 31 December 1 BCE.
    pub const fn absolute_day(&self) -> i64 {
        self.absolute
    }

    /// Hebrew year.
    pub const fn jewish_year(&self) -> i32 {
        self.year.year
    }

    /// Hebrew month.
    pub const fn jewish_month(&self) -> JewishMonth {
        self.month
    }

    /// Hebrew day of month, 1-30.
    pub const fn jewish_day_of_month(&self) -> u32 {
        self.day
    }

    /// Gregorian year.
    pub const fn gregorian_year(&self) -> i32 {
        self.gregorian_year
    }

    /// Gregorian month, 1-based.
    pub const fn gregorian_month(&self) -> u32 {
        self.gregorian_month
    }

    /// Gregorian day of month, 1-based.
    pub const fn gregorian_day_of_month(&self) -> u32 {
        self.gregorian_day
    }

    /// Day of the week.
    pub const fn day_of_week(&self) -> DayOfWeek {
        self.day_of_week
    }

    /// Year-level facts of the Hebrew year.
    pub const fn year_info(&self) -> &JewishYear {
        &self.year
    }

    // -----------------------------------------------------------------------
    // Year and month structure
    // -----------------------------------------------------------------------

    /// Whether the Hebrew year has Adar II.
    pub const fn is_jewish_leap_year(&self) -> bool {
        self.year.leap
    }

    /// Length of the Hebrew year in days.
    pub const fn days_in_jewish_year(&self) -> u32 {
        self.year.length
    }

    /// Length of the Hebrew month: 29 or 30.
    pub const fn days_in_jewish_month(&self) -> u32 {
        self.year.days_in_month(self.month)
    }

    /// Length of the Gregorian month.
    pub const fn days_in_gregorian_month(&self) -> u32 {
        days_in_gregorian_month(self.gregorian_month, self.gregorian_year)
    }

    /// Whether Cheshvan of this Hebrew year has 30 days.
    pub const fn is_cheshvan_long(&self) -> bool {
        self.year.is_cheshvan_long()
    }

    /// Whether Kislev of this Hebrew year has 29 days.
    pub const fn is_kislev_short(&self) -> bool {
        self.year.is_kislev_short()
    }

    /// Cheshvan/Kislev pattern of the Hebrew year.
    pub const fn cheshvan_kislev_kviah(&self) -> Kviah {
        self.year.kviah()
    }

    /// 1-based day of the Hebrew year counted from 1 Tishrei.
    pub fn days_since_start_of_jewish_year(&self) -> u32 {
        self.year.days_since_start(self.month, self.day)
    }

    /// Chalakim from molad tohu to the molad of this date's month.
    pub const fn chalakim_since_molad_tohu(&self) -> i64 {
        chalakim_since_molad_tohu(self.year.year, self.month)
    }

    /// Molad of this date's month.
    pub fn molad(&self) -> Molad {
        molad(self.year.year, self.month)
    }

    // -----------------------------------------------------------------------
    // Stepping
    // -----------------------------------------------------------------------

    /// The following day.
    pub fn forward(&self) -> Self {
        let mut next = *self;
        next.absolute += 1;
        next.day_of_week = self.day_of_week.next();

        if self.gregorian_day < self.days_in_gregorian_month() {
            next.gregorian_day += 1;
        } else {
            next.gregorian_day = 1;
            if self.gregorian_month == 12 {
                next.gregorian_month = 1;
                next.gregorian_year += 1;
            } else {
                next.gregorian_month += 1;
            }
        }

        if self.day < self.days_in_jewish_month() {
            next.day += 1;
        } else {
            let (year, month) = next_month(self.year.year, self.month);
            if year != self.year.year {
                next.year = JewishYear::new(year);
            }
            next.month = month;
            next.day = 1;
        }
        next
    }

    /// The preceding day, or `None` on absolute day 1.
    pub fn back(&self) -> Option<Self> {
        if self.absolute <= 1 {
            return None;
        }
        let mut prev = *self;
        prev.absolute -= 1;
        prev.day_of_week = self.day_of_week.prev();

        if self.gregorian_day > 1 {
            prev.gregorian_day -= 1;
        } else {
            if self.gregorian_month == 1 {
                prev.gregorian_month = 12;
                prev.gregorian_year -= 1;
            } else {
                prev.gregorian_month -= 1;
            }
            prev.gregorian_day = days_in_gregorian_month(prev.gregorian_month, prev.gregorian_year);
        }

        if self.day > 1 {
            prev.day -= 1;
        } else {
            let (year, month) = previous_month(self.year.year, self.month);
            if year != self.year.year {
                prev.year = JewishYear::new(year);
            }
            prev.month = month;
            prev.day = prev.year.days_in_month(month);
        }
        Some(prev)
    }

    /// Step forward `amount` days.
    pub fn forward_days(&self, amount: i32) -> Result<Self, DateError> {
        check_amount(amount)?;
        let mut date = *self;
        for _ in 0..amount {
            date = date.forward();
        }
        Ok(date)
    }

    /// Step forward `amount` Hebrew months, keeping the day of month (clamped
    /// to 29 where the target month is short).
    pub fn forward_months(&self, amount: i32) -> Result<Self, DateError> {
        check_amount(amount)?;
        let (mut year, mut month) = (self.year.year, self.month);
        for _ in 0..amount {
            (year, month) = next_month(year, month);
        }
        Self::from_jewish(year, month, self.day)
    }

    /// Step forward `amount` Hebrew years, keeping month and day. Adar II
    /// becomes Adar when the target year is not a leap year.
    pub fn forward_years(&self, amount: i32) -> Result<Self, DateError> {
        check_amount(amount)?;
        let year = self
            .year
            .year
            .checked_add(amount)
            .ok_or(DateError::InvalidAmount { amount })?;
        let month = match self.month {
            JewishMonth::AdarII if !luach_base::is_jewish_leap_year(year) => JewishMonth::Adar,
            month => month,
        };
        Self::from_jewish(year, month, self.day)
    }

    // -----------------------------------------------------------------------
    // Setters
    // -----------------------------------------------------------------------

    /// Another Gregorian date.
    pub fn with_gregorian_date(&self, year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        Self::from_gregorian(year, month, day)
    }

    /// Same Gregorian month and day in `year`, clamped.
    pub fn with_gregorian_year(&self, year: i32) -> Result<Self, DateError> {
        Self::from_gregorian(year, self.gregorian_month, self.gregorian_day)
    }

    /// Same Gregorian year and day in `month`, clamped.
    pub fn with_gregorian_month(&self, month: u32) -> Result<Self, DateError> {
        Self::from_gregorian(self.gregorian_year, month, self.gregorian_day)
    }

    /// Same Gregorian year and month on `day`, clamped.
    pub fn with_gregorian_day_of_month(&self, day: u32) -> Result<Self, DateError> {
        Self::from_gregorian(self.gregorian_year, self.gregorian_month, day)
    }

    /// Another Hebrew date.
    pub fn with_jewish_date(&self, year: i32, month: JewishMonth, day: u32) -> Result<Self, DateError> {
        Self::from_jewish(year, month, day)
    }

    /// Same month and day in another year. Fails for Adar II when `year` is
    /// not a leap year.
    pub fn with_jewish_year(&self, year: i32) -> Result<Self, DateError> {
        Self::from_jewish(year, self.month, self.day)
    }

    /// Same Hebrew year and day in `month`.
    pub fn with_jewish_month(&self, month: JewishMonth) -> Result<Self, DateError> {
        Self::from_jewish(self.year.year, month, self.day)
    }

    /// Same Hebrew year and month on `day`, clamped.
    pub fn with_jewish_day_of_month(&self, day: u32) -> Result<Self, DateError> {
        Self::from_jewish(self.year.year, self.month, day)
    }
}

fn check_amount(amount: i32) -> Result<(), DateError> {
    if amount < 1 {
        return Err(DateError::InvalidAmount { amount });
    }
    Ok(())
}

impl PartialEq for JewishDate {
    fn eq(&self, other: &Self) -> bool {
        self.absolute == other.absolute
    }
}

impl Eq for JewishDate {}

impl PartialOrd for JewishDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for JewishDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.absolute.cmp(&other.absolute)
    }
}

impl Hash for JewishDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.absolute.hash(state);
    }
}

impl core::fmt::Display for JewishDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} {}, {}",
            self.day,
            self.month.name_in_year(self.year.leap),
            self.year.year
        )
    }
}

impl TryFrom<NaiveDate> for JewishDate {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_naive_date(date)
    }
}

impl TryFrom<i64> for JewishDate {
    type Error = DateError;

    fn try_from(absolute: i64) -> Result<Self, Self::Error> {
        Self::from_absolute(absolute)
    }
}

impl From<JewishDate> for i64 {
    fn from(date: JewishDate) -> Self {
        date.absolute
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luach_base::CalendarError;

    fn date(y: i32, m: u32, d: u32) -> JewishDate {
        JewishDate::from_gregorian(y, m, d).unwrap()
    }

    #[test]
    fn three_representations_agree() {
        let d = date(2024, 10, 3);
        assert_eq!(d.jewish_year(), 5785);
        assert_eq!(d.jewish_month(), JewishMonth::Tishrei);
        assert_eq!(d.jewish_day_of_month(), 1);
        assert_eq!(d.day_of_week(), DayOfWeek::Thursday);
        assert_eq!(d.absolute_day(), 739_162);
        assert_eq!(JewishDate::from_jewish(5785, JewishMonth::Tishrei, 1).unwrap(), d);
        assert_eq!(JewishDate::from_absolute(739_162).unwrap(), d);
    }

    #[test]
    fn first_day() {
        let d = JewishDate::from_absolute(1).unwrap();
        assert_eq!((d.gregorian_year(), d.gregorian_month(), d.gregorian_day_of_month()), (1, 1, 1));
        assert_eq!(d.jewish_month(), JewishMonth::Teves);
        assert_eq!(d.jewish_day_of_month(), 18);
        assert!(d.back().is_none());
        assert!(matches!(
            JewishDate::from_absolute(0),
            Err(DateError::Time(TimeError::OutOfRange { absolute_day: 0 }))
        ));
    }

    #[test]
    fn forward_rolls_both_calendars() {
        // 29 Elul 5784 is 2 October 2024.
        let erev = date(2024, 10, 2);
        let next = erev.forward();
        assert_eq!(next.jewish_year(), 5785);
        assert_eq!(next.jewish_month(), JewishMonth::Tishrei);
        assert_eq!(next.gregorian_day_of_month(), 3);
        assert_eq!(next.back(), Some(erev));

        let new_year = date(2024, 12, 31).forward();
        assert_eq!((new_year.gregorian_year(), new_year.gregorian_month()), (2025, 1));
    }

    #[test]
    fn stepping_matches_reconstruction() {
        let mut d = date(2023, 9, 1);
        for _ in 0..800 {
            let next = d.forward();
            let rebuilt = JewishDate::from_absolute(next.absolute_day()).unwrap();
            assert_eq!(next.jewish_year(), rebuilt.jewish_year());
            assert_eq!(next.jewish_month(), rebuilt.jewish_month());
            assert_eq!(next.jewish_day_of_month(), rebuilt.jewish_day_of_month());
            assert_eq!(next.gregorian_month(), rebuilt.gregorian_month());
            assert_eq!(next.gregorian_day_of_month(), rebuilt.gregorian_day_of_month());
            assert_eq!(next.day_of_week(), rebuilt.day_of_week());
            assert_eq!(next.back().map(|b| b.jewish_day_of_month()), Some(d.jewish_day_of_month()));
            d = next;
        }
    }

    #[test]
    fn adar_of_common_year_rolls_to_nisan() {
        let last_adar = JewishDate::from_jewish(5785, JewishMonth::Adar, 29).unwrap();
        let nisan = last_adar.forward();
        assert_eq!(nisan.jewish_month(), JewishMonth::Nisan);
        assert_eq!(nisan.back().map(|d| d.jewish_month()), Some(JewishMonth::Adar));

        let last_adar_ii = JewishDate::from_jewish(5784, JewishMonth::AdarII, 29).unwrap();
        assert_eq!(last_adar_ii.forward().jewish_month(), JewishMonth::Nisan);
    }

    #[test]
    fn day_thirty_is_clamped() {
        let d = JewishDate::from_jewish(5785, JewishMonth::Iyar, 30).unwrap();
        assert_eq!(d.jewish_day_of_month(), 29);
        let feb = date(2023, 2, 31);
        assert_eq!(feb.gregorian_day_of_month(), 28);
    }

    #[test]
    fn invalid_dates_fail() {
        assert!(matches!(
            JewishDate::from_jewish(5785, JewishMonth::AdarII, 1),
            Err(DateError::Calendar(CalendarError::InvalidMonth { .. }))
        ));
        assert!(matches!(
            JewishDate::from_gregorian(2024, 13, 1),
            Err(DateError::Time(TimeError::InvalidMonth { month: 13 }))
        ));
        assert!(JewishDate::from_gregorian(0, 1, 1).is_err());
    }

    #[test]
    fn forward_months_and_years() {
        let d = JewishDate::from_jewish(5784, JewishMonth::Adar, 30).unwrap();
        let next = d.forward_months(1).unwrap();
        assert_eq!(next.jewish_month(), JewishMonth::AdarII);
        assert_eq!(next.jewish_day_of_month(), 29);

        let elul = JewishDate::from_jewish(5784, JewishMonth::Elul, 1).unwrap();
        let tishrei = elul.forward_months(1).unwrap();
        assert_eq!((tishrei.jewish_year(), tishrei.jewish_month()), (5785, JewishMonth::Tishrei));
        assert_eq!(elul.forward_months(12).unwrap().jewish_month(), JewishMonth::Elul);

        let purim = JewishDate::from_jewish(5784, JewishMonth::AdarII, 14).unwrap();
        let next_purim = purim.forward_years(1).unwrap();
        assert_eq!(next_purim.jewish_month(), JewishMonth::Adar);
        assert_eq!(next_purim.jewish_year(), 5785);

        assert_eq!(d.forward_months(0), Err(DateError::InvalidAmount { amount: 0 }));
        assert!(d.forward_years(-1).is_err());
        assert_eq!(d.forward_days(7).unwrap().absolute_day(), d.absolute_day() + 7);
    }

    #[test]
    fn year_overflow_is_an_error() {
        let d = date(2024, 10, 3);
        assert_eq!(
            d.forward_years(i32::MAX),
            Err(DateError::InvalidAmount { amount: i32::MAX })
        );
        assert!(matches!(
            d.forward_years(2_000_000_000),
            Err(DateError::Calendar(CalendarError::InvalidYear { .. }))
        ));
        assert_eq!(
            JewishDate::from_jewish(i32::MAX, JewishMonth::Tishrei, 1),
            Err(DateError::Calendar(CalendarError::InvalidYear { year: i32::MAX }))
        );
        assert_eq!(
            JewishDate::from_gregorian(2_146_000_000, 1, 1),
            Err(DateError::Time(TimeError::InvalidYear { year: 2_146_000_000 }))
        );
    }

    #[test]
    fn absolute_day_range() {
        let last = JewishDate::from_absolute(MAX_ABSOLUTE_DAY).unwrap();
        assert_eq!(
            (last.gregorian_month(), last.gregorian_day_of_month()),
            (12, 31)
        );
        assert_eq!(JewishDate::from_absolute(last.absolute_day()), Ok(last));
        for abs in [MAX_ABSOLUTE_DAY + 1, i64::MAX] {
            assert_eq!(
                JewishDate::from_absolute(abs),
                Err(DateError::Time(TimeError::OutOfRange { absolute_day: abs }))
            );
        }
    }

    #[test]
    fn setters_return_new_values() {
        let d = date(2024, 10, 3);
        let moved = d.with_jewish_month(JewishMonth::Nisan).unwrap();
        assert_eq!(moved.jewish_month(), JewishMonth::Nisan);
        assert_eq!(d.jewish_month(), JewishMonth::Tishrei);
        assert_eq!(
            d.with_gregorian_year(2025).unwrap().to_naive_date().unwrap(),
            NaiveDate::from_ymd_opt(2025, 10, 3).unwrap()
        );
        let leap_day = date(2024, 2, 29);
        assert_eq!(leap_day.with_gregorian_year(2023).unwrap().gregorian_day_of_month(), 28);
        assert!(d.with_jewish_year(5785).unwrap() == d);
        assert!(
            JewishDate::from_jewish(5784, JewishMonth::AdarII, 1)
                .unwrap()
                .with_jewish_year(5785)
                .is_err()
        );
    }

    #[test]
    fn ordering_and_display() {
        let a = date(2024, 10, 3);
        let b = a.forward();
        assert!(a < b);
        assert_eq!(a.to_string(), "1 Tishrei, 5785");
        let adar = JewishDate::from_jewish(5784, JewishMonth::Adar, 1).unwrap();
        assert_eq!(adar.to_string(), "1 Adar I, 5784");
    }

    #[test]
    fn year_structure_accessors() {
        let d = date(2024, 10, 3);
        assert_eq!(d.days_in_jewish_year(), 355);
        assert_eq!(d.cheshvan_kislev_kviah(), Kviah::Shelaimim);
        assert!(d.is_cheshvan_long());
        assert_eq!(d.days_since_start_of_jewish_year(), 1);
        assert_eq!(d.molad().time.hours(), 3);
    }
}
