//! Hebrew calendar epoch arithmetic.
//!
//! Time is counted in chalakim (parts, 1080 to the hour) from the Sunday
//! evening before molad tohu, the mean conjunction of Tishrei in year 1.
//! Rosh Hashana of each year is derived from its molad of Tishrei by the
//! four dechiyot (postponements); every other date follows from the year's
//! length and its fixed month pattern.

use luach_time::{MAX_ABSOLUTE_DAY, MAX_GREGORIAN_YEAR, TimeError};

use crate::error::CalendarError;
use crate::month::{ALL_JEWISH_MONTHS, JewishMonth};

/// Absolute day number of day 0 of the elapsed-day count.
pub const JEWISH_EPOCH: i64 = -1_373_429;

/// Latest Hebrew year accepted by validation.
pub const MAX_JEWISH_YEAR: i32 = MAX_GREGORIAN_YEAR + 3761;

/// Parts in a minute.
pub const CHALAKIM_PER_MINUTE: i64 = 18;
/// Parts in an hour.
pub const CHALAKIM_PER_HOUR: i64 = 1_080;
/// Parts in a day.
pub const CHALAKIM_PER_DAY: i64 = 25_920;
/// Mean synodic month: 29 days, 12 hours and 793 parts.
pub const CHALAKIM_PER_MONTH: i64 = 765_433;
/// Molad tohu (BaHaRaD): day 2, 5 hours, 204 parts.
pub const CHALAKIM_MOLAD_TOHU: i64 = 31_524;

/// Molad at or after noon (18 hours into the day).
const MOLAD_ZAKEN: i64 = 18 * CHALAKIM_PER_HOUR;
/// 9 hours 204 parts on a Tuesday of a common year.
const GATRAD: i64 = 9 * CHALAKIM_PER_HOUR + 204;
/// 15 hours 589 parts on a Monday following a leap year.
const BETUTAKPAT: i64 = 15 * CHALAKIM_PER_HOUR + 589;

/// Days in the 28-year solar cycle of 365.25-day years.
const SOLAR_CYCLE_DAYS: i64 = 10_227;
/// Tekufas Nisan of year 1 fell 172 days after the start of the count.
const SOLAR_CYCLE_OFFSET: i64 = 172;

/// Whether `year` has 13 months. Leap years fall on years 3, 6, 8, 11, 14, 17
/// and 19 of each 19-year cycle.
pub const fn is_jewish_leap_year(year: i32) -> bool {
    (7 * year as i64 + 1).rem_euclid(19) < 7
}

/// Adar in a common year, Adar II in a leap year.
pub const fn last_month_of_jewish_year(year: i32) -> JewishMonth {
    if is_jewish_leap_year(year) {
        JewishMonth::AdarII
    } else {
        JewishMonth::Adar
    }
}

/// 1-based position of `month` counted from Tishrei.
pub const fn month_of_year(year: i32, month: JewishMonth) -> i64 {
    let m = month.number() as i64;
    if is_jewish_leap_year(year) {
        (m + 6) % 13 + 1
    } else {
        (m + 5) % 12 + 1
    }
}

/// Months elapsed from molad tohu to the molad of `month` in `year`.
pub const fn months_elapsed(year: i32, month: JewishMonth) -> i64 {
    let prior = year as i64 - 1;
    let cycles = prior.div_euclid(19);
    let in_cycle = prior.rem_euclid(19);
    235 * cycles + 12 * in_cycle + (7 * in_cycle + 1) / 19 + month_of_year(year, month) - 1
}

/// Chalakim from the start of the epoch to the molad of `month` in `year`.
pub const fn chalakim_since_molad_tohu(year: i32, month: JewishMonth) -> i64 {
    CHALAKIM_MOLAD_TOHU + CHALAKIM_PER_MONTH * months_elapsed(year, month)
}

/// Days from the epoch to the day before Rosh Hashana of `year`.
///
/// Counting days this way, `day % 7` is 0 on Sunday. The first three
/// dechiyot are checked together and postpone at most one day; the weekday
/// rule is applied afterwards to the possibly postponed day.
pub fn jewish_calendar_elapsed_days(year: i32) -> i64 {
    let chalakim = chalakim_since_molad_tohu(year, JewishMonth::Tishrei);
    let molad_day = chalakim.div_euclid(CHALAKIM_PER_DAY);
    let molad_parts = chalakim.rem_euclid(CHALAKIM_PER_DAY);
    let weekday = molad_day.rem_euclid(7);

    let mut rosh_hashana = molad_day;
    if molad_parts >= MOLAD_ZAKEN
        || (weekday == 2 && molad_parts >= GATRAD && !is_jewish_leap_year(year))
        || (weekday == 1 && molad_parts >= BETUTAKPAT && is_jewish_leap_year(year - 1))
    {
        tracing::trace!(year, molad_day, molad_parts, "postponing Rosh Hashana past the molad");
        rosh_hashana += 1;
    }
    if matches!(rosh_hashana.rem_euclid(7), 0 | 3 | 5) {
        tracing::trace!(year, rosh_hashana, "postponing Rosh Hashana off Sunday, Wednesday or Friday");
        rosh_hashana += 1;
    }
    rosh_hashana
}

/// Length of `year` in days: one of 353, 354, 355, 383, 384 or 385.
pub fn days_in_jewish_year(year: i32) -> u32 {
    (jewish_calendar_elapsed_days(year + 1) - jewish_calendar_elapsed_days(year)) as u32
}

/// Whether Cheshvan has 30 days in `year`.
pub fn is_cheshvan_long(year: i32) -> bool {
    days_in_jewish_year(year) % 10 == 5
}

/// Whether Kislev has 29 days in `year`.
pub fn is_kislev_short(year: i32) -> bool {
    days_in_jewish_year(year) % 10 == 3
}

/// Lengths of Cheshvan and Kislev, which together set the year's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kviah {
    /// Both months have 29 days.
    Chaserim,
    /// Cheshvan has 29 days and Kislev 30.
    Kesidran,
    /// Both months have 30 days.
    Shelaimim,
}

impl Kviah {
    /// Transliterated name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chaserim => "Chaserim",
            Self::Kesidran => "Kesidran",
            Self::Shelaimim => "Shelaimim",
        }
    }
}

/// Cheshvan/Kislev pattern of `year`.
pub fn cheshvan_kislev_kviah(year: i32) -> Kviah {
    JewishYear::new(year).kviah()
}

/// Number of days in `month` of `year`: 29 or 30.
pub fn days_in_jewish_month(month: JewishMonth, year: i32) -> u32 {
    JewishYear::new(year).days_in_month(month)
}

/// 1-based day of the year counted from 1 Tishrei.
pub fn days_since_start_of_jewish_year(year: i32, month: JewishMonth, day: u32) -> u32 {
    JewishYear::new(year).days_since_start(month, day)
}

/// Absolute day number of a Hebrew date. The date is not validated.
pub fn jewish_to_absolute(year: i32, month: JewishMonth, day: u32) -> i64 {
    JewishYear::new(year).to_absolute(month, day)
}

/// Hebrew `(year, month, day)` of an absolute day number.
///
/// The year is estimated from the day count and refined by scanning forward
/// to the next Rosh Hashana; the month scan starts at Tishrei or Nisan,
/// whichever precedes `abs` within the year.
///
/// # Errors
///
/// Returns [`CalendarError::Time`] if `abs` is further than
/// [`MAX_ABSOLUTE_DAY`] from the origin.
pub fn absolute_to_jewish(abs: i64) -> Result<(i32, JewishMonth, u32), CalendarError> {
    let out_of_range = TimeError::OutOfRange { absolute_day: abs };
    if !(-MAX_ABSOLUTE_DAY..=MAX_ABSOLUTE_DAY).contains(&abs) {
        return Err(out_of_range.into());
    }
    let estimate = (abs - JEWISH_EPOCH).div_euclid(366);
    let mut year = i32::try_from(estimate).map_err(|_| out_of_range)?;
    while abs < jewish_to_absolute(year, JewishMonth::Tishrei, 1) {
        year -= 1;
    }
    while abs >= jewish_to_absolute(year + 1, JewishMonth::Tishrei, 1) {
        year += 1;
    }

    let info = JewishYear::new(year);
    let mut month = if abs < info.to_absolute(JewishMonth::Nisan, 1) {
        JewishMonth::Tishrei
    } else {
        JewishMonth::Nisan
    };
    while abs > info.to_absolute(month, info.days_in_month(month)) {
        month = month.successor();
    }
    let day = abs - info.to_absolute(month, 1) + 1;
    Ok((year, month, day as u32))
}

/// The month after `month`, rolling the year over after Elul.
pub const fn next_month(year: i32, month: JewishMonth) -> (i32, JewishMonth) {
    if matches!(month, JewishMonth::Elul) {
        (year + 1, JewishMonth::Tishrei)
    } else if month as u32 == last_month_of_jewish_year(year) as u32 {
        (year, JewishMonth::Nisan)
    } else {
        (year, month.successor())
    }
}

/// The month before `month`, rolling the year back before Tishrei.
pub const fn previous_month(year: i32, month: JewishMonth) -> (i32, JewishMonth) {
    match month {
        JewishMonth::Tishrei => (year - 1, JewishMonth::Elul),
        JewishMonth::Nisan => (year, last_month_of_jewish_year(year)),
        _ => (year, month.predecessor()),
    }
}

/// Validate a Hebrew date, returning the day of month after clamping.
///
/// A day of 30 in a 29-day month is clamped to 29.
///
/// # Errors
///
/// Returns [`CalendarError`] if `year` is past [`MAX_JEWISH_YEAR`], the month
/// does not exist in `year`, the day is outside 1..=30, or the date precedes
/// 18 Teves 3761.
pub fn validate_jewish_date(year: i32, month: JewishMonth, day: u32) -> Result<u32, CalendarError> {
    if year > MAX_JEWISH_YEAR {
        return Err(CalendarError::InvalidYear { year });
    }
    let last = last_month_of_jewish_year(year);
    if month > last {
        return Err(CalendarError::InvalidMonth {
            year,
            month: month.number(),
            last: last.number(),
        });
    }
    if !(1..=30).contains(&day) {
        return Err(CalendarError::InvalidDay { day });
    }
    let in_3761_before_teves =
        year == 3761 && month >= JewishMonth::Tishrei && month < JewishMonth::Teves;
    let in_teves_3761_before_18 = year == 3761 && month == JewishMonth::Teves && day < 18;
    if year < 3761 || in_3761_before_teves || in_teves_3761_before_18 {
        return Err(CalendarError::BeforeGregorianEpoch {
            year,
            month: month.number(),
            day,
        });
    }
    let length = days_in_jewish_month(month, year);
    if day > length {
        tracing::debug!(year, month = month.number(), day, length, "clamping Hebrew day of month");
        return Ok(length);
    }
    Ok(day)
}

/// Whether the sun returns to its position at creation on this day, which
/// happens on one day every 28 solar years.
pub fn is_birkas_hachamah(year: i32, days_since_start_of_year: u32) -> bool {
    let days = jewish_calendar_elapsed_days(year) + i64::from(days_since_start_of_year);
    days.rem_euclid(SOLAR_CYCLE_DAYS) == SOLAR_CYCLE_OFFSET
}

// ---------------------------------------------------------------------------
// Per-year facts
// ---------------------------------------------------------------------------

/// One Hebrew year's elapsed days, length and leap flag.
///
/// Computing these once per year avoids re-deriving the dechiyot for every
/// month-length lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct JewishYear {
    /// Hebrew year number.
    pub year: i32,
    /// Days from the epoch to the day before Rosh Hashana.
    pub elapsed_days: i64,
    /// Days in the year.
    pub length: u32,
    /// Whether the year has Adar II.
    pub leap: bool,
}

impl JewishYear {
    /// Facts for `year`. Years reached through [`validate_jewish_date`] or
    /// [`absolute_to_jewish`] are always in range.
    pub fn new(year: i32) -> Self {
        let elapsed_days = jewish_calendar_elapsed_days(year);
        let length = (jewish_calendar_elapsed_days(year + 1) - elapsed_days) as u32;
        Self {
            year,
            elapsed_days,
            length,
            leap: is_jewish_leap_year(year),
        }
    }

    /// Whether Cheshvan has 30 days.
    pub const fn is_cheshvan_long(&self) -> bool {
        self.length % 10 == 5
    }

    /// Whether Kislev has 29 days.
    pub const fn is_kislev_short(&self) -> bool {
        self.length % 10 == 3
    }

    /// Cheshvan/Kislev pattern of the year.
    pub const fn kviah(&self) -> Kviah {
        match (self.is_cheshvan_long(), self.is_kislev_short()) {
            (true, false) => Kviah::Shelaimim,
            (false, true) => Kviah::Chaserim,
            _ => Kviah::Kesidran,
        }
    }

    /// Adar or Adar II.
    pub const fn last_month(&self) -> JewishMonth {
        if self.leap {
            JewishMonth::AdarII
        } else {
            JewishMonth::Adar
        }
    }

    /// Number of days in `month`: 29 or 30.
    pub const fn days_in_month(&self, month: JewishMonth) -> u32 {
        match month {
            JewishMonth::Iyar
            | JewishMonth::Tammuz
            | JewishMonth::Elul
            | JewishMonth::Teves
            | JewishMonth::AdarII => 29,
            JewishMonth::Cheshvan if !self.is_cheshvan_long() => 29,
            JewishMonth::Kislev if self.is_kislev_short() => 29,
            JewishMonth::Adar if !self.leap => 29,
            _ => 30,
        }
    }

    /// 1-based day of the year counted from 1 Tishrei.
    pub fn days_since_start(&self, month: JewishMonth, day: u32) -> u32 {
        let tishrei = JewishMonth::Tishrei.index() as usize;
        let before: &[JewishMonth] = if month < JewishMonth::Tishrei {
            &ALL_JEWISH_MONTHS[tishrei..=self.last_month().index() as usize]
        } else {
            &ALL_JEWISH_MONTHS[tishrei..month.index() as usize]
        };
        let mut days = day + before.iter().map(|&m| self.days_in_month(m)).sum::<u32>();
        if month < JewishMonth::Tishrei {
            days += ALL_JEWISH_MONTHS[..month.index() as usize]
                .iter()
                .map(|&m| self.days_in_month(m))
                .sum::<u32>();
        }
        days
    }

    /// Absolute day number of a date in this year. The date is not validated.
    pub fn to_absolute(&self, month: JewishMonth, day: u32) -> i64 {
        i64::from(self.days_since_start(month, day)) + self.elapsed_days + JEWISH_EPOCH
    }

    /// Absolute day number of 1 Tishrei.
    pub fn rosh_hashana(&self) -> i64 {
        self.elapsed_days + 1 + JEWISH_EPOCH
    }
}
