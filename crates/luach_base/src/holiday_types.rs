//! Inputs and configuration for holiday classification.
//!
//! Provides the locale configuration and the per-day calendar facts the
//! holiday rule table and the date-only predicates are evaluated against.

use luach_time::DayOfWeek;

use crate::epoch::JewishYear;
use crate::month::JewishMonth;

/// Locale switches for holiday classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidayConfig {
    /// Keep one day of Yom Tov (Israel) instead of two.
    pub in_israel: bool,
    /// Include Yom HaShoah, Yom Hazikaron, Yom Ha'atzmaut and Yom Yerushalayim.
    pub use_modern_holidays: bool,
}

impl HolidayConfig {
    /// Israel, without the modern Israeli days.
    pub const fn israel() -> Self {
        Self {
            in_israel: true,
            use_modern_holidays: false,
        }
    }

    /// Same locale, with or without the modern Israeli days.
    pub const fn with_modern_holidays(self, use_modern_holidays: bool) -> Self {
        Self {
            use_modern_holidays,
            ..self
        }
    }
}

/// Calendar facts of a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HolidayFacts {
    /// Hebrew month.
    pub month: JewishMonth,
    /// Day of the Hebrew month (1-30).
    pub day: u32,
    /// Day of the week.
    pub weekday: DayOfWeek,
    /// Whether the Hebrew year has Adar II.
    pub leap_year: bool,
    /// Whether Kislev of the Hebrew year has 29 days.
    pub kislev_short: bool,
}

impl HolidayFacts {
    /// Facts of `day` of `month` in `year`.
    pub fn new(year: &JewishYear, month: JewishMonth, day: u32, weekday: DayOfWeek) -> Self {
        Self {
            month,
            day,
            weekday,
            leap_year: year.leap,
            kislev_short: year.is_kislev_short(),
        }
    }

    /// First of a month other than Tishrei, or the 30th of any month.
    pub fn is_rosh_chodesh(&self) -> bool {
        (self.day == 1 && self.month != JewishMonth::Tishrei) || self.day == 30
    }

    /// The 29th, except in Elul where the next day is Rosh Hashana.
    pub fn is_erev_rosh_chodesh(&self) -> bool {
        self.day == 29 && self.month != JewishMonth::Elul
    }

    /// Shabbos falling on the day before Rosh Chodesh.
    pub fn is_machar_chodesh(&self) -> bool {
        self.weekday == DayOfWeek::Saturday && matches!(self.day, 29 | 30)
    }

    /// Shabbos on which the coming month is announced.
    pub fn is_shabbos_mevorchim(&self) -> bool {
        self.weekday == DayOfWeek::Saturday
            && (23..=29).contains(&self.day)
            && self.month != JewishMonth::Elul
    }

    /// 1 to 10 Tishrei.
    pub fn is_aseres_yemei_teshuva(&self) -> bool {
        self.month == JewishMonth::Tishrei && self.day <= 10
    }

    /// Day of the Omer count (1-49), counted from the second night of Pesach.
    pub fn day_of_omer(&self) -> Option<u32> {
        match self.month {
            JewishMonth::Nisan if self.day >= 16 => Some(self.day - 15),
            JewishMonth::Iyar => Some(self.day + 15),
            JewishMonth::Sivan if self.day < 6 => Some(self.day + 44),
            _ => None,
        }
    }

    /// Day of Chanukah (1-8). The days in Teves depend on the length of Kislev.
    pub fn day_of_chanukah(&self) -> Option<u32> {
        match self.month {
            JewishMonth::Kislev if self.day >= 25 => Some(self.day - 24),
            JewishMonth::Teves if self.day <= 2 || (self.day == 3 && self.kislev_short) => {
                Some(if self.kislev_short {
                    self.day + 5
                } else {
                    self.day + 6
                })
            }
            _ => None,
        }
    }

    /// Day before a second day of Yom Tov: 1 Tishrei everywhere, plus the
    /// first day of each festival outside Israel.
    pub fn is_erev_yom_tov_sheni(&self, in_israel: bool) -> bool {
        if self.month == JewishMonth::Tishrei && self.day == 1 {
            return true;
        }
        !in_israel
            && match self.month {
                JewishMonth::Nisan => matches!(self.day, 15 | 21),
                JewishMonth::Tishrei => matches!(self.day, 15 | 22),
                JewishMonth::Sivan => self.day == 6,
                _ => false,
            }
    }
}
