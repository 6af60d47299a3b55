//! Holiday and fast-day classification.
//!
//! Each Hebrew date resolves to at most one [`Holiday`]. Resolution walks
//! [`HOLIDAY_RULES`], a table of (month, day range, weekday guard, locale,
//! year guard) rows, and returns the first match. Postponements are rows of
//! their own: a fast that would fall on Shabbos has one row that excludes
//! Saturday on the nominal day and a second row that matches the following
//! Sunday. Rosh Chodesh is reported only when no row matches.

use luach_time::DayOfWeek;

use crate::holiday_types::{HolidayConfig, HolidayFacts};
use crate::month::JewishMonth;

/// Holiday, fast-day or Rosh Chodesh category.
///
/// Discriminants follow the classic index numbering; 20 is unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Holiday {
    ErevPesach = 0,
    Pesach = 1,
    CholHamoedPesach = 2,
    PesachSheni = 3,
    ErevShavuos = 4,
    Shavuos = 5,
    SeventeenOfTammuz = 6,
    TishaBeav = 7,
    TuBeav = 8,
    ErevRoshHashana = 9,
    RoshHashana = 10,
    FastOfGedalyah = 11,
    ErevYomKippur = 12,
    YomKippur = 13,
    ErevSuccos = 14,
    Succos = 15,
    CholHamoedSuccos = 16,
    HoshanaRabba = 17,
    SheminiAtzeres = 18,
    SimchasTorah = 19,
    Chanukah = 21,
    TenthOfTeves = 22,
    TuBeshvat = 23,
    FastOfEsther = 24,
    Purim = 25,
    ShushanPurim = 26,
    PurimKatan = 27,
    RoshChodesh = 28,
    YomHashoah = 29,
    YomHazikaron = 30,
    YomHaatzmaut = 31,
    YomYerushalayim = 32,
}

/// All categories in index order.
pub const ALL_HOLIDAYS: [Holiday; 32] = [
    Holiday::ErevPesach,
    Holiday::Pesach,
    Holiday::CholHamoedPesach,
    Holiday::PesachSheni,
    Holiday::ErevShavuos,
    Holiday::Shavuos,
    Holiday::SeventeenOfTammuz,
    Holiday::TishaBeav,
    Holiday::TuBeav,
    Holiday::ErevRoshHashana,
    Holiday::RoshHashana,
    Holiday::FastOfGedalyah,
    Holiday::ErevYomKippur,
    Holiday::YomKippur,
    Holiday::ErevSuccos,
    Holiday::Succos,
    Holiday::CholHamoedSuccos,
    Holiday::HoshanaRabba,
    Holiday::SheminiAtzeres,
    Holiday::SimchasTorah,
    Holiday::Chanukah,
    Holiday::TenthOfTeves,
    Holiday::TuBeshvat,
    Holiday::FastOfEsther,
    Holiday::Purim,
    Holiday::ShushanPurim,
    Holiday::PurimKatan,
    Holiday::RoshChodesh,
    Holiday::YomHashoah,
    Holiday::YomHazikaron,
    Holiday::YomHaatzmaut,
    Holiday::YomYerushalayim,
];

impl Holiday {
    /// Classic numeric index (0-32, 20 unused).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Holiday with classic index `index`, if one is assigned.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL_HOLIDAYS.iter().copied().find(|h| h.index() == index)
    }

    /// Transliterated name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ErevPesach => "Erev Pesach",
            Self::Pesach => "Pesach",
            Self::CholHamoedPesach => "Chol Hamoed Pesach",
            Self::PesachSheni => "Pesach Sheni",
            Self::ErevShavuos => "Erev Shavuos",
            Self::Shavuos => "Shavuos",
            Self::SeventeenOfTammuz => "Seventeenth of Tammuz",
            Self::TishaBeav => "Tishah B'Av",
            Self::TuBeav => "Tu B'Av",
            Self::ErevRoshHashana => "Erev Rosh Hashana",
            Self::RoshHashana => "Rosh Hashana",
            Self::FastOfGedalyah => "Fast of Gedalyah",
            Self::ErevYomKippur => "Erev Yom Kippur",
            Self::YomKippur => "Yom Kippur",
            Self::ErevSuccos => "Erev Succos",
            Self::Succos => "Succos",
            Self::CholHamoedSuccos => "Chol Hamoed Succos",
            Self::HoshanaRabba => "Hoshana Rabbah",
            Self::SheminiAtzeres => "Shemini Atzeres",
            Self::SimchasTorah => "Simchas Torah",
            Self::Chanukah => "Chanukah",
            Self::TenthOfTeves => "Tenth of Teves",
            Self::TuBeshvat => "Tu B'Shvat",
            Self::FastOfEsther => "Fast of Esther",
            Self::Purim => "Purim",
            Self::ShushanPurim => "Shushan Purim",
            Self::PurimKatan => "Purim Katan",
            Self::RoshChodesh => "Rosh Chodesh",
            Self::YomHashoah => "Yom HaShoah",
            Self::YomHazikaron => "Yom Hazikaron",
            Self::YomHaatzmaut => "Yom Ha'atzmaut",
            Self::YomYerushalayim => "Yom Yerushalayim",
        }
    }

    /// Day before a Yom Tov. Hoshana Rabbah counts, and so does the last day
    /// of Chol Hamoed Pesach (the 20th).
    pub const fn is_erev_yom_tov(self, day_of_month: u32) -> bool {
        match self {
            Self::ErevPesach
            | Self::ErevShavuos
            | Self::ErevRoshHashana
            | Self::ErevYomKippur
            | Self::ErevSuccos
            | Self::HoshanaRabba => true,
            Self::CholHamoedPesach => day_of_month == 20,
            _ => false,
        }
    }

    /// Festive day. Excludes erev Yom Tov (other than Hoshana Rabbah and the
    /// last day of Chol Hamoed Pesach), Chanukah, fasts other than Yom Kippur,
    /// and Rosh Chodesh.
    pub const fn is_yom_tov(self, day_of_month: u32) -> bool {
        if self.is_erev_yom_tov(day_of_month)
            && !matches!(self, Self::HoshanaRabba | Self::CholHamoedPesach)
        {
            return false;
        }
        if self.is_taanis() && !matches!(self, Self::YomKippur) {
            return false;
        }
        !matches!(self, Self::Chanukah | Self::RoshChodesh)
    }

    /// Yom Tov on which work is forbidden.
    pub const fn is_yom_tov_assur_bemelacha(self) -> bool {
        matches!(
            self,
            Self::Pesach
                | Self::Shavuos
                | Self::Succos
                | Self::SheminiAtzeres
                | Self::SimchasTorah
                | Self::RoshHashana
                | Self::YomKippur
        )
    }

    /// Public fast day, as observed after postponement.
    pub const fn is_taanis(self) -> bool {
        matches!(
            self,
            Self::SeventeenOfTammuz
                | Self::TishaBeav
                | Self::YomKippur
                | Self::FastOfGedalyah
                | Self::TenthOfTeves
                | Self::FastOfEsther
        )
    }

    /// Intermediate days of Pesach or Succos.
    pub const fn is_chol_hamoed(self) -> bool {
        matches!(self, Self::CholHamoedPesach | Self::CholHamoedSuccos)
    }
}

/// Weekday condition on a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekdayGuard {
    /// Every day of the week.
    Any,
    /// Only on this weekday.
    On(DayOfWeek),
    /// Never on these weekdays.
    NotOn(&'static [DayOfWeek]),
}

impl WeekdayGuard {
    fn admits(self, weekday: DayOfWeek) -> bool {
        match self {
            Self::Any => true,
            Self::On(day) => day == weekday,
            Self::NotOn(days) => !days.contains(&weekday),
        }
    }
}

/// Where a rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    /// In and outside Israel.
    Anywhere,
    /// Only in Israel.
    IsraelOnly,
    /// Only outside Israel.
    DiasporaOnly,
}

/// Year-shape condition on a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearGuard {
    /// Every year.
    Any,
    /// Years with Adar II.
    Leap,
    /// Twelve-month years.
    Common,
    /// Years where Kislev has 29 days.
    KislevShort,
}

/// One row of the holiday table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolidayRule {
    /// Hebrew month the rule covers.
    pub month: JewishMonth,
    /// First day of the month the rule covers.
    pub first_day: u32,
    /// Last day covered, inclusive.
    pub last_day: u32,
    /// Weekday condition.
    pub weekday: WeekdayGuard,
    /// Where the rule applies.
    pub locale: Locale,
    /// Year-shape condition.
    pub year: YearGuard,
    /// Only applies with [`HolidayConfig::use_modern_holidays`].
    pub modern: bool,
    /// Category reported when every guard admits the day.
    pub holiday: Holiday,
}

impl HolidayRule {
    const fn days(month: JewishMonth, first_day: u32, last_day: u32, holiday: Holiday) -> Self {
        Self {
            month,
            first_day,
            last_day,
            weekday: WeekdayGuard::Any,
            locale: Locale::Anywhere,
            year: YearGuard::Any,
            modern: false,
            holiday,
        }
    }

    const fn day(month: JewishMonth, day: u32, holiday: Holiday) -> Self {
        Self::days(month, day, day, holiday)
    }

    const fn on(self, weekday: DayOfWeek) -> Self {
        Self {
            weekday: WeekdayGuard::On(weekday),
            ..self
        }
    }

    const fn not_on(self, weekdays: &'static [DayOfWeek]) -> Self {
        Self {
            weekday: WeekdayGuard::NotOn(weekdays),
            ..self
        }
    }

    const fn israel(self) -> Self {
        Self {
            locale: Locale::IsraelOnly,
            ..self
        }
    }

    const fn diaspora(self) -> Self {
        Self {
            locale: Locale::DiasporaOnly,
            ..self
        }
    }

    const fn year(self, year: YearGuard) -> Self {
        Self { year, ..self }
    }

    const fn modern(self) -> Self {
        Self {
            modern: true,
            ..self
        }
    }

    /// Whether this row matches the given day.
    pub fn matches(&self, facts: &HolidayFacts, config: &HolidayConfig) -> bool {
        if self.month != facts.month || facts.day < self.first_day || facts.day > self.last_day {
            return false;
        }
        if self.modern && !config.use_modern_holidays {
            return false;
        }
        let locale_ok = match self.locale {
            Locale::Anywhere => true,
            Locale::IsraelOnly => config.in_israel,
            Locale::DiasporaOnly => !config.in_israel,
        };
        let year_ok = match self.year {
            YearGuard::Any => true,
            YearGuard::Leap => facts.leap_year,
            YearGuard::Common => !facts.leap_year,
            YearGuard::KislevShort => facts.kislev_short,
        };
        locale_ok && year_ok && self.weekday.admits(facts.weekday)
    }
}

use DayOfWeek::{Friday, Monday, Saturday, Sunday, Thursday, Tuesday, Wednesday};
use Holiday::*;
use JewishMonth::*;

const FRIDAY_OR_SHABBOS: &[DayOfWeek] = &[Friday, Saturday];

/// The holiday table, grouped by month from Nisan. First match wins.
pub const HOLIDAY_RULES: &[HolidayRule] = &[
    // Nisan
    HolidayRule::day(Nisan, 14, ErevPesach),
    HolidayRule::day(Nisan, 15, Pesach),
    HolidayRule::day(Nisan, 21, Pesach),
    HolidayRule::day(Nisan, 16, Pesach).diaspora(),
    HolidayRule::day(Nisan, 22, Pesach).diaspora(),
    HolidayRule::days(Nisan, 17, 20, CholHamoedPesach),
    HolidayRule::day(Nisan, 16, CholHamoedPesach).israel(),
    // Yom HaShoah moves off Friday and Sunday: Thursday the 26th or Monday the 28th.
    HolidayRule::day(Nisan, 26, YomHashoah).on(Thursday).modern(),
    HolidayRule::day(Nisan, 28, YomHashoah).on(Monday).modern(),
    HolidayRule::day(Nisan, 27, YomHashoah).not_on(&[Sunday, Friday]).modern(),
    // Iyar. Yom Hazikaron is the day before Yom Ha'atzmaut; 5 Iyar on Friday or
    // Shabbos moves back to Thursday, on Monday forward to Tuesday.
    HolidayRule::day(Iyar, 4, YomHazikaron).on(Tuesday).modern(),
    HolidayRule::days(Iyar, 2, 3, YomHazikaron).on(Wednesday).modern(),
    HolidayRule::day(Iyar, 5, YomHazikaron).on(Monday).modern(),
    HolidayRule::day(Iyar, 5, YomHaatzmaut).on(Wednesday).modern(),
    HolidayRule::days(Iyar, 3, 4, YomHaatzmaut).on(Thursday).modern(),
    HolidayRule::day(Iyar, 6, YomHaatzmaut).on(Tuesday).modern(),
    HolidayRule::day(Iyar, 14, PesachSheni),
    HolidayRule::day(Iyar, 28, YomYerushalayim).modern(),
    // Sivan
    HolidayRule::day(Sivan, 5, ErevShavuos),
    HolidayRule::day(Sivan, 6, Shavuos),
    HolidayRule::day(Sivan, 7, Shavuos).diaspora(),
    // Tammuz
    HolidayRule::day(Tammuz, 17, SeventeenOfTammuz).not_on(&[Saturday]),
    HolidayRule::day(Tammuz, 18, SeventeenOfTammuz).on(Sunday),
    // Av
    HolidayRule::day(Av, 9, TishaBeav).not_on(&[Saturday]),
    HolidayRule::day(Av, 10, TishaBeav).on(Sunday),
    HolidayRule::day(Av, 15, TuBeav),
    // Elul
    HolidayRule::day(Elul, 29, ErevRoshHashana),
    // Tishrei
    HolidayRule::days(Tishrei, 1, 2, RoshHashana),
    HolidayRule::day(Tishrei, 3, FastOfGedalyah).not_on(&[Saturday]),
    HolidayRule::day(Tishrei, 4, FastOfGedalyah).on(Sunday),
    HolidayRule::day(Tishrei, 9, ErevYomKippur),
    HolidayRule::day(Tishrei, 10, YomKippur),
    HolidayRule::day(Tishrei, 14, ErevSuccos),
    HolidayRule::day(Tishrei, 15, Succos),
    HolidayRule::day(Tishrei, 16, Succos).diaspora(),
    HolidayRule::days(Tishrei, 17, 20, CholHamoedSuccos),
    HolidayRule::day(Tishrei, 16, CholHamoedSuccos).israel(),
    HolidayRule::day(Tishrei, 21, HoshanaRabba),
    HolidayRule::day(Tishrei, 22, SheminiAtzeres),
    HolidayRule::day(Tishrei, 23, SimchasTorah).diaspora(),
    // Kislev and Teves
    HolidayRule::days(Kislev, 25, 30, Chanukah),
    HolidayRule::days(Teves, 1, 2, Chanukah),
    HolidayRule::day(Teves, 3, Chanukah).year(YearGuard::KislevShort),
    HolidayRule::day(Teves, 10, TenthOfTeves),
    // Shevat
    HolidayRule::day(Shevat, 15, TuBeshvat),
    // Adar of a common year. The fast moves back to Thursday from Friday or Shabbos.
    HolidayRule::days(Adar, 11, 12, FastOfEsther).on(Thursday).year(YearGuard::Common),
    HolidayRule::day(Adar, 13, FastOfEsther).not_on(FRIDAY_OR_SHABBOS).year(YearGuard::Common),
    HolidayRule::day(Adar, 14, Purim).year(YearGuard::Common),
    HolidayRule::day(Adar, 15, ShushanPurim).year(YearGuard::Common),
    // Adar I
    HolidayRule::day(Adar, 14, PurimKatan).year(YearGuard::Leap),
    // Adar II
    HolidayRule::days(AdarII, 11, 12, FastOfEsther).on(Thursday),
    HolidayRule::day(AdarII, 13, FastOfEsther).not_on(FRIDAY_OR_SHABBOS),
    HolidayRule::day(AdarII, 14, Purim),
    HolidayRule::day(AdarII, 15, ShushanPurim),
];

/// Resolve the category of a day, falling back to Rosh Chodesh.
pub fn resolve_holiday(facts: &HolidayFacts, config: &HolidayConfig) -> Option<Holiday> {
    HOLIDAY_RULES
        .iter()
        .find(|rule| rule.matches(facts, config))
        .map(|rule| rule.holiday)
        .or_else(|| facts.is_rosh_chodesh().then_some(RoshChodesh))
}
