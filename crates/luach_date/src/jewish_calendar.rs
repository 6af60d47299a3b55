//! A Hebrew date read through a locale: holidays, readings, molad and Daf Yomi.

use chrono::{DateTime, FixedOffset};
use luach_base::{
    BavliDaf, Holiday, HolidayConfig, HolidayFacts, Parsha, YerushalmiDaf, is_birkas_hachamah,
    parshah, resolve_holiday, special_shabbos,
};
use luach_time::DayOfWeek;

use crate::daf_yomi::daf_yomi_bavli;
use crate::error::DateError;
use crate::jewish_date::JewishDate;
use crate::molad_time::{
    molad_instant, sof_zman_kidush_levana_15_days, sof_zman_kidush_levana_between_moldos,
    tchilas_zman_kidush_levana_3_days, tchilas_zman_kidush_levana_7_days,
};
use crate::yerushalmi_yomi::daf_yomi_yerushalmi;

/// A [`JewishDate`] paired with the [`HolidayConfig`] it is observed under.
///
/// Two calendars are equal when they name the same day under the same
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JewishCalendar {
    date: JewishDate,
    config: HolidayConfig,
}

impl JewishCalendar {
    /// Calendar for `date` outside Israel, without the modern Israeli days.
    pub fn new(date: JewishDate) -> Self {
        Self::with_config(date, HolidayConfig::default())
    }

    /// Calendar for `date` under `config`.
    pub const fn with_config(date: JewishDate, config: HolidayConfig) -> Self {
        Self { date, config }
    }

    /// The day itself.
    pub const fn date(&self) -> &JewishDate {
        &self.date
    }

    /// Locale the holidays are resolved for.
    pub const fn config(&self) -> HolidayConfig {
        self.config
    }

    /// Whether holidays follow the Israeli schedule.
    pub const fn in_israel(&self) -> bool {
        self.config.in_israel
    }

    /// Whether the modern Israeli days are reported.
    pub const fn use_modern_holidays(&self) -> bool {
        self.config.use_modern_holidays
    }

    /// Same day, kept in or outside Israel.
    pub const fn with_in_israel(self, in_israel: bool) -> Self {
        Self {
            config: HolidayConfig {
                in_israel,
                ..self.config
            },
            ..self
        }
    }

    /// Same day, with or without the modern Israeli days.
    pub const fn with_modern_holidays(self, use_modern_holidays: bool) -> Self {
        Self {
            config: self.config.with_modern_holidays(use_modern_holidays),
            ..self
        }
    }

    /// Same configuration on another day.
    pub const fn with_date(self, date: JewishDate) -> Self {
        Self { date, ..self }
    }

    fn facts(&self) -> HolidayFacts {
        HolidayFacts::new(
            self.date.year_info(),
            self.date.jewish_month(),
            self.date.jewish_day_of_month(),
            self.date.day_of_week(),
        )
    }

    // -----------------------------------------------------------------------
    // Holidays
    // -----------------------------------------------------------------------

    /// Holiday, fast or Rosh Chodesh falling on this day.
    pub fn yom_tov_index(&self) -> Option<Holiday> {
        resolve_holiday(&self.facts(), &self.config)
    }

    /// A festival day. Erev Yom Tov, fasts other than Yom Kippur, Chanukah and
    /// Rosh Chodesh are not.
    pub fn is_yom_tov(&self) -> bool {
        self.yom_tov_index()
            .is_some_and(|holiday| holiday.is_yom_tov(self.date.jewish_day_of_month()))
    }

    /// A Yom Tov on which work is forbidden.
    pub fn is_yom_tov_assur_bemelacha(&self) -> bool {
        self.yom_tov_index()
            .is_some_and(Holiday::is_yom_tov_assur_bemelacha)
    }

    /// Shabbos or a Yom Tov on which work is forbidden.
    pub fn is_assur_bemelacha(&self) -> bool {
        self.date.day_of_week() == DayOfWeek::Saturday || self.is_yom_tov_assur_bemelacha()
    }

    /// The day before a Yom Tov, including Hoshana Rabbah.
    pub fn is_erev_yom_tov(&self) -> bool {
        self.yom_tov_index()
            .is_some_and(|holiday| holiday.is_erev_yom_tov(self.date.jewish_day_of_month()))
    }

    /// First day of a two-day Yom Tov.
    pub fn is_erev_yom_tov_sheni(&self) -> bool {
        self.facts().is_erev_yom_tov_sheni(self.config.in_israel)
    }

    /// Friday, erev Yom Tov, or the first of two days of Yom Tov.
    pub fn is_tomorrow_shabbos_or_yom_tov(&self) -> bool {
        self.date.day_of_week() == DayOfWeek::Friday
            || self.is_erev_yom_tov()
            || self.is_erev_yom_tov_sheni()
    }

    /// Candles are lit this evening.
    pub fn has_candle_lighting(&self) -> bool {
        self.is_tomorrow_shabbos_or_yom_tov()
    }

    /// A public fast, Yom Kippur included.
    pub fn is_taanis(&self) -> bool {
        self.yom_tov_index().is_some_and(Holiday::is_taanis)
    }

    pub fn is_chol_hamoed(&self) -> bool {
        self.yom_tov_index().is_some_and(Holiday::is_chol_hamoed)
    }

    pub fn is_chol_hamoed_pesach(&self) -> bool {
        self.yom_tov_index() == Some(Holiday::CholHamoedPesach)
    }

    pub fn is_chol_hamoed_succos(&self) -> bool {
        self.yom_tov_index() == Some(Holiday::CholHamoedSuccos)
    }

    /// One of the eight days of Chanukah.
    pub fn is_chanukah(&self) -> bool {
        self.yom_tov_index() == Some(Holiday::Chanukah)
    }

    /// Day of Chanukah (1-8).
    pub fn day_of_chanukah(&self) -> Option<u32> {
        self.facts().day_of_chanukah()
    }

    /// The 30th of a month or the 1st of any month but Tishrei.
    pub fn is_rosh_chodesh(&self) -> bool {
        self.facts().is_rosh_chodesh()
    }

    /// The day before Rosh Chodesh.
    pub fn is_erev_rosh_chodesh(&self) -> bool {
        self.facts().is_erev_rosh_chodesh()
    }

    /// Shabbos before a Sunday Rosh Chodesh.
    pub fn is_machar_chodesh(&self) -> bool {
        self.facts().is_machar_chodesh()
    }

    /// Shabbos on which the coming month is blessed.
    pub fn is_shabbos_mevorchim(&self) -> bool {
        self.facts().is_shabbos_mevorchim()
    }

    /// 1 to 10 Tishrei.
    pub fn is_aseres_yemei_teshuva(&self) -> bool {
        self.facts().is_aseres_yemei_teshuva()
    }

    /// Day of the Omer count (1-49).
    pub fn day_of_omer(&self) -> Option<u32> {
        self.facts().day_of_omer()
    }

    /// The day Birkas Hachamah is recited, once in 28 years.
    pub fn is_birkas_hachamah(&self) -> bool {
        is_birkas_hachamah(
            self.date.jewish_year(),
            self.date.days_since_start_of_jewish_year(),
        )
    }

    // -----------------------------------------------------------------------
    // Readings
    // -----------------------------------------------------------------------

    /// Weekly portion read if this day is Shabbos.
    pub fn parshah(&self) -> Option<Parsha> {
        parshah(self.date.year_info(), &self.facts(), self.config.in_israel)
    }

    /// Shekalim, Zachor, Parah or Hachodesh if this day is one of those Shabbosos.
    pub fn special_shabbos(&self) -> Option<Parsha> {
        special_shabbos(&self.facts())
    }

    // -----------------------------------------------------------------------
    // Molad
    // -----------------------------------------------------------------------

    /// Molad of this month at Jerusalem standard time.
    pub fn molad_instant(&self) -> Result<DateTime<FixedOffset>, DateError> {
        molad_instant(self.date.jewish_year(), self.date.jewish_month())
    }

    /// Three days after this month's molad.
    pub fn tchilas_zman_kidush_levana_3_days(&self) -> Result<DateTime<FixedOffset>, DateError> {
        tchilas_zman_kidush_levana_3_days(self.date.jewish_year(), self.date.jewish_month())
    }

    /// Seven days after this month's molad.
    pub fn tchilas_zman_kidush_levana_7_days(&self) -> Result<DateTime<FixedOffset>, DateError> {
        tchilas_zman_kidush_levana_7_days(self.date.jewish_year(), self.date.jewish_month())
    }

    /// Halfway to the next molad.
    pub fn sof_zman_kidush_levana_between_moldos(
        &self,
    ) -> Result<DateTime<FixedOffset>, DateError> {
        sof_zman_kidush_levana_between_moldos(self.date.jewish_year(), self.date.jewish_month())
    }

    /// Fifteen days after this month's molad.
    pub fn sof_zman_kidush_levana_15_days(&self) -> Result<DateTime<FixedOffset>, DateError> {
        sof_zman_kidush_levana_15_days(self.date.jewish_year(), self.date.jewish_month())
    }

    // -----------------------------------------------------------------------
    // Daf Yomi
    // -----------------------------------------------------------------------

    /// Daf Yomi Bavli page for this day.
    pub fn daf_yomi_bavli(&self) -> Result<BavliDaf, DateError> {
        daf_yomi_bavli(&self.date)
    }

    /// `None` on Yom Kippur and Tisha B'Av.
    pub fn daf_yomi_yerushalmi(&self) -> Result<Option<YerushalmiDaf>, DateError> {
        daf_yomi_yerushalmi(&self.date)
    }
}

impl From<JewishDate> for JewishCalendar {
    fn from(date: JewishDate) -> Self {
        Self::new(date)
    }
}
