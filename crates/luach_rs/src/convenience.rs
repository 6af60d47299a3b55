use chrono::{DateTime, FixedOffset, NaiveDate};
use luach_base::{BavliDaf, Holiday, HolidayConfig, JewishMonth, YerushalmiDaf};
use luach_date::{JewishCalendar, JewishDate};

use crate::error::LuachError;

/// Hebrew date of a civil date.
pub fn jewish_date(date: NaiveDate) -> Result<JewishDate, LuachError> {
    Ok(JewishDate::from_naive_date(date)?)
}

/// Hebrew date of today on the local clock.
pub fn today() -> Result<JewishDate, LuachError> {
    Ok(JewishDate::today()?)
}

/// Calendar for a civil date under `config`.
pub fn calendar(date: NaiveDate, config: HolidayConfig) -> Result<JewishCalendar, LuachError> {
    Ok(JewishCalendar::with_config(jewish_date(date)?, config))
}

/// Holiday, fast or Rosh Chodesh on a civil date.
pub fn holiday(date: NaiveDate, config: HolidayConfig) -> Result<Option<Holiday>, LuachError> {
    Ok(calendar(date, config)?.yom_tov_index())
}

/// Daf Yomi Bavli page for a civil date.
pub fn daf_yomi_bavli(date: NaiveDate) -> Result<BavliDaf, LuachError> {
    Ok(luach_date::daf_yomi_bavli(&jewish_date(date)?)?)
}

/// Daf Yomi Yerushalmi page for a civil date, `None` on Yom Kippur and Tisha B'Av.
pub fn daf_yomi_yerushalmi(date: NaiveDate) -> Result<Option<YerushalmiDaf>, LuachError> {
    Ok(luach_date::daf_yomi_yerushalmi(&jewish_date(date)?)?)
}

/// Molad of a Hebrew month at Jerusalem standard time (UTC+2).
///
/// Fails if `month` is Adar II in a common year.
pub fn molad(year: i32, month: JewishMonth) -> Result<DateTime<FixedOffset>, LuachError> {
    luach_base::validate_jewish_date(year, month, 1)?;
    Ok(luach_date::molad_instant(year, month)?)
}
