//! Hebrew calendar arithmetic and the fixed tables built on it.
//!
//! This crate provides:
//! - Leap years, elapsed days with the dechiyot, year and month lengths
//! - Hebrew date to absolute day number conversion and back
//! - Molad day and time of any month
//! - The holiday rule table and date-only holiday predicates
//! - Weekly Torah portion schedules
//! - Bavli and Yerushalmi tractate tables
//!
//! Everything here is integer arithmetic over absolute day numbers shared
//! with `luach_time`; civil instants are left to `luach_date`.

pub mod epoch;
pub mod error;
pub mod holiday;
pub mod holiday_types;
pub mod location;
pub mod molad;
pub mod month;
pub mod parsha;
pub mod tractate;

pub use epoch::{
    CHALAKIM_MOLAD_TOHU, CHALAKIM_PER_DAY, CHALAKIM_PER_HOUR, CHALAKIM_PER_MINUTE,
    CHALAKIM_PER_MONTH, JEWISH_EPOCH, JewishYear, Kviah, MAX_JEWISH_YEAR, absolute_to_jewish,
    chalakim_since_molad_tohu, cheshvan_kislev_kviah, days_in_jewish_month, days_in_jewish_year,
    days_since_start_of_jewish_year, is_birkas_hachamah, is_cheshvan_long, is_jewish_leap_year,
    is_kislev_short, jewish_calendar_elapsed_days, jewish_to_absolute, last_month_of_jewish_year,
    month_of_year, months_elapsed, next_month, previous_month, validate_jewish_date,
};
pub use error::CalendarError;
pub use holiday::{ALL_HOLIDAYS, HOLIDAY_RULES, Holiday, HolidayRule, resolve_holiday};
pub use holiday_types::{HolidayConfig, HolidayFacts};
pub use location::{GeoLocation, MOLAD_LOCATION};
pub use molad::{Molad, MoladTime, molad};
pub use month::{ALL_JEWISH_MONTHS, JewishMonth, months_of_year};
pub use parsha::{ALL_PARSHIYOS, Parsha, parsha_year_type, parshah, special_shabbos};
pub use tractate::{
    ALL_BAVLI_TRACTATES, ALL_YERUSHALMI_TRACTATES, BavliDaf, BavliTractate, Daf,
    SHEKALIM_LAST_PAGE_BEFORE_CYCLE_8, Tractate, YERUSHALMI_PAGES_PER_CYCLE, YerushalmiDaf,
    YerushalmiTractate,
};
