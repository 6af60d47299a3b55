//! Hebrew dates as values, and everything read off a single day.
//!
//! This crate provides:
//! - [`JewishDate`], an immutable day carried in both calendars at once
//! - [`JewishCalendar`], a date under a holiday locale with its predicates
//! - Molad instants and Kiddush Levana moments as `chrono` date-times
//! - Daf Yomi Bavli and Yerushalmi cycle lookups
//!
//! Arithmetic lives in `luach_base` and `luach_time`; this crate binds it to
//! civil dates and instants.

pub mod daf_yomi;
pub mod error;
pub mod jewish_calendar;
pub mod jewish_date;
pub mod kiddush_levana;
pub mod molad_time;
pub mod yerushalmi_yomi;

pub use daf_yomi::{BAVLI_CYCLE_START, BAVLI_SHEKALIM_CHANGE, daf_yomi_bavli};
pub use error::DateError;
pub use jewish_calendar::JewishCalendar;
pub use jewish_date::JewishDate;
pub use kiddush_levana::{KiddushLevana, NoTwilight, Twilight};
pub use molad_time::{
    molad_instant, sof_zman_kidush_levana_15_days, sof_zman_kidush_levana_between_moldos,
    tchilas_zman_kidush_levana_3_days, tchilas_zman_kidush_levana_7_days,
};
pub use yerushalmi_yomi::{YERUSHALMI_CYCLE_START, daf_yomi_yerushalmi};
