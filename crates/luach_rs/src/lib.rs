//! Convenience wrapper for the luach Hebrew calendar engine.
//!
//! High-level functions that accept `chrono::NaiveDate` directly, plus
//! re-exports of the types they return, so callers only need this crate.
//!
//! # Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use luach_rs::*;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 10, 3).unwrap();
//! let hebrew = jewish_date(date).unwrap();
//! assert_eq!(hebrew.to_string(), "1 Tishrei, 5785");
//!
//! let rosh_hashana = holiday(date, HolidayConfig::default()).unwrap();
//! assert_eq!(rosh_hashana, Some(Holiday::RoshHashana));
//! ```

pub mod convenience;
pub mod error;

pub use convenience::{
    calendar, daf_yomi_bavli, daf_yomi_yerushalmi, holiday, jewish_date, molad, today,
};
pub use error::LuachError;

// Re-export the value types so callers don't need the lower crates directly.
pub use luach_base::{
    BavliDaf, BavliTractate, Daf, Holiday, HolidayConfig, JewishMonth, Kviah, MoladTime, Parsha,
    Tractate, YerushalmiDaf, YerushalmiTractate,
};
pub use luach_date::{
    DateError, JewishCalendar, JewishDate, KiddushLevana, NoTwilight, Twilight,
};
pub use luach_time::DayOfWeek;
