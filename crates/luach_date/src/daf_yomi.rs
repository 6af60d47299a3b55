//! Daf Yomi Bavli: one page of the Babylonian Talmud a day since 11 September 1923.
//!
//! Cycles 1 to 7 ran 2702 days with a 13-page Shekalim. From 24 June 1975
//! (cycle 8) Shekalim follows the Yerushalmi pagination with 22 pages and
//! cycles run 2711 days.

use luach_base::{
    ALL_BAVLI_TRACTATES, BavliDaf, BavliTractate, Daf, SHEKALIM_LAST_PAGE_BEFORE_CYCLE_8,
};
use luach_time::{absolute_from_gregorian_parts, naive_date_from_absolute};
use tracing::debug;

use crate::error::DateError;
use crate::jewish_date::JewishDate;

/// Absolute day of the first Daf Yomi (Berachos 2).
pub const BAVLI_CYCLE_START: i64 = absolute_from_gregorian_parts(1923, 9, 11);

/// Absolute day cycle 8 began, the first with the longer Shekalim.
pub const BAVLI_SHEKALIM_CHANGE: i64 = absolute_from_gregorian_parts(1975, 6, 24);

const SHORT_CYCLE_DAYS: i64 = 2702;
const LONG_CYCLE_DAYS: i64 = 2711;

/// Page studied on `date`.
///
/// # Errors
///
/// Returns [`DateError::BeforeCycleStart`] for dates before 11 September 1923.
pub fn daf_yomi_bavli(date: &JewishDate) -> Result<BavliDaf, DateError> {
    let absolute = date.absolute_day();
    if absolute < BAVLI_CYCLE_START {
        return Err(DateError::BeforeCycleStart {
            cycle: "Daf Yomi Bavli",
            date: date.to_naive_date()?,
            start: naive_date_from_absolute(BAVLI_CYCLE_START)?,
        });
    }

    let (cycle, day_of_cycle) = if absolute >= BAVLI_SHEKALIM_CHANGE {
        let since = absolute - BAVLI_SHEKALIM_CHANGE;
        (8 + since / LONG_CYCLE_DAYS, since % LONG_CYCLE_DAYS)
    } else {
        let since = absolute - BAVLI_CYCLE_START;
        (1 + since / SHORT_CYCLE_DAYS, since % SHORT_CYCLE_DAYS)
    };
    debug!(cycle, day_of_cycle, "located daf yomi bavli cycle");

    // Each tractate starts on page 2, so it occupies `last_page - 1` days.
    // `day_of_cycle` is a remainder by the cycle length.
    let mut remaining = day_of_cycle as u32;
    let last = BavliTractate::Niddah;
    for &tractate in &ALL_BAVLI_TRACTATES[..ALL_BAVLI_TRACTATES.len() - 1] {
        let days = days_in_cycle(tractate, cycle);
        if remaining < days {
            return Ok(Daf::new(tractate, remaining + 2 + tractate.page_offset()));
        }
        remaining -= days;
    }
    debug_assert!(
        remaining < days_in_cycle(last, cycle),
        "bavli page table is shorter than cycle {cycle}"
    );
    Ok(Daf::new(last, remaining + 2 + last.page_offset()))
}

/// Days `tractate` takes in `cycle`.
const fn days_in_cycle(tractate: BavliTractate, cycle: i64) -> u32 {
    let last_page = if matches!(tractate, BavliTractate::Shekalim) && cycle <= 7 {
        SHEKALIM_LAST_PAGE_BEFORE_CYCLE_8
    } else {
        tractate.last_page()
    };
    last_page - 1
}
