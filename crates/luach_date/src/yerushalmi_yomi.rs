//! Daf Yomi Yerushalmi: one page of the Jerusalem Talmud (Vilna edition) a
//! day since 2 February 1980.
//!
//! No page is learned on Yom Kippur or on the observed Tisha B'Av. Those
//! days stretch a cycle without consuming pages, so a cycle of 1554 pages
//! spans 1554 days plus every skip day inside it.

use luach_base::{
    ALL_YERUSHALMI_TRACTATES, Daf, Holiday, HolidayConfig, HolidayFacts, JewishMonth, JewishYear,
    YERUSHALMI_PAGES_PER_CYCLE, YerushalmiDaf, YerushalmiTractate, absolute_to_jewish,
    resolve_holiday,
};
use luach_time::{DayOfWeek, absolute_from_gregorian_parts, naive_date_from_absolute};
use tracing::debug;

use crate::error::DateError;
use crate::jewish_date::JewishDate;

/// Absolute day of the first Daf Yomi Yerushalmi (Berachos 1).
pub const YERUSHALMI_CYCLE_START: i64 = absolute_from_gregorian_parts(1980, 2, 2);

/// Page studied on `date`, or `None` on Yom Kippur and Tisha B'Av.
///
/// # Errors
///
/// Returns [`DateError::BeforeCycleStart`] for other dates before 2 February 1980.
pub fn daf_yomi_yerushalmi(date: &JewishDate) -> Result<Option<YerushalmiDaf>, DateError> {
    if is_skip_day(date) {
        return Ok(None);
    }
    let absolute = date.absolute_day();
    if absolute < YERUSHALMI_CYCLE_START {
        return Err(DateError::BeforeCycleStart {
            cycle: "Daf Yomi Yerushalmi",
            date: date.to_naive_date()?,
            start: naive_date_from_absolute(YERUSHALMI_CYCLE_START)?,
        });
    }

    let mut cycle = 1;
    let mut cycle_start = YERUSHALMI_CYCLE_START;
    let mut next_cycle = cycle_end(cycle_start)?;
    while absolute >= next_cycle {
        cycle += 1;
        cycle_start = next_cycle;
        next_cycle = cycle_end(cycle_start)?;
    }
    debug!(cycle, cycle_start, next_cycle, "located daf yomi yerushalmi cycle");

    // Below the cycle's page count: the cycle end covers every page day.
    let page_days = absolute - cycle_start - skip_days_between(cycle_start, absolute)?;
    let mut remaining = page_days as u32;
    let last = YerushalmiTractate::Nidah;
    for &tractate in &ALL_YERUSHALMI_TRACTATES[..ALL_YERUSHALMI_TRACTATES.len() - 1] {
        let pages = tractate.page_count();
        if remaining < pages {
            return Ok(Some(Daf::new(tractate, remaining + 1)));
        }
        remaining -= pages;
    }
    debug_assert!(
        remaining < last.page_count(),
        "yerushalmi page table is shorter than cycle {cycle}"
    );
    Ok(Some(Daf::new(last, remaining + 1)))
}

/// Yom Kippur or the observed Tisha B'Av.
fn is_skip_day(date: &JewishDate) -> bool {
    let facts = HolidayFacts::new(
        date.year_info(),
        date.jewish_month(),
        date.jewish_day_of_month(),
        date.day_of_week(),
    );
    matches!(
        resolve_holiday(&facts, &HolidayConfig::default()),
        Some(Holiday::YomKippur | Holiday::TishaBeav)
    )
}

/// Skip days in `start..end`.
fn skip_days_between(start: i64, end: i64) -> Result<i64, DateError> {
    let (first_year, _, _) = absolute_to_jewish(start)?;
    let (last_year, _, _) = absolute_to_jewish(end)?;
    let mut count = 0;
    for year in first_year..=last_year {
        let info = JewishYear::new(year);
        let yom_kippur = info.to_absolute(JewishMonth::Tishrei, 10);
        let mut tisha_beav = info.to_absolute(JewishMonth::Av, 9);
        if DayOfWeek::from_absolute(tisha_beav) == DayOfWeek::Saturday {
            tisha_beav += 1;
        }
        count += [yom_kippur, tisha_beav]
            .into_iter()
            .filter(|day| (start..end).contains(day))
            .count() as i64;
    }
    Ok(count)
}

/// First day after the cycle beginning on `start`.
///
/// Extending the cycle to cover its skip days can pull in further skip days,
/// so the end is grown until it stops moving.
fn cycle_end(start: i64) -> Result<i64, DateError> {
    let pages = i64::from(YERUSHALMI_PAGES_PER_CYCLE);
    let mut end = start + pages;
    loop {
        let extended = start + pages + skip_days_between(start, end)?;
        if extended == end {
            return Ok(end);
        }
        end = extended;
    }
}
