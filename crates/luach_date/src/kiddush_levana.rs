//! Kiddush Levana moments bounded to a single civil day.
//!
//! The free functions in [`crate::molad_time`] give raw instants. The
//! methods here answer a narrower question for a given date: does the
//! moment fall on that civil day at the observer's offset, and if it falls
//! in daylight, where does it move to? An earliest moment in daylight moves
//! forward to nightfall; a latest moment in daylight moves back to dawn.

use chrono::{DateTime, FixedOffset, TimeDelta};
use luach_base::{JewishMonth, next_month};
use tracing::trace;

use crate::error::DateError;
use crate::jewish_date::JewishDate;
use crate::molad_time::{
    local_midnight, molad_instant, sof_zman_kidush_levana_15_days,
    sof_zman_kidush_levana_between_moldos, tchilas_zman_kidush_levana_3_days,
    tchilas_zman_kidush_levana_7_days,
};

/// Source of dawn and nightfall for a civil date.
///
/// Implementations live in an astronomical layer. Returning `None` (polar
/// day or night, or no data) disables snapping for that date.
pub trait Twilight {
    fn dawn_and_nightfall(
        &self,
        date: &JewishDate,
    ) -> Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)>;
}

/// Twilight source that never snaps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoTwilight;

impl Twilight for NoTwilight {
    fn dawn_and_nightfall(
        &self,
        _date: &JewishDate,
    ) -> Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
        None
    }
}

impl<F> Twilight for F
where
    F: Fn(&JewishDate) -> Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)>,
{
    fn dawn_and_nightfall(
        &self,
        date: &JewishDate,
    ) -> Option<(DateTime<FixedOffset>, DateTime<FixedOffset>)> {
        self(date)
    }
}

/// Which way a daylight moment is pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bound {
    Earliest,
    Latest,
}

/// Day-bounded Kiddush Levana moments for an observer at a fixed UTC offset.
#[derive(Debug, Clone, Copy)]
pub struct KiddushLevana<T = NoTwilight> {
    offset: FixedOffset,
    twilight: T,
}

impl KiddushLevana<NoTwilight> {
    /// Moments at `offset` with no twilight adjustment.
    pub fn new(offset: FixedOffset) -> Self {
        Self {
            offset,
            twilight: NoTwilight,
        }
    }
}

impl<T: Twilight> KiddushLevana<T> {
    /// Moments at `offset`, kept out of daylight by `twilight`.
    pub fn with_twilight(offset: FixedOffset, twilight: T) -> Self {
        Self { offset, twilight }
    }

    /// Observer's UTC offset.
    pub const fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// The molad, if it falls on `date`.
    ///
    /// Only the first two and the last few days of a month can hold a molad;
    /// from the 27th on, the coming month's molad is tried.
    pub fn molad(&self, date: &JewishDate) -> Result<Option<DateTime<FixedOffset>>, DateError> {
        let day = date.jewish_day_of_month();
        if (3..=26).contains(&day) {
            return Ok(None);
        }
        let (year, month) = (date.jewish_year(), date.jewish_month());
        let found = self.on_day(date, molad_instant(year, month)?);
        if found.is_none() && day > 26 {
            let (year, month) = next_month(year, month);
            return Ok(self.on_day(date, molad_instant(year, month)?));
        }
        Ok(found)
    }

    /// Earliest Kiddush Levana three days after the molad, if on `date`.
    pub fn tchilas_zman_3_days(
        &self,
        date: &JewishDate,
    ) -> Result<Option<DateTime<FixedOffset>>, DateError> {
        let day = date.jewish_day_of_month();
        if (6..=29).contains(&day) {
            return Ok(None);
        }
        let (year, month) = (date.jewish_year(), date.jewish_month());
        let moment = tchilas_zman_kidush_levana_3_days(year, month)?;
        let found = self.bounded(date, moment, Bound::Earliest);
        if found.is_none() && day == 30 {
            let (year, month) = next_month(year, month);
            return Ok(self.on_day(date, tchilas_zman_kidush_levana_3_days(year, month)?));
        }
        Ok(found)
    }

    /// Earliest Kiddush Levana seven days after the molad, if on `date`.
    pub fn tchilas_zman_7_days(
        &self,
        date: &JewishDate,
    ) -> Result<Option<DateTime<FixedOffset>>, DateError> {
        self.gated(date, 4..=9, Bound::Earliest, tchilas_zman_kidush_levana_7_days)
    }

    /// Latest Kiddush Levana halfway between two moladot, if on `date`.
    pub fn sof_zman_between_moldos(
        &self,
        date: &JewishDate,
    ) -> Result<Option<DateTime<FixedOffset>>, DateError> {
        self.gated(date, 11..=16, Bound::Latest, sof_zman_kidush_levana_between_moldos)
    }

    /// Latest Kiddush Levana fifteen days after the molad, if on `date`.
    pub fn sof_zman_15_days(
        &self,
        date: &JewishDate,
    ) -> Result<Option<DateTime<FixedOffset>>, DateError> {
        self.gated(date, 11..=17, Bound::Latest, sof_zman_kidush_levana_15_days)
    }

    fn gated(
        &self,
        date: &JewishDate,
        days: core::ops::RangeInclusive<u32>,
        bound: Bound,
        moment: fn(i32, JewishMonth) -> Result<DateTime<FixedOffset>, DateError>,
    ) -> Result<Option<DateTime<FixedOffset>>, DateError> {
        if !days.contains(&date.jewish_day_of_month()) {
            return Ok(None);
        }
        let moment = moment(date.jewish_year(), date.jewish_month())?;
        Ok(self.bounded(date, moment, bound))
    }

    /// `moment` if it lies within the observer's civil day `date`.
    fn on_day(
        &self,
        date: &JewishDate,
        moment: DateTime<FixedOffset>,
    ) -> Option<DateTime<FixedOffset>> {
        let day = date.to_naive_date().ok()?;
        let start = local_midnight(day, self.offset);
        let end = start + TimeDelta::days(1);
        (start <= moment && moment <= end).then_some(moment.with_timezone(&self.offset))
    }

    fn bounded(
        &self,
        date: &JewishDate,
        moment: DateTime<FixedOffset>,
        bound: Bound,
    ) -> Option<DateTime<FixedOffset>> {
        let moment = self.on_day(date, moment)?;
        let Some((dawn, nightfall)) = self.twilight.dawn_and_nightfall(date) else {
            return Some(moment);
        };
        if dawn < moment && moment < nightfall {
            let snapped = match bound {
                Bound::Earliest => nightfall,
                Bound::Latest => dawn,
            };
            trace!(%moment, %snapped, ?bound, "kiddush levana moment falls in daylight");
            return Some(snapped);
        }
        Some(moment)
    }
}
