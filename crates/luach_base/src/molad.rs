//! Molad (mean lunar conjunction) of a Hebrew month.
//!
//! The molad is a fixed count of chalakim from molad tohu. Its day and time
//! are split out here; civil instants live in the date layer.

use crate::epoch::{
    CHALAKIM_PER_DAY, CHALAKIM_PER_HOUR, CHALAKIM_PER_MINUTE, JEWISH_EPOCH,
    chalakim_since_molad_tohu,
};
use crate::error::CalendarError;
use crate::month::JewishMonth;

/// Time of day of a molad as hours, minutes and chalakim (18 to the minute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoladTime {
    hours: u32,
    minutes: u32,
    chalakim: u32,
}

impl MoladTime {
    /// Validated constructor: hours 0..=23, minutes 0..=59, chalakim 0..=17.
    pub fn new(hours: u32, minutes: u32, chalakim: u32) -> Result<Self, CalendarError> {
        if hours > 23 || minutes > 59 || chalakim > 17 {
            return Err(CalendarError::InvalidMoladTime {
                hours,
                minutes,
                chalakim,
            });
        }
        Ok(Self {
            hours,
            minutes,
            chalakim,
        })
    }

    /// Split a count of chalakim within one day.
    const fn from_day_parts(parts: i64) -> Self {
        let hours = parts / CHALAKIM_PER_HOUR;
        let rem = parts % CHALAKIM_PER_HOUR;
        Self {
            hours: hours as u32,
            minutes: (rem / CHALAKIM_PER_MINUTE) as u32,
            chalakim: (rem % CHALAKIM_PER_MINUTE) as u32,
        }
    }

    /// Hours, 0-23.
    pub const fn hours(&self) -> u32 {
        self.hours
    }

    /// Minutes, 0-59.
    pub const fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Parts, 0-17.
    pub const fn chalakim(&self) -> u32 {
        self.chalakim
    }

    /// Chalakim since midnight.
    pub const fn total_chalakim(&self) -> i64 {
        self.hours as i64 * CHALAKIM_PER_HOUR
            + self.minutes as i64 * CHALAKIM_PER_MINUTE
            + self.chalakim as i64
    }

    /// Milliseconds since midnight, truncated. One chelek is 3 1/3 seconds.
    pub const fn milliseconds(&self) -> i64 {
        (self.hours as i64 * 60 + self.minutes as i64) * 60_000 + self.chalakim as i64 * 10_000 / 3
    }
}

impl core::fmt::Display for MoladTime {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}h {}m {}p", self.hours, self.minutes, self.chalakim)
    }
}

/// The molad of one month: its civil day and its time on that day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Molad {
    /// Hebrew year.
    pub year: i32,
    /// Hebrew month the molad begins.
    pub month: JewishMonth,
    /// Absolute day number of the civil (midnight to midnight) day.
    pub absolute_day: i64,
    /// Time on the civil clock of that day, in Jerusalem local mean time.
    pub time: MoladTime,
}

impl Molad {
    /// Chalakim from the start of absolute day 0 to this molad.
    pub const fn chalakim_since_epoch(&self) -> i64 {
        self.absolute_day * CHALAKIM_PER_DAY + self.time.total_chalakim()
    }
}

/// Hours 6 and later of the Hebrew day (which starts at 18:00) fall on the
/// next civil day.
const CIVIL_DAY_SHIFT_HOURS: i64 = 6;

/// Molad of `month` in `year`.
pub fn molad(year: i32, month: JewishMonth) -> Molad {
    let chalakim = chalakim_since_molad_tohu(year, month);
    let mut absolute_day = chalakim.div_euclid(CHALAKIM_PER_DAY) + JEWISH_EPOCH;
    let mut parts = chalakim.rem_euclid(CHALAKIM_PER_DAY);
    if parts >= CIVIL_DAY_SHIFT_HOURS * CHALAKIM_PER_HOUR {
        absolute_day += 1;
        parts -= CIVIL_DAY_SHIFT_HOURS * CHALAKIM_PER_HOUR;
    } else {
        parts += (24 - CIVIL_DAY_SHIFT_HOURS) * CHALAKIM_PER_HOUR;
    }
    Molad {
        year,
        month,
        absolute_day,
        time: MoladTime::from_day_parts(parts),
    }
}
