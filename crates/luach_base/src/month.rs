//! Hebrew months.
//!
//! Months are numbered from Nisan, as in the Torah's count, even though the
//! year number changes at Tishrei. Adar II (13) exists only in leap years,
//! where Adar (12) is read as Adar I.

use crate::error::CalendarError;

/// A Hebrew month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum JewishMonth {
    Nisan = 1,
    Iyar = 2,
    Sivan = 3,
    Tammuz = 4,
    Av = 5,
    Elul = 6,
    Tishrei = 7,
    Cheshvan = 8,
    Kislev = 9,
    Teves = 10,
    Shevat = 11,
    Adar = 12,
    AdarII = 13,
}

/// All 13 months in numeric order (index 0 = Nisan).
pub const ALL_JEWISH_MONTHS: [JewishMonth; 13] = [
    JewishMonth::Nisan,
    JewishMonth::Iyar,
    JewishMonth::Sivan,
    JewishMonth::Tammuz,
    JewishMonth::Av,
    JewishMonth::Elul,
    JewishMonth::Tishrei,
    JewishMonth::Cheshvan,
    JewishMonth::Kislev,
    JewishMonth::Teves,
    JewishMonth::Shevat,
    JewishMonth::Adar,
    JewishMonth::AdarII,
];

const COMMON_YEAR_MONTHS: [JewishMonth; 12] = [
    JewishMonth::Tishrei,
    JewishMonth::Cheshvan,
    JewishMonth::Kislev,
    JewishMonth::Teves,
    JewishMonth::Shevat,
    JewishMonth::Adar,
    JewishMonth::Nisan,
    JewishMonth::Iyar,
    JewishMonth::Sivan,
    JewishMonth::Tammuz,
    JewishMonth::Av,
    JewishMonth::Elul,
];

const LEAP_YEAR_MONTHS: [JewishMonth; 13] = [
    JewishMonth::Tishrei,
    JewishMonth::Cheshvan,
    JewishMonth::Kislev,
    JewishMonth::Teves,
    JewishMonth::Shevat,
    JewishMonth::Adar,
    JewishMonth::AdarII,
    JewishMonth::Nisan,
    JewishMonth::Iyar,
    JewishMonth::Sivan,
    JewishMonth::Tammuz,
    JewishMonth::Av,
    JewishMonth::Elul,
];

/// Months of a year in calendar order, Tishrei first.
pub const fn months_of_year(leap_year: bool) -> &'static [JewishMonth] {
    if leap_year {
        &LEAP_YEAR_MONTHS
    } else {
        &COMMON_YEAR_MONTHS
    }
}

impl JewishMonth {
    /// Month from its 1-based number (Nisan = 1 .. Adar II = 13).
    pub const fn from_number(number: u32) -> Option<Self> {
        match number {
            1..=13 => Some(ALL_JEWISH_MONTHS[(number - 1) as usize]),
            _ => None,
        }
    }

    /// 1-based number (Nisan = 1 .. Adar II = 13).
    pub const fn number(self) -> u32 {
        self as u32
    }

    /// 0-based index into [`ALL_JEWISH_MONTHS`].
    pub const fn index(self) -> u8 {
        self as u8 - 1
    }

    /// Transliterated name. Adar is "Adar"; see [`JewishMonth::name_in_year`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nisan => "Nissan",
            Self::Iyar => "Iyar",
            Self::Sivan => "Sivan",
            Self::Tammuz => "Tammuz",
            Self::Av => "Av",
            Self::Elul => "Elul",
            Self::Tishrei => "Tishrei",
            Self::Cheshvan => "Cheshvan",
            Self::Kislev => "Kislev",
            Self::Teves => "Teves",
            Self::Shevat => "Shevat",
            Self::Adar => "Adar",
            Self::AdarII => "Adar II",
        }
    }

    /// Transliterated name, reading Adar as "Adar I" in a leap year.
    pub const fn name_in_year(self, leap_year: bool) -> &'static str {
        match self {
            Self::Adar if leap_year => "Adar I",
            other => other.name(),
        }
    }

    /// Next month by number. Adar is followed by Adar II and Adar II wraps to Nisan;
    /// callers handle the year-dependent rollovers.
    pub(crate) const fn successor(self) -> Self {
        ALL_JEWISH_MONTHS[(self as usize) % 13]
    }

    /// Previous month by number. Nisan wraps to Adar II.
    pub(crate) const fn predecessor(self) -> Self {
        ALL_JEWISH_MONTHS[(self as usize + 11) % 13]
    }
}

impl TryFrom<u32> for JewishMonth {
    type Error = CalendarError;

    /// Fails for any number outside 1..=13. Whether 13 is valid depends on the
    /// year, which the date constructors check separately.
    fn try_from(number: u32) -> Result<Self, Self::Error> {
        Self::from_number(number).ok_or(CalendarError::InvalidMonth {
            year: 0,
            month: number,
            last: 13,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering_round_trip() {
        for (i, month) in ALL_JEWISH_MONTHS.iter().enumerate() {
            assert_eq!(month.index() as usize, i);
            assert_eq!(JewishMonth::from_number(month.number()), Some(*month));
        }
        assert_eq!(JewishMonth::from_number(0), None);
        assert_eq!(JewishMonth::from_number(14), None);
    }

    #[test]
    fn successor_and_predecessor() {
        assert_eq!(JewishMonth::Elul.successor(), JewishMonth::Tishrei);
        assert_eq!(JewishMonth::Adar.successor(), JewishMonth::AdarII);
        assert_eq!(JewishMonth::AdarII.successor(), JewishMonth::Nisan);
        assert_eq!(JewishMonth::Nisan.predecessor(), JewishMonth::AdarII);
        assert_eq!(JewishMonth::Tishrei.predecessor(), JewishMonth::Elul);
        for month in ALL_JEWISH_MONTHS {
            assert_eq!(month.successor().predecessor(), month);
        }
    }

    #[test]
    fn year_order_starts_at_tishrei() {
        assert_eq!(months_of_year(false).len(), 12);
        assert_eq!(months_of_year(true).len(), 13);
        assert_eq!(months_of_year(true)[0], JewishMonth::Tishrei);
        assert_eq!(months_of_year(true)[6], JewishMonth::AdarII);
        assert!(!months_of_year(false).contains(&JewishMonth::AdarII));
        for pair in months_of_year(true).windows(2) {
            assert_eq!(pair[0].successor(), pair[1]);
        }
    }

    #[test]
    fn adar_names() {
        assert_eq!(JewishMonth::Adar.name_in_year(false), "Adar");
        assert_eq!(JewishMonth::Adar.name_in_year(true), "Adar I");
        assert_eq!(JewishMonth::AdarII.name_in_year(true), "Adar II");
    }

    #[test]
    fn try_from_rejects_out_of_range() {
        assert_eq!(JewishMonth::try_from(7), Ok(JewishMonth::Tishrei));
        assert!(matches!(
            JewishMonth::try_from(0),
            Err(CalendarError::InvalidMonth { month: 0, .. })
        ));
    }
}
