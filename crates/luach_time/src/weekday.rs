//! Day of the week, numbered Sunday = 1 through Saturday = 7.

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum DayOfWeek {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Saturday = 7,
}

/// All seven days in order (index 0 = Sunday).
pub const ALL_DAYS_OF_WEEK: [DayOfWeek; 7] = [
    DayOfWeek::Sunday,
    DayOfWeek::Monday,
    DayOfWeek::Tuesday,
    DayOfWeek::Wednesday,
    DayOfWeek::Thursday,
    DayOfWeek::Friday,
    DayOfWeek::Saturday,
];

impl DayOfWeek {
    /// Day of the week of an absolute day number.
    ///
    /// Uses floor-mod so days before the epoch keep the seven-day rhythm.
    pub const fn from_absolute(abs: i64) -> Self {
        ALL_DAYS_OF_WEEK[abs.rem_euclid(7) as usize]
    }

    /// Day from its 1-based number (Sunday = 1).
    pub const fn from_number(number: u32) -> Option<Self> {
        match number {
            1..=7 => Some(ALL_DAYS_OF_WEEK[(number - 1) as usize]),
            _ => None,
        }
    }

    /// 1-based number (Sunday = 1 .. Saturday = 7).
    pub const fn number(self) -> u32 {
        self as u32
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// The following day, wrapping Saturday to Sunday.
    pub const fn next(self) -> Self {
        ALL_DAYS_OF_WEEK[(self as usize) % 7]
    }

    /// The preceding day, wrapping Sunday to Saturday.
    pub const fn prev(self) -> Self {
        ALL_DAYS_OF_WEEK[(self as usize + 5) % 7]
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(day: chrono::Weekday) -> Self {
        ALL_DAYS_OF_WEEK[day.num_days_from_sunday() as usize]
    }
}

impl From<DayOfWeek> for chrono::Weekday {
    fn from(day: DayOfWeek) -> Self {
        match day {
            DayOfWeek::Sunday => Self::Sun,
            DayOfWeek::Monday => Self::Mon,
            DayOfWeek::Tuesday => Self::Tue,
            DayOfWeek::Wednesday => Self::Wed,
            DayOfWeek::Thursday => Self::Thu,
            DayOfWeek::Friday => Self::Fri,
            DayOfWeek::Saturday => Self::Sat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_is_monday() {
        assert_eq!(DayOfWeek::from_absolute(1), DayOfWeek::Monday);
        assert_eq!(DayOfWeek::from_absolute(0), DayOfWeek::Sunday);
    }

    #[test]
    fn negative_days_use_floor_mod() {
        assert_eq!(DayOfWeek::from_absolute(-1), DayOfWeek::Saturday);
        assert_eq!(DayOfWeek::from_absolute(-7), DayOfWeek::Sunday);
        assert_eq!(DayOfWeek::from_absolute(-8), DayOfWeek::Saturday);
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(DayOfWeek::Saturday.next(), DayOfWeek::Sunday);
        assert_eq!(DayOfWeek::Sunday.prev(), DayOfWeek::Saturday);
        for day in ALL_DAYS_OF_WEEK {
            assert_eq!(day.next().prev(), day);
        }
    }

    #[test]
    fn numbering() {
        for (i, day) in ALL_DAYS_OF_WEEK.iter().enumerate() {
            assert_eq!(day.number(), i as u32 + 1);
            assert_eq!(DayOfWeek::from_number(day.number()), Some(*day));
        }
        assert_eq!(DayOfWeek::from_number(0), None);
        assert_eq!(DayOfWeek::from_number(8), None);
    }

    #[test]
    fn chrono_round_trip() {
        for day in ALL_DAYS_OF_WEEK {
            let weekday: chrono::Weekday = day.into();
            assert_eq!(DayOfWeek::from(weekday), day);
        }
        assert_eq!(DayOfWeek::from(chrono::Weekday::Sat), DayOfWeek::Saturday);
    }
}
