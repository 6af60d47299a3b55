//! Integration tests for Hebrew calendar arithmetic and holiday resolution
//! against published calendars.

use luach_base::{
    CHALAKIM_PER_MONTH, HolidayConfig, HolidayFacts, JewishMonth, JewishYear, Kviah,
    absolute_to_jewish, days_in_jewish_year, jewish_to_absolute, molad,
    next_month, resolve_holiday,
};
use luach_base::Holiday::{self, *};
use luach_time::{DayOfWeek, gregorian_to_absolute};

fn greg(y: i32, m: u32, d: u32) -> i64 {
    gregorian_to_absolute(y, m, d).unwrap()
}

fn holiday_on(y: i32, m: u32, d: u32, config: HolidayConfig) -> Option<Holiday> {
    let abs = greg(y, m, d);
    let (year, month, day) = absolute_to_jewish(abs).unwrap();
    let info = JewishYear::new(year);
    let facts = HolidayFacts::new(&info, month, day, DayOfWeek::from_absolute(abs));
    resolve_holiday(&facts, &config)
}

// ---------------------------------------------------------------------------
// Year structure
// ---------------------------------------------------------------------------

#[test]
fn rosh_hashana_dates() {
    let cases = [
        (5782, (2021, 9, 7), DayOfWeek::Tuesday),
        (5783, (2022, 9, 26), DayOfWeek::Monday),
        (5784, (2023, 9, 16), DayOfWeek::Saturday),
        (5785, (2024, 10, 3), DayOfWeek::Thursday),
        (5786, (2025, 9, 23), DayOfWeek::Tuesday),
    ];
    for (year, (y, m, d), weekday) in cases {
        let abs = JewishYear::new(year).rosh_hashana();
        assert_eq!(abs, greg(y, m, d), "{year}");
        assert_eq!(DayOfWeek::from_absolute(abs), weekday, "{year}");
    }
}

#[test]
fn year_lengths_and_kviah() {
    let cases = [
        (5779, 385, Kviah::Shelaimim),
        (5781, 353, Kviah::Chaserim),
        (5782, 384, Kviah::Kesidran),
        (5783, 355, Kviah::Shelaimim),
        (5784, 383, Kviah::Chaserim),
        (5785, 355, Kviah::Shelaimim),
        (5786, 354, Kviah::Kesidran),
    ];
    for (year, length, kviah) in cases {
        assert_eq!(days_in_jewish_year(year), length, "{year}");
        assert_eq!(JewishYear::new(year).kviah(), kviah, "{year}");
    }
}

#[test]
fn rosh_hashana_never_on_sunday_wednesday_or_friday() {
    for year in 3762..7000 {
        let weekday = DayOfWeek::from_absolute(JewishYear::new(year).rosh_hashana());
        assert!(
            !matches!(weekday, DayOfWeek::Sunday | DayOfWeek::Wednesday | DayOfWeek::Friday),
            "{year}"
        );
    }
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

#[test]
fn first_gregorian_day() {
    assert_eq!(absolute_to_jewish(1), Ok((3761, JewishMonth::Teves, 18)));
    assert_eq!(jewish_to_absolute(3761, JewishMonth::Teves, 18), 1);
}

#[test]
fn every_day_round_trips_1900_to_2100() {
    let start = greg(1900, 1, 1);
    let end = greg(2100, 12, 31);
    let mut expected = absolute_to_jewish(start).unwrap();
    for abs in start..=end {
        let (year, month, day) = absolute_to_jewish(abs).unwrap();
        assert_eq!((year, month, day), expected, "abs {abs}");
        assert_eq!(jewish_to_absolute(year, month, day), abs);

        let info = JewishYear::new(year);
        expected = if day < info.days_in_month(month) {
            (year, month, day + 1)
        } else {
            let (y, m) = next_month(year, month);
            (y, m, 1)
        };
    }
}

#[test]
fn moladot_advance_by_one_mean_month() {
    let (mut year, mut month) = (5700, JewishMonth::Tishrei);
    let mut previous = molad(year, month).chalakim_since_epoch();
    for _ in 0..1200 {
        (year, month) = next_month(year, month);
        let current = molad(year, month).chalakim_since_epoch();
        assert_eq!(current - previous, CHALAKIM_PER_MONTH);
        previous = current;
    }
}

// ---------------------------------------------------------------------------
// Holidays
// ---------------------------------------------------------------------------

const DIASPORA: HolidayConfig = HolidayConfig {
    in_israel: false,
    use_modern_holidays: false,
};

const MODERN: HolidayConfig = HolidayConfig {
    in_israel: true,
    use_modern_holidays: true,
};

#[test]
fn postponed_fasts() {
    // 9 Av 5782 fell on Shabbos.
    assert_eq!(holiday_on(2022, 8, 6, DIASPORA), None);
    assert_eq!(holiday_on(2022, 8, 7, DIASPORA), Some(TishaBeav));
    // 3 Tishrei 5785 fell on Shabbos.
    assert_eq!(holiday_on(2024, 10, 5, DIASPORA), None);
    assert_eq!(holiday_on(2024, 10, 6, DIASPORA), Some(FastOfGedalyah));
    // 13 Adar II 5784 fell on Shabbos, so the fast moved back to Thursday.
    assert_eq!(holiday_on(2024, 3, 21, DIASPORA), Some(FastOfEsther));
    assert_eq!(holiday_on(2024, 3, 23, DIASPORA), None);
    assert_eq!(holiday_on(2024, 3, 24, DIASPORA), Some(Purim));
    assert_eq!(holiday_on(2024, 7, 23, DIASPORA), Some(SeventeenOfTammuz));
}

#[test]
fn chanukah_5784_ends_on_third_of_teves() {
    assert_eq!(holiday_on(2023, 12, 8, DIASPORA), Some(Chanukah));
    assert_eq!(holiday_on(2023, 12, 15, DIASPORA), Some(Chanukah));
    assert_eq!(holiday_on(2023, 12, 16, DIASPORA), None);
    // 5785 has a full Kislev.
    assert_eq!(holiday_on(2025, 1, 2, DIASPORA), Some(Chanukah));
    assert_eq!(holiday_on(2025, 1, 3, DIASPORA), None);
}

#[test]
fn modern_israeli_days() {
    // 2024: 27 Nisan on Sunday, 5 Iyar on Monday.
    assert_eq!(holiday_on(2024, 5, 6, MODERN), Some(YomHashoah));
    assert_eq!(holiday_on(2024, 5, 13, MODERN), Some(YomHazikaron));
    assert_eq!(holiday_on(2024, 5, 14, MODERN), Some(YomHaatzmaut));
    // 2025: 27 Nisan on Friday, 5 Iyar on Shabbos.
    assert_eq!(holiday_on(2025, 4, 24, MODERN), Some(YomHashoah));
    assert_eq!(holiday_on(2025, 4, 30, MODERN), Some(YomHazikaron));
    assert_eq!(holiday_on(2025, 5, 1, MODERN), Some(YomHaatzmaut));
    assert_eq!(holiday_on(2025, 5, 1, DIASPORA), None);
}

#[test]
fn fasts_never_fall_on_shabbos() {
    for year in 5600..6000 {
        let info = JewishYear::new(year);
        let mut abs = info.rosh_hashana();
        while abs < info.rosh_hashana() + i64::from(info.length) {
            let (_, month, day) = absolute_to_jewish(abs).unwrap();
            let weekday = DayOfWeek::from_absolute(abs);
            let facts = HolidayFacts::new(&info, month, day, weekday);
            if let Some(holiday) = resolve_holiday(&facts, &DIASPORA) {
                if holiday.is_taanis() && holiday != YomKippur {
                    assert_ne!(weekday, DayOfWeek::Saturday, "{year} {month:?} {day}");
                }
            }
            abs += 1;
        }
    }
}
