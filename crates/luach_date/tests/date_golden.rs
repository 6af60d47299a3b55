//! Integration tests for dates, holiday predicates, molad instants and the
//! Daf Yomi cycles against published calendars.

use chrono::{DateTime, FixedOffset, NaiveDate};
use luach_base::{BavliTractate, Daf, Holiday, HolidayConfig, JewishMonth, YerushalmiTractate};
use luach_date::{
    BAVLI_CYCLE_START, JewishCalendar, JewishDate, KiddushLevana, YERUSHALMI_CYCLE_START,
    daf_yomi_bavli, daf_yomi_yerushalmi, molad_instant,
};

fn date(y: i32, m: u32, d: u32) -> JewishDate {
    JewishDate::from_gregorian(y, m, d).unwrap()
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

#[test]
fn forward_then_back_is_identity_1900_to_2100() {
    let mut d = date(1900, 1, 1);
    let end = date(2100, 12, 31);
    while d < end {
        let next = d.forward();
        assert_eq!(next.absolute_day(), d.absolute_day() + 1);
        let back = next.back().unwrap();
        assert_eq!(back.jewish_year(), d.jewish_year());
        assert_eq!(back.jewish_month(), d.jewish_month());
        assert_eq!(back.jewish_day_of_month(), d.jewish_day_of_month());
        assert_eq!(back.gregorian_year(), d.gregorian_year());
        assert_eq!(back.gregorian_month(), d.gregorian_month());
        assert_eq!(back.gregorian_day_of_month(), d.gregorian_day_of_month());
        assert_eq!(back.day_of_week(), d.day_of_week());
        d = next;
    }
}

#[test]
fn naive_date_round_trip() {
    let naive = NaiveDate::from_ymd_opt(2025, 9, 23).unwrap();
    let d = JewishDate::try_from(naive).unwrap();
    assert_eq!(d.jewish_year(), 5786);
    assert_eq!(d.jewish_month(), JewishMonth::Tishrei);
    assert_eq!(d.jewish_day_of_month(), 1);
    assert_eq!(d.to_naive_date().unwrap(), naive);
    assert_eq!(d.to_string(), "1 Tishrei, 5786");
}

#[test]
fn leap_years_follow_the_metonic_cycle() {
    assert!(date(1970, 1, 1).is_jewish_leap_year()); // 5730, position 11
    assert!(!date(1971, 1, 1).is_jewish_leap_year()); // 5731, position 12
    assert!(date(2022, 1, 1).is_jewish_leap_year()); // 5782
    let positions = [3, 6, 8, 11, 14, 17, 19];
    for year in 5700..5800 {
        let position = (year - 1) % 19 + 1;
        let d = JewishDate::from_jewish(year, JewishMonth::Tishrei, 1).unwrap();
        assert_eq!(d.is_jewish_leap_year(), positions.contains(&position), "{year}");
    }
}

// ---------------------------------------------------------------------------
// Holidays
// ---------------------------------------------------------------------------

#[test]
fn core_festivals_in_every_locale() {
    let configs = [
        HolidayConfig::default(),
        HolidayConfig::israel(),
        HolidayConfig::israel().with_modern_holidays(true),
    ];
    for year in 5700..5900 {
        for config in configs {
            let on = |month, day| {
                let d = JewishDate::from_jewish(year, month, day).unwrap();
                JewishCalendar::with_config(d, config).yom_tov_index()
            };
            assert_eq!(on(JewishMonth::Tishrei, 1), Some(Holiday::RoshHashana), "{year}");
            assert_eq!(on(JewishMonth::Tishrei, 2), Some(Holiday::RoshHashana), "{year}");
            assert_eq!(on(JewishMonth::Tishrei, 15), Some(Holiday::Succos), "{year}");
            assert_eq!(on(JewishMonth::Nisan, 15), Some(Holiday::Pesach), "{year}");
        }
    }
}

#[test]
fn seventeenth_of_tammuz_on_shabbos_moves_to_sunday() {
    // 17 Tammuz 5782 fell on Shabbos, 16 July 2022.
    let shabbos = JewishCalendar::new(date(2022, 7, 16));
    assert_eq!(shabbos.date().jewish_day_of_month(), 17);
    assert_eq!(shabbos.yom_tov_index(), None);
    let sunday = JewishCalendar::new(date(2022, 7, 17));
    assert_eq!(sunday.yom_tov_index(), Some(Holiday::SeventeenOfTammuz));
    assert!(sunday.is_taanis());
}

// ---------------------------------------------------------------------------
// Molad
// ---------------------------------------------------------------------------

#[test]
fn molad_interval_is_one_mean_month() {
    // 29 days 12 hours 793 parts = 2_551_443_333.33 ms; instants are truncated
    // to whole milliseconds, so consecutive gaps differ by at most 1 ms.
    let mut d = JewishDate::from_jewish(5780, JewishMonth::Tishrei, 1).unwrap();
    let mut previous = molad_instant(d.jewish_year(), d.jewish_month()).unwrap();
    for _ in 0..120 {
        d = d.forward_months(1).unwrap();
        let current = molad_instant(d.jewish_year(), d.jewish_month()).unwrap();
        let gap = (current - previous).num_milliseconds();
        assert!((2_551_443_333..=2_551_443_334).contains(&gap), "{d}: {gap}");
        previous = current;
    }
}

#[test]
fn kiddush_levana_window_of_tishrei_5785() {
    let offset = FixedOffset::east_opt(2 * 3600).unwrap();
    let calc = KiddushLevana::new(offset);
    let parse = |s| DateTime::parse_from_rfc3339(s).unwrap();

    let mut found = Vec::new();
    let mut d = date(2024, 10, 1);
    while d < date(2024, 10, 20) {
        if let Some(moment) = calc.tchilas_zman_7_days(&d).unwrap() {
            found.push(("7 days", moment));
        }
        if let Some(moment) = calc.sof_zman_15_days(&d).unwrap() {
            found.push(("15 days", moment));
        }
        d = d.forward();
    }
    assert_eq!(
        found,
        [
            ("7 days", parse("2024-10-10T03:00:46.837+02:00")),
            ("15 days", parse("2024-10-18T03:00:46.837+02:00")),
        ]
    );
}

// ---------------------------------------------------------------------------
// Daf Yomi
// ---------------------------------------------------------------------------

#[test]
fn bavli_pages_are_continuous() {
    let start = JewishDate::from_absolute(BAVLI_CYCLE_START).unwrap();
    let mut previous = daf_yomi_bavli(&start).unwrap();
    assert_eq!(previous, Daf::new(BavliTractate::Berachos, 2));
    let mut d = start.forward();
    while d < date(2030, 1, 1) {
        let daf = daf_yomi_bavli(&d).unwrap();
        if daf.tractate == previous.tractate {
            assert_eq!(daf.page, previous.page + 1, "{d}");
        } else {
            let last = if previous.tractate == BavliTractate::Shekalim && previous.page == 13 {
                13
            } else {
                previous.tractate.last_page() + previous.tractate.page_offset()
            };
            assert_eq!(previous.page, last, "{d}");
            assert_eq!(daf.page, 2 + daf.tractate.page_offset(), "{d}");
        }
        previous = daf;
        d = d.forward();
    }
}

#[test]
fn yerushalmi_skips_do_not_shift_pages() {
    let start = JewishDate::from_absolute(YERUSHALMI_CYCLE_START).unwrap();
    let mut previous = daf_yomi_yerushalmi(&start).unwrap().unwrap();
    let mut d = start.forward();
    while d < date(2030, 1, 1) {
        match daf_yomi_yerushalmi(&d).unwrap() {
            None => {
                let holiday = JewishCalendar::new(d).yom_tov_index();
                assert!(
                    matches!(holiday, Some(Holiday::YomKippur | Holiday::TishaBeav)),
                    "{d}"
                );
            }
            Some(daf) => {
                if daf.tractate == previous.tractate {
                    assert_eq!(daf.page, previous.page + 1, "{d}");
                } else {
                    assert_eq!(previous.page, previous.tractate.page_count(), "{d}");
                    assert_eq!(daf.page, 1, "{d}");
                }
                previous = daf;
            }
        }
        d = d.forward();
    }
}

#[test]
fn yerushalmi_yom_kippur_has_no_daf_every_year() {
    for year in 5741..5860 {
        let d = JewishDate::from_jewish(year, JewishMonth::Tishrei, 10).unwrap();
        assert_eq!(daf_yomi_yerushalmi(&d).unwrap(), None, "{year}");
    }
}

#[test]
fn yerushalmi_first_cycle() {
    let d = date(1980, 2, 2);
    assert_eq!(
        daf_yomi_yerushalmi(&d).unwrap(),
        Some(Daf::new(YerushalmiTractate::Berachos, 1))
    );
}
