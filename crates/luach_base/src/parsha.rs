//! Weekly Torah portions.
//!
//! The Shabbos reading follows from the year's type: the weekday of Rosh
//! Hashana, the Cheshvan/Kislev pattern, the leap flag, and whether the
//! second day of Yom Tov is kept (outside Israel), which decides when
//! Acharei Mos or Matos falls on a second-day festival. Each of the 17
//! year types has a fixed schedule indexed by week of the year.

use luach_time::DayOfWeek;

use crate::epoch::JewishYear;
use crate::holiday_types::HolidayFacts;
use crate::month::JewishMonth;

/// A weekly Torah portion, a combined double portion, or one of the four
/// special readings of the Adar season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Parsha {
    Bereshis,
    Noach,
    LechLecha,
    Vayera,
    ChayeiSara,
    Toldos,
    Vayetzei,
    Vayishlach,
    Vayeshev,
    Miketz,
    Vayigash,
    Vayechi,
    Shemos,
    Vaera,
    Bo,
    Beshalach,
    Yisro,
    Mishpatim,
    Terumah,
    Tetzaveh,
    KiSisa,
    Vayakhel,
    Pekudei,
    Vayikra,
    Tzav,
    Shmini,
    Tazria,
    Metzora,
    AchreiMos,
    Kedoshim,
    Emor,
    Behar,
    Bechukosai,
    Bamidbar,
    Nasso,
    Behaaloscha,
    Shlach,
    Korach,
    Chukas,
    Balak,
    Pinchas,
    Matos,
    Masei,
    Devarim,
    Vaeschanan,
    Eikev,
    Reeh,
    Shoftim,
    KiSeitzei,
    KiSavo,
    Nitzavim,
    Vayeilech,
    Haazinu,
    VzosHaberacha,
    VayakhelPekudei,
    TazriaMetzora,
    AchreiMosKedoshim,
    BeharBechukosai,
    ChukasBalak,
    MatosMasei,
    NitzavimVayeilech,
    Shkalim,
    Zachor,
    Para,
    Hachodesh,
}

/// All 65 portions in reading order, followed by the combined and special readings.
pub const ALL_PARSHIYOS: [Parsha; 65] = [
    Parsha::Bereshis,
    Parsha::Noach,
    Parsha::LechLecha,
    Parsha::Vayera,
    Parsha::ChayeiSara,
    Parsha::Toldos,
    Parsha::Vayetzei,
    Parsha::Vayishlach,
    Parsha::Vayeshev,
    Parsha::Miketz,
    Parsha::Vayigash,
    Parsha::Vayechi,
    Parsha::Shemos,
    Parsha::Vaera,
    Parsha::Bo,
    Parsha::Beshalach,
    Parsha::Yisro,
    Parsha::Mishpatim,
    Parsha::Terumah,
    Parsha::Tetzaveh,
    Parsha::KiSisa,
    Parsha::Vayakhel,
    Parsha::Pekudei,
    Parsha::Vayikra,
    Parsha::Tzav,
    Parsha::Shmini,
    Parsha::Tazria,
    Parsha::Metzora,
    Parsha::AchreiMos,
    Parsha::Kedoshim,
    Parsha::Emor,
    Parsha::Behar,
    Parsha::Bechukosai,
    Parsha::Bamidbar,
    Parsha::Nasso,
    Parsha::Behaaloscha,
    Parsha::Shlach,
    Parsha::Korach,
    Parsha::Chukas,
    Parsha::Balak,
    Parsha::Pinchas,
    Parsha::Matos,
    Parsha::Masei,
    Parsha::Devarim,
    Parsha::Vaeschanan,
    Parsha::Eikev,
    Parsha::Reeh,
    Parsha::Shoftim,
    Parsha::KiSeitzei,
    Parsha::KiSavo,
    Parsha::Nitzavim,
    Parsha::Vayeilech,
    Parsha::Haazinu,
    Parsha::VzosHaberacha,
    Parsha::VayakhelPekudei,
    Parsha::TazriaMetzora,
    Parsha::AchreiMosKedoshim,
    Parsha::BeharBechukosai,
    Parsha::ChukasBalak,
    Parsha::MatosMasei,
    Parsha::NitzavimVayeilech,
    Parsha::Shkalim,
    Parsha::Zachor,
    Parsha::Para,
    Parsha::Hachodesh,
];

impl Parsha {
    /// 0-based index into [`ALL_PARSHIYOS`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Transliterated name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bereshis => "Bereshis",
            Self::Noach => "Noach",
            Self::LechLecha => "Lech Lecha",
            Self::Vayera => "Vayera",
            Self::ChayeiSara => "Chayei Sara",
            Self::Toldos => "Toldos",
            Self::Vayetzei => "Vayetzei",
            Self::Vayishlach => "Vayishlach",
            Self::Vayeshev => "Vayeshev",
            Self::Miketz => "Miketz",
            Self::Vayigash => "Vayigash",
            Self::Vayechi => "Vayechi",
            Self::Shemos => "Shemos",
            Self::Vaera => "Vaera",
            Self::Bo => "Bo",
            Self::Beshalach => "Beshalach",
            Self::Yisro => "Yisro",
            Self::Mishpatim => "Mishpatim",
            Self::Terumah => "Terumah",
            Self::Tetzaveh => "Tetzaveh",
            Self::KiSisa => "Ki Sisa",
            Self::Vayakhel => "Vayakhel",
            Self::Pekudei => "Pekudei",
            Self::Vayikra => "Vayikra",
            Self::Tzav => "Tzav",
            Self::Shmini => "Shmini",
            Self::Tazria => "Tazria",
            Self::Metzora => "Metzora",
            Self::AchreiMos => "Achrei Mos",
            Self::Kedoshim => "Kedoshim",
            Self::Emor => "Emor",
            Self::Behar => "Behar",
            Self::Bechukosai => "Bechukosai",
            Self::Bamidbar => "Bamidbar",
            Self::Nasso => "Nasso",
            Self::Behaaloscha => "Beha'aloscha",
            Self::Shlach => "Sh'lach",
            Self::Korach => "Korach",
            Self::Chukas => "Chukas",
            Self::Balak => "Balak",
            Self::Pinchas => "Pinchas",
            Self::Matos => "Matos",
            Self::Masei => "Masei",
            Self::Devarim => "Devarim",
            Self::Vaeschanan => "Vaeschanan",
            Self::Eikev => "Eikev",
            Self::Reeh => "Re'eh",
            Self::Shoftim => "Shoftim",
            Self::KiSeitzei => "Ki Seitzei",
            Self::KiSavo => "Ki Savo",
            Self::Nitzavim => "Nitzavim",
            Self::Vayeilech => "Vayeilech",
            Self::Haazinu => "Ha'Azinu",
            Self::VzosHaberacha => "Vezos Habracha",
            Self::VayakhelPekudei => "Vayakhel Pekudei",
            Self::TazriaMetzora => "Tazria Metzora",
            Self::AchreiMosKedoshim => "Achrei Mos Kedoshim",
            Self::BeharBechukosai => "Behar Bechukosai",
            Self::ChukasBalak => "Chukas Balak",
            Self::MatosMasei => "Matos Masei",
            Self::NitzavimVayeilech => "Nitzavim Vayeilech",
            Self::Shkalim => "Shekalim",
            Self::Zachor => "Zachor",
            Self::Para => "Parah",
            Self::Hachodesh => "Hachodesh",
        }
    }
}

/// Index of the year's reading schedule.
///
/// Returns `None` only for a Rosh Hashana weekday and year length that the
/// dechiyot never produce.
pub fn parsha_year_type(year: &JewishYear, in_israel: bool) -> Option<usize> {
    let short = year.is_kislev_short();
    let long = year.is_cheshvan_long();
    let year_type = match (year.leap, DayOfWeek::from_absolute(year.rosh_hashana())) {
        (true, DayOfWeek::Monday) if short => {
            if in_israel { 14 } else { 6 }
        }
        (true, DayOfWeek::Monday) if long => {
            if in_israel { 15 } else { 7 }
        }
        (true, DayOfWeek::Tuesday) => {
            if in_israel { 15 } else { 7 }
        }
        (true, DayOfWeek::Thursday) if short => 8,
        (true, DayOfWeek::Thursday) if long => 9,
        (true, DayOfWeek::Saturday) if short => 10,
        (true, DayOfWeek::Saturday) if long => {
            if in_israel { 16 } else { 11 }
        }
        (false, DayOfWeek::Monday) if short => 0,
        (false, DayOfWeek::Monday) if long => {
            if in_israel { 12 } else { 1 }
        }
        (false, DayOfWeek::Tuesday) => {
            if in_israel { 12 } else { 1 }
        }
        (false, DayOfWeek::Thursday) if long => 3,
        (false, DayOfWeek::Thursday) if !short => {
            if in_israel { 13 } else { 2 }
        }
        (false, DayOfWeek::Saturday) if short => 4,
        (false, DayOfWeek::Saturday) if long => 5,
        _ => return None,
    };
    Some(year_type)
}

/// Weekly portion read on a Shabbos, or `None` on a weekday or when a
/// festival reading replaces it.
pub fn parshah(year: &JewishYear, facts: &HolidayFacts, in_israel: bool) -> Option<Parsha> {
    if facts.weekday != DayOfWeek::Saturday {
        return None;
    }
    let schedule = schedule::YEAR_SCHEDULES[parsha_year_type(year, in_israel)?];
    let day = year.elapsed_days.rem_euclid(7) + i64::from(year.days_since_start(facts.month, facts.day));
    schedule.get((day / 7) as usize).copied().flatten()
}

/// Special reading (Shekalim, Zachor, Parah or Hachodesh) of a Shabbos, if any.
pub fn special_shabbos(facts: &HolidayFacts) -> Option<Parsha> {
    if facts.weekday != DayOfWeek::Saturday {
        return None;
    }
    let day = facts.day;
    let month_before_adar = if facts.leap_year {
        JewishMonth::Adar
    } else {
        JewishMonth::Shevat
    };
    let purim_month = if facts.leap_year {
        JewishMonth::AdarII
    } else {
        JewishMonth::Adar
    };
    if facts.month == month_before_adar && matches!(day, 25 | 27 | 29) {
        return Some(Parsha::Shkalim);
    }
    if facts.month == purim_month {
        return match day {
            1 => Some(Parsha::Shkalim),
            8 | 9 | 11 | 13 => Some(Parsha::Zachor),
            18 | 20 | 22 | 23 => Some(Parsha::Para),
            25 | 27 | 29 => Some(Parsha::Hachodesh),
            _ => None,
        };
    }
    if facts.month == JewishMonth::Nisan && day == 1 {
        return Some(Parsha::Hachodesh);
    }
    None
}

mod schedule {
    use super::Parsha::{self, *};

    /// Reading for each week of the year, by year type. Week 0 holds the days
    /// of Tishrei before the first Shabbos.
    pub(super) const YEAR_SCHEDULES: [&[Option<Parsha>]; 17] = [
        // 0: common year, Monday, Chaserim
        &[
            None, Some(Vayeilech), Some(Haazinu), None, Some(Bereshis), Some(Noach),
            Some(LechLecha), Some(Vayera), Some(ChayeiSara), Some(Toldos), Some(Vayetzei),
            Some(Vayishlach), Some(Vayeshev), Some(Miketz), Some(Vayigash), Some(Vayechi),
            Some(Shemos), Some(Vaera), Some(Bo), Some(Beshalach), Some(Yisro), Some(Mishpatim),
            Some(Terumah), Some(Tetzaveh), Some(KiSisa), Some(VayakhelPekudei), Some(Vayikra),
            Some(Tzav), None, Some(Shmini), Some(TazriaMetzora), Some(AchreiMosKedoshim),
            Some(Emor), Some(BeharBechukosai), Some(Bamidbar), Some(Nasso), Some(Behaaloscha),
            Some(Shlach), Some(Korach), Some(Chukas), Some(Balak), Some(Pinchas), Some(MatosMasei),
            Some(Devarim), Some(Vaeschanan), Some(Eikev), Some(Reeh), Some(Shoftim),
            Some(KiSeitzei), Some(KiSavo), Some(NitzavimVayeilech),
        ],
        // 1: common year, Monday Shelaimim or Tuesday, outside Israel
        &[
            None, Some(Vayeilech), Some(Haazinu), None, Some(Bereshis), Some(Noach),
            Some(LechLecha), Some(Vayera), Some(ChayeiSara), Some(Toldos), Some(Vayetzei),
            Some(Vayishlach), Some(Vayeshev), Some(Miketz), Some(Vayigash), Some(Vayechi),
            Some(Shemos), Some(Vaera), Some(Bo), Some(Beshalach), Some(Yisro), Some(Mishpatim),
            Some(Terumah), Some(Tetzaveh), Some(KiSisa), Some(VayakhelPekudei), Some(Vayikra),
            Some(Tzav), None, Some(Shmini), Some(TazriaMetzora), Some(AchreiMosKedoshim),
            Some(Emor), Some(BeharBechukosai), Some(Bamidbar), None, Some(Nasso), Some(Behaaloscha),
            Some(Shlach), Some(Korach), Some(ChukasBalak), Some(Pinchas), Some(MatosMasei),
            Some(Devarim), Some(Vaeschanan), Some(Eikev), Some(Reeh), Some(Shoftim),
            Some(KiSeitzei), Some(KiSavo), Some(NitzavimVayeilech),
        ],
        // 2: common year, Thursday Kesidran, outside Israel
        &[
            None, Some(Haazinu), None, None, Some(Bereshis), Some(Noach), Some(LechLecha),
            Some(Vayera), Some(ChayeiSara), Some(Toldos), Some(Vayetzei), Some(Vayishlach),
            Some(Vayeshev), Some(Miketz), Some(Vayigash), Some(Vayechi), Some(Shemos), Some(Vaera),
            Some(Bo), Some(Beshalach), Some(Yisro), Some(Mishpatim), Some(Terumah), Some(Tetzaveh),
            Some(KiSisa), Some(VayakhelPekudei), Some(Vayikra), Some(Tzav), None, None,
            Some(Shmini), Some(TazriaMetzora), Some(AchreiMosKedoshim), Some(Emor),
            Some(BeharBechukosai), Some(Bamidbar), Some(Nasso), Some(Behaaloscha), Some(Shlach),
            Some(Korach), Some(Chukas), Some(Balak), Some(Pinchas), Some(MatosMasei), Some(Devarim),
            Some(Vaeschanan), Some(Eikev), Some(Reeh), Some(Shoftim), Some(KiSeitzei), Some(KiSavo),
            Some(Nitzavim),
        ],
        // 3: common year, Thursday, Shelaimim
        &[
            None, Some(Haazinu), None, None, Some(Bereshis), Some(Noach), Some(LechLecha),
            Some(Vayera), Some(ChayeiSara), Some(Toldos), Some(Vayetzei), Some(Vayishlach),
            Some(Vayeshev), Some(Miketz), Some(Vayigash), Some(Vayechi), Some(Shemos), Some(Vaera),
            Some(Bo), Some(Beshalach), Some(Yisro), Some(Mishpatim), Some(Terumah), Some(Tetzaveh),
            Some(KiSisa), Some(Vayakhel), Some(Pekudei), Some(Vayikra), Some(Tzav), None,
            Some(Shmini), Some(TazriaMetzora), Some(AchreiMosKedoshim), Some(Emor),
            Some(BeharBechukosai), Some(Bamidbar), Some(Nasso), Some(Behaaloscha), Some(Shlach),
            Some(Korach), Some(Chukas), Some(Balak), Some(Pinchas), Some(MatosMasei), Some(Devarim),
            Some(Vaeschanan), Some(Eikev), Some(Reeh), Some(Shoftim), Some(KiSeitzei), Some(KiSavo),
            Some(Nitzavim),
        ],
        // 4: common year, Shabbos, Chaserim
        &[
            None, None, Some(Haazinu), None, None, Some(Bereshis), Some(Noach), Some(LechLecha),
            Some(Vayera), Some(ChayeiSara), Some(Toldos), Some(Vayetzei), Some(Vayishlach),
            Some(Vayeshev), Some(Miketz), Some(Vayigash), Some(Vayechi), Some(Shemos), Some(Vaera),
            Some(Bo), Some(Beshalach), Some(Yisro), Some(Mishpatim), Some(Terumah), Some(Tetzaveh),
            Some(KiSisa), Some(VayakhelPekudei), Some(Vayikra), Some(Tzav), None, Some(Shmini),
            Some(TazriaMetzora), Some(AchreiMosKedoshim), Some(Emor), Some(BeharBechukosai),
            Some(Bamidbar), Some(Nasso), Some(Behaaloscha), Some(Shlach), Some(Korach),
            Some(Chukas), Some(Balak), Some(Pinchas), Some(MatosMasei), Some(Devarim),
            Some(Vaeschanan), Some(Eikev), Some(Reeh), Some(Shoftim), Some(KiSeitzei), Some(KiSavo),
            Some(Nitzavim),
        ],
        // 5: common year, Shabbos, Shelaimim
        &[
            None, None, Some(Haazinu), None, None, Some(Bereshis), Some(Noach), Some(LechLecha),
            Some(Vayera), Some(ChayeiSara), Some(Toldos), Some(Vayetzei), Some(Vayishlach),
            Some(Vayeshev), Some(Miketz), Some(Vayigash), Some(Vayechi), Some(Shemos), Some(Vaera),
            Some(Bo), Some(Beshalach), Some(Yisro), Some(Mishpatim), Some(Terumah), Some(Tetzaveh),
            Some(KiSisa), Some(VayakhelPekudei), Some(Vayikra), Some(Tzav), None, Some(Shmini),
            Some(TazriaMetzora), Some(AchreiMosKedoshim), Some(Emor), Some(BeharBechukosai),
            Some(Bamidbar), Some(Nasso), Some(Behaaloscha), Some(Shlach), Some(Korach),
            Some(Chukas), Some(Balak), Some(Pinchas), Some(MatosMasei), Some(Devarim),
            Some(Vaeschanan), Some(Eikev), Some(Reeh), Some(Shoftim), Some(KiSeitzei), Some(KiSavo),
            Some(NitzavimVayeilech),
        ],
        // 6: leap year, Monday Chaserim, outside Israel
        &[
            None, Some(Vayeilech), Some(Haazinu), None, Some(Bereshis), Some(Noach),
            Some(LechLecha), Some(Vayera), Some(ChayeiSara), Some(Toldos), Some(Vayetzei),
            Some(Vayishlach), Some(Vayeshev), Some(Miketz), Some(Vayigash), Some(Vayechi),
            Some(Shemos), Some(Vaera), Some(Bo), Some(Beshalach), Some(Yisro), Some(Mishpatim),
            Some(Terumah), Some(Tetzaveh), Some(KiSisa), Some(Vayakhel), Some(Pekudei),
            Some(Vayikra), Some(Tzav), Some(Shmini), Some(Tazria), Some(Metzora), None,
            Some(AchreiMos), Some(Kedoshim), Some(Emor), Some(Behar), Some(Bechukosai),
            Some(Bamidbar), None, Some(Nasso), Some(Behaaloscha), Some(Shlach), Some(Korach),
            Some(ChukasBalak), Some(Pinchas), Some(MatosMasei), Some(Devarim), Some(Vaeschanan),
            Some(Eikev), Some(Reeh), Some(Shoftim), Some(KiSeitzei), Some(KiSavo),
            Some(NitzavimVayeilech),
        ],
        // 7: leap year, Monday Shelaimim or Tuesday, outside Israel
        &[
            None, Some(Vayeilech), Some(Haazinu), None, Some(Bereshis), Some(Noach),
            Some(LechLecha), Some(Vayera), Some(ChayeiSara), Some(Toldos), Some(Vayetzei),
            Some(Vayishlach), Some(Vayeshev), Some(Miketz), Some(Vayigash), Some(Vayechi),
            Some(Shemos), Some(Vaera), Some(Bo), Some(Beshalach), Some(Yisro), Some(Mishpatim),
            Some(Terumah), Some(Tetzaveh), Some(KiSisa), Some(Vayakhel), Some(Pekudei),
            Some(Vayikra), Some(Tzav), Some(Shmini), Some(Tazria), Some(Metzora), None, None,
            Some(AchreiMos), Some(Kedoshim), Some(Emor), Some(Behar), Some(Bechukosai),
            Some(Bamidbar), Some(Nasso), Some(Behaaloscha), Some(Shlach), Some(Korach),
            Some(Chukas), Some(Balak), Some(Pinchas), Some(MatosMasei), Some(Devarim),
            Some(Vaeschanan), Some(Eikev), Some(Reeh), Some(Shoftim), Some(KiSeitzei), Some(KiSavo),
            Some(Nitzavim),
        ],
        // 8: leap year, Thursday, Chaserim
        &[
            None, Some(Haazinu), None, None, Some(Bereshis), Some(Noach), Some(LechLecha),
            Some(Vayera), Some(ChayeiSara), Some(Toldos), Some(Vayetzei), Some(Vayishlach),
            Some(Vayeshev), Some(Miketz), Some(Vayigash), Some(Vayechi), Some(Shemos), Some(Vaera),
            Some(Bo), Some(Beshalach), Some(Yisro), Some(Mishpatim), Some(Terumah), Some(Tetzaveh),
            Some(KiSisa), Some(Vayakhel), Some(Pekudei), Some(Vayikra), Some(Tzav), Some(Shmini),
            Some(Tazria), Some(Metzora), Some(AchreiMos), None, Some(Kedoshim), Some(Emor),
            Some(Behar), Some(Bechukosai), Some(Bamidbar), Some(Nasso), Some(Behaaloscha),
            Some(Shlach), Some(Korach), Some(Chukas), Some(Balak), Some(Pinchas), Some(Matos),
            Some(Masei), Some(Devarim), Some(Vaeschanan), Some(Eikev), Some(Reeh), Some(Shoftim),
            Some(KiSeitzei), Some(KiSavo), Some(Nitzavim),
        ],
        // 9: leap year, Thursday, Shelaimim
        &[
            None, Some(Haazinu), None, None, Some(Bereshis), Some(Noach), Some(LechLecha),
            Some(Vayera), Some(ChayeiSara), Some(Toldos), Some(Vayetzei), Some(Vayishlach),
            Some(Vayeshev), Some(Miketz), Some(Vayigash), Some(Vayechi), Some(Shemos), Some(Vaera),
            Some(Bo), Some(Beshalach), Some(Yisro), Some(Mishpatim), Some(Terumah), Some(Tetzaveh),
            Some(KiSisa), Some(Vayakhel), Some(Pekudei), Some(Vayikra), Some(Tzav), Some(Shmini),
            Some(Tazria), Some(Metzora), Some(AchreiMos), None, Some(Kedoshim), Some(Emor),
            Some(Behar), Some(Bechukosai), Some(Bamidbar), Some(Nasso), Some(Behaaloscha),
            Some(Shlach), Some(Korach), Some(Chukas), Some(Balak), Some(Pinchas), Some(Matos),
            Some(Masei), Some(Devarim), Some(Vaeschanan), Some(Eikev), Some(Reeh), Some(Shoftim),
            Some(KiSeitzei), Some(KiSavo), Some(NitzavimVayeilech),
        ],
        // 10: leap year, Shabbos, Chaserim
        &[
            None, None, Some(Haazinu), None, None, Some(Bereshis), Some(Noach), Some(LechLecha),
            Some(Vayera), Some(ChayeiSara), Some(Toldos), Some(Vayetzei), Some(Vayishlach),
            Some(Vayeshev), Some(Miketz), Some(Vayigash), Some(Vayechi), Some(Shemos), Some(Vaera),
            Some(Bo), Some(Beshalach), Some(Yisro), Some(Mishpatim), Some(Terumah), Some(Tetzaveh),
            Some(KiSisa), Some(Vayakhel), Some(Pekudei), Some(Vayikra), Some(Tzav), Some(Shmini),
            Some(Tazria), Some(Metzora), None, Some(AchreiMos), Some(Kedoshim), Some(Emor),
            Some(Behar), Some(Bechukosai), Some(Bamidbar), Some(Nasso), Some(Behaaloscha),
            Some(Shlach), Some(Korach), Some(Chukas), Some(Balak), Some(Pinchas), Some(MatosMasei),
            Some(Devarim), Some(Vaeschanan), Some(Eikev), Some(Reeh), Some(Shoftim),
            Some(KiSeitzei), Some(KiSavo), Some(NitzavimVayeilech),
        ],
        // 11: leap year, Shabbos Shelaimim, outside Israel
        &[
            None, None, Some(Haazinu), None, None, Some(Bereshis), Some(Noach), Some(LechLecha),
            Some(Vayera), Some(ChayeiSara), Some(Toldos), Some(Vayetzei), Some(Vayishlach),
            Some(Vayeshev), Some(Miketz), Some(Vayigash), Some(Vayechi), Some(Shemos), Some(Vaera),
            Some(Bo), Some(Beshalach), Some(Yisro), Some(Mishpatim), Some(Terumah), Some(Tetzaveh),
            Some(KiSisa), Some(Vayakhel), Some(Pekudei), Some(Vayikra), Some(Tzav), Some(Shmini),
            Some(Tazria), Some(Metzora), None, Some(AchreiMos), Some(Kedoshim), Some(Emor),
            Some(Behar), Some(Bechukosai), Some(Bamidbar), None, Some(Nasso), Some(Behaaloscha),
            Some(Shlach), Some(Korach), Some(ChukasBalak), Some(Pinchas), Some(MatosMasei),
            Some(Devarim), Some(Vaeschanan), Some(Eikev), Some(Reeh), Some(Shoftim),
            Some(KiSeitzei), Some(KiSavo), Some(NitzavimVayeilech),
        ],
        // 12: common year, Monday Shelaimim or Tuesday, in Israel
        &[
            None, Some(Vayeilech), Some(Haazinu), None, Some(Bereshis), Some(Noach),
            Some(LechLecha), Some(Vayera), Some(ChayeiSara), Some(Toldos), Some(Vayetzei),
            Some(Vayishlach), Some(Vayeshev), Some(Miketz), Some(Vayigash), Some(Vayechi),
            Some(Shemos), Some(Vaera), Some(Bo), Some(Beshalach), Some(Yisro), Some(Mishpatim),
            Some(Terumah), Some(Tetzaveh), Some(KiSisa), Some(VayakhelPekudei), Some(Vayikra),
            Some(Tzav), None, Some(Shmini), Some(TazriaMetzora), Some(AchreiMosKedoshim),
            Some(Emor), Some(BeharBechukosai), Some(Bamidbar), Some(Nasso), Some(Behaaloscha),
            Some(Shlach), Some(Korach), Some(Chukas), Some(Balak), Some(Pinchas), Some(MatosMasei),
            Some(Devarim), Some(Vaeschanan), Some(Eikev), Some(Reeh), Some(Shoftim),
            Some(KiSeitzei), Some(KiSavo), Some(NitzavimVayeilech),
        ],
        // 13: common year, Thursday Kesidran, in Israel
        &[
            None, Some(Haazinu), None, None, Some(Bereshis), Some(Noach), Some(LechLecha),
            Some(Vayera), Some(ChayeiSara), Some(Toldos), Some(Vayetzei), Some(Vayishlach),
            Some(Vayeshev), Some(Miketz), Some(Vayigash), Some(Vayechi), Some(Shemos), Some(Vaera),
            Some(Bo), Some(Beshalach), Some(Yisro), Some(Mishpatim), Some(Terumah), Some(Tetzaveh),
            Some(KiSisa), Some(VayakhelPekudei), Some(Vayikra), Some(Tzav), None, Some(Shmini),
            Some(TazriaMetzora), Some(AchreiMosKedoshim), Some(Emor), Some(Behar), Some(Bechukosai),
            Some(Bamidbar), Some(Nasso), Some(Behaaloscha), Some(Shlach), Some(Korach),
            Some(Chukas), Some(Balak), Some(Pinchas), Some(MatosMasei), Some(Devarim),
            Some(Vaeschanan), Some(Eikev), Some(Reeh), Some(Shoftim), Some(KiSeitzei), Some(KiSavo),
            Some(Nitzavim),
        ],
        // 14: leap year, Monday Chaserim, in Israel
        &[
            None, Some(Vayeilech), Some(Haazinu), None, Some(Bereshis), Some(Noach),
            Some(LechLecha), Some(Vayera), Some(ChayeiSara), Some(Toldos), Some(Vayetzei),
            Some(Vayishlach), Some(Vayeshev), Some(Miketz), Some(Vayigash), Some(Vayechi),
            Some(Shemos), Some(Vaera), Some(Bo), Some(Beshalach), Some(Yisro), Some(Mishpatim),
            Some(Terumah), Some(Tetzaveh), Some(KiSisa), Some(Vayakhel), Some(Pekudei),
            Some(Vayikra), Some(Tzav), Some(Shmini), Some(Tazria), Some(Metzora), None,
            Some(AchreiMos), Some(Kedoshim), Some(Emor), Some(Behar), Some(Bechukosai),
            Some(Bamidbar), Some(Nasso), Some(Behaaloscha), Some(Shlach), Some(Korach),
            Some(Chukas), Some(Balak), Some(Pinchas), Some(MatosMasei), Some(Devarim),
            Some(Vaeschanan), Some(Eikev), Some(Reeh), Some(Shoftim), Some(KiSeitzei), Some(KiSavo),
            Some(NitzavimVayeilech),
        ],
        // 15: leap year, Monday Shelaimim or Tuesday, in Israel
        &[
            None, Some(Vayeilech), Some(Haazinu), None, Some(Bereshis), Some(Noach),
            Some(LechLecha), Some(Vayera), Some(ChayeiSara), Some(Toldos), Some(Vayetzei),
            Some(Vayishlach), Some(Vayeshev), Some(Miketz), Some(Vayigash), Some(Vayechi),
            Some(Shemos), Some(Vaera), Some(Bo), Some(Beshalach), Some(Yisro), Some(Mishpatim),
            Some(Terumah), Some(Tetzaveh), Some(KiSisa), Some(Vayakhel), Some(Pekudei),
            Some(Vayikra), Some(Tzav), Some(Shmini), Some(Tazria), Some(Metzora), None,
            Some(AchreiMos), Some(Kedoshim), Some(Emor), Some(Behar), Some(Bechukosai),
            Some(Bamidbar), Some(Nasso), Some(Behaaloscha), Some(Shlach), Some(Korach),
            Some(Chukas), Some(Balak), Some(Pinchas), Some(Matos), Some(Masei), Some(Devarim),
            Some(Vaeschanan), Some(Eikev), Some(Reeh), Some(Shoftim), Some(KiSeitzei), Some(KiSavo),
            Some(Nitzavim),
        ],
        // 16: leap year, Shabbos Shelaimim, in Israel
        &[
            None, None, Some(Haazinu), None, None, Some(Bereshis), Some(Noach), Some(LechLecha),
            Some(Vayera), Some(ChayeiSara), Some(Toldos), Some(Vayetzei), Some(Vayishlach),
            Some(Vayeshev), Some(Miketz), Some(Vayigash), Some(Vayechi), Some(Shemos), Some(Vaera),
            Some(Bo), Some(Beshalach), Some(Yisro), Some(Mishpatim), Some(Terumah), Some(Tetzaveh),
            Some(KiSisa), Some(Vayakhel), Some(Pekudei), Some(Vayikra), Some(Tzav), Some(Shmini),
            Some(Tazria), Some(Metzora), None, Some(AchreiMos), Some(Kedoshim), Some(Emor),
            Some(Behar), Some(Bechukosai), Some(Bamidbar), Some(Nasso), Some(Behaaloscha),
            Some(Shlach), Some(Korach), Some(Chukas), Some(Balak), Some(Pinchas), Some(MatosMasei),
            Some(Devarim), Some(Vaeschanan), Some(Eikev), Some(Reeh), Some(Shoftim),
            Some(KiSeitzei), Some(KiSavo), Some(NitzavimVayeilech),
        ],
    ];
}
