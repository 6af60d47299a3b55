//! Talmud tractates and their page counts.
//!
//! This module provides:
//! - [`BavliTractate`]: the 40 tractates of the Babylonian Talmud in Daf Yomi order
//! - [`YerushalmiTractate`]: the 39 tractates of the Jerusalem Talmud (Vilna edition)
//! - [`Daf`]: a tractate and page pair

/// Tractate enumeration shared by both cycles.
pub trait Tractate: Copy + Eq + core::fmt::Debug + 'static {
    /// Every tractate in study order.
    const ALL: &'static [Self];

    /// 0-based position in study order.
    fn index(self) -> u8;

    /// Transliterated name.
    fn name(self) -> &'static str;
}

/// Babylonian Talmud tractate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum BavliTractate {
    Berachos = 0,
    Shabbos = 1,
    Eruvin = 2,
    Pesachim = 3,
    Shekalim = 4,
    Yoma = 5,
    Sukkah = 6,
    Beitzah = 7,
    RoshHashana = 8,
    Taanis = 9,
    Megillah = 10,
    MoedKatan = 11,
    Chagigah = 12,
    Yevamos = 13,
    Kesubos = 14,
    Nedarim = 15,
    Nazir = 16,
    Sotah = 17,
    Gitin = 18,
    Kiddushin = 19,
    BavaKamma = 20,
    BavaMetzia = 21,
    BavaBasra = 22,
    Sanhedrin = 23,
    Makkos = 24,
    Shevuos = 25,
    AvodahZarah = 26,
    Horiyos = 27,
    Zevachim = 28,
    Menachos = 29,
    Chullin = 30,
    Bechoros = 31,
    Arachin = 32,
    Temurah = 33,
    Kerisos = 34,
    Meilah = 35,
    Kinnim = 36,
    Tamid = 37,
    Midos = 38,
    Niddah = 39,
}
/// All 40 tractates in study order.
pub const ALL_BAVLI_TRACTATES: [BavliTractate; 40] = [
    BavliTractate::Berachos,
    BavliTractate::Shabbos,
    BavliTractate::Eruvin,
    BavliTractate::Pesachim,
    BavliTractate::Shekalim,
    BavliTractate::Yoma,
    BavliTractate::Sukkah,
    BavliTractate::Beitzah,
    BavliTractate::RoshHashana,
    BavliTractate::Taanis,
    BavliTractate::Megillah,
    BavliTractate::MoedKatan,
    BavliTractate::Chagigah,
    BavliTractate::Yevamos,
    BavliTractate::Kesubos,
    BavliTractate::Nedarim,
    BavliTractate::Nazir,
    BavliTractate::Sotah,
    BavliTractate::Gitin,
    BavliTractate::Kiddushin,
    BavliTractate::BavaKamma,
    BavliTractate::BavaMetzia,
    BavliTractate::BavaBasra,
    BavliTractate::Sanhedrin,
    BavliTractate::Makkos,
    BavliTractate::Shevuos,
    BavliTractate::AvodahZarah,
    BavliTractate::Horiyos,
    BavliTractate::Zevachim,
    BavliTractate::Menachos,
    BavliTractate::Chullin,
    BavliTractate::Bechoros,
    BavliTractate::Arachin,
    BavliTractate::Temurah,
    BavliTractate::Kerisos,
    BavliTractate::Meilah,
    BavliTractate::Kinnim,
    BavliTractate::Tamid,
    BavliTractate::Midos,
    BavliTractate::Niddah,
];
/// Last daf of each tractate. Study starts at daf 2. Kinnim, Tamid and Midos
/// are counted from 1 here and shifted by [`BavliTractate::page_offset`].
const BAVLI_LAST_PAGES: [u32; 40] = [
    64, 157, 105, 121, 22, 88, 56, 40, 35, 31, 32, 29, 27, 122, 112, 91, 66, 49, 90, 82, 119, 119,
    176, 113, 24, 49, 76, 14, 120, 110, 142, 61, 34, 34, 28, 22, 4, 9, 5, 73,
];

/// Shekalim was studied with 13 pages until the Vilna pagination (22 pages)
/// was adopted in the eighth cycle.
pub const SHEKALIM_LAST_PAGE_BEFORE_CYCLE_8: u32 = 13;

impl BavliTractate {
    /// Tractate at 0-based `index`.
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < ALL_BAVLI_TRACTATES.len() {
            Some(ALL_BAVLI_TRACTATES[index as usize])
        } else {
            None
        }
    }

    /// Transliterated name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Berachos => "Berachos",
            Self::Shabbos => "Shabbos",
            Self::Eruvin => "Eruvin",
            Self::Pesachim => "Pesachim",
            Self::Shekalim => "Shekalim",
            Self::Yoma => "Yoma",
            Self::Sukkah => "Sukkah",
            Self::Beitzah => "Beitzah",
            Self::RoshHashana => "Rosh Hashana",
            Self::Taanis => "Taanis",
            Self::Megillah => "Megillah",
            Self::MoedKatan => "Moed Katan",
            Self::Chagigah => "Chagigah",
            Self::Yevamos => "Yevamos",
            Self::Kesubos => "Kesubos",
            Self::Nedarim => "Nedarim",
            Self::Nazir => "Nazir",
            Self::Sotah => "Sotah",
            Self::Gitin => "Gitin",
            Self::Kiddushin => "Kiddushin",
            Self::BavaKamma => "Bava Kamma",
            Self::BavaMetzia => "Bava Metzia",
            Self::BavaBasra => "Bava Basra",
            Self::Sanhedrin => "Sanhedrin",
            Self::Makkos => "Makkos",
            Self::Shevuos => "Shevuos",
            Self::AvodahZarah => "Avodah Zarah",
            Self::Horiyos => "Horiyos",
            Self::Zevachim => "Zevachim",
            Self::Menachos => "Menachos",
            Self::Chullin => "Chullin",
            Self::Bechoros => "Bechoros",
            Self::Arachin => "Arachin",
            Self::Temurah => "Temurah",
            Self::Kerisos => "Kerisos",
            Self::Meilah => "Meilah",
            Self::Kinnim => "Kinnim",
            Self::Tamid => "Tamid",
            Self::Midos => "Midos",
            Self::Niddah => "Niddah",
        }
    }

    /// Last daf in the Vilna pagination, before [`Self::page_offset`].
    pub const fn last_page(self) -> u32 {
        BAVLI_LAST_PAGES[self as usize]
    }

    /// Kinnim, Tamid and Midos continue the pagination of Meilah.
    pub const fn page_offset(self) -> u32 {
        match self {
            Self::Kinnim => 21,
            Self::Tamid => 24,
            Self::Midos => 32,
            _ => 0,
        }
    }
}

impl Tractate for BavliTractate {
    const ALL: &'static [Self] = &ALL_BAVLI_TRACTATES;

    fn index(self) -> u8 {
        self as u8
    }

    fn name(self) -> &'static str {
        BavliTractate::name(self)
    }
}

/// Jerusalem Talmud tractate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum YerushalmiTractate {
    Berachos = 0,
    Peah = 1,
    Demai = 2,
    Kilayim = 3,
    Sheviis = 4,
    Terumos = 5,
    Maasros = 6,
    MaaserSheni = 7,
    Chalah = 8,
    Orlah = 9,
    Bikurim = 10,
    Shabbos = 11,
    Eruvin = 12,
    Pesachim = 13,
    Beitzah = 14,
    RoshHashanah = 15,
    Yoma = 16,
    Sukah = 17,
    Taanis = 18,
    Shekalim = 19,
    Megilah = 20,
    Chagigah = 21,
    MoedKatan = 22,
    Yevamos = 23,
    Kesuvos = 24,
    Sotah = 25,
    Nedarim = 26,
    Nazir = 27,
    Gitin = 28,
    Kidushin = 29,
    BavaKama = 30,
    BavaMetzia = 31,
    BavaBasra = 32,
    Sanhedrin = 33,
    Makos = 34,
    Shevuos = 35,
    AvodahZarah = 36,
    Horayos = 37,
    Nidah = 38,
}
/// All 39 tractates in study order.
pub const ALL_YERUSHALMI_TRACTATES: [YerushalmiTractate; 39] = [
    YerushalmiTractate::Berachos,
    YerushalmiTractate::Peah,
    YerushalmiTractate::Demai,
    YerushalmiTractate::Kilayim,
    YerushalmiTractate::Sheviis,
    YerushalmiTractate::Terumos,
    YerushalmiTractate::Maasros,
    YerushalmiTractate::MaaserSheni,
    YerushalmiTractate::Chalah,
    YerushalmiTractate::Orlah,
    YerushalmiTractate::Bikurim,
    YerushalmiTractate::Shabbos,
    YerushalmiTractate::Eruvin,
    YerushalmiTractate::Pesachim,
    YerushalmiTractate::Beitzah,
    YerushalmiTractate::RoshHashanah,
    YerushalmiTractate::Yoma,
    YerushalmiTractate::Sukah,
    YerushalmiTractate::Taanis,
    YerushalmiTractate::Shekalim,
    YerushalmiTractate::Megilah,
    YerushalmiTractate::Chagigah,
    YerushalmiTractate::MoedKatan,
    YerushalmiTractate::Yevamos,
    YerushalmiTractate::Kesuvos,
    YerushalmiTractate::Sotah,
    YerushalmiTractate::Nedarim,
    YerushalmiTractate::Nazir,
    YerushalmiTractate::Gitin,
    YerushalmiTractate::Kidushin,
    YerushalmiTractate::BavaKama,
    YerushalmiTractate::BavaMetzia,
    YerushalmiTractate::BavaBasra,
    YerushalmiTractate::Sanhedrin,
    YerushalmiTractate::Makos,
    YerushalmiTractate::Shevuos,
    YerushalmiTractate::AvodahZarah,
    YerushalmiTractate::Horayos,
    YerushalmiTractate::Nidah,
];
/// Pages per tractate in the Vilna edition. Study starts at page 1.
const YERUSHALMI_PAGES: [u32; 39] = [
    68, 37, 34, 44, 31, 59, 26, 33, 28, 20, 13, 92, 65, 71, 22, 22, 42, 26, 26, 33, 34, 22, 19, 85,
    72, 47, 40, 47, 54, 48, 44, 37, 34, 44, 9, 57, 37, 19, 13,
];

/// Pages in one Yerushalmi cycle.
pub const YERUSHALMI_PAGES_PER_CYCLE: u32 = 1554;

impl YerushalmiTractate {
    /// Tractate at 0-based `index`.
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < ALL_YERUSHALMI_TRACTATES.len() {
            Some(ALL_YERUSHALMI_TRACTATES[index as usize])
        } else {
            None
        }
    }

    /// Transliterated name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Berachos => "Berachos",
            Self::Peah => "Pe'ah",
            Self::Demai => "Demai",
            Self::Kilayim => "Kilayim",
            Self::Sheviis => "Shevi'is",
            Self::Terumos => "Terumos",
            Self::Maasros => "Ma'asros",
            Self::MaaserSheni => "Ma'aser Sheni",
            Self::Chalah => "Chalah",
            Self::Orlah => "Orlah",
            Self::Bikurim => "Bikurim",
            Self::Shabbos => "Shabbos",
            Self::Eruvin => "Eruvin",
            Self::Pesachim => "Pesachim",
            Self::Beitzah => "Beitzah",
            Self::RoshHashanah => "Rosh Hashanah",
            Self::Yoma => "Yoma",
            Self::Sukah => "Sukah",
            Self::Taanis => "Ta'anis",
            Self::Shekalim => "Shekalim",
            Self::Megilah => "Megilah",
            Self::Chagigah => "Chagigah",
            Self::MoedKatan => "Moed Katan",
            Self::Yevamos => "Yevamos",
            Self::Kesuvos => "Kesuvos",
            Self::Sotah => "Sotah",
            Self::Nedarim => "Nedarim",
            Self::Nazir => "Nazir",
            Self::Gitin => "Gitin",
            Self::Kidushin => "Kidushin",
            Self::BavaKama => "Bava Kama",
            Self::BavaMetzia => "Bava Metzia",
            Self::BavaBasra => "Bava Basra",
            Self::Sanhedrin => "Sanhedrin",
            Self::Makos => "Makos",
            Self::Shevuos => "Shevuos",
            Self::AvodahZarah => "Avodah Zarah",
            Self::Horayos => "Horayos",
            Self::Nidah => "Nidah",
        }
    }

    /// Pages studied, starting at page 1.
    pub const fn page_count(self) -> u32 {
        YERUSHALMI_PAGES[self as usize]
    }
}

impl Tractate for YerushalmiTractate {
    const ALL: &'static [Self] = &ALL_YERUSHALMI_TRACTATES;

    fn index(self) -> u8 {
        self as u8
    }

    fn name(self) -> &'static str {
        YerushalmiTractate::name(self)
    }
}

/// One daf of a study cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Daf<T> {
    /// Tractate studied.
    pub tractate: T,
    /// Page as printed.
    pub page: u32,
}

/// A page of the Babylonian Talmud.
pub type BavliDaf = Daf<BavliTractate>;
/// A page of the Jerusalem Talmud.
pub type YerushalmiDaf = Daf<YerushalmiTractate>;

impl<T: Tractate> Daf<T> {
    /// Page `page` of `tractate`.
    pub const fn new(tractate: T, page: u32) -> Self {
        Self { tractate, page }
    }

    /// 0-based tractate index.
    pub fn tractate_index(&self) -> u8 {
        self.tractate.index()
    }

    /// Transliterated tractate name.
    pub fn tractate_name(&self) -> &'static str {
        self.tractate.name()
    }
}

impl<T: Tractate> core::fmt::Display for Daf<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.tractate.name(), self.page)
    }
}
