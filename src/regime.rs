//! Static dictionary of regimes (政權) and their era names (年號).
//!
//! Each regime contributes one line of eras, in order, sharing a year
//! table with any regime that used the same calendar. An era is placed by
//! the table year of its first year (元年) and the month it was proclaimed
//! in; it lasts until the next era of the same line, or the line's end.

use serde::Serialize;

// ── Regime ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Regime {
    WesternHan, // 西漢
    EasternHan, // 東漢
    Wei,        // 曹魏
    Shu,        // 蜀漢
    Wu,         // 孫吳
    Tang,       // 唐
}

impl Regime {
    pub fn as_chinese(&self) -> &'static str {
        match self {
            Self::WesternHan => "西漢",
            Self::EasternHan => "東漢",
            Self::Wei => "魏",
            Self::Shu => "蜀",
            Self::Wu => "吳",
            Self::Tang => "唐",
        }
    }

    /// Dynasty name prefixed to monarch titles in era aliases.
    pub fn dynasty(&self) -> &'static str {
        match self {
            Self::WesternHan | Self::EasternHan => "漢",
            Self::Wei => "魏",
            Self::Shu => "蜀",
            Self::Wu => "吳",
            Self::Tang => "唐",
        }
    }

    pub fn table(&self) -> TableId {
        match self {
            Self::WesternHan | Self::EasternHan => TableId::Han,
            Self::Wei => TableId::Wei,
            Self::Shu => TableId::Shu,
            Self::Wu => TableId::Wu,
            Self::Tang => TableId::Tang,
        }
    }
}

// ── Year table identity ──────────────────────────────────────────────

/// One compiled-in year table. The discriminant is the table's position
/// in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TableId {
    Han,
    Wei,
    Shu,
    Wu,
    Tang,
}

impl TableId {
    pub fn as_chinese(&self) -> &'static str {
        match self {
            Self::Han => "漢",
            Self::Wei => "魏",
            Self::Shu => "蜀",
            Self::Wu => "吳",
            Self::Tang => "唐",
        }
    }
}

// ── Era name entry ───────────────────────────────────────────────────

/// A single era (or an unnamed reign) of one regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EraEntry {
    /// Monarch titles; the first one is used in output.
    pub titles: &'static [&'static str],
    /// `None` for reigns counted without an era name (e.g. 漢高祖).
    pub name: Option<&'static str>,
    /// Table year of the era's first year.
    pub start_year: i32,
    /// Month the era begins in; `None` means the first month of the year.
    pub start_month: Option<&'static str>,
    /// First era year written with 載 instead of 年.
    pub zai_from: Option<u32>,
    /// Historians' 前元/中元/後元 numbering rather than a proclaimed name;
    /// never usable without the monarch title.
    pub regnal: bool,
    /// The monarch title alone also names this era.
    pub title_alias: bool,
}

impl EraEntry {
    pub const fn reign(titles: &'static [&'static str], start_year: i32) -> Self {
        Self {
            titles,
            name: None,
            start_year,
            start_month: None,
            zai_from: None,
            regnal: false,
            title_alias: true,
        }
    }

    pub const fn era(titles: &'static [&'static str], name: &'static str, start_year: i32) -> Self {
        Self {
            name: Some(name),
            title_alias: false,
            ..Self::reign(titles, start_year)
        }
    }

    pub const fn regnal(titles: &'static [&'static str], name: &'static str, start_year: i32) -> Self {
        Self {
            regnal: true,
            ..Self::era(titles, name, start_year)
        }
    }

    pub const fn from_month(self, month: &'static str) -> Self {
        Self {
            start_month: Some(month),
            ..self
        }
    }

    pub const fn with_title_alias(self) -> Self {
        Self {
            title_alias: true,
            ..self
        }
    }

    pub const fn zai_from(self, year: u32) -> Self {
        Self {
            zai_from: Some(year),
            ..self
        }
    }

    /// Name used when rendering dates, e.g. 魏明帝景初.
    pub fn canonical(&self, regime: Regime) -> String {
        let title = self.titles.first().copied().unwrap_or_default();
        format!("{}{}{}", regime.dynasty(), title, self.name.unwrap_or_default())
    }

    /// Every `<dynasty><title>[<era>]` alias. Bare era names are decided by
    /// the registry, which can see whether they are unique.
    pub fn titled_aliases(&self, regime: Regime) -> Vec<String> {
        let mut out = Vec::new();
        for title in self.titles {
            if let Some(name) = self.name {
                out.push(format!("{}{title}{name}", regime.dynasty()));
            }
            if self.title_alias {
                out.push(format!("{}{title}", regime.dynasty()));
            }
        }
        out
    }

    /// Year unit for the given era year.
    pub fn year_unit(&self, year: u32) -> char {
        match self.zai_from {
            Some(from) if year >= from => '載',
            _ => '年',
        }
    }
}

/// The succession of eras of one regime.
pub struct EraLine {
    pub regime: Regime,
    /// Table year and month at which the regime's dating stops.
    pub end: (i32, &'static str),
    pub eras: &'static [EraEntry],
}

/// All eras, in registration order: this order decides the order of
/// results when several regimes date the same day.
pub static ERA_LINES: &[EraLine] = &[
    EraLine {
        regime: Regime::WesternHan,
        end: (8, "十二月"),
        eras: &[
            EraEntry::reign(&["高祖", "高帝"], -205),
            EraEntry::reign(&["惠帝"], -193),
            EraEntry::reign(&["高后", "呂后"], -186),
            EraEntry::regnal(&["文帝"], "前元", -178).with_title_alias(),
            EraEntry::regnal(&["文帝"], "後元", -162),
            EraEntry::regnal(&["景帝"], "前元", -155).with_title_alias(),
            EraEntry::regnal(&["景帝"], "中元", -148),
            EraEntry::regnal(&["景帝"], "後元", -142),
            EraEntry::era(&["武帝"], "建元", -139),
            EraEntry::era(&["武帝"], "元光", -133),
            EraEntry::era(&["武帝"], "元朔", -127),
            EraEntry::era(&["武帝"], "元狩", -121),
            EraEntry::era(&["武帝"], "元鼎", -115),
            EraEntry::era(&["武帝"], "元封", -109),
            EraEntry::era(&["武帝"], "太初", -103),
            EraEntry::era(&["武帝"], "天漢", -99),
            EraEntry::era(&["武帝"], "太始", -95),
            EraEntry::era(&["武帝"], "征和", -91),
            EraEntry::era(&["武帝"], "後元", -87),
            EraEntry::era(&["昭帝"], "始元", -85),
            EraEntry::era(&["昭帝"], "元鳳", -79),
            EraEntry::era(&["昭帝"], "元平", -73),
            EraEntry::era(&["宣帝"], "本始", -72),
            EraEntry::era(&["宣帝"], "地節", -68),
            EraEntry::era(&["宣帝"], "元康", -64),
            EraEntry::era(&["宣帝"], "神爵", -60),
            EraEntry::era(&["宣帝"], "五鳳", -56),
            EraEntry::era(&["宣帝"], "甘露", -52),
            EraEntry::era(&["宣帝"], "黃龍", -48),
            EraEntry::era(&["元帝"], "初元", -47),
            EraEntry::era(&["元帝"], "永光", -42),
            EraEntry::era(&["元帝"], "建昭", -37),
            EraEntry::era(&["元帝"], "竟寧", -32),
            EraEntry::era(&["成帝"], "建始", -31),
            EraEntry::era(&["成帝"], "河平", -27),
            EraEntry::era(&["成帝"], "陽朔", -23),
            EraEntry::era(&["成帝"], "鴻嘉", -19),
            EraEntry::era(&["成帝"], "永始", -15),
            EraEntry::era(&["成帝"], "元延", -11),
            EraEntry::era(&["成帝"], "綏和", -7),
            EraEntry::era(&["哀帝"], "建平", -5),
            EraEntry::era(&["哀帝"], "元壽", -1),
            EraEntry::era(&["平帝"], "元始", 1),
            EraEntry::era(&["孺子嬰", "孺子"], "居攝", 6),
            EraEntry::era(&["孺子嬰", "孺子"], "初始", 8).from_month("十一月"),
        ],
    },
    EraLine {
        regime: Regime::EasternHan,
        end: (220, "十一月"),
        eras: &[
            EraEntry::era(&["光武帝"], "建武", 25).from_month("六月"),
            EraEntry::era(&["光武帝"], "建武中元", 56).from_month("四月"),
            EraEntry::era(&["明帝"], "永平", 58),
            EraEntry::era(&["章帝"], "建初", 76),
            EraEntry::era(&["章帝"], "元和", 84).from_month("八月"),
            EraEntry::era(&["章帝"], "章和", 87).from_month("七月"),
            EraEntry::era(&["和帝"], "永元", 89),
            EraEntry::era(&["和帝"], "元興", 105).from_month("四月"),
            EraEntry::era(&["殤帝"], "延平", 106),
            EraEntry::era(&["安帝"], "永初", 107),
            EraEntry::era(&["安帝"], "元初", 114),
            EraEntry::era(&["安帝"], "永寧", 120).from_month("四月"),
            EraEntry::era(&["安帝"], "建光", 121).from_month("七月"),
            EraEntry::era(&["安帝"], "延光", 122).from_month("三月"),
            EraEntry::era(&["順帝"], "永建", 126),
            EraEntry::era(&["順帝"], "陽嘉", 132).from_month("三月"),
            EraEntry::era(&["順帝"], "永和", 136),
            EraEntry::era(&["順帝"], "漢安", 142),
            EraEntry::era(&["順帝"], "建康", 144).from_month("四月"),
            EraEntry::era(&["沖帝"], "永嘉", 145),
            EraEntry::era(&["質帝"], "本初", 146),
            EraEntry::era(&["桓帝"], "建和", 147),
            EraEntry::era(&["桓帝"], "和平", 150),
            EraEntry::era(&["桓帝"], "元嘉", 151),
            EraEntry::era(&["桓帝"], "永興", 153).from_month("五月"),
            EraEntry::era(&["桓帝"], "永壽", 155),
            EraEntry::era(&["桓帝"], "延熹", 158).from_month("六月"),
            EraEntry::era(&["桓帝"], "永康", 167).from_month("六月"),
            EraEntry::era(&["靈帝"], "建寧", 168),
            EraEntry::era(&["靈帝"], "熹平", 172).from_month("五月"),
            EraEntry::era(&["靈帝"], "光和", 178).from_month("三月"),
            EraEntry::era(&["靈帝"], "中平", 184).from_month("十二月"),
            EraEntry::era(&["獻帝"], "初平", 190),
            EraEntry::era(&["獻帝"], "興平", 194),
            EraEntry::era(&["獻帝"], "建安", 196),
            EraEntry::era(&["獻帝"], "延康", 220).from_month("三月"),
        ],
    },
    EraLine {
        regime: Regime::Wei,
        end: (265, "十二月"),
        eras: &[
            EraEntry::era(&["文帝"], "黃初", 220).from_month("十月"),
            EraEntry::era(&["明帝"], "太和", 227),
            EraEntry::era(&["明帝"], "青龍", 233).from_month("二月"),
            EraEntry::era(&["明帝"], "景初", 237).from_month("四月"),
            EraEntry::era(&["齊王"], "正始", 240),
            EraEntry::era(&["齊王"], "嘉平", 249).from_month("四月"),
            EraEntry::era(&["高貴鄉公"], "正元", 254).from_month("十月"),
            EraEntry::era(&["高貴鄉公"], "甘露", 256).from_month("六月"),
            EraEntry::era(&["元帝", "陳留王"], "景元", 260).from_month("六月"),
            EraEntry::era(&["元帝", "陳留王"], "咸熙", 264).from_month("五月"),
        ],
    },
    EraLine {
        regime: Regime::Shu,
        end: (263, "十二月"),
        eras: &[
            EraEntry::era(&["昭烈帝", "先主"], "章武", 221).from_month("四月"),
            EraEntry::era(&["後主"], "建興", 223).from_month("五月"),
            EraEntry::era(&["後主"], "延熙", 238),
            EraEntry::era(&["後主"], "景耀", 258),
            EraEntry::era(&["後主"], "炎興", 263).from_month("八月"),
        ],
    },
    EraLine {
        regime: Regime::Wu,
        end: (280, "四月"),
        eras: &[
            EraEntry::era(&["大帝"], "黃武", 222).from_month("十月"),
            EraEntry::era(&["大帝"], "黃龍", 229).from_month("四月"),
            EraEntry::era(&["大帝"], "嘉禾", 232),
            EraEntry::era(&["大帝"], "赤烏", 238).from_month("八月"),
            EraEntry::era(&["大帝"], "太元", 251).from_month("五月"),
            EraEntry::era(&["大帝"], "神鳳", 252).from_month("二月"),
            EraEntry::era(&["會稽王"], "建興", 252).from_month("四月"),
            EraEntry::era(&["會稽王"], "五鳳", 254),
            EraEntry::era(&["會稽王"], "太平", 256).from_month("十月"),
            EraEntry::era(&["景帝"], "永安", 258).from_month("十月"),
            EraEntry::era(&["末帝", "歸命侯"], "元興", 264).from_month("七月"),
            EraEntry::era(&["末帝", "歸命侯"], "甘露", 265).from_month("四月"),
            EraEntry::era(&["末帝", "歸命侯"], "寶鼎", 266).from_month("八月"),
            EraEntry::era(&["末帝", "歸命侯"], "建衡", 269).from_month("十月"),
            EraEntry::era(&["末帝", "歸命侯"], "鳳凰", 272),
            EraEntry::era(&["末帝", "歸命侯"], "天冊", 275),
            EraEntry::era(&["末帝", "歸命侯"], "天璽", 276).from_month("七月"),
            EraEntry::era(&["末帝", "歸命侯"], "天紀", 277),
        ],
    },
    EraLine {
        regime: Regime::Tang,
        end: (763, "十二月"),
        eras: &[
            EraEntry::era(&["玄宗"], "天寶", 742).zai_from(3),
            EraEntry::era(&["肅宗"], "至德", 756).from_month("七月").zai_from(1),
            EraEntry::era(&["肅宗"], "乾元", 758).from_month("二月"),
            EraEntry::era(&["肅宗"], "上元", 760).from_month("閏三月"),
            EraEntry::reign(&["肅宗"], 762).from_month("建子月"),
            EraEntry::era(&["代宗"], "寶應", 762).from_month("四月"),
            EraEntry::era(&["代宗"], "廣德", 763).from_month("七月"),
            EraEntry::era(&["代宗"], "永泰", 765),
            EraEntry::era(&["代宗"], "大曆", 766).from_month("十一月"),
        ],
    },
];

/// Build a regex alternation matching any of the given names.
/// Sorted by length descending so "漢光武帝建武中元" matches before "漢光武帝建武".
pub fn build_era_regex<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    let mut names: Vec<&str> = names.into_iter().collect();
    names.sort_by_key(|b| std::cmp::Reverse(b.chars().count()));
    names.dedup();
    let escaped: Vec<String> = names.iter().map(|n| regex::escape(n)).collect();
    format!("(?:{})", escaped.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(name: &str) -> (Regime, &'static EraEntry) {
        ERA_LINES
            .iter()
            .flat_map(|l| l.eras.iter().map(move |e| (l.regime, e)))
            .find(|(_, e)| e.name == Some(name))
            .unwrap()
    }

    #[test]
    fn test_canonical_names() {
        let (r, e) = find("景初");
        assert_eq!(e.canonical(r), "魏明帝景初");
        let (r, e) = find("元始");
        assert_eq!(e.canonical(r), "漢平帝元始");
        let first = &ERA_LINES[0].eras[0];
        assert_eq!(first.canonical(Regime::WesternHan), "漢高祖");
    }

    #[test]
    fn test_titled_aliases() {
        let (r, e) = find("章武");
        assert_eq!(e.titled_aliases(r), ["蜀昭烈帝章武", "蜀先主章武"]);
        let wendi = &ERA_LINES[0].eras[3];
        assert_eq!(wendi.titled_aliases(Regime::WesternHan), ["漢文帝前元", "漢文帝"]);
        let gaozu = &ERA_LINES[0].eras[0];
        assert_eq!(gaozu.titled_aliases(Regime::WesternHan), ["漢高祖", "漢高帝"]);
    }

    #[test]
    fn test_year_unit() {
        let (_, tianbao) = find("天寶");
        assert_eq!(tianbao.year_unit(2), '年');
        assert_eq!(tianbao.year_unit(3), '載');
        let (_, zhide) = find("至德");
        assert_eq!(zhide.year_unit(1), '載');
        let (_, qianyuan) = find("乾元");
        assert_eq!(qianyuan.year_unit(1), '年');
    }

    #[test]
    fn test_lines_are_chronological() {
        for line in ERA_LINES {
            for pair in line.eras.windows(2) {
                assert!(pair[0].start_year <= pair[1].start_year);
            }
            let last = line.eras.last().unwrap();
            assert!(last.start_year <= line.end.0 || line.regime == Regime::Tang);
        }
    }

    #[test]
    fn test_build_era_regex() {
        let re = regex::Regex::new(&build_era_regex(["漢光武帝建武", "漢光武帝建武中元"])).unwrap();
        let m = re.find("漢光武帝建武中元二年").unwrap();
        assert_eq!(m.as_str(), "漢光武帝建武中元");
    }
}
