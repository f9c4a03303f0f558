//! Parser for era-based date strings:
//! `<era>[<numeral>年|載[<season>][閏|後]<month>月[朔|<day name>|<sexagenary>]]`.
//!
//! The string is taken apart from the right: day, then month, then the
//! year numeral, and what remains must be a registered era alias.

use std::fmt;

use crate::civil::CivilCalendar;
use crate::error::{Error, Result};
use crate::numeral::{self, canonical_month, format_cn_number, parse_cn_number};
use crate::registry::Registry;
use crate::sexagenary;

const SEASONS: [char; 4] = ['春', '夏', '秋', '冬'];
const FIRST_DAY: &str = "初一";

/// A parsed but unresolved Chinese date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChineseDate {
    /// Era alias as written.
    pub era: String,
    /// Numeral and unit, e.g. `六年` or `三載`; the first year is `一年`.
    pub year: String,
    /// Canonical month name, e.g. `一月`, `閏八月`, `建子月`.
    pub month: String,
    /// Ordinal day name or sexagenary label.
    pub day: String,
    /// Season glyph written before the month, kept but not checked.
    pub season: Option<char>,
}

impl ChineseDate {
    pub fn year_number(&self) -> Result<u32> {
        let mut chars = self.year.chars();
        chars.next_back();
        parse_cn_number(chars.as_str())
            .filter(|n| *n >= 1)
            .ok_or_else(|| Error::malformed(&self.year, "not a year numeral"))
    }

    /// `年` or `載`.
    pub fn year_unit(&self) -> char {
        self.year.chars().last().unwrap_or('年')
    }

    /// Same date with a different day token.
    pub fn with_day(&self, day: &str) -> Self {
        Self {
            day: day.to_string(),
            ..self.clone()
        }
    }
}

impl fmt::Display for ChineseDate {
    /// Written form, with 元年 and 正月.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = match self.year_number() {
            Ok(n) => format!("{}{}", numeral::format_era_year(n), self.year_unit()),
            Err(_) => self.year.clone(),
        };
        write!(f, "{}{}", self.era, year)?;
        if let Some(season) = self.season {
            write!(f, "{season}")?;
        }
        write!(f, "{}{}", numeral::display_month(&self.month), self.day)
    }
}

fn is_day_token(s: &str) -> bool {
    sexagenary::index_of(s).is_ok() || numeral::day_index(s).is_some()
}

/// Parse an era date string. Missing parts default to the first month of
/// the year and its first day; an era name alone means its first year.
pub fn parse<C: CivilCalendar>(registry: &Registry<C>, input: &str) -> Result<ChineseDate> {
    let chars: Vec<char> = input.trim().chars().collect();
    let mut end = chars.len();

    // ── day ──
    let mut day = None;
    if end >= 2 && chars[end - 1] == '朔' && chars[end - 2] == '月' {
        day = Some(FIRST_DAY.to_string());
        end -= 1;
    } else if end >= 2 {
        let tail: String = chars[end - 2..end].iter().collect();
        if is_day_token(&tail) {
            if end < 3 || chars[end - 3] != '月' {
                return Err(Error::malformed(input, "day name must follow 月"));
            }
            day = Some(tail);
            end -= 2;
        }
    }

    // ── month ──
    let mut month = None;
    let mut season = None;
    if end > 0 && chars[end - 1] == '月' {
        let unit = chars[..end]
            .iter()
            .rposition(|c| *c == '年' || *c == '載')
            .ok_or_else(|| Error::malformed(input, "month without 年"))?;
        let mut token = &chars[unit + 1..end];
        if let Some(first) = token.first().filter(|c| SEASONS.contains(*c)) {
            season = Some(*first);
            token = &token[1..];
        }
        let name: String = token.iter().collect();
        let canonical =
            canonical_month(&name).ok_or_else(|| Error::malformed(input, "not a month name"))?;
        month = Some(canonical);
        end = unit + 1;
    }

    // ── year ──
    let body = &chars[..end];
    let (era, number, unit) = match body.last() {
        Some(&unit @ ('年' | '載')) => {
            let (era, number) = peel_year(registry, input, &body[..body.len() - 1])?;
            (era, number, unit)
        }
        _ => {
            let era: String = body.iter().collect();
            let resolved = registry
                .resolve(&era)
                .map_err(|_| Error::malformed(input, "missing 年"))?;
            let unit = resolved.era.entry.year_unit(1);
            (era, 1, unit)
        }
    };

    let month = match month {
        Some(m) => m,
        None => {
            let resolved = registry.resolve(&era)?;
            let year = resolved.year(number)?;
            year.first_month()
                .map(|m| m.name.to_string())
                .ok_or_else(|| Error::CorruptTable(format!("year {} has no months", year.label)))?
        }
    };

    Ok(ChineseDate {
        era,
        year: format!("{}{unit}", format_cn_number(number)),
        month,
        day: day.unwrap_or_else(|| FIRST_DAY.to_string()),
        season,
    })
}

/// Split `<era><numeral>` trying numerals of three, two and one glyphs.
fn peel_year<C: CivilCalendar>(
    registry: &Registry<C>,
    input: &str,
    body: &[char],
) -> Result<(String, u32)> {
    let mut unknown = None;
    for len in [3, 2, 1] {
        if body.len() <= len {
            continue;
        }
        let (era, digits) = body.split_at(body.len() - len);
        let digits: String = digits.iter().collect();
        let Some(number) = parse_cn_number(&digits).filter(|n| *n >= 1) else {
            continue;
        };
        let era: String = era.iter().collect();
        if registry.resolve(&era).is_ok() {
            return Ok((era, number));
        }
        unknown.get_or_insert(era);
    }
    match unknown {
        Some(era) => Err(Error::UnknownEra(era)),
        None => Err(Error::malformed(input, "no year numeral before 年")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        Registry::new().unwrap()
    }

    fn date(era: &str, year: &str, month: &str, day: &str) -> ChineseDate {
        ChineseDate {
            era: era.to_string(),
            year: year.to_string(),
            month: month.to_string(),
            day: day.to_string(),
            season: None,
        }
    }

    #[test]
    fn test_parse_full() {
        let r = registry();
        assert_eq!(
            parse(&r, "漢平帝元始元年正月朔").unwrap(),
            date("漢平帝元始", "一年", "一月", "初一")
        );
        assert_eq!(
            parse(&r, "漢平帝元始元年二月己酉").unwrap(),
            date("漢平帝元始", "一年", "二月", "己酉")
        );
        assert_eq!(
            parse(&r, "蜀後主建興十五年三月廿九").unwrap(),
            date("蜀後主建興", "十五年", "三月", "廿九")
        );
    }

    #[test]
    fn test_default_month_and_day() {
        let r = registry();
        assert_eq!(
            parse(&r, "漢武帝元朔六年").unwrap(),
            parse(&r, "漢武帝元朔六年十月初一").unwrap()
        );
        assert_eq!(
            parse(&r, "魏明帝景初二年").unwrap(),
            date("魏明帝景初", "二年", "一月", "初一")
        );
        assert_eq!(
            parse(&r, "漢獻帝建安十年五月").unwrap(),
            date("漢獻帝建安", "十年", "五月", "初一")
        );
    }

    #[test]
    fn test_era_only_means_first_year() {
        let r = registry();
        assert_eq!(
            parse(&r, "漢武帝元朔").unwrap(),
            date("漢武帝元朔", "一年", "十月", "初一")
        );
    }

    #[test]
    fn test_three_glyph_numeral() {
        let r = registry();
        let d = parse(&r, "漢獻帝建安二十五年").unwrap();
        assert_eq!(d.year, "二十五年");
        assert_eq!(d.year_number(), Ok(25));
        let d = parse(&r, "蜀後主延熙二十年").unwrap();
        assert_eq!(d.year_number(), Ok(20));
    }

    #[test]
    fn test_zai_unit() {
        let r = registry();
        let d = parse(&r, "唐玄宗天寶三載正月").unwrap();
        assert_eq!(d, date("唐玄宗天寶", "三載", "一月", "初一"));
        assert_eq!(d.year_unit(), '載');
        let d = parse(&r, "唐肅宗至德").unwrap();
        assert_eq!(d.year, "一載");
    }

    #[test]
    fn test_leap_intercalary_and_season() {
        let r = registry();
        let d = parse(&r, "魏明帝景初三年後十二月").unwrap();
        assert_eq!(d.month, "後十二月");
        let d = parse(&r, "魏明帝景初二年閏十二月十五").unwrap();
        assert_eq!(d.month, "閏十二月");
        let d = parse(&r, "漢平帝元始元年春正月").unwrap();
        assert_eq!(d.season, Some('春'));
        assert_eq!(d.month, "一月");
        let d = parse(&r, "唐肅宗元年建子月").unwrap();
        assert_eq!((d.year.as_str(), d.month.as_str()), ("一年", "建子月"));
    }

    #[test]
    fn test_bare_era_alias() {
        let r = registry();
        let d = parse(&r, "元始二年三月").unwrap();
        assert_eq!(d.era, "元始");
    }

    #[test]
    fn test_malformed() {
        let r = registry();
        assert!(matches!(
            parse(&r, "漢平帝元始元年己酉"),
            Err(Error::MalformedDateString { .. })
        ));
        assert!(matches!(
            parse(&r, "漢平帝元始二月"),
            Err(Error::MalformedDateString { .. })
        ));
        assert!(matches!(
            parse(&r, "漢平帝元始元年十三月"),
            Err(Error::MalformedDateString { .. })
        ));
        assert!(matches!(parse(&r, "年"), Err(Error::MalformedDateString { .. })));
        assert!(matches!(parse(&r, ""), Err(Error::MalformedDateString { .. })));
    }

    #[test]
    fn test_unknown_era() {
        let r = registry();
        assert_eq!(
            parse(&r, "晉武帝泰始元年"),
            Err(Error::UnknownEra("晉武帝泰始".to_string()))
        );
        // 建興 belongs to both 蜀 and 吳, so it is not registered bare
        assert_eq!(
            parse(&r, "建興二年"),
            Err(Error::UnknownEra("建興".to_string()))
        );
    }

    #[test]
    fn test_placeholder_year_has_no_default_month() {
        let r = registry();
        assert!(matches!(
            parse(&r, "唐代宗永泰元年"),
            Err(Error::YearOutOfRange { .. })
        ));
        assert!(parse(&r, "唐代宗永泰元年正月").is_ok());
    }

    #[test]
    fn test_display() {
        let r = registry();
        let d = parse(&r, "漢平帝元始元年正月朔").unwrap();
        assert_eq!(d.to_string(), "漢平帝元始元年正月初一");
        let d = parse(&r, "漢平帝元始元年春正月").unwrap();
        assert_eq!(d.to_string(), "漢平帝元始元年春正月初一");
    }
}
