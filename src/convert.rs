//! Conversion between era dates and civil dates.

use log::debug;

use crate::civil::{CivilCalendar, CivilDate, Hybrid};
use crate::error::{Error, Result};
use crate::numeral::{self, format_cn_number};
use crate::parser::{self, ChineseDate};
use crate::registry::{Registry, Resolved};
use crate::sexagenary::{self, Sexagenary};
use crate::table::FilledYear;

/// Day tokens that may follow a given month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySuggestions {
    pub ordinal: Vec<&'static str>,
    pub sexagenary: Vec<Sexagenary>,
}

/// Conversion front end over a built [`Registry`].
pub struct Converter<'r, C: CivilCalendar = Hybrid> {
    registry: &'r Registry<C>,
}

struct MonthRef<'r> {
    year: &'r FilledYear,
    index: usize,
    offset: u32,
    first_day: Sexagenary,
}

impl<'r, C: CivilCalendar> Converter<'r, C> {
    pub fn new(registry: &'r Registry<C>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r Registry<C> {
        self.registry
    }

    pub fn parse(&self, s: &str) -> Result<ChineseDate> {
        parser::parse(self.registry, s)
    }

    fn month_of(&self, date: &ChineseDate) -> Result<(Resolved<'r>, MonthRef<'r>)> {
        let resolved = self.registry.resolve(&date.era)?;
        let year = resolved.year(date.year_number()?)?;
        let (offset, first_day) = year.days_from_new_year(&date.month)?;
        let index = year
            .month_index(&date.month)
            .ok_or_else(|| Error::UnknownMonth {
                month: date.month.clone(),
                year: year.label,
            })?;
        Ok((
            resolved,
            MonthRef {
                year,
                index,
                offset,
                first_day,
            },
        ))
    }

    /// Civil date of a parsed era date.
    pub fn to_date(&self, date: &ChineseDate) -> Result<CivilDate> {
        let (resolved, month) = self.month_of(date)?;
        let delta = match date.day.parse::<Sexagenary>() {
            Ok(day) => month.first_day.diff(day),
            Err(_) => numeral::day_index(&date.day)
                .ok_or_else(|| Error::InvalidDayName(date.day.clone()))? as u32,
        };
        if let Some(Ok(len)) = resolved.table.month_length(month.year, month.index) {
            if delta >= len {
                debug!("{date}: day {} runs past the {len}-day month", delta + 1);
            }
        }
        let calendar = self.registry.calendar();
        Ok(calendar.add_days(month.year.first_day, (month.offset + delta) as i64))
    }

    pub fn to_date_str(&self, s: &str) -> Result<CivilDate> {
        self.to_date(&self.parse(s)?)
    }

    /// Every era rendering of a civil date, one per era segment holding it,
    /// in registration order. Empty when no table covers the date.
    pub fn from_date(&self, date: CivilDate) -> Vec<String> {
        self.from_date_parts(date)
            .into_iter()
            .map(|d| d.to_string())
            .collect()
    }

    /// [`Self::from_date`] before rendering.
    pub fn from_date_parts(&self, date: CivilDate) -> Vec<ChineseDate> {
        let calendar = self.registry.calendar();
        let jdn = calendar.to_ordinal_day(date);
        let mut out = Vec::new();
        for segment in self.registry.segments_containing(date) {
            let resolved = self.registry.resolved(segment.era_index());
            let Some(loc) = resolved.table.locate(calendar, jdn) else {
                debug!("{} holds {date} but its table does not", segment.era);
                continue;
            };
            let Some(day) = numeral::day_name(loc.day) else {
                continue;
            };
            let number = (loc.year.label - resolved.start_civil_year() + 1) as u32;
            out.push(ChineseDate {
                era: segment.era.clone(),
                year: format!(
                    "{}{}",
                    format_cn_number(number),
                    resolved.era.entry.year_unit(number)
                ),
                month: loc.month().name.to_string(),
                day: day.to_string(),
                season: None,
            });
        }
        out
    }

    /// Number of days in the month named by `date` (its day is ignored).
    pub fn month_length(&self, date: &ChineseDate) -> Result<u32> {
        let (resolved, month) = self.month_of(date)?;
        resolved
            .table
            .month_length(month.year, month.index)
            .unwrap_or_else(|| {
                Err(Error::YearOutOfRange {
                    table: resolved.table.name(),
                    year: month.year.label + 1,
                })
            })
    }

    pub fn month_length_str(&self, s: &str) -> Result<u32> {
        self.month_length(&self.parse(s)?)
    }

    /// First and last civil day of the month named by `date`.
    pub fn month_span(&self, date: &ChineseDate) -> Result<(CivilDate, CivilDate)> {
        let first = self.to_date(&date.with_day("初一"))?;
        let len = self.month_length(date)?;
        let last = self.registry.calendar().add_days(first, len as i64 - 1);
        Ok((first, last))
    }

    /// Sexagenary label of the year `date` falls in.
    pub fn year_sexagenary(&self, date: &ChineseDate) -> Result<Sexagenary> {
        let resolved = self.registry.resolve(&date.era)?;
        let year = resolved.year(date.year_number()?)?;
        Ok(Sexagenary::of_year(year.label))
    }

    /// Admissible day tokens for the month named by `date`.
    pub fn suggest_days(&self, date: &ChineseDate) -> Result<DaySuggestions> {
        let (_, month) = self.month_of(date)?;
        let len = self.month_length(date)? as usize;
        Ok(DaySuggestions {
            ordinal: numeral::DAY_NAMES[..len].to_vec(),
            sexagenary: sexagenary::sequence(month.first_day, len),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::civil::ProlepticJulian;

    fn registry() -> Registry {
        Registry::new().unwrap()
    }

    #[test]
    fn test_to_date_scenarios() {
        let r = registry();
        let c = Converter::new(&r);
        assert_eq!(c.to_date_str("漢平帝元始元年正月朔"), Ok(CivilDate::new(1, 2, 12)));
        assert_eq!(c.to_date_str("漢平帝元始元年二月己酉"), Ok(CivilDate::new(1, 4, 3)));
        assert_eq!(c.to_date_str("魏明帝景初元年四月初一"), Ok(CivilDate::new(237, 4, 13)));
    }

    #[test]
    fn test_from_date_three_kingdoms() {
        let r = registry();
        let c = Converter::new(&r);
        assert_eq!(
            c.from_date(CivilDate::new(237, 4, 13)),
            [
                "魏明帝景初元年四月初一",
                "蜀後主建興十五年三月初一",
                "吳大帝嘉禾六年三月初一"
            ]
        );
    }

    #[test]
    fn test_month_length_scenarios() {
        let r = registry();
        let c = Converter::new(&r);
        assert_eq!(c.month_length_str("漢平帝元始元年正月"), Ok(30));
        assert_eq!(c.month_length_str("漢平帝元始元年二月"), Ok(29));
    }

    #[test]
    fn test_day_tokens() {
        let r = registry();
        let c = Converter::new(&r);
        // 己未 is the first day of 元始元年正月
        assert_eq!(c.to_date_str("漢平帝元始元年正月己未"), Ok(CivilDate::new(1, 2, 12)));
        assert_eq!(c.to_date_str("漢平帝元始元年正月初十"), Ok(CivilDate::new(1, 2, 21)));
        assert_eq!(c.to_date_str("漢平帝元始元年正月三十"), Ok(CivilDate::new(1, 3, 13)));
        let bad = ChineseDate {
            day: "初零".to_string(),
            ..c.parse("漢平帝元始元年正月").unwrap()
        };
        assert_eq!(c.to_date(&bad), Err(Error::InvalidDayName("初零".to_string())));
    }

    #[test]
    fn test_zai_and_jianzi() {
        let r = registry();
        let c = Converter::new(&r);
        let d = c.to_date_str("唐肅宗元年建子月初一").unwrap();
        assert_eq!(d, CivilDate::new(761, 12, 1));
        assert_eq!(c.from_date(d), ["唐肅宗元年建子月初一"]);
        let d = c.to_date_str("唐玄宗天寶三載正月").unwrap();
        assert_eq!(c.from_date(d), ["唐玄宗天寶三載正月初一"]);
    }

    #[test]
    fn test_month_missing_from_year() {
        let r = registry();
        let c = Converter::new(&r);
        // 景初元年 skips from 二月 to 四月
        assert_eq!(
            c.to_date_str("魏明帝景初元年三月"),
            Err(Error::UnknownMonth {
                month: "三月".to_string(),
                year: 237
            })
        );
    }

    #[test]
    fn test_year_out_of_range() {
        let r = registry();
        let c = Converter::new(&r);
        assert!(matches!(
            c.to_date_str("唐代宗永泰元年正月"),
            Err(Error::YearOutOfRange { table: "唐", year: 765 })
        ));
        assert!(matches!(
            c.to_date_str("蜀後主建興九十年"),
            Err(Error::YearOutOfRange { .. })
        ));
    }

    #[test]
    fn test_from_date_outside_tables() {
        let r = registry();
        let c = Converter::new(&r);
        assert!(c.from_date(CivilDate::new(1000, 1, 1)).is_empty());
        assert!(c.from_date(CivilDate::new(-300, 1, 1)).is_empty());
        // between 初始 and 建武
        assert!(c.from_date(CivilDate::new(20, 1, 1)).is_empty());
    }

    #[test]
    fn test_transition_overlap() {
        let r = registry();
        let c = Converter::new(&r);
        let d = c.to_date_str("魏文帝黃初元年十月").unwrap();
        let found = c.from_date(d);
        assert_eq!(found, ["漢獻帝延康元年十月初一", "魏文帝黃初元年十月初一"]);
    }

    #[test]
    fn test_round_trip_sampled_days() {
        let r = registry();
        let c = Converter::new(&r);
        let start = Hybrid.to_ordinal_day(CivilDate::new(-206, 11, 13));
        let end = Hybrid.to_ordinal_day(CivilDate::new(764, 1, 1));
        let mut checked = 0;
        for jdn in (start..end).step_by(37) {
            let date = Hybrid.from_ordinal_day(jdn);
            for s in c.from_date(date) {
                assert_eq!(c.to_date_str(&s), Ok(date), "{s}");
                checked += 1;
            }
        }
        assert!(checked > 4000);
    }

    #[test]
    fn test_year_sexagenary() {
        let r = registry();
        let c = Converter::new(&r);
        let d = c.parse("魏明帝景初元年").unwrap();
        assert_eq!(c.year_sexagenary(&d).unwrap().to_string(), "丁巳");
        let d = c.parse("漢武帝太初元年").unwrap();
        assert_eq!(c.year_sexagenary(&d).unwrap().to_string(), "丁丑");
    }

    #[test]
    fn test_suggest_days() {
        let r = registry();
        let c = Converter::new(&r);
        let d = c.parse("漢平帝元始元年二月").unwrap();
        let s = c.suggest_days(&d).unwrap();
        assert_eq!(s.ordinal.len(), 29);
        assert_eq!(s.ordinal[28], "廿九");
        assert_eq!(s.sexagenary.len(), 29);
        assert_eq!(s.sexagenary[0].to_string(), "己丑");
        assert_eq!(s.sexagenary[20].to_string(), "己酉");
    }

    #[test]
    fn test_month_span() {
        let r = registry();
        let c = Converter::new(&r);
        let d = c.parse("漢平帝元始元年正月").unwrap();
        assert_eq!(
            c.month_span(&d),
            Ok((CivilDate::new(1, 2, 12), CivilDate::new(1, 3, 13)))
        );
    }

    #[test]
    fn test_last_filled_month_has_unknown_length() {
        let r = registry();
        let c = Converter::new(&r);
        assert!(matches!(
            c.month_length_str("唐代宗廣德元年十二月"),
            Err(Error::YearOutOfRange { table: "唐", year: 764 })
        ));
    }

    #[test]
    fn test_julian_registry_agrees() {
        let julian = Registry::with_calendar(ProlepticJulian).unwrap();
        let c = Converter::new(&julian);
        assert_eq!(c.to_date_str("漢平帝元始元年正月朔"), Ok(CivilDate::new(1, 2, 12)));
        assert_eq!(c.from_date(CivilDate::new(237, 4, 13)).len(), 3);
    }
}
