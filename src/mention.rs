//! Finding era dates in running text.

use regex::Regex;

use crate::civil::{CivilCalendar, CivilDate, Hybrid};
use crate::convert::Converter;
use crate::error::{Error, Result};
use crate::numeral::DAY_NAMES;
use crate::regime::build_era_regex;
use crate::registry::Registry;

const YEAR: &str = "(?:元|[一二三四五六七八九十廿卅]{1,3})[年載]";
const MONTH: &str = "[春夏秋冬]?[閏後]?(?:正|臘|十[一二]?|[一二三四五六七八九]|建[子丑寅卯辰巳午未申酉戌亥])月";
const LABEL: &str = "[甲乙丙丁戊己庚辛壬癸][子丑寅卯辰巳午未申酉戌亥]";

/// An era date matched in a text, with its conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    pub byte_offset: usize,
    pub text: String,
    pub date: Result<CivilDate>,
}

pub struct MentionFinder<'r, C: CivilCalendar = Hybrid> {
    converter: Converter<'r, C>,
    re: Regex,
}

impl<'r, C: CivilCalendar> MentionFinder<'r, C> {
    /// Compile the mention pattern from every alias in the registry.
    pub fn new(registry: &'r Registry<C>) -> Result<Self> {
        let eras = build_era_regex(registry.aliases());
        let days = DAY_NAMES.join("|");
        let pattern = format!("{eras}{YEAR}(?:{MONTH}(?:朔|{days}|{LABEL})?)?");
        let re = Regex::new(&pattern).map_err(|e| Error::CorruptTable(e.to_string()))?;
        Ok(Self {
            converter: Converter::new(registry),
            re,
        })
    }

    /// Every mention in `text`, left to right.
    pub fn find(&self, text: &str) -> Vec<Mention> {
        self.re
            .find_iter(text)
            .map(|m| Mention {
                byte_offset: m.start(),
                text: m.as_str().to_string(),
                date: self.converter.to_date_str(m.as_str()),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_mentions() {
        let r = Registry::new().unwrap();
        let finder = MentionFinder::new(&r).unwrap();
        let text = "是歲，漢平帝元始元年正月朔，日有食之。後魏明帝景初元年四月，改元。";
        let found = finder.find(text);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].text, "漢平帝元始元年正月朔");
        assert_eq!(found[0].date, Ok(CivilDate::new(1, 2, 12)));
        assert_eq!(&text[found[0].byte_offset..][..found[0].text.len()], found[0].text);
        assert_eq!(found[1].text, "魏明帝景初元年四月");
        assert_eq!(found[1].date, Ok(CivilDate::new(237, 4, 13)));
    }

    #[test]
    fn test_longest_alias_wins() {
        let r = Registry::new().unwrap();
        let finder = MentionFinder::new(&r).unwrap();
        let found = finder.find("漢光武帝建武中元二年二月");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "漢光武帝建武中元二年二月");
    }

    #[test]
    fn test_day_label_and_bare_year() {
        let r = Registry::new().unwrap();
        let finder = MentionFinder::new(&r).unwrap();
        let found = finder.find("漢平帝元始元年二月己酉，又元始二年");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].text, "漢平帝元始元年二月己酉");
        assert_eq!(found[1].text, "元始二年");
        assert!(found[1].date.is_ok());
    }

    #[test]
    fn test_failed_conversion_is_kept() {
        let r = Registry::new().unwrap();
        let finder = MentionFinder::new(&r).unwrap();
        let found = finder.find("唐代宗永泰元年");
        assert_eq!(found.len(), 1);
        assert!(matches!(found[0].date, Err(Error::YearOutOfRange { .. })));
    }
}
