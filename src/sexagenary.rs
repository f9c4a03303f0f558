//! The sexagenary cycle (干支) used to label days and years.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

const STEMS: [char; 10] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];
const BRANCHES: [char; 12] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

/// One of the 60 labels, 甲子 = 0 through 癸亥 = 59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sexagenary(u8);

impl Sexagenary {
    pub const JIAZI: Sexagenary = Sexagenary(0);

    /// Wraps any index into the cycle.
    pub fn from_index(index: i64) -> Self {
        Self(index.rem_euclid(60) as u8)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn stem(self) -> char {
        STEMS[self.index() % 10]
    }

    pub fn branch(self) -> char {
        BRANCHES[self.index() % 12]
    }

    /// Label of the day with the given Julian Day Number.
    pub fn of_day(jdn: i64) -> Self {
        Self::from_index(jdn + 49)
    }

    /// Label of a civil year (astronomical numbering); 4 CE is 甲子.
    pub fn of_year(year: i32) -> Self {
        Self::from_index(year as i64 - 4)
    }

    /// Nonnegative circular distance from `self` forward to `other`.
    pub fn diff(self, other: Sexagenary) -> u32 {
        (other.0 as i64 - self.0 as i64).rem_euclid(60) as u32
    }

    pub fn offset(self, days: i64) -> Self {
        Self::from_index(self.0 as i64 + days)
    }
}

impl fmt::Display for Sexagenary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem(), self.branch())
    }
}

impl FromStr for Sexagenary {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        index_of(s).map(|i| Self(i as u8))
    }
}

/// Position of a two-glyph label in the cycle.
pub fn index_of(label: &str) -> Result<usize> {
    let chars: Vec<char> = label.chars().collect();
    let [stem, branch] = chars.as_slice() else {
        return Err(Error::InvalidLabel(label.to_string()));
    };
    let s = STEMS.iter().position(|c| c == stem);
    let b = BRANCHES.iter().position(|c| c == branch);
    match (s, b) {
        // stem and branch parities must agree, e.g. 甲丑 is not a label
        (Some(s), Some(b)) if s % 2 == b % 2 => Ok((6 * s + 55 * b) % 60),
        _ => Err(Error::InvalidLabel(label.to_string())),
    }
}

/// Circular distance between two textual labels.
pub fn diff(a: &str, b: &str) -> Result<u32> {
    Ok(a.parse::<Sexagenary>()?.diff(b.parse()?))
}

/// `count` consecutive labels starting at `start`, wrapping after 癸亥.
pub fn sequence(start: Sexagenary, count: usize) -> Vec<Sexagenary> {
    (0..count as i64).map(|i| start.offset(i)).collect()
}

/// All 60 labels in cycle order.
pub fn all() -> impl Iterator<Item = Sexagenary> {
    (0..60).map(Sexagenary::from_index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_distinct() {
        let labels: std::collections::HashSet<String> = all().map(|s| s.to_string()).collect();
        assert_eq!(labels.len(), 60);
        assert_eq!(Sexagenary::from_index(0).to_string(), "甲子");
        assert_eq!(Sexagenary::from_index(59).to_string(), "癸亥");
        assert_eq!(Sexagenary::from_index(60), Sexagenary::JIAZI);
    }

    #[test]
    fn test_index_of_roundtrip() {
        for s in all() {
            assert_eq!(index_of(&s.to_string()), Ok(s.index()));
        }
        assert_eq!(index_of("己酉"), Ok(45));
    }

    #[test]
    fn test_invalid_labels() {
        for bad in ["甲丑", "甲", "甲子日", "初一", ""] {
            assert_eq!(index_of(bad), Err(Error::InvalidLabel(bad.to_string())));
        }
    }

    #[test]
    fn test_diff_closure() {
        for x in all() {
            assert_eq!(x.diff(x), 0);
            for y in all() {
                assert!(x.diff(y) < 60);
                assert_eq!((x.diff(y) + y.diff(x)) % 60, 0);
            }
        }
        assert_eq!(diff("癸亥", "甲子"), Ok(1));
        assert_eq!(diff("甲子", "癸亥"), Ok(59));
        assert_eq!(diff("己丑", "己酉"), Ok(20));
    }

    #[test]
    fn test_sequence_wraps() {
        let start: Sexagenary = "辛酉".parse().unwrap();
        let labels: Vec<String> = sequence(start, 5).iter().map(|s| s.to_string()).collect();
        assert_eq!(labels, ["辛酉", "壬戌", "癸亥", "甲子", "乙丑"]);
        assert!(sequence(start, 0).is_empty());
    }

    #[test]
    fn test_day_and_year_labels() {
        // 2000-01-01 was 戊午
        assert_eq!(Sexagenary::of_day(2_451_545).to_string(), "戊午");
        // 1 CE 2月12日 was 己未
        assert_eq!(Sexagenary::of_day(1_721_466).to_string(), "己未");
        assert_eq!(Sexagenary::of_year(4).to_string(), "甲子");
        assert_eq!(Sexagenary::of_year(237).to_string(), "丁巳");
        assert_eq!(Sexagenary::of_year(-103).to_string(), "丁丑");
    }
}
