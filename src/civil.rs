//! Civil (Western) dates on the hybrid Julian/Gregorian calendar.
//!
//! Years use astronomical numbering: 1 BCE is year `0`, 2 BCE is `-1`.
//! The textual form is `[公元前]<n>年<m>月<d>日`, where a 公元前 year `n`
//! maps to year `1 - n`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// First day of the Gregorian calendar, JDN of 1582-10-15.
pub const GREGORIAN_CUTOVER_JDN: i64 = 2_299_161;

// ── Civil date value ─────────────────────────────────────────────────

/// A calendar date, not validated until it meets a [`CivilCalendar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CivilDate {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// ISO-like form with astronomical year, e.g. `-0103-11-25`.
    pub fn iso(&self) -> String {
        if self.year < 0 {
            format!("-{:04}-{:02}-{:02}", -self.year, self.month, self.day)
        } else {
            format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year <= 0 {
            write!(f, "公元前{}年{}月{}日", 1 - self.year, self.month, self.day)
        } else {
            write!(f, "{}年{}月{}日", self.year, self.month, self.day)
        }
    }
}

static RE_CIVIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(公元前|前)?(\d{1,4})年(\d{1,2})月(\d{1,2})日\s*$").expect("valid regex")
});

impl FromStr for CivilDate {
    type Err = Error;

    /// Parses the textual form and validates it on the hybrid calendar.
    fn from_str(s: &str) -> Result<Self> {
        let caps = RE_CIVIL
            .captures(s)
            .ok_or_else(|| Error::InvalidCivilDate(s.to_string()))?;
        let number = |i: usize| -> Result<i64> {
            caps[i]
                .parse::<i64>()
                .map_err(|_| Error::InvalidCivilDate(s.to_string()))
        };
        let mut year = number(2)?;
        if caps.get(1).is_some() {
            if year == 0 {
                return Err(Error::InvalidCivilDate(s.to_string()));
            }
            year = 1 - year;
        } else if year == 0 {
            // there is no 公元0年
            return Err(Error::InvalidCivilDate(s.to_string()));
        }
        let date = CivilDate::new(year as i32, number(3)? as u32, number(4)? as u32);
        if !Hybrid.is_valid(date) {
            return Err(Error::InvalidCivilDate(s.to_string()));
        }
        Ok(date)
    }
}

// ── Calendar capability ──────────────────────────────────────────────

/// Date arithmetic on one civil calendar. Ordinal days are Julian Day
/// Numbers, so two calendars agree on which ordinal names a given day.
pub trait CivilCalendar {
    fn is_leap_year(&self, year: i32) -> bool;

    fn month_days(&self, year: i32, month: u32) -> u32;

    fn to_ordinal_day(&self, date: CivilDate) -> i64;

    fn from_ordinal_day(&self, day: i64) -> CivilDate;

    fn add_days(&self, date: CivilDate, days: i64) -> CivilDate {
        self.from_ordinal_day(self.to_ordinal_day(date) + days)
    }

    fn compare(&self, a: CivilDate, b: CivilDate) -> Ordering {
        self.to_ordinal_day(a).cmp(&self.to_ordinal_day(b))
    }

    fn is_valid(&self, date: CivilDate) -> bool {
        (1..=12).contains(&date.month)
            && date.day >= 1
            && date.day <= self.month_days(date.year, date.month)
    }
}

fn days_in_month(month: u32, leap: bool) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if leap => 29,
        2 => 28,
        _ => 0,
    }
}

/// Month and year shifted so the computational year starts in March.
fn march_based(date: CivilDate) -> (i64, i64, i64) {
    let a = (14 - date.month as i64).div_euclid(12);
    let y = date.year as i64 + 4800 - a;
    let m = date.month as i64 + 12 * a - 3;
    (y, m, date.day as i64)
}

fn julian_to_jdn(date: CivilDate) -> i64 {
    let (y, m, d) = march_based(date);
    d + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - 32083
}

fn gregorian_to_jdn(date: CivilDate) -> i64 {
    let (y, m, d) = march_based(date);
    d + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Shared tail of both inverse conversions; `c` counts days from a March 1st.
fn from_march_based(century_years: i64, c: i64) -> CivilDate {
    let d = (4 * c + 3).div_euclid(1461);
    let e = c - (1461 * d).div_euclid(4);
    let m = (5 * e + 2).div_euclid(153);
    let day = e - (153 * m + 2).div_euclid(5) + 1;
    let month = m + 3 - 12 * m.div_euclid(10);
    let year = century_years + d - 4800 + m.div_euclid(10);
    CivilDate::new(year as i32, month as u32, day as u32)
}

fn jdn_to_julian(jdn: i64) -> CivilDate {
    from_march_based(0, jdn + 32082)
}

fn jdn_to_gregorian(jdn: i64) -> CivilDate {
    let a = jdn + 32044;
    let b = (4 * a + 3).div_euclid(146_097);
    let c = a - (146_097 * b).div_euclid(4);
    from_march_based(100 * b, c)
}

/// Julian calendar before 1582-10-15, Gregorian from that day on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hybrid;

impl Hybrid {
    const CUTOVER: CivilDate = CivilDate::new(1582, 10, 15);
}

impl CivilCalendar for Hybrid {
    fn is_leap_year(&self, year: i32) -> bool {
        if year < 1582 {
            year.rem_euclid(4) == 0
        } else {
            (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
        }
    }

    fn month_days(&self, year: i32, month: u32) -> u32 {
        days_in_month(month, self.is_leap_year(year))
    }

    fn to_ordinal_day(&self, date: CivilDate) -> i64 {
        if date >= Self::CUTOVER {
            gregorian_to_jdn(date)
        } else {
            julian_to_jdn(date)
        }
    }

    fn from_ordinal_day(&self, day: i64) -> CivilDate {
        if day >= GREGORIAN_CUTOVER_JDN {
            jdn_to_gregorian(day)
        } else {
            jdn_to_julian(day)
        }
    }

    fn is_valid(&self, date: CivilDate) -> bool {
        let dropped = date.year == 1582 && date.month == 10 && (5..15).contains(&date.day);
        !dropped
            && (1..=12).contains(&date.month)
            && date.day >= 1
            && date.day <= self.month_days(date.year, date.month)
    }
}

/// Proleptic Julian calendar, used to check that nothing depends on the
/// cutover.
#[cfg(test)]
#[derive(Debug, Clone, Copy, Default)]
pub struct ProlepticJulian;

#[cfg(test)]
impl CivilCalendar for ProlepticJulian {
    fn is_leap_year(&self, year: i32) -> bool {
        year.rem_euclid(4) == 0
    }

    fn month_days(&self, year: i32, month: u32) -> u32 {
        days_in_month(month, self.is_leap_year(year))
    }

    fn to_ordinal_day(&self, date: CivilDate) -> i64 {
        julian_to_jdn(date)
    }

    fn from_ordinal_day(&self, day: i64) -> CivilDate {
        jdn_to_julian(day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jdn_known_days() {
        for (date, jdn) in [
            (CivilDate::new(2000, 1, 1), 2_451_545),
            (CivilDate::new(1582, 10, 15), 2_299_161),
            (CivilDate::new(1582, 10, 4), 2_299_160),
            (CivilDate::new(1, 2, 12), 1_721_466),
            (CivilDate::new(-4712, 1, 1), 0),
        ] {
            assert_eq!(Hybrid.to_ordinal_day(date), jdn, "{date:?}");
            assert_eq!(Hybrid.from_ordinal_day(jdn), date);
        }
    }

    #[test]
    fn test_add_days_across_cutover() {
        let before = CivilDate::new(1582, 10, 4);
        assert_eq!(Hybrid.add_days(before, 1), CivilDate::new(1582, 10, 15));
        assert_eq!(
            Hybrid.add_days(CivilDate::new(1582, 10, 15), -1),
            before
        );
        assert_eq!(
            ProlepticJulian.add_days(before, 1),
            CivilDate::new(1582, 10, 5)
        );
    }

    #[test]
    fn test_add_days_bce() {
        let d = CivilDate::new(0, 12, 31);
        assert_eq!(Hybrid.add_days(d, 1), CivilDate::new(1, 1, 1));
        assert_eq!(Hybrid.add_days(CivilDate::new(-104, 2, 28), 1), CivilDate::new(-104, 2, 29));
        assert_eq!(Hybrid.add_days(CivilDate::new(-103, 2, 28), 1), CivilDate::new(-103, 3, 1));
    }

    #[test]
    fn test_leap_years() {
        assert!(Hybrid.is_leap_year(1500));
        assert!(!Hybrid.is_leap_year(1700));
        assert!(Hybrid.is_leap_year(1600));
        assert!(Hybrid.is_leap_year(0));
        assert!(Hybrid.is_leap_year(-4));
        assert!(!Hybrid.is_leap_year(-1));
        assert!(ProlepticJulian.is_leap_year(1700));
    }

    #[test]
    fn test_validity() {
        assert!(Hybrid.is_valid(CivilDate::new(1582, 10, 4)));
        assert!(!Hybrid.is_valid(CivilDate::new(1582, 10, 10)));
        assert!(ProlepticJulian.is_valid(CivilDate::new(1582, 10, 10)));
        assert!(!Hybrid.is_valid(CivilDate::new(1, 2, 29)));
        assert!(!Hybrid.is_valid(CivilDate::new(1, 13, 1)));
    }

    #[test]
    fn test_compare() {
        let a = CivilDate::new(-1, 12, 31);
        let b = CivilDate::new(0, 1, 1);
        assert_eq!(Hybrid.compare(a, b), Ordering::Less);
        assert_eq!(Hybrid.compare(b, b), Ordering::Equal);
    }

    #[test]
    fn test_parse_text() {
        assert_eq!(
            "237年4月13日".parse::<CivilDate>(),
            Ok(CivilDate::new(237, 4, 13))
        );
        assert_eq!(
            "公元前104年11月25日".parse::<CivilDate>(),
            Ok(CivilDate::new(-103, 11, 25))
        );
        assert_eq!(
            "公元前1年1月1日".parse::<CivilDate>(),
            Ok(CivilDate::new(0, 1, 1))
        );
        assert!("1582年10月10日".parse::<CivilDate>().is_err());
        assert!("0年1月1日".parse::<CivilDate>().is_err());
        assert!("1年2月29日".parse::<CivilDate>().is_err());
        assert!("二三七年".parse::<CivilDate>().is_err());
    }

    #[test]
    fn test_display_roundtrip() {
        for date in [CivilDate::new(-103, 11, 25), CivilDate::new(763, 7, 15)] {
            assert_eq!(date.to_string().parse::<CivilDate>(), Ok(date));
        }
        assert_eq!(CivilDate::new(0, 3, 1).to_string(), "公元前1年3月1日");
        assert_eq!(CivilDate::new(-103, 1, 5).iso(), "-0103-01-05");
    }
}
