//! Year tables: per regime, a dense run of lunar years indexed from a
//! civil start year.

use crate::civil::{CivilCalendar, CivilDate};
use crate::data::{RawTable, RawYear};
use crate::error::{Error, Result};
use crate::numeral;
use crate::regime::TableId;
use crate::sexagenary::Sexagenary;

// ── Month / Year ─────────────────────────────────────────────────────

/// A lunar month, identified by name within its year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Month {
    /// Canonical name, e.g. `一月`, `閏八月`, `後九月`, `建子月`.
    pub name: &'static str,
    pub first_day: Sexagenary,
}

/// A year whose months are known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilledYear {
    /// Civil year in which the year's 正月 falls (the table index label).
    pub label: i32,
    pub first_day: CivilDate,
    pub months: Vec<Month>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Year {
    Filled(FilledYear),
    /// Not filled in yet. Lookups that reach it fail with `YearOutOfRange`.
    Placeholder,
}

impl Year {
    pub fn filled(&self) -> Option<&FilledYear> {
        match self {
            Year::Filled(y) => Some(y),
            Year::Placeholder => None,
        }
    }
}

/// Length implied by two consecutive first-day labels.
fn month_distance(from: &Month, to: &Month) -> Result<u32> {
    match from.first_day.diff(to.first_day) {
        d @ (29 | 30) => Ok(d),
        d => Err(Error::CorruptTable(format!(
            "{} ({}) is followed {d} days later by {} ({})",
            from.name, from.first_day, to.name, to.first_day
        ))),
    }
}

impl FilledYear {
    /// Days from the year's first day to the first day of `month`, and that
    /// month's first-day label.
    pub fn days_from_new_year(&self, month: &str) -> Result<(u32, Sexagenary)> {
        let mut offset = 0;
        let mut prev: Option<&Month> = None;
        for m in &self.months {
            if let Some(p) = prev {
                offset += month_distance(p, m)?;
            }
            if m.name == month {
                return Ok((offset, m.first_day));
            }
            prev = Some(m);
        }
        Err(Error::UnknownMonth {
            month: month.to_string(),
            year: self.label,
        })
    }

    pub fn month_index(&self, month: &str) -> Option<usize> {
        self.months.iter().position(|m| m.name == month)
    }

    pub fn first_month(&self) -> Option<&Month> {
        self.months.first()
    }

    pub fn last_month(&self) -> Option<&Month> {
        self.months.last()
    }
}

// ── Year table ───────────────────────────────────────────────────────

/// Where a civil day falls inside a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location<'t> {
    pub year: &'t FilledYear,
    pub month_index: usize,
    /// 1-based day of month.
    pub day: u32,
}

impl Location<'_> {
    pub fn month(&self) -> &Month {
        &self.year.months[self.month_index]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearTable {
    id: TableId,
    start_year: i32,
    years: Vec<Year>,
}

impl YearTable {
    pub fn new(id: TableId, start_year: i32, years: Vec<Year>) -> Self {
        Self {
            id,
            start_year,
            years,
        }
    }

    /// Build a table from its literal form.
    pub(crate) fn from_raw(raw: &RawTable) -> Result<Self> {
        let mut years = Vec::with_capacity(raw.years.len());
        for (i, entry) in raw.years.iter().enumerate() {
            let label = raw.start_year + i as i32;
            match entry {
                RawYear::Placeholder => years.push(Year::Placeholder),
                RawYear::Filled((y, m, d), text) => {
                    let months = parse_months(text)
                        .map_err(|e| Error::CorruptTable(format!("{} {label}: {e}", raw.id.as_chinese())))?;
                    years.push(Year::Filled(FilledYear {
                        label,
                        first_day: CivilDate::new(*y, *m, *d),
                        months,
                    }));
                }
            }
        }
        Ok(Self::new(raw.id, raw.start_year, years))
    }

    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.id.as_chinese()
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn years(&self) -> &[Year] {
        &self.years
    }

    pub(crate) fn years_mut(&mut self) -> &mut [Year] {
        &mut self.years
    }

    /// The year `year_offset` years after `start_civil_year`.
    pub fn year_at(&self, start_civil_year: i32, year_offset: i32) -> Result<&FilledYear> {
        let label = start_civil_year + year_offset;
        let out_of_range = || Error::YearOutOfRange {
            table: self.name(),
            year: label,
        };
        let index = usize::try_from(label - self.start_year).map_err(|_| out_of_range())?;
        self.years
            .get(index)
            .and_then(Year::filled)
            .ok_or_else(out_of_range)
    }

    /// Filled years from the start of the table up to the first placeholder.
    pub fn filled_prefix(&self) -> impl Iterator<Item = &FilledYear> {
        self.years.iter().map_while(Year::filled)
    }

    fn next_filled(&self, year: &FilledYear) -> Option<&FilledYear> {
        let index = usize::try_from(year.label - self.start_year + 1).ok()?;
        self.years.get(index).and_then(Year::filled)
    }

    /// Length of a month, using the next year's first month for the last
    /// month of a year. `None` if that next year is not filled.
    pub fn month_length(&self, year: &FilledYear, month_index: usize) -> Option<Result<u32>> {
        let month = year.months.get(month_index)?;
        let next = match year.months.get(month_index + 1) {
            Some(next) => next,
            None => self.next_filled(year)?.first_month()?,
        };
        Some(month_distance(month, next))
    }

    /// Civil day range `[start, end)` (ordinal days) the table can place.
    /// The last month of the last filled year is excluded because its
    /// length is unknown.
    pub fn coverage<C: CivilCalendar>(&self, calendar: &C) -> Option<(i64, i64)> {
        let first = self.filled_prefix().next()?;
        let last = self.filled_prefix().last()?;
        let last_month = last.last_month()?;
        let (offset, _) = last.days_from_new_year(last_month.name).ok()?;
        Some((
            calendar.to_ordinal_day(first.first_day),
            calendar.to_ordinal_day(last.first_day) + offset as i64,
        ))
    }

    /// Find the year, month and day of month of a civil day.
    pub fn locate<C: CivilCalendar>(&self, calendar: &C, jdn: i64) -> Option<Location<'_>> {
        let (start, end) = self.coverage(calendar)?;
        if jdn < start || jdn >= end {
            return None;
        }
        let filled: Vec<&FilledYear> = self.filled_prefix().collect();
        let after = filled.partition_point(|y| calendar.to_ordinal_day(y.first_day) <= jdn);
        let year = *filled.get(after.checked_sub(1)?)?;
        let mut day_start = calendar.to_ordinal_day(year.first_day);
        for month_index in 0..year.months.len() {
            let len = self.month_length(year, month_index)?.ok()? as i64;
            if jdn < day_start + len {
                return Some(Location {
                    year,
                    month_index,
                    day: (jdn - day_start + 1) as u32,
                });
            }
            day_start += len;
        }
        None
    }
}

/// Split `一月己未 二月己丑 ...` into months.
fn parse_months(text: &'static str) -> std::result::Result<Vec<Month>, String> {
    let mut months = Vec::new();
    for token in text.split_whitespace() {
        let split = token
            .char_indices()
            .rev()
            .nth(1)
            .map(|(i, _)| i)
            .ok_or_else(|| format!("short month token {token:?}"))?;
        let (name, label) = token.split_at(split);
        if numeral::canonical_month(name).as_deref() != Some(name) {
            return Err(format!("bad month name {name:?}"));
        }
        if months.iter().any(|m: &Month| m.name == name) {
            return Err(format!("month {name} appears twice"));
        }
        let first_day = label.parse::<Sexagenary>().map_err(|e| e.to_string())?;
        months.push(Month { name, first_day });
    }
    if months.is_empty() {
        return Err("filled year without months".to_string());
    }
    Ok(months)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::civil::Hybrid;
    use crate::data::TABLES;

    fn builtin() -> Vec<YearTable> {
        TABLES
            .iter()
            .map(|raw| YearTable::from_raw(raw).unwrap())
            .collect()
    }

    fn han() -> YearTable {
        YearTable::from_raw(&TABLES[0]).unwrap()
    }

    #[test]
    fn test_parse_months() {
        let months = parse_months("十月甲午 後十月戊子 閏一月庚寅").unwrap();
        assert_eq!(months.len(), 3);
        assert_eq!(months[1].name, "後十月");
        assert_eq!(months[2].first_day.to_string(), "庚寅");
        assert!(parse_months("正月甲午").is_err());
        assert!(parse_months("一月甲丑").is_err());
        assert!(parse_months("一月甲子 一月甲午").is_err());
        assert!(parse_months("").is_err());
    }

    #[test]
    fn test_month_length_invariant() {
        for table in builtin() {
            for year in table.years().iter().filter_map(Year::filled) {
                assert!(
                    (10..=15).contains(&year.months.len()),
                    "{} {} has {} months",
                    table.name(),
                    year.label,
                    year.months.len()
                );
                for pair in year.months.windows(2) {
                    let d = pair[0].first_day.diff(pair[1].first_day);
                    assert!(d == 29 || d == 30, "{} {} {}", table.name(), year.label, pair[0].name);
                }
            }
        }
    }

    #[test]
    fn test_year_to_year_distance() {
        for table in builtin() {
            let years: Vec<&FilledYear> = table.filled_prefix().collect();
            for pair in years.windows(2) {
                let (last, _) = pair[0]
                    .days_from_new_year(pair[0].last_month().unwrap().name)
                    .unwrap();
                let tail = table.month_length(pair[0], pair[0].months.len() - 1).unwrap().unwrap();
                let gap = Hybrid.to_ordinal_day(pair[1].first_day) - Hybrid.to_ordinal_day(pair[0].first_day);
                assert_eq!(gap, (last + tail) as i64, "{} {}", table.name(), pair[0].label);
            }
        }
    }

    #[test]
    fn test_days_from_new_year() {
        let table = han();
        let year = table.year_at(1, 0).unwrap();
        assert_eq!(year.label, 1);
        assert_eq!(year.first_day, CivilDate::new(1, 2, 12));
        let (days, label) = year.days_from_new_year("一月").unwrap();
        assert_eq!((days, label.to_string().as_str()), (0, "己未"));
        let (days, label) = year.days_from_new_year("二月").unwrap();
        assert_eq!((days, label.to_string().as_str()), (30, "己丑"));
        assert_eq!(
            year.days_from_new_year("閏二月"),
            Err(Error::UnknownMonth {
                month: "閏二月".to_string(),
                year: 1
            })
        );
    }

    #[test]
    fn test_days_from_new_year_rejects_corrupt_distance() {
        let year = FilledYear {
            label: 0,
            first_day: CivilDate::new(0, 1, 1),
            months: vec![
                Month {
                    name: "一月",
                    first_day: Sexagenary::JIAZI,
                },
                Month {
                    name: "二月",
                    first_day: Sexagenary::from_index(31),
                },
            ],
        };
        assert_eq!(year.days_from_new_year("一月").map(|r| r.0), Ok(0));
        assert!(matches!(
            year.days_from_new_year("二月"),
            Err(Error::CorruptTable(_))
        ));
    }

    #[test]
    fn test_taichu_year_has_fifteen_months() {
        let table = han();
        let year = table.year_at(-103, 0).unwrap();
        let names: Vec<&str> = year.months.iter().map(|m| m.name).collect();
        assert_eq!(names.len(), 15);
        assert_eq!(names[0], "十月");
        assert_eq!(&names[12..], ["後十月", "後十一月", "後十二月"]);
        let before = table.year_at(-104, 0).unwrap();
        assert_eq!(before.last_month().unwrap().name, "後九月");
    }

    #[test]
    fn test_year_at_bounds() {
        let table = han();
        assert!(table.year_at(-205, 0).is_ok());
        assert_eq!(
            table.year_at(-205, -1),
            Err(Error::YearOutOfRange {
                table: "漢",
                year: -206
            })
        );
        assert!(table.year_at(221, 0).is_ok());
        assert!(table.year_at(221, 1).is_err());
        let tang = YearTable::from_raw(&TABLES[4]).unwrap();
        assert!(tang.year_at(742, 21).is_ok());
        assert_eq!(
            tang.year_at(742, 22),
            Err(Error::YearOutOfRange {
                table: "唐",
                year: 764
            })
        );
    }

    #[test]
    fn test_locate() {
        let table = han();
        let jdn = Hybrid.to_ordinal_day(CivilDate::new(1, 4, 3));
        let loc = table.locate(&Hybrid, jdn).unwrap();
        assert_eq!((loc.year.label, loc.month().name, loc.day), (1, "二月", 21));
        let before = Hybrid.to_ordinal_day(CivilDate::new(-206, 11, 12));
        assert!(table.locate(&Hybrid, before).is_none());
        let first = Hybrid.to_ordinal_day(CivilDate::new(-206, 11, 13));
        let loc = table.locate(&Hybrid, first).unwrap();
        assert_eq!((loc.year.label, loc.month().name, loc.day), (-205, "十月", 1));
    }

    #[test]
    fn test_coverage_stops_before_placeholders() {
        let tang = YearTable::from_raw(&TABLES[4]).unwrap();
        let (start, end) = tang.coverage(&Hybrid).unwrap();
        assert_eq!(Hybrid.from_ordinal_day(start), CivilDate::new(742, 2, 10));
        // first day of 廣德元年十二月, whose length is unknown
        assert_eq!(Hybrid.from_ordinal_day(end), CivilDate::new(764, 1, 8));
    }
}
