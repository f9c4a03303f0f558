//! Era registry: every era alias mapped to its entry and year table, plus
//! the civil-day span each era covers.
//!
//! Built once with [`Registry::new`] and read-only afterwards; share it by
//! reference.

use std::collections::HashMap;

use log::{debug, info};

use crate::civil::{CivilCalendar, CivilDate, Hybrid};
use crate::data::TABLES;
use crate::error::{Error, Result};
use crate::parser::ChineseDate;
use crate::regime::{ERA_LINES, EraEntry, EraLine, Regime, TableId};
use crate::table::{FilledYear, YearTable};

// ── Registered era ───────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Era {
    pub regime: Regime,
    table: usize,
    pub entry: &'static EraEntry,
    /// Name used in rendered dates.
    pub canonical: String,
    pub aliases: Vec<String>,
}

/// An era alias resolved to its table.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'r> {
    pub era: &'r Era,
    pub table: &'r YearTable,
}

impl<'r> Resolved<'r> {
    /// Table year of the era's first year.
    pub fn start_civil_year(&self) -> i32 {
        self.era.entry.start_year
    }

    /// The table year holding era year `year` (1-based).
    pub fn year(&self, year: u32) -> Result<&'r FilledYear> {
        self.table.year_at(self.start_civil_year(), year as i32 - 1)
    }
}

/// The civil days during which one era name was in use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EraSegment {
    pub era: String,
    pub regime: Regime,
    /// First day written in the era's own terms.
    pub start: ChineseDate,
    pub start_day: CivilDate,
    /// First day no longer in this era.
    pub end_day: CivilDate,
    pub previous: Option<String>,
    pub next: Option<String>,
    era_index: usize,
    start_jdn: i64,
    end_jdn: i64,
}

impl EraSegment {
    pub fn contains_jdn(&self, jdn: i64) -> bool {
        self.start_jdn <= jdn && jdn < self.end_jdn
    }

    pub(crate) fn era_index(&self) -> usize {
        self.era_index
    }
}

// ── Registry ─────────────────────────────────────────────────────────

pub struct Registry<C: CivilCalendar = Hybrid> {
    calendar: C,
    tables: Vec<YearTable>,
    eras: Vec<Era>,
    aliases: HashMap<String, usize>,
    segments: Vec<EraSegment>,
}

impl Registry<Hybrid> {
    /// The compiled-in tables on the hybrid Julian/Gregorian calendar.
    pub fn new() -> Result<Self> {
        Self::with_calendar(Hybrid)
    }
}

impl<C: CivilCalendar> Registry<C> {
    pub fn with_calendar(calendar: C) -> Result<Self> {
        let tables = TABLES
            .iter()
            .map(YearTable::from_raw)
            .collect::<Result<Vec<_>>>()?;
        Self::from_parts(calendar, tables, ERA_LINES)
    }

    /// Build from explicit tables and era lines. Fails if an alias is
    /// claimed twice or a regime's table is missing.
    pub fn from_parts(
        calendar: C,
        tables: Vec<YearTable>,
        lines: &'static [EraLine],
    ) -> Result<Self> {
        let table_of = |regime: Regime| {
            tables
                .iter()
                .position(|t| t.id() == regime.table())
                .ok_or_else(|| {
                    Error::CorruptTable(format!(
                        "no {} table for {}",
                        regime.table().as_chinese(),
                        regime.as_chinese()
                    ))
                })
        };

        // a bare era name is an alias only if no other era shares it
        let name_counts = lines
            .iter()
            .flat_map(|l| l.eras.iter())
            .filter_map(|e| e.name)
            .fold(HashMap::<&str, usize>::new(), |mut counts, name| {
                *counts.entry(name).or_default() += 1;
                counts
            });

        let eras = lines
            .iter()
            .flat_map(|line| line.eras.iter().map(move |e| (line.regime, e)))
            .map(|(regime, entry)| -> Result<Era> {
                let mut aliases = entry.titled_aliases(regime);
                if let Some(name) = entry.name {
                    if !entry.regnal && name_counts.get(name) == Some(&1) {
                        aliases.push(name.to_string());
                    }
                }
                Ok(Era {
                    regime,
                    table: table_of(regime)?,
                    entry,
                    canonical: entry.canonical(regime),
                    aliases,
                })
            })
            .collect::<Result<Vec<Era>>>()?;

        let aliases = eras
            .iter()
            .enumerate()
            .flat_map(|(i, era)| era.aliases.iter().map(move |a| (a, i)))
            .try_fold(HashMap::new(), |mut map, (alias, i)| {
                match map.insert(alias.clone(), i) {
                    Some(_) => Err(Error::DuplicateAlias(alias.clone())),
                    None => Ok(map),
                }
            })?;

        let mut registry = Self {
            calendar,
            tables,
            eras,
            aliases,
            segments: Vec::new(),
        };
        registry.segments = registry.build_segments(lines);
        info!(
            "registry: {} tables, {} eras, {} aliases, {} segments",
            registry.tables.len(),
            registry.eras.len(),
            registry.aliases.len(),
            registry.segments.len()
        );
        Ok(registry)
    }

    pub fn calendar(&self) -> &C {
        &self.calendar
    }

    pub fn tables(&self) -> &[YearTable] {
        &self.tables
    }

    pub fn table(&self, id: TableId) -> Option<&YearTable> {
        self.tables.iter().find(|t| t.id() == id)
    }

    pub fn eras(&self) -> &[Era] {
        &self.eras
    }

    /// Every registered alias, in no particular order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.aliases.keys().map(String::as_str)
    }

    /// Era segments in registration order.
    pub fn segments(&self) -> &[EraSegment] {
        &self.segments
    }

    pub fn resolve(&self, name: &str) -> Result<Resolved<'_>> {
        let index = *self
            .aliases
            .get(name)
            .ok_or_else(|| Error::UnknownEra(name.to_string()))?;
        Ok(self.resolved(index))
    }

    pub(crate) fn resolved(&self, index: usize) -> Resolved<'_> {
        let era = &self.eras[index];
        Resolved {
            era,
            table: &self.tables[era.table],
        }
    }

    /// Segments whose span includes `date`, in registration order.
    pub fn segments_containing(&self, date: CivilDate) -> Vec<&EraSegment> {
        let jdn = self.calendar.to_ordinal_day(date);
        self.segments.iter().filter(|s| s.contains_jdn(jdn)).collect()
    }

    /// Ordinal day on which a (table year, month) begins.
    fn month_start(&self, table: &YearTable, year: i32, month: Option<&str>) -> Result<i64> {
        let filled = table.year_at(year, 0)?;
        let offset = match month {
            Some(m) => filled.days_from_new_year(m)?.0,
            None => 0,
        };
        Ok(self.calendar.to_ordinal_day(filled.first_day) + offset as i64)
    }

    fn build_segments(&self, lines: &[EraLine]) -> Vec<EraSegment> {
        let mut segments = Vec::new();
        let mut era_index = 0;
        for line in lines {
            let Some((table, (_, coverage_end))) = self
                .table(line.regime.table())
                .and_then(|t| Some((t, t.coverage(&self.calendar)?)))
            else {
                era_index += line.eras.len();
                continue;
            };
            let line_end = self.month_start(table, line.end.0, Some(line.end.1)).ok();
            for (i, entry) in line.eras.iter().enumerate() {
                let index = era_index + i;
                let start_jdn = match self.month_start(table, entry.start_year, entry.start_month) {
                    Ok(jdn) => jdn,
                    Err(e) => {
                        debug!("no segment for {}: {e}", self.eras[index].canonical);
                        continue;
                    }
                };
                let next_start = line.eras.get(i + 1).and_then(|next| {
                    self.month_start(table, next.start_year, next.start_month).ok()
                });
                let end_jdn = next_start.or(line_end).unwrap_or(coverage_end).min(coverage_end);
                if start_jdn >= end_jdn {
                    debug!("empty segment for {}", self.eras[index].canonical);
                    continue;
                }
                let canonical = |j: usize| self.eras[era_index + j].canonical.clone();
                let start_month = match entry.start_month {
                    Some(m) => m.to_string(),
                    None => table
                        .year_at(entry.start_year, 0)
                        .ok()
                        .and_then(|y| y.first_month())
                        .map(|m| m.name.to_string())
                        .unwrap_or_default(),
                };
                segments.push(EraSegment {
                    era: canonical(i),
                    regime: line.regime,
                    start: ChineseDate {
                        era: canonical(i),
                        year: format!("一{}", entry.year_unit(1)),
                        month: start_month,
                        day: "初一".to_string(),
                        season: None,
                    },
                    start_day: self.calendar.from_ordinal_day(start_jdn),
                    end_day: self.calendar.from_ordinal_day(end_jdn),
                    previous: i.checked_sub(1).map(canonical),
                    next: (i + 1 < line.eras.len()).then(|| canonical(i + 1)),
                    era_index: index,
                    start_jdn,
                    end_jdn,
                });
            }
            era_index += line.eras.len();
        }
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::civil::ProlepticJulian;

    #[test]
    fn test_resolve_aliases() {
        let r = Registry::new().unwrap();
        let jingchu = r.resolve("魏明帝景初").unwrap();
        assert_eq!(jingchu.start_civil_year(), 237);
        assert_eq!(jingchu.table.name(), "魏");
        assert_eq!(r.resolve("景初").unwrap().era.canonical, "魏明帝景初");
        assert_eq!(r.resolve("蜀先主章武").unwrap().era.canonical, "蜀昭烈帝章武");
        assert_eq!(r.resolve("漢文帝").unwrap().era.canonical, "漢文帝前元");
        assert_eq!(r.resolve("唐肅宗").unwrap().start_civil_year(), 762);
        assert_eq!(r.resolve("漢高帝").unwrap().start_civil_year(), -205);
    }

    #[test]
    fn test_ambiguous_bare_names_are_not_registered() {
        let r = Registry::new().unwrap();
        for name in ["建興", "甘露", "黃龍", "元興", "五鳳", "後元", "前元"] {
            assert_eq!(r.resolve(name).err(), Some(Error::UnknownEra(name.to_string())));
        }
        assert_eq!(r.resolve("吳會稽王建興").unwrap().start_civil_year(), 252);
        assert_eq!(r.resolve("蜀後主建興").unwrap().start_civil_year(), 223);
    }

    static DOUBLE_SHU: &[EraLine] = &[
        EraLine {
            regime: Regime::Shu,
            end: (263, "十二月"),
            eras: &[EraEntry::era(&["後主"], "建興", 223)],
        },
        EraLine {
            regime: Regime::Shu,
            end: (263, "十二月"),
            eras: &[EraEntry::era(&["後主"], "建興", 238)],
        },
    ];

    #[test]
    fn test_duplicate_alias_is_fatal() {
        let tables = TABLES
            .iter()
            .map(|raw| YearTable::from_raw(raw).unwrap())
            .collect::<Vec<_>>();
        assert!(Registry::from_parts(Hybrid, tables.clone(), &DOUBLE_SHU[..1]).is_ok());
        assert_eq!(
            Registry::from_parts(Hybrid, tables, DOUBLE_SHU).err(),
            Some(Error::DuplicateAlias("蜀後主建興".to_string()))
        );
    }

    #[test]
    fn test_missing_table_is_fatal() {
        let tables = vec![YearTable::from_raw(&TABLES[0]).unwrap()];
        assert!(matches!(
            Registry::from_parts(Hybrid, tables, DOUBLE_SHU),
            Err(Error::CorruptTable(_))
        ));
    }

    #[test]
    fn test_segments_in_registration_order() {
        let r = Registry::new().unwrap();
        let found: Vec<&str> = r
            .segments_containing(CivilDate::new(237, 4, 13))
            .iter()
            .map(|s| s.era.as_str())
            .collect();
        assert_eq!(found, ["魏明帝景初", "蜀後主建興", "吳大帝嘉禾"]);
    }

    #[test]
    fn test_segment_boundaries() {
        let r = Registry::new().unwrap();
        let jingchu = r.segments().iter().find(|s| s.era == "魏明帝景初").unwrap();
        assert_eq!(jingchu.start_day, CivilDate::new(237, 4, 13));
        assert_eq!(jingchu.previous.as_deref(), Some("魏明帝青龍"));
        assert_eq!(jingchu.next.as_deref(), Some("魏齊王正始"));
        assert_eq!(jingchu.start.to_string(), "魏明帝景初元年四月初一");
        let qinglong = r.segments().iter().find(|s| s.era == "魏明帝青龍").unwrap();
        assert_eq!(qinglong.end_day, jingchu.start_day);
        // 景初 ends where 正始元年 begins
        assert_eq!(jingchu.end_day, CivilDate::new(240, 2, 11));
    }

    #[test]
    fn test_gap_between_western_and_eastern_han() {
        let r = Registry::new().unwrap();
        assert!(r.segments_containing(CivilDate::new(15, 6, 1)).is_empty());
        let chushi = r.segments().iter().find(|s| s.era == "漢孺子嬰初始").unwrap();
        assert_eq!(chushi.next, None);
    }

    #[test]
    fn test_placeholder_eras_have_no_segment() {
        let r = Registry::new().unwrap();
        assert!(r.segments().iter().all(|s| s.era != "唐代宗永泰"));
        let guangde = r.segments().iter().find(|s| s.era == "唐代宗廣德").unwrap();
        assert_eq!(guangde.next.as_deref(), Some("唐代宗永泰"));
        assert_eq!(guangde.end_day, CivilDate::new(764, 1, 8));
    }

    #[test]
    fn test_other_calendar_gives_same_segments() {
        let hybrid = Registry::new().unwrap();
        let julian = Registry::with_calendar(ProlepticJulian).unwrap();
        assert_eq!(hybrid.segments(), julian.segments());
    }
}
