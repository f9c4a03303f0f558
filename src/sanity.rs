//! Consistency check of the year tables: every stored first day must
//! follow from the previous year's first day and its month lengths.

use log::{debug, warn};

use crate::civil::{CivilCalendar, CivilDate};
use crate::registry::Registry;
use crate::table::{Year, YearTable};

/// First disagreement found in a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inconsistency {
    pub year: i32,
    pub stored: CivilDate,
    /// `None` when the month data itself is corrupt.
    pub calculated: Option<CivilDate>,
    pub detail: String,
}

/// Result of checking one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCheck {
    pub table: &'static str,
    pub ok: bool,
    /// Filled years verified before stopping.
    pub years_checked: usize,
    pub conflict: Option<Inconsistency>,
}

/// Walk a table from its first year, stopping cleanly at the first
/// placeholder. A mismatch halts the walk and is reported, never raised.
pub fn check_year_table<C: CivilCalendar>(calendar: &C, table: &YearTable) -> TableCheck {
    let mut report = TableCheck {
        table: table.name(),
        ok: true,
        years_checked: 0,
        conflict: None,
    };
    let mut seed = None;
    for year in table.years() {
        let Year::Filled(year) = year else {
            debug!("{}: stopping at first placeholder", table.name());
            break;
        };
        let Some(first) = year.first_month() else {
            break;
        };
        let stored = calendar.to_ordinal_day(year.first_day);
        let (mut calculated, prev) = seed.unwrap_or((stored, first.first_day));
        calculated += prev.diff(first.first_day) as i64;

        if stored != calculated {
            let conflict = Inconsistency {
                year: year.label,
                stored: year.first_day,
                calculated: Some(calendar.from_ordinal_day(calculated)),
                detail: "first day does not follow from the previous year".to_string(),
            };
            warn!(
                "{} year {}: stored {} but months give {}",
                table.name(),
                year.label,
                year.first_day,
                calendar.from_ordinal_day(calculated)
            );
            report.ok = false;
            report.conflict = Some(conflict);
            return report;
        }

        let last = year.last_month().unwrap_or(first);
        match year.days_from_new_year(last.name) {
            Ok((days, label)) => seed = Some((calculated + days as i64, label)),
            Err(e) => {
                warn!("{} year {}: {e}", table.name(), year.label);
                report.ok = false;
                report.conflict = Some(Inconsistency {
                    year: year.label,
                    stored: year.first_day,
                    calculated: None,
                    detail: e.to_string(),
                });
                return report;
            }
        }
        report.years_checked += 1;
    }
    report
}

/// Check every table of the registry.
pub fn check_all<C: CivilCalendar>(registry: &Registry<C>) -> Vec<TableCheck> {
    registry
        .tables()
        .iter()
        .map(|t| check_year_table(registry.calendar(), t))
        .collect()
}

/// True when every table passes.
pub fn sanity_check<C: CivilCalendar>(registry: &Registry<C>) -> bool {
    check_all(registry).iter().all(|c| c.ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::civil::Hybrid;
    use crate::regime::TableId;

    fn shifted(table: &YearTable, index: usize, days: i64) -> YearTable {
        let mut table = table.clone();
        if let Year::Filled(y) = &mut table.years_mut()[index] {
            y.first_day = Hybrid.add_days(y.first_day, days);
        }
        table
    }

    #[test]
    fn test_builtin_tables_pass() {
        let r = Registry::new().unwrap();
        assert!(sanity_check(&r));
        for check in check_all(&r) {
            assert!(check.ok, "{check:?}");
            assert!(check.years_checked > 0);
        }
    }

    #[test]
    fn test_placeholder_stops_cleanly() {
        let r = Registry::new().unwrap();
        let tang = r.table(TableId::Tang).unwrap();
        let check = check_year_table(&Hybrid, tang);
        assert!(check.ok);
        assert_eq!(check.years_checked, 22);
    }

    #[test]
    fn test_shifted_first_day_is_reported() {
        let r = Registry::new().unwrap();
        let wei = r.table(TableId::Wei).unwrap();
        for index in [0, 17, wei.years().len() - 1] {
            for days in [-1, 1] {
                let check = check_year_table(&Hybrid, &shifted(wei, index, days));
                assert!(!check.ok, "index {index} shift {days}");
                let conflict = check.conflict.unwrap();
                assert_ne!(Some(conflict.stored), conflict.calculated);
            }
        }
    }

    #[test]
    fn test_every_han_year_mutation_is_caught() {
        let r = Registry::new().unwrap();
        let han = r.table(TableId::Han).unwrap();
        for index in (0..han.years().len()).step_by(23) {
            assert!(!check_year_table(&Hybrid, &shifted(han, index, 1)).ok);
        }
    }

    #[test]
    fn test_mismatch_names_conflicting_dates() {
        let r = Registry::new().unwrap();
        let shu = r.table(TableId::Shu).unwrap();
        let check = check_year_table(&Hybrid, &shifted(shu, 16, 1));
        let conflict = check.conflict.unwrap();
        assert_eq!(conflict.year, 237);
        assert_eq!(conflict.calculated, Some(CivilDate::new(237, 2, 13)));
        assert_eq!(conflict.stored, CivilDate::new(237, 2, 14));
        assert_eq!(check.years_checked, 16);
    }
}
