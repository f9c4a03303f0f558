//! Compiled-in year tables.
//!
//! Each filled year gives the civil (Julian) date of its first day and its
//! months as space-separated `<month name><sexagenary label of day 1>`
//! tokens, in calendar order.

mod han;
mod shu;
mod tang;
mod wei;
mod wu;

use crate::regime::TableId;

pub(crate) enum RawYear {
    Filled((i32, u32, u32), &'static str),
    Placeholder,
}

pub(crate) struct RawTable {
    pub id: TableId,
    pub start_year: i32,
    pub years: &'static [RawYear],
}

/// In [`TableId`] order.
pub(crate) static TABLES: &[RawTable] = &[
    RawTable {
        id: TableId::Han,
        start_year: han::START_YEAR,
        years: han::HAN,
    },
    RawTable {
        id: TableId::Wei,
        start_year: wei::START_YEAR,
        years: wei::WEI,
    },
    RawTable {
        id: TableId::Shu,
        start_year: shu::START_YEAR,
        years: shu::SHU,
    },
    RawTable {
        id: TableId::Wu,
        start_year: wu::START_YEAR,
        years: wu::WU,
    },
    RawTable {
        id: TableId::Tang,
        start_year: tang::START_YEAR,
        years: tang::TANG,
    },
];
