//! Error type shared by the parser, the registry and the converter.

use thiserror::Error;

/// Errors raised while building the tables or converting a single date.
///
/// Table mismatches found by the sanity checker are not errors; see
/// [`crate::sanity::TableCheck`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown era name: {0}")]
    UnknownEra(String),
    #[error("year {year} is outside the filled part of the {table} table")]
    YearOutOfRange { table: &'static str, year: i32 },
    #[error("not a day name: {0}")]
    InvalidDayName(String),
    #[error("malformed date string {input:?}: {reason}")]
    MalformedDateString { input: String, reason: &'static str },
    #[error("not a sexagenary label: {0}")]
    InvalidLabel(String),
    #[error("no month {month} in year {year}")]
    UnknownMonth { month: String, year: i32 },
    #[error("corrupt table data: {0}")]
    CorruptTable(String),
    #[error("era alias {0} is registered twice")]
    DuplicateAlias(String),
    #[error("invalid civil date: {0}")]
    InvalidCivilDate(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn malformed(input: &str, reason: &'static str) -> Self {
        Self::MalformedDateString {
            input: input.to_string(),
            reason,
        }
    }

    /// True for errors caused by the caller's input rather than the data.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownEra(_)
                | Self::MalformedDateString { .. }
                | Self::InvalidDayName(_)
                | Self::InvalidLabel(_)
                | Self::InvalidCivilDate(_)
        )
    }
}
