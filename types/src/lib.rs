use serde::{Deserialize, Serialize};

// ── Conversions ──────────────────────────────────────────────────────────

/// An era date converted to a civil date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    /// Input as given.
    pub input: String,
    /// Normalized era date (元年, 正月, explicit day).
    pub normalized: String,
    /// `[公元前]<n>年<m>月<d>日`
    pub civil: String,
    /// ISO-like form with astronomical year numbering.
    pub iso: String,
    /// Sexagenary label of the day.
    pub day_label: String,
}

/// All era renderings of one civil date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendering {
    pub civil: String,
    pub iso: String,
    pub day_label: String,
    /// One entry per era segment covering the date, in registration order.
    pub renderings: Vec<String>,
}

// ── Registry listings ────────────────────────────────────────────────────

/// A contiguous civil span during which an era was current.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentRecord {
    pub era: String,
    pub regime: String,
    pub start: String,
    /// First civil day.
    pub start_day: String,
    /// First civil day no longer in the era.
    pub end_day: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// Day tokens admissible for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRecord {
    pub month: String,
    pub length: u32,
    pub ordinal: Vec<String>,
    pub sexagenary: Vec<String>,
}

/// Outcome of checking one year table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCheckRecord {
    pub table: String,
    pub ok: bool,
    pub years_checked: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stored: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculated: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

// ── Corpus scan ──────────────────────────────────────────────────────────

/// An era date found in running text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionRecord {
    pub file: String,
    /// Byte offset of the match in the file
    pub byte_offset: usize,
    /// Raw matched text
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub civil: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MentionRecord {
    pub fn is_converted(&self) -> bool {
        self.civil.is_some()
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ScanOutput {
    pub files: usize,
    pub mentions: Vec<MentionRecord>,
}

impl ScanOutput {
    pub fn converted(&self) -> usize {
        self.mentions.iter().filter(|m| m.is_converted()).count()
    }
}
