//! Sheet-name codec.
//!
//! Every business day lives on its own tab of the remote spreadsheet, named
//! after the date as `ddMMyy` (5 Oct 2025 → `051025`). The tab name is the
//! only key the gateway understands, for reads and writes alike.
//!
//! The year is stored with two digits, so an identifier only pins a date
//! down inside a 100-year window. Decoding always lands in 2000-2099.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First year of the century window that two-digit years decode into.
pub const CENTURY_BASE: i32 = 2000;

/// Sheet shown by the report and export views when the route names none
/// and no default is configured.
pub const FALLBACK_DEFAULT_SHEET: &str = "051025";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SheetIdError {
    #[error("sheet id must be six digits in ddMMyy form, got {0:?}")]
    Format(String),
    #[error("sheet id {0:?} does not name a real calendar date")]
    InvalidDate(String),
}

/// A validated `ddMMyy` sheet identifier.
///
/// Only produced from a calendar date (directly or by decoding a string that
/// round-trips), so the text and the date always agree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SheetId {
    id: String,
    date: NaiveDate,
}

/// Format a date as its sheet identifier.
pub fn encode(date: NaiveDate) -> SheetId {
    SheetId::from_date(date)
}

/// Parse a `ddMMyy` identifier back into a date in the 2000-2099 window.
pub fn decode(sheet_id: &str) -> Result<NaiveDate, SheetIdError> {
    let bytes = sheet_id.as_bytes();
    if bytes.len() != 6 || !bytes.iter().all(u8::is_ascii_digit) {
        return Err(SheetIdError::Format(sheet_id.to_string()));
    }

    let pair = |i: usize| u32::from(bytes[i] - b'0') * 10 + u32::from(bytes[i + 1] - b'0');
    let (day, month, year) = (pair(0), pair(2), pair(4));

    NaiveDate::from_ymd_opt(CENTURY_BASE + year as i32, month, day)
        .ok_or_else(|| SheetIdError::InvalidDate(sheet_id.to_string()))
}

impl SheetId {
    pub fn from_date(date: NaiveDate) -> Self {
        let id = format!(
            "{:02}{:02}{:02}",
            date.day(),
            date.month(),
            date.year().rem_euclid(100)
        );
        Self { id, date }
    }

    pub fn parse(sheet_id: &str) -> Result<Self, SheetIdError> {
        decode(sheet_id.trim()).map(Self::from_date)
    }

    /// Parse `sheet_id`, or fall back to the sheet for `fallback` when the
    /// segment is missing or malformed.
    pub fn parse_or_date(sheet_id: Option<&str>, fallback: NaiveDate) -> Self {
        sheet_id
            .and_then(|s| Self::parse(s).ok())
            .unwrap_or_else(|| Self::from_date(fallback))
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// The calendar date this sheet belongs to (year in 2000-2099 unless the
    /// id was built from a date outside that window).
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Human form used on the date selector button, e.g. `05/10/25`.
    pub fn display_date(&self) -> String {
        self.date.format("%d/%m/%y").to_string()
    }

    /// Value for an HTML `<input type="date">`.
    pub fn input_value(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

impl fmt::Display for SheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl FromStr for SheetId {
    type Err = SheetIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SheetId {
    type Error = SheetIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SheetId> for String {
    fn from(sheet: SheetId) -> Self {
        sheet.id
    }
}

/// The configured default sheet, or the literal fallback when the configured
/// value is absent or does not decode.
pub fn default_sheet(configured: Option<&str>) -> SheetId {
    configured
        .and_then(|s| SheetId::parse(s).ok())
        .or_else(|| SheetId::parse(FALLBACK_DEFAULT_SHEET).ok())
        .unwrap_or_else(|| SheetId::from_date(NaiveDate::MIN))
}
