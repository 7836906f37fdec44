//! One line of the daily sales sheet.
//!
//! The sheet stores five text columns. In memory every column is optional so
//! "no value" is never confused with a value that merely looks falsy (`"0"`),
//! and the two enumerated columns only ever hold allow-listed values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Time block an order belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeBlock {
    /// Happy hour
    #[serde(rename = "HH")]
    HappyHour,
    /// Dinner
    #[serde(rename = "D")]
    Dinner,
    /// Late night
    #[serde(rename = "LN")]
    LateNight,
}

impl TimeBlock {
    pub const ALL: [TimeBlock; 3] = [TimeBlock::HappyHour, TimeBlock::Dinner, TimeBlock::LateNight];

    pub fn code(self) -> &'static str {
        match self {
            TimeBlock::HappyHour => "HH",
            TimeBlock::Dinner => "D",
            TimeBlock::LateNight => "LN",
        }
    }

    /// Exact, case-sensitive match against the allow-list.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }
}

impl fmt::Display for TimeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentType {
    Cash,
    PPay,
    Master,
    Visa,
}

impl PaymentType {
    pub const ALL: [PaymentType; 4] = [
        PaymentType::Cash,
        PaymentType::PPay,
        PaymentType::Master,
        PaymentType::Visa,
    ];

    pub fn code(self) -> &'static str {
        match self {
            PaymentType::Cash => "Cash",
            PaymentType::PPay => "PPay",
            PaymentType::Master => "Master",
            PaymentType::Visa => "Visa",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Column of the entry grid, in sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SalesField {
    Ord,
    Time,
    Amount,
    Payment,
    Covers,
}

/// A row as held by the entry grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SalesRow {
    pub ord: Option<String>,
    pub time: Option<TimeBlock>,
    pub amount: Option<String>,
    pub payment: Option<PaymentType>,
    pub covers: Option<String>,
}

/// Treat the empty string as "no value"; anything else is kept verbatim.
fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl SalesRow {
    /// Project five sheet cells onto a row. Enumerated columns that hold
    /// anything outside their allow-list are dropped silently.
    pub fn from_cells(cells: &[String]) -> Self {
        let cell = |i: usize| cells.get(i).map(String::as_str).unwrap_or("");
        Self {
            ord: non_empty(cell(0)),
            time: TimeBlock::from_code(cell(1)),
            amount: non_empty(cell(2)),
            payment: PaymentType::from_code(cell(3)),
            covers: non_empty(cell(4)),
        }
    }

    /// True when at least one column holds a value.
    pub fn is_filled(&self) -> bool {
        self.ord.is_some()
            || self.time.is_some()
            || self.amount.is_some()
            || self.payment.is_some()
            || self.covers.is_some()
    }

    /// Apply a value typed or picked in the grid. The empty string clears the
    /// column; enumerated columns ignore values outside their allow-list.
    pub fn set(&mut self, field: SalesField, value: &str) {
        match field {
            SalesField::Ord => self.ord = non_empty(value),
            SalesField::Time => self.time = TimeBlock::from_code(value),
            SalesField::Amount => self.amount = non_empty(value),
            SalesField::Payment => self.payment = PaymentType::from_code(value),
            SalesField::Covers => self.covers = non_empty(value),
        }
    }

    /// Current text of a column, empty when unset.
    pub fn text(&self, field: SalesField) -> String {
        match field {
            SalesField::Ord => self.ord.clone().unwrap_or_default(),
            SalesField::Time => self.time.map(|t| t.code().to_string()).unwrap_or_default(),
            SalesField::Amount => self.amount.clone().unwrap_or_default(),
            SalesField::Payment => self.payment.map(|p| p.code().to_string()).unwrap_or_default(),
            SalesField::Covers => self.covers.clone().unwrap_or_default(),
        }
    }

    /// Wire form for the gateway, with the order number defaulted to the
    /// row's 1-based position when it was left blank.
    pub fn to_record(&self, index: usize) -> SalesRecord {
        SalesRecord {
            ord: self.ord.clone().unwrap_or_else(|| (index + 1).to_string()),
            time: self.text(SalesField::Time),
            amount: self.text(SalesField::Amount),
            payment: self.text(SalesField::Payment),
            covers: self.text(SalesField::Covers),
        }
    }
}

/// The shape the spreadsheet endpoint expects inside its `rows` form field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub ord: String,
    pub time: String,
    pub amount: String,
    pub payment: String,
    pub covers: String,
}
