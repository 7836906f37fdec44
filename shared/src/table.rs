use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A rectangular-ish block of cell text as returned by the gateway.
///
/// Rows may be ragged; nothing is coerced beyond turning each cell into a
/// string. Cells that arrive as JSON numbers or booleans keep their textual
/// form and `null` becomes the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RawTable(Vec<Vec<String>>);

impl RawTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self(rows)
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.0
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.0.get(index).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.0
    }
}

impl From<Vec<Vec<String>>> for RawTable {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Self(rows)
    }
}

impl<'de> Deserialize<'de> for RawTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // A null row reads as an empty row
        let rows = Vec::<Option<Vec<Value>>>::deserialize(deserializer)?;
        Ok(Self(
            rows.into_iter()
                .map(|row| row.unwrap_or_default().into_iter().map(cell_text).collect())
                .collect(),
        ))
    }
}

fn cell_text(value: Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}

/// Build a table from string literals; handy in tests on both sides.
#[macro_export]
macro_rules! raw_table {
    ($([$($cell:expr),* $(,)?]),* $(,)?) => {
        $crate::RawTable::new(vec![$(vec![$(String::from($cell)),*]),*])
    };
}
