use std::collections::HashMap;

use csv::StringRecord;

/// Header index: column name to position in each row.
#[derive(Debug, Clone, Default)]
pub struct Columns {
    positions: HashMap<String, usize>,
}

impl Columns {
    /// Build from a header row. When a name repeats, the last occurrence wins.
    #[must_use]
    pub fn from_headers(headers: &StringRecord) -> Self {
        let positions = headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), i))
            .collect();
        Self { positions }
    }

    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }
}

/// One data row of the source CSV.
#[derive(Debug, Clone)]
pub struct SourceRecord<'a> {
    /// Zero-based data row index (the header row is not counted).
    pub row: usize,
    columns: &'a Columns,
    values: StringRecord,
}

impl<'a> SourceRecord<'a> {
    #[must_use]
    pub fn new(row: usize, columns: &'a Columns, values: StringRecord) -> Self {
        Self {
            row,
            columns,
            values,
        }
    }

    /// Raw cell value by column name. `None` when the column is not in the
    /// header or the row is too short to reach it.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.columns
            .position(name)
            .and_then(|i| self.values.get(i))
    }
}
