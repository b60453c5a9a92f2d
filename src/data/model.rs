use std::collections::HashMap;

// ---------------------------------------------------------------------------
// RawTable – the row-oriented form straight out of the text
// ---------------------------------------------------------------------------

/// Header names plus data rows, each row holding its fields positionally.
///
/// Rows are kept exactly as split: a row may be shorter or longer than the
/// header list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// The record of one row: every header paired with its field, `None`
    /// where the row ran out of fields. Extra fields are not part of the
    /// record.
    pub fn record(&self, row: usize) -> Option<Vec<(&str, Option<&str>)>> {
        let fields = self.rows.get(row)?;
        Some(
            self.headers
                .iter()
                .enumerate()
                .map(|(i, h)| (h.as_str(), fields.get(i).map(String::as_str)))
                .collect(),
        )
    }
}

// ---------------------------------------------------------------------------
// ColumnTable – one ordered value sequence per header
// ---------------------------------------------------------------------------

/// A raw cell: `None` when the source row had no field for this column.
pub type Cell = Option<String>;

/// Column-oriented table keyed by header name.
///
/// Invariant: every column holds exactly `row_count()` cells, and headers
/// are unique and kept in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnTable {
    headers: Vec<String>,
    columns: Vec<Vec<Cell>>,
}

impl ColumnTable {
    /// Transpose a [`RawTable`] into columns.
    ///
    /// A header that appears more than once keeps the position of its first
    /// appearance and takes its values from the last field with that name.
    pub fn from_raw(raw: &RawTable) -> Self {
        let mut headers: Vec<String> = Vec::with_capacity(raw.headers.len());
        for h in &raw.headers {
            if !headers.contains(h) {
                headers.push(h.clone());
            }
        }

        let mut columns: Vec<Vec<Cell>> =
            vec![Vec::with_capacity(raw.rows.len()); headers.len()];
        for row in 0..raw.rows.len() {
            // later fields overwrite earlier ones under a repeated header
            let record: HashMap<&str, Option<&str>> =
                raw.record(row).into_iter().flatten().collect();
            for (h, column) in headers.iter().zip(columns.iter_mut()) {
                let cell = record.get(h.as_str()).copied().flatten();
                column.push(cell.map(str::to_string));
            }
        }

        ColumnTable { headers, columns }
    }

    /// Header names in column order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of data rows (identical for every column).
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Whether the table has no columns at all.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Look up a column by header name.
    pub fn column(&self, name: &str) -> Option<&[Cell]> {
        let idx = self.headers.iter().position(|h| h == name)?;
        Some(&self.columns[idx])
    }

    /// Single cell, `None` if the column or row is missing or the cell is absent.
    pub fn value(&self, name: &str, row: usize) -> Option<&str> {
        self.column(name)?.get(row)?.as_deref()
    }

    /// Reassemble one row by taking every column at the same index.
    pub fn row(&self, row: usize) -> Option<Vec<Option<&str>>> {
        if row >= self.row_count() {
            return None;
        }
        Some(self.columns.iter().map(|c| c[row].as_deref()).collect())
    }

    /// `(header, column)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Cell])> {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter().map(Vec::as_slice))
    }
}
