use super::model::ColumnTable;

// ---------------------------------------------------------------------------
// Table view – what the table renderer draws
// ---------------------------------------------------------------------------

/// Header row plus the first rows of a table, already flattened to text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableView {
    pub headers: Vec<String>,
    /// Row-major cells; absent values are empty strings.
    pub rows: Vec<Vec<String>>,
    /// Rows in the table, including the ones not shown.
    pub total_rows: usize,
}

impl TableView {
    pub fn is_truncated(&self) -> bool {
        self.rows.len() < self.total_rows
    }
}

/// Build the table view, showing at most `max_rows` data rows.
pub fn table_view(table: &ColumnTable, max_rows: usize) -> TableView {
    let shown = table.row_count().min(max_rows);
    let rows = (0..shown)
        .filter_map(|i| table.row(i))
        .map(|cells| {
            cells
                .into_iter()
                .map(|c| c.unwrap_or_default().to_string())
                .collect()
        })
        .collect();

    TableView {
        headers: table.headers().to_vec(),
        rows,
        total_rows: table.row_count(),
    }
}

// ---------------------------------------------------------------------------
// Axis selectors
// ---------------------------------------------------------------------------

/// One selectable option per header, value = header name, in column order.
pub fn selector_options(table: &ColumnTable) -> Vec<String> {
    table.headers().to_vec()
}

/// Initial `(x, y)` selection after a load: first header for X, second for Y
/// (or the first again when there is only one).
pub fn default_axes(table: &ColumnTable) -> Option<(String, String)> {
    let headers = table.headers();
    let x = headers.first()?;
    let y = headers.get(1).unwrap_or(x);
    Some((x.clone(), y.clone()))
}
