use super::model::{ColumnTable, RawTable};

/// Field delimiter. Fields cannot contain it: there is no quoting.
pub const DELIMITER: char = ',';

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Parse delimited text into a [`ColumnTable`].
///
/// Never fails: anything that is not a well-formed row simply produces short,
/// long or empty rows.
pub fn parse(text: &str) -> ColumnTable {
    let raw = parse_rows(text);
    let table = ColumnTable::from_raw(&raw);
    log::debug!(
        "Parsed {} rows into columns {:?}",
        table.row_count(),
        table.headers()
    );
    table
}

/// Split text into a header line and positional data rows.
///
/// The whole text is trimmed first, then split on `\n`; a trailing `\r` on
/// each line is dropped. Empty text yields an empty [`RawTable`].
pub fn parse_rows(text: &str) -> RawTable {
    let text = text.trim();
    if text.is_empty() {
        return RawTable::default();
    }

    let mut lines = text.split('\n').map(strip_cr);
    let headers = lines.next().map(split_fields).unwrap_or_default();
    let rows = lines.map(split_fields).collect();

    RawTable { headers, rows }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

fn split_fields(line: &str) -> Vec<String> {
    line.split(DELIMITER).map(str::to_string).collect()
}
