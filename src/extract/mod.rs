//! Column extraction from the datasheet PDF.
//!
//! Table detection itself belongs to the `pdfplumber` crate; this module
//! only walks the requested page range and pulls one column out of each
//! page's first table, in (page, row) order. That order is the vector-table
//! slot order, so nothing here may reorder or deduplicate entries.

use std::path::Path;

use anyhow::{Context, Result};
use pdfplumber::{Pdf, TableSettings};
use tracing::debug;

/// Collect the trimmed values of `column` from every data row of `table`.
///
/// The first row is the table header and is dropped. A row with too few
/// cells contributes nothing for that row; an empty cell contributes the
/// empty string. Dashes pass through untouched; no sanitization happens
/// here.
pub fn rows_to_entries(table: &[Vec<Option<String>>], column: usize) -> Vec<String> {
    let mut entries = Vec::new();
    for (row_idx, row) in table.iter().enumerate().skip(1) {
        if row.len() <= column {
            debug!(row = row_idx, cells = row.len(), "row too short for requested column");
            continue;
        }
        match &row[column] {
            Some(cell) => entries.push(cell.trim().to_string()),
            None => entries.push(String::new()),
        }
    }
    entries
}

/// Extract one column across the half-open page range `[start_page, end_page)`.
///
/// `end_page` of `None` runs to the last page, and past-the-end indices are
/// clamped to the page count. The document handle lives only for the
/// duration of this call. A page with no detectable table contributes zero
/// entries; an unreadable document is an error, not an empty result.
pub fn extract_column(
    path: impl AsRef<Path>,
    column: usize,
    start_page: usize,
    end_page: Option<usize>,
) -> Result<Vec<String>> {
    let path = path.as_ref();
    let pdf = Pdf::open_file(path, None)
        .with_context(|| format!("failed to open PDF {}", path.display()))?;
    let page_count = pdf.page_count();
    let end = end_page.unwrap_or(page_count).min(page_count);
    let settings = TableSettings::default();

    let mut entries = Vec::new();
    for page_idx in start_page..end {
        let page = pdf
            .page(page_idx)
            .with_context(|| format!("failed to read page {} of {}", page_idx, path.display()))?;
        match page.extract_table(&settings) {
            Some(table) => entries.extend(rows_to_entries(&table, column)),
            None => debug!(page = page_idx, "no table detected on page"),
        }
    }
    Ok(entries)
}
