//! In-memory tabular data read from CSV or XLSX.

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use csv::ReaderBuilder;

use crate::error::{IngestError, IngestResult};

/// A header row plus string cells.
///
/// Every row is padded (or truncated) to the header width, so cell access
/// by column index is always in bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Read a table from disk, dispatching on the file extension.
    pub fn from_path(path: &Path) -> IngestResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("csv") => Self::from_csv(path),
            Some("xlsx") => Self::from_xlsx(path),
            _ => Err(IngestError::UnsupportedExtension {
                path: path.display().to_string(),
            }),
        }
    }

    fn from_csv(path: &Path) -> IngestResult<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .flexible(true)
            .from_path(path)
            .map_err(|source| IngestError::Csv {
                path: path.display().to_string(),
                source,
            })?;

        let headers: Vec<String> = reader
            .headers()
            .map_err(|source| IngestError::Csv {
                path: path.display().to_string(),
                source,
            })?
            .iter()
            .map(str::to_string)
            .collect();

        if headers.iter().all(String::is_empty) {
            return Err(IngestError::EmptyFile {
                path: path.display().to_string(),
            });
        }

        let mut table = Self::new(headers);
        for record in reader.records() {
            let record = record.map_err(|source| IngestError::Csv {
                path: path.display().to_string(),
                source,
            })?;
            table.push_row(record.iter().map(str::to_string).collect());
        }
        Ok(table)
    }

    fn from_xlsx(path: &Path) -> IngestResult<Self> {
        let mut workbook: Xlsx<_> =
            open_workbook(path).map_err(|source| IngestError::Xlsx {
                path: path.display().to_string(),
                source,
            })?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| IngestError::EmptyFile {
                path: path.display().to_string(),
            })?
            .map_err(|source| IngestError::Xlsx {
                path: path.display().to_string(),
                source,
            })?;

        let mut rows = range.rows();
        let headers: Vec<String> = rows
            .next()
            .ok_or_else(|| IngestError::EmptyFile {
                path: path.display().to_string(),
            })?
            .iter()
            .map(cell_to_string)
            .collect();

        let mut table = Self::new(headers);
        for row in rows {
            table.push_row(row.iter().map(cell_to_string).collect());
        }
        Ok(table)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map_or("", String::as_str)
    }

    /// Append a data row, padded or truncated to the header width.
    pub fn push_row(&mut self, mut cells: Vec<String>) {
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
    }

    /// Append a column with one value per existing row.
    pub fn push_column(&mut self, header: impl Into<String>, values: Vec<String>) {
        self.headers.push(header.into());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
        // Rows beyond the provided values get a blank cell.
        for row in &mut self.rows {
            row.resize(self.headers.len(), String::new());
        }
    }

    /// Exact header match.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Case-insensitive header match.
    pub fn column_index_ci(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
    }

    /// Indices of all headers containing `needle`, case-insensitively.
    pub fn columns_containing_ci(&self, needle: &str) -> Vec<usize> {
        let needle = needle.to_ascii_uppercase();
        self.headers
            .iter()
            .enumerate()
            .filter(|(_, h)| h.to_ascii_uppercase().contains(&needle))
            .map(|(i, _)| i)
            .collect()
    }

    /// Comma-separated header list for error messages.
    pub fn header_list(&self) -> String {
        self.headers.join(", ")
    }
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string().trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new(vec![
            "SKU".to_string(),
            "Combo SKU2".to_string(),
            "Opening Stock".to_string(),
        ]);
        table.push_row(vec!["A".to_string(), "B".to_string()]);
        table
    }

    #[test]
    fn rows_are_padded_to_header_width() {
        let table = sample();
        assert_eq!(table.cell(0, 2), "");
        assert_eq!(table.cell(5, 0), "");
    }

    #[test]
    fn column_lookup_is_case_insensitive_where_promised() {
        let table = sample();
        assert_eq!(table.column_index("SKU"), Some(0));
        assert_eq!(table.column_index("sku"), None);
        assert_eq!(table.column_index_ci("sku"), Some(0));
        assert_eq!(table.columns_containing_ci("sku"), vec![0, 1]);
    }

    #[test]
    fn push_column_extends_every_row() {
        let mut table = sample();
        table.push_column("MSKU", vec!["X".to_string()]);
        assert_eq!(table.headers().len(), 4);
        assert_eq!(table.cell(0, 3), "X");
    }
}
