//! Header-indexed CSV reading with NA detection and per-column type inference.

use std::collections::HashMap;
use std::path::Path;

use csv::ReaderBuilder;
use serde::Serialize;

use crate::errors::PrepError;

/// Cell contents treated as missing, in addition to the empty string.
const NA_SENTINELS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// A scalar cell value with its column's inferred type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// An in-memory CSV file: header row plus raw records.
#[derive(Debug)]
pub struct CsvTable {
    columns: HashMap<String, usize>,
    rows: Vec<csv::StringRecord>,
}

impl CsvTable {
    pub fn read(path: impl AsRef<Path>) -> Result<Self, PrepError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;

        let headers = rdr.headers()?.clone();
        let mut columns = HashMap::new();
        for (i, name) in headers.iter().enumerate() {
            // First column wins on duplicate header names.
            columns
                .entry(name.trim_start_matches('\u{feff}').to_string())
                .or_insert(i);
        }

        // Short rows are padded with nulls on lookup; long rows are malformed.
        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            if record.len() > headers.len() {
                return Err(PrepError::MalformedRow {
                    line: record.position().map(|p| p.line()).unwrap_or_default(),
                    expected: headers.len(),
                    found: record.len(),
                });
            }
            rows.push(record);
        }

        Ok(CsvTable { columns, rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Fails with every absent column named, not just the first.
    pub fn require(&self, columns: &[&str]) -> Result<(), PrepError> {
        let missing: Vec<String> = columns
            .iter()
            .filter(|c| !self.columns.contains_key(**c))
            .map(|c| c.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(PrepError::MissingColumns(missing))
        }
    }

    /// Raw cell text, or `None` when the cell is missing or an NA sentinel.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let idx = *self.columns.get(column)?;
        let value = self.rows.get(row)?.get(idx)?;
        if is_null(value) {
            None
        } else {
            Some(value)
        }
    }

    /// Types a whole column at once: integer if every non-null cell is one,
    /// then float, otherwise text.
    pub fn infer_column(&self, column: &str) -> Vec<Option<Scalar>> {
        let cells: Vec<Option<&str>> = (0..self.row_count()).map(|r| self.cell(r, column)).collect();

        let all_integer = cells.iter().flatten().all(|c| c.trim().parse::<i64>().is_ok());
        let all_float = cells
            .iter()
            .flatten()
            .all(|c| c.trim().parse::<f64>().map(f64::is_finite).unwrap_or(false));

        cells
            .into_iter()
            .map(|cell| {
                cell.map(|c| {
                    let typed = if all_integer {
                        c.trim().parse().map(Scalar::Integer).ok()
                    } else if all_float {
                        c.trim().parse().map(Scalar::Float).ok()
                    } else {
                        None
                    };
                    typed.unwrap_or_else(|| Scalar::Text(c.to_string()))
                })
            })
            .collect()
    }
}

pub fn is_null(value: &str) -> bool {
    value.is_empty() || NA_SENTINELS.contains(&value)
}
