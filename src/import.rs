// Import module: reads the shipment CSV and turns each data row into either
// a validated line item or a row-level diagnostic. Validation is a pure
// function of one row; the file is folded lazily so it never has to be
// materialized in memory at once.

use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// One validated pharmacy product entry. Only constructed when the code is
/// non-empty and both quantity and price parsed to positive values. The date
/// is kept as the raw string; the server owns date interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub raw_date: String,
    pub nh_code: String,
    pub quantity: i64,
    pub nh_price: f64,
}

/// Diagnostic for a rejected row, tied to its 1-based position among the
/// data rows (header excluded).
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub row_number: usize,
    pub reason: String,
}

/// Outcome of reading a whole file. `items.len() + errors.len()` always
/// equals `total_rows`: every row the reader hands over ends up in exactly
/// one of the two buckets.
#[derive(Debug)]
pub struct ImportResult {
    pub items: Vec<LineItem>,
    pub errors: Vec<RowError>,
    pub total_rows: usize,
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("no valid line items in file")]
    EmptyDataset,
    #[error("failed to read CSV: {0}")]
    Read(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, ImportError>;

/// Validate a single raw row against the fixed column order
/// `date,code,quantity,price`.
///
/// Quantity and price that fail to parse are treated as 0, which the
/// acceptance check then rejects; the reason string carries the attempted
/// values so the operator can diagnose without re-opening the file.
pub fn validate_row(
    record: &StringRecord,
    row_number: usize,
) -> std::result::Result<LineItem, RowError> {
    if record.len() < 4 {
        return Err(RowError {
            row_number,
            reason: "wrong column count, expected <date,code,quantity,price>".into(),
        });
    }

    let raw_date = record.get(0).unwrap_or("").to_string();
    let nh_code = record.get(1).unwrap_or("").to_string();
    let quantity = record
        .get(2)
        .and_then(|s| s.trim().parse::<i64>().ok())
        .unwrap_or(0);
    let nh_price = record
        .get(3)
        .and_then(|s| s.trim().parse::<f64>().ok())
        .unwrap_or(0.0);

    if !nh_code.is_empty() && quantity > 0 && nh_price > 0.0 {
        Ok(LineItem {
            raw_date,
            nh_code,
            quantity,
            nh_price,
        })
    } else {
        Err(RowError {
            row_number,
            reason: format!(
                "incomplete or malformed data (code: {}, quantity: {}, price: {})",
                nh_code, quantity, nh_price
            ),
        })
    }
}

/// Lazy pull-based view over a CSV reader: each `next()` reads one record
/// and validates it, yielding a `LineItem`-or-`RowError`. Row numbers count
/// data rows from 1 in read order, so diagnostics always point at the right
/// line no matter how many earlier rows were accepted.
pub struct ValidatedRows<R: Read> {
    records: csv::StringRecordsIntoIter<R>,
    row: usize,
}

impl<R: Read> ValidatedRows<R> {
    pub fn new(reader: csv::Reader<R>) -> Self {
        ValidatedRows {
            records: reader.into_records(),
            row: 0,
        }
    }
}

impl<R: Read> Iterator for ValidatedRows<R> {
    type Item = csv::Result<std::result::Result<LineItem, RowError>>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        self.row += 1;
        Some(record.map(|r| validate_row(&r, self.row)))
    }
}

/// Fold a stream of validated rows into one `ImportResult`, visiting each
/// row exactly once and preserving encounter order in both buckets.
///
/// A file that yields zero valid items is a failure in its own right
/// (`EmptyDataset`), even when row errors were accumulated; a reader fault
/// aborts the fold as `Read` rather than dropping rows silently.
pub fn aggregate<I>(rows: I) -> Result<ImportResult>
where
    I: IntoIterator<Item = csv::Result<std::result::Result<LineItem, RowError>>>,
{
    let mut items = Vec::new();
    let mut errors = Vec::new();
    let mut total_rows = 0;

    for row in rows {
        total_rows += 1;
        match row? {
            Ok(item) => items.push(item),
            Err(err) => errors.push(err),
        }
    }

    if items.is_empty() {
        return Err(ImportError::EmptyDataset);
    }

    Ok(ImportResult {
        items,
        errors,
        total_rows,
    })
}

/// Read and validate a shipment CSV. The first line is the header and is
/// not counted; `flexible` lets short rows reach the validator so they can
/// be reported as column-count errors instead of failing the whole read.
pub fn read_file(path: &Path) -> Result<ImportResult> {
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    aggregate(ValidatedRows::new(reader))
}
