//! OHLCV table ingestion.
//!
//! Parses a CSV table into a validated [`Series`]: exact-name schema check,
//! date normalization, ascending sort and minimum-length enforcement. All
//! failures are reported through the crate's [`Error`] so callers can tell
//! "fix your column names" apart from "upload more history".

pub mod error;

pub use error::{Error, Result};

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use chrono::NaiveDate;
use core_types::{PriceBar, Series};
use csv::StringRecord;
use rust_decimal::Decimal;
use tracing::debug;

/// The columns every input table must carry, by exact (case-sensitive) name.
pub const REQUIRED_COLUMNS: [&str; 6] = ["Date", "Open", "High", "Low", "Close", "Volume"];

// The original data files carry ISO dates; the slash forms show up in
// hand-exported spreadsheets often enough to be worth accepting.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y-%m-%d %H:%M:%S", "%m/%d/%Y", "%Y/%m/%d"];

/// Loads and validates a price series from a CSV file on disk.
pub fn load_series_from_path<P: AsRef<Path>>(path: P, min_rows: usize) -> Result<Series> {
    let file = File::open(path.as_ref())?;
    load_series(file, min_rows)
}

/// Loads and validates a price series from any CSV byte stream.
///
/// `min_rows` is the minimum number of data rows required after parsing,
/// normally the slow moving-average window.
pub fn load_series<R: Read>(reader: R, min_rows: usize) -> Result<Series> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers()?.clone();
    if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
        // A zero-byte stream never even yields a header row.
        return Err(Error::EmptyInput);
    }

    let columns = resolve_columns(&headers)?;

    let mut bars = Vec::new();
    let mut bad_dates = Vec::new();
    for (row_number, record) in rdr.records().enumerate() {
        let record = record?;
        // Rows are 1-based in user-facing messages, and row 1 is the header.
        let row = row_number + 2;

        let date_cell = field(&record, columns.date);
        let Some(date) = parse_date(date_cell) else {
            bad_dates.push(date_cell.to_string());
            continue;
        };

        bars.push(PriceBar {
            date,
            open: parse_price(&record, columns.open, "Open", row)?,
            high: parse_price(&record, columns.high, "High", row)?,
            low: parse_price(&record, columns.low, "Low", row)?,
            close: parse_price(&record, columns.close, "Close", row)?,
            volume: parse_volume(&record, columns.volume, row)?,
        });
    }

    if !bad_dates.is_empty() {
        return Err(Error::DateParse { values: bad_dates });
    }
    if bars.is_empty() {
        return Err(Error::EmptyInput);
    }

    // Stable: rows sharing a date keep their original order.
    bars.sort_by_key(|bar| bar.date);

    if bars.len() < min_rows {
        return Err(Error::InsufficientData {
            required: min_rows,
            actual: bars.len(),
        });
    }

    debug!(rows = bars.len(), "loaded price series");
    Ok(Series::new(bars))
}

/// Positions of the required columns within the header row.
struct ColumnIndices {
    date: usize,
    open: usize,
    high: usize,
    low: usize,
    close: usize,
    volume: usize,
}

fn resolve_columns(headers: &StringRecord) -> Result<ColumnIndices> {
    let mut missing = Vec::new();
    let mut index_of = |name: &'static str| match headers.iter().position(|h| h == name) {
        Some(index) => index,
        None => {
            missing.push(name.to_string());
            0
        }
    };

    let columns = ColumnIndices {
        date: index_of("Date"),
        open: index_of("Open"),
        high: index_of("High"),
        low: index_of("Low"),
        close: index_of("Close"),
        volume: index_of("Volume"),
    };

    if missing.is_empty() {
        Ok(columns)
    } else {
        Err(Error::Schema { missing })
    }
}

fn field<'r>(record: &'r StringRecord, index: usize) -> &'r str {
    record.get(index).unwrap_or("").trim()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}

fn parse_price(record: &StringRecord, index: usize, column: &'static str, row: usize) -> Result<Decimal> {
    let value = field(record, index);
    Decimal::from_str(value)
        .ok()
        .filter(|price| *price > Decimal::ZERO)
        .ok_or_else(|| Error::Parse {
            row,
            column,
            value: value.to_string(),
        })
}

fn parse_volume(record: &StringRecord, index: usize, row: usize) -> Result<u64> {
    let value = field(record, index);
    u64::from_str(value).map_err(|_| Error::Parse {
        row,
        column: "Volume",
        value: value.to_string(),
    })
}
