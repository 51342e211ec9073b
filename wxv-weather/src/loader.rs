//! CSV loading for the daily weather table.
//!
//! # CSV Format
//!
//! Headers are required. Only `date` (YYYYMMDD), `TMAX` and `TMIN` are
//! read; any other columns are ignored.
//!
//! ```text
//! date,TMAX,TMIN,PRCP
//! 20230115,40,20,0.1
//! ```

use csv::{ReaderBuilder, StringRecord};

use crate::dataset::Dataset;
use crate::error::{LoadError, Result};
use crate::record::WeatherRecord;

const DATE_COLUMN: &str = "date";
const TMAX_COLUMN: &str = "TMAX";
const TMIN_COLUMN: &str = "TMIN";

/// Column positions resolved from the header row.
struct Columns {
    date: usize,
    tmax: usize,
    tmin: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(LoadError::MissingColumn(name))
        };
        Ok(Self {
            date: find(DATE_COLUMN)?,
            tmax: find(TMAX_COLUMN)?,
            tmin: find(TMIN_COLUMN)?,
        })
    }
}

/// Parse the weather CSV into a `Dataset`, preserving row order.
///
/// Any malformed row is fatal: the error names the 1-based data row.
pub fn load_csv(csv_data: &str) -> Result<Dataset> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let columns = Columns::resolve(rdr.headers()?)?;

    let mut records = Vec::new();
    for (index, result) in rdr.records().enumerate() {
        let row = result?;
        records.push(parse_row(&row, &columns, index + 1)?);
    }

    log::info!("loader: Loaded {} weather records", records.len());
    Ok(Dataset::new(records))
}

fn parse_row(row: &StringRecord, columns: &Columns, row_number: usize) -> Result<WeatherRecord> {
    let date_str = row.get(columns.date).unwrap_or("").trim();
    let date = wxv_utils::dates::parse_date_compact(date_str).map_err(|_| LoadError::InvalidDate {
        row: row_number,
        value: date_str.to_string(),
    })?;
    let tmax = parse_number(row, columns.tmax, TMAX_COLUMN, row_number)?;
    let tmin = parse_number(row, columns.tmin, TMIN_COLUMN, row_number)?;
    Ok(WeatherRecord::new(date, tmax, tmin))
}

fn parse_number(
    row: &StringRecord,
    index: usize,
    column: &'static str,
    row_number: usize,
) -> Result<f64> {
    let raw = row.get(index).unwrap_or("").trim();
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(LoadError::InvalidNumber {
            row: row_number,
            column,
            value: raw.to_string(),
        }),
    }
}
