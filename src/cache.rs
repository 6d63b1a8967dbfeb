//! On-disk CSV cache for parsed tables.
//!
//! Layout: UTF-8 delimited text, first column is the timestamp, and the
//! header spans one row per column-label level: 2 rows for instantaneous
//! tables (parameter, field), 3 for daily tables (parameter, statistic,
//! field). Only the first cell of the first header row is labeled:
//!
//! ```text
//! datetime,"Streamflow, ft3/s","Streamflow, ft3/s"
//! ,Maximum,Maximum
//! ,value,qual
//! 2012-10-01,1.79,A
//! ```
//!
//! Parameter names contain commas, so all quoting is left to the csv crate.
//! Writing a table and reading it back reproduces the original index, column
//! labels, and cells, except that a null qualifier cell (from a column-wise
//! union) reads back as an empty string, the same representation an empty
//! qualifier list is given.

use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};

use crate::model::{ColumnKey, Field, NwisError};
use crate::table::{ColumnData, Table};

const TIMESTAMP_LABEL: &str = "datetime";
const INSTA_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DAILY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d";

fn cache_err(context: &str, err: impl std::fmt::Display) -> NwisError {
    NwisError::CacheError(format!("{}: {}", context, err))
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Writes a table to `path` in the cache format.
///
/// # Errors
/// `CacheError` if the file cannot be created or written.
pub fn write_cache(table: &Table, path: &Path) -> Result<(), NwisError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| cache_err(&format!("cannot create {}", path.display()), e))?;

    let header_cell = |level: usize, key: &ColumnKey| -> String {
        match (level, &key.statistic) {
            (0, _) => key.parameter.clone(),
            (1, Some(stat)) => stat.clone(),
            _ => key.field.as_str().to_string(),
        }
    };

    let levels = if table.daily() { 3 } else { 2 };
    for level in 0..levels {
        let mut record = vec![if level == 0 {
            TIMESTAMP_LABEL.to_string()
        } else {
            String::new()
        }];
        record.extend(table.columns().iter().map(|c| header_cell(level, &c.key)));
        writer
            .write_record(&record)
            .map_err(|e| cache_err("write header", e))?;
    }

    let ts_format = if table.daily() {
        DAILY_TIMESTAMP_FORMAT
    } else {
        INSTA_TIMESTAMP_FORMAT
    };
    for (row, timestamp) in table.index().iter().enumerate() {
        let mut record = vec![timestamp.format(ts_format).to_string()];
        for column in table.columns() {
            let cell = match &column.data {
                ColumnData::Value(cells) => {
                    cells[row].map(|v| v.to_string()).unwrap_or_default()
                }
                ColumnData::Qual(cells) => cells[row].clone().unwrap_or_default(),
            };
            record.push(cell);
        }
        writer
            .write_record(&record)
            .map_err(|e| cache_err("write row", e))?;
    }

    writer.flush().map_err(|e| cache_err("flush", e))
}

// ---------------------------------------------------------------------------
// Reading
// ---------------------------------------------------------------------------

/// Reads a previously cached table back from `path`.
///
/// The daily flag must match the one the table was written with; it decides
/// how many header rows to expect and the timestamp granularity.
///
/// # Errors
/// `CacheError` if the file is missing, malformed, or does not match the
/// expected header layout.
pub fn read_cache(path: &Path, daily: bool) -> Result<Table, NwisError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| cache_err(&format!("cannot open {}", path.display()), e))?;

    let mut records: Vec<csv::StringRecord> = Vec::new();
    for record in reader.records() {
        records.push(record.map_err(|e| cache_err("read record", e))?);
    }

    let levels = if daily { 3 } else { 2 };
    if records.len() < levels {
        return Err(NwisError::CacheError(format!(
            "{}: expected {} header rows, found {} rows",
            path.display(),
            levels,
            records.len(),
        )));
    }
    let (header, data) = records.split_at(levels);
    let width = header[0].len();
    if width < 1 || header.iter().chain(data.iter()).any(|r| r.len() != width) {
        return Err(NwisError::CacheError(format!(
            "{}: ragged rows in cache file",
            path.display(),
        )));
    }

    // Column keys from the header block.
    let mut keys: Vec<ColumnKey> = Vec::with_capacity(width - 1);
    for col in 1..width {
        let field_label = &header[levels - 1][col];
        let field = Field::from_label(field_label).ok_or_else(|| {
            NwisError::CacheError(format!(
                "{}: unknown field label '{}'",
                path.display(),
                field_label,
            ))
        })?;
        keys.push(ColumnKey {
            parameter: header[0][col].to_string(),
            statistic: daily.then(|| header[1][col].to_string()),
            field,
        });
    }

    // Timestamp index from the first column.
    let mut index: Vec<NaiveDateTime> = Vec::with_capacity(data.len());
    for record in data {
        let cell = &record[0];
        let timestamp = if daily {
            NaiveDate::parse_from_str(cell, DAILY_TIMESTAMP_FORMAT)
                .map_err(|e| cache_err(&format!("bad date '{}'", cell), e))?
                .and_hms_opt(0, 0, 0)
                .ok_or_else(|| NwisError::CacheError(format!("bad date '{}'", cell)))?
        } else {
            NaiveDateTime::parse_from_str(cell, INSTA_TIMESTAMP_FORMAT)
                .map_err(|e| cache_err(&format!("bad datetime '{}'", cell), e))?
        };
        index.push(timestamp);
    }

    let mut table = Table::with_index(daily, index)?;
    for (col, key) in keys.into_iter().enumerate() {
        let cells = data.iter().map(|record| &record[col + 1]);
        let column_data = match key.field {
            Field::Value => {
                let mut values = Vec::with_capacity(data.len());
                for cell in cells {
                    values.push(if cell.is_empty() {
                        None
                    } else {
                        Some(cell.parse::<f64>().map_err(|e| {
                            cache_err(&format!("non-numeric value '{}'", cell), e)
                        })?)
                    });
                }
                ColumnData::Value(values)
            }
            // Qualifier cells always read back as strings; the empty string
            // stands for both an empty qualifier list and a null cell.
            Field::Qual => ColumnData::Qual(cells.map(|c| Some(c.to_string())).collect()),
        };
        table.push_column(key, column_data)?;
    }
    Ok(table)
}
