//! USGS NWIS WaterML-as-JSON response parsing.
//!
//! The NWIS daily-value (dv) and instantaneous-value (iv) services return
//! the same envelope:
//!   response.value.timeSeries[]
//!     .variable.variableName          - e.g. "Streamflow, ft3/s"
//!     .variable.options.option[0]     - the statistic, daily series only
//!     .values[0].value[]
//!       .value      - the measurement as a STRING (not a number)
//!       .qualifiers - list of short codes, e.g. ["A"] or ["P", "e"]
//!       .dateTime   - ISO 8601, with a UTC offset for instantaneous data
//!
//! Each series becomes two table columns (`value` and `qual`) labeled with
//! the composite key; all series in a response are combined by column-wise
//! union on the timestamp index.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value;

use crate::model::{ColumnKey, Field, NwisError};
use crate::table::{ColumnData, Table};

// ---------------------------------------------------------------------------
// Serde structures for WaterML JSON deserialization
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct SeriesDocument {
    variable: Variable,
    values: Vec<ValuesBlock>,
}

#[derive(Deserialize)]
struct Variable {
    #[serde(rename = "variableName")]
    variable_name: String,
    options: Option<StatisticOptions>,
}

#[derive(Deserialize)]
struct StatisticOptions {
    option: Vec<StatisticOption>,
}

#[derive(Deserialize)]
struct StatisticOption {
    value: String,
}

#[derive(Deserialize)]
struct ValuesBlock {
    value: Vec<ValueEntry>,
}

#[derive(Deserialize)]
struct ValueEntry {
    value: String, // NWIS returns measurements as strings!
    qualifiers: Vec<String>,
    #[serde(rename = "dateTime")]
    date_time: String,
}

// ---------------------------------------------------------------------------
// Timestamp handling
// ---------------------------------------------------------------------------

/// Parses an NWIS `dateTime` string to a timezone-naive timestamp.
///
/// Instantaneous records carry a UTC offset ("2012-10-01T00:00:00.000-05:00")
/// and are normalized to UTC before the offset is dropped; daily records have
/// no offset ("2012-10-01T00:00:00.000") and are taken as-is.
fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, NwisError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(|e| NwisError::ParseError(format!("bad dateTime '{}': {}", raw, e)))
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

/// Parses one `timeSeries` sub-document into a two-column table.
///
/// With `daily` set, the statistic is read from the variable's first option
/// and the column labels carry three levels; otherwise two.
///
/// An empty record list yields a zero-row table that still carries the
/// correct column labels.
///
/// # Errors
/// `ParseError`: unexpected sub-document structure, a daily series without
/// a statistic option, an unparseable timestamp, or a non-numeric value.
pub fn parse_series(series: &Value, daily: bool) -> Result<Table, NwisError> {
    let series = SeriesDocument::deserialize(series)
        .map_err(|e| NwisError::ParseError(format!("unexpected timeSeries structure: {}", e)))?;

    let parameter = series.variable.variable_name;
    let statistic = if daily {
        let stat = series
            .variable
            .options
            .as_ref()
            .and_then(|opts| opts.option.first())
            .ok_or_else(|| {
                NwisError::ParseError(format!(
                    "daily series '{}' has no statistic option",
                    parameter
                ))
            })?;
        Some(stat.value.clone())
    } else {
        None
    };

    let block = series
        .values
        .first()
        .ok_or_else(|| NwisError::ParseError(format!("series '{}' has no values block", parameter)))?;

    // Keyed by timestamp so the index comes out sorted and unique.
    let mut rows: BTreeMap<NaiveDateTime, (f64, String)> = BTreeMap::new();
    for entry in &block.value {
        let timestamp = parse_timestamp(&entry.date_time)?;
        let value: f64 = entry.value.parse().map_err(|e| {
            NwisError::ParseError(format!("non-numeric value '{}': {}", entry.value, e))
        })?;
        let qual = entry.qualifiers.join(",");
        rows.insert(timestamp, (value, qual));
    }

    let index: Vec<NaiveDateTime> = rows.keys().copied().collect();
    let values: Vec<Option<f64>> = rows.values().map(|(v, _)| Some(*v)).collect();
    let quals: Vec<Option<String>> = rows.values().map(|(_, q)| Some(q.clone())).collect();

    let mut table = Table::with_index(daily, index)?;
    let key = |field| ColumnKey {
        parameter: parameter.clone(),
        statistic: statistic.clone(),
        field,
    };
    table.push_column(key(Field::Value), ColumnData::Value(values))?;
    table.push_column(key(Field::Qual), ColumnData::Qual(quals))?;
    Ok(table)
}

/// Parses a full NWIS site response into one combined table.
///
/// Returns `None` when the response contains zero time series, a distinct
/// condition from a present-but-empty series, which yields `Some` zero-row
/// table.
///
/// # Errors
/// `ParseError`: the document lacks `value.timeSeries` or any sub-document
/// fails to parse.
pub fn read_nwis(doc: &Value, daily: bool) -> Result<Option<Table>, NwisError> {
    let series_list = doc
        .get("value")
        .and_then(|v| v.get("timeSeries"))
        .and_then(Value::as_array)
        .ok_or_else(|| NwisError::ParseError("response lacks value.timeSeries".to_string()))?;

    let mut combined: Option<Table> = None;
    for series in series_list {
        let table = parse_series(series, daily)?;
        combined = Some(match combined {
            Some(acc) => acc.merge(table)?,
            None => table,
        });
    }
    Ok(combined)
}
