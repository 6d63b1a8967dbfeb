//! Core data types for the dockside NWIS client.
//!
//! This module defines the shared domain model imported by all other modules.
//! It contains no logic, no I/O, and no external dependencies, only types.

use std::fmt;

// ---------------------------------------------------------------------------
// Column labels
// ---------------------------------------------------------------------------

/// Which of the two per-series output columns a label refers to.
///
/// Every parsed time series contributes exactly two columns: the numeric
/// measurement (`Value`) and its comma-joined qualifier codes (`Qual`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Value,
    Qual,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Value => "value",
            Field::Qual => "qual",
        }
    }

    /// Inverse of `as_str`, used when reading cache-file headers.
    pub fn from_label(label: &str) -> Option<Field> {
        match label {
            "value" => Some(Field::Value),
            "qual" => Some(Field::Qual),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Composite column label: `(parameter, [statistic], field)`.
///
/// Daily tables carry a statistic level (e.g. "Maximum"); instantaneous
/// tables do not. The statistic is `Some` if and only if the owning table is
/// a daily table; `table::Table` enforces this, so label arity is fixed per
/// table and never mixed.
///
/// Parameter and statistic names are kept as the typed components of the key
/// rather than a joined string, so names containing separator characters
/// (e.g. "Streamflow, ft3/s") never need escaping.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ColumnKey {
    pub parameter: String,
    pub statistic: Option<String>,
    pub field: Field,
}

impl ColumnKey {
    pub fn insta(parameter: impl Into<String>, field: Field) -> Self {
        ColumnKey {
            parameter: parameter.into(),
            statistic: None,
            field,
        }
    }

    pub fn daily(parameter: impl Into<String>, statistic: impl Into<String>, field: Field) -> Self {
        ColumnKey {
            parameter: parameter.into(),
            statistic: Some(statistic.into()),
            field,
        }
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.statistic {
            Some(stat) => write!(f, "({}, {}, {})", self.parameter, stat, self.field),
            None => write!(f, "({}, {})", self.parameter, self.field),
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when fetching, parsing, or caching NWIS data.
///
/// Two conditions are deliberately *not* errors:
/// - a response with zero time series is reported as `None` by the parser,
///   distinct from an empty-but-present series;
/// - a missing cache file merely routes `Station::get_data` to the fetch path.
#[derive(Debug, Clone, PartialEq)]
pub enum NwisError {
    /// Non-2xx HTTP response from the NWIS API.
    HttpError { status: u16, url: String },
    /// The endpoint could not be reached at all.
    NetworkError(String),
    /// The response body could not be decoded, lacked expected keys, or a
    /// value field was not numeric.
    ParseError(String),
    /// Reading or writing an on-disk cache file failed.
    CacheError(String),
}

impl fmt::Display for NwisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NwisError::HttpError { status, url } => {
                write!(f, "HTTP error {} from {}", status, url)
            }
            NwisError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            NwisError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            NwisError::CacheError(msg) => write!(f, "Cache error: {}", msg),
        }
    }
}

impl std::error::Error for NwisError {}
