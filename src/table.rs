//! In-memory time-series table.
//!
//! Rows are indexed by a unique, ascending timestamp; columns are keyed by
//! the composite `(parameter, [statistic], field)` label from `model`.
//! Instantaneous tables keep full datetime granularity, daily tables carry
//! midnight timestamps (date granularity).
//!
//! Tables from several series over the same site are combined by column-wise
//! union aligned on the shared timestamp index; timestamps missing from one
//! series leave nulls in that series' columns.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use crate::model::{ColumnKey, Field, NwisError};

// ---------------------------------------------------------------------------
// Columns
// ---------------------------------------------------------------------------

/// Cell storage for one column. The variant mirrors `ColumnKey::field`:
/// measurements are numeric, qualifier codes are strings. `None` marks a
/// timestamp the column's series did not report.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Value(Vec<Option<f64>>),
    Qual(Vec<Option<String>>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Value(cells) => cells.len(),
            ColumnData::Qual(cells) => cells.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn field(&self) -> Field {
        match self {
            ColumnData::Value(_) => Field::Value,
            ColumnData::Qual(_) => Field::Qual,
        }
    }

    pub fn as_values(&self) -> Option<&[Option<f64>]> {
        match self {
            ColumnData::Value(cells) => Some(cells),
            ColumnData::Qual(_) => None,
        }
    }

    pub fn as_quals(&self) -> Option<&[Option<String>]> {
        match self {
            ColumnData::Qual(cells) => Some(cells),
            ColumnData::Value(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub key: ColumnKey,
    pub data: ColumnData,
}

// ---------------------------------------------------------------------------
// Table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    daily: bool,
    index: Vec<NaiveDateTime>,
    columns: Vec<Column>,
}

impl Table {
    /// An empty table (zero rows, zero columns) of the given kind.
    pub fn new(daily: bool) -> Self {
        Table {
            daily,
            index: Vec::new(),
            columns: Vec::new(),
        }
    }

    /// A table with rows but no columns yet; `index` must be ascending and
    /// free of duplicates.
    pub fn with_index(daily: bool, index: Vec<NaiveDateTime>) -> Result<Self, NwisError> {
        if index.windows(2).any(|w| w[0] >= w[1]) {
            return Err(NwisError::ParseError(
                "table index must be strictly ascending".to_string(),
            ));
        }
        Ok(Table {
            daily,
            index,
            columns: Vec::new(),
        })
    }

    pub fn daily(&self) -> bool {
        self.daily
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn index(&self) -> &[NaiveDateTime] {
        &self.index
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, key: &ColumnKey) -> Option<&Column> {
        self.columns.iter().find(|c| &c.key == key)
    }

    /// Append a column.
    ///
    /// # Errors
    /// `ParseError` if the key's statistic arity does not match the table
    /// kind, the data length does not match the row count, or the data
    /// variant does not match the key's field.
    pub fn push_column(&mut self, key: ColumnKey, data: ColumnData) -> Result<(), NwisError> {
        if key.statistic.is_some() != self.daily {
            return Err(NwisError::ParseError(format!(
                "column {} has the wrong label arity for a {} table",
                key,
                if self.daily { "daily" } else { "instantaneous" },
            )));
        }
        if data.len() != self.index.len() {
            return Err(NwisError::ParseError(format!(
                "column {} has {} cells for {} rows",
                key,
                data.len(),
                self.index.len(),
            )));
        }
        if data.field() != key.field {
            return Err(NwisError::ParseError(format!(
                "column {} carries {} data",
                key,
                data.field(),
            )));
        }
        self.columns.push(Column { key, data });
        Ok(())
    }

    /// Column-wise union of two tables, aligned on the shared timestamp
    /// index. Rows present in only one table get nulls in the other table's
    /// columns.
    ///
    /// # Errors
    /// `ParseError` if the tables are not of the same kind (daily vs
    /// instantaneous).
    pub fn merge(self, other: Table) -> Result<Table, NwisError> {
        if self.daily != other.daily {
            return Err(NwisError::ParseError(
                "cannot combine daily and instantaneous tables".to_string(),
            ));
        }

        // Union index, with each timestamp's new row position.
        let mut positions: BTreeMap<NaiveDateTime, usize> = BTreeMap::new();
        for ts in self.index.iter().chain(other.index.iter()) {
            let next = positions.len();
            positions.entry(*ts).or_insert(next);
        }
        // BTreeMap iteration is ordered; rebuild positions in index order.
        let index: Vec<NaiveDateTime> = positions.keys().copied().collect();
        for (pos, ts) in index.iter().enumerate() {
            positions.insert(*ts, pos);
        }

        let mut merged = Table {
            daily: self.daily,
            index,
            columns: Vec::new(),
        };
        for (old_index, columns) in [(self.index, self.columns), (other.index, other.columns)] {
            for column in columns {
                let data = realign(&column.data, &old_index, &positions, merged.index.len());
                merged.columns.push(Column {
                    key: column.key,
                    data,
                });
            }
        }
        Ok(merged)
    }
}

/// Scatter a column's cells from its old row order into the merged index.
fn realign(
    data: &ColumnData,
    old_index: &[NaiveDateTime],
    positions: &BTreeMap<NaiveDateTime, usize>,
    rows: usize,
) -> ColumnData {
    match data {
        ColumnData::Value(cells) => {
            let mut out = vec![None; rows];
            for (ts, cell) in old_index.iter().zip(cells) {
                out[positions[ts]] = *cell;
            }
            ColumnData::Value(out)
        }
        ColumnData::Qual(cells) => {
            let mut out = vec![None; rows];
            for (ts, cell) in old_index.iter().zip(cells) {
                out[positions[ts]] = cell.clone();
            }
            ColumnData::Qual(out)
        }
    }
}
