//! dockside: download and cache USGS NWIS time-series data.
//!
//! # Module structure
//!
//! ```text
//! dockside
//! ├── model    - shared data types (ColumnKey, Field, NwisError)
//! ├── table    - timestamp-indexed table with composite column labels
//! ├── waterml  - NWIS WaterML-as-JSON response parsing
//! ├── fetch    - dv/iv URL construction + blocking HTTP fetch seam
//! ├── cache    - on-disk CSV cache (2/3-row headers)
//! ├── station  - per-site orchestration: fetch → parse → cache, memoized
//! ├── config   - optional dockside.toml for the CLI binary
//! └── fixtures (test only) - representative NWIS response payloads
//! ```

pub mod cache;
pub mod config;
pub mod fetch;
pub mod model;
pub mod station;
pub mod table;
pub mod waterml;

#[cfg(test)]
mod fixtures;
