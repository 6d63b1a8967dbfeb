//! A `Station` is bound to one NWIS site and date range and orchestrates
//! fetch → parse → cache.
//!
//! Two independent disciplines coexist:
//!
//! - The lazy accessors (`daily_json`, `insta_json`, `daily_data`,
//!   `insta_data`) each back onto a single-assignment memo slot: the first
//!   call fetches and/or parses, every later call returns the stored result.
//!   At most one network call ever happens per (station, daily-flag) pair
//!   through these accessors. The accessors take `&mut self`, so the
//!   unsynchronized slots cannot race.
//!
//! - `get_data` bypasses the memo slots entirely and works against the
//!   on-disk cache, so a forced re-fetch never corrupts the long-lived
//!   memoized values.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde_json::Value;

use crate::cache;
use crate::fetch::{self, Fetcher, HttpFetcher};
use crate::model::NwisError;
use crate::table::Table;
use crate::waterml;

pub struct Station {
    site: String,
    start: NaiveDate,
    end: NaiveDate,
    savepath: PathBuf,
    query_params: BTreeMap<String, String>,
    fetcher: Box<dyn Fetcher>,

    // Memo slots. Each transitions unset -> set exactly once and is never
    // reset. The inner Option on the table slots is the "zero series in the
    // response" signal.
    daily_json: Option<Value>,
    insta_json: Option<Value>,
    daily_table: Option<Option<Table>>,
    insta_table: Option<Option<Table>>,
}

impl Station {
    /// A station that fetches over HTTP and caches under `savepath`.
    pub fn new(
        site: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
        savepath: impl Into<PathBuf>,
    ) -> Self {
        Self::with_fetcher(site, start, end, savepath, Box::new(HttpFetcher::new()))
    }

    /// Same, with the HTTP collaborator swapped out (used by tests).
    pub fn with_fetcher(
        site: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
        savepath: impl Into<PathBuf>,
        fetcher: Box<dyn Fetcher>,
    ) -> Self {
        Station {
            site: site.into(),
            start,
            end,
            savepath: savepath.into(),
            query_params: BTreeMap::new(),
            fetcher,
            daily_json: None,
            insta_json: None,
            daily_table: None,
            insta_table: None,
        }
    }

    /// Extra NWIS query parameters (parameterCd, siteStatus, ...) appended
    /// to every request this station makes.
    pub fn with_query_params(mut self, params: BTreeMap<String, String>) -> Self {
        self.query_params = params;
        self
    }

    pub fn site(&self) -> &str {
        &self.site
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn savepath(&self) -> &Path {
        &self.savepath
    }

    /// The request URL for this station's period.
    pub fn url(&self, daily: bool) -> String {
        fetch::nwis_url_with(&self.site, self.start, self.end, daily, &self.query_params)
    }

    /// Deterministic cache file path:
    /// `{site}_{start:YYYYMMDD}_thru_{end:YYYYMMDD}_{daily|insta}.csv`.
    pub fn cache_path(&self, daily: bool) -> PathBuf {
        self.savepath.join(format!(
            "{}_{}_thru_{}_{}.csv",
            self.site,
            self.start.format("%Y%m%d"),
            self.end.format("%Y%m%d"),
            if daily { "daily" } else { "insta" },
        ))
    }

    // -- Memoized accessors -------------------------------------------------

    /// The raw daily-values JSON document, fetched on first access.
    pub fn daily_json(&mut self) -> Result<&Value, NwisError> {
        self.memo_json(true)
    }

    /// The raw instantaneous-values JSON document, fetched on first access.
    pub fn insta_json(&mut self) -> Result<&Value, NwisError> {
        self.memo_json(false)
    }

    /// The parsed daily table, derived on first access from `daily_json`
    /// (triggering its fetch if needed). `None` when the response had zero
    /// time series.
    pub fn daily_data(&mut self) -> Result<Option<&Table>, NwisError> {
        self.memo_table(true)
    }

    /// The parsed instantaneous table; see `daily_data`.
    pub fn insta_data(&mut self) -> Result<Option<&Table>, NwisError> {
        self.memo_table(false)
    }

    fn memo_json(&mut self, daily: bool) -> Result<&Value, NwisError> {
        let url = self.url(daily);
        let slot = if daily {
            &mut self.daily_json
        } else {
            &mut self.insta_json
        };
        if slot.is_none() {
            *slot = Some(self.fetcher.get_json(&url)?);
        }
        Ok(slot.as_ref().expect("memo slot was just filled"))
    }

    fn memo_table(&mut self, daily: bool) -> Result<Option<&Table>, NwisError> {
        let unset = if daily {
            self.daily_table.is_none()
        } else {
            self.insta_table.is_none()
        };
        if unset {
            let parsed = waterml::read_nwis(self.memo_json(daily)?, daily)?;
            let slot = if daily {
                &mut self.daily_table
            } else {
                &mut self.insta_table
            };
            *slot = Some(parsed);
        }
        let slot = if daily {
            &self.daily_table
        } else {
            &self.insta_table
        };
        Ok(slot.as_ref().expect("memo slot was just filled").as_ref())
    }

    // -- Cache-aware entry point --------------------------------------------

    /// The primary entry point: returns this station's table for the period,
    /// preferring the on-disk cache.
    ///
    /// - Cache file missing, or `force` set: fetch and parse fresh
    ///   (independently of the memo slots), write the table to the cache
    ///   path when `save` is set, and return it.
    /// - Otherwise: read the cache file; no network call.
    ///
    /// A response with zero time series returns `None` and is never written
    /// to disk.
    pub fn get_data(
        &self,
        daily: bool,
        save: bool,
        force: bool,
    ) -> Result<Option<Table>, NwisError> {
        let path = self.cache_path(daily);
        if force || !path.exists() {
            let doc = self.fetcher.get_json(&self.url(daily))?;
            let table = waterml::read_nwis(&doc, daily)?;
            if save {
                if let Some(table) = &table {
                    fs::create_dir_all(&self.savepath).map_err(|e| {
                        NwisError::CacheError(format!(
                            "cannot create {}: {}",
                            self.savepath.display(),
                            e
                        ))
                    })?;
                    cache::write_cache(table, &path)?;
                }
            }
            Ok(table)
        } else {
            cache::read_cache(&path, daily).map(Some)
        }
    }
}
