//! CLI configuration loader - parses an optional dockside.toml
//!
//! Separates download defaults from code, so the save directory and extra
//! NWIS query parameters can change without recompiling:
//!
//! ```toml
//! savepath = "data"
//!
//! [query_params]
//! parameterCd = "00060,00065"
//! siteStatus = "active"
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Directory cache files are written to.
    #[serde(default = "default_savepath")]
    pub savepath: PathBuf,
    /// Extra query parameters appended to every NWIS request.
    #[serde(default)]
    pub query_params: BTreeMap<String, String>,
}

fn default_savepath() -> PathBuf {
    PathBuf::from("data")
}

impl Default for Config {
    fn default() -> Self {
        Config {
            savepath: default_savepath(),
            query_params: BTreeMap::new(),
        }
    }
}

/// Loads configuration from a TOML file.
///
/// # Panics
/// Panics if the file is missing or malformed. The CLI only loads a config
/// file the caller explicitly pointed it at, so a broken one fails loudly
/// rather than silently falling back to defaults.
pub fn load_config(path: &Path) -> Config {
    let contents = fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));

    toml::from_str(&contents)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.savepath, PathBuf::from("data"));
        assert!(config.query_params.is_empty());
    }

    #[test]
    fn test_load_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dockside.toml");
        fs::write(
            &path,
            "savepath = \"downloads\"\n\n[query_params]\nparameterCd = \"00060\"\n",
        )
        .unwrap();

        let config = load_config(&path);
        assert_eq!(config.savepath, PathBuf::from("downloads"));
        assert_eq!(config.query_params["parameterCd"], "00060");
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dockside.toml");
        fs::write(&path, "").unwrap();

        let config = load_config(&path);
        assert_eq!(config.savepath, PathBuf::from("data"));
        assert!(config.query_params.is_empty());
    }

    #[test]
    #[should_panic(expected = "Failed to parse")]
    fn test_malformed_config_panics() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dockside.toml");
        fs::write(&path, "savepath = [not toml").unwrap();
        load_config(&path);
    }
}
