use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;
use crate::list::is_blank;

const APP_DIR: &str = "itemlist";
const FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot open {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{origin} is not valid TOML: {source}")]
    Malformed {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid setting {field}: {reason}")]
    Invalid { field: String, reason: &'static str },
}

impl Config {
    /// `<config dir>/itemlist/config.toml`, or `./itemlist/config.toml` when
    /// the platform has no config dir.
    pub fn default_location() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_default();
        path.push(APP_DIR);
        path.push(FILE_NAME);
        path
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_location())
    }

    /// Read `path`, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                return Ok(Config::default());
            }
            Err(source) => {
                return Err(ConfigError::Unreadable {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config = Self::decode(&text, path.display().to_string())?;
        tracing::info!(path = %path.display(), "Config loaded");
        Ok(config)
    }

    /// Decode TOML text that did not come from a file.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Self::decode(text, "inline config".to_string())
    }

    fn decode(text: &str, origin: String) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(text).map_err(|source| ConfigError::Malformed { origin, source })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the store cannot start with: a zero history limit or
    /// a blank initial item.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.history_limit == 0 {
            return Err(ConfigError::Invalid {
                field: "store.history_limit".to_string(),
                reason: "must be at least 1",
            });
        }

        match self.store.initial_items.iter().position(|item| is_blank(item)) {
            Some(index) => Err(ConfigError::Invalid {
                field: format!("store.initial_items[{index}]"),
                reason: "items cannot be empty",
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let config = Config::parse("[store]\nhistory_limit = 5\n").unwrap();
        assert_eq!(config.store.history_limit, 5);
        assert_eq!(config.store.initial_items, vec!["hi", "hello"]);
        assert_eq!(config.list.edit_suffix, " - Edited");
    }

    #[test]
    fn zero_history_limit_is_rejected() {
        let err = Config::parse("[store]\nhistory_limit = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn blank_initial_item_is_rejected() {
        let err = Config::parse("[store]\ninitial_items = [\"a\", \"\"]\n").unwrap_err();
        assert!(err.to_string().contains("initial_items[1]"));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = Config::parse("[store\n").unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { .. }));
    }

    #[test]
    fn default_location_ends_with_app_file() {
        assert!(Config::default_location().ends_with("itemlist/config.toml"));
    }

    #[test]
    fn invalid_error_names_field() {
        let err = Config::parse("[store]\nhistory_limit = 0\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid setting store.history_limit: must be at least 1"
        );
    }
}
