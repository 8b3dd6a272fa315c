use crate::prelude::*;
use bookshelf_core::browser::BrowserOptions;
use bookshelf_core::filter::FilterPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Gutendex book listing; only the first page of results is ever used
pub const DEFAULT_API_URL: &str = "https://gutendex.com/books";

const APP_DIR: &str = "bookshelf";

/// Settings read from `config.toml`, then overridden from the command line
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub data_dir: Option<PathBuf>,
    pub filter_policy: FilterPolicy,
    pub reset_page_on_filter: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            data_dir: None,
            filter_policy: FilterPolicy::default(),
            reset_page_on_filter: false,
        }
    }
}

impl Config {
    /// `<config_dir>/bookshelf/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs_next::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Load configuration
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used when present and built-in defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("No configuration file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        debug!("Loading configuration from {}", path.display());
        let content = fs::read_to_string(&path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {e}", path.display())))?;

        Ok(Self::from_toml(&content)?)
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, Error> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Apply CLI overrides to the configuration
    pub fn with_overrides(
        mut self,
        api_url: Option<String>,
        data_dir: Option<PathBuf>,
        filter_policy: Option<FilterPolicy>,
        reset_page_on_filter: bool,
    ) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        if let Some(dir) = data_dir {
            self.data_dir = Some(dir);
        }
        if let Some(policy) = filter_policy {
            self.filter_policy = policy;
        }
        if reset_page_on_filter {
            self.reset_page_on_filter = true;
        }
        self
    }

    /// Directory holding the persisted search term
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(dirs_next::data_dir()
                .ok_or_eyre("Unable to determine data directory")?
                .join(APP_DIR)),
        }
    }

    pub fn browser_options(&self) -> BrowserOptions {
        BrowserOptions {
            filter_policy: self.filter_policy,
            reset_page_on_filter: self.reset_page_on_filter,
        }
    }
}
