use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetcher::FetchOptions;
use crate::task::{build_tasks, DownloadTask};

const DEFAULT_META_URL: &str =
    "https://da9i2vj1xvtoc.cloudfront.net/lcc-model/showroom+level+2/showroom2.lcc";
const DEFAULT_BASE_URLS: [&str; 2] = [
    "https://da9i2vj1xvtoc.cloudfront.net/lcc-model/showroom+level+2/",
    "https://da9i2vj1xvtoc.cloudfront.net/lcc-model/showroom+level+2/showroom2/",
];
const DEFAULT_FILES: [&str; 4] = ["meta.lcc", "index.bin", "data.bin", "environment.bin"];

/// Fetch configuration. Defaults reproduce the built-in showroom sample set;
/// an optional `config.toml` can override any field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Directory the files are written into (created with parents if absent).
    pub output_dir: PathBuf,
    /// Literal URL of the meta file.
    pub meta_url: String,
    /// Local name of the meta file.
    pub meta_filename: String,
    /// Candidate base URLs, tried in order for every data file.
    pub base_urls: Vec<String>,
    /// Files to fetch. An entry equal to `meta_filename` is served by `meta_url` only.
    pub files: Vec<String>,
    /// Per-request timeout in seconds (connect, and max stall while streaming).
    pub timeout_secs: u64,
    /// Receive buffer size; the body is written in chunks of at most this many bytes.
    pub chunk_size: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("lcc-sample-level2"),
            meta_url: DEFAULT_META_URL.to_string(),
            meta_filename: DEFAULT_FILES[0].to_string(),
            base_urls: DEFAULT_BASE_URLS.iter().map(|s| s.to_string()).collect(),
            files: DEFAULT_FILES.iter().map(|s| s.to_string()).collect(),
            timeout_secs: 30,
            chunk_size: 8192,
        }
    }
}

impl FetchConfig {
    /// Ordered task list for this configuration.
    pub fn tasks(&self) -> Result<Vec<DownloadTask>> {
        build_tasks(
            &self.meta_url,
            &self.meta_filename,
            &self.base_urls,
            &self.files,
        )
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            timeout: Duration::from_secs(self.timeout_secs),
            chunk_size: self.chunk_size,
        }
    }
}

/// `$XDG_CONFIG_HOME/lccfetch/config.toml`. The file is not created.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("lccfetch")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Parse a config file. Missing keys take their default values.
pub fn load_from_path(path: &Path) -> Result<FetchConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: FetchConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration: `explicit` if given (must exist), else the XDG config
/// file if present, else built-in defaults.
pub fn load(explicit: Option<&Path>) -> Result<FetchConfig> {
    if let Some(path) = explicit {
        return load_from_path(path);
    }
    match config_path() {
        Ok(path) if path.exists() => {
            tracing::debug!("loading config from {}", path.display());
            load_from_path(&path)
        }
        _ => Ok(FetchConfig::default()),
    }
}
