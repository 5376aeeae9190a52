use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LinkError;

/// How tokens are written into the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenEncoding {
    /// Substitute tokens verbatim.
    #[default]
    Raw,
    /// Percent-encode each token as a path segment.
    Percent,
}

/// Parts of the study-page URL template (`[link]` section in config.toml).
///
/// Renders as `{origin}/{library_path}/{publication}/{book}/{chapter}#{fragment}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Scheme and host of the site, without a trailing slash.
    pub origin: String,
    /// Language and library segments, e.g. `en/wol/b/r1/lp-e`.
    pub library_path: String,
    /// Publication symbol, e.g. `nwtsty` for the study edition.
    pub publication: String,
    /// Fragment appended after `#`. Empty means no fragment.
    pub fragment: String,
    pub encoding: TokenEncoding,
    /// Reject tokens that would alter the URL structure (only checked by the fallible builders).
    pub strict: bool,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            origin: "https://wol.jw.org".to_string(),
            library_path: "en/wol/b/r1/lp-e".to_string(),
            publication: "nwtsty".to_string(),
            fragment: "study=discover".to_string(),
            encoding: TokenEncoding::Raw,
            strict: false,
        }
    }
}

impl LinkConfig {
    /// Checks that the template parts join into a well-formed absolute URL.
    pub fn validate(&self) -> Result<(), LinkError> {
        let parsed = url::Url::parse(&self.origin)
            .map_err(|e| LinkError::InvalidConfig(format!("origin {:?}: {}", self.origin, e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(LinkError::InvalidConfig(format!(
                "origin scheme must be http or https, got {}",
                parsed.scheme()
            )));
        }
        if parsed.host_str().is_none()
            || parsed.path() != "/"
            || parsed.query().is_some()
            || parsed.fragment().is_some()
            || self.origin.ends_with('/')
        {
            return Err(LinkError::InvalidConfig(format!(
                "origin must be scheme://host[:port] without a trailing slash, got {:?}",
                self.origin
            )));
        }
        if self.library_path.is_empty()
            || self.library_path.starts_with('/')
            || self.library_path.ends_with('/')
        {
            return Err(LinkError::InvalidConfig(format!(
                "library_path must be non-empty with no leading or trailing slash, got {:?}",
                self.library_path
            )));
        }
        if self.publication.is_empty() || self.publication.contains('/') {
            return Err(LinkError::InvalidConfig(format!(
                "publication must be a single non-empty segment, got {:?}",
                self.publication
            )));
        }
        Ok(())
    }
}

/// Global configuration loaded from `~/.config/wol-link/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WolConfig {
    #[serde(default)]
    pub link: LinkConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wol-link")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WolConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = WolConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Parse and validate a config file at `path`.
pub fn load_from(path: &Path) -> Result<WolConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: WolConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.link
        .validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}
