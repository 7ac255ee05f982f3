use crate::link::LinkDefaults;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("locating config directory: {0}")]
    Xdg(#[from] xdg::BaseDirectoriesError),
    #[error("reading {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parsing {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Optional configuration loaded from `~/.config/vlink/config.toml`.
///
/// Only overrides the values used when port, SNI or remark are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VlinkConfig {
    #[serde(default)]
    pub defaults: LinkDefaults,
}

pub fn config_path() -> Result<PathBuf, ConfigError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vlink")?;
    Ok(xdg_dirs.get_config_home().join("config.toml"))
}

/// Load configuration from the XDG location. A missing file (or no usable
/// config directory) yields the built-in defaults; nothing is written to disk.
pub fn load() -> Result<VlinkConfig, ConfigError> {
    let path = match config_path() {
        Ok(path) => path,
        Err(e) => {
            tracing::warn!("{e}; using built-in defaults");
            return Ok(VlinkConfig::default());
        }
    };
    if !path.exists() {
        tracing::debug!("no config at {}, using built-in defaults", path.display());
        return Ok(VlinkConfig::default());
    }
    load_from(&path)
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<VlinkConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let cfg: VlinkConfig = toml::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("loaded config from {}: {:?}", path.display(), cfg);
    Ok(cfg)
}
