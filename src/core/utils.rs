use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::core::errors::Result;

const DEFAULT_DIR_NAME: &str = ".donation_core";
const HOME_ENV: &str = "DONATION_CORE_HOME";
const SNAPSHOT_DIR: &str = "snapshots";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";
const HISTORY_FILE: &str = "history.txt";

/// Resolves the on-disk layout of the application data directory.
pub struct PathResolver;

impl PathResolver {
    /// Application data directory: `$DONATION_CORE_HOME` or `~/.donation_core`.
    pub fn base_dir() -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    pub fn resolve_base(root: Option<PathBuf>) -> PathBuf {
        root.unwrap_or_else(Self::base_dir)
    }

    pub fn snapshot_dir_in(base: &Path) -> PathBuf {
        base.join(SNAPSHOT_DIR)
    }

    pub fn config_dir_in(base: &Path) -> PathBuf {
        base.join(CONFIG_DIR)
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        Self::config_dir_in(base).join(CONFIG_FILE)
    }

    pub fn history_file_in(base: &Path) -> PathBuf {
        base.join(HISTORY_FILE)
    }
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Writes `data` next to `path` and renames it into place.
pub fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = tmp_path(path);
    fs::write(&tmp, data)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.tmp", existing),
        None => "tmp".to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
