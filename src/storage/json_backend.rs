use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    core::{
        errors::{DonationError, Result},
        services::ledger_warnings,
        utils::{ensure_dir, write_atomic, PathResolver},
    },
    domain::DonationLedger,
};

use super::SnapshotStorage;

const SNAPSHOT_EXTENSION: &str = "json";

/// Stores ledger snapshots as pretty-printed JSON files in one directory.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    root: PathBuf,
    snapshots_dir: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = PathResolver::resolve_base(root);
        ensure_dir(&root)?;
        let snapshots_dir = PathResolver::snapshot_dir_in(&root);
        ensure_dir(&snapshots_dir)?;
        Ok(Self {
            root,
            snapshots_dir,
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn snapshot_path(&self, name: &str) -> PathBuf {
        self.snapshots_dir
            .join(format!("{}.{}", canonical_name(name), SNAPSHOT_EXTENSION))
    }
}

impl SnapshotStorage for JsonSnapshotStore {
    fn save_snapshot(&self, name: &str, ledger: &DonationLedger) -> Result<()> {
        require_name(name)?;
        save_snapshot_to_path(ledger, &self.snapshot_path(name))
    }

    fn load_snapshot(&self, name: &str) -> Result<DonationLedger> {
        require_name(name)?;
        let path = self.snapshot_path(name);
        if !path.exists() {
            return Err(DonationError::StorageError(format!(
                "snapshot `{}` not found",
                name
            )));
        }
        load_snapshot_from_path(&path)
    }

    fn list_snapshots(&self) -> Result<Vec<String>> {
        if !self.snapshots_dir.exists() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.snapshots_dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(SNAPSHOT_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn delete_snapshot(&self, name: &str) -> Result<()> {
        let path = self.snapshot_path(name);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// Writes a snapshot to an arbitrary path, staging through a temporary file.
pub fn save_snapshot_to_path(ledger: &DonationLedger, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(ledger)?;
    write_atomic(path, &json)?;
    tracing::debug!(path = %path.display(), "saved snapshot");
    Ok(())
}

/// Loads a snapshot from disk and logs any referential anomalies it carries.
pub fn load_snapshot_from_path(path: &Path) -> Result<DonationLedger> {
    let data = fs::read_to_string(path)?;
    let ledger: DonationLedger = serde_json::from_str(&data)?;
    let warnings = ledger_warnings(&ledger).map_err(|err| {
        DonationError::StorageError(format!("failed to inspect snapshot: {err}"))
    })?;
    for warning in &warnings {
        tracing::warn!(path = %path.display(), "{}", warning);
    }
    tracing::debug!(
        path = %path.display(),
        donors = ledger.donors.len(),
        donations = ledger.donations.len(),
        distributions = ledger.distributions.len(),
        "loaded snapshot"
    );
    Ok(ledger)
}

fn require_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(DonationError::InvalidInput(
            "snapshot name must not be empty".into(),
        ));
    }
    Ok(())
}

/// File stem a snapshot name is stored under: lower-case `[a-z0-9-]`, every
/// other character replaced by `_`.
pub fn canonical_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '-' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "snapshot".into()
    } else {
        sanitized
    }
}
