pub mod json_backend;

use crate::{core::errors::Result, domain::DonationLedger};

/// Abstraction over persistence backends capable of storing named snapshots.
pub trait SnapshotStorage: Send + Sync {
    fn save_snapshot(&self, name: &str, ledger: &DonationLedger) -> Result<()>;
    fn load_snapshot(&self, name: &str) -> Result<DonationLedger>;
    fn list_snapshots(&self) -> Result<Vec<String>>;
    fn delete_snapshot(&self, name: &str) -> Result<()>;
}

pub use json_backend::{
    canonical_name, load_snapshot_from_path, save_snapshot_to_path, JsonSnapshotStore,
};
