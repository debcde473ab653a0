use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{distribution::Distribution, donation::Donation, donor::Donor};

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Point-in-time snapshot of every donor, donation and distribution record.
///
/// Collections keep insertion order; foreign-key lookups over a snapshot
/// return records in that order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationLedger {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub donors: Vec<Donor>,
    #[serde(default)]
    pub donations: Vec<Donation>,
    #[serde(default)]
    pub distributions: Vec<Distribution>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default = "DonationLedger::schema_version_default")]
    pub schema_version: u8,
}

impl DonationLedger {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            donors: Vec::new(),
            donations: Vec::new(),
            distributions: Vec::new(),
            created_at: now,
            updated_at: now,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    pub fn add_donor(&mut self, donor: Donor) -> Uuid {
        let id = donor.id;
        self.donors.push(donor);
        self.touch();
        id
    }

    pub fn add_donation(&mut self, donation: Donation) -> Uuid {
        let id = donation.id;
        self.donations.push(donation);
        self.touch();
        id
    }

    pub fn add_distribution(&mut self, distribution: Distribution) -> Uuid {
        let id = distribution.id;
        self.distributions.push(distribution);
        self.touch();
        id
    }

    pub fn donor(&self, id: Uuid) -> Option<&Donor> {
        self.donors.iter().find(|donor| donor.id == id)
    }

    pub fn donation(&self, id: Uuid) -> Option<&Donation> {
        self.donations.iter().find(|donation| donation.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.donors.is_empty() && self.donations.is_empty() && self.distributions.is_empty()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}
