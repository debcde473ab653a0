//! Read-side access to donor, donation and distribution records.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::core::errors::Result;
use crate::domain::{Distribution, Donation, DonationLedger, Donor};

/// Collections and foreign-key lookups the reporting engine reads from.
///
/// Every lookup returns records in insertion order. Implementations backed by
/// a live store surface connectivity failures as errors; the reporting
/// services propagate them unchanged.
pub trait LedgerAccessor: Send + Sync {
    fn list_donors(&self) -> Result<Vec<Donor>>;
    fn list_donations(&self) -> Result<Vec<Donation>>;
    fn list_distributions(&self) -> Result<Vec<Distribution>>;
    fn list_donations_by_donor(&self, donor_id: Uuid) -> Result<Vec<Donation>>;
    fn list_donations_by_type(&self, donation_type: &str) -> Result<Vec<Donation>>;
    fn list_distributions_by_donation(&self, donation_id: Uuid) -> Result<Vec<Distribution>>;
    /// Counts donors whose `created_at` is strictly after `timestamp`.
    fn count_donors_created_after(&self, timestamp: DateTime<Utc>) -> Result<usize>;
}

impl LedgerAccessor for DonationLedger {
    fn list_donors(&self) -> Result<Vec<Donor>> {
        Ok(self.donors.clone())
    }

    fn list_donations(&self) -> Result<Vec<Donation>> {
        Ok(self.donations.clone())
    }

    fn list_distributions(&self) -> Result<Vec<Distribution>> {
        Ok(self.distributions.clone())
    }

    fn list_donations_by_donor(&self, donor_id: Uuid) -> Result<Vec<Donation>> {
        Ok(self
            .donations
            .iter()
            .filter(|donation| donation.donor_id == donor_id)
            .cloned()
            .collect())
    }

    fn list_donations_by_type(&self, donation_type: &str) -> Result<Vec<Donation>> {
        Ok(self
            .donations
            .iter()
            .filter(|donation| donation.donation_type == donation_type)
            .cloned()
            .collect())
    }

    fn list_distributions_by_donation(&self, donation_id: Uuid) -> Result<Vec<Distribution>> {
        Ok(self
            .distributions
            .iter()
            .filter(|distribution| distribution.donation_id == donation_id)
            .cloned()
            .collect())
    }

    fn count_donors_created_after(&self, timestamp: DateTime<Utc>) -> Result<usize> {
        Ok(self
            .donors
            .iter()
            .filter(|donor| donor.created_at > timestamp)
            .count())
    }
}

impl<A: LedgerAccessor + ?Sized> LedgerAccessor for &A {
    fn list_donors(&self) -> Result<Vec<Donor>> {
        (**self).list_donors()
    }

    fn list_donations(&self) -> Result<Vec<Donation>> {
        (**self).list_donations()
    }

    fn list_distributions(&self) -> Result<Vec<Distribution>> {
        (**self).list_distributions()
    }

    fn list_donations_by_donor(&self, donor_id: Uuid) -> Result<Vec<Donation>> {
        (**self).list_donations_by_donor(donor_id)
    }

    fn list_donations_by_type(&self, donation_type: &str) -> Result<Vec<Donation>> {
        (**self).list_donations_by_type(donation_type)
    }

    fn list_distributions_by_donation(&self, donation_id: Uuid) -> Result<Vec<Distribution>> {
        (**self).list_distributions_by_donation(donation_id)
    }

    fn count_donors_created_after(&self, timestamp: DateTime<Utc>) -> Result<usize> {
        (**self).count_donors_created_after(timestamp)
    }
}
