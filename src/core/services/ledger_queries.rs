use uuid::Uuid;

use crate::core::accessor::LedgerAccessor;
use crate::core::errors::DonationError;
use crate::domain::{DistributionSummary, DonationBalance};

use super::aggregate::{total_distributed, total_quantity};
use super::ServiceResult;

/// Point lookups over the ledger: balances of single donations and totals
/// for one donor or donation type.
pub struct LedgerQueries;

impl LedgerQueries {
    /// Sum of every distribution drawn from `donation_id`; zero when none.
    pub fn distributed_for_donation<A>(accessor: &A, donation_id: Uuid) -> ServiceResult<f64>
    where
        A: LedgerAccessor + ?Sized,
    {
        let distributions = accessor.list_distributions_by_donation(donation_id)?;
        Ok(total_distributed(&distributions))
    }

    pub fn donation_balance<A>(accessor: &A, donation_id: Uuid) -> ServiceResult<DonationBalance>
    where
        A: LedgerAccessor + ?Sized,
    {
        let donation = accessor
            .list_donations()?
            .into_iter()
            .find(|donation| donation.id == donation_id)
            .ok_or(DonationError::DonationNotFound(donation_id))?;
        let distributed = Self::distributed_for_donation(accessor, donation_id)?;
        Ok(DonationBalance {
            donation_id,
            remaining: donation.quantity - distributed,
            donation_type: donation.donation_type,
            quantity: donation.quantity,
            distributed,
            unit: donation.unit,
        })
    }

    /// Quantity still available for distribution from a single donation.
    pub fn remaining_for_donation<A>(accessor: &A, donation_id: Uuid) -> ServiceResult<f64>
    where
        A: LedgerAccessor + ?Sized,
    {
        Ok(Self::donation_balance(accessor, donation_id)?.remaining)
    }

    pub fn total_quantity_by_type<A>(accessor: &A, donation_type: &str) -> ServiceResult<f64>
    where
        A: LedgerAccessor + ?Sized,
    {
        Ok(total_quantity(&accessor.list_donations_by_type(donation_type)?))
    }

    /// Total donated quantity of one donor; errors for an unknown donor id.
    pub fn total_value_by_donor<A>(accessor: &A, donor_id: Uuid) -> ServiceResult<f64>
    where
        A: LedgerAccessor + ?Sized,
    {
        if !accessor.list_donors()?.iter().any(|donor| donor.id == donor_id) {
            return Err(DonationError::DonorNotFound(donor_id).into());
        }
        Ok(total_quantity(&accessor.list_donations_by_donor(donor_id)?))
    }

    pub fn distribution_summary<A>(accessor: &A) -> ServiceResult<DistributionSummary>
    where
        A: LedgerAccessor + ?Sized,
    {
        let distributions = accessor.list_distributions()?;
        Ok(DistributionSummary {
            count: distributions.len(),
            total_quantity: total_distributed(&distributions),
        })
    }
}
