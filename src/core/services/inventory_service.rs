//! Inventory remaining per donation type.

use crate::core::accessor::LedgerAccessor;
use crate::domain::InventoryReportEntry;

use super::aggregate::{distributed_by_type, donation_type_index, group_by_type, TypeGroup};
use super::{ServiceError, ServiceResult};

/// Computes received, distributed and remaining quantities per donation type.
pub struct InventoryService;

impl InventoryService {
    /// One entry per donation type present in the snapshot, largest
    /// `total_received` first. Ties keep the order types were first seen.
    pub fn generate<A>(accessor: &A) -> ServiceResult<Vec<InventoryReportEntry>>
    where
        A: LedgerAccessor + ?Sized,
    {
        let donations = accessor.list_donations()?;
        let distributions = accessor.list_distributions()?;

        let index = donation_type_index(&donations);
        let distributed = distributed_by_type(&index, &distributions);

        let mut entries: Vec<InventoryReportEntry> = group_by_type(&donations)
            .into_iter()
            .map(|group| {
                let total_distributed = distributed.amount_for(&group.donation_type);
                entry_from_group(group, total_distributed)
            })
            .collect();
        entries.sort_by(|a, b| b.total_received.total_cmp(&a.total_received));

        tracing::debug!(
            types = entries.len(),
            donations = donations.len(),
            distributions = distributions.len(),
            "generated inventory report"
        );
        Ok(entries)
    }

    /// Inventory position of a single donation type, `None` when no donation
    /// of that type exists. A blank type is rejected.
    pub fn for_type<A>(
        accessor: &A,
        donation_type: &str,
    ) -> ServiceResult<Option<InventoryReportEntry>>
    where
        A: LedgerAccessor + ?Sized,
    {
        if donation_type.trim().is_empty() {
            return Err(ServiceError::Invalid("donation type must not be empty".into()));
        }
        let donations = accessor.list_donations_by_type(donation_type)?;
        let Some(group) = group_by_type(&donations).into_iter().next() else {
            return Ok(None);
        };
        let mut total_distributed = 0.0;
        for donation in &donations {
            total_distributed += accessor
                .list_distributions_by_donation(donation.id)?
                .iter()
                .map(|distribution| distribution.quantity_distributed)
                .sum::<f64>();
        }
        Ok(Some(entry_from_group(group, total_distributed)))
    }
}

fn entry_from_group(group: TypeGroup, total_distributed: f64) -> InventoryReportEntry {
    let mut entry = InventoryReportEntry::new(
        group.donation_type,
        group.total,
        total_distributed,
        group.unit,
    );
    entry.mixed_units = group.mixed_units;
    entry
}
