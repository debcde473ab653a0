//! Per-donor donation history.

use crate::core::accessor::LedgerAccessor;
use crate::domain::{Donation, DonationTypeSummary, Donor, DonorReportEntry, Identifiable};

use super::aggregate::{group_by_type, total_quantity};
use super::ServiceResult;

/// Summarizes the donation history of every donor that has donated.
pub struct DonorReportService;

impl DonorReportService {
    /// Entries follow donor snapshot order; donors without donations are
    /// left out.
    pub fn generate<A>(accessor: &A) -> ServiceResult<Vec<DonorReportEntry>>
    where
        A: LedgerAccessor + ?Sized,
    {
        let donors = accessor.list_donors()?;
        let mut entries = Vec::new();
        for donor in &donors {
            let donations = accessor.list_donations_by_donor(donor.id())?;
            if let Some(entry) = summarize_donor(donor, &donations) {
                entries.push(entry);
            }
        }
        tracing::debug!(
            donors = donors.len(),
            reported = entries.len(),
            "generated donor report"
        );
        Ok(entries)
    }
}

fn summarize_donor(donor: &Donor, donations: &[Donation]) -> Option<DonorReportEntry> {
    let first = donations.first()?;
    let mut earliest = first;
    let mut latest = first;
    for donation in &donations[1..] {
        if donation.donation_date < earliest.donation_date {
            earliest = donation;
        }
        if donation.donation_date > latest.donation_date {
            latest = donation;
        }
    }

    let donation_summaries = group_by_type(donations)
        .into_iter()
        .map(|group| DonationTypeSummary {
            donation_type: group.donation_type,
            count: group.count,
            total_quantity: group.total,
            unit: group.unit,
        })
        .collect();

    Some(DonorReportEntry {
        donor_id: donor.id(),
        donor_name: donor.name.clone(),
        contact_info: donor.contact_info.clone(),
        first_donation_date: earliest.donation_date,
        last_donation_date: latest.donation_date,
        total_donations: donations.len(),
        total_value: total_quantity(donations),
        donation_summaries,
    })
}
