use std::collections::{HashMap, HashSet};

use crate::core::accessor::LedgerAccessor;
use crate::domain::Displayable;

use super::ServiceResult;

/// Detects dangling references and over-distributed donations.
///
/// Reports tolerate these anomalies; this surfaces them for operators.
pub fn ledger_warnings<A>(accessor: &A) -> ServiceResult<Vec<String>>
where
    A: LedgerAccessor + ?Sized,
{
    let donors = accessor.list_donors()?;
    let donations = accessor.list_donations()?;
    let distributions = accessor.list_distributions()?;

    let donor_ids: HashSet<_> = donors.iter().map(|donor| donor.id).collect();
    let mut distributed: HashMap<_, f64> = HashMap::new();
    let mut warnings = Vec::new();

    for donation in &donations {
        if !donor_ids.contains(&donation.donor_id) {
            warnings.push(format!(
                "donation {} ({}) references unknown donor {}",
                donation.id,
                donation.display_label(),
                donation.donor_id
            ));
        }
    }

    let donation_ids: HashSet<_> = donations.iter().map(|donation| donation.id).collect();
    for distribution in &distributions {
        if donation_ids.contains(&distribution.donation_id) {
            *distributed.entry(distribution.donation_id).or_insert(0.0) +=
                distribution.quantity_distributed;
        } else {
            warnings.push(format!(
                "distribution {} ({}) references unknown donation {}",
                distribution.id,
                distribution.display_label(),
                distribution.donation_id
            ));
        }
    }

    for donation in &donations {
        let used = distributed.get(&donation.id).copied().unwrap_or(0.0);
        if used > donation.quantity {
            warnings.push(format!(
                "donation {} distributed {} of {} {}",
                donation.id, used, donation.quantity, donation.unit
            ));
        }
    }
    Ok(warnings)
}
