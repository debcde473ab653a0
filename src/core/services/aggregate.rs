//! Grouping and reduction helpers shared by the report services.

use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::{Displayable, Distribution, Donation};

/// Donations of one type, reduced to count, total quantity and unit.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TypeGroup {
    pub donation_type: String,
    pub count: usize,
    pub total: f64,
    pub unit: String,
    pub mixed_units: bool,
}

/// Groups donations by type in first-encountered order.
pub(crate) fn group_by_type<'a, I>(donations: I) -> Vec<TypeGroup>
where
    I: IntoIterator<Item = &'a Donation>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<TypeGroup> = Vec::new();
    for donation in donations {
        match index.get(donation.donation_type.as_str()) {
            Some(&slot) => {
                let group = &mut groups[slot];
                group.count += 1;
                group.total += donation.quantity;
                if group.unit != donation.unit {
                    group.mixed_units = true;
                }
            }
            None => {
                index.insert(donation.donation_type.as_str(), groups.len());
                groups.push(TypeGroup {
                    donation_type: donation.donation_type.clone(),
                    count: 1,
                    total: donation.quantity,
                    unit: donation.unit.clone(),
                    mixed_units: false,
                });
            }
        }
    }
    groups
}

/// Maps every donation id to its donation type.
pub(crate) fn donation_type_index(donations: &[Donation]) -> HashMap<Uuid, &str> {
    donations
        .iter()
        .map(|donation| (donation.id, donation.donation_type.as_str()))
        .collect()
}

/// Distributed quantities keyed by the parent donation's type.
#[derive(Debug, Default)]
pub(crate) struct DistributedByType {
    pub by_type: HashMap<String, f64>,
    pub unresolved_count: usize,
    pub unresolved_total: f64,
}

impl DistributedByType {
    pub fn amount_for(&self, donation_type: &str) -> f64 {
        self.by_type.get(donation_type).copied().unwrap_or(0.0)
    }
}

/// Sums distributions per donation type; dangling donation references are
/// tallied separately instead of being attributed to any type.
pub(crate) fn distributed_by_type(
    index: &HashMap<Uuid, &str>,
    distributions: &[Distribution],
) -> DistributedByType {
    let mut totals = DistributedByType::default();
    for distribution in distributions {
        match index.get(&distribution.donation_id) {
            Some(donation_type) => {
                *totals
                    .by_type
                    .entry((*donation_type).to_string())
                    .or_insert(0.0) += distribution.quantity_distributed;
            }
            None => {
                tracing::warn!(
                    distribution = %distribution.id,
                    donation = %distribution.donation_id,
                    label = %distribution.display_label(),
                    "distribution references unknown donation; excluded from type totals"
                );
                totals.unresolved_count += 1;
                totals.unresolved_total += distribution.quantity_distributed;
            }
        }
    }
    totals
}

pub(crate) fn total_quantity<'a, I>(donations: I) -> f64
where
    I: IntoIterator<Item = &'a Donation>,
{
    donations.into_iter().map(|donation| donation.quantity).sum()
}

pub(crate) fn total_distributed<'a, I>(distributions: I) -> f64
where
    I: IntoIterator<Item = &'a Distribution>,
{
    distributions
        .into_iter()
        .map(|distribution| distribution.quantity_distributed)
        .sum()
}
