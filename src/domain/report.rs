//! Statically shaped report structures returned by the reporting services.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Inventory position for one donation type.
///
/// Donations are grouped by type only. `unit` is the unit of the first
/// donation seen for the type; `mixed_units` is set when later donations of
/// the same type were recorded in a different unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InventoryReportEntry {
    pub donation_type: String,
    pub total_received: f64,
    pub total_distributed: f64,
    pub remaining_quantity: f64,
    pub unit: String,
    #[serde(default)]
    pub mixed_units: bool,
}

impl InventoryReportEntry {
    pub fn new(
        donation_type: impl Into<String>,
        total_received: f64,
        total_distributed: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            donation_type: donation_type.into(),
            total_received,
            total_distributed,
            remaining_quantity: total_received - total_distributed,
            unit: unit.into(),
            mixed_units: false,
        }
    }
}

/// Donation history for a donor with at least one donation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DonorReportEntry {
    pub donor_id: Uuid,
    pub donor_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
    pub first_donation_date: DateTime<Utc>,
    pub last_donation_date: DateTime<Utc>,
    pub total_donations: usize,
    /// Sum of raw quantities across every type and unit.
    pub total_value: f64,
    #[serde(default)]
    pub donation_summaries: Vec<DonationTypeSummary>,
}

/// Per-type breakdown of a single donor's donations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DonationTypeSummary {
    pub donation_type: String,
    pub count: usize,
    pub total_quantity: f64,
    pub unit: String,
}

/// System-wide aggregate snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemStatistics {
    pub generated_at: DateTime<Utc>,
    pub window_days: i64,
    pub total_donors: usize,
    pub total_donations: usize,
    pub total_distributions: usize,
    pub total_donation_value: f64,
    pub total_distributed_value: f64,
    /// Distributions whose donation is missing from the snapshot. They count
    /// toward `total_distributed_value` but toward no type breakdown.
    pub unresolved_distributions: usize,
    pub unresolved_distributed_value: f64,
    pub donation_type_stats: Vec<DonationTypeStats>,
    pub donor_stats: DonorStats,
    /// Reserved for historical bucketing; always empty.
    pub monthly_trends: Vec<MonthlyTrend>,
}

/// Allocation figures for one donation type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DonationTypeStats {
    pub donation_type: String,
    pub count: usize,
    pub total_amount: f64,
    pub distributed_amount: f64,
    /// Fraction in `0..=1` (above 1 only for over-distributed types).
    pub percent_allocated: f64,
    /// `percent_allocated` scaled by 100 for display.
    pub percent_pct: f64,
}

impl DonationTypeStats {
    pub fn new(
        donation_type: impl Into<String>,
        count: usize,
        total_amount: f64,
        distributed_amount: f64,
    ) -> Self {
        let percent_allocated = allocation_ratio(distributed_amount, total_amount);
        Self {
            donation_type: donation_type.into(),
            count,
            total_amount,
            distributed_amount,
            percent_allocated,
            percent_pct: percent_allocated * 100.0,
        }
    }
}

/// Donor counts. `active_count` is the count of every known donor.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DonorStats {
    pub active_count: usize,
    pub new_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyTrend {
    pub month: String,
    pub donation_value: f64,
    pub distributed_value: f64,
}

/// Balance of a single donation against its distributions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DonationBalance {
    pub donation_id: Uuid,
    pub donation_type: String,
    pub quantity: f64,
    pub distributed: f64,
    pub remaining: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct DistributionSummary {
    pub count: usize,
    pub total_quantity: f64,
}

/// Share of `total` that has been distributed; zero when nothing was received.
pub fn allocation_ratio(distributed: f64, total: f64) -> f64 {
    if total > 0.0 {
        distributed / total
    } else {
        0.0
    }
}
