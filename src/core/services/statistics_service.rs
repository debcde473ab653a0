//! System-wide totals, per-type allocation and recent donor counts.

use chrono::{DateTime, Duration, Utc};

use crate::core::accessor::LedgerAccessor;
use crate::core::clock::Clock;
use crate::domain::{DonationTypeStats, DonorStats, SystemStatistics};

use super::aggregate::{
    distributed_by_type, donation_type_index, group_by_type, total_distributed, total_quantity,
};
use super::ServiceResult;

/// Trailing window used for the new-donor count when the caller gives none.
pub const DEFAULT_RECENT_WINDOW_DAYS: i64 = 30;

pub struct StatisticsService;

impl StatisticsService {
    /// Builds the statistics snapshot. Negative windows are treated as zero,
    /// which only counts donors created after `clock.now()`.
    pub fn generate<A, C>(
        accessor: &A,
        clock: &C,
        window_days: i64,
    ) -> ServiceResult<SystemStatistics>
    where
        A: LedgerAccessor + ?Sized,
        C: Clock + ?Sized,
    {
        let window_days = window_days.max(0);
        let now = clock.now();

        let donors = accessor.list_donors()?;
        let donations = accessor.list_donations()?;
        let distributions = accessor.list_distributions()?;

        let index = donation_type_index(&donations);
        let distributed = distributed_by_type(&index, &distributions);

        let donation_type_stats: Vec<DonationTypeStats> = group_by_type(&donations)
            .into_iter()
            .map(|group| {
                let distributed_amount = distributed.amount_for(&group.donation_type);
                DonationTypeStats::new(
                    group.donation_type,
                    group.count,
                    group.total,
                    distributed_amount,
                )
            })
            .collect();

        let new_count = accessor.count_donors_created_after(window_start(now, window_days))?;

        let stats = SystemStatistics {
            generated_at: now,
            window_days,
            total_donors: donors.len(),
            total_donations: donations.len(),
            total_distributions: distributions.len(),
            total_donation_value: total_quantity(&donations),
            total_distributed_value: total_distributed(&distributions),
            unresolved_distributions: distributed.unresolved_count,
            unresolved_distributed_value: distributed.unresolved_total,
            donation_type_stats,
            donor_stats: DonorStats {
                active_count: donors.len(),
                new_count,
            },
            monthly_trends: Vec::new(),
        };

        tracing::debug!(
            window_days,
            types = stats.donation_type_stats.len(),
            new_donors = new_count,
            "generated system statistics"
        );
        Ok(stats)
    }
}

/// `now - days`, saturating at the earliest representable instant.
fn window_start(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    Duration::try_days(days)
        .and_then(|span| now.checked_sub_signed(span))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
