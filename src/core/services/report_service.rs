use uuid::Uuid;

use crate::core::accessor::LedgerAccessor;
use crate::core::clock::{Clock, SystemClock};
use crate::domain::{DonationBalance, DonorReportEntry, InventoryReportEntry, SystemStatistics};

use super::statistics_service::DEFAULT_RECENT_WINDOW_DAYS;
use super::{
    integrity, DonorReportService, InventoryService, LedgerQueries, ServiceResult,
    StatisticsService,
};

/// Read-only reporting surface over a ledger accessor.
///
/// Every call re-reads the accessor; nothing is cached between reports.
pub struct ReportService<A, C = SystemClock> {
    accessor: A,
    clock: C,
    default_window_days: i64,
}

impl<A: LedgerAccessor> ReportService<A, SystemClock> {
    pub fn new(accessor: A) -> Self {
        Self::with_clock(accessor, SystemClock)
    }
}

impl<A: LedgerAccessor, C: Clock> ReportService<A, C> {
    pub fn with_clock(accessor: A, clock: C) -> Self {
        Self {
            accessor,
            clock,
            default_window_days: DEFAULT_RECENT_WINDOW_DAYS,
        }
    }

    /// Overrides the window used by [`Self::system_statistics`] when called
    /// without an explicit day count.
    pub fn with_default_window(mut self, days: i64) -> Self {
        self.default_window_days = days;
        self
    }

    pub fn accessor(&self) -> &A {
        &self.accessor
    }

    pub fn generate_inventory_report(&self) -> ServiceResult<Vec<InventoryReportEntry>> {
        InventoryService::generate(&self.accessor)
    }

    pub fn inventory_for_type(
        &self,
        donation_type: &str,
    ) -> ServiceResult<Option<InventoryReportEntry>> {
        InventoryService::for_type(&self.accessor, donation_type)
    }

    pub fn generate_donor_report(&self) -> ServiceResult<Vec<DonorReportEntry>> {
        DonorReportService::generate(&self.accessor)
    }

    pub fn system_statistics(&self, window_days: Option<i64>) -> ServiceResult<SystemStatistics> {
        let days = window_days.unwrap_or(self.default_window_days);
        StatisticsService::generate(&self.accessor, &self.clock, days)
    }

    pub fn ledger_balance(&self, donation_id: Uuid) -> ServiceResult<DonationBalance> {
        LedgerQueries::donation_balance(&self.accessor, donation_id)
    }

    pub fn integrity_warnings(&self) -> ServiceResult<Vec<String>> {
        integrity::ledger_warnings(&self.accessor)
    }
}
