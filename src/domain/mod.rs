pub mod common;
pub mod distribution;
pub mod donation;
pub mod donor;
pub mod ledger;
pub mod report;

pub use common::{Displayable, Identifiable, DEFAULT_UNIT};
pub use distribution::Distribution;
pub use donation::Donation;
pub use donor::Donor;
pub use ledger::DonationLedger;
pub use report::{
    allocation_ratio, DistributionSummary, DonationBalance, DonationTypeStats,
    DonationTypeSummary, DonorReportEntry, DonorStats, InventoryReportEntry, MonthlyTrend,
    SystemStatistics,
};
