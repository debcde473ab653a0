pub mod aggregate;
pub mod donor_report_service;
pub mod integrity;
pub mod inventory_service;
pub mod ledger_queries;
pub mod report_service;
pub mod statistics_service;

pub use donor_report_service::DonorReportService;
pub use integrity::ledger_warnings;
pub use inventory_service::InventoryService;
pub use ledger_queries::LedgerQueries;
pub use report_service::ReportService;
pub use statistics_service::{StatisticsService, DEFAULT_RECENT_WINDOW_DAYS};

use crate::core::errors::DonationError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] DonationError),
    #[error("{0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests;
