use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

use crate::core::accessor::LedgerAccessor;
use crate::core::clock::FixedClock;
use crate::core::errors::{DonationError, Result};
use crate::core::services::{ReportService, ServiceError};
use crate::domain::{Distribution, Donation, DonationLedger, Donor};

/// Serves records from a ledger while the selected reads fail.
struct FlakyStore {
    ledger: DonationLedger,
    distributions_down: bool,
    donor_count_down: bool,
}

fn outage() -> DonationError {
    DonationError::StorageError("ledger store unreachable".into())
}

impl LedgerAccessor for FlakyStore {
    fn list_donors(&self) -> Result<Vec<Donor>> {
        self.ledger.list_donors()
    }

    fn list_donations(&self) -> Result<Vec<Donation>> {
        self.ledger.list_donations()
    }

    fn list_distributions(&self) -> Result<Vec<Distribution>> {
        if self.distributions_down {
            return Err(outage());
        }
        self.ledger.list_distributions()
    }

    fn list_donations_by_donor(&self, donor_id: Uuid) -> Result<Vec<Donation>> {
        self.ledger.list_donations_by_donor(donor_id)
    }

    fn list_donations_by_type(&self, donation_type: &str) -> Result<Vec<Donation>> {
        self.ledger.list_donations_by_type(donation_type)
    }

    fn list_distributions_by_donation(&self, donation_id: Uuid) -> Result<Vec<Distribution>> {
        if self.distributions_down {
            return Err(outage());
        }
        self.ledger.list_distributions_by_donation(donation_id)
    }

    fn count_donors_created_after(&self, timestamp: DateTime<Utc>) -> Result<usize> {
        if self.donor_count_down {
            return Err(outage());
        }
        self.ledger.count_donors_created_after(timestamp)
    }
}

fn store(distributions_down: bool, donor_count_down: bool) -> FlakyStore {
    let mut ledger = DonationLedger::new("Outage");
    let donor = ledger.add_donor(Donor::new("Mia"));
    let donation = ledger.add_donation(Donation::new(donor, "food", 6.0));
    ledger.add_distribution(Distribution::new(donation, 2.0, "Pantry", "555-0400"));
    FlakyStore {
        ledger,
        distributions_down,
        donor_count_down,
    }
}

fn is_storage_error<T>(result: std::result::Result<T, ServiceError>) -> bool {
    matches!(
        result,
        Err(ServiceError::Core(DonationError::StorageError(_)))
    )
}

fn service(accessor: &FlakyStore) -> ReportService<&FlakyStore, FixedClock> {
    let now = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
    ReportService::with_clock(accessor, FixedClock(now))
}

#[test]
fn distribution_outage_fails_distribution_reports() {
    let accessor = store(true, false);
    let reports = service(&accessor);

    assert!(is_storage_error(reports.generate_inventory_report()));
    assert!(is_storage_error(reports.inventory_for_type("food")));
    assert!(is_storage_error(reports.system_statistics(Some(30))));
    assert!(is_storage_error(reports.integrity_warnings()));
}

#[test]
fn donor_report_does_not_read_distributions() {
    let accessor = store(true, false);
    let report = service(&accessor).generate_donor_report().unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].total_value, 6.0);
}

#[test]
fn unknown_type_lookup_never_touches_distributions() {
    let accessor = store(true, false);
    assert!(service(&accessor)
        .inventory_for_type("toys")
        .unwrap()
        .is_none());
}

#[test]
fn failing_donor_count_fails_statistics() {
    let accessor = store(false, true);
    let reports = service(&accessor);

    let err = reports.system_statistics(None).unwrap_err();
    assert_eq!(err.to_string(), "Persistence error: ledger store unreachable");
    assert_eq!(reports.generate_inventory_report().unwrap().len(), 1);
}
