mod common;

use chrono::Duration;
use donation_core::core::services::{ReportService, ServiceError};
use donation_core::core::{DonationError, FixedClock};
use donation_core::domain::{Distribution, DonationLedger};
use uuid::Uuid;

use common::{food_bank, reference_now};

fn service(ledger: &DonationLedger) -> ReportService<&DonationLedger, FixedClock> {
    ReportService::with_clock(ledger, FixedClock(reference_now()))
}

#[test]
fn inventory_groups_by_type_and_sorts_by_received() {
    let bank = food_bank();
    let report = service(&bank.ledger).generate_inventory_report().unwrap();

    assert_eq!(report.len(), 2);
    assert_eq!(report[0].donation_type, "food");
    assert_eq!(report[0].total_received, 20.0);
    assert_eq!(report[0].total_distributed, 12.0);
    assert_eq!(report[0].remaining_quantity, 8.0);
    assert_eq!(report[0].unit, "kg");
    assert_eq!(report[1].donation_type, "clothing");
    assert_eq!(report[1].remaining_quantity, 15.0);
    assert_eq!(report[1].unit, "pieces");
}

#[test]
fn inventory_for_single_type() {
    let bank = food_bank();
    let reports = service(&bank.ledger);

    let clothing = reports.inventory_for_type("clothing").unwrap().unwrap();
    assert_eq!(clothing.total_received, 20.0);
    assert_eq!(clothing.total_distributed, 5.0);
    assert!(reports.inventory_for_type("toys").unwrap().is_none());
}

#[test]
fn donor_report_skips_donors_without_donations() {
    let bank = food_bank();
    let report = service(&bank.ledger).generate_donor_report().unwrap();

    assert_eq!(report.len(), 2);
    assert!(report.iter().all(|entry| entry.donor_id != bank.carol));

    let alice = report.iter().find(|entry| entry.donor_id == bank.alice).unwrap();
    assert_eq!(alice.total_donations, 2);
    assert_eq!(alice.total_value, 20.0);
    assert_eq!(alice.contact_info.as_deref(), Some("alice@example.org"));
    assert_eq!(alice.first_donation_date, reference_now() - Duration::days(60));
    assert_eq!(alice.last_donation_date, reference_now() - Duration::days(10));

    let bob = report.iter().find(|entry| entry.donor_id == bank.bob).unwrap();
    assert_eq!(bob.total_donations, 1);
    assert_eq!(bob.first_donation_date, bob.last_donation_date);
}

#[test]
fn statistics_count_new_donors_in_window() {
    let bank = food_bank();
    let reports = service(&bank.ledger);

    let stats = reports.system_statistics(Some(30)).unwrap();
    assert_eq!(stats.total_donors, 3);
    assert_eq!(stats.total_donations, 3);
    assert_eq!(stats.total_distributions, 3);
    assert_eq!(stats.total_donation_value, 40.0);
    assert_eq!(stats.total_distributed_value, 17.0);
    assert_eq!(stats.donor_stats.active_count, 3);
    assert_eq!(stats.donor_stats.new_count, 2);
    assert!(stats.monthly_trends.is_empty());

    let food = &stats.donation_type_stats[0];
    assert_eq!(food.donation_type, "food");
    assert_eq!(food.count, 2);
    assert!((food.percent_allocated - 0.6).abs() < 1e-9);
    assert!((food.percent_pct - 60.0).abs() < 1e-9);

    let narrow = reports.system_statistics(Some(2)).unwrap();
    assert_eq!(narrow.donor_stats.new_count, 1);
}

#[test]
fn statistics_use_configured_default_window() {
    let bank = food_bank();
    let stats = service(&bank.ledger)
        .with_default_window(7)
        .system_statistics(None)
        .unwrap();
    assert_eq!(stats.window_days, 7);
    assert_eq!(stats.donor_stats.new_count, 2);
}

#[test]
fn dangling_distribution_is_reported_but_not_attributed() {
    let mut bank = food_bank();
    bank.ledger
        .add_distribution(Distribution::new(Uuid::new_v4(), 3.0, "Ghost", "n/a"));
    let reports = service(&bank.ledger);

    let stats = reports.system_statistics(None).unwrap();
    assert_eq!(stats.total_distributed_value, 20.0);
    assert_eq!(stats.unresolved_distributions, 1);
    assert_eq!(stats.unresolved_distributed_value, 3.0);
    let attributed: f64 = stats
        .donation_type_stats
        .iter()
        .map(|entry| entry.distributed_amount)
        .sum();
    assert_eq!(attributed + stats.unresolved_distributed_value, stats.total_distributed_value);

    let warnings = reports.integrity_warnings().unwrap();
    assert_eq!(warnings.len(), 1);
}

#[test]
fn balance_of_single_donation() {
    let bank = food_bank();
    let reports = service(&bank.ledger);

    let balance = reports.ledger_balance(bank.rice).unwrap();
    assert_eq!(balance.distributed, 8.0);
    assert_eq!(balance.remaining, 2.0);
    assert_eq!(balance.unit, "kg");

    let missing = Uuid::new_v4();
    match reports.ledger_balance(missing) {
        Err(ServiceError::Core(DonationError::DonationNotFound(id))) => assert_eq!(id, missing),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn over_distribution_goes_negative_and_is_flagged() {
    let mut bank = food_bank();
    bank.ledger
        .add_distribution(Distribution::new(bank.rice_late, 9.0, "Kitchen", "kitchen@example.org"));
    let reports = service(&bank.ledger);

    let late = reports.ledger_balance(bank.rice_late).unwrap();
    assert_eq!(late.remaining, -3.0);

    let food = reports.inventory_for_type("food").unwrap().unwrap();
    assert_eq!(food.remaining_quantity, -1.0);

    let warnings = reports.integrity_warnings().unwrap();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("distributed 13 of 10 kg"));
}

#[test]
fn empty_ledger_produces_empty_reports() {
    let ledger = DonationLedger::new("Empty");
    let reports = service(&ledger);

    assert!(reports.generate_inventory_report().unwrap().is_empty());
    assert!(reports.generate_donor_report().unwrap().is_empty());
    let stats = reports.system_statistics(None).unwrap();
    assert_eq!(stats.total_donors, 0);
    assert!(stats.donation_type_stats.is_empty());
    assert!(reports.integrity_warnings().unwrap().is_empty());
}
