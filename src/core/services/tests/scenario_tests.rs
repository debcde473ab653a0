use chrono::{Duration, TimeZone, Utc};

use crate::core::clock::FixedClock;
use crate::core::services::{InventoryService, ReportService, StatisticsService};
use crate::domain::{Distribution, Donation, DonationLedger, Donor};

#[test]
fn food_inventory_nets_distributions() {
    let mut ledger = DonationLedger::new("Scenario A");
    let alice = ledger.add_donor(Donor::new("Alice"));
    let first = ledger.add_donation(Donation::new(alice, "food", 10.0).with_unit("kg"));
    ledger.add_donation(Donation::new(alice, "food", 5.0).with_unit("kg"));
    ledger.add_distribution(Distribution::new(first, 8.0, "Food bank", "555-0300"));

    let report = InventoryService::generate(&ledger).unwrap();
    assert_eq!(report.len(), 1);
    let food = &report[0];
    assert_eq!(food.donation_type, "food");
    assert_eq!(food.total_received, 15.0);
    assert_eq!(food.total_distributed, 8.0);
    assert_eq!(food.remaining_quantity, 7.0);
    assert_eq!(food.unit, "kg");
}

#[test]
fn empty_ledger_yields_empty_reports() {
    let ledger = DonationLedger::new("Scenario B");
    let service = ReportService::new(&ledger);

    assert!(service.generate_inventory_report().unwrap().is_empty());
    assert!(service.generate_donor_report().unwrap().is_empty());

    let stats = service.system_statistics(None).unwrap();
    assert_eq!(stats.total_donations, 0);
    assert_eq!(stats.total_donation_value, 0.0);
    assert_eq!(stats.total_distributed_value, 0.0);
    assert!(stats.donation_type_stats.is_empty());
    assert_eq!(stats.window_days, 30);
}

#[test]
fn new_donor_count_follows_window() {
    let now = Utc.with_ymd_and_hms(2024, 9, 15, 8, 0, 0).unwrap();
    let mut ledger = DonationLedger::new("Scenario C");
    ledger.add_donor(Donor::new("Veteran").created_at(now - Duration::days(40)));

    let clock = FixedClock(now);
    let narrow = StatisticsService::generate(&ledger, &clock, 30).unwrap();
    assert_eq!(narrow.donor_stats.new_count, 0);
    let wide = StatisticsService::generate(&ledger, &clock, 45).unwrap();
    assert_eq!(wide.donor_stats.new_count, 1);
    assert_eq!(wide.donor_stats.active_count, 1);
}

#[test]
fn zero_total_type_reports_zero_allocation() {
    let mut ledger = DonationLedger::new("Scenario D");
    let donor = ledger.add_donor(Donor::new("Lee"));
    ledger.add_donation(Donation::new(donor, "clothing", 0.0));

    let clock = FixedClock(Utc::now());
    let stats = StatisticsService::generate(&ledger, &clock, 30).unwrap();
    let clothing = &stats.donation_type_stats[0];
    assert_eq!(clothing.total_amount, 0.0);
    assert_eq!(clothing.percent_allocated, 0.0);
    assert_eq!(clothing.percent_pct, 0.0);
}

#[test]
fn zero_window_counts_only_future_donors() {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut ledger = DonationLedger::new("Window zero");
    ledger.add_donor(Donor::new("Exactly now").created_at(now));
    ledger.add_donor(Donor::new("Tomorrow").created_at(now + Duration::days(1)));

    let stats = StatisticsService::generate(&ledger, &FixedClock(now), 0).unwrap();
    assert_eq!(stats.donor_stats.new_count, 1);
}
