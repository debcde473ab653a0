use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use donation_core::core::services::ReportService;
use donation_core::core::FixedClock;
use donation_core::domain::{Distribution, Donation, DonationLedger, Donor};
use donation_core::storage::{load_snapshot_from_path, save_snapshot_to_path};
use tempfile::tempdir;

const TYPES: [&str; 6] = ["food", "clothing", "money", "books", "toys", "hygiene"];

fn build_sample_ledger(donation_count: usize) -> DonationLedger {
    let mut ledger = DonationLedger::new("Benchmark");
    let start = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();

    let donors: Vec<_> = (0..donation_count / 10 + 1)
        .map(|idx| {
            ledger.add_donor(
                Donor::new(format!("Donor {idx}")).created_at(start + Duration::days((idx % 365) as i64)),
            )
        })
        .collect();

    for idx in 0..donation_count {
        let donor = donors[idx % donors.len()];
        let donation = ledger.add_donation(
            Donation::new(donor, TYPES[idx % TYPES.len()], 10.0 + (idx % 50) as f64)
                .dated(start + Duration::days((idx % 365) as i64)),
        );
        if idx % 2 == 0 {
            ledger.add_distribution(Distribution::new(donation, 5.0, "Shelter", "555-0100"));
        }
    }
    ledger
}

fn bench_reports(c: &mut Criterion) {
    let ledger = build_sample_ledger(10_000);
    let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let reports = ReportService::with_clock(&ledger, FixedClock(now));

    c.bench_function("inventory_report_10k", |b| {
        b.iter(|| black_box(reports.generate_inventory_report().expect("inventory")))
    });

    c.bench_function("donor_report_10k", |b| {
        b.iter(|| black_box(reports.generate_donor_report().expect("donor report")))
    });

    c.bench_function("system_statistics_10k", |b| {
        b.iter(|| black_box(reports.system_statistics(Some(30)).expect("statistics")))
    });
}

fn bench_snapshot_io(c: &mut Criterion) {
    let ledger = build_sample_ledger(10_000);
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("snapshot.json");

    c.bench_function("snapshot_save_10k", |b| {
        b.iter(|| save_snapshot_to_path(&ledger, &path).expect("save snapshot"))
    });

    save_snapshot_to_path(&ledger, &path).expect("seed");

    c.bench_function("snapshot_load_10k", |b| {
        b.iter(|| black_box(load_snapshot_from_path(&path).expect("load snapshot")))
    });
}

criterion_group!(benches, bench_reports, bench_snapshot_io);
criterion_main!(benches);
