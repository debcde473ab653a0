#![allow(dead_code)]

use std::sync::Mutex;

use chrono::{DateTime, Duration, TimeZone, Utc};
use donation_core::domain::{Distribution, Donation, DonationLedger, Donor};
use once_cell::sync::Lazy;
use tempfile::TempDir;
use uuid::Uuid;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Returns a fresh directory that survives until the test binary exits.
pub fn temp_base() -> std::path::PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

pub struct FoodBank {
    pub ledger: DonationLedger,
    pub alice: Uuid,
    pub bob: Uuid,
    pub carol: Uuid,
    pub rice: Uuid,
    pub rice_late: Uuid,
    pub coats: Uuid,
}

/// Alice gives 10 kg of rice twice, Bob gives 20 coats, Carol never donates.
/// 12 kg of rice (8 + 4 from the two donations) and 5 coats have gone out.
pub fn food_bank() -> FoodBank {
    food_bank_at(reference_now())
}

/// Same records as [`food_bank`], dated relative to `now`.
pub fn food_bank_at(now: DateTime<Utc>) -> FoodBank {
    let mut ledger = DonationLedger::new("Food bank");

    let alice = ledger.add_donor(
        Donor::new("Alice")
            .with_contact("alice@example.org")
            .created_at(now - Duration::days(90)),
    );
    let bob = ledger.add_donor(Donor::new("Bob").created_at(now - Duration::days(5)));
    let carol = ledger.add_donor(Donor::new("Carol").created_at(now - Duration::days(1)));

    let rice = ledger.add_donation(
        Donation::new(alice, "food", 10.0)
            .with_unit("kg")
            .dated(now - Duration::days(60)),
    );
    let rice_late = ledger.add_donation(
        Donation::new(alice, "food", 10.0)
            .with_unit("kg")
            .dated(now - Duration::days(10)),
    );
    let coats = ledger.add_donation(
        Donation::new(bob, "clothing", 20.0)
            .with_description("winter coats")
            .dated(now - Duration::days(4)),
    );

    ledger.add_distribution(
        Distribution::new(rice, 8.0, "Shelter", "shelter@example.org").dated(now - Duration::days(30)),
    );
    ledger.add_distribution(
        Distribution::new(rice_late, 4.0, "Pantry", "pantry@example.org").dated(now - Duration::days(3)),
    );
    ledger.add_distribution(
        Distribution::new(coats, 5.0, "Shelter", "shelter@example.org").dated(now - Duration::days(2)),
    );

    FoodBank {
        ledger,
        alice,
        bob,
        carol,
        rice,
        rice_late,
        coats,
    }
}
