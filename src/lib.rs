#![doc(test(attr(deny(warnings))))]

//! Donation Core tracks donors, donations and distributions and derives
//! inventory, donor and system-wide reports from them.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Donation Core tracing initialized.");
    });
}
