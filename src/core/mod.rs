pub mod accessor;
pub mod clock;
pub mod errors;
pub mod services;
pub mod utils;

pub use accessor::LedgerAccessor;
pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{DonationError, Result};
