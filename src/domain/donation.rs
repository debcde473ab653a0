use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{default_unit, Displayable, Identifiable};

/// A recorded contribution of some quantity of a donation type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Donation {
    pub id: Uuid,
    pub donor_id: Uuid,
    pub donation_type: String,
    pub quantity: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub donation_date: DateTime<Utc>,
}

impl Donation {
    /// Creates a donation dated now, measured in the default unit.
    pub fn new(donor_id: Uuid, donation_type: impl Into<String>, quantity: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            donor_id,
            donation_type: donation_type.into(),
            quantity,
            unit: default_unit(),
            description: None,
            donation_date: Utc::now(),
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn dated(mut self, donation_date: DateTime<Utc>) -> Self {
        self.donation_date = donation_date;
        self
    }
}

impl Identifiable for Donation {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Donation {
    fn display_label(&self) -> String {
        format!("{} {} of {}", self.quantity, self.unit, self.donation_type)
    }
}
