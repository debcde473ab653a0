use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};

/// Disbursement of part of a donation to a recipient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Distribution {
    pub id: Uuid,
    pub donation_id: Uuid,
    pub quantity_distributed: f64,
    pub recipient_name: String,
    pub recipient_contact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_info: Option<String>,
    pub distribution_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Distribution {
    pub fn new(
        donation_id: Uuid,
        quantity_distributed: f64,
        recipient_name: impl Into<String>,
        recipient_contact: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            donation_id,
            quantity_distributed,
            recipient_name: recipient_name.into(),
            recipient_contact: recipient_contact.into(),
            recipient_info: None,
            distribution_date: Utc::now(),
            notes: None,
        }
    }

    pub fn with_recipient_info(mut self, info: impl Into<String>) -> Self {
        self.recipient_info = Some(info.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn dated(mut self, distribution_date: DateTime<Utc>) -> Self {
        self.distribution_date = distribution_date;
        self
    }
}

impl Identifiable for Distribution {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Distribution {
    fn display_label(&self) -> String {
        format!("{} to {}", self.quantity_distributed, self.recipient_name)
    }
}
