use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};

/// A party contributing donations to the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Donor {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Donor {
    /// Creates a donor stamped with the current time.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            contact_info: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.contact_info = Some(contact.into());
        self
    }

    /// Overrides the creation timestamp, mostly useful for imports and fixtures.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

impl Identifiable for Donor {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Donor {
    fn display_label(&self) -> String {
        match &self.contact_info {
            Some(contact) => format!("{} <{}>", self.name, contact),
            None => self.name.clone(),
        }
    }
}
