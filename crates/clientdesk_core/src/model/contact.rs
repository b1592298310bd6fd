//! Client contact record.
//!
//! # Invariants
//! - `address` and `notes` are the only optional fields; everything else is
//!   populated for every fixture row.
//! - The draft `status` field of early revisions is superseded and does not
//!   exist here.

use crate::model::RecordId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One client contact in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Stable id, unique within the contact collection.
    pub id: RecordId,
    pub name: String,
    pub company: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    /// Street address, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Free-form relationship notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Contact {
    /// Creates a contact with a generated stable id.
    ///
    /// Optional fields start as `None`.
    pub fn new(
        name: impl Into<String>,
        company: impl Into<String>,
        title: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self::with_id(Uuid::new_v4(), name, company, title, email, phone)
    }

    /// Creates a contact with a caller-provided stable id.
    ///
    /// Used by fixture decoding and tests where identity already exists.
    pub fn with_id(
        id: RecordId,
        name: impl Into<String>,
        company: impl Into<String>,
        title: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            company: company.into(),
            title: title.into(),
            email: email.into(),
            phone: phone.into(),
            address: None,
            notes: None,
        }
    }
}
