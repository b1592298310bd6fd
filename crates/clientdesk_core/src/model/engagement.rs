//! Engagement history shown on the contact detail view.

use crate::model::RecordId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Urgency bucket for a follow-up item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A meeting that already happened, display data only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastMeeting {
    pub id: RecordId,
    pub title: String,
    /// Display date ("March 15, 2023").
    pub date: String,
    /// Display time range ("10:00 AM - 11:30 AM").
    pub time: String,
    pub notes: String,
}

/// A planned follow-up action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextStep {
    pub id: RecordId,
    pub description: String,
    /// Display due date ("Next week", "End of month").
    pub due_date: String,
    pub priority: Priority,
}

impl NextStep {
    /// Creates a next step with a generated stable id.
    pub fn new(
        description: impl Into<String>,
        due_date: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            due_date: due_date.into(),
            priority,
        }
    }
}
