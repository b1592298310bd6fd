//! Client-relevant news item.
//!
//! # Invariants
//! - `date` is a display string ("2 hours ago", "Yesterday") and is compared
//!   ordinally wherever the feed sorts by date.
//! - The draft `sentiment` field of early revisions is superseded and does
//!   not exist here.

use crate::model::RecordId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One headline in the news feed, denormalized onto a client relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Stable id, unique within the news collection.
    pub id: RecordId,
    pub headline: String,
    /// Client name, by display value only.
    pub client: String,
    pub company: String,
    /// Relative display timestamp, never parsed.
    pub date: String,
    pub summary: String,
}

impl NewsItem {
    /// Creates a news item with a generated stable id.
    pub fn new(
        headline: impl Into<String>,
        client: impl Into<String>,
        company: impl Into<String>,
        date: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            headline: headline.into(),
            client: client.into(),
            company: company.into(),
            date: date.into(),
            summary: summary.into(),
        }
    }
}
