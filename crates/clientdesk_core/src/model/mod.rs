//! Domain records served by the ClientDesk demo.
//!
//! # Responsibility
//! - Define the canonical shapes for contacts, news items, triggers and
//!   engagement history.
//! - Keep records plain data: no presentation, no derived view state.
//!
//! # Invariants
//! - Every record carries a stable [`RecordId`] unique within its collection.
//! - Records are immutable for the lifetime of a session; there are no
//!   writers after fixture load.
//! - Cross-collection relationships are by display name only (a news item's
//!   `client`/`company` are not validated against the contact collection).

use uuid::Uuid;

pub mod contact;
pub mod engagement;
pub mod news;
pub mod trigger;

/// Stable identifier for every fixture-backed record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type RecordId = Uuid;
