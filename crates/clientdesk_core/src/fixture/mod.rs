//! Embedded demo fixtures.
//!
//! # Responsibility
//! - Decode the static JSON collections baked into the crate.
//! - Surface decode failures as typed errors instead of panicking.
//!
//! # Invariants
//! - Fixture content is compile-time constant; a decode failure means the
//!   embedded data and the model drifted apart, not a runtime condition.
//! - Loaders return fresh owned collections on every call; callers own
//!   their copies.

use crate::model::contact::Contact;
use crate::model::engagement::{NextStep, PastMeeting};
use crate::model::news::NewsItem;
use crate::model::trigger::Trigger;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt::{Display, Formatter};

const CONTACTS_FILE: &str = "fixtures/contacts.json";
const NEWS_FILE: &str = "fixtures/news.json";
const TRIGGERS_FILE: &str = "fixtures/triggers.json";
const PAST_MEETINGS_FILE: &str = "fixtures/past_meetings.json";
const NEXT_STEPS_FILE: &str = "fixtures/next_steps.json";

const CONTACTS_JSON: &str = include_str!("../../fixtures/contacts.json");
const NEWS_JSON: &str = include_str!("../../fixtures/news.json");
const TRIGGERS_JSON: &str = include_str!("../../fixtures/triggers.json");
const PAST_MEETINGS_JSON: &str = include_str!("../../fixtures/past_meetings.json");
const NEXT_STEPS_JSON: &str = include_str!("../../fixtures/next_steps.json");

pub type FixtureResult<T> = Result<T, FixtureError>;

/// Decode error for one embedded fixture file.
#[derive(Debug)]
pub struct FixtureError {
    /// Crate-relative path of the offending file.
    pub file: &'static str,
    source: serde_json::Error,
}

impl Display for FixtureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid fixture data in `{}`: {}", self.file, self.source)
    }
}

impl Error for FixtureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Decodes the contact collection.
pub fn load_contacts() -> FixtureResult<Vec<Contact>> {
    decode(CONTACTS_FILE, CONTACTS_JSON)
}

/// Decodes the news collection.
pub fn load_news() -> FixtureResult<Vec<NewsItem>> {
    decode(NEWS_FILE, NEWS_JSON)
}

/// Decodes the trigger collection.
pub fn load_triggers() -> FixtureResult<Vec<Trigger>> {
    decode(TRIGGERS_FILE, TRIGGERS_JSON)
}

/// Decodes the past-meeting history.
pub fn load_past_meetings() -> FixtureResult<Vec<PastMeeting>> {
    decode(PAST_MEETINGS_FILE, PAST_MEETINGS_JSON)
}

/// Decodes the planned next steps.
pub fn load_next_steps() -> FixtureResult<Vec<NextStep>> {
    decode(NEXT_STEPS_FILE, NEXT_STEPS_JSON)
}

fn decode<T: DeserializeOwned>(file: &'static str, raw: &'static str) -> FixtureResult<Vec<T>> {
    serde_json::from_str(raw).map_err(|source| FixtureError { file, source })
}

#[cfg(test)]
mod tests {
    use super::{load_contacts, load_news, load_past_meetings, load_triggers};

    #[test]
    fn embedded_collections_decode() {
        assert_eq!(load_contacts().unwrap().len(), 6);
        assert_eq!(load_news().unwrap().len(), 7);
        assert_eq!(load_triggers().unwrap().len(), 6);
        assert_eq!(load_past_meetings().unwrap().len(), 3);
    }

    #[test]
    fn loaders_hand_out_independent_copies() {
        let mut first = load_contacts().unwrap();
        first.clear();
        assert_eq!(load_contacts().unwrap().len(), 6);
    }
}
