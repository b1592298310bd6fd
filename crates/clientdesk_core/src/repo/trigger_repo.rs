//! Trigger collection access.

use crate::fixture::load_triggers;
use crate::model::trigger::Trigger;
use crate::model::RecordId;
use crate::repo::RepoResult;

/// Read contract for the trigger collection.
pub trait TriggerRepository {
    /// Returns the full collection in fixture (insertion) order.
    fn list_triggers(&self) -> RepoResult<Vec<Trigger>>;
    /// Looks up one trigger by stable id.
    fn get_trigger(&self, id: RecordId) -> RepoResult<Option<Trigger>>;
}

/// Fixture-backed trigger repository.
pub struct FixtureTriggerRepository {
    triggers: Vec<Trigger>,
}

impl FixtureTriggerRepository {
    /// Decodes the embedded fixture collection.
    pub fn try_new() -> RepoResult<Self> {
        Ok(Self {
            triggers: load_triggers()?,
        })
    }

    /// Serves a caller-provided collection instead of the fixtures.
    pub fn with_records(triggers: Vec<Trigger>) -> Self {
        Self { triggers }
    }
}

impl TriggerRepository for FixtureTriggerRepository {
    fn list_triggers(&self) -> RepoResult<Vec<Trigger>> {
        Ok(self.triggers.clone())
    }

    fn get_trigger(&self, id: RecordId) -> RepoResult<Option<Trigger>> {
        Ok(self.triggers.iter().find(|trigger| trigger.id == id).cloned())
    }
}
