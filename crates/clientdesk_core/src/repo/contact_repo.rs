//! Contact collection access.

use crate::fixture::load_contacts;
use crate::model::contact::Contact;
use crate::model::RecordId;
use crate::repo::RepoResult;

/// Read contract for the contact collection.
pub trait ContactRepository {
    /// Returns the full collection in fixture (insertion) order.
    fn list_contacts(&self) -> RepoResult<Vec<Contact>>;
    /// Looks up one contact by stable id.
    fn get_contact(&self, id: RecordId) -> RepoResult<Option<Contact>>;
}

/// Fixture-backed contact repository.
pub struct FixtureContactRepository {
    contacts: Vec<Contact>,
}

impl FixtureContactRepository {
    /// Decodes the embedded fixture collection.
    pub fn try_new() -> RepoResult<Self> {
        Ok(Self {
            contacts: load_contacts()?,
        })
    }

    /// Serves a caller-provided collection instead of the fixtures.
    ///
    /// Lets view/service tests run against arbitrary records.
    pub fn with_records(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }
}

impl ContactRepository for FixtureContactRepository {
    fn list_contacts(&self) -> RepoResult<Vec<Contact>> {
        Ok(self.contacts.clone())
    }

    fn get_contact(&self, id: RecordId) -> RepoResult<Option<Contact>> {
        Ok(self.contacts.iter().find(|contact| contact.id == id).cloned())
    }
}
