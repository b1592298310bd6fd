//! Engagement history access (past meetings, next steps).

use crate::fixture::{load_next_steps, load_past_meetings};
use crate::model::engagement::{NextStep, PastMeeting};
use crate::repo::RepoResult;

/// Read contract for engagement history shown on the contact detail view.
pub trait EngagementRepository {
    /// Returns past meetings, most recent first (fixture order).
    fn list_past_meetings(&self) -> RepoResult<Vec<PastMeeting>>;
    /// Returns planned next steps in fixture order.
    fn list_next_steps(&self) -> RepoResult<Vec<NextStep>>;
}

/// Fixture-backed engagement repository.
pub struct FixtureEngagementRepository {
    past_meetings: Vec<PastMeeting>,
    next_steps: Vec<NextStep>,
}

impl FixtureEngagementRepository {
    /// Decodes both embedded fixture collections.
    pub fn try_new() -> RepoResult<Self> {
        Ok(Self {
            past_meetings: load_past_meetings()?,
            next_steps: load_next_steps()?,
        })
    }

    /// Serves caller-provided collections instead of the fixtures.
    pub fn with_records(past_meetings: Vec<PastMeeting>, next_steps: Vec<NextStep>) -> Self {
        Self {
            past_meetings,
            next_steps,
        }
    }
}

impl EngagementRepository for FixtureEngagementRepository {
    fn list_past_meetings(&self) -> RepoResult<Vec<PastMeeting>> {
        Ok(self.past_meetings.clone())
    }

    fn list_next_steps(&self) -> RepoResult<Vec<NextStep>> {
        Ok(self.next_steps.clone())
    }
}
