//! Engagement history shown on the contact detail view.
//!
//! # Invariants
//! - Fixture history is read-only; only next steps added this session are
//!   appended, and nothing is ever persisted.
//! - A next step requires a non-blank description before it is accepted.

use crate::model::engagement::{NextStep, PastMeeting, Priority};
use crate::repo::engagement_repo::EngagementRepository;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for engagement use-cases.
#[derive(Debug)]
pub enum EngagementError {
    /// Submitted next-step description was empty or whitespace.
    BlankDescription,
    Repo(RepoError),
}

impl Display for EngagementError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankDescription => write!(f, "next step description cannot be blank"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EngagementError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::BlankDescription => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for EngagementError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Past meetings and planned next steps for the detail view.
pub struct EngagementLog {
    past_meetings: Vec<PastMeeting>,
    next_steps: Vec<NextStep>,
}

impl EngagementLog {
    /// Loads both histories from the repository.
    pub fn new<R: EngagementRepository>(repo: &R) -> Result<Self, EngagementError> {
        Ok(Self {
            past_meetings: repo.list_past_meetings()?,
            next_steps: repo.list_next_steps()?,
        })
    }

    pub fn past_meetings(&self) -> &[PastMeeting] {
        &self.past_meetings
    }

    /// Fixture steps first, then session-added steps in submission order.
    pub fn next_steps(&self) -> &[NextStep] {
        &self.next_steps
    }

    /// Appends a session-local next step and returns it.
    ///
    /// Rejects blank descriptions, mirroring the disabled submit control.
    pub fn add_next_step(
        &mut self,
        description: impl Into<String>,
        due_date: impl Into<String>,
        priority: Priority,
    ) -> Result<NextStep, EngagementError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(EngagementError::BlankDescription);
        }
        let step = NextStep::new(description, due_date, priority);
        self.next_steps.push(step.clone());
        Ok(step)
    }
}
