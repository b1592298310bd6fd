//! Data-access contracts and fixture-backed implementations.
//!
//! # Responsibility
//! - Define use-case oriented read contracts per collection.
//! - Keep fixture decoding details behind the repository boundary so view
//!   and service code can run against any record source.
//!
//! # Invariants
//! - Repositories serve owned copies; callers never observe shared mutable
//!   state.
//! - There are no write paths: the demo data set is immutable per session.

use crate::fixture::FixtureError;
use crate::model::RecordId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod contact_repo;
pub mod engagement_repo;
pub mod news_repo;
pub mod trigger_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error surface for repository construction and lookups.
#[derive(Debug)]
pub enum RepoError {
    /// A lookup by id found nothing in the collection.
    NotFound(RecordId),
    /// Embedded fixture data failed to decode.
    Fixture(FixtureError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::Fixture(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Fixture(err) => Some(err),
        }
    }
}

impl From<FixtureError> for RepoError {
    fn from(value: FixtureError) -> Self {
        Self::Fixture(value)
    }
}
