//! Core domain logic for the ClientDesk CRM demo.
//!
//! Fixture-backed collections of contacts, news items and automation
//! triggers, viewed through a client-side filter/sort/search engine.
//! There is no persistence and no outbound I/O; outreach actions are
//! acknowledged stubs.

pub mod fixture;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use fixture::{FixtureError, FixtureResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::Contact;
pub use model::engagement::{NextStep, PastMeeting, Priority};
pub use model::news::NewsItem;
pub use model::trigger::{Trigger, TriggerKind, TriggerStatus};
pub use model::RecordId;
pub use repo::contact_repo::{ContactRepository, FixtureContactRepository};
pub use repo::engagement_repo::{EngagementRepository, FixtureEngagementRepository};
pub use repo::news_repo::{FixtureNewsRepository, NewsRepository};
pub use repo::trigger_repo::{FixtureTriggerRepository, TriggerRepository};
pub use repo::{RepoError, RepoResult};
pub use service::contact_directory::ContactDirectory;
pub use service::engagement_log::{EngagementError, EngagementLog};
pub use service::news_desk::NewsDesk;
pub use service::outreach::{
    schedule_meeting, send_email_about_news, send_email_to_contact, EmailDraft, MeetingForm,
    OutreachError, OutreachReceipt, OutreachResult, MEETING_DURATION_CHOICES_MIN,
};
pub use service::trigger_board::{TriggerBoard, TriggerTab};
pub use view::columns::{ContactColumn, NewsColumn, TriggerColumn};
pub use view::table::{derive, SortDirection, TableQuery, TableRecord, TableView};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
