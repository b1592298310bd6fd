//! Outreach action stubs: send email, schedule meeting.
//!
//! # Responsibility
//! - Prefill drafts from the record that prompted the outreach.
//! - Validate required fields and acknowledge the action.
//!
//! # Invariants
//! - Nothing leaves the process: a successful call yields a receipt, not a
//!   delivery. In a real system these would hand off to a notification and
//!   scheduling service.
//! - A send consumes its draft, which is the "clear the form" semantics of
//!   the dialogs.
//! - Logs carry metadata only; never subject or body text.

use crate::model::contact::Contact;
use crate::model::news::NewsItem;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Duration options offered by the meeting form, in minutes.
pub const MEETING_DURATION_CHOICES_MIN: [u32; 6] = [15, 30, 45, 60, 90, 120];

const DEFAULT_MEETING_DURATION_MIN: u32 = 30;

pub type OutreachResult = Result<OutreachReceipt, OutreachError>;

/// Validation error for outreach forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutreachError {
    /// A required form field was empty or whitespace.
    EmptyField(&'static str),
}

impl Display for OutreachError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "required field is empty: {field}"),
        }
    }
}

impl Error for OutreachError {}

/// Acknowledgement returned by a stubbed action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutreachReceipt {
    /// Display message, matching the original acknowledgement wording.
    pub message: String,
}

/// Composable email form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailDraft {
    pub subject: String,
    pub body: String,
}

impl EmailDraft {
    /// An empty form, as the contact dialog opens it.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Prefills subject and body from the news item being discussed.
    pub fn for_news(item: &NewsItem) -> Self {
        Self {
            subject: format!("Regarding: {}", item.headline),
            body: format!(
                "Dear {},\n\nI noticed the recent news about {}.\n\nI'd like to discuss how \
                 this might impact your investment strategy.\n\nBest regards,\nYour Investment Banker",
                item.client, item.headline
            ),
        }
    }
}

/// Meeting request form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingForm {
    pub title: String,
    /// Display date string from the date input; required, not parsed.
    pub date: String,
    /// Display time string from the time input; required, not parsed.
    pub time: String,
    pub duration_minutes: u32,
    pub notes: String,
}

impl Default for MeetingForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            date: String::new(),
            time: String::new(),
            duration_minutes: DEFAULT_MEETING_DURATION_MIN,
            notes: String::new(),
        }
    }
}

impl MeetingForm {
    /// An empty form with the default 30 minute duration.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Prefills title and agenda notes from the news item being discussed.
    pub fn for_news(item: &NewsItem) -> Self {
        Self {
            title: format!("Discussion: {}", item.headline),
            notes: format!(
                "Agenda:\n1. Review recent news about {}\n2. Discuss potential impact on \
                 investment strategy\n3. Explore opportunities and next steps",
                item.company
            ),
            ..Self::default()
        }
    }
}

/// Sends an email prompted by a news item. Stub: acknowledges and discards.
pub fn send_email_about_news(item: &NewsItem, draft: EmailDraft) -> OutreachResult {
    validate_email(&draft)?;
    info!(
        "event=email_stub module=outreach context=news news_id={} recipient_client={}",
        item.id, item.client
    );
    Ok(OutreachReceipt {
        message: format!(
            "Email sent to {} regarding \"{}\"",
            item.client, item.headline
        ),
    })
}

/// Sends an email to a contact. Stub: acknowledges and discards.
pub fn send_email_to_contact(contact: &Contact, draft: EmailDraft) -> OutreachResult {
    validate_email(&draft)?;
    info!(
        "event=email_stub module=outreach context=contact contact_id={}",
        contact.id
    );
    Ok(OutreachReceipt {
        message: format!("Email sent to {} ({})", contact.name, contact.email),
    })
}

/// Schedules a meeting with the named client. Stub: acknowledges and
/// discards.
pub fn schedule_meeting(client_name: &str, form: MeetingForm) -> OutreachResult {
    if form.title.trim().is_empty() {
        return Err(OutreachError::EmptyField("title"));
    }
    if form.date.is_empty() {
        return Err(OutreachError::EmptyField("date"));
    }
    if form.time.is_empty() {
        return Err(OutreachError::EmptyField("time"));
    }
    info!(
        "event=meeting_stub module=outreach duration_min={}",
        form.duration_minutes
    );
    Ok(OutreachReceipt {
        message: format!(
            "Meeting scheduled with {} on {} at {}",
            client_name, form.date, form.time
        ),
    })
}

fn validate_email(draft: &EmailDraft) -> Result<(), OutreachError> {
    if draft.subject.trim().is_empty() {
        return Err(OutreachError::EmptyField("subject"));
    }
    if draft.body.trim().is_empty() {
        return Err(OutreachError::EmptyField("body"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{EmailDraft, MeetingForm};
    use crate::model::news::NewsItem;

    fn item() -> NewsItem {
        NewsItem::new(
            "Acme Corporation Reports Strong Q2 Earnings",
            "John Smith",
            "Acme Corporation",
            "2 hours ago",
            "Revenue up 15%.",
        )
    }

    #[test]
    fn news_email_prefill_addresses_the_client() {
        let draft = EmailDraft::for_news(&item());
        assert_eq!(
            draft.subject,
            "Regarding: Acme Corporation Reports Strong Q2 Earnings"
        );
        assert!(draft.body.starts_with("Dear John Smith,"));
        assert!(draft.body.ends_with("Your Investment Banker"));
    }

    #[test]
    fn news_meeting_prefill_builds_agenda_from_company() {
        let form = MeetingForm::for_news(&item());
        assert_eq!(
            form.title,
            "Discussion: Acme Corporation Reports Strong Q2 Earnings"
        );
        assert!(form.notes.contains("Review recent news about Acme Corporation"));
        assert_eq!(form.duration_minutes, 30);
    }
}
