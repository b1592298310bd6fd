//! Per-collection column sets and search-field whitelists.

use crate::model::contact::Contact;
use crate::model::news::NewsItem;
use crate::model::trigger::Trigger;
use crate::view::table::TableRecord;

/// Sortable columns of the contact table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactColumn {
    Name,
    Title,
    Company,
}

impl TableRecord for Contact {
    type Column = ContactColumn;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.company, &self.email, &self.title]
    }

    fn category(&self) -> &str {
        &self.company
    }

    fn sort_key(&self, column: ContactColumn) -> &str {
        match column {
            ContactColumn::Name => &self.name,
            ContactColumn::Title => &self.title,
            ContactColumn::Company => &self.company,
        }
    }
}

/// Sortable columns of the news feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsColumn {
    Headline,
    Client,
    Company,
    /// Ordinal comparison of the display string, as the feed always did.
    Date,
}

impl TableRecord for NewsItem {
    type Column = NewsColumn;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.headline, &self.client, &self.company]
    }

    fn category(&self) -> &str {
        &self.company
    }

    fn sort_key(&self, column: NewsColumn) -> &str {
        match column {
            NewsColumn::Headline => &self.headline,
            NewsColumn::Client => &self.client,
            NewsColumn::Company => &self.company,
            NewsColumn::Date => &self.date,
        }
    }
}

/// The trigger board shows insertion order only; there is nothing to sort
/// by, which this empty column set makes unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerColumn {}

impl TableRecord for Trigger {
    type Column = TriggerColumn;

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name, &self.client, &self.company]
    }

    fn category(&self) -> &str {
        &self.company
    }

    fn sort_key(&self, column: TriggerColumn) -> &str {
        match column {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::contact::Contact;

    #[test]
    fn contact_search_whitelist_excludes_phone_and_notes() {
        let mut contact = Contact::new(
            "John Smith",
            "Acme Corporation",
            "CFO",
            "john@acmecorp.com",
            "+1 (555) 123-4567",
        );
        contact.notes = Some("secret".to_string());
        let fields = contact.search_fields();
        assert!(fields.contains(&"John Smith"));
        assert!(!fields.contains(&"+1 (555) 123-4567"));
        assert!(!fields.contains(&"secret"));
    }

    #[test]
    fn news_sorts_date_by_display_string() {
        let item = NewsItem::new("h", "c", "co", "2 hours ago", "s");
        assert_eq!(item.sort_key(NewsColumn::Date), "2 hours ago");
    }
}
