//! Automation trigger record and keyword matching.
//!
//! # Responsibility
//! - Define the trigger rule shape: a keyword watch paired to a stubbed
//!   email/meeting action.
//! - Compile the keyword list into a reusable case-insensitive pattern.
//!
//! # Invariants
//! - Triggers never fire: matching selects candidates, nothing mutates
//!   `status` or `last_triggered`.
//! - Keyword matching is case-insensitive and bounded at word edges, so
//!   "buy" does not match "buyback" but "R&D" matches mid-sentence.

use crate::model::{news::NewsItem, RecordId};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Action side of a trigger rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    /// Draft an outreach email when the rule matches.
    Email,
    /// Propose a meeting when the rule matches.
    Meeting,
}

/// Whether a rule participates in matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerStatus {
    Active,
    Inactive,
}

/// One automation rule pairing a keyword watch to a stubbed action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    /// Stable id, unique within the trigger collection.
    pub id: RecordId,
    /// Serialized as `type` to match the fixture schema naming.
    #[serde(rename = "type")]
    pub kind: TriggerKind,
    pub name: String,
    pub description: String,
    /// Client name, by display value only.
    pub client: String,
    pub company: String,
    /// Watched phrases; empty list matches nothing.
    pub keywords: Vec<String>,
    pub status: TriggerStatus,
    /// Relative display timestamp ("Never", "2 days ago"), never updated.
    pub last_triggered: String,
}

impl Trigger {
    /// Creates an active trigger with a generated id and no keywords.
    pub fn new(
        kind: TriggerKind,
        name: impl Into<String>,
        client: impl Into<String>,
        company: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            name: name.into(),
            description: String::new(),
            client: client.into(),
            company: company.into(),
            keywords: Vec::new(),
            status: TriggerStatus::Active,
            last_triggered: "Never".to_string(),
        }
    }

    /// Returns whether this rule participates in matching.
    pub fn is_active(&self) -> bool {
        self.status == TriggerStatus::Active
    }

    /// Compiles the keyword list into one case-insensitive alternation.
    ///
    /// Returns `None` when the list is empty or contains only blank entries.
    /// Keywords are escaped, so fixture phrases like "R&D" are matched
    /// literally.
    pub fn keyword_pattern(&self) -> Option<Regex> {
        let escaped: Vec<String> = self
            .keywords
            .iter()
            .map(|keyword| keyword.trim())
            .filter(|keyword| !keyword.is_empty())
            .map(regex::escape)
            .collect();
        if escaped.is_empty() {
            return None;
        }

        let pattern = format!(r"(?i)\b(?:{})\b", escaped.join("|"));
        Regex::new(&pattern).ok()
    }

    /// Tests this rule against a news item's headline and summary.
    pub fn matches_news(&self, item: &NewsItem) -> bool {
        match self.keyword_pattern() {
            Some(pattern) => {
                pattern.is_match(&item.headline) || pattern.is_match(&item.summary)
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Trigger, TriggerKind};
    use crate::model::news::NewsItem;

    fn news(headline: &str, summary: &str) -> NewsItem {
        NewsItem::new(headline, "John Smith", "Acme Corporation", "Yesterday", summary)
    }

    #[test]
    fn keyword_match_is_case_insensitive() {
        let mut trigger = Trigger::new(TriggerKind::Email, "Earnings", "John Smith", "Acme");
        trigger.keywords = vec!["earnings".to_string()];
        assert!(trigger.matches_news(&news("Acme Reports Strong EARNINGS", "")));
    }

    #[test]
    fn keyword_match_respects_word_boundaries() {
        let mut trigger = Trigger::new(TriggerKind::Meeting, "M&A", "Sarah Johnson", "Globex");
        trigger.keywords = vec!["buy".to_string()];
        assert!(!trigger.matches_news(&news("Globex announces buyback", "")));
        assert!(trigger.matches_news(&news("Globex to buy rival", "")));
    }

    #[test]
    fn multi_word_keywords_match_as_phrases() {
        let mut trigger = Trigger::new(TriggerKind::Email, "Earnings", "John Smith", "Acme");
        trigger.keywords = vec!["quarterly report".to_string()];
        assert!(trigger.matches_news(&news("x", "The quarterly report surprised analysts")));
        assert!(!trigger.matches_news(&news("x", "The quarterly earnings report")));
    }

    #[test]
    fn empty_keyword_list_never_matches() {
        let trigger = Trigger::new(TriggerKind::Email, "Empty", "John Smith", "Acme");
        assert!(trigger.keyword_pattern().is_none());
        assert!(!trigger.matches_news(&news("anything", "at all")));
    }
}
