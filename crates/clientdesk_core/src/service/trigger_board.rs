//! Trigger board use-case facade.
//!
//! # Responsibility
//! - Filter the trigger collection by a single-select type tab plus the
//!   shared free-text search.
//! - Surface active triggers whose keyword watch matches a news item.
//!
//! # Invariants
//! - Rows keep insertion order; the board has no sortable columns.
//! - Matching never fires an action and never mutates trigger state.

use crate::model::news::NewsItem;
use crate::model::trigger::{Trigger, TriggerKind};
use crate::model::RecordId;
use crate::repo::trigger_repo::TriggerRepository;
use crate::repo::{RepoError, RepoResult};
use crate::view::table::search_matches;
use log::info;

/// Single-select type tab over the trigger board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriggerTab {
    #[default]
    All,
    Email,
    Meeting,
}

impl TriggerTab {
    fn admits(self, kind: TriggerKind) -> bool {
        match self {
            Self::All => true,
            Self::Email => kind == TriggerKind::Email,
            Self::Meeting => kind == TriggerKind::Meeting,
        }
    }
}

/// Tabbed, searchable trigger list.
pub struct TriggerBoard<R: TriggerRepository> {
    repo: R,
    triggers: Vec<Trigger>,
    search_term: String,
    tab: TriggerTab,
}

impl<R: TriggerRepository> TriggerBoard<R> {
    /// Loads the collection once and opens on the `All` tab.
    pub fn new(repo: R) -> RepoResult<Self> {
        let triggers = repo.list_triggers()?;
        info!(
            "event=trigger_board_open module=service count={}",
            triggers.len()
        );
        Ok(Self {
            triggers,
            search_term: String::new(),
            tab: TriggerTab::default(),
            repo,
        })
    }

    /// Replaces the active search term; empty matches all.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Switches the active tab.
    pub fn select_tab(&mut self, tab: TriggerTab) {
        self.tab = tab;
    }

    pub fn tab(&self) -> TriggerTab {
        self.tab
    }

    /// Derived rows: insertion order filtered by tab and search.
    pub fn rows(&self) -> Vec<&Trigger> {
        let term = self.search_term.to_lowercase();
        self.triggers
            .iter()
            .filter(|trigger| self.tab.admits(trigger.kind))
            .filter(|trigger| search_matches(*trigger, &term))
            .collect()
    }

    /// Active triggers whose keyword watch matches the given news item.
    ///
    /// Candidates only: nothing is sent or scheduled here.
    pub fn matching_triggers(&self, item: &NewsItem) -> Vec<&Trigger> {
        let matches: Vec<&Trigger> = self
            .triggers
            .iter()
            .filter(|trigger| trigger.is_active() && trigger.matches_news(item))
            .collect();
        info!(
            "event=trigger_match module=service news_id={} candidates={}",
            item.id,
            matches.len()
        );
        matches
    }

    /// Fetches one trigger by stable id.
    pub fn get(&self, id: RecordId) -> RepoResult<Trigger> {
        self.repo.get_trigger(id)?.ok_or(RepoError::NotFound(id))
    }
}
