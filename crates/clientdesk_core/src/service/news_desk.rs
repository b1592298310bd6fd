//! News feed use-case facade.
//!
//! # Invariants
//! - The feed opens sorted by date descending (ordinal on the display
//!   string, newest-style entries first as in the fixtures).

use crate::model::news::NewsItem;
use crate::model::RecordId;
use crate::repo::news_repo::NewsRepository;
use crate::repo::{RepoError, RepoResult};
use crate::view::columns::NewsColumn;
use crate::view::table::{SortDirection, TableView};
use log::info;

/// Searchable, filterable, sortable news table.
pub struct NewsDesk<R: NewsRepository> {
    repo: R,
    view: TableView<NewsItem>,
}

impl<R: NewsRepository> NewsDesk<R> {
    /// Loads the collection once and opens the default view.
    pub fn new(repo: R) -> RepoResult<Self> {
        let items = repo.list_news()?;
        info!("event=news_desk_open module=service count={}", items.len());
        Ok(Self {
            view: TableView::sorted_by(items, NewsColumn::Date, SortDirection::Descending),
            repo,
        })
    }

    /// Replaces the active search term; empty matches all.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.view.set_search_term(term);
    }

    /// Toggles one company in the filter set.
    pub fn toggle_company_filter(&mut self, company: impl Into<String>) {
        self.view.toggle_category_filter(company);
    }

    /// Empties the company filter set.
    pub fn clear_company_filters(&mut self) {
        self.view.clear_category_filters();
    }

    pub fn set_sort(&mut self, column: NewsColumn, direction: SortDirection) {
        self.view.set_sort(column, direction);
    }

    /// Flips direction on the active column, or selects a new one ascending.
    pub fn toggle_sort(&mut self, column: NewsColumn) {
        self.view.toggle_sort(column);
    }

    /// The derived, displayable rows.
    pub fn rows(&self) -> Vec<&NewsItem> {
        self.view.rows()
    }

    /// Distinct companies for the filter dropdown, lexicographic.
    pub fn company_options(&self) -> Vec<String> {
        self.view.category_options()
    }

    /// Direct view access for callers that manage query state themselves.
    pub fn view(&self) -> &TableView<NewsItem> {
        &self.view
    }

    /// Fetches one news item for the detail view.
    pub fn get(&self, id: RecordId) -> RepoResult<NewsItem> {
        self.repo.get_news_item(id)?.ok_or(RepoError::NotFound(id))
    }
}
