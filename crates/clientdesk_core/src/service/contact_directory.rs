//! Contact directory use-case facade.
//!
//! # Invariants
//! - The directory opens sorted by name ascending.
//! - View-state changes never touch the repository; the directory owns its
//!   copy of the collection.

use crate::model::contact::Contact;
use crate::model::RecordId;
use crate::repo::contact_repo::ContactRepository;
use crate::repo::{RepoError, RepoResult};
use crate::view::columns::ContactColumn;
use crate::view::table::{SortDirection, TableView};
use log::info;

/// Searchable, filterable, sortable contact table.
pub struct ContactDirectory<R: ContactRepository> {
    repo: R,
    view: TableView<Contact>,
}

impl<R: ContactRepository> ContactDirectory<R> {
    /// Loads the collection once and opens the default view.
    pub fn new(repo: R) -> RepoResult<Self> {
        let contacts = repo.list_contacts()?;
        info!(
            "event=contact_directory_open module=service count={}",
            contacts.len()
        );
        Ok(Self {
            view: TableView::sorted_by(contacts, ContactColumn::Name, SortDirection::Ascending),
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

    pub fn set_sort(&mut self, column: ContactColumn, direction: SortDirection) {
        self.view.set_sort(column, direction);
    }

    /// Flips direction on the active column, or selects a new one ascending.
    pub fn toggle_sort(&mut self, column: ContactColumn) {
        self.view.toggle_sort(column);
    }

    /// The derived, displayable rows.
    pub fn rows(&self) -> Vec<&Contact> {
        self.view.rows()
    }

    /// Distinct companies for the filter dropdown, lexicographic.
    pub fn company_options(&self) -> Vec<String> {
        self.view.category_options()
    }

    /// Direct view access for callers that manage query state themselves.
    pub fn view(&self) -> &TableView<Contact> {
        &self.view
    }

    /// Fetches one contact for the detail view.
    pub fn get(&self, id: RecordId) -> RepoResult<Contact> {
        self.repo.get_contact(id)?.ok_or(RepoError::NotFound(id))
    }
}
