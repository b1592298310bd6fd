//! Generic filter/sort/search over tabular records.
//!
//! # Invariants
//! - An empty search term matches every record; an empty category filter
//!   set imposes no category restriction.
//! - Search is case-insensitive substring over the record's whitelisted
//!   fields only.
//! - Sort comparison is ordinal on the selected column's string value, and
//!   stable (ties keep filtered order). `sort = None` passes the filtered
//!   order through unchanged.

use std::cmp::Ordering;
use std::collections::BTreeSet;

/// A record viewable through [`TableView`].
///
/// `Column` enumerates the sortable columns, so an out-of-range column is
/// unrepresentable rather than silently ignored.
pub trait TableRecord {
    type Column: Copy + Eq;

    /// Field values the free-text search may match against.
    fn search_fields(&self) -> Vec<&str>;

    /// Value the category filter tests for membership (company for contacts
    /// and news).
    fn category(&self) -> &str;

    /// String value compared when sorting by `column`.
    fn sort_key(&self, column: Self::Column) -> &str;
}

/// Sort direction for a selected column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// The three user-controlled view inputs.
///
/// Holds no records; pair it with a collection via [`derive`] or wrap both
/// in a [`TableView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery<C> {
    search_term: String,
    /// Insertion order is kept for display; no duplicates.
    category_filters: Vec<String>,
    sort: Option<(C, SortDirection)>,
}

impl<C> Default for TableQuery<C> {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category_filters: Vec::new(),
            sort: None,
        }
    }
}

impl<C: Copy + Eq> TableQuery<C> {
    /// Starts with no search, no filters, no sort.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with an initial sort selection.
    pub fn sorted_by(column: C, direction: SortDirection) -> Self {
        Self {
            sort: Some((column, direction)),
            ..Self::default()
        }
    }

    /// Replaces the active search term; no validation, empty matches all.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Adds `category` to the filter set if absent, removes it if present.
    pub fn toggle_category_filter(&mut self, category: impl Into<String>) {
        let category = category.into();
        match self.category_filters.iter().position(|c| *c == category) {
            Some(index) => {
                self.category_filters.remove(index);
            }
            None => self.category_filters.push(category),
        }
    }

    /// Empties the category filter set.
    pub fn clear_category_filters(&mut self) {
        self.category_filters.clear();
    }

    /// Active filters in toggle (insertion) order.
    pub fn category_filters(&self) -> &[String] {
        &self.category_filters
    }

    /// Sets the sort column and direction directly.
    pub fn set_sort(&mut self, column: C, direction: SortDirection) {
        self.sort = Some((column, direction));
    }

    /// Flips direction when `column` is already active, otherwise selects
    /// `column` ascending.
    pub fn toggle_sort(&mut self, column: C) {
        self.sort = match self.sort {
            Some((active, direction)) if active == column => {
                Some((active, direction.flipped()))
            }
            _ => Some((column, SortDirection::Ascending)),
        };
    }

    pub fn sort(&self) -> Option<(C, SortDirection)> {
        self.sort
    }
}

/// Returns whether `record` matches the (already lowercased) search term.
///
/// Shared with the trigger board, which applies a type tab on top instead
/// of category filters.
pub fn search_matches<R: TableRecord>(record: &R, lowercase_term: &str) -> bool {
    if lowercase_term.is_empty() {
        return true;
    }
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(lowercase_term))
}

fn category_matches<R: TableRecord>(record: &R, filters: &[String]) -> bool {
    filters.is_empty() || filters.iter().any(|filter| filter == record.category())
}

/// Derives the displayable subset: filter, then stable sort.
///
/// Pure in all four inputs; `records` is never mutated.
pub fn derive<'a, R: TableRecord>(records: &'a [R], query: &TableQuery<R::Column>) -> Vec<&'a R> {
    let term = query.search_term.to_lowercase();
    let mut rows: Vec<&R> = records
        .iter()
        .filter(|record| {
            search_matches(*record, &term) && category_matches(*record, &query.category_filters)
        })
        .collect();

    if let Some((column, direction)) = query.sort {
        rows.sort_by(|a, b| direction.apply(a.sort_key(column).cmp(b.sort_key(column))));
    }

    rows
}

/// A collection paired with its view inputs.
///
/// Each view owns its copy of both; mutating one view never affects
/// another over the same data.
pub struct TableView<R: TableRecord> {
    records: Vec<R>,
    query: TableQuery<R::Column>,
}

impl<R: TableRecord> TableView<R> {
    /// Wraps a collection with no initial search, filters or sort.
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records,
            query: TableQuery::default(),
        }
    }

    /// Wraps a collection with an initial sort selection.
    pub fn sorted_by(records: Vec<R>, column: R::Column, direction: SortDirection) -> Self {
        Self {
            records,
            query: TableQuery::sorted_by(column, direction),
        }
    }

    /// The underlying collection in insertion order, unfiltered.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn query(&self) -> &TableQuery<R::Column> {
        &self.query
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.set_search_term(term);
    }

    pub fn toggle_category_filter(&mut self, category: impl Into<String>) {
        self.query.toggle_category_filter(category);
    }

    pub fn clear_category_filters(&mut self) {
        self.query.clear_category_filters();
    }

    pub fn set_sort(&mut self, column: R::Column, direction: SortDirection) {
        self.query.set_sort(column, direction);
    }

    pub fn toggle_sort(&mut self, column: R::Column) {
        self.query.toggle_sort(column);
    }

    /// Recomputes the derived rows; see [`derive`].
    pub fn rows(&self) -> Vec<&R> {
        derive(&self.records, &self.query)
    }

    /// Distinct category values present in the collection,
    /// lexicographically ordered. Drawn from the full collection, not the
    /// filtered rows.
    pub fn category_options(&self) -> Vec<String> {
        let distinct: BTreeSet<&str> = self
            .records
            .iter()
            .map(|record| record.category())
            .collect();
        distinct.into_iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{derive, SortDirection, TableQuery, TableRecord, TableView};

    struct Row {
        label: String,
        group: String,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum RowColumn {
        Label,
        Group,
    }

    impl TableRecord for Row {
        type Column = RowColumn;

        fn search_fields(&self) -> Vec<&str> {
            vec![&self.label, &self.group]
        }

        fn category(&self) -> &str {
            &self.group
        }

        fn sort_key(&self, column: RowColumn) -> &str {
            match column {
                RowColumn::Label => &self.label,
                RowColumn::Group => &self.group,
            }
        }
    }

    fn row(label: &str, group: &str) -> Row {
        Row {
            label: label.to_string(),
            group: group.to_string(),
        }
    }

    #[test]
    fn empty_query_passes_collection_through() {
        let rows = vec![row("b", "x"), row("a", "y")];
        let derived = derive(&rows, &TableQuery::new());
        assert_eq!(derived.len(), 2);
        assert_eq!(derived[0].label, "b");
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let rows = vec![row("Alpha", "x"), row("beta", "y")];
        let mut query = TableQuery::new();
        query.set_search_term("ALPH");
        let derived = derive(&rows, &query);
        assert_eq!(derived.len(), 1);
        assert_eq!(derived[0].label, "Alpha");
    }

    #[test]
    fn toggle_category_filter_adds_then_removes() {
        let mut query: TableQuery<RowColumn> = TableQuery::new();
        query.toggle_category_filter("x");
        query.toggle_category_filter("y");
        assert_eq!(query.category_filters(), ["x", "y"]);
        query.toggle_category_filter("x");
        assert_eq!(query.category_filters(), ["y"]);
    }

    #[test]
    fn toggle_sort_flips_same_column_and_resets_on_switch() {
        let mut query: TableQuery<RowColumn> = TableQuery::new();
        query.toggle_sort(RowColumn::Label);
        assert_eq!(query.sort(), Some((RowColumn::Label, SortDirection::Ascending)));
        query.toggle_sort(RowColumn::Label);
        assert_eq!(query.sort(), Some((RowColumn::Label, SortDirection::Descending)));
        query.toggle_sort(RowColumn::Group);
        assert_eq!(query.sort(), Some((RowColumn::Group, SortDirection::Ascending)));
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let rows = vec![row("b", "same"), row("a", "same"), row("c", "same")];
        let mut query = TableQuery::new();
        query.set_sort(RowColumn::Group, SortDirection::Ascending);
        let derived = derive(&rows, &query);
        let labels: Vec<&str> = derived.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["b", "a", "c"]);
    }

    #[test]
    fn descending_sort_reverses_ordinal_order() {
        let rows = vec![row("a", "x"), row("c", "x"), row("b", "x")];
        let mut query = TableQuery::new();
        query.set_sort(RowColumn::Label, SortDirection::Descending);
        let derived = derive(&rows, &query);
        let labels: Vec<&str> = derived.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["c", "b", "a"]);
    }

    #[test]
    fn category_options_are_distinct_and_sorted() {
        let view = TableView::new(vec![row("a", "zeta"), row("b", "alpha"), row("c", "zeta")]);
        assert_eq!(view.category_options(), ["alpha", "zeta"]);
    }
}
