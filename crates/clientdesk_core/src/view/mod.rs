//! Client-side tabular view engine.
//!
//! # Responsibility
//! - Derive a filtered, sorted, displayable subset of a record collection
//!   from three independent inputs: search term, category filter set, and
//!   sort selection.
//! - Stay generic over record shape and search-field whitelist, so one
//!   implementation serves contacts, news and triggers alike.
//!
//! # Invariants
//! - Derivation is a pure function of (collection, term, filters, sort);
//!   the source collection is never mutated or reordered.
//! - Sorting is stable: equal sort keys preserve filtered order.

pub mod columns;
pub mod table;
