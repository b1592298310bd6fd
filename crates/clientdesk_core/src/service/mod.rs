//! Use-case facades over the repository and view layers.
//!
//! # Responsibility
//! - Wire each collection to its tabular view with the documented initial
//!   sort.
//! - Keep callers decoupled from fixture details behind the repository
//!   traits.

pub mod contact_directory;
pub mod engagement_log;
pub mod news_desk;
pub mod outreach;
pub mod trigger_board;
