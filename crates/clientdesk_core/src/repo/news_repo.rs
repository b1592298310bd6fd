//! News collection access.

use crate::fixture::load_news;
use crate::model::news::NewsItem;
use crate::model::RecordId;
use crate::repo::RepoResult;

/// Read contract for the news collection.
pub trait NewsRepository {
    /// Returns the full collection in fixture (insertion) order.
    fn list_news(&self) -> RepoResult<Vec<NewsItem>>;
    /// Looks up one news item by stable id.
    fn get_news_item(&self, id: RecordId) -> RepoResult<Option<NewsItem>>;
}

/// Fixture-backed news repository.
pub struct FixtureNewsRepository {
    items: Vec<NewsItem>,
}

impl FixtureNewsRepository {
    /// Decodes the embedded fixture collection.
    pub fn try_new() -> RepoResult<Self> {
        Ok(Self { items: load_news()? })
    }

    /// Serves a caller-provided collection instead of the fixtures.
    pub fn with_records(items: Vec<NewsItem>) -> Self {
        Self { items }
    }
}

impl NewsRepository for FixtureNewsRepository {
    fn list_news(&self) -> RepoResult<Vec<NewsItem>> {
        Ok(self.items.clone())
    }

    fn get_news_item(&self, id: RecordId) -> RepoResult<Option<NewsItem>> {
        Ok(self.items.iter().find(|item| item.id == id).cloned())
    }
}
