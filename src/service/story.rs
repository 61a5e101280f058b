use std::sync::Arc;

use crate::cache::{cached, ContentCache};
use crate::error::{ContentError, Result};
use crate::models::{Page, PageLimits, PageRequest, Pagination, Story};
use crate::repository::Repository;

#[derive(Clone)]
pub struct StoryService {
    stories: Repository<Story>,
    cache: Arc<dyn ContentCache>,
    limits: PageLimits,
}

impl StoryService {
    pub fn new(stories: Repository<Story>, cache: Arc<dyn ContentCache>, limits: PageLimits) -> Self {
        Self {
            stories,
            cache,
            limits,
        }
    }

    /// Titles, texts (all languages) and author
    pub async fn search(&self, query: &str, pagination: Pagination) -> Result<Page<Story>> {
        let request = self.limits.request(pagination);
        let key = format!("{}:{}:{}", request.page, request.size, query);
        cached(self.cache.as_ref(), "story-search", &key, self.stories.search(query, request)).await
    }

    pub async fn all(&self, pagination: Pagination) -> Result<Page<Story>> {
        self.stories.find_all(self.limits.request(pagination)).await
    }

    /// First `count` stories in store order
    pub async fn random(&self, count: Option<i64>) -> Result<Vec<Story>> {
        let count = self.limits.count(count);
        if count == 0 {
            return Ok(Vec::new());
        }
        cached(self.cache.as_ref(), "random-stories", &count.to_string(), async {
            Ok::<_, ContentError>(self.stories.find_all(PageRequest::first(count)).await?.content)
        })
        .await
    }

    pub async fn by_category(&self, category: &str, pagination: Pagination) -> Result<Page<Story>> {
        self.stories.find_by_category(category, self.limits.request(pagination)).await
    }

    pub async fn by_difficulty(&self, difficulty: &str, pagination: Pagination) -> Result<Page<Story>> {
        self.stories.find_by_difficulty(difficulty, self.limits.request(pagination)).await
    }

    pub async fn by_author(&self, author: &str, pagination: Pagination) -> Result<Page<Story>> {
        self.stories.find_by_author(author, self.limits.request(pagination)).await
    }

    pub async fn by_theme(&self, theme: &str, pagination: Pagination) -> Result<Page<Story>> {
        self.stories.find_by_theme(theme, self.limits.request(pagination)).await
    }

    pub async fn by_id(&self, id: &str) -> Result<Option<Story>> {
        self.stories.find_by_id(id).await
    }

    pub async fn count(&self) -> Result<i64> {
        self.stories.count().await
    }
}
