use sqlx::SqlitePool;
use std::sync::Arc;

use crate::cache::ContentCache;
use crate::models::PageLimits;
use crate::repository::Repository;
use crate::service::{
    ContentService, DictionaryService, HealthService, SentenceService, StoryService, VerbService,
};

pub struct AppState {
    pub db: SqlitePool,
    pub content: ContentService,
    pub stories: StoryService,
    pub health: HealthService,
}

impl AppState {
    /// Wire repositories and services over one pool / 组装服务
    pub fn new(db: SqlitePool, cache: Arc<dyn ContentCache>, limits: PageLimits) -> Self {
        let dictionary = DictionaryService::new(
            Repository::new(db.clone()),
            Repository::new(db.clone()),
            cache.clone(),
            limits,
        );
        let sentences = SentenceService::new(Repository::new(db.clone()), limits);
        let verbs = VerbService::new(Repository::new(db.clone()), limits);
        let stories = StoryService::new(Repository::new(db.clone()), cache, limits);

        Self {
            content: ContentService::new(Arc::new(dictionary), Arc::new(sentences), Arc::new(verbs)),
            stories,
            health: HealthService,
            db,
        }
    }
}
