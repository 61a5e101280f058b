use crate::error::Result;
use crate::models::{Page, PageLimits, PageRequest, Pagination, Sentence};
use crate::repository::Repository;

#[derive(Clone)]
pub struct SentenceService {
    sentences: Repository<Sentence>,
    limits: PageLimits,
}

impl SentenceService {
    pub fn new(sentences: Repository<Sentence>, limits: PageLimits) -> Self {
        Self { sentences, limits }
    }

    /// English or Rif side contains `query`
    pub async fn search(&self, query: &str, pagination: Pagination) -> Result<Page<Sentence>> {
        self.sentences.search(query, self.limits.request(pagination)).await
    }

    pub async fn search_english(&self, query: &str, pagination: Pagination) -> Result<Page<Sentence>> {
        self.sentences.search_english(query, self.limits.request(pagination)).await
    }

    pub async fn search_rif(&self, query: &str, pagination: Pagination) -> Result<Page<Sentence>> {
        self.sentences.search_rif(query, self.limits.request(pagination)).await
    }

    pub async fn all(&self, pagination: Pagination) -> Result<Page<Sentence>> {
        self.sentences.find_all(self.limits.request(pagination)).await
    }

    pub async fn random(&self, count: Option<i64>) -> Result<Vec<Sentence>> {
        let count = self.limits.count(count);
        if count == 0 {
            return Ok(Vec::new());
        }
        Ok(self.sentences.find_all(PageRequest::first(count)).await?.content)
    }

    pub async fn by_id(&self, id: &str) -> Result<Option<Sentence>> {
        self.sentences.find_by_id(id).await
    }

    pub async fn count(&self) -> Result<i64> {
        self.sentences.count().await
    }
}
