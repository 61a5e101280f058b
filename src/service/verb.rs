use crate::error::Result;
use crate::models::{Page, PageLimits, PageRequest, Pagination, Verb};
use crate::repository::Repository;

#[derive(Clone)]
pub struct VerbService {
    verbs: Repository<Verb>,
    limits: PageLimits,
}

impl VerbService {
    pub fn new(verbs: Repository<Verb>, limits: PageLimits) -> Self {
        Self { verbs, limits }
    }

    /// Infinitive or translation contains `query`
    pub async fn search(&self, query: &str, pagination: Pagination) -> Result<Page<Verb>> {
        self.verbs.search(query, self.limits.request(pagination)).await
    }

    pub async fn search_by_verb(&self, verb: &str, pagination: Pagination) -> Result<Page<Verb>> {
        self.verbs.search_by_verb(verb, self.limits.request(pagination)).await
    }

    pub async fn search_by_translation(&self, translation: &str, pagination: Pagination) -> Result<Page<Verb>> {
        self.verbs.search_by_translation(translation, self.limits.request(pagination)).await
    }

    pub async fn search_conjugation(&self, query: &str, pagination: Pagination) -> Result<Page<Verb>> {
        self.verbs.search_conjugations(query, self.limits.request(pagination)).await
    }

    pub async fn search_participe(&self, query: &str, pagination: Pagination) -> Result<Page<Verb>> {
        self.verbs.search_participes(query, self.limits.request(pagination)).await
    }

    pub async fn by_difficulty(&self, difficulty: &str, pagination: Pagination) -> Result<Page<Verb>> {
        self.verbs.find_by_difficulty(difficulty, self.limits.request(pagination)).await
    }

    pub async fn all(&self, pagination: Pagination) -> Result<Page<Verb>> {
        self.verbs.find_all(self.limits.request(pagination)).await
    }

    pub async fn random(&self, count: Option<i64>) -> Result<Vec<Verb>> {
        let count = self.limits.count(count);
        if count == 0 {
            return Ok(Vec::new());
        }
        Ok(self.verbs.find_all(PageRequest::first(count)).await?.content)
    }

    pub async fn by_id(&self, id: &str) -> Result<Option<Verb>> {
        self.verbs.find_by_id(id).await
    }

    pub async fn count(&self) -> Result<i64> {
        self.verbs.count().await
    }
}
