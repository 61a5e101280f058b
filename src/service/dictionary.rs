use std::sync::Arc;

use crate::cache::{cached, ContentCache};
use crate::error::{ContentError, Result};
use crate::models::{
    DictionaryAqelei, DictionaryEntry, DictionaryType, DictionaryWaryaghri, Page, PageLimits,
    PageRequest, Pagination,
};
use crate::repository::Repository;

/// Both dictionaries, and the dispatch between them
#[derive(Clone)]
pub struct DictionaryService {
    aqelei: Repository<DictionaryAqelei>,
    waryaghri: Repository<DictionaryWaryaghri>,
    cache: Arc<dyn ContentCache>,
    limits: PageLimits,
}

impl DictionaryService {
    pub fn new(
        aqelei: Repository<DictionaryAqelei>,
        waryaghri: Repository<DictionaryWaryaghri>,
        cache: Arc<dyn ContentCache>,
        limits: PageLimits,
    ) -> Self {
        Self {
            aqelei,
            waryaghri,
            cache,
            limits,
        }
    }

    pub async fn search_aqelei(&self, query: &str, pagination: Pagination) -> Result<Page<DictionaryAqelei>> {
        let request = self.limits.request(pagination);
        let key = search_key(query, request);
        cached(self.cache.as_ref(), "dictionary-aqelei-search", &key, self.aqelei.search(query, request)).await
    }

    pub async fn search_waryaghri(&self, query: &str, pagination: Pagination) -> Result<Page<DictionaryWaryaghri>> {
        let request = self.limits.request(pagination);
        let key = search_key(query, request);
        cached(self.cache.as_ref(), "dictionary-waryaghri-search", &key, self.waryaghri.search(query, request)).await
    }

    pub async fn search_aqelei_by_word(&self, word: &str, pagination: Pagination) -> Result<Page<DictionaryAqelei>> {
        self.aqelei.search_by_word(word, self.limits.request(pagination)).await
    }

    pub async fn search_aqelei_by_translation(&self, translation: &str, pagination: Pagination) -> Result<Page<DictionaryAqelei>> {
        self.aqelei.search_by_translation(translation, self.limits.request(pagination)).await
    }

    /// First `count` entries in store order. Not shuffled.
    pub async fn random_aqelei(&self, count: Option<i64>) -> Result<Vec<DictionaryAqelei>> {
        let count = self.limits.count(count);
        if count == 0 {
            return Ok(Vec::new());
        }
        cached(self.cache.as_ref(), "random-aqelei-words", &count.to_string(), async {
            Ok::<_, ContentError>(self.aqelei.find_all(PageRequest::first(count)).await?.content)
        })
        .await
    }

    /// First `count` entries in store order. Not shuffled.
    pub async fn random_waryaghri(&self, count: Option<i64>) -> Result<Vec<DictionaryWaryaghri>> {
        let count = self.limits.count(count);
        if count == 0 {
            return Ok(Vec::new());
        }
        cached(self.cache.as_ref(), "random-waryaghri-words", &count.to_string(), async {
            Ok::<_, ContentError>(self.waryaghri.find_all(PageRequest::first(count)).await?.content)
        })
        .await
    }

    pub async fn all_aqelei(&self, pagination: Pagination) -> Result<Page<DictionaryAqelei>> {
        self.aqelei.find_all(self.limits.request(pagination)).await
    }

    pub async fn all_waryaghri(&self, pagination: Pagination) -> Result<Page<DictionaryWaryaghri>> {
        self.waryaghri.find_all(self.limits.request(pagination)).await
    }

    pub async fn search(&self, query: &str, dictionary: DictionaryType, pagination: Pagination) -> Result<Page<DictionaryEntry>> {
        match dictionary {
            DictionaryType::Waryaghri => Ok(self.search_waryaghri(query, pagination).await?.map(DictionaryEntry::from)),
            DictionaryType::Aqelei => Ok(self.search_aqelei(query, pagination).await?.map(DictionaryEntry::from)),
        }
    }

    pub async fn random(&self, dictionary: DictionaryType, count: Option<i64>) -> Result<Vec<DictionaryEntry>> {
        let entries = match dictionary {
            DictionaryType::Waryaghri => self
                .random_waryaghri(count)
                .await?
                .into_iter()
                .map(DictionaryEntry::from)
                .collect(),
            DictionaryType::Aqelei => self
                .random_aqelei(count)
                .await?
                .into_iter()
                .map(DictionaryEntry::from)
                .collect(),
        };
        Ok(entries)
    }

    pub async fn find_all(&self, dictionary: DictionaryType, pagination: Pagination) -> Result<Page<DictionaryEntry>> {
        match dictionary {
            DictionaryType::Waryaghri => Ok(self.all_waryaghri(pagination).await?.map(DictionaryEntry::from)),
            DictionaryType::Aqelei => Ok(self.all_aqelei(pagination).await?.map(DictionaryEntry::from)),
        }
    }
}

fn search_key(query: &str, request: PageRequest) -> String {
    format!("{}:{}:{}", request.page, request.size, query)
}
