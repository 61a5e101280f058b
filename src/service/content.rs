use std::sync::Arc;

use crate::error::Result;
use crate::models::{DictionaryEntry, DictionaryType, Page, Pagination, Sentence, Verb};

use super::{DictionaryService, SentenceService, VerbService};

/// Single facade over the dictionary, sentence and verb services / 内容服务门面
///
/// Pure delegation; the only decision made here is parsing the dictionary
/// type string (unknown values select Aqelei).
#[derive(Clone)]
pub struct ContentService {
    dictionary: Arc<DictionaryService>,
    sentences: Arc<SentenceService>,
    verbs: Arc<VerbService>,
}

impl ContentService {
    pub fn new(
        dictionary: Arc<DictionaryService>,
        sentences: Arc<SentenceService>,
        verbs: Arc<VerbService>,
    ) -> Self {
        Self {
            dictionary,
            sentences,
            verbs,
        }
    }

    pub fn dictionary(&self) -> &DictionaryService {
        &self.dictionary
    }

    pub fn sentences(&self) -> &SentenceService {
        &self.sentences
    }

    pub fn verbs(&self) -> &VerbService {
        &self.verbs
    }

    // Dictionary

    pub async fn search_dictionary(&self, query: &str, dictionary_type: &str, pagination: Pagination) -> Result<Page<DictionaryEntry>> {
        self.dictionary
            .search(query, DictionaryType::parse(dictionary_type), pagination)
            .await
    }

    pub async fn random_words(&self, dictionary_type: &str, count: Option<i64>) -> Result<Vec<DictionaryEntry>> {
        self.dictionary
            .random(DictionaryType::parse(dictionary_type), count)
            .await
    }

    pub async fn all_dictionary_entries(&self, dictionary_type: &str, pagination: Pagination) -> Result<Page<DictionaryEntry>> {
        self.dictionary
            .find_all(DictionaryType::parse(dictionary_type), pagination)
            .await
    }

    // Sentences

    pub async fn search_sentences(&self, query: &str, pagination: Pagination) -> Result<Page<Sentence>> {
        self.sentences.search(query, pagination).await
    }

    pub async fn all_sentences(&self, pagination: Pagination) -> Result<Page<Sentence>> {
        self.sentences.all(pagination).await
    }

    pub async fn random_sentences(&self, count: Option<i64>) -> Result<Vec<Sentence>> {
        self.sentences.random(count).await
    }

    // Verbs

    pub async fn search_verbs(&self, query: &str, pagination: Pagination) -> Result<Page<Verb>> {
        self.verbs.search(query, pagination).await
    }

    pub async fn all_verbs(&self, pagination: Pagination) -> Result<Page<Verb>> {
        self.verbs.all(pagination).await
    }

    pub async fn random_verbs(&self, count: Option<i64>) -> Result<Vec<Verb>> {
        self.verbs.random(count).await
    }
}
