use super::{Collection, Filter, Repository};
use crate::error::Result;
use crate::models::{DictionaryAqelei, DictionaryWaryaghri, Page, PageRequest};

impl Collection for DictionaryAqelei {
    const TABLE: &'static str = "dictionary_aqelei";
    const SEARCH_COLUMNS: &'static [&'static str] = &["word", "translation"];
}

impl Collection for DictionaryWaryaghri {
    const TABLE: &'static str = "dictionary_waryaghri";
    const SEARCH_COLUMNS: &'static [&'static str] = &["mot", "definition_fr"];
}

impl Repository<DictionaryAqelei> {
    pub async fn search_by_word(&self, word: &str, request: PageRequest) -> Result<Page<DictionaryAqelei>> {
        self.find_where(Filter::contains(&["word"], word), request).await
    }

    pub async fn search_by_translation(&self, translation: &str, request: PageRequest) -> Result<Page<DictionaryAqelei>> {
        self.find_where(Filter::contains(&["translation"], translation), request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[tokio::test]
    async fn test_aqelei_single_field_search() {
        let repo = Repository::<DictionaryAqelei>::new(testing::seeded_pool().await);

        let page = repo.search_by_word("pain", PageRequest::first(20)).await.unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].translation, "aghrum");

        // "aghrum" is a translation, never a word
        let page = repo.search_by_word("aghrum", PageRequest::first(20)).await.unwrap();
        assert!(page.empty);

        let page = repo.search_by_translation("tighm", PageRequest::first(20)).await.unwrap();
        assert_eq!(page.content[0].word, "maison");
    }

    #[tokio::test]
    async fn test_waryaghri_searches_mot_or_definition() {
        let repo = Repository::<DictionaryWaryaghri>::new(testing::seeded_pool().await);

        let page = repo.search("Maison", PageRequest::first(20)).await.unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].mot, "tighmmi");

        let page = repo.search("aman", PageRequest::first(20)).await.unwrap();
        assert_eq!(page.content[0].definition_fr, "eau");
    }
}
