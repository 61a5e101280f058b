use super::{glob_pattern, Collection, Filter, Repository};
use crate::error::Result;
use crate::models::{Page, PageRequest, Verb};

impl Collection for Verb {
    const TABLE: &'static str = "verbs";
    const SEARCH_COLUMNS: &'static [&'static str] = &["verb", "translation"];
}

impl Repository<Verb> {
    pub async fn search_by_verb(&self, verb: &str, request: PageRequest) -> Result<Page<Verb>> {
        self.find_where(Filter::contains(&["verb"], verb), request).await
    }

    pub async fn search_by_translation(&self, translation: &str, request: PageRequest) -> Result<Page<Verb>> {
        self.find_where(Filter::contains(&["translation"], translation), request).await
    }

    pub async fn find_by_difficulty(&self, difficulty: &str, request: PageRequest) -> Result<Page<Verb>> {
        self.find_where(Filter::equals("difficulty", difficulty), request).await
    }

    /// Any conjugated form, in any tense, contains `query`
    pub async fn search_conjugations(&self, query: &str, request: PageRequest) -> Result<Page<Verb>> {
        let filter = Filter::raw(
            "EXISTS (SELECT 1 FROM json_each(verbs.conjugations) AS tense, json_each(tense.value) AS form \
             WHERE form.value GLOB ?)",
            vec![glob_pattern(query)],
        );
        self.find_where(filter, request).await
    }

    /// Any participle form contains `query`
    pub async fn search_participes(&self, query: &str, request: PageRequest) -> Result<Page<Verb>> {
        let filter = Filter::raw(
            "EXISTS (SELECT 1 FROM json_each(verbs.participes) AS participe \
             WHERE participe.value GLOB ?)",
            vec![glob_pattern(query)],
        );
        self.find_where(filter, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[tokio::test]
    async fn test_conjugation_search_looks_inside_every_tense() {
        let repo = Repository::<Verb>::new(testing::seeded_pool().await);

        let page = repo.search_conjugations("yezwel", PageRequest::first(20)).await.unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].verb, "azwel");
        assert_eq!(page.content[0].conjugate("present", "3s"), Some("yezwel"));

        // past tense only exists on the second verb
        let page = repo.search_conjugations("ssiwleɣ", PageRequest::first(20)).await.unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].id, "test_verb_2");
        let page = repo.search_conjugations("SSIWLEƔ", PageRequest::first(20)).await.unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].id, "test_verb_2");

        // tense names and person markers are keys, not forms
        let page = repo.search_conjugations("present", PageRequest::first(20)).await.unwrap();
        assert!(page.empty);
    }

    #[tokio::test]
    async fn test_participe_search() {
        let repo = Repository::<Verb>::new(testing::seeded_pool().await);

        let page = repo.search_participes("yezwlen", PageRequest::first(20)).await.unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].id, "test_verb_1");

        let page = repo.search_participes("nothing", PageRequest::first(20)).await.unwrap();
        assert!(page.empty);

        let page = repo.search_participes("UR YEƔṚIN", PageRequest::first(20)).await.unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].id, "test_verb_3");
    }

    #[tokio::test]
    async fn test_single_field_and_difficulty_filters() {
        let repo = Repository::<Verb>::new(testing::seeded_pool().await);

        let page = repo.search_by_translation("WALK", PageRequest::first(20)).await.unwrap();
        assert_eq!(page.content[0].verb, "ssiwel");

        let page = repo.search_by_verb("walk", PageRequest::first(20)).await.unwrap();
        assert!(page.empty);

        let page = repo.find_by_difficulty("beginner", PageRequest::first(20)).await.unwrap();
        assert_eq!(page.total_elements, 2);
        let page = repo.find_by_difficulty("Beginner", PageRequest::first(20)).await.unwrap();
        assert_eq!(page.total_elements, 0);
    }
}
