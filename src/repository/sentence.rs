use super::{Collection, Filter, Repository};
use crate::error::Result;
use crate::models::{Page, PageRequest, Sentence};

impl Collection for Sentence {
    const TABLE: &'static str = "sentences";
    const SEARCH_COLUMNS: &'static [&'static str] = &["english_sentence", "rif_sentence"];
}

impl Repository<Sentence> {
    pub async fn search_english(&self, query: &str, request: PageRequest) -> Result<Page<Sentence>> {
        self.find_where(Filter::contains(&["english_sentence"], query), request).await
    }

    pub async fn search_rif(&self, query: &str, request: PageRequest) -> Result<Page<Sentence>> {
        self.find_where(Filter::contains(&["rif_sentence"], query), request).await
    }
}
