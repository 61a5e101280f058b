use super::{Collection, Filter, Repository};
use crate::error::Result;
use crate::models::{Page, PageRequest, Story};

impl Collection for Story {
    const TABLE: &'static str = "stories";
    const SEARCH_COLUMNS: &'static [&'static str] = &[
        "title",
        "title_english",
        "title_french",
        "tarifit_text",
        "english_text",
        "french_text",
        "author",
    ];
}

impl Repository<Story> {
    pub async fn find_by_category(&self, category: &str, request: PageRequest) -> Result<Page<Story>> {
        self.find_where(Filter::equals("category", category), request).await
    }

    pub async fn find_by_difficulty(&self, difficulty: &str, request: PageRequest) -> Result<Page<Story>> {
        self.find_where(Filter::equals("difficulty_level", difficulty), request).await
    }

    pub async fn find_by_author(&self, author: &str, request: PageRequest) -> Result<Page<Story>> {
        self.find_where(Filter::contains(&["author"], author), request).await
    }

    /// `theme` is one of the story's themes (exact)
    pub async fn find_by_theme(&self, theme: &str, request: PageRequest) -> Result<Page<Story>> {
        let filter = Filter::raw(
            "EXISTS (SELECT 1 FROM json_each(stories.themes) AS theme WHERE theme.value = ?)",
            vec![theme.to_string()],
        );
        self.find_where(filter, request).await
    }
}
