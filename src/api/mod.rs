pub mod dictionary;
pub mod sentences;
pub mod server;
pub mod stories;
pub mod verbs;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::models::{DictionaryType, Pagination};
use crate::state::AppState;

pub const API_PREFIX: &str = "/api/v1/content";

fn default_dictionary_type() -> String {
    DictionaryType::Aqelei.as_str().to_string()
}

/// `?q=&page=&size=`
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl SearchParams {
    pub fn pagination(&self) -> Pagination {
        Pagination { page: self.page, size: self.size }
    }
}

/// `?page=&size=`
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl PageParams {
    pub fn pagination(&self) -> Pagination {
        Pagination { page: self.page, size: self.size }
    }
}

/// `?count=`
#[derive(Debug, Deserialize)]
pub struct CountParams {
    pub count: Option<i64>,
}

/// `?q=&type=&page=&size=`
#[derive(Debug, Deserialize)]
pub struct DictionarySearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(rename = "type", default = "default_dictionary_type")]
    pub dictionary_type: String,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl DictionarySearchParams {
    pub fn pagination(&self) -> Pagination {
        Pagination { page: self.page, size: self.size }
    }
}

/// `?type=&page=&size=`
#[derive(Debug, Deserialize)]
pub struct DictionaryPageParams {
    #[serde(rename = "type", default = "default_dictionary_type")]
    pub dictionary_type: String,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl DictionaryPageParams {
    pub fn pagination(&self) -> Pagination {
        Pagination { page: self.page, size: self.size }
    }
}

/// `?type=&count=`
#[derive(Debug, Deserialize)]
pub struct DictionaryRandomParams {
    #[serde(rename = "type", default = "default_dictionary_type")]
    pub dictionary_type: String,
    pub count: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: i64,
}

/// 200 with the entity, or an empty-body 404
pub fn found<T: Serialize>(item: Option<T>) -> Response {
    match item {
        Some(item) => Json(item).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// All routes under `/api/v1/content`, read-only, any origin
pub fn router(state: Arc<AppState>) -> Router {
    let content = Router::new()
        .route("/health", get(server::health_check))
        .route("/dictionary", get(dictionary::all_entries))
        .route("/dictionary/search", get(dictionary::search))
        .route("/dictionary/search/word", get(dictionary::search_by_word))
        .route("/dictionary/search/translation", get(dictionary::search_by_translation))
        .route("/dictionary/random", get(dictionary::random_words))
        .route("/sentences", get(sentences::all_sentences))
        .route("/sentences/search", get(sentences::search))
        .route("/sentences/search/english", get(sentences::search_english))
        .route("/sentences/search/rif", get(sentences::search_rif))
        .route("/sentences/random", get(sentences::random_sentences))
        .route("/sentences/count", get(sentences::count))
        .route("/sentences/:id", get(sentences::get_sentence))
        .route("/verbs", get(verbs::all_verbs))
        .route("/verbs/search", get(verbs::search))
        .route("/verbs/search/verb", get(verbs::search_by_verb))
        .route("/verbs/search/translation", get(verbs::search_by_translation))
        .route("/verbs/search/conjugation", get(verbs::search_conjugation))
        .route("/verbs/search/participe", get(verbs::search_participe))
        .route("/verbs/difficulty/:difficulty", get(verbs::by_difficulty))
        .route("/verbs/random", get(verbs::random_verbs))
        .route("/verbs/count", get(verbs::count))
        .route("/verbs/:id", get(verbs::get_verb))
        .route("/stories", get(stories::all_stories))
        .route("/stories/search", get(stories::search))
        .route("/stories/category/:category", get(stories::by_category))
        .route("/stories/difficulty/:difficulty", get(stories::by_difficulty))
        .route("/stories/author/:author", get(stories::by_author))
        .route("/stories/theme/:theme", get(stories::by_theme))
        .route("/stories/random", get(stories::random_stories))
        .route("/stories/count", get(stories::count))
        .route("/stories/:id", get(stories::get_story));

    Router::new()
        .nest(API_PREFIX, content)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
