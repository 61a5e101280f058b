use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use super::{DictionaryPageParams, DictionaryRandomParams, DictionarySearchParams, SearchParams};
use crate::error::Result;
use crate::models::{DictionaryAqelei, DictionaryEntry, Page};
use crate::state::AppState;

/// GET /dictionary/search?q=&type=
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DictionarySearchParams>,
) -> Result<Json<Page<DictionaryEntry>>> {
    let page = state
        .content
        .search_dictionary(&query.q, &query.dictionary_type, query.pagination())
        .await?;
    Ok(Json(page))
}

/// GET /dictionary/search/word - Aqelei headword only
pub async fn search_by_word(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchParams>,
) -> Result<Json<Page<DictionaryAqelei>>> {
    let page = state
        .content
        .dictionary()
        .search_aqelei_by_word(&query.q, query.pagination())
        .await?;
    Ok(Json(page))
}

/// GET /dictionary/search/translation - Aqelei translation only
pub async fn search_by_translation(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchParams>,
) -> Result<Json<Page<DictionaryAqelei>>> {
    let page = state
        .content
        .dictionary()
        .search_aqelei_by_translation(&query.q, query.pagination())
        .await?;
    Ok(Json(page))
}

/// GET /dictionary/random?type=&count=
pub async fn random_words(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DictionaryRandomParams>,
) -> Result<Json<Vec<DictionaryEntry>>> {
    let words = state
        .content
        .random_words(&query.dictionary_type, query.count)
        .await?;
    Ok(Json(words))
}

/// GET /dictionary?type=&page=&size=
pub async fn all_entries(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DictionaryPageParams>,
) -> Result<Json<Page<DictionaryEntry>>> {
    let page = state
        .content
        .all_dictionary_entries(&query.dictionary_type, query.pagination())
        .await?;
    Ok(Json(page))
}
