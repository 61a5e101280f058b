use axum::{
    extract::{Path, Query, State},
    response::Response,
    Json,
};
use std::sync::Arc;

use super::{found, CountParams, CountResponse, PageParams, SearchParams};
use crate::error::Result;
use crate::models::{Page, Sentence};
use crate::state::AppState;

/// GET /sentences/search - English or Tarifit
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchParams>,
) -> Result<Json<Page<Sentence>>> {
    Ok(Json(state.content.search_sentences(&query.q, query.pagination()).await?))
}

pub async fn search_english(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchParams>,
) -> Result<Json<Page<Sentence>>> {
    let page = state.content.sentences().search_english(&query.q, query.pagination()).await?;
    Ok(Json(page))
}

pub async fn search_rif(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchParams>,
) -> Result<Json<Page<Sentence>>> {
    let page = state.content.sentences().search_rif(&query.q, query.pagination()).await?;
    Ok(Json(page))
}

pub async fn all_sentences(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageParams>,
) -> Result<Json<Page<Sentence>>> {
    Ok(Json(state.content.all_sentences(query.pagination()).await?))
}

pub async fn random_sentences(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CountParams>,
) -> Result<Json<Vec<Sentence>>> {
    Ok(Json(state.content.random_sentences(query.count).await?))
}

/// GET /sentences/:id - 404 with empty body when absent
pub async fn get_sentence(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response> {
    Ok(found(state.content.sentences().by_id(&id).await?))
}

pub async fn count(State(state): State<Arc<AppState>>) -> Result<Json<CountResponse>> {
    let count = state.content.sentences().count().await?;
    Ok(Json(CountResponse { count }))
}
