use axum::{
    extract::{Path, Query, State},
    response::Response,
    Json,
};
use std::sync::Arc;

use super::{found, CountParams, CountResponse, PageParams, SearchParams};
use crate::error::Result;
use crate::models::{Page, Verb};
use crate::state::AppState;

/// GET /verbs/search - infinitive or translation
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchParams>,
) -> Result<Json<Page<Verb>>> {
    Ok(Json(state.content.search_verbs(&query.q, query.pagination()).await?))
}

pub async fn search_by_verb(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchParams>,
) -> Result<Json<Page<Verb>>> {
    let page = state.content.verbs().search_by_verb(&query.q, query.pagination()).await?;
    Ok(Json(page))
}

pub async fn search_by_translation(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchParams>,
) -> Result<Json<Page<Verb>>> {
    let page = state.content.verbs().search_by_translation(&query.q, query.pagination()).await?;
    Ok(Json(page))
}

/// GET /verbs/search/conjugation - any conjugated form
pub async fn search_conjugation(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchParams>,
) -> Result<Json<Page<Verb>>> {
    let page = state.content.verbs().search_conjugation(&query.q, query.pagination()).await?;
    Ok(Json(page))
}

/// GET /verbs/search/participe - any participle form
pub async fn search_participe(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchParams>,
) -> Result<Json<Page<Verb>>> {
    let page = state.content.verbs().search_participe(&query.q, query.pagination()).await?;
    Ok(Json(page))
}

pub async fn by_difficulty(
    State(state): State<Arc<AppState>>,
    Path(difficulty): Path<String>,
    Query(query): Query<PageParams>,
) -> Result<Json<Page<Verb>>> {
    let page = state.content.verbs().by_difficulty(&difficulty, query.pagination()).await?;
    Ok(Json(page))
}

pub async fn all_verbs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageParams>,
) -> Result<Json<Page<Verb>>> {
    Ok(Json(state.content.all_verbs(query.pagination()).await?))
}

pub async fn random_verbs(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CountParams>,
) -> Result<Json<Vec<Verb>>> {
    Ok(Json(state.content.random_verbs(query.count).await?))
}

pub async fn get_verb(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response> {
    Ok(found(state.content.verbs().by_id(&id).await?))
}

pub async fn count(State(state): State<Arc<AppState>>) -> Result<Json<CountResponse>> {
    let count = state.content.verbs().count().await?;
    Ok(Json(CountResponse { count }))
}
