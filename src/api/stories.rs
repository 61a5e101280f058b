use axum::{
    extract::{Path, Query, State},
    response::Response,
    Json,
};
use std::sync::Arc;

use super::{found, CountParams, CountResponse, PageParams, SearchParams};
use crate::error::Result;
use crate::models::{Page, Story};
use crate::state::AppState;

/// GET /stories/search - titles, texts and author
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchParams>,
) -> Result<Json<Page<Story>>> {
    Ok(Json(state.stories.search(&query.q, query.pagination()).await?))
}

pub async fn all_stories(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageParams>,
) -> Result<Json<Page<Story>>> {
    Ok(Json(state.stories.all(query.pagination()).await?))
}

pub async fn random_stories(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CountParams>,
) -> Result<Json<Vec<Story>>> {
    Ok(Json(state.stories.random(query.count).await?))
}

pub async fn by_category(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
    Query(query): Query<PageParams>,
) -> Result<Json<Page<Story>>> {
    Ok(Json(state.stories.by_category(&category, query.pagination()).await?))
}

pub async fn by_difficulty(
    State(state): State<Arc<AppState>>,
    Path(difficulty): Path<String>,
    Query(query): Query<PageParams>,
) -> Result<Json<Page<Story>>> {
    Ok(Json(state.stories.by_difficulty(&difficulty, query.pagination()).await?))
}

/// Partial, case-insensitive author match
pub async fn by_author(
    State(state): State<Arc<AppState>>,
    Path(author): Path<String>,
    Query(query): Query<PageParams>,
) -> Result<Json<Page<Story>>> {
    Ok(Json(state.stories.by_author(&author, query.pagination()).await?))
}

pub async fn by_theme(
    State(state): State<Arc<AppState>>,
    Path(theme): Path<String>,
    Query(query): Query<PageParams>,
) -> Result<Json<Page<Story>>> {
    Ok(Json(state.stories.by_theme(&theme, query.pagination()).await?))
}

pub async fn get_story(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response> {
    Ok(found(state.stories.by_id(&id).await?))
}

pub async fn count(State(state): State<Arc<AppState>>) -> Result<Json<CountResponse>> {
    Ok(Json(CountResponse { count: state.stories.count().await? }))
}
