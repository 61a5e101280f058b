use serde::{Deserialize, Serialize};
use sqlx::types::Json;

/// Short story with optional English and French renditions
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_english: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_french: Option<String>,
    pub tarifit_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub english_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub french_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty_level: Option<String>,
    pub themes: Json<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<i32>,
    /// Minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_reading_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}
