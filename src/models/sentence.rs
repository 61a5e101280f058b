use serde::{Deserialize, Serialize};
use sqlx::types::Json;

/// English / Rif sentence pair with optional review metadata
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Sentence {
    pub id: String,
    pub english_sentence: String,
    pub rif_sentence: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_verifications: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_votes_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incorrect_votes_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needs_edit_votes_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bad_translation_votes_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_verifications_count: Option<i32>,
    /// RFC 3339
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_languages: Option<Json<Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_languages: Option<Json<Vec<String>>>,
}
