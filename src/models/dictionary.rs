use serde::{Deserialize, Serialize};
use sqlx::types::Json;

/// Aqelɛi orthography entry, table `dictionary_aqelei`
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryAqelei {
    pub id: String,
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plural: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    #[sqlx(rename = "type")]
    pub word_type: Option<String>,
    pub translation: String,
}

/// Waryaghri orthography entry, table `dictionary_waryaghri`
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryWaryaghri {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tifinagh: Option<String>,
    pub mot: String,
    pub definition_fr: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    #[sqlx(rename = "type")]
    pub word_types: Option<Json<Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pluriel: Option<String>,
    /// Construct state / 依附态
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etat_annexion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synonyme: Option<String>,
}

/// Which dictionary a request targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DictionaryType {
    #[default]
    Aqelei,
    Waryaghri,
}

impl DictionaryType {
    /// Case-insensitive. Anything that is not "waryaghri" selects Aqelei,
    /// including empty and unknown values.
    pub fn parse(value: &str) -> Self {
        if value.to_lowercase() == "waryaghri" {
            DictionaryType::Waryaghri
        } else {
            DictionaryType::Aqelei
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DictionaryType::Aqelei => "aqelei",
            DictionaryType::Waryaghri => "waryaghri",
        }
    }
}

impl From<&str> for DictionaryType {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

/// Entry of either dictionary, tagged with `dictionaryType` when serialized
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "dictionaryType", rename_all = "lowercase")]
pub enum DictionaryEntry {
    Aqelei(DictionaryAqelei),
    Waryaghri(DictionaryWaryaghri),
}

impl DictionaryEntry {
    pub fn id(&self) -> &str {
        match self {
            DictionaryEntry::Aqelei(entry) => &entry.id,
            DictionaryEntry::Waryaghri(entry) => &entry.id,
        }
    }

    pub fn dictionary_type(&self) -> DictionaryType {
        match self {
            DictionaryEntry::Aqelei(_) => DictionaryType::Aqelei,
            DictionaryEntry::Waryaghri(_) => DictionaryType::Waryaghri,
        }
    }
}

impl From<DictionaryAqelei> for DictionaryEntry {
    fn from(entry: DictionaryAqelei) -> Self {
        DictionaryEntry::Aqelei(entry)
    }
}

impl From<DictionaryWaryaghri> for DictionaryEntry {
    fn from(entry: DictionaryWaryaghri) -> Self {
        DictionaryEntry::Waryaghri(entry)
    }
}
