use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use std::collections::BTreeMap;

/// tense -> person/number marker -> conjugated form
pub type Conjugations = BTreeMap<String, BTreeMap<String, String>>;

/// participle name -> form
pub type Participes = BTreeMap<String, String>;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Verb {
    pub id: String,
    /// Infinitive
    pub verb: String,
    pub translation: String,
    pub conjugations: Json<Conjugations>,
    pub participes: Json<Participes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub morphology: Option<String>,
}

impl Verb {
    /// Conjugated form for a tense and person marker, e.g. ("present", "3s")
    pub fn conjugate(&self, tense: &str, person: &str) -> Option<&str> {
        self.conjugations
            .get(tense)
            .and_then(|forms| forms.get(person))
            .map(String::as_str)
    }
}
