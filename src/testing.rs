//! In-memory database seeded with a small, known corpus for tests

use serde_json::json;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::db;

/// Single connection so every query sees the same `:memory:` database
pub async fn empty_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    db::run_migrations(&pool).await.unwrap();
    pool
}

pub async fn seeded_pool() -> SqlitePool {
    let pool = empty_pool().await;
    seed(&pool).await;
    pool
}

async fn seed(pool: &SqlitePool) {
    for (id, word, translation, plural) in [
        ("test_aqelei_1", "eau", "aman", "imawen"),
        ("test_aqelei_2", "pain", "aghrum", "igherman"),
        ("test_aqelei_3", "maison", "tighmmi", "tighemma"),
    ] {
        sqlx::query("INSERT INTO dictionary_aqelei (id, word, plural, type, translation) VALUES (?, ?, ?, 'noun', ?)")
            .bind(id)
            .bind(word)
            .bind(plural)
            .bind(translation)
            .execute(pool)
            .await
            .unwrap();
    }

    for (id, mot, definition, plural, tifinagh) in [
        ("test_waryaghri_1", "aman", "eau", "imawen", "ⴰⵎⴰⵏ"),
        ("test_waryaghri_2", "aghrum", "pain", "igherman", "ⴰⵖⵔⵓⵎ"),
        ("test_waryaghri_3", "tighmmi", "maison", "tighemma", "ⵜⵉⵖⵎⵎⵉ"),
    ] {
        sqlx::query(
            "INSERT INTO dictionary_waryaghri (id, tifinagh, mot, definition_fr, type, pluriel) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(tifinagh)
        .bind(mot)
        .bind(definition)
        .bind(json!(["nom"]).to_string())
        .bind(plural)
        .execute(pool)
        .await
        .unwrap();
    }

    for (id, english, rif) in [
        ("test_sentence_1", "Hello", "Azul"),
        ("test_sentence_2", "Goodbye", "Ar tufat"),
    ] {
        sqlx::query("INSERT INTO sentences (id, english_sentence, rif_sentence) VALUES (?, ?, ?)")
            .bind(id)
            .bind(english)
            .bind(rif)
            .execute(pool)
            .await
            .unwrap();
    }
    sqlx::query(
        "INSERT INTO sentences (id, english_sentence, rif_sentence, status, required_verifications, \
         correct_votes_count, total_verifications_count, created_at, difficulty_level, source_languages, target_languages) \
         VALUES ('test_sentence_3', 'How are you?', 'Mamek tsawaleḍ?', 'verified', 3, 3, 3, \
         '2024-12-11T10:00:00Z', 'beginner', '[\"en\"]', '[\"rif\"]')",
    )
    .execute(pool)
    .await
    .unwrap();

    let verbs = [
        (
            "test_verb_1",
            "azwel",
            "run",
            json!({ "present": { "1s": "azweleg", "2s": "tazweleḍ", "3s": "yezwel" } }),
            json!({ "positive": "yezwlen" }),
            "beginner",
        ),
        (
            "test_verb_2",
            "ssiwel",
            "walk",
            json!({
                "present": { "1s": "ssiwleg", "2s": "tssiwleḍ", "3s": "yessiwel" },
                "past": { "1s": "ssiwleɣ" }
            }),
            json!({}),
            "beginner",
        ),
        (
            "test_verb_3",
            "ɣeṛ",
            "read",
            json!({ "present": { "1s": "ɣṛeg", "2s": "tɣaṛeḍ", "3s": "yeɣṛa" } }),
            json!({ "negative": "ur yeɣṛin" }),
            "intermediate",
        ),
    ];
    for (id, verb, translation, conjugations, participes, difficulty) in verbs {
        sqlx::query(
            "INSERT INTO verbs (id, verb, translation, conjugations, participes, difficulty, is_active) VALUES (?, ?, ?, ?, ?, ?, 1)",
        )
        .bind(id)
        .bind(verb)
        .bind(translation)
        .bind(conjugations.to_string())
        .bind(participes.to_string())
        .bind(difficulty)
        .execute(pool)
        .await
        .unwrap();
    }

    sqlx::query(
        "INSERT INTO stories (id, title, title_english, title_french, tarifit_text, english_text, french_text, \
         difficulty_level, category, word_count, estimated_reading_time, author, publication_date, themes, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind("test_story_1")
    .bind("Azul, nec qqaren-ayi Massin")
    .bind("Hello, they call me Massin")
    .bind("Bonjour, ils m'appellent Massin")
    .bind("Azul, nec qqaren-ayi Massin. D amḍan n 25 n yiseggasen...")
    .bind("Hello, they call me Massin. I am a 25-year-old man...")
    .bind("Bonjour, ils m'appellent Massin. Je suis un homme de 25 ans...")
    .bind("intermediate")
    .bind("autobiographical")
    .bind(1378)
    .bind(7)
    .bind("Fuad (Amaziɣ Massin)")
    .bind("2024-05-13")
    .bind(json!(["identity", "language", "culture"]).to_string())
    .bind("2024-12-11")
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO stories (id, title, title_english, title_french, tarifit_text, english_text, french_text, \
         difficulty_level, category, word_count, estimated_reading_time, author, publication_date, themes, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind("test_story_2")
    .bind("Tamurt n waraben")
    .bind("The land of ravens")
    .bind("La terre des corbeaux")
    .bind("Deg yiwen wass, yella yiwen uqcic...")
    .bind("One day, there was a young boy...")
    .bind("Un jour, il y avait un jeune garçon...")
    .bind("beginner")
    .bind("folklore")
    .bind(856)
    .bind(4)
    .bind("Traditional")
    .bind("2024-06-01")
    .bind(json!(["nature", "adventure"]).to_string())
    .bind("2024-12-11")
    .execute(pool)
    .await
    .unwrap();
}
