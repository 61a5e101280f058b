use sqlx::SqlitePool;
use anyhow::Result;

/// Run database migrations / 运行数据库迁移
///
/// Content is imported by external tooling; this only makes sure the tables
/// exist so an empty database serves empty pages instead of errors.
/// List and map fields are stored as JSON text.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS dictionary_aqelei (
            id TEXT PRIMARY KEY,
            word TEXT NOT NULL,
            plural TEXT,
            type TEXT,
            translation TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS dictionary_waryaghri (
            id TEXT PRIMARY KEY,
            tifinagh TEXT,
            mot TEXT NOT NULL,
            definition_fr TEXT NOT NULL,
            type TEXT,
            pluriel TEXT,
            etat_annexion TEXT,
            synonyme TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sentences (
            id TEXT PRIMARY KEY,
            english_sentence TEXT NOT NULL,
            rif_sentence TEXT NOT NULL,
            status TEXT,
            required_verifications INTEGER,
            correct_votes_count INTEGER,
            incorrect_votes_count INTEGER,
            needs_edit_votes_count INTEGER,
            bad_translation_votes_count INTEGER,
            total_verifications_count INTEGER,
            last_reviewed_at TEXT,
            created_at TEXT,
            difficulty_level TEXT,
            source_languages TEXT,
            target_languages TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS verbs (
            id TEXT PRIMARY KEY,
            verb TEXT NOT NULL,
            translation TEXT NOT NULL,
            conjugations TEXT NOT NULL DEFAULT '{}',
            participes TEXT NOT NULL DEFAULT '{}',
            difficulty TEXT,
            is_active INTEGER,
            morphology TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS stories (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            title_english TEXT,
            title_french TEXT,
            tarifit_text TEXT NOT NULL,
            english_text TEXT,
            french_text TEXT,
            category TEXT,
            author TEXT,
            difficulty_level TEXT,
            themes TEXT NOT NULL DEFAULT '[]',
            word_count INTEGER,
            estimated_reading_time INTEGER,
            publication_date TEXT,
            created_at TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_stories_category ON stories(category)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_stories_difficulty ON stories(difficulty_level)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_verbs_difficulty ON verbs(difficulty)")
        .execute(pool)
        .await?;

    tracing::info!("Database migrations completed");
    Ok(())
}
