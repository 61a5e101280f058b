//! Persistence layer / 持久层
//!
//! One `Repository<T>` per collection. Every query returns rows in insertion
//! order (`rowid`), so a static table always yields the same pages.
//! Matching is a case-insensitive substring `GLOB`. SQLite's own `LIKE` and
//! `lower()` fold ASCII only, so the pattern spells out the case variants of
//! every letter (`ɣ` becomes `[ɣƔ]`) and works for Tarifit text too.

mod dictionary;
mod sentence;
mod story;
mod verb;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, SqlitePool};
use std::marker::PhantomData;

use crate::error::Result;
use crate::models::{Page, PageRequest};

/// A table of documents of one kind
pub trait Collection: for<'r> FromRow<'r, SqliteRow> + Send + Unpin + 'static {
    const TABLE: &'static str;
    /// Columns matched, OR-combined, by free-text search
    const SEARCH_COLUMNS: &'static [&'static str];
}

/// Case-insensitive substring `GLOB` pattern for `query`.
///
/// Letters become a class of their single-character case forms, the `GLOB`
/// metacharacters `*`, `?` and `[` are bracketed so they match literally.
pub fn glob_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() * 2 + 2);
    pattern.push('*');
    for c in query.chars() {
        match c {
            '*' | '?' | '[' => {
                pattern.push('[');
                pattern.push(c);
                pattern.push(']');
            }
            _ => {
                let variants = case_variants(c);
                if variants.len() > 1 {
                    pattern.push('[');
                    pattern.extend(variants);
                    pattern.push(']');
                } else {
                    pattern.push(c);
                }
            }
        }
    }
    pattern.push('*');
    pattern
}

/// `c` plus its lower and upper case forms, where each is a single character
fn case_variants(c: char) -> Vec<char> {
    let mut variants = vec![c];
    if !c.is_alphabetic() {
        return variants;
    }
    for mut forms in [c.to_lowercase().collect::<Vec<_>>(), c.to_uppercase().collect::<Vec<_>>()] {
        if forms.len() == 1 {
            let form = forms.remove(0);
            if !variants.contains(&form) {
                variants.push(form);
            }
        }
    }
    variants
}

/// A `WHERE` clause with its positional parameters
#[derive(Debug, Clone, Default)]
pub struct Filter {
    clause: String,
    binds: Vec<String>,
}

impl Filter {
    pub fn all() -> Self {
        Self {
            clause: "1 = 1".to_string(),
            binds: Vec::new(),
        }
    }

    /// Any of `columns` contains `query`
    pub fn contains(columns: &[&str], query: &str) -> Self {
        let pattern = glob_pattern(query);
        let clause = columns
            .iter()
            .map(|column| format!("{} GLOB ?", column))
            .collect::<Vec<_>>()
            .join(" OR ");
        Self {
            clause: format!("({})", clause),
            binds: vec![pattern; columns.len()],
        }
    }

    pub fn equals(column: &str, value: &str) -> Self {
        Self {
            clause: format!("{} = ?", column),
            binds: vec![value.to_string()],
        }
    }

    /// Hand-written clause, one `?` per bind
    pub fn raw(clause: impl Into<String>, binds: Vec<String>) -> Self {
        Self {
            clause: clause.into(),
            binds,
        }
    }
}

pub struct Repository<T> {
    pool: SqlitePool,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: Collection> Repository<T> {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _marker: PhantomData,
        }
    }

    /// Free-text search over `T::SEARCH_COLUMNS`
    pub async fn search(&self, query: &str, request: PageRequest) -> Result<Page<T>> {
        self.find_where(Filter::contains(T::SEARCH_COLUMNS, query), request).await
    }

    pub async fn find_all(&self, request: PageRequest) -> Result<Page<T>> {
        self.find_where(Filter::all(), request).await
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<T>> {
        let sql = format!("SELECT * FROM {} WHERE id = ?", T::TABLE);
        let item = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(item)
    }

    pub async fn count(&self) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", T::TABLE);
        let total: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(total)
    }

    pub async fn find_where(&self, filter: Filter, request: PageRequest) -> Result<Page<T>> {
        let sql = format!(
            "SELECT * FROM {} WHERE {} ORDER BY rowid LIMIT ? OFFSET ?",
            T::TABLE,
            filter.clause
        );
        let mut query = sqlx::query_as::<_, T>(&sql);
        for value in &filter.binds {
            query = query.bind(value.as_str());
        }
        let items = query
            .bind(request.size)
            .bind(request.offset())
            .fetch_all(&self.pool)
            .await?;

        let count_sql = format!("SELECT COUNT(*) FROM {} WHERE {}", T::TABLE, filter.clause);
        let mut count = sqlx::query_scalar::<_, i64>(&count_sql);
        for value in &filter.binds {
            count = count.bind(value.as_str());
        }
        let total = count.fetch_one(&self.pool).await?;

        tracing::debug!(
            "{}: {} of {} rows (page {}, size {})",
            T::TABLE,
            items.len(),
            total,
            request.page,
            request.size
        );
        Ok(Page::new(items, total, request))
    }
}
