//! Authors repository

use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::author::{author_id_from_name, Author, AuthorFullName},
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Sqlite>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all authors, ordered by full name
    pub async fn list(&self) -> AppResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, Author>("SELECT * FROM authors ORDER BY full_name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Count persisted authors
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Get author by ID, `None` when no row matches
    pub async fn get_by_id(&self, id: &str) -> AppResult<Option<Author>> {
        let author = sqlx::query_as::<_, Author>("SELECT * FROM authors WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(author)
    }

    /// Check if an author id is already taken
    async fn id_exists(&self, id: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM authors WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// Pick a free id derived from the full name, appending a numeric
    /// suffix when the derived id is already taken.
    async fn assign_id(&self, full_name: &str) -> AppResult<String> {
        let base = author_id_from_name(full_name);
        if base.is_empty() {
            return Err(AppError::Validation(
                "Author full name must contain at least one letter or digit".to_string(),
            ));
        }

        let mut candidate = base.clone();
        let mut suffix = 2;
        while self.id_exists(&candidate).await? {
            candidate = format!("{}{}", base, suffix);
            suffix += 1;
        }
        Ok(candidate)
    }

    /// Register a new author: assign an id, persist one row, return it
    pub async fn register(&self, data: &AuthorFullName) -> AppResult<Author> {
        let id = self.assign_id(&data.full_name).await?;

        let author = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (id, full_name, nationality, biography)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(&data.full_name)
        .bind(&data.nationality)
        .bind(&data.biography)
        .fetch_one(&self.pool)
        .await?;

        Ok(author)
    }

    /// Overwrite the mutable fields of an existing author, preserving its id
    pub async fn update(&self, id: &str, data: &AuthorFullName) -> AppResult<Author> {
        sqlx::query_as::<_, Author>(
            r#"
            UPDATE authors
            SET full_name = ?, nationality = ?, biography = ?
            WHERE id = ?
            RETURNING *
            "#,
        )
        .bind(&data.full_name)
        .bind(&data.nationality)
        .bind(&data.biography)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author {} not found", id)))
    }

    /// Delete an author by id; deleting a missing id is a no-op
    pub async fn delete(&self, id: &str) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM authors WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
