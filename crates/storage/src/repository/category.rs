use sqlx::PgConnection;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Category;

const DUPLICATE_NAME: &str = "Category name already exists";
const STILL_REFERENCED: &str = "Category is still referenced by athletes";

/// Repository for Category database operations
pub struct CategoryRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> CategoryRepository<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// List all categories
    pub async fn list(&mut self) -> Result<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM categories
            ORDER BY name
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(categories)
    }

    pub async fn find_by_id(&mut self, id: Uuid) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(category)
    }

    pub async fn find_by_name(&mut self, name: &str) -> Result<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM categories
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(category)
    }

    pub async fn insert(&mut self, category: &Category) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO categories (id, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(category.created_at)
        .bind(category.updated_at)
        .execute(&mut *self.conn)
        .await
        .map_err(|e| StorageError::from_write(e, DUPLICATE_NAME, STILL_REFERENCED))?;

        Ok(())
    }

    pub async fn update(&mut self, category: &Category) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE categories
            SET name = $2,
                updated_at = $3
            WHERE id = $1
            "#,
        )
        .bind(category.id)
        .bind(&category.name)
        .bind(category.updated_at)
        .execute(&mut *self.conn)
        .await
        .map_err(|e| StorageError::from_write(e, DUPLICATE_NAME, STILL_REFERENCED))?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&mut self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await
            .map_err(|e| StorageError::from_write(e, DUPLICATE_NAME, STILL_REFERENCED))?;

        Ok(result.rows_affected() > 0)
    }
}
