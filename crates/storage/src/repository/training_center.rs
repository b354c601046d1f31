use sqlx::PgConnection;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::TrainingCenter;

const DUPLICATE_NAME: &str = "Training center name already exists";
const STILL_REFERENCED: &str = "Training center is still referenced by athletes";

/// Repository for TrainingCenter database operations
pub struct TrainingCenterRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> TrainingCenterRepository<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// List all training centers
    pub async fn list(&mut self) -> Result<Vec<TrainingCenter>> {
        let centers = sqlx::query_as::<_, TrainingCenter>(
            r#"
            SELECT id, name, address, owner, created_at, updated_at
            FROM training_centers
            ORDER BY name
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(centers)
    }

    pub async fn find_by_id(&mut self, id: Uuid) -> Result<Option<TrainingCenter>> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            r#"
            SELECT id, name, address, owner, created_at, updated_at
            FROM training_centers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(center)
    }

    pub async fn find_by_name(&mut self, name: &str) -> Result<Option<TrainingCenter>> {
        let center = sqlx::query_as::<_, TrainingCenter>(
            r#"
            SELECT id, name, address, owner, created_at, updated_at
            FROM training_centers
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(center)
    }

    pub async fn insert(&mut self, center: &TrainingCenter) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO training_centers (id, name, address, owner, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(center.id)
        .bind(&center.name)
        .bind(&center.address)
        .bind(&center.owner)
        .bind(center.created_at)
        .bind(center.updated_at)
        .execute(&mut *self.conn)
        .await
        .map_err(|e| StorageError::from_write(e, DUPLICATE_NAME, STILL_REFERENCED))?;

        Ok(())
    }

    pub async fn update(&mut self, center: &TrainingCenter) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE training_centers
            SET name = $2,
                address = $3,
                owner = $4,
                updated_at = $5
            WHERE id = $1
            "#,
        )
        .bind(center.id)
        .bind(&center.name)
        .bind(&center.address)
        .bind(&center.owner)
        .bind(center.updated_at)
        .execute(&mut *self.conn)
        .await
        .map_err(|e| StorageError::from_write(e, DUPLICATE_NAME, STILL_REFERENCED))?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&mut self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM training_centers WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await
            .map_err(|e| StorageError::from_write(e, DUPLICATE_NAME, STILL_REFERENCED))?;

        Ok(result.rows_affected() > 0)
    }
}
