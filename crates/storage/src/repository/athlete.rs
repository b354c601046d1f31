use sqlx::PgConnection;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::Athlete;

const DUPLICATE_NATIONAL_ID: &str = "An athlete with this national id already exists";
const MISSING_REFERENCE: &str = "Referenced category or training center does not exist";

pub struct AthleteRepository<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> AthleteRepository<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// List all athletes
    pub async fn list(&mut self) -> Result<Vec<Athlete>> {
        let athletes = sqlx::query_as::<_, Athlete>(
            r#"
            SELECT id, name, national_id, age, weight, height, sex,
                   category_id, training_center_id, created_at, updated_at
            FROM athletes
            ORDER BY name
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(athletes)
    }

    /// Find athlete by ID
    pub async fn find_by_id(&mut self, id: Uuid) -> Result<Option<Athlete>> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            SELECT id, name, national_id, age, weight, height, sex,
                   category_id, training_center_id, created_at, updated_at
            FROM athletes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(athlete)
    }

    pub async fn find_by_national_id(&mut self, national_id: &str) -> Result<Option<Athlete>> {
        let athlete = sqlx::query_as::<_, Athlete>(
            r#"
            SELECT id, name, national_id, age, weight, height, sex,
                   category_id, training_center_id, created_at, updated_at
            FROM athletes
            WHERE national_id = $1
            "#,
        )
        .bind(national_id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(athlete)
    }

    pub async fn insert(&mut self, athlete: &Athlete) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO athletes (
                id, name, national_id, age, weight, height, sex,
                category_id, training_center_id, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(athlete.id)
        .bind(&athlete.name)
        .bind(&athlete.national_id)
        .bind(athlete.age)
        .bind(athlete.weight)
        .bind(athlete.height)
        .bind(&athlete.sex)
        .bind(athlete.category_id)
        .bind(athlete.training_center_id)
        .bind(athlete.created_at)
        .bind(athlete.updated_at)
        .execute(&mut *self.conn)
        .await
        .map_err(|e| StorageError::from_write(e, DUPLICATE_NATIONAL_ID, MISSING_REFERENCE))?;

        Ok(())
    }

    /// Persist the mutable columns of an existing athlete
    pub async fn update(&mut self, athlete: &Athlete) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE athletes
            SET name = $2,
                age = $3,
                weight = $4,
                height = $5,
                updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(athlete.id)
        .bind(&athlete.name)
        .bind(athlete.age)
        .bind(athlete.weight)
        .bind(athlete.height)
        .bind(athlete.updated_at)
        .execute(&mut *self.conn)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete an athlete by ID
    pub async fn delete(&mut self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM athletes WHERE id = $1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count_by_category(&mut self, category_id: Uuid) -> Result<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM athletes WHERE category_id = $1")
                .bind(category_id)
                .fetch_one(&mut *self.conn)
                .await?;

        Ok(count)
    }

    pub async fn count_by_training_center(&mut self, training_center_id: Uuid) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM athletes WHERE training_center_id = $1",
        )
        .bind(training_center_id)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(count)
    }
}
