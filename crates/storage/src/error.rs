use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A human-readable name on an incoming request did not resolve to a live record.
    #[error("{entity} '{name}' not found")]
    ReferenceNotFound { entity: &'static str, name: String },

    /// Stored rows disagree with each other, e.g. an athlete pointing at a
    /// category that no longer exists.
    #[error("Inconsistent data: {0}")]
    Inconsistent(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23505")
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some("23503")
        )
    }

    /// Failures the caller cannot act on. These are reported as internal errors.
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            StorageError::Database(_)
                | StorageError::Migration(_)
                | StorageError::Inconsistent(_)
                | StorageError::Backend(_)
        )
    }

    /// Translate a failed write, turning constraint violations raised by the
    /// database into `ConstraintViolation` with the given messages.
    pub(crate) fn from_write(error: sqlx::Error, unique: &str, foreign_key: &str) -> Self {
        let error = StorageError::Database(error);

        if error.is_unique_violation() {
            StorageError::ConstraintViolation(unique.to_string())
        } else if error.is_foreign_key_violation() {
            StorageError::ConstraintViolation(foreign_key.to_string())
        } else {
            error
        }
    }
}
