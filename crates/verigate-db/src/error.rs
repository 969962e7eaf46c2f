//! Database-specific error types and conversions.

use verigate_core::error::VerigateError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Duplicate record: {entity}")]
    Duplicate { entity: String },

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },
}

impl From<DbError> for VerigateError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => VerigateError::NotFound { entity, id },
            DbError::Duplicate { entity } => VerigateError::AlreadyExists { entity },
            other => VerigateError::Database(other.to_string()),
        }
    }
}
