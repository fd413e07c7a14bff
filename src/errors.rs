use sea_orm::error::DbErr;
use thiserror::Error;

use crate::config::AppConfigError;

/// Errors raised while validating or creating the storefront schema.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The engine rejected the create statement for a table.
    #[error("Table creation failed for `{table}`: {source}")]
    TableCreation {
        table: String,
        #[source]
        source: DbErr,
    },

    /// A table was attempted before a table it references exists.
    #[error("Table `{table}` references `{referenced}`, which does not exist")]
    MissingReference { table: String, referenced: String },

    /// A table definition is listed before a table it references.
    #[error("Table `{table}` is declared before `{referenced}`, which it references")]
    OutOfOrder { table: String, referenced: String },

    #[error("Table `{0}` is declared more than once")]
    DuplicateTable(String),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl SchemaError {
    /// Name of the table the error is about, if any.
    pub fn table(&self) -> Option<&str> {
        match self {
            SchemaError::TableCreation { table, .. }
            | SchemaError::MissingReference { table, .. }
            | SchemaError::OutOfOrder { table, .. } => Some(table),
            SchemaError::DuplicateTable(table) => Some(table),
            SchemaError::Database(_) => None,
        }
    }

    /// Whether the error stems from a foreign-key target that is missing or
    /// declared too late.
    pub fn is_referential(&self) -> bool {
        matches!(
            self,
            SchemaError::MissingReference { .. } | SchemaError::OutOfOrder { .. }
        )
    }
}

/// Top-level error for the connection helpers and the operator binary.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] AppConfigError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] DbErr),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
}

pub type AppResult<T> = Result<T, AppError>;
