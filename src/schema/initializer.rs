use sea_orm::DatabaseConnection;
use sea_orm_migration::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error, info};

use super::tables::{catalog, TableDefinition};
use crate::errors::SchemaError;

/// How the initializer reacts to a table that cannot be created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitMode {
    /// Log the failure and carry on with the remaining tables.
    #[default]
    Tolerant,
    /// Stop at the first failure and return it.
    Strict,
}

/// A table the initializer could not create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableFailure {
    pub table: String,
    pub message: String,
}

/// Outcome of one initializer run, table by table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InitReport {
    /// Tables found absent and then created without error. Another process
    /// creating the same table between the check and the statement still
    /// lands the table here, since `IF NOT EXISTS` hides the difference.
    pub created: Vec<String>,
    /// Tables already present when this run looked.
    pub existing: Vec<String>,
    pub failed: Vec<TableFailure>,
}

impl InitReport {
    /// True when every table of the run is present afterwards
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// True when the run found the schema already in place
    pub fn is_noop(&self) -> bool {
        self.created.is_empty() && self.failed.is_empty()
    }

    pub fn failure(&self, table: &str) -> Option<&TableFailure> {
        self.failed.iter().find(|f| f.table == table)
    }
}

impl fmt::Display for InitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} created, {} already present, {} failed",
            self.created.len(),
            self.existing.len(),
            self.failed.len()
        )
    }
}

/// Creates the storefront tables that are missing from a database.
///
/// Tables are attempted one at a time in declaration order. A table that
/// already exists is never altered. A table whose parent tables are absent is
/// failed before any statement is sent, so the outcome does not depend on
/// whether the engine checks foreign-key targets at creation time.
#[derive(Debug, Clone)]
pub struct SchemaInitializer {
    tables: Vec<TableDefinition>,
    mode: InitMode,
}

impl SchemaInitializer {
    pub fn new(mode: InitMode) -> Self {
        Self::with_tables(catalog(), mode)
    }

    pub fn with_tables(tables: Vec<TableDefinition>, mode: InitMode) -> Self {
        Self { tables, mode }
    }

    pub fn mode(&self) -> InitMode {
        self.mode
    }

    pub fn tables(&self) -> &[TableDefinition] {
        &self.tables
    }

    /// Runs against a connection. The connection stays open.
    pub async fn run(&self, db: &DatabaseConnection) -> Result<InitReport, SchemaError> {
        let manager = SchemaManager::new(db);
        self.run_with(&manager).await
    }

    pub(crate) async fn run_with(
        &self,
        manager: &SchemaManager<'_>,
    ) -> Result<InitReport, SchemaError> {
        let mut report = InitReport::default();

        for table in &self.tables {
            match create_table(manager, table).await {
                Ok(true) => {
                    info!("Created table {}", table.name());
                    report.created.push(table.name().to_string());
                }
                Ok(false) => {
                    debug!("Table {} already exists", table.name());
                    report.existing.push(table.name().to_string());
                }
                Err(err) if self.mode == InitMode::Strict => {
                    error!(table = %table.name(), error = %err, "Table creation failed");
                    return Err(err);
                }
                Err(err) => {
                    error!(table = %table.name(), error = %err, "Table creation failed");
                    report.failed.push(TableFailure {
                        table: table.name().to_string(),
                        message: err.to_string(),
                    });
                }
            }
        }

        if report.is_noop() {
            debug!("Schema already initialized: {}", report);
        } else {
            info!("Schema initialization finished: {}", report);
        }

        Ok(report)
    }
}

impl Default for SchemaInitializer {
    fn default() -> Self {
        Self::new(InitMode::default())
    }
}

/// Creates every missing storefront table on `db`.
pub async fn initialize(
    db: &DatabaseConnection,
    mode: InitMode,
) -> Result<InitReport, SchemaError> {
    SchemaInitializer::new(mode).run(db).await
}

/// Presence of one catalog table in a database
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableStatus {
    pub table: String,
    pub present: bool,
}

/// Reports which storefront tables exist on `db`, in catalog order.
pub async fn status(db: &DatabaseConnection) -> Result<Vec<TableStatus>, SchemaError> {
    let manager = SchemaManager::new(db);
    let mut statuses = Vec::new();
    for table in catalog() {
        let present = manager.has_table(table.name()).await?;
        statuses.push(TableStatus {
            table: table.name().to_string(),
            present,
        });
    }
    Ok(statuses)
}

/// Returns `Ok(false)` when the table was already there.
///
/// Presence is checked before the statement is sent. If a concurrent run
/// creates the table in between, the statement is a no-op and the table is
/// still reported as created here; the end state is the same either way.
async fn create_table(
    manager: &SchemaManager<'_>,
    table: &TableDefinition,
) -> Result<bool, SchemaError> {
    if manager.has_table(table.name()).await? {
        return Ok(false);
    }

    for referenced in table.references() {
        if !manager.has_table(referenced).await? {
            return Err(SchemaError::MissingReference {
                table: table.name().to_string(),
                referenced: referenced.clone(),
            });
        }
    }

    manager
        .create_table(table.statement().clone())
        .await
        .map_err(|source| SchemaError::TableCreation {
            table: table.name().to_string(),
            source,
        })?;

    Ok(true)
}
