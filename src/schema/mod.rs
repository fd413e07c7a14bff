//! The storefront schema: table catalog, initializer and migration adapter.

mod initializer;
mod migration;
mod tables;

pub use initializer::{
    initialize, status, InitMode, InitReport, SchemaInitializer, TableFailure, TableStatus,
};
pub use migration::Migrator;
pub use tables::{catalog, validate_order, TableDefinition};
