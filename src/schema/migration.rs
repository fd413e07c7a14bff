use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240601_000001_create_storefront_tables::Migration)]
    }
}

mod m20240601_000001_create_storefront_tables {

    use sea_orm_migration::prelude::*;
    use tracing::info;

    use crate::schema::initializer::{InitMode, SchemaInitializer};
    use crate::schema::tables::catalog;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240601_000001_create_storefront_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            SchemaInitializer::new(InitMode::Strict)
                .run_with(manager)
                .await
                .map(|_| ())
                .map_err(|e| DbErr::Migration(e.to_string()))
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            // children first
            for table in catalog().iter().rev() {
                info!("Dropping table {}", table.name());
                manager
                    .drop_table(
                        Table::drop()
                            .table(Alias::new(table.name()))
                            .if_exists()
                            .to_owned(),
                    )
                    .await?;
            }
            Ok(())
        }
    }
}
