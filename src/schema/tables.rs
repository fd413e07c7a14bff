//! Table definitions for the storefront schema.
//!
//! Every table is declared with `IF NOT EXISTS` and listed in dependency
//! order: a table only appears after every table its foreign keys point at.

use sea_orm::{ActiveEnum, DbBackend};
use sea_orm_migration::prelude::*;
use std::collections::HashSet;

use crate::errors::SchemaError;

/// One table of the catalog: its name, the tables it references and the
/// create statement that brings it into existence.
#[derive(Debug, Clone)]
pub struct TableDefinition {
    name: String,
    references: Vec<String>,
    statement: TableCreateStatement,
}

impl TableDefinition {
    pub fn new<T: Iden>(table: T, statement: TableCreateStatement) -> Self {
        Self {
            name: table.to_string(),
            references: Vec::new(),
            statement,
        }
    }

    /// Records a foreign-key target. References to the table itself are
    /// ignored since the engine resolves them within the same statement.
    pub fn depends_on<T: Iden>(mut self, table: T) -> Self {
        let name = table.to_string();
        if name != self.name && !self.references.contains(&name) {
            self.references.push(name);
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn references(&self) -> &[String] {
        &self.references
    }

    pub fn statement(&self) -> &TableCreateStatement {
        &self.statement
    }

    /// Renders the create statement for the given engine
    pub fn to_sql(&self, backend: DbBackend) -> String {
        match backend {
            DbBackend::MySql => self.statement.to_string(MysqlQueryBuilder),
            DbBackend::Postgres => self.statement.to_string(PostgresQueryBuilder),
            DbBackend::Sqlite => self.statement.to_string(SqliteQueryBuilder),
        }
    }
}

/// The storefront tables in creation order
pub fn catalog() -> Vec<TableDefinition> {
    vec![
        users::definition(),
        vendors::definition(),
        categories::definition(),
        products::definition(),
        product_variations::definition(),
        product_images::definition(),
        coupons::definition(),
        orders::definition(),
        order_items::definition(),
        banners::definition(),
    ]
}

/// Checks that table names are unique and that every referenced table is
/// declared before the table referencing it.
pub fn validate_order(tables: &[TableDefinition]) -> Result<(), SchemaError> {
    let mut declared: HashSet<&str> = HashSet::new();
    for table in tables {
        for referenced in table.references() {
            if !declared.contains(referenced.as_str()) {
                return Err(SchemaError::OutOfOrder {
                    table: table.name().to_string(),
                    referenced: referenced.clone(),
                });
            }
        }
        if !declared.insert(table.name()) {
            return Err(SchemaError::DuplicateTable(table.name().to_string()));
        }
    }
    Ok(())
}

// Column helpers shared by the definitions below

fn id_column<C: Iden + 'static>(col: C) -> ColumnDef {
    ColumnDef::new(col)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

/// DECIMAL(10,2), the storage type of every monetary and dimension column.
///
/// MySQL and PostgreSQL store it as fixed point. SQLite has no fixed-point
/// storage class: the column is declared `real(10, 2)` and holds binary
/// floats, which is also how sea-orm reads `Decimal` back on that engine.
/// SQLite is meant for local runs and tests, not for money arithmetic in SQL.
fn money_column<C: Iden + 'static>(col: C) -> ColumnDef {
    ColumnDef::new(col).decimal_len(10, 2).to_owned()
}

fn created_at_column<C: Iden + 'static>(col: C) -> ColumnDef {
    ColumnDef::new(col)
        .timestamp()
        .default(Expr::current_timestamp())
        .to_owned()
}

/// A closed value set stored as a short string. The allowed values come from
/// the entity enum and are enforced with a CHECK constraint, which MySQL,
/// PostgreSQL and SQLite all honour.
fn enum_column<C, E>(col: C, default: Option<E>) -> ColumnDef
where
    C: Iden + Copy + 'static,
    E: ActiveEnum<Value = String>,
{
    let mut def = ColumnDef::new(col);
    def.string_len(16).check(Expr::col(col).is_in(E::values()));
    if let Some(value) = default {
        def.default(value.to_value());
    }
    def
}

mod users {
    use super::*;
    use crate::entities::UserRole;

    pub(super) fn definition() -> TableDefinition {
        let statement = Table::create()
            .table(Users::Table)
            .if_not_exists()
            .col(&mut id_column(Users::Id))
            .col(
                ColumnDef::new(Users::Username)
                    .string_len(50)
                    .not_null()
                    .unique_key(),
            )
            .col(
                ColumnDef::new(Users::Email)
                    .string_len(100)
                    .not_null()
                    .unique_key(),
            )
            .col(ColumnDef::new(Users::Password).string_len(255).not_null())
            .col(&mut enum_column(Users::Role, Some(UserRole::Customer)))
            .col(&mut created_at_column(Users::CreatedAt))
            .to_owned();

        TableDefinition::new(Users::Table, statement)
    }

    #[derive(DeriveIden, Clone, Copy)]
    pub(super) enum Users {
        Table,
        Id,
        Username,
        Email,
        Password,
        Role,
        CreatedAt,
    }
}

mod vendors {
    use super::users::Users;
    use super::*;
    use crate::entities::VendorStatus;

    pub(super) fn definition() -> TableDefinition {
        let statement = Table::create()
            .table(Vendors::Table)
            .if_not_exists()
            .col(&mut id_column(Vendors::Id))
            .col(ColumnDef::new(Vendors::UserId).integer().null())
            .col(ColumnDef::new(Vendors::ShopName).string_len(100).null())
            .col(ColumnDef::new(Vendors::ShopDescription).text().null())
            .col(&mut enum_column(Vendors::Status, Some(VendorStatus::Pending)))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_vendors_user_id")
                    .from(Vendors::Table, Vendors::UserId)
                    .to(Users::Table, Users::Id),
            )
            .to_owned();

        TableDefinition::new(Vendors::Table, statement).depends_on(Users::Table)
    }

    #[derive(DeriveIden, Clone, Copy)]
    pub(super) enum Vendors {
        Table,
        Id,
        UserId,
        ShopName,
        ShopDescription,
        Status,
    }
}

mod categories {
    use super::*;

    pub(super) fn definition() -> TableDefinition {
        let statement = Table::create()
            .table(Categories::Table)
            .if_not_exists()
            .col(&mut id_column(Categories::Id))
            .col(ColumnDef::new(Categories::Name).string_len(50).not_null())
            .col(
                ColumnDef::new(Categories::Slug)
                    .string_len(50)
                    .not_null()
                    .unique_key(),
            )
            .col(ColumnDef::new(Categories::Description).text().null())
            .col(ColumnDef::new(Categories::ParentId).integer().null())
            .col(&mut created_at_column(Categories::CreatedAt))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_categories_parent_id")
                    .from(Categories::Table, Categories::ParentId)
                    .to(Categories::Table, Categories::Id),
            )
            .to_owned();

        // self reference, resolved inside the statement
        TableDefinition::new(Categories::Table, statement).depends_on(Categories::Table)
    }

    #[derive(DeriveIden, Clone, Copy)]
    pub(super) enum Categories {
        Table,
        Id,
        Name,
        Slug,
        Description,
        ParentId,
        CreatedAt,
    }
}

mod products {
    use super::categories::Categories;
    use super::vendors::Vendors;
    use super::*;
    use crate::entities::ProductStatus;

    pub(super) fn definition() -> TableDefinition {
        let statement = Table::create()
            .table(Products::Table)
            .if_not_exists()
            .col(&mut id_column(Products::Id))
            .col(ColumnDef::new(Products::VendorId).integer().null())
            .col(ColumnDef::new(Products::CategoryId).integer().null())
            .col(ColumnDef::new(Products::Name).string_len(255).not_null())
            .col(
                ColumnDef::new(Products::Slug)
                    .string_len(255)
                    .not_null()
                    .unique_key(),
            )
            .col(ColumnDef::new(Products::Description).text().null())
            .col(money_column(Products::Price).not_null())
            .col(money_column(Products::ComparePrice).null())
            .col(money_column(Products::CostPerItem).null())
            .col(ColumnDef::new(Products::Sku).string_len(100).unique_key())
            .col(ColumnDef::new(Products::Barcode).string_len(100))
            .col(ColumnDef::new(Products::Quantity).integer().default(0))
            .col(ColumnDef::new(Products::TrackQuantity).boolean().default(true))
            .col(
                ColumnDef::new(Products::ContinueSellingWhenOutOfStock)
                    .boolean()
                    .default(false),
            )
            .col(ColumnDef::new(Products::PhysicalProduct).boolean().default(true))
            .col(money_column(Products::Weight).null())
            .col(money_column(Products::Length).null())
            .col(money_column(Products::Width).null())
            .col(money_column(Products::Height).null())
            .col(ColumnDef::new(Products::HasVariations).boolean().default(false))
            .col(&mut enum_column(Products::Status, Some(ProductStatus::Draft)))
            .col(ColumnDef::new(Products::PublishedAt).timestamp().null())
            .col(&mut created_at_column(Products::CreatedAt))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_products_vendor_id")
                    .from(Products::Table, Products::VendorId)
                    .to(Vendors::Table, Vendors::Id),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_products_category_id")
                    .from(Products::Table, Products::CategoryId)
                    .to(Categories::Table, Categories::Id),
            )
            .to_owned();

        TableDefinition::new(Products::Table, statement)
            .depends_on(Vendors::Table)
            .depends_on(Categories::Table)
    }

    #[derive(DeriveIden, Clone, Copy)]
    pub(super) enum Products {
        Table,
        Id,
        VendorId,
        CategoryId,
        Name,
        Slug,
        Description,
        Price,
        ComparePrice,
        CostPerItem,
        Sku,
        Barcode,
        Quantity,
        TrackQuantity,
        ContinueSellingWhenOutOfStock,
        PhysicalProduct,
        Weight,
        Length,
        Width,
        Height,
        HasVariations,
        Status,
        PublishedAt,
        CreatedAt,
    }
}

mod product_variations {
    use super::products::Products;
    use super::*;

    pub(super) fn definition() -> TableDefinition {
        let statement = Table::create()
            .table(ProductVariations::Table)
            .if_not_exists()
            .col(&mut id_column(ProductVariations::Id))
            .col(ColumnDef::new(ProductVariations::ProductId).integer().null())
            .col(
                ColumnDef::new(ProductVariations::Name)
                    .string_len(255)
                    .not_null(),
            )
            .col(
                ColumnDef::new(ProductVariations::Sku)
                    .string_len(100)
                    .unique_key(),
            )
            .col(money_column(ProductVariations::Price).not_null())
            .col(money_column(ProductVariations::ComparePrice).null())
            .col(
                ColumnDef::new(ProductVariations::Quantity)
                    .integer()
                    .default(0),
            )
            .col(ColumnDef::new(ProductVariations::Image).string_len(255).null())
            .foreign_key(
                ForeignKey::create()
                    .name("fk_product_variations_product_id")
                    .from(ProductVariations::Table, ProductVariations::ProductId)
                    .to(Products::Table, Products::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .to_owned();

        TableDefinition::new(ProductVariations::Table, statement).depends_on(Products::Table)
    }

    #[derive(DeriveIden, Clone, Copy)]
    pub(super) enum ProductVariations {
        Table,
        Id,
        ProductId,
        Name,
        Sku,
        Price,
        ComparePrice,
        Quantity,
        Image,
    }
}

mod product_images {
    use super::product_variations::ProductVariations;
    use super::products::Products;
    use super::*;

    pub(super) fn definition() -> TableDefinition {
        let statement = Table::create()
            .table(ProductImages::Table)
            .if_not_exists()
            .col(&mut id_column(ProductImages::Id))
            .col(ColumnDef::new(ProductImages::ProductId).integer().null())
            .col(ColumnDef::new(ProductImages::VariationId).integer().null())
            .col(
                ColumnDef::new(ProductImages::ImageUrl)
                    .string_len(255)
                    .not_null(),
            )
            .col(
                ColumnDef::new(ProductImages::IsPrimary)
                    .boolean()
                    .default(false),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_product_images_product_id")
                    .from(ProductImages::Table, ProductImages::ProductId)
                    .to(Products::Table, Products::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_product_images_variation_id")
                    .from(ProductImages::Table, ProductImages::VariationId)
                    .to(ProductVariations::Table, ProductVariations::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .to_owned();

        TableDefinition::new(ProductImages::Table, statement)
            .depends_on(Products::Table)
            .depends_on(ProductVariations::Table)
    }

    #[derive(DeriveIden, Clone, Copy)]
    enum ProductImages {
        Table,
        Id,
        ProductId,
        VariationId,
        ImageUrl,
        IsPrimary,
    }
}

mod coupons {
    use super::*;
    use crate::entities::{CouponStatus, DiscountType};

    pub(super) fn definition() -> TableDefinition {
        let statement = Table::create()
            .table(Coupons::Table)
            .if_not_exists()
            .col(&mut id_column(Coupons::Id))
            .col(
                ColumnDef::new(Coupons::Code)
                    .string_len(50)
                    .not_null()
                    .unique_key(),
            )
            .col(enum_column::<_, DiscountType>(Coupons::DiscountType, None).not_null())
            .col(money_column(Coupons::DiscountValue).not_null())
            .col(money_column(Coupons::MinOrderAmount).default(0))
            .col(money_column(Coupons::MaxDiscountAmount).null())
            .col(ColumnDef::new(Coupons::UsageLimit).integer().null())
            .col(ColumnDef::new(Coupons::UsedCount).integer().default(0))
            .col(ColumnDef::new(Coupons::StartDate).date())
            .col(ColumnDef::new(Coupons::EndDate).date())
            .col(&mut enum_column(Coupons::Status, Some(CouponStatus::Active)))
            .col(&mut created_at_column(Coupons::CreatedAt))
            .to_owned();

        TableDefinition::new(Coupons::Table, statement)
    }

    #[derive(DeriveIden, Clone, Copy)]
    pub(super) enum Coupons {
        Table,
        Id,
        Code,
        DiscountType,
        DiscountValue,
        MinOrderAmount,
        MaxDiscountAmount,
        UsageLimit,
        UsedCount,
        StartDate,
        EndDate,
        Status,
        CreatedAt,
    }
}

mod orders {
    use super::coupons::Coupons;
    use super::users::Users;
    use super::*;
    use crate::entities::OrderStatus;

    pub(super) fn definition() -> TableDefinition {
        let statement = Table::create()
            .table(Orders::Table)
            .if_not_exists()
            .col(&mut id_column(Orders::Id))
            .col(
                ColumnDef::new(Orders::OrderNumber)
                    .string_len(50)
                    .not_null()
                    .unique_key(),
            )
            .col(ColumnDef::new(Orders::UserId).integer().null())
            .col(ColumnDef::new(Orders::CouponId).integer().null())
            .col(money_column(Orders::Subtotal).not_null())
            .col(money_column(Orders::Discount).default(0))
            .col(money_column(Orders::Tax).default(0))
            .col(money_column(Orders::Shipping).default(0))
            .col(money_column(Orders::Total).not_null())
            .col(&mut enum_column(Orders::Status, Some(OrderStatus::Pending)))
            .col(ColumnDef::new(Orders::ShippingAddress).text())
            .col(ColumnDef::new(Orders::BillingAddress).text())
            .col(ColumnDef::new(Orders::Notes).text())
            .col(&mut created_at_column(Orders::CreatedAt))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_orders_user_id")
                    .from(Orders::Table, Orders::UserId)
                    .to(Users::Table, Users::Id),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_orders_coupon_id")
                    .from(Orders::Table, Orders::CouponId)
                    .to(Coupons::Table, Coupons::Id),
            )
            .to_owned();

        TableDefinition::new(Orders::Table, statement)
            .depends_on(Users::Table)
            .depends_on(Coupons::Table)
    }

    #[derive(DeriveIden, Clone, Copy)]
    pub(super) enum Orders {
        Table,
        Id,
        OrderNumber,
        UserId,
        CouponId,
        Subtotal,
        Discount,
        Tax,
        Shipping,
        Total,
        Status,
        ShippingAddress,
        BillingAddress,
        Notes,
        CreatedAt,
    }
}

mod order_items {
    use super::orders::Orders;
    use super::product_variations::ProductVariations;
    use super::products::Products;
    use super::*;

    pub(super) fn definition() -> TableDefinition {
        let statement = Table::create()
            .table(OrderItems::Table)
            .if_not_exists()
            .col(&mut id_column(OrderItems::Id))
            .col(ColumnDef::new(OrderItems::OrderId).integer().null())
            .col(ColumnDef::new(OrderItems::ProductId).integer().null())
            .col(ColumnDef::new(OrderItems::VariationId).integer().null())
            .col(ColumnDef::new(OrderItems::Quantity).integer().not_null())
            .col(money_column(OrderItems::Price).not_null())
            .col(money_column(OrderItems::Total).not_null())
            .foreign_key(
                ForeignKey::create()
                    .name("fk_order_items_order_id")
                    .from(OrderItems::Table, OrderItems::OrderId)
                    .to(Orders::Table, Orders::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            // historical orders keep their products alive
            .foreign_key(
                ForeignKey::create()
                    .name("fk_order_items_product_id")
                    .from(OrderItems::Table, OrderItems::ProductId)
                    .to(Products::Table, Products::Id),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_order_items_variation_id")
                    .from(OrderItems::Table, OrderItems::VariationId)
                    .to(ProductVariations::Table, ProductVariations::Id),
            )
            .to_owned();

        TableDefinition::new(OrderItems::Table, statement)
            .depends_on(Orders::Table)
            .depends_on(Products::Table)
            .depends_on(ProductVariations::Table)
    }

    #[derive(DeriveIden, Clone, Copy)]
    enum OrderItems {
        Table,
        Id,
        OrderId,
        ProductId,
        VariationId,
        Quantity,
        Price,
        Total,
    }
}

mod banners {
    use super::*;

    pub(super) fn definition() -> TableDefinition {
        let statement = Table::create()
            .table(Banners::Table)
            .if_not_exists()
            .col(&mut id_column(Banners::Id))
            .col(ColumnDef::new(Banners::Title).string_len(255))
            .col(ColumnDef::new(Banners::Subtitle).string_len(255))
            .col(ColumnDef::new(Banners::ImageUrl).string_len(255).not_null())
            .col(ColumnDef::new(Banners::Link).string_len(255))
            .col(ColumnDef::new(Banners::Position).string_len(50))
            .col(ColumnDef::new(Banners::IsActive).boolean().default(true))
            .col(ColumnDef::new(Banners::StartDate).date())
            .col(ColumnDef::new(Banners::EndDate).date())
            .col(&mut created_at_column(Banners::CreatedAt))
            .to_owned();

        TableDefinition::new(Banners::Table, statement)
    }

    #[derive(DeriveIden, Clone, Copy)]
    enum Banners {
        Table,
        Id,
        Title,
        Subtitle,
        ImageUrl,
        Link,
        Position,
        IsActive,
        StartDate,
        EndDate,
        CreatedAt,
    }
}
