use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Publication state of a product.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "archived")]
    Archived,
}

/// The `products` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Owning vendor.
    pub vendor_id: Option<i32>,

    /// Category the product is listed under.
    pub category_id: Option<i32>,

    /// Display name.
    pub name: String,

    /// URL slug, unique across products.
    #[sea_orm(unique)]
    pub slug: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    /// Selling price.
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,

    /// "Compare at" price shown struck through next to `price`.
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub compare_price: Option<Decimal>,

    /// Unit cost to the vendor.
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub cost_per_item: Option<Decimal>,

    /// Stock keeping unit, unique across products when present.
    #[sea_orm(unique)]
    pub sku: Option<String>,

    pub barcode: Option<String>,

    /// Units on hand.
    pub quantity: Option<i32>,

    /// Whether `quantity` is decremented on sale.
    pub track_quantity: Option<bool>,

    /// Whether the product stays purchasable at zero stock.
    pub continue_selling_when_out_of_stock: Option<bool>,

    /// Whether the product ships (as opposed to a digital good).
    pub physical_product: Option<bool>,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub weight: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub length: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub width: Option<Decimal>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub height: Option<Decimal>,

    /// Whether the product is sold through `product_variations` rows.
    pub has_variations: Option<bool>,

    /// Publication state.
    pub status: Option<ProductStatus>,

    /// Timestamp when the product was first published.
    pub published_at: Option<DateTime>,

    /// Timestamp when the product was created.
    pub created_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vendor::Entity",
        from = "Column::VendorId",
        to = "super::vendor::Column::Id"
    )]
    Vendor,

    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,

    #[sea_orm(has_many = "super::product_variation::Entity")]
    Variations,

    #[sea_orm(has_many = "super::product_image::Entity")]
    Images,

    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItems,
}

impl Related<super::vendor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vendor.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::product_variation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Variations.def()
    }
}

impl Related<super::product_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Images.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
