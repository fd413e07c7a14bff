use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The `product_images` table. An image belongs to a product and optionally
/// to one of its variations; deleting either parent deletes the image.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_images")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_id: Option<i32>,
    pub variation_id: Option<i32>,
    pub image_url: String,
    pub is_primary: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id",
        on_delete = "Cascade"
    )]
    Product,

    #[sea_orm(
        belongs_to = "super::product_variation::Entity",
        from = "Column::VariationId",
        to = "super::product_variation::Column::Id",
        on_delete = "Cascade"
    )]
    Variation,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::product_variation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Variation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
