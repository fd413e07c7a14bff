use async_trait::async_trait;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

/// The `order_items` table. Items are removed with their order; the product
/// and variation they reference cannot be deleted while they exist.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub order_id: Option<i32>,
    pub product_id: Option<i32>,
    pub variation_id: Option<i32>,
    pub quantity: i32,
    /// Unit price at the time of purchase.
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    /// Line total, `price * quantity` unless set explicitly.
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub total: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id",
        on_delete = "Cascade"
    )]
    Order,

    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id"
    )]
    Product,

    #[sea_orm(
        belongs_to = "super::product_variation::Entity",
        from = "Column::VariationId",
        to = "super::product_variation::Column::Id"
    )]
    Variation,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
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

#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let mut active_model = self;

        if insert && matches!(active_model.total, ActiveValue::NotSet) {
            let line_total = match (&active_model.price, &active_model.quantity) {
                (ActiveValue::Set(price), ActiveValue::Set(quantity)) => {
                    Some(*price * Decimal::from(*quantity))
                }
                _ => None,
            };
            if let Some(total) = line_total {
                active_model.total = Set(total);
            }
        }

        Ok(active_model)
    }
}
