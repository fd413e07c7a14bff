use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Enum representing the possible statuses of an order.
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
pub enum OrderStatus {
    #[default]
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "processing")]
    Processing,
    #[sea_orm(string_value = "shipped")]
    Shipped,
    #[sea_orm(string_value = "delivered")]
    Delivered,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

/// The `orders` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Customer facing order number, unique across orders.
    #[sea_orm(unique)]
    pub order_number: String,

    /// Customer who placed the order.
    pub user_id: Option<i32>,

    /// Coupon redeemed on the order, if any.
    pub coupon_id: Option<i32>,

    /// Sum of the line totals before discount, tax and shipping.
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub subtotal: Decimal,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub discount: Option<Decimal>,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub tax: Option<Decimal>,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub shipping: Option<Decimal>,

    /// Amount charged.
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub total: Decimal,

    /// Current status of the order.
    pub status: Option<OrderStatus>,

    #[sea_orm(column_type = "Text", nullable)]
    pub shipping_address: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub billing_address: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,

    /// Timestamp when the order was created.
    pub created_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,

    #[sea_orm(
        belongs_to = "super::coupon::Entity",
        from = "Column::CouponId",
        to = "super::coupon::Column::Id"
    )]
    Coupon,

    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItems,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::coupon::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Coupon.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_values_cover_the_order_lifecycle() {
        assert_eq!(
            OrderStatus::values(),
            vec!["pending", "processing", "shipped", "delivered", "cancelled"]
        );
        assert_eq!(OrderStatus::try_from_value(&"shipped".to_string()).unwrap(), OrderStatus::Shipped);
        assert!(OrderStatus::try_from_value(&"lost".to_string()).is_err());
        assert!(OrderStatus::from_str("refunded").is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Cancelled).unwrap();
        assert_eq!(json, "\"cancelled\"");
    }
}
