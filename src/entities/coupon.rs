use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// How `discount_value` is applied to an order subtotal.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum DiscountType {
    #[sea_orm(string_value = "percentage")]
    Percentage,
    #[sea_orm(string_value = "fixed")]
    Fixed,
}

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
pub enum CouponStatus {
    #[default]
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "inactive")]
    Inactive,
}

/// The `coupons` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "coupons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Redemption code, unique across coupons.
    #[sea_orm(unique)]
    pub code: String,

    pub discount_type: DiscountType,

    /// Percentage points or a fixed amount, depending on `discount_type`.
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub discount_value: Decimal,

    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub min_order_amount: Option<Decimal>,

    /// Upper bound on the discount a percentage coupon can grant.
    #[sea_orm(column_type = "Decimal(Some((10, 2)))", nullable)]
    pub max_discount_amount: Option<Decimal>,

    /// Maximum number of redemptions; unlimited when absent.
    pub usage_limit: Option<i32>,
    pub used_count: Option<i32>,

    pub start_date: Option<Date>,
    pub end_date: Option<Date>,

    pub status: Option<CouponStatus>,
    pub created_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order::Entity")]
    Orders,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
