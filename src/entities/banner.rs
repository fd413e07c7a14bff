use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The `banners` table: promotional images shown in a named slot of the
/// storefront between `start_date` and `end_date`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "banners")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: String,
    pub link: Option<String>,
    /// Slot identifier, e.g. `home_hero`.
    pub position: Option<String>,
    pub is_active: Option<bool>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub created_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
