use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The `categories` table. Categories form a tree through `parent_id`; a
/// root category has no parent.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub parent_id: Option<i32>,
    pub created_at: Option<DateTime>,
}

impl Model {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(belongs_to = "Entity", from = "Column::ParentId", to = "Column::Id")]
    Parent,

    #[sea_orm(has_many = "Entity")]
    Children,

    #[sea_orm(has_many = "super::product::Entity")]
    Products,
}

impl Related<Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Parent.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
