//! 游戏列表实体

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game_lists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_type = "Text")]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::belonging::Entity")]
    Belonging,
}

impl Related<super::belonging::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Belonging.def()
    }
}

impl Related<super::games::Entity> for Entity {
    fn to() -> RelationDef {
        super::belonging::Relation::Games.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::belonging::Relation::GameLists.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
