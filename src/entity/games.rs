//! 游戏数据实体
//!
//! games 表是目录的核心表，保存游戏标题和描述性元数据。

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    // === 元数据 ===
    pub game_year: Option<i32>,
    #[sea_orm(column_type = "Text", nullable)]
    pub genre: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub platforms: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub score: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub img_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub short_description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub long_description: Option<String>,
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

/// 游戏通过 belonging 关联表属于多个列表
impl Related<super::game_lists::Entity> for Entity {
    fn to() -> RelationDef {
        super::belonging::Relation::GameLists.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::belonging::Relation::Games.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
