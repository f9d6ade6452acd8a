//! 游戏-列表关联实体
//!
//! 记录"游戏 G 属于列表 L"。没有代理主键，身份完全由 (game_id, list_id)
//! 复合主键决定，见 [`BelongingPk`]。

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::belonging_pk::BelongingPk;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "belonging")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub game_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub list_id: i64,
    /// 列表内的排序位置，从 0 开始
    pub position: i32,
    pub created_at: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::games::Entity",
        from = "Column::GameId",
        to = "super::games::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Games,
    #[sea_orm(
        belongs_to = "super::game_lists::Entity",
        from = "Column::ListId",
        to = "super::game_lists::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    GameLists,
}

impl Related<super::games::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Games.def()
    }
}

impl Related<super::game_lists::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GameLists.def()
    }
}

impl Model {
    /// 该记录的复合主键
    pub fn key(&self) -> BelongingPk {
        BelongingPk::new(self.game_id, self.list_id)
    }
}

impl ActiveModelBehavior for ActiveModel {}
