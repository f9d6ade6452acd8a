//! 数据传输对象 (DTO)
//!
//! HTTP 边界上使用的数据结构，与持久化实体解耦。JSON 字段统一使用 camelCase。

use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

use crate::entity::{belonging, game_lists, games};

/// 列表内游戏的最小投影（按列表查询的结果行）
#[derive(Clone, Debug, PartialEq, FromQueryResult)]
pub struct GameMinProjection {
    pub id: i64,
    pub title: String,
    pub game_year: Option<i32>,
    pub img_url: Option<String>,
    pub short_description: Option<String>,
    pub position: i32,
}

/// 游戏最小形态
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMinDto {
    pub id: i64,
    pub title: String,
    pub year: Option<i32>,
    pub img_url: Option<String>,
    pub short_description: Option<String>,
}

impl From<games::Model> for GameMinDto {
    fn from(game: games::Model) -> Self {
        Self {
            id: game.id,
            title: game.title,
            year: game.game_year,
            img_url: game.img_url,
            short_description: game.short_description,
        }
    }
}

impl From<GameMinProjection> for GameMinDto {
    fn from(projection: GameMinProjection) -> Self {
        Self {
            id: projection.id,
            title: projection.title,
            year: projection.game_year,
            img_url: projection.img_url,
            short_description: projection.short_description,
        }
    }
}

/// 游戏完整形态
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDto {
    pub id: i64,
    pub title: String,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub platforms: Option<String>,
    pub score: Option<f64>,
    pub img_url: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
}

impl From<games::Model> for GameDto {
    fn from(game: games::Model) -> Self {
        Self {
            id: game.id,
            title: game.title,
            year: game.game_year,
            genre: game.genre,
            platforms: game.platforms,
            score: game.score,
            img_url: game.img_url,
            short_description: game.short_description,
            long_description: game.long_description,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameListDto {
    pub id: i64,
    pub name: String,
}

impl From<game_lists::Model> for GameListDto {
    fn from(list: game_lists::Model) -> Self {
        Self {
            id: list.id,
            name: list.name,
        }
    }
}

/// 游戏在列表中的成员关系
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BelongingDto {
    pub game_id: i64,
    pub list_id: i64,
    pub position: i32,
}

impl From<belonging::Model> for BelongingDto {
    fn from(model: belonging::Model) -> Self {
        Self {
            game_id: model.game_id,
            list_id: model.list_id,
            position: model.position,
        }
    }
}

/// 用于插入游戏的数据结构
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertGameData {
    pub title: String,
    pub year: Option<i32>,
    pub genre: Option<String>,
    pub platforms: Option<String>,
    pub score: Option<f64>,
    pub img_url: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
}

impl InsertGameData {
    /// 只有标题的最简输入
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InsertGameListData {
    pub name: String,
}

/// 将游戏加入列表的请求体
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddGameToListData {
    pub game_id: i64,
}

/// 列表内移动请求体：把 source_index 处的游戏移到 destination_index
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplacementData {
    pub source_index: i64,
    pub destination_index: i64,
}

/// 列表成员检查结果
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipDto {
    pub game_id: i64,
    pub list_id: i64,
    pub member: bool,
}
