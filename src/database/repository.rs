//! 数据仓库
//!
//! 每个仓库的能力由 trait 显式声明，服务层通过构造函数注入具体实现
//! （`Arc<dyn …>`），便于在测试中替换存储后端。SeaORM 实现位于各子模块。

use async_trait::async_trait;

use crate::database::dto::{GameMinProjection, InsertGameData, InsertGameListData};
use crate::entity::prelude::BelongingPk;
use crate::entity::{belonging, game_lists, games};
use crate::error::AppResult;

pub mod belonging_repository;
pub mod game_lists_repository;
pub mod games_repository;

pub use belonging_repository::BelongingsRepository;
pub use game_lists_repository::GameListsRepository;
pub use games_repository::GamesRepository;

/// 游戏目录的持久化能力
#[async_trait]
pub trait GameRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<games::Model>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<games::Model>>;

    /// 按列表查询成员游戏的最小投影，按 position 升序。
    ///
    /// 列表为空或不存在时都返回空序列。
    async fn search_by_list(&self, list_id: i64) -> AppResult<Vec<GameMinProjection>>;

    async fn save(&self, game: InsertGameData) -> AppResult<games::Model>;

    /// 删除游戏并级联删除其全部列表成员关系；游戏不存在时返回 `NotFound`
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// 游戏列表的持久化能力
#[async_trait]
pub trait GameListRepository: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<game_lists::Model>>;

    async fn find_by_id(&self, id: i64) -> AppResult<Option<game_lists::Model>>;

    async fn save(&self, list: InsertGameListData) -> AppResult<game_lists::Model>;

    /// 删除列表并级联删除其全部成员关系；列表不存在时返回 `NotFound`
    async fn delete(&self, id: i64) -> AppResult<()>;
}

/// 游戏-列表关联的持久化能力，全部以复合主键寻址
#[async_trait]
pub trait BelongingRepository: Send + Sync {
    /// 按复合主键插入或更新 position。
    ///
    /// 键不完整或引用的游戏/列表不存在时返回 `ConstraintViolation`。
    async fn save(&self, key: BelongingPk, position: i32) -> AppResult<belonging::Model>;

    /// 把游戏追加到列表末尾；已是成员时返回 `ConstraintViolation`
    async fn append(&self, key: BelongingPk) -> AppResult<belonging::Model>;

    /// 删除成员关系并压缩其后的 position；不存在时返回 `NotFound`
    async fn delete(&self, key: BelongingPk) -> AppResult<()>;

    async fn exists_by_key(&self, key: BelongingPk) -> AppResult<bool>;

    /// 把列表中 source 位置的游戏移动到 destination 位置
    async fn move_within_list(
        &self,
        list_id: i64,
        source_index: usize,
        destination_index: usize,
    ) -> AppResult<()>;
}
