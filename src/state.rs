//! 共享应用状态
//!
//! 每个请求都会克隆一份状态；服务内部只持有 `Arc` 包装的仓库 trait 对象。

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::database::repository::{BelongingsRepository, GameListsRepository, GamesRepository};
use crate::database::{GameListService, GameService};

#[derive(Clone)]
pub struct AppState {
    pub games: GameService,
    pub lists: GameListService,
}

impl AppState {
    pub fn new(games: GameService, lists: GameListService) -> Self {
        Self { games, lists }
    }

    /// 以 SeaORM 仓库组装服务
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let games = GameService::new(Arc::new(GamesRepository::new(db.clone())));
        let lists = GameListService::new(
            Arc::new(GameListsRepository::new(db.clone())),
            Arc::new(BelongingsRepository::new(db)),
        );
        Self::new(games, lists)
    }
}
