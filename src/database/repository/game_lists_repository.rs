//! 游戏列表数据仓库

use async_trait::async_trait;
use sea_orm::*;

use super::GameListRepository;
use crate::database::dto::InsertGameListData;
use crate::entity::prelude::*;
use crate::entity::{belonging, game_lists};
use crate::error::{AppError, AppResult};

/// 基于 SeaORM 的游戏列表数据仓库
#[derive(Clone)]
pub struct GameListsRepository {
    db: DatabaseConnection,
}

impl GameListsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// 获取列表中的游戏数量
    #[cfg(test)]
    pub async fn count_games(&self, list_id: i64) -> AppResult<u64> {
        Ok(Belonging::find()
            .filter(belonging::Column::ListId.eq(list_id))
            .count(&self.db)
            .await?)
    }
}

#[async_trait]
impl GameListRepository for GameListsRepository {
    async fn find_all(&self) -> AppResult<Vec<game_lists::Model>> {
        Ok(GameLists::find()
            .order_by_asc(game_lists::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<game_lists::Model>> {
        Ok(GameLists::find_by_id(id).one(&self.db).await?)
    }

    async fn save(&self, list: InsertGameListData) -> AppResult<game_lists::Model> {
        let list_active = game_lists::ActiveModel {
            id: NotSet,
            name: Set(list.name),
        };

        Ok(list_active.insert(&self.db).await?)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let txn = self.db.begin().await?;

        let links = Belonging::delete_many()
            .filter(belonging::Column::ListId.eq(id))
            .exec(&txn)
            .await?;

        let result = GameLists::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            return Err(AppError::not_found("GameList", id));
        }

        txn.commit().await?;

        log::info!(
            "已删除列表 {}，级联移除 {} 条游戏关联",
            id,
            links.rows_affected
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::dto::InsertGameData;
    use crate::database::repository::test_support::memory_db;
    use crate::database::repository::{
        BelongingRepository, BelongingsRepository, GameRepository, GamesRepository,
    };

    fn named(name: &str) -> InsertGameListData {
        InsertGameListData {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn save_and_list_all() {
        let repo = GameListsRepository::new(memory_db().await);
        let first = repo.save(named("Aventura e RPG")).await.unwrap();
        let second = repo.save(named("Jogos de plataforma")).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![first.clone(), second]);
        assert_eq!(
            repo.find_by_id(first.id).await.unwrap().unwrap().name,
            "Aventura e RPG"
        );
    }

    #[tokio::test]
    async fn delete_list_cascades_but_keeps_games() {
        let db = memory_db().await;
        let lists = GameListsRepository::new(db.clone());
        let games = GamesRepository::new(db.clone());
        let links = BelongingsRepository::new(db);

        let game = games.save(InsertGameData::titled("A")).await.unwrap();
        let list = lists.save(named("Favorites")).await.unwrap();
        links.append(BelongingPk::new(game.id, list.id)).await.unwrap();
        assert_eq!(lists.count_games(list.id).await.unwrap(), 1);

        lists.delete(list.id).await.unwrap();

        assert_eq!(lists.count_games(list.id).await.unwrap(), 0);
        assert!(games.find_by_id(game.id).await.unwrap().is_some());
        assert!(lists.find_by_id(list.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_missing_list_is_not_found() {
        let repo = GameListsRepository::new(memory_db().await);
        let err = repo.delete(1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { entity: "GameList", .. }));
    }
}
