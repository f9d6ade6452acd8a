//! 游戏数据仓库

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::*;

use super::GameRepository;
use crate::database::dto::{GameMinProjection, InsertGameData};
use crate::entity::prelude::*;
use crate::entity::{belonging, games};
use crate::error::{AppError, AppResult};

/// 基于 SeaORM 的游戏数据仓库
#[derive(Clone)]
pub struct GamesRepository {
    db: DatabaseConnection,
}

impl GamesRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// 获取游戏总数
    #[cfg(test)]
    pub async fn count(&self) -> AppResult<u64> {
        Ok(Games::find().count(&self.db).await?)
    }
}

#[async_trait]
impl GameRepository for GamesRepository {
    // ==================== 查询操作 ====================

    async fn find_all(&self) -> AppResult<Vec<games::Model>> {
        Ok(Games::find()
            .order_by_asc(games::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<games::Model>> {
        Ok(Games::find_by_id(id).one(&self.db).await?)
    }

    async fn search_by_list(&self, list_id: i64) -> AppResult<Vec<GameMinProjection>> {
        let rows = Games::find()
            .select_only()
            .column(games::Column::Id)
            .column(games::Column::Title)
            .column(games::Column::GameYear)
            .column(games::Column::ImgUrl)
            .column(games::Column::ShortDescription)
            .column(belonging::Column::Position)
            .inner_join(Belonging)
            .filter(belonging::Column::ListId.eq(list_id))
            .order_by_asc(belonging::Column::Position)
            .order_by_asc(belonging::Column::GameId)
            .into_model::<GameMinProjection>()
            .all(&self.db)
            .await?;

        Ok(rows)
    }

    // ==================== 写入操作 ====================

    async fn save(&self, game: InsertGameData) -> AppResult<games::Model> {
        let game_active = games::ActiveModel {
            id: NotSet,
            title: Set(game.title),
            game_year: Set(game.year),
            genre: Set(game.genre),
            platforms: Set(game.platforms),
            score: Set(game.score),
            img_url: Set(game.img_url),
            short_description: Set(game.short_description),
            long_description: Set(game.long_description),
        };

        Ok(game_active.insert(&self.db).await?)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let txn = self.db.begin().await?;

        // 先删除关联，保证复合主键不会比它引用的游戏活得更久
        let links = Belonging::find()
            .filter(belonging::Column::GameId.eq(id))
            .all(&txn)
            .await?;

        Belonging::delete_many()
            .filter(belonging::Column::GameId.eq(id))
            .exec(&txn)
            .await?;

        // 压缩各个受影响列表中的后续位置
        for link in &links {
            Belonging::update_many()
                .col_expr(
                    belonging::Column::Position,
                    Expr::col(belonging::Column::Position).sub(1),
                )
                .filter(belonging::Column::ListId.eq(link.list_id))
                .filter(belonging::Column::Position.gt(link.position))
                .exec(&txn)
                .await?;
        }

        let result = Games::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            // txn 在此处被丢弃并回滚
            return Err(AppError::not_found("Game", id));
        }

        txn.commit().await?;

        log::info!("已删除游戏 {}，级联移除 {} 条列表关联", id, links.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::repository::test_support::memory_db;
    use crate::database::repository::{
        BelongingRepository, BelongingsRepository, GameListRepository, GameListsRepository,
    };
    use crate::database::dto::InsertGameListData;

    #[tokio::test]
    async fn find_all_on_empty_store_is_empty() {
        let repo = GamesRepository::new(memory_db().await);
        assert!(repo.find_all().await.unwrap().is_empty());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn save_then_find_by_id() {
        let repo = GamesRepository::new(memory_db().await);

        let saved = repo
            .save(InsertGameData {
                year: Some(2018),
                score: Some(4.5),
                ..InsertGameData::titled("Celeste")
            })
            .await
            .unwrap();

        let found = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(found.title, "Celeste");
        assert_eq!(found.game_year, Some(2018));
        assert_eq!(found.score, Some(4.5));
        assert!(repo.find_by_id(saved.id + 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn search_by_list_returns_only_members_in_position_order() {
        let db = memory_db().await;
        let games = GamesRepository::new(db.clone());
        let lists = GameListsRepository::new(db.clone());
        let links = BelongingsRepository::new(db);

        let a = games.save(InsertGameData::titled("A")).await.unwrap();
        let b = games.save(InsertGameData::titled("B")).await.unwrap();
        let c = games.save(InsertGameData::titled("C")).await.unwrap();
        let list = lists
            .save(InsertGameListData {
                name: "Favorites".to_string(),
            })
            .await
            .unwrap();

        links.save(BelongingPk::new(c.id, list.id), 0).await.unwrap();
        links.save(BelongingPk::new(a.id, list.id), 1).await.unwrap();

        let rows = games.search_by_list(list.id).await.unwrap();
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![c.id, a.id]);
        assert!(!ids.contains(&b.id));
        assert_eq!(rows[1].position, 1);
    }

    #[tokio::test]
    async fn search_by_unknown_list_is_empty() {
        let repo = GamesRepository::new(memory_db().await);
        repo.save(InsertGameData::titled("A")).await.unwrap();
        assert!(repo.search_by_list(999).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_cascades_memberships() {
        let db = memory_db().await;
        let games = GamesRepository::new(db.clone());
        let lists = GameListsRepository::new(db.clone());
        let links = BelongingsRepository::new(db);

        let game = games.save(InsertGameData::titled("A")).await.unwrap();
        let list = lists
            .save(InsertGameListData {
                name: "Favorites".to_string(),
            })
            .await
            .unwrap();
        let key = BelongingPk::new(game.id, list.id);
        links.append(key).await.unwrap();

        games.delete(game.id).await.unwrap();

        assert!(!links.exists_by_key(key).await.unwrap());
        assert!(games.search_by_list(list.id).await.unwrap().is_empty());
        assert!(games.find_by_id(game.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_compacts_positions_in_every_list() {
        let db = memory_db().await;
        let games = GamesRepository::new(db.clone());
        let lists = GameListsRepository::new(db.clone());
        let links = BelongingsRepository::new(db);

        let mut ids = Vec::new();
        for title in ["G0", "G1", "G2", "G3", "G4"] {
            ids.push(games.save(InsertGameData::titled(title)).await.unwrap().id);
        }
        let list = lists
            .save(InsertGameListData {
                name: "Ranked".to_string(),
            })
            .await
            .unwrap();
        for id in &ids {
            links.append(BelongingPk::new(*id, list.id)).await.unwrap();
        }

        games.delete(ids[0]).await.unwrap();
        games.delete(ids[1]).await.unwrap();

        let rows = games.search_by_list(list.id).await.unwrap();
        let positions: Vec<i32> = rows.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);

        links.move_within_list(list.id, 2, 1).await.unwrap();

        let order: Vec<i64> = games
            .search_by_list(list.id)
            .await
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(order, vec![ids[2], ids[4], ids[3]]);
    }

    #[tokio::test]
    async fn delete_missing_game_is_not_found() {
        let repo = GamesRepository::new(memory_db().await);
        let err = repo.delete(7).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { entity: "Game", .. }));
    }
}
