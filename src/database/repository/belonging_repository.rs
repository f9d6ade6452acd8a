//! 游戏-列表关联数据仓库

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::*;

use super::BelongingRepository;
use crate::entity::prelude::*;
use crate::entity::belonging;
use crate::error::{AppError, AppResult};

/// 基于 SeaORM 的关联数据仓库
#[derive(Clone)]
pub struct BelongingsRepository {
    db: DatabaseConnection,
}

impl BelongingsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// 按 position 顺序获取列表中的全部关联
    #[cfg(test)]
    pub async fn find_by_list(&self, list_id: i64) -> AppResult<Vec<belonging::Model>> {
        Ok(members_of(&self.db, list_id).await?)
    }
}

fn complete_key(key: BelongingPk) -> AppResult<(i64, i64)> {
    match (key.game_id(), key.list_id()) {
        (Some(game_id), Some(list_id)) => Ok((game_id, list_id)),
        (None, _) => Err(AppError::ConstraintViolation(
            "belonging key has no game id".to_string(),
        )),
        (_, None) => Err(AppError::ConstraintViolation(
            "belonging key has no list id".to_string(),
        )),
    }
}

/// 确认关联引用的游戏和列表都存在
async fn ensure_parents_exist<C>(conn: &C, game_id: i64, list_id: i64) -> AppResult<()>
where
    C: ConnectionTrait,
{
    if Games::find_by_id(game_id).count(conn).await? == 0 {
        return Err(AppError::ConstraintViolation(format!(
            "game {} does not exist",
            game_id
        )));
    }
    if GameLists::find_by_id(list_id).count(conn).await? == 0 {
        return Err(AppError::ConstraintViolation(format!(
            "list {} does not exist",
            list_id
        )));
    }
    Ok(())
}

async fn members_of<C>(conn: &C, list_id: i64) -> Result<Vec<belonging::Model>, DbErr>
where
    C: ConnectionTrait,
{
    Belonging::find()
        .filter(belonging::Column::ListId.eq(list_id))
        .order_by_asc(belonging::Column::Position)
        .order_by_asc(belonging::Column::GameId)
        .all(conn)
        .await
}

#[async_trait]
impl BelongingRepository for BelongingsRepository {
    async fn save(&self, key: BelongingPk, position: i32) -> AppResult<belonging::Model> {
        let (game_id, list_id) = complete_key(key)?;
        let now = chrono::Utc::now().timestamp();

        let txn = self.db.begin().await?;
        ensure_parents_exist(&txn, game_id, list_id).await?;

        let link = belonging::ActiveModel {
            game_id: Set(game_id),
            list_id: Set(list_id),
            position: Set(position),
            created_at: Set(Some(now)),
        };

        // 复合主键冲突时只更新 position
        Belonging::insert(link)
            .on_conflict(
                OnConflict::columns([belonging::Column::GameId, belonging::Column::ListId])
                    .update_column(belonging::Column::Position)
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;

        let saved = Belonging::find_by_id((game_id, list_id))
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::not_found("Belonging", format!("{:?}", key)))?;

        txn.commit().await?;
        Ok(saved)
    }

    async fn append(&self, key: BelongingPk) -> AppResult<belonging::Model> {
        let (game_id, list_id) = complete_key(key)?;
        let now = chrono::Utc::now().timestamp();

        let txn = self.db.begin().await?;
        ensure_parents_exist(&txn, game_id, list_id).await?;

        if Belonging::find_by_id((game_id, list_id))
            .count(&txn)
            .await?
            > 0
        {
            return Err(AppError::ConstraintViolation(format!(
                "game {} is already in list {}",
                game_id, list_id
            )));
        }

        let last = Belonging::find()
            .filter(belonging::Column::ListId.eq(list_id))
            .order_by_desc(belonging::Column::Position)
            .one(&txn)
            .await?;
        let position = last.map_or(0, |link| link.position + 1);

        let link = belonging::ActiveModel {
            game_id: Set(game_id),
            list_id: Set(list_id),
            position: Set(position),
            created_at: Set(Some(now)),
        };
        let inserted = link.insert(&txn).await?;

        txn.commit().await?;

        log::debug!("游戏 {} 加入列表 {}，位置 {}", game_id, list_id, position);
        Ok(inserted)
    }

    async fn delete(&self, key: BelongingPk) -> AppResult<()> {
        let Some((game_id, list_id)) = key.components() else {
            return Err(AppError::not_found("Belonging", format!("{:?}", key)));
        };

        let txn = self.db.begin().await?;

        let existing = Belonging::find_by_id((game_id, list_id))
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::not_found("Belonging", format!("{:?}", key)))?;

        Belonging::delete_by_id((game_id, list_id))
            .exec(&txn)
            .await?;

        // 压缩后续位置，保持 position 连续
        Belonging::update_many()
            .col_expr(
                belonging::Column::Position,
                Expr::col(belonging::Column::Position).sub(1),
            )
            .filter(belonging::Column::ListId.eq(list_id))
            .filter(belonging::Column::Position.gt(existing.position))
            .exec(&txn)
            .await?;

        txn.commit().await?;
        Ok(())
    }

    async fn exists_by_key(&self, key: BelongingPk) -> AppResult<bool> {
        let Some(id) = key.components() else {
            return Ok(false);
        };
        Ok(Belonging::find_by_id(id).count(&self.db).await? > 0)
    }

    async fn move_within_list(
        &self,
        list_id: i64,
        source_index: usize,
        destination_index: usize,
    ) -> AppResult<()> {
        let txn = self.db.begin().await?;

        if GameLists::find_by_id(list_id).count(&txn).await? == 0 {
            return Err(AppError::not_found("GameList", list_id));
        }

        let members = members_of(&txn, list_id).await?;
        let len = members.len();
        if source_index >= len || destination_index >= len {
            return Err(AppError::InvalidInput(format!(
                "index out of range: source {}, destination {}, list size {}",
                source_index, destination_index, len
            )));
        }
        if source_index == destination_index {
            return Ok(());
        }

        let mut reordered: Vec<&belonging::Model> = members.iter().collect();
        let moved = reordered.remove(source_index);
        reordered.insert(destination_index, moved);

        // 位置连续时只有 [min, max] 区间发生变化；存在空洞或重复时顺带整理
        let to_update: Vec<(i64, usize)> = reordered
            .iter()
            .enumerate()
            .filter(|(index, link)| link.position != *index as i32)
            .map(|(index, link)| (link.game_id, index))
            .collect();
        if to_update.is_empty() {
            return Ok(());
        }

        // 构建 CASE WHEN 语句批量更新
        let case_clause = to_update
            .iter()
            .map(|(game_id, order)| format!("WHEN game_id = {} THEN {}", game_id, order))
            .collect::<Vec<_>>()
            .join(" ");

        let ids = to_update
            .iter()
            .map(|(game_id, _)| game_id.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        let sql = format!(
            "UPDATE belonging SET position = CASE {} END WHERE list_id = {} AND game_id IN ({})",
            case_clause, list_id, ids
        );

        txn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql))
            .await?;

        txn.commit().await?;

        log::debug!(
            "列表 {} 内移动: {} -> {}",
            list_id,
            source_index,
            destination_index
        );
        Ok(())
    }
}
