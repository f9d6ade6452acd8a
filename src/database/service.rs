//! 业务服务层
//!
//! 服务只依赖仓库 trait，把仓库结果映射为 DTO。存储错误已在仓库边界归类，
//! 这里只补充"查无此记录"的显式错误和输入校验。

use std::sync::Arc;

use crate::database::dto::{
    BelongingDto, GameDto, GameListDto, GameMinDto, InsertGameData, InsertGameListData,
    MembershipDto, ReplacementData,
};
use crate::database::repository::{BelongingRepository, GameListRepository, GameRepository};
use crate::entity::prelude::BelongingPk;
use crate::error::{AppError, AppResult};

// ==================== 游戏 ====================

#[derive(Clone)]
pub struct GameService {
    games: Arc<dyn GameRepository>,
}

impl GameService {
    pub fn new(games: Arc<dyn GameRepository>) -> Self {
        Self { games }
    }

    pub async fn find_all(&self) -> AppResult<Vec<GameMinDto>> {
        let games = self.games.find_all().await?;
        Ok(games.into_iter().map(GameMinDto::from).collect())
    }

    /// 查询单个游戏，不存在时返回 `NotFound`
    pub async fn find_by_id(&self, id: i64) -> AppResult<GameDto> {
        self.games
            .find_by_id(id)
            .await?
            .map(GameDto::from)
            .ok_or_else(|| AppError::not_found("Game", id))
    }

    /// 列表中的游戏；不区分"空列表"和"列表不存在"
    pub async fn find_by_list(&self, list_id: i64) -> AppResult<Vec<GameMinDto>> {
        let rows = self.games.search_by_list(list_id).await?;
        Ok(rows.into_iter().map(GameMinDto::from).collect())
    }

    pub async fn create(&self, mut game: InsertGameData) -> AppResult<GameDto> {
        game.title = require_non_blank("title", &game.title)?;
        let saved = self.games.save(game).await?;
        log::info!("新增游戏 {}: {}", saved.id, saved.title);
        Ok(saved.into())
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.games.delete(id).await
    }
}

// ==================== 游戏列表 ====================

#[derive(Clone)]
pub struct GameListService {
    lists: Arc<dyn GameListRepository>,
    belongings: Arc<dyn BelongingRepository>,
}

impl GameListService {
    pub fn new(
        lists: Arc<dyn GameListRepository>,
        belongings: Arc<dyn BelongingRepository>,
    ) -> Self {
        Self { lists, belongings }
    }

    pub async fn find_all(&self) -> AppResult<Vec<GameListDto>> {
        let lists = self.lists.find_all().await?;
        Ok(lists.into_iter().map(GameListDto::from).collect())
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<GameListDto> {
        self.lists
            .find_by_id(id)
            .await?
            .map(GameListDto::from)
            .ok_or_else(|| AppError::not_found("GameList", id))
    }

    pub async fn create(&self, list: InsertGameListData) -> AppResult<GameListDto> {
        let name = require_non_blank("name", &list.name)?;
        let saved = self.lists.save(InsertGameListData { name }).await?;
        log::info!("新增列表 {}: {}", saved.id, saved.name);
        Ok(saved.into())
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.lists.delete(id).await
    }

    /// 将游戏追加到列表末尾
    pub async fn add_game(&self, list_id: i64, game_id: i64) -> AppResult<BelongingDto> {
        let link = self
            .belongings
            .append(BelongingPk::new(game_id, list_id))
            .await?;
        Ok(link.into())
    }

    pub async fn remove_game(&self, list_id: i64, game_id: i64) -> AppResult<()> {
        self.belongings
            .delete(BelongingPk::new(game_id, list_id))
            .await
    }

    pub async fn contains_game(&self, list_id: i64, game_id: i64) -> AppResult<MembershipDto> {
        let member = self
            .belongings
            .exists_by_key(BelongingPk::new(game_id, list_id))
            .await?;
        Ok(MembershipDto {
            game_id,
            list_id,
            member,
        })
    }

    /// 列表内移动游戏
    pub async fn move_game(&self, list_id: i64, replacement: ReplacementData) -> AppResult<()> {
        let source = require_index("sourceIndex", replacement.source_index)?;
        let destination = require_index("destinationIndex", replacement.destination_index)?;
        self.belongings
            .move_within_list(list_id, source, destination)
            .await
    }
}

fn require_index(field: &str, value: i64) -> AppResult<usize> {
    usize::try_from(value)
        .map_err(|_| AppError::InvalidInput(format!("{} must not be negative: {}", field, value)))
}

fn require_non_blank(field: &str, value: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidInput(format!("{} must not be blank", field)));
    }
    Ok(trimmed.to_string())
}
