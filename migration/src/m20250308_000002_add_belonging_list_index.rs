//! 为 belonging 表添加 (list_id, position) 索引
//!
//! 按列表查询成员时按 position 排序，复合主键以 game_id 开头无法覆盖该查询。

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_belonging_list_position")
                    .table(Belonging::Table)
                    .col(Belonging::ListId)
                    .col(Belonging::Position)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_belonging_list_position")
                    .table(Belonging::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Belonging {
    Table,
    ListId,
    Position,
}
