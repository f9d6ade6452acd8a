//! 创建目录核心表
//!
//! 1. games：游戏目录
//! 2. game_lists：游戏列表
//! 3. belonging：游戏与列表的多对多关联，以 (game_id, list_id) 作为复合主键

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, DatabaseBackend, Statement, TransactionTrait};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        // 开启事务，保证三张表一起创建
        let txn = conn.begin().await?;

        txn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            r#"CREATE TABLE "games" (
                "id" INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
                "title" TEXT NOT NULL,
                "game_year" INTEGER,
                "genre" TEXT,
                "platforms" TEXT,
                "score" REAL,
                "img_url" TEXT,
                "short_description" TEXT,
                "long_description" TEXT
            )"#,
        ))
        .await?;

        txn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            r#"CREATE TABLE "game_lists" (
                "id" INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
                "name" TEXT NOT NULL
            )"#,
        ))
        .await?;

        // 复合主键同时保证 (game_id, list_id) 唯一
        txn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            r#"CREATE TABLE "belonging" (
                "game_id" INTEGER NOT NULL,
                "list_id" INTEGER NOT NULL,
                "position" INTEGER NOT NULL DEFAULT 0,
                "created_at" INTEGER DEFAULT (strftime('%s', 'now')),
                PRIMARY KEY("game_id", "list_id"),
                FOREIGN KEY("game_id") REFERENCES "games"("id") ON DELETE CASCADE,
                FOREIGN KEY("list_id") REFERENCES "game_lists"("id") ON DELETE CASCADE
            )"#,
        ))
        .await?;

        txn.commit().await?;

        println!("[MIGRATION] catalog tables created");
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 先删除关联表，再删除被引用的父表
        manager
            .drop_table(Table::drop().table(Belonging::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GameLists::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Games {
    Table,
}

#[derive(DeriveIden)]
enum GameLists {
    Table,
}

#[derive(DeriveIden)]
enum Belonging {
    Table,
}
