//! 数据实体模块
//!
//! 包含所有 SeaORM 实体定义以及关联表的复合主键。

pub mod prelude;

// === SeaORM 实体（对应数据库表）===
pub mod belonging;
pub mod game_lists;
pub mod games;

// === 复合主键 ===
pub mod belonging_pk;
