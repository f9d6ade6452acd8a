//! 预导入模块
//!
//! 提供常用类型的快捷导入。

// === SeaORM 实体 ===
pub use super::belonging::Entity as Belonging;
pub use super::game_lists::Entity as GameLists;
pub use super::games::Entity as Games;

// === 复合主键 ===
pub use super::belonging_pk::BelongingPk;
