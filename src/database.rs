pub mod connection;
pub mod dto;
pub mod repository;
pub mod seed;
pub mod service;

// 重新导出 service 中的服务类型方便使用
pub use service::{GameListService, GameService};
