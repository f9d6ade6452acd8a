pub mod games;
pub mod lists;
pub mod logs;
