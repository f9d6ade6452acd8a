use std::path::{Path, PathBuf};

use directories::ProjectDirs;

pub const DB_FILE_NAME: &str = "gameslist.db";

/// 平台默认的数据目录，例如 Linux 下的 `~/.local/share/gameslist`
pub fn default_data_dir() -> Result<PathBuf, String> {
    ProjectDirs::from("com", "gameslist", "gameslist")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| "无法获取系统数据目录".to_string())
}

/// 数据库文件路径；`data_dir` 为空时使用平台默认目录
pub fn db_path(data_dir: Option<&Path>) -> Result<PathBuf, String> {
    let dir = match data_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_data_dir()?,
    };
    Ok(dir.join(DB_FILE_NAME))
}
