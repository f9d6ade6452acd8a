//! belonging 表的复合主键
//!
//! 键由游戏 ID 和列表 ID 两个分量组成，构造后不可修改。
//! 相等性逐字段比较，未设置的分量（`None`）与未设置的分量相等；
//! 哈希值与相等性保持一致，可以安全地放入 `HashSet` / `HashMap`。
//! 不定义顺序。

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// 哈希累加使用的种子与乘数
const HASH_SEED: i32 = 1;
const HASH_PRIME: i32 = 31;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BelongingPk {
    game_id: Option<i64>,
    list_id: Option<i64>,
}

impl BelongingPk {
    /// 由两个已存在的父记录 ID 构造完整的键
    pub fn new(game_id: i64, list_id: i64) -> Self {
        Self {
            game_id: Some(game_id),
            list_id: Some(list_id),
        }
    }

    pub fn game_id(&self) -> Option<i64> {
        self.game_id
    }

    pub fn list_id(&self) -> Option<i64> {
        self.list_id
    }

    /// 返回 `(game_id, list_id)`，任一分量缺失时返回 `None`
    pub fn components(&self) -> Option<(i64, i64)> {
        Some((self.game_id?, self.list_id?))
    }

    /// 身份哈希码：`result = 31 * result + 分量哈希`，未设置的分量贡献 0
    pub fn identity_hash(&self) -> i32 {
        let mut result = HASH_SEED;
        result = HASH_PRIME
            .wrapping_mul(result)
            .wrapping_add(self.game_id.map_or(0, component_hash));
        result = HASH_PRIME
            .wrapping_mul(result)
            .wrapping_add(self.list_id.map_or(0, component_hash));
        result
    }
}

/// 64 位 ID 折叠为 32 位：高低位异或，只保留低 32 位
fn component_hash(id: i64) -> i32 {
    (id ^ (id >> 32)) as i32
}

impl Hash for BelongingPk {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.identity_hash());
    }
}
