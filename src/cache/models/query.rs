use serde::{Deserialize, Serialize};

/// 查询缓存条目
/// 负载以 JSON 字符串存放，便于不同查询共用同一个存储
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CachedQuery {
    pub key: String,
    pub payload: String,
    pub created_at: i64, // Unix 毫秒时间戳
    pub expires_at: i64, // Unix 毫秒时间戳
}

impl CachedQuery {
    /// 条目是否仍在新鲜期内
    pub fn is_fresh(&self, now: i64) -> bool {
        now < self.expires_at
    }
}
