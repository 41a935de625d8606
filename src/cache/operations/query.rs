use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::cache::QueryStore;
use crate::cache::models::query::CachedQuery;

/// 查询缓存操作
pub struct QueryCacheOperations;

impl QueryCacheOperations {
    /// 读取缓存条目，过期条目视同未命中并被清除
    pub fn get<T: DeserializeOwned>(store: &QueryStore, key: &str) -> Option<T> {
        let entry = store.fetch(key)?;

        let now = chrono::Utc::now().timestamp_millis();
        if !entry.is_fresh(now) {
            store.remove(key);
            return None;
        }

        match serde_json::from_str(&entry.payload) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("缓存条目反序列化失败，键 {}: {}", key, e);
                store.remove(key);
                None
            }
        }
    }

    /// 写入缓存条目
    pub fn put<T: Serialize>(store: &QueryStore, key: &str, value: &T, ttl: Duration) {
        let payload = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("缓存条目序列化失败，键 {}: {}", key, e);
                return;
            }
        };

        // 过期时间以毫秒存放，防抖窗口这类亚秒 TTL 才不会被截断
        let now = chrono::Utc::now().timestamp_millis();
        store.insert(CachedQuery {
            key: key.to_string(),
            payload,
            created_at: now,
            expires_at: now + ttl.as_millis() as i64,
        });
    }

    /// 使单个条目失效
    pub fn invalidate(store: &QueryStore, key: &str) {
        store.remove(key);
    }

    /// 使某一查询类型的全部条目失效（如管理员变更后的附近搜索结果）
    pub fn invalidate_prefix(store: &QueryStore, prefix: &str) {
        store.remove_prefix(prefix);
    }
}
