// 缓存模块
// 以 (查询类型, 参数) 为键的内存查询缓存

pub mod keys;
pub mod models;
pub mod operations;

use std::collections::HashMap;
use std::sync::Mutex;

use models::query::CachedQuery;

/// 查询缓存存储
/// 单写者：只有对应查询/控制器写入自己的键，后代只读
#[derive(Default)]
pub struct QueryStore {
    entries: Mutex<HashMap<String, CachedQuery>>,
}

impl QueryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&self, entry: CachedQuery) {
        let mut entries = self.entries.lock().expect("query cache poisoned");
        entries.insert(entry.key.clone(), entry);
    }

    pub(crate) fn fetch(&self, key: &str) -> Option<CachedQuery> {
        let entries = self.entries.lock().expect("query cache poisoned");
        entries.get(key).cloned()
    }

    pub(crate) fn remove(&self, key: &str) {
        let mut entries = self.entries.lock().expect("query cache poisoned");
        entries.remove(key);
    }

    pub(crate) fn remove_prefix(&self, prefix: &str) {
        let mut entries = self.entries.lock().expect("query cache poisoned");
        entries.retain(|key, _| !key.starts_with(prefix));
    }
}

// 重新导出常用类型和函数，方便其他模块使用
pub use operations::query::QueryCacheOperations;
