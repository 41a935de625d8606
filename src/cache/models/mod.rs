/// 缓存数据模型
/// 定义缓存条目的结构体
pub mod query;

pub use query::CachedQuery;
