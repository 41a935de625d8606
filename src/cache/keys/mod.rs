// 缓存键构造
// 键 = 查询类型 + 参数，相同键的结果可以直接复用

pub mod places_keys;
pub mod user_keys;
