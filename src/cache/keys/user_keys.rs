/// 当前用户查询缓存键前缀
const CURRENT_USER_KEY: &str = "query:user:me";

/// 生成当前用户查询缓存键
pub fn current_user_key() -> String {
    CURRENT_USER_KEY.to_string()
}
