use crate::api::schema::places::Coordinates;

/// 地点联想查询缓存键前缀
const SUGGESTION_PREFIX: &str = "query:suggest:";

/// 附近健身房查询缓存键前缀
pub const NEARBY_PREFIX: &str = "query:nearby:";

/// 生成联想查询缓存键，输入做去空格和小写归一化
pub fn suggestion_key(input: &str) -> String {
    format!("{}{}", SUGGESTION_PREFIX, input.trim().to_lowercase())
}

/// 生成附近健身房查询缓存键
/// 坐标保留 4 位小数（约 11m 精度），同一地点的重复搜索命中同一条目
pub fn nearby_key(coordinates: Coordinates, radius: u32) -> String {
    format!(
        "{}{:.4}:{:.4}:{}",
        NEARBY_PREFIX, coordinates.lat, coordinates.lng, radius
    )
}
