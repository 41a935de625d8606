use serde::{Deserialize, Serialize};

/// 地理坐标，整体替换、不做原地修改
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

// 后端只服务雪兰莪/吉隆坡范围内的搜索
const BOUNDS_SOUTH: f64 = 2.6;
const BOUNDS_NORTH: f64 = 3.45;
const BOUNDS_WEST: f64 = 101.0;
const BOUNDS_EAST: f64 = 102.0;

impl Coordinates {
    /// 坐标是否落在雪兰莪/吉隆坡范围内
    pub fn within_service_area(&self) -> bool {
        (BOUNDS_SOUTH..=BOUNDS_NORTH).contains(&self.lat)
            && (BOUNDS_WEST..=BOUNDS_EAST).contains(&self.lng)
    }
}

/// 地点联想建议，随每次合格的按键重新生成，不做持久化
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub place_id: String,
    pub description: String,
    pub main_text: String,
    pub secondary_text: String,
}

#[derive(Debug, Deserialize)]
pub struct AutocompleteResponse {
    pub predictions: Vec<Suggestion>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    pub lat: f64,
    pub lng: f64,
    pub formatted_address: Option<String>,
}

impl GeocodeResponse {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

/// 健身房记录，由附近搜索返回
/// 传输层为 camelCase，walk_in 除外（后端按下划线返回）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GymRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub display_name: String,
    pub formatted_address: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub user_rating_count: u32,
    pub google_maps_uri: String,
    #[serde(default)]
    pub website_uri: Option<String>,
    #[serde(default)]
    pub national_phone_number: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(rename = "walk_in")]
    pub walk_in: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyGymsResponse {
    pub places: Vec<GymRecord>,
}

#[derive(Debug, Serialize)]
pub struct UpdateWalkInRequest {
    pub walk_in: bool,
}

/// PATCH /places/gyms/{id}/walk-in 的返回体
#[derive(Debug, Deserialize)]
pub struct WalkInRecord {
    pub id: i64,
    pub places_id: String,
    pub walk_in: bool,
}
