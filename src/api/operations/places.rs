// 地点端点
// 联想、地理编码、附近健身房搜索、步入状态变更

use crate::api::schema::places::{
    AutocompleteResponse, Coordinates, GeocodeResponse, NearbyGymsResponse, Suggestion,
    UpdateWalkInRequest, WalkInRecord,
};
use crate::error::AppError;
use crate::http::HttpClient;

// 后端接受的半径范围（米）
const MIN_RADIUS_M: u32 = 100;
const MAX_RADIUS_M: u32 = 50_000;

/// 将半径收敛到后端接受的范围
pub fn clamp_radius(radius: u32) -> u32 {
    radius.clamp(MIN_RADIUS_M, MAX_RADIUS_M)
}

/// 地点联想
pub async fn autocomplete(http: &HttpClient, input: &str) -> Result<Vec<Suggestion>, AppError> {
    tracing::debug!("请求地点联想，输入: {}", input);

    let response: AutocompleteResponse = http
        .get_json("/places/autocomplete", &[("input", input.to_string())])
        .await?;
    Ok(response.predictions)
}

/// 自由文本转坐标
pub async fn geocode(http: &HttpClient, address: &str) -> Result<GeocodeResponse, AppError> {
    tracing::debug!("请求地理编码，地址: {}", address);

    http.get_json("/places/geocode", &[("address", address.to_string())])
        .await
}

/// 附近健身房搜索
/// 坐标须落在服务范围内；失败时做一次受控重试（仅瞬态失败）
pub async fn nearby_gyms(
    http: &HttpClient,
    coordinates: Coordinates,
    radius: u32,
) -> Result<NearbyGymsResponse, AppError> {
    if !coordinates.within_service_area() {
        return Err(AppError::Validation(
            "Search location must be within Selangor or Kuala Lumpur".to_string(),
        ));
    }

    let radius = clamp_radius(radius);
    tracing::debug!(
        "请求半径 {}m 内的健身房，坐标: ({}, {})",
        radius,
        coordinates.lat,
        coordinates.lng
    );

    let query = [
        ("lat", coordinates.lat.to_string()),
        ("lng", coordinates.lng.to_string()),
        ("radius", radius.to_string()),
    ];

    match http.get_json("/places/nearby-gyms", &query).await {
        Ok(response) => Ok(response),
        Err(e) if e.is_transient() => {
            tracing::warn!("附近搜索失败，重试一次: {}", e);
            http.get_json("/places/nearby-gyms", &query).await
        }
        Err(e) => Err(e),
    }
}

/// 变更某个健身房的步入状态（仅管理员）
pub async fn update_walk_in(
    http: &HttpClient,
    place_id: &str,
    walk_in: bool,
) -> Result<WalkInRecord, AppError> {
    tracing::debug!("请求变更健身房 {} 的步入状态为 {}", place_id, walk_in);

    http.patch_json(
        &format!("/places/gyms/{}/walk-in", place_id),
        &UpdateWalkInRequest { walk_in },
    )
    .await
}
