use futures_util::future::BoxFuture;

use crate::api::schema::places::Coordinates;
use crate::error::AppError;

/// 设备定位提供者
/// 把基于回调的定位接口收敛成一次性的异步操作，成功/失败都是显式结果
pub trait GeolocationProvider: Send + Sync {
    fn current_position(&self) -> BoxFuture<'_, Result<Coordinates, AppError>>;
}

/// 固定坐标提供者，测试与命令行使用
pub struct FixedPosition(pub Coordinates);

impl GeolocationProvider for FixedPosition {
    fn current_position(&self) -> BoxFuture<'_, Result<Coordinates, AppError>> {
        let coordinates = self.0;
        Box::pin(async move { Ok(coordinates) })
    }
}

/// 权限被拒的提供者，测试使用
pub struct DeniedPosition;

impl GeolocationProvider for DeniedPosition {
    fn current_position(&self) -> BoxFuture<'_, Result<Coordinates, AppError>> {
        Box::pin(async {
            Err(AppError::Geolocation(
                "Location access denied. Please enter manually.".to_string(),
            ))
        })
    }
}
