// 用户端点

use crate::api::schema::user::SessionUser;
use crate::error::AppError;
use crate::http::HttpClient;

/// 获取当前会话用户
pub async fn fetch_current_user(http: &HttpClient) -> Result<SessionUser, AppError> {
    tracing::debug!("请求当前会话用户");
    http.get_json("/user/me", &[]).await
}
