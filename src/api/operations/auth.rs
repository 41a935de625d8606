// 认证端点
// 登录为表单编码，会话 Cookie 由后端通过 Set-Cookie 下发

use crate::api::schema::user::{AuthenticatedUser, LoginRequest, SignupRequest};
use crate::error::AppError;
use crate::http::HttpClient;

/// 登录，成功后 Cookie 存入客户端的 Cookie 仓库
pub async fn login(http: &HttpClient, request: &LoginRequest) -> Result<(), AppError> {
    tracing::debug!("用户 {} 请求登录", request.username);
    let _: serde_json::Value = http.post_form("/auth/login", request).await?;
    Ok(())
}

/// 登出，结束会话
pub async fn logout(http: &HttpClient) -> Result<(), AppError> {
    tracing::debug!("请求登出");
    http.post_empty("/auth/logout").await
}

/// 注册新用户，先做本地校验再上送
pub async fn register(
    http: &HttpClient,
    request: &SignupRequest,
) -> Result<AuthenticatedUser, AppError> {
    request.validate()?;

    tracing::debug!("用户 {} 请求注册", request.user_username);
    http.post_json("/auth/register", request).await
}
