// 会话模块
// 会话查询（缓存、不重试、不自发刷新）与两个路由守卫

use crate::AppState;
use crate::api::operations::user::fetch_current_user;
use crate::api::schema::user::SessionUser;
use crate::cache::QueryCacheOperations;
use crate::cache::keys::user_keys::current_user_key;
use crate::error::AppError;

/// 路由守卫判定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// 放行，渲染嵌套路由
    Render,
    /// 跳转到登录入口
    RedirectToLogin,
    /// 已登录，跳转到主页
    RedirectToHome,
}

/// 会话查询
/// 每个缓存窗口内最多发出一次 /user/me 请求；任何失败都视为未认证，
/// 且不缓存失败结果，避免把一次瞬态故障固化成"已登出"
pub async fn current_user(state: &AppState) -> Result<SessionUser, AppError> {
    let key = current_user_key();
    if let Some(user) = QueryCacheOperations::get::<SessionUser>(&state.cache, &key) {
        return Ok(user);
    }

    match fetch_current_user(&state.http).await {
        Ok(user) => {
            QueryCacheOperations::put(&state.cache, &key, &user, state.config.session_cache_ttl());
            Ok(user)
        }
        Err(e) => {
            tracing::debug!("会话查询失败: {}", e);
            Err(AppError::AuthenticationRequired)
        }
    }
}

/// 当前用户上下文：用户记录加派生的管理员标记
#[derive(Debug, Clone)]
pub struct UserContext {
    pub user: Option<SessionUser>,
    pub is_admin: bool,
}

impl UserContext {
    pub async fn load(state: &AppState) -> Self {
        match current_user(state).await {
            Ok(user) => {
                let is_admin = user.is_admin();
                Self {
                    user: Some(user),
                    is_admin,
                }
            }
            Err(_) => Self {
                user: None,
                is_admin: false,
            },
        }
    }
}

/// 受保护路由守卫：有会话则放行，否则跳转登录
pub async fn protected_route(state: &AppState) -> GuardDecision {
    match current_user(state).await {
        Ok(_) => GuardDecision::Render,
        Err(_) => GuardDecision::RedirectToLogin,
    }
}

/// 公开路由守卫：已有会话则跳转主页，否则渲染登录/注册
pub async fn public_route(state: &AppState) -> GuardDecision {
    match current_user(state).await {
        Ok(_) => GuardDecision::RedirectToHome,
        Err(_) => GuardDecision::Render,
    }
}

/// 登出并清掉缓存的会话判定
pub async fn logout(state: &AppState) -> Result<(), AppError> {
    crate::api::operations::auth::logout(&state.http).await?;
    QueryCacheOperations::invalidate(&state.cache, &current_user_key());
    Ok(())
}
