use std::fmt;

/// 客户端错误分类
/// 查询层的失败会被捕获为这里的类型化错误，就地展示，不向上抛异常
#[derive(Debug)]
pub enum AppError {
    /// 会话缺失或已失效，路由守卫据此跳转到登录页
    AuthenticationRequired,
    /// 本地表单校验失败，不会发出网络请求
    Validation(String),
    /// 请求被拒绝或返回非 2xx
    Network {
        status: Option<u16>,
        message: String,
    },
    /// 健身房记录缺少稳定 id，禁止发出 PATCH
    MissingIdentifier,
    /// 设备定位失败或被拒绝
    Geolocation(String),
    /// 客户端内部错误（如 HTTP 客户端构建失败）
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::AuthenticationRequired => write!(f, "Not Authenticated"),
            AppError::Validation(message) => write!(f, "{}", message),
            AppError::Network {
                status: Some(status),
                message,
            } => {
                write!(f, "Request failed ({}): {}", status, message)
            }
            AppError::Network {
                status: None,
                message,
            } => {
                write!(f, "Request failed: {}", message)
            }
            AppError::MissingIdentifier => {
                write!(f, "This gym has no stable identifier; cannot update it")
            }
            AppError::Geolocation(message) => write!(f, "{}", message),
            AppError::Internal(message) => write!(f, "Internal error: {}", message),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

impl AppError {
    /// 是否属于瞬态失败（传输错误或 5xx），用于附近搜索的单次受控重试
    pub fn is_transient(&self) -> bool {
        match self {
            AppError::Network { status: None, .. } => true,
            AppError::Network {
                status: Some(status),
                ..
            } => *status >= 500,
            _ => false,
        }
    }
}
