use serde::{Deserialize, Serialize};

/// 会话用户，由 GET /user/me 返回，客户端只读
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: i64,
    pub user_username: String,
    pub user_email: String,
    pub user_role: UserRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

impl SessionUser {
    pub fn is_admin(&self) -> bool {
        self.user_role == UserRole::Admin
    }
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Serialize)]
pub struct SignupRequest {
    pub user_username: String,
    pub user_password: String,
    pub user_email: String,
    pub user_age: u8,
    pub user_gender: Gender,
}

impl SignupRequest {
    /// 本地表单校验，未通过时不发出网络请求
    pub fn validate(&self) -> Result<(), crate::error::AppError> {
        use crate::error::AppError;

        if self.user_username.chars().count() < 3 {
            return Err(AppError::Validation(
                "Username must be at least 3 characters".to_string(),
            ));
        }
        if self.user_password.chars().count() < 8 {
            return Err(AppError::Validation(
                "Password must be at least 8 characters".to_string(),
            ));
        }
        if !self.user_email.contains('@') {
            return Err(AppError::Validation("Invalid email address".to_string()));
        }
        if !(16..=80).contains(&self.user_age) {
            return Err(AppError::Validation(
                "Age must be between 16 and 80".to_string(),
            ));
        }
        Ok(())
    }
}

/// 注册成功后的返回体
#[derive(Debug, Deserialize)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub user_username: String,
    pub user_email: String,
}
