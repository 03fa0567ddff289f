//! 管理端 DTO
//!
//! 定义管理员登录和会话相关的请求和响应数据结构。

use serde::{Deserialize, Serialize};

/// 登录请求
#[derive(Deserialize)]
pub struct LoginRequest {
    /// 用户名
    pub username: String,
    /// 密码
    pub password: String,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// 登录响应
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// 是否成功
    pub success: bool,
    /// 失败原因
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// 会话令牌，后续请求以 Bearer 方式携带
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// 会话状态响应
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionStatusResponse {
    /// 是否处于登录状态
    pub authenticated: bool,
}

/// 刷新响应
#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshResponse {
    /// 是否刷新成功
    pub refreshed: bool,
    /// 刷新后的令牌
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
