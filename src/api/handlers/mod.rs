//! Handlers 模块
//!
//! 处理 HTTP 请求。

pub mod admin_handler;
pub mod content_handler;
