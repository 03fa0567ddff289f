//! DTO 模块
//!
//! 数据传输对象，用于 API 请求和响应的序列化。

pub mod admin_dto;
pub mod content_dto;

pub use admin_dto::*;
pub use content_dto::*;
