//! Statcon - 统计机构会议网站的内容与管理员会话服务
//!
//! 为会议首页和各活动落地页提供内容数据（议程、嘉宾、议题、资源、合作伙伴、
//! 常见问题），并提供轻量的管理员登录会话。

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod security;
pub mod services;
pub mod storage;
