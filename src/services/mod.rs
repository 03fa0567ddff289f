//! 服务层模块
//!
//! 内容适配函数与组合它们的内容服务。

pub mod adapters;
pub mod content;

pub use content::{
    ContentService, ContentServiceImpl, EventLandingPage, HomePage, create_content_service,
};
