//! 内容 DTO
//!
//! 内容接口直接返回适配层的展示模型，这里只定义查询参数。

use serde::Deserialize;

/// 嘉宾查询参数
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct SpeakersParams {
    /// 只返回重点嘉宾
    pub featured: Option<bool>,
}
