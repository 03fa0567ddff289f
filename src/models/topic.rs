use serde::{Deserialize, Serialize};

/// 议题记录
///
/// `category` 是自由文本，内容编辑可以随意填写，由适配层归一化。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopicRecord {
    /// 议题唯一标识
    pub id: String,

    /// 所属活动
    pub event_id: String,

    /// 标题
    pub title: String,

    /// 描述，部分议题以 "主讲人: 内容" 的形式书写
    #[serde(default)]
    pub description: String,

    /// 分类
    #[serde(default)]
    pub category: String,

    /// 已报名人数
    #[serde(default)]
    pub enrolled_count: Option<u32>,
}
