use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 会议活动记录
///
/// 每个活动拥有独立的落地页，其余内容记录通过 `event_id` 关联到它。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventRecord {
    /// 活动唯一标识
    pub id: String,

    /// URL 友好的短名称
    pub slug: String,

    /// 活动名称
    pub name: String,

    /// 标语
    #[serde(default)]
    pub tagline: Option<String>,

    /// 活动简介
    #[serde(default)]
    pub description: Option<String>,

    /// 开始日期
    pub start_date: NaiveDate,

    /// 结束日期
    pub end_date: NaiveDate,

    /// 场馆
    #[serde(default)]
    pub venue: Option<String>,

    /// 城市
    #[serde(default)]
    pub city: Option<String>,

    /// 报名链接
    #[serde(default)]
    pub registration_url: Option<String>,

    /// 首屏背景图
    #[serde(default)]
    pub hero_image: Option<String>,

    /// 是否对外发布
    #[serde(default)]
    pub published: bool,
}

impl EventRecord {
    /// 按 ID 或 slug 匹配
    pub fn matches(&self, key: &str) -> bool {
        self.id == key || self.slug == key
    }
}
