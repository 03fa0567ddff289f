use serde::{Deserialize, Serialize};

/// 演讲嘉宾记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpeakerRecord {
    /// 嘉宾唯一标识
    pub id: String,

    /// 所属活动
    pub event_id: String,

    /// 姓名
    pub name: String,

    /// 职务
    #[serde(default)]
    pub title: Option<String>,

    /// 所属机构
    #[serde(default)]
    pub organization: Option<String>,

    /// 个人简介
    #[serde(default)]
    pub bio: Option<String>,

    /// 头像地址
    #[serde(default)]
    pub photo_url: Option<String>,

    /// 是否在首页重点展示
    #[serde(default)]
    pub featured: bool,
}
