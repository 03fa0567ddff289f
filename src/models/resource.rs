use serde::{Deserialize, Serialize};

/// 资源类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Document,
    Presentation,
    Video,
    Image,
    Link,
    #[serde(other)]
    Other,
}

/// 下载资源记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourceRecord {
    /// 资源唯一标识
    pub id: String,

    /// 所属活动
    pub event_id: String,

    /// 标题
    pub title: String,

    /// 描述
    #[serde(default)]
    pub description: Option<String>,

    /// 资源类型
    pub resource_type: ResourceType,

    /// 资源地址
    pub url: String,

    /// 文件大小展示文本，如 "2.4 MB"
    #[serde(default)]
    pub file_size: Option<String>,
}
