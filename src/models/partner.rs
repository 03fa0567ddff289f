use serde::{Deserialize, Serialize};

/// 合作伙伴赞助级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerCategory {
    Platinum,
    Gold,
    Silver,
    Bronze,
    Media,
    Community,
    Organizer,
    /// 未识别的级别
    #[serde(other)]
    Unknown,
}

impl From<&str> for PartnerCategory {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "platinum" => PartnerCategory::Platinum,
            "gold" => PartnerCategory::Gold,
            "silver" => PartnerCategory::Silver,
            "bronze" => PartnerCategory::Bronze,
            "media" => PartnerCategory::Media,
            "community" => PartnerCategory::Community,
            "organizer" => PartnerCategory::Organizer,
            _ => PartnerCategory::Unknown,
        }
    }
}

/// 合作伙伴记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PartnerRecord {
    /// 合作伙伴唯一标识
    pub id: String,

    /// 所属活动
    pub event_id: String,

    /// 名称
    pub name: String,

    /// Logo 地址
    #[serde(default)]
    pub logo_url: Option<String>,

    /// 官网
    #[serde(default)]
    pub website: Option<String>,

    /// 赞助级别
    pub category: PartnerCategory,
}
