//! 合作伙伴适配

use serde::Serialize;

use crate::models::{PartnerCategory, PartnerRecord};

/// 合作伙伴展示分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PartnerKind {
    Sponsor,
    Partner,
    Organizer,
}

impl PartnerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartnerKind::Sponsor => "sponsor",
            PartnerKind::Partner => "partner",
            PartnerKind::Organizer => "organizer",
        }
    }
}

impl From<PartnerCategory> for PartnerKind {
    fn from(category: PartnerCategory) -> Self {
        match category {
            PartnerCategory::Platinum
            | PartnerCategory::Gold
            | PartnerCategory::Silver
            | PartnerCategory::Bronze => PartnerKind::Sponsor,
            PartnerCategory::Media | PartnerCategory::Community => PartnerKind::Partner,
            PartnerCategory::Organizer => PartnerKind::Organizer,
            PartnerCategory::Unknown => PartnerKind::Partner,
        }
    }
}

/// 合作伙伴
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PartnerView {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(rename = "type")]
    pub kind: PartnerKind,
    /// 原始赞助级别，用于同类内部排序展示
    pub tier: PartnerCategory,
}

pub fn adapt_partner(partner: &PartnerRecord) -> PartnerView {
    PartnerView {
        id: partner.id.clone(),
        name: partner.name.clone(),
        logo: partner.logo_url.clone(),
        website: partner.website.clone(),
        kind: partner.category.into(),
        tier: partner.category,
    }
}

pub fn adapt_partners(partners: &[PartnerRecord]) -> Vec<PartnerView> {
    partners.iter().map(adapt_partner).collect()
}
