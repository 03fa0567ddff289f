//! 嘉宾适配

use serde::Serialize;

use crate::models::SpeakerRecord;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SpeakerView {
    pub id: String,
    pub name: String,
    /// "职务, 机构"，两者都缺失时为空
    pub role: String,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub featured: bool,
}

pub fn adapt_speaker(speaker: &SpeakerRecord) -> SpeakerView {
    let role = [speaker.title.as_deref(), speaker.organization.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    SpeakerView {
        id: speaker.id.clone(),
        name: speaker.name.clone(),
        role,
        bio: speaker.bio.clone().unwrap_or_default(),
        image: speaker.photo_url.clone(),
        featured: speaker.featured,
    }
}

pub fn adapt_speakers(speakers: &[SpeakerRecord]) -> Vec<SpeakerView> {
    speakers.iter().map(adapt_speaker).collect()
}

/// 只保留首页重点展示的嘉宾
pub fn featured_speakers(speakers: &[SpeakerRecord]) -> Vec<SpeakerView> {
    speakers
        .iter()
        .filter(|s| s.featured)
        .map(adapt_speaker)
        .collect()
}
