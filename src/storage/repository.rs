use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{AppError, Result};
use crate::models::{
    AgendaDayRecord, EventRecord, FaqRecord, PartnerRecord, ResourceRecord, SpeakerRecord,
    TopicRecord,
};

/// 内容仓储 trait
///
/// 所有查询都以活动 ID 为参数，返回已完整取回的记录，顺序与存储中一致。
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// 列出全部活动（包含未发布）
    async fn list_events(&self) -> Result<Vec<EventRecord>>;

    /// 根据 ID 或 slug 获取活动
    async fn get_event(&self, key: &str) -> Result<Option<EventRecord>>;

    async fn speakers_by_event(&self, event_id: &str) -> Result<Vec<SpeakerRecord>>;

    async fn agenda_by_event(&self, event_id: &str) -> Result<Vec<AgendaDayRecord>>;

    async fn partners_by_event(&self, event_id: &str) -> Result<Vec<PartnerRecord>>;

    async fn topics_by_event(&self, event_id: &str) -> Result<Vec<TopicRecord>>;

    async fn resources_by_event(&self, event_id: &str) -> Result<Vec<ResourceRecord>>;

    async fn faqs_by_event(&self, event_id: &str) -> Result<Vec<FaqRecord>>;
}

/// 内容种子文档
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContentSeed {
    pub events: Vec<EventRecord>,
    pub speakers: Vec<SpeakerRecord>,
    pub agenda_days: Vec<AgendaDayRecord>,
    pub partners: Vec<PartnerRecord>,
    pub topics: Vec<TopicRecord>,
    pub resources: Vec<ResourceRecord>,
    pub faqs: Vec<FaqRecord>,
}

/// 内存内容仓储
#[derive(Debug, Clone, Default)]
pub struct InMemoryContentRepository {
    seed: ContentSeed,
}

impl InMemoryContentRepository {
    pub fn new(seed: ContentSeed) -> Self {
        Self { seed }
    }

    /// 从 JSON 种子文件加载
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        let seed: ContentSeed = serde_json::from_str(&raw)?;
        Ok(Self::new(seed))
    }

    /// 活动数量
    pub fn event_count(&self) -> usize {
        self.seed.events.len()
    }
}

fn by_event<T: Clone>(records: &[T], event_id: &str, key: impl Fn(&T) -> &str) -> Vec<T> {
    records
        .iter()
        .filter(|record| key(record) == event_id)
        .cloned()
        .collect()
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn list_events(&self) -> Result<Vec<EventRecord>> {
        Ok(self.seed.events.clone())
    }

    async fn get_event(&self, key: &str) -> Result<Option<EventRecord>> {
        Ok(self.seed.events.iter().find(|e| e.matches(key)).cloned())
    }

    async fn speakers_by_event(&self, event_id: &str) -> Result<Vec<SpeakerRecord>> {
        Ok(by_event(&self.seed.speakers, event_id, |s| s.event_id.as_str()))
    }

    async fn agenda_by_event(&self, event_id: &str) -> Result<Vec<AgendaDayRecord>> {
        Ok(by_event(&self.seed.agenda_days, event_id, |d| d.event_id.as_str()))
    }

    async fn partners_by_event(&self, event_id: &str) -> Result<Vec<PartnerRecord>> {
        Ok(by_event(&self.seed.partners, event_id, |p| p.event_id.as_str()))
    }

    async fn topics_by_event(&self, event_id: &str) -> Result<Vec<TopicRecord>> {
        Ok(by_event(&self.seed.topics, event_id, |t| t.event_id.as_str()))
    }

    async fn resources_by_event(&self, event_id: &str) -> Result<Vec<ResourceRecord>> {
        Ok(by_event(&self.seed.resources, event_id, |r| r.event_id.as_str()))
    }

    async fn faqs_by_event(&self, event_id: &str) -> Result<Vec<FaqRecord>> {
        Ok(by_event(&self.seed.faqs, event_id, |f| f.event_id.as_str()))
    }
}
