//! 内容服务
//!
//! 按活动取回内容记录并通过适配层生成页面数据。未发布的活动对公开
//! 接口不可见。

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::error::{AppError, Result};
use crate::models::EventRecord;
use crate::services::adapters::*;
use crate::storage::repository::ContentRepository;

/// 首页数据
#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub events: Vec<EventSummary>,
}

/// 活动落地页数据
#[derive(Debug, Clone, Serialize)]
pub struct EventLandingPage {
    pub hero: EventHero,
    pub agenda: Vec<AgendaDayView>,
    pub featured_speakers: Vec<SpeakerView>,
    pub speakers: Vec<SpeakerView>,
    pub topics: Vec<TopicView>,
    pub faqs: Vec<FaqView>,
    pub resources: Vec<ResourceView>,
    pub photos: Vec<PhotoView>,
    pub partners: Vec<PartnerView>,
}

/// 内容服务 trait
#[async_trait]
pub trait ContentService: Send + Sync {
    /// 首页：已发布活动
    async fn homepage(&self) -> Result<HomePage>;

    /// 全部活动，包含未发布（管理端）
    async fn all_events(&self) -> Result<Vec<EventSummary>>;

    /// 活动落地页
    async fn landing_page(&self, key: &str) -> Result<EventLandingPage>;

    async fn agenda(&self, key: &str) -> Result<Vec<AgendaDayView>>;

    async fn speakers(&self, key: &str, featured_only: bool) -> Result<Vec<SpeakerView>>;

    async fn partners(&self, key: &str) -> Result<Vec<PartnerView>>;

    async fn topics(&self, key: &str) -> Result<Vec<TopicView>>;

    async fn resources(&self, key: &str) -> Result<Vec<ResourceView>>;

    async fn photos(&self, key: &str) -> Result<Vec<PhotoView>>;

    async fn faqs(&self, key: &str) -> Result<Vec<FaqView>>;
}

/// 内容服务实现
pub struct ContentServiceImpl {
    repository: Arc<dyn ContentRepository>,
    rng: Mutex<fastrand::Rng>,
}

impl ContentServiceImpl {
    pub fn new(repository: Arc<dyn ContentRepository>) -> Self {
        Self {
            repository,
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    /// 使用固定种子，随机报名人数可复现
    pub fn with_seed(repository: Arc<dyn ContentRepository>, seed: u64) -> Self {
        Self {
            repository,
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }

    /// 按 ID 或 slug 查找已发布活动
    async fn resolve_event(&self, key: &str) -> Result<EventRecord> {
        self.repository
            .get_event(key)
            .await?
            .filter(|event| event.published)
            .ok_or_else(|| AppError::NotFound(format!("Event not found: {}", key)))
    }

    fn adapt_topic_records(&self, topics: &[crate::models::TopicRecord]) -> Vec<TopicView> {
        let mut rng = self.rng.lock();
        adapt_topics_with_presenter(topics, &mut rng)
    }
}

#[async_trait]
impl ContentService for ContentServiceImpl {
    async fn homepage(&self) -> Result<HomePage> {
        let events = self.repository.list_events().await?;
        let events = events
            .iter()
            .filter(|e| e.published)
            .map(adapt_event_summary)
            .collect();
        Ok(HomePage { events })
    }

    async fn all_events(&self) -> Result<Vec<EventSummary>> {
        let events = self.repository.list_events().await?;
        Ok(events.iter().map(adapt_event_summary).collect())
    }

    async fn landing_page(&self, key: &str) -> Result<EventLandingPage> {
        let event = self.resolve_event(key).await?;
        debug!("Building landing page: {}", event.id);

        let speakers = self.repository.speakers_by_event(&event.id).await?;
        let agenda = self.repository.agenda_by_event(&event.id).await?;
        let partners = self.repository.partners_by_event(&event.id).await?;
        let topics = self.repository.topics_by_event(&event.id).await?;
        let resources = self.repository.resources_by_event(&event.id).await?;
        let faqs = self.repository.faqs_by_event(&event.id).await?;

        Ok(EventLandingPage {
            hero: adapt_event_hero(&event),
            agenda: adapt_agenda(&agenda, &speakers),
            featured_speakers: featured_speakers(&speakers),
            speakers: adapt_speakers(&speakers),
            topics: self.adapt_topic_records(&topics),
            faqs: adapt_faqs(&faqs),
            resources: adapt_resources(&resources),
            photos: photo_set(&resources),
            partners: adapt_partners(&partners),
        })
    }

    async fn agenda(&self, key: &str) -> Result<Vec<AgendaDayView>> {
        let event = self.resolve_event(key).await?;
        let days = self.repository.agenda_by_event(&event.id).await?;
        let speakers = self.repository.speakers_by_event(&event.id).await?;
        Ok(adapt_agenda(&days, &speakers))
    }

    async fn speakers(&self, key: &str, featured_only: bool) -> Result<Vec<SpeakerView>> {
        let event = self.resolve_event(key).await?;
        let speakers = self.repository.speakers_by_event(&event.id).await?;
        Ok(if featured_only {
            featured_speakers(&speakers)
        } else {
            adapt_speakers(&speakers)
        })
    }

    async fn partners(&self, key: &str) -> Result<Vec<PartnerView>> {
        let event = self.resolve_event(key).await?;
        let partners = self.repository.partners_by_event(&event.id).await?;
        Ok(adapt_partners(&partners))
    }

    async fn topics(&self, key: &str) -> Result<Vec<TopicView>> {
        let event = self.resolve_event(key).await?;
        let topics = self.repository.topics_by_event(&event.id).await?;
        Ok(self.adapt_topic_records(&topics))
    }

    async fn resources(&self, key: &str) -> Result<Vec<ResourceView>> {
        let event = self.resolve_event(key).await?;
        let resources = self.repository.resources_by_event(&event.id).await?;
        Ok(adapt_resources(&resources))
    }

    async fn photos(&self, key: &str) -> Result<Vec<PhotoView>> {
        let event = self.resolve_event(key).await?;
        let resources = self.repository.resources_by_event(&event.id).await?;
        Ok(photo_set(&resources))
    }

    async fn faqs(&self, key: &str) -> Result<Vec<FaqView>> {
        let event = self.resolve_event(key).await?;
        let faqs = self.repository.faqs_by_event(&event.id).await?;
        Ok(adapt_faqs(&faqs))
    }
}

/// 创建内容服务
pub fn create_content_service(repository: Arc<dyn ContentRepository>) -> Box<dyn ContentService> {
    Box::new(ContentServiceImpl::new(repository))
}
