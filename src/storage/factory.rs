//! 存储工厂模块
//!
//! 根据配置创建会话令牌使用的键值存储，以及内容仓储。

use std::sync::Arc;
use tracing::info;

use crate::config::config::{AdminConfig, ContentConfig, StorageBackend};
use crate::error::Result;
use crate::storage::kv::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
use crate::storage::repository::{ContentRepository, InMemoryContentRepository};

/// 存储工厂
pub struct StorageFactory;

impl StorageFactory {
    /// 根据管理员配置创建键值存储
    pub async fn create_kv_store(config: &AdminConfig) -> Result<Arc<dyn KeyValueStore>> {
        match config.storage {
            StorageBackend::Memory => {
                info!("Using in-memory session storage");
                Ok(Arc::new(MemoryKeyValueStore::new()))
            }
            StorageBackend::File => {
                info!(path = %config.storage_path.display(), "Using file session storage");
                Ok(Arc::new(FileKeyValueStore::open(&config.storage_path).await?))
            }
        }
    }

    /// 根据内容配置创建内容仓储，未配置种子文件时为空仓储
    pub async fn create_content_repository(
        config: &ContentConfig,
    ) -> Result<Arc<dyn ContentRepository>> {
        match &config.seed_path {
            Some(path) => {
                let repository = InMemoryContentRepository::from_file(path).await?;
                info!(
                    path = %path.display(),
                    events = repository.event_count(),
                    "Content seed loaded"
                );
                Ok(Arc::new(repository))
            }
            None => {
                info!("No content seed configured, starting with empty content");
                Ok(Arc::new(InMemoryContentRepository::default()))
            }
        }
    }
}
