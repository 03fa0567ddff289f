//! 存储层模块
//!
//! 提供内容仓储（只读，按活动查询）和会话令牌使用的键值存储。

pub mod factory;
pub mod kv;
pub mod repository;

pub use factory::StorageFactory;
pub use kv::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use repository::{ContentRepository, ContentSeed, InMemoryContentRepository};
