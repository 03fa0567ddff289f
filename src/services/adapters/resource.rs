//! 资源适配

use serde::Serialize;

use crate::models::{ResourceRecord, ResourceType};

/// 未提供文件大小时的默认展示
pub const DEFAULT_FILE_SIZE: &str = "N/A";

/// 下载资源
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResourceView {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub download_url: String,
    pub file_size: String,
}

/// 相册中的一张照片
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PhotoView {
    pub id: String,
    pub src: String,
    pub caption: String,
}

pub fn adapt_resource(resource: &ResourceRecord) -> ResourceView {
    ResourceView {
        id: resource.id.clone(),
        title: resource.title.clone(),
        description: resource.description.clone().unwrap_or_default(),
        kind: resource.resource_type,
        download_url: resource.url.clone(),
        file_size: resource
            .file_size
            .clone()
            .unwrap_or_else(|| DEFAULT_FILE_SIZE.to_string()),
    }
}

pub fn adapt_resources(resources: &[ResourceRecord]) -> Vec<ResourceView> {
    resources.iter().map(adapt_resource).collect()
}

/// 只保留图片类资源，组成活动相册
pub fn photo_set(resources: &[ResourceRecord]) -> Vec<PhotoView> {
    resources
        .iter()
        .filter(|r| r.resource_type == ResourceType::Image)
        .map(|r| PhotoView {
            id: r.id.clone(),
            src: r.url.clone(),
            caption: r.description.clone().unwrap_or_else(|| r.title.clone()),
        })
        .collect()
}
