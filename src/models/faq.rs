use serde::{Deserialize, Serialize};

/// 常见问题记录
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaqRecord {
    pub id: String,
    pub event_id: String,
    pub question: String,
    pub answer: String,
}
