use serde::{Deserialize, Serialize};

/// 议程中的单个环节
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgendaSessionRecord {
    /// 环节唯一标识
    pub id: String,

    /// 开始时间（HH:MM）
    pub start_time: String,

    /// 结束时间（HH:MM）
    pub end_time: String,

    /// 标题
    pub title: String,

    /// 描述
    #[serde(default)]
    pub description: Option<String>,

    /// 环节类型，如 keynote、break、panel
    #[serde(default = "default_session_type")]
    pub session_type: String,

    /// 地点
    #[serde(default)]
    pub location: Option<String>,

    /// 主讲嘉宾
    #[serde(default)]
    pub speaker_id: Option<String>,
}

fn default_session_type() -> String {
    "session".to_string()
}

/// 议程日
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgendaDayRecord {
    /// 议程日唯一标识
    pub id: String,

    /// 所属活动
    pub event_id: String,

    /// 第几天（从 1 开始）
    pub day_number: u32,

    /// 日期展示文本
    #[serde(default)]
    pub date: Option<String>,

    /// 当日环节，按输入顺序展示
    #[serde(default)]
    pub sessions: Vec<AgendaSessionRecord>,
}

/// 带日期标记的扁平环节，用于按天分组
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayTaggedSession {
    pub event_id: String,
    pub day_number: u32,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(flatten)]
    pub session: AgendaSessionRecord,
}
