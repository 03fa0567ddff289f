//! 议程适配

use serde::Serialize;
use std::collections::HashMap;

use crate::models::{AgendaDayRecord, AgendaSessionRecord, DayTaggedSession, SpeakerRecord};

/// 未填写地点时的默认展示
pub const DEFAULT_LOCATION: &str = "Main Hall";

/// 议程条目
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AgendaItemView {
    /// "HH:MM - HH:MM"
    pub time: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker: Option<String>,
}

/// 议程日
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AgendaDayView {
    /// "Day N"
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub events: Vec<AgendaItemView>,
}

/// 适配整个活动的议程
///
/// `speakers` 用于把 `speaker_id` 解析为嘉宾姓名；没有 `speaker_id`
/// 或找不到对应嘉宾时 `speaker` 为空。
pub fn adapt_agenda(days: &[AgendaDayRecord], speakers: &[SpeakerRecord]) -> Vec<AgendaDayView> {
    let names: HashMap<&str, &str> = speakers
        .iter()
        .map(|s| (s.id.as_str(), s.name.as_str()))
        .collect();

    days.iter().map(|day| adapt_day(day, &names)).collect()
}

fn adapt_day(day: &AgendaDayRecord, names: &HashMap<&str, &str>) -> AgendaDayView {
    AgendaDayView {
        title: format!("Day {}", day.day_number),
        date: day.date.clone(),
        events: day
            .sessions
            .iter()
            .map(|session| adapt_session(session, names))
            .collect(),
    }
}

fn adapt_session(session: &AgendaSessionRecord, names: &HashMap<&str, &str>) -> AgendaItemView {
    AgendaItemView {
        time: format!("{} - {}", session.start_time, session.end_time),
        title: session.title.clone(),
        description: session.description.clone().unwrap_or_default(),
        kind: session.session_type.clone(),
        location: session
            .location
            .clone()
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
        speaker: session
            .speaker_id
            .as_deref()
            .and_then(|id| names.get(id))
            .map(|name| name.to_string()),
    }
}

/// 把带日期标记的扁平环节列表分组为议程日
///
/// 议程日按首次出现的顺序排列，同一天内的环节保持输入顺序。
pub fn group_sessions_by_day(sessions: Vec<DayTaggedSession>) -> Vec<AgendaDayRecord> {
    let mut days: Vec<AgendaDayRecord> = Vec::new();

    for tagged in sessions {
        let position = days
            .iter()
            .position(|d| d.event_id == tagged.event_id && d.day_number == tagged.day_number);

        match position {
            Some(index) => {
                let day = &mut days[index];
                if day.date.is_none() {
                    day.date = tagged.date;
                }
                day.sessions.push(tagged.session);
            }
            None => days.push(AgendaDayRecord {
                id: format!("{}-day-{}", tagged.event_id, tagged.day_number),
                event_id: tagged.event_id,
                day_number: tagged.day_number,
                date: tagged.date,
                sessions: vec![tagged.session],
            }),
        }
    }

    days
}
