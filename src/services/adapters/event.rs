//! 活动适配
//!
//! 首页卡片使用 [`EventSummary`]，落地页首屏使用 [`EventHero`]。

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::EventRecord;

/// 首页活动卡片
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EventSummary {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub dates: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub published: bool,
}

/// 落地页首屏
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EventHero {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub dates: String,
    pub location: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

/// 日期范围展示，如 "September 10 - 12, 2025"
pub fn date_range(start: NaiveDate, end: NaiveDate) -> String {
    if start == end {
        return start.format("%B %-d, %Y").to_string();
    }

    if start.format("%Y-%m").to_string() == end.format("%Y-%m").to_string() {
        format!("{} - {}", start.format("%B %-d"), end.format("%-d, %Y"))
    } else if start.format("%Y").to_string() == end.format("%Y").to_string() {
        format!("{} - {}", start.format("%B %-d"), end.format("%B %-d, %Y"))
    } else {
        format!(
            "{} - {}",
            start.format("%B %-d, %Y"),
            end.format("%B %-d, %Y")
        )
    }
}

/// 地点展示，"场馆, 城市"
pub fn location_line(event: &EventRecord) -> String {
    [event.venue.as_deref(), event.city.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn adapt_event_summary(event: &EventRecord) -> EventSummary {
    EventSummary {
        id: event.id.clone(),
        slug: event.slug.clone(),
        name: event.name.clone(),
        dates: date_range(event.start_date, event.end_date),
        location: location_line(event),
        image: event.hero_image.clone(),
        published: event.published,
    }
}

pub fn adapt_event_hero(event: &EventRecord) -> EventHero {
    EventHero {
        id: event.id.clone(),
        slug: event.slug.clone(),
        title: event.name.clone(),
        subtitle: event.tagline.clone().unwrap_or_default(),
        description: event.description.clone().unwrap_or_default(),
        dates: date_range(event.start_date, event.end_date),
        location: location_line(event),
        start_date: event.start_date,
        end_date: event.end_date,
        registration_url: event.registration_url.clone(),
        background_image: event.hero_image.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_range_formats() {
        assert_eq!(
            date_range(date(2025, 9, 10), date(2025, 9, 12)),
            "September 10 - 12, 2025"
        );
        assert_eq!(
            date_range(date(2025, 9, 30), date(2025, 10, 2)),
            "September 30 - October 2, 2025"
        );
        assert_eq!(
            date_range(date(2025, 12, 31), date(2026, 1, 1)),
            "December 31, 2025 - January 1, 2026"
        );
        assert_eq!(date_range(date(2025, 5, 4), date(2025, 5, 4)), "May 4, 2025");
    }

    #[test]
    fn test_location_line() {
        let mut event = EventRecord {
            id: "ev1".to_string(),
            slug: "ncs-2025".to_string(),
            name: "NCS 2025".to_string(),
            tagline: None,
            description: None,
            start_date: date(2025, 9, 10),
            end_date: date(2025, 9, 12),
            venue: Some("Convention Centre".to_string()),
            city: Some("Ottawa".to_string()),
            registration_url: None,
            hero_image: None,
            published: true,
        };
        assert_eq!(location_line(&event), "Convention Centre, Ottawa");

        event.venue = None;
        assert_eq!(location_line(&event), "Ottawa");

        let hero = adapt_event_hero(&event);
        assert_eq!(hero.subtitle, "");
        assert_eq!(hero.title, "NCS 2025");
    }
}
