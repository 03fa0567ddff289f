//! 议题适配
//!
//! 议题记录不包含主讲人、时间和地点，统一以 "TBD" 占位。

use serde::Serialize;

use crate::models::TopicRecord;

/// 尚未确定字段的占位文本
pub const PLACEHOLDER: &str = "TBD";

/// 没有真实报名数据时随机报名人数的范围
const ENROLLMENT_RANGE: std::ops::Range<u32> = 20..150;

/// 议题分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicKind {
    Workshop,
    Panel,
    Keynote,
    Tutorial,
    Session,
}

impl From<&str> for TopicKind {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "workshop" | "workshops" | "hands-on" => TopicKind::Workshop,
            "panel" | "panels" | "panel discussion" => TopicKind::Panel,
            "keynote" | "keynotes" | "plenary" => TopicKind::Keynote,
            "tutorial" | "tutorials" | "training" => TopicKind::Tutorial,
            _ => TopicKind::Session,
        }
    }
}

/// 议题
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TopicView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: TopicKind,
    pub presenter: String,
    pub time: String,
    pub location: String,
    /// "<n> enrolled"
    pub enrollment: String,
}

/// 报名人数展示
///
/// 优先使用记录中的真实人数；缺失时从 `rng` 取一个随机值，这是唯一
/// 非确定性的展示字段。
pub fn enrollment_label(enrolled_count: Option<u32>, rng: &mut fastrand::Rng) -> String {
    let count = enrolled_count.unwrap_or_else(|| rng.u32(ENROLLMENT_RANGE));
    format!("{} enrolled", count)
}

pub fn adapt_topic(topic: &TopicRecord, rng: &mut fastrand::Rng) -> TopicView {
    TopicView {
        id: topic.id.clone(),
        title: topic.title.clone(),
        description: topic.description.clone(),
        category: TopicKind::from(topic.category.as_str()),
        presenter: PLACEHOLDER.to_string(),
        time: PLACEHOLDER.to_string(),
        location: PLACEHOLDER.to_string(),
        enrollment: enrollment_label(topic.enrolled_count, rng),
    }
}

/// 与 [`adapt_topic`] 相同，但从描述中拆出主讲人
///
/// 描述按第一个冒号拆分，冒号前为主讲人，冒号后为描述；没有冒号时
/// 主讲人为占位文本，描述保持原样。
pub fn adapt_topic_with_presenter(topic: &TopicRecord, rng: &mut fastrand::Rng) -> TopicView {
    let mut view = adapt_topic(topic, rng);

    if let Some((presenter, rest)) = topic.description.split_once(':') {
        let presenter = presenter.trim();
        if !presenter.is_empty() {
            view.presenter = presenter.to_string();
        }
        view.description = rest.trim().to_string();
    }

    view
}

pub fn adapt_topics(topics: &[TopicRecord], rng: &mut fastrand::Rng) -> Vec<TopicView> {
    topics.iter().map(|t| adapt_topic(t, rng)).collect()
}

pub fn adapt_topics_with_presenter(
    topics: &[TopicRecord],
    rng: &mut fastrand::Rng,
) -> Vec<TopicView> {
    topics
        .iter()
        .map(|t| adapt_topic_with_presenter(t, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn topic(description: &str, category: &str, enrolled: Option<u32>) -> TopicRecord {
        TopicRecord {
            id: "t1".to_string(),
            event_id: "ev1".to_string(),
            title: "Small Area Estimation".to_string(),
            description: description.to_string(),
            category: category.to_string(),
            enrolled_count: enrolled,
        }
    }

    #[test]
    fn test_placeholders() {
        let mut rng = fastrand::Rng::with_seed(7);
        let view = adapt_topic(&topic("Methods overview", "Workshop", Some(42)), &mut rng);

        assert_eq!(view.category, TopicKind::Workshop);
        assert_eq!(view.presenter, PLACEHOLDER);
        assert_eq!(view.time, PLACEHOLDER);
        assert_eq!(view.location, PLACEHOLDER);
        assert_eq!(view.description, "Methods overview");
        assert_eq!(view.enrollment, "42 enrolled");
    }

    #[rstest]
    #[case("workshop", TopicKind::Workshop)]
    #[case("  PANEL ", TopicKind::Panel)]
    #[case("Keynote", TopicKind::Keynote)]
    #[case("training", TopicKind::Tutorial)]
    #[case("", TopicKind::Session)]
    #[case("poster", TopicKind::Session)]
    fn test_category_normalization(#[case] raw: &str, #[case] expected: TopicKind) {
        assert_eq!(TopicKind::from(raw), expected);
    }

    #[test]
    fn test_presenter_split_on_first_colon() {
        let mut rng = fastrand::Rng::with_seed(7);
        let view = adapt_topic_with_presenter(
            &topic("Dr. Jane Roe: Ratios: a practical guide", "panel", Some(10)),
            &mut rng,
        );

        assert_eq!(view.presenter, "Dr. Jane Roe");
        assert_eq!(view.description, "Ratios: a practical guide");
    }

    #[test]
    fn test_presenter_without_colon() {
        let mut rng = fastrand::Rng::with_seed(7);
        let view = adapt_topic_with_presenter(&topic("No presenter here", "", Some(10)), &mut rng);

        assert_eq!(view.presenter, PLACEHOLDER);
        assert_eq!(view.description, "No presenter here");
    }

    #[test]
    fn test_random_enrollment_is_seeded() {
        let topics = vec![topic("a", "", None), topic("b", "", None)];

        let first = adapt_topics(&topics, &mut fastrand::Rng::with_seed(99));
        let second = adapt_topics(&topics, &mut fastrand::Rng::with_seed(99));
        assert_eq!(first, second);

        for view in &first {
            let count: u32 = view
                .enrollment
                .trim_end_matches(" enrolled")
                .parse()
                .unwrap();
            assert!(ENROLLMENT_RANGE.contains(&count));
        }
    }

    #[test]
    fn test_output_matches_input_length() {
        let topics = vec![topic("a: b", "", Some(1)); 5];
        let mut rng = fastrand::Rng::with_seed(1);
        assert_eq!(adapt_topics_with_presenter(&topics, &mut rng).len(), 5);
    }
}
