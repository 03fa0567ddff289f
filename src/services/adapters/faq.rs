//! 常见问题适配

use serde::Serialize;

use crate::models::FaqRecord;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FaqView {
    pub id: String,
    pub question: String,
    pub answer: String,
}

pub fn adapt_faqs(faqs: &[FaqRecord]) -> Vec<FaqView> {
    faqs.iter()
        .map(|f| FaqView {
            id: f.id.clone(),
            question: f.question.clone(),
            answer: f.answer.clone(),
        })
        .collect()
}
