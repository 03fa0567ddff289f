//! 内容数据模型模块
//!
//! 定义内容存储中的原始记录：Event, Speaker, AgendaDay, Partner, Topic, Resource, Faq。
//! 记录只读，由内容适配层投影为展示模型。

pub mod agenda;
pub mod event;
pub mod faq;
pub mod partner;
pub mod resource;
pub mod speaker;
pub mod topic;

pub use agenda::*;
pub use event::*;
pub use faq::*;
pub use partner::*;
pub use resource::*;
pub use speaker::*;
pub use topic::*;
