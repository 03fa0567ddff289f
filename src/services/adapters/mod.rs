//! 内容适配层
//!
//! 纯函数：把内容存储中的原始记录映射为页面组件使用的展示模型。
//! 除调用方显式筛选外，输出与输入一一对应且顺序不变。

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
