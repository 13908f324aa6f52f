pub mod chat_log;
pub mod report;

pub use chat_log::*;
pub use report::*;
