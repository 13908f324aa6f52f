pub mod error;
pub mod io;
pub mod keywords;
pub mod models;
pub mod stages;

pub use error::{ChatLogError, Result};
pub use io::{
    format_report, list_chat_logs, parse_chat_log, parse_chat_log_file, write_report, FileOrder,
    OutputFormat,
};
pub use keywords::{extract_keywords_tfidf, tokenize_and_filter, TfIdfVectorizer};
pub use models::{ChatLog, FileReport, MessageStats, Speaker, Summary};
pub use stages::{
    analyze_chat_log, build_report, generate_summary, message_stats, summarize_folder,
    AnalyzerConfig, FolderConfig, FolderResult,
};
