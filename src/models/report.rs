use serde::Serialize;

use super::ChatLog;

/// Topic sentence used when no keyword survives extraction
pub const FALLBACK_TOPIC: &str = "The conversation covered general topics";

/// Message counts for one chat log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MessageStats {
    pub total: usize,
    pub user: usize,
    pub ai: usize,
}

/// Heuristic summary of a single chat log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// File name the summary refers to
    pub filename: String,
    /// Total number of utterances from both speakers
    pub exchanges: usize,
    /// Keywords in ranked order
    pub keywords: Vec<String>,
}

impl Summary {
    /// One-sentence topic guess built from the highest ranked keyword
    pub fn topic(&self) -> String {
        match self.keywords.first() {
            Some(keyword) => format!("The conversation mainly revolved around '{}'", keyword),
            None => FALLBACK_TOPIC.to_string(),
        }
    }
}

/// Everything printed for one chat log
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub filename: String,
    #[serde(flatten)]
    pub log: ChatLog,
    pub stats: MessageStats,
    /// TF-IDF keywords, independent of the summary keyword mode
    pub top_keywords: Vec<String>,
    pub summary: Summary,
}
