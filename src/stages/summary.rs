use tracing::debug;

use crate::keywords::{
    extract_keywords_tfidf, tokenize_and_filter, TfIdfVectorizer, DEFAULT_TOP_N,
    FILTER_STOP_WORDS,
};
use crate::models::Summary;

/// Configuration for keyword selection
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Rank keywords with TF-IDF; otherwise take filtered tokens in text order
    pub use_tfidf: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self { use_tfidf: true }
    }
}

/// Pick at most five keywords for `messages` using the configured strategy
pub fn select_keywords(messages: &[String], config: &AnalyzerConfig) -> Vec<String> {
    let mut keywords = if config.use_tfidf {
        extract_keywords_tfidf(messages, &TfIdfVectorizer::default(), DEFAULT_TOP_N)
    } else {
        tokenize_and_filter(messages, &FILTER_STOP_WORDS)
    };
    keywords.truncate(DEFAULT_TOP_N);
    keywords
}

/// Build the summary of one conversation
pub fn generate_summary(
    user_messages: &[String],
    ai_messages: &[String],
    filename: &str,
    config: &AnalyzerConfig,
) -> Summary {
    let all_messages: Vec<String> = user_messages
        .iter()
        .chain(ai_messages.iter())
        .cloned()
        .collect();

    let keywords = select_keywords(&all_messages, config);
    debug!(
        "Summary for {}: {} keywords (tfidf={})",
        filename,
        keywords.len(),
        config.use_tfidf
    );

    Summary {
        filename: filename.to_string(),
        exchanges: user_messages.len() + ai_messages.len(),
        keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FALLBACK_TOPIC;

    fn messages(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_empty_conversation_falls_back() {
        let summary = generate_summary(&[], &[], "empty.txt", &AnalyzerConfig::default());

        assert_eq!(summary.exchanges, 0);
        assert!(summary.keywords.is_empty());
        assert_eq!(summary.topic(), FALLBACK_TOPIC);
    }

    #[test]
    fn test_tfidf_summary() {
        let summary = generate_summary(
            &messages(&["cats love cats"]),
            &messages(&["dogs love dogs"]),
            "pets.txt",
            &AnalyzerConfig::default(),
        );

        assert_eq!(summary.exchanges, 2);
        assert_eq!(summary.keywords, vec!["cats", "dogs", "love"]);
        assert_eq!(summary.topic(), "The conversation mainly revolved around 'cats'");
    }

    #[test]
    fn test_token_mode_keeps_text_order() {
        let config = AnalyzerConfig { use_tfidf: false };
        let summary = generate_summary(
            &messages(&["zebra apple zebra mango kiwi", "plum grape"]),
            &[],
            "fruit.txt",
            &config,
        );

        assert_eq!(summary.keywords, vec!["zebra", "apple", "zebra", "mango", "kiwi"]);
    }

    #[test]
    fn test_keywords_never_exceed_limit() {
        let long: Vec<String> = (0..50).map(|i| format!("word{i} term{i}")).collect();
        for use_tfidf in [true, false] {
            let config = AnalyzerConfig { use_tfidf };
            assert_eq!(generate_summary(&long, &long, "big.txt", &config).keywords.len(), 5);
        }
    }
}
