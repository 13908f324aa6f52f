use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("word pattern is valid"));

/// Lower-case word tokens of `messages`, minus stopwords.
///
/// Messages are joined with single spaces first. Duplicates are kept and
/// tokens come back in order of appearance, so taking the first N is not a
/// frequency ranking.
pub fn tokenize_and_filter(messages: &[String], stop_words: &HashSet<String>) -> Vec<String> {
    let text = messages.join(" ").to_lowercase();

    WORD_RE
        .find_iter(&text)
        .map(|m| m.as_str())
        .filter(|word| !stop_words.contains(*word))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::FILTER_STOP_WORDS;

    fn messages(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_order_and_duplicates_kept() {
        let stop: HashSet<String> = ["the".to_string()].into_iter().collect();
        let tokens = tokenize_and_filter(&messages(&["The Cat saw", "the cat!"]), &stop);

        assert_eq!(tokens, vec!["cat", "saw", "cat"]);
    }

    #[test]
    fn test_tokens_are_clean_words() {
        let tokens = tokenize_and_filter(
            &messages(&["Hello, World! It's a RUST_lang day: 42 things?", "and I am here"]),
            &FILTER_STOP_WORDS,
        );

        assert!(!tokens.is_empty());
        for token in &tokens {
            assert_eq!(token, &token.to_lowercase());
            assert!(token.chars().all(|c| c.is_alphanumeric() || c == '_'));
            assert!(!FILTER_STOP_WORDS.contains(token));
        }
        assert!(tokens.contains(&"rust_lang".to_string()));
    }

    #[test]
    fn test_content_words_survive_filter() {
        let tokens = tokenize_and_filter(
            &messages(&[
                "User asked about information on world research and home work, looking for help with a new problem",
            ]),
            &FILTER_STOP_WORDS,
        );

        assert_eq!(
            tokens,
            vec![
                "user", "asked", "information", "world", "research", "home", "work", "looking",
                "help", "new", "problem",
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize_and_filter(&[], &FILTER_STOP_WORDS).is_empty());
    }
}
