use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::VECTORIZER_STOP_WORDS;

static TERM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("term pattern is valid"));

/// Fitted TF-IDF weights: one row per document, one column per vocabulary term
#[derive(Debug, Clone, Default)]
pub struct TfIdfMatrix {
    /// Vocabulary in alphabetical order
    pub vocabulary: Vec<String>,
    /// L2-normalized weights, indexed `[document][term]`
    pub rows: Vec<Vec<f64>>,
}

impl TfIdfMatrix {
    /// Terms of one document with non-zero weight, highest first.
    ///
    /// Equal weights keep vocabulary (alphabetical) order.
    pub fn ranked_terms(&self, document: usize) -> Vec<(String, f64)> {
        let Some(row) = self.rows.get(document) else {
            return Vec::new();
        };

        let mut scored: Vec<(String, f64)> = self
            .vocabulary
            .iter()
            .zip(row.iter())
            .filter(|(_, weight)| **weight > 0.0)
            .map(|(term, weight)| (term.clone(), *weight))
            .collect();
        // sort_by is stable
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored
    }
}

/// TF-IDF vectorizer with its own stopword list.
///
/// Terms are lower-cased runs of two or more word characters. Weights are raw
/// term counts times the smoothed idf `ln((1 + n) / (1 + df)) + 1`, and each
/// row is L2-normalized. The vocabulary is sorted, so equal weights rank
/// alphabetically.
#[derive(Debug, Clone, Copy)]
pub struct TfIdfVectorizer<'a> {
    pub stop_words: &'a HashSet<String>,
}

impl Default for TfIdfVectorizer<'static> {
    fn default() -> Self {
        Self {
            stop_words: &VECTORIZER_STOP_WORDS,
        }
    }
}

impl<'a> TfIdfVectorizer<'a> {
    pub fn new(stop_words: &'a HashSet<String>) -> Self {
        Self { stop_words }
    }

    /// Lower-case, split into terms and drop stopwords
    pub fn analyze(&self, document: &str) -> Vec<String> {
        let lower = document.to_lowercase();
        TERM_RE
            .find_iter(&lower)
            .map(|m| m.as_str())
            .filter(|term| !self.stop_words.contains(*term))
            .map(str::to_string)
            .collect()
    }

    /// Learn the vocabulary and idf of `documents` and return their weights
    pub fn fit_transform(&self, documents: &[String]) -> TfIdfMatrix {
        let counts: Vec<BTreeMap<String, usize>> = documents
            .iter()
            .map(|doc| {
                let mut tf = BTreeMap::new();
                for term in self.analyze(doc) {
                    *tf.entry(term).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for tf in &counts {
            for term in tf.keys() {
                *document_frequency.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let n = documents.len() as f64;
        let vocabulary: Vec<String> = document_frequency.keys().map(|t| t.to_string()).collect();
        let idf: Vec<f64> = document_frequency
            .values()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        let rows = counts
            .iter()
            .map(|tf| {
                let mut row: Vec<f64> = vocabulary
                    .iter()
                    .zip(idf.iter())
                    .map(|(term, idf)| tf.get(term).copied().unwrap_or(0) as f64 * idf)
                    .collect();
                let norm = row.iter().map(|w| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    row.iter_mut().for_each(|w| *w /= norm);
                }
                row
            })
            .collect();

        debug!(
            "Vectorized {} documents, vocabulary of {} terms",
            documents.len(),
            vocabulary.len()
        );

        TfIdfMatrix { vocabulary, rows }
    }
}

/// Top `top_n` keywords of `messages`, weighted as one single document.
///
/// With a one-document corpus every idf is equal, so the ranking is by term
/// frequency. Empty input, or input made only of stopwords, gives an empty
/// list.
pub fn extract_keywords_tfidf(
    messages: &[String],
    vectorizer: &TfIdfVectorizer<'_>,
    top_n: usize,
) -> Vec<String> {
    let corpus = vec![messages.join(" ")];
    let matrix = vectorizer.fit_transform(&corpus);

    matrix
        .ranked_terms(0)
        .into_iter()
        .take(top_n)
        .map(|(term, _)| term)
        .collect()
}
