pub mod stopwords;
pub mod tfidf;
pub mod tokenize;

pub use stopwords::*;
pub use tfidf::*;
pub use tokenize::*;

/// Keyword lists are cut to this length by default
pub const DEFAULT_TOP_N: usize = 5;
