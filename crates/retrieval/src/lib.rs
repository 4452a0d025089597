//! Document retrieval for the campus assistant
//!
//! Two complementary paths over the document collection:
//! - `RelevanceRanker` - TF-IDF cosine scoring against free-text queries
//! - `HierarchicalFilter` - deterministic subject → unit → type narrowing
//!
//! Plus the single-pair `similarity` scorer and `FaqMatcher` used for
//! FAQ best-match lookup. All paths return empty results on degenerate
//! input rather than erroring; a miss is a reply, not a fault.

pub mod filter;
pub mod ranker;
pub mod stopwords;
pub mod tfidf;

pub use filter::HierarchicalFilter;
pub use ranker::{FaqMatcher, RankerConfig, RelevanceRanker};
pub use tfidf::{cosine, similarity, TfIdfVectorizer};
