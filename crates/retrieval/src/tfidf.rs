//! TF-IDF vectorization and cosine similarity
//!
//! Term-frequency/inverse-document-frequency weighting over a
//! stopword-filtered vocabulary, with smoothed IDF
//! (ln((1 + n) / (1 + df)) + 1) and L2-normalized vectors, so cosine
//! similarity is a plain dot product of the normalized vectors.

use std::collections::HashMap;

use unicode_segmentation::UnicodeSegmentation;

use crate::stopwords::is_stopword;

/// Tokenize for vectorization: unicode words, lowercased, stopwords and
/// single-character tokens removed
pub fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words()
        .map(|w| w.to_lowercase())
        .filter(|w| w.chars().count() >= 2 && !is_stopword(w))
        .collect()
}

/// TF-IDF vectorizer fitted over one corpus
pub struct TfIdfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfIdfVectorizer {
    /// Fit over a corpus; `None` when the corpus produces an empty
    /// vocabulary (no candidates, or nothing but stopwords)
    pub fn fit<S: AsRef<str>>(corpus: &[S]) -> Option<Self> {
        if corpus.is_empty() {
            return None;
        }

        let tokenized: Vec<Vec<String>> =
            corpus.iter().map(|text| tokenize(text.as_ref())).collect();

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut doc_freq: Vec<usize> = Vec::new();

        for tokens in &tokenized {
            let mut seen: Vec<usize> = Vec::new();
            for token in tokens {
                let index = match vocabulary.get(token) {
                    Some(&index) => index,
                    None => {
                        let index = vocabulary.len();
                        vocabulary.insert(token.clone(), index);
                        doc_freq.push(0);
                        index
                    }
                };
                if !seen.contains(&index) {
                    seen.push(index);
                    doc_freq[index] += 1;
                }
            }
        }

        if vocabulary.is_empty() {
            return None;
        }

        let n = corpus.len() as f64;
        let idf = doc_freq
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();

        Some(Self { vocabulary, idf })
    }

    /// L2-normalized TF-IDF vector for a text
    pub fn vector(&self, text: &str) -> Vec<f64> {
        let mut vector = vec![0.0; self.vocabulary.len()];

        for token in tokenize(text) {
            if let Some(&index) = self.vocabulary.get(&token) {
                vector[index] += 1.0;
            }
        }

        for (index, value) in vector.iter_mut().enumerate() {
            *value *= self.idf[index];
        }

        let norm = vector.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in vector.iter_mut() {
                *value /= norm;
            }
        }

        vector
    }
}

/// Cosine of two equal-length normalized vectors
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Single-pair similarity in [0, 1]
///
/// Fits a throwaway vectorizer over the two texts; degenerate input
/// (either side empty after tokenization) scores 0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let Some(vectorizer) = TfIdfVectorizer::fit(&[a, b]) else {
        return 0.0;
    };
    let va = vectorizer.vector(a);
    let vb = vectorizer.vector(b);
    cosine(&va, &vb).clamp(0.0, 1.0)
}
