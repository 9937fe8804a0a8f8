use indexmap::{IndexMap, IndexSet};

use crate::utils::sort::top_k_by_count;
use crate::vectorizer::token::TokenFrequency;

/// Per-term statistics across the whole collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TermStats {
    /// Number of documents containing the term
    pub doc_count: u64,
    /// Total occurrences across all documents
    pub total_count: u64,
}

/// Document count and term statistics for one (query, corpus) collection.
/// Terms are kept in first-seen order: query first, then corpus documents in
/// order, tokens left to right.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    doc_num: u64,
    term_stats: IndexMap<Box<str>, TermStats>,
}

impl Corpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from documents in collection order
    pub fn from_docs<'a, I>(docs: I) -> Self
    where
        I: IntoIterator<Item = &'a TokenFrequency>,
    {
        let mut corpus = Corpus::new();
        for doc in docs {
            corpus.add_doc(doc);
        }
        corpus
    }

    /// Add a document's tokens to the corpus
    pub fn add_doc(&mut self, doc: &TokenFrequency) {
        self.doc_num += 1;
        for (token, count) in doc.iter() {
            let stats = self.term_stats.entry(Box::from(token)).or_default();
            stats.doc_count += 1;
            stats.total_count += u64::from(count);
        }
    }

    /// Number of documents in the corpus
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Number of documents containing `term`
    #[inline]
    pub fn doc_count(&self, term: &str) -> u64 {
        self.term_stats.get(term).map_or(0, |s| s.doc_count)
    }

    /// Occurrences of `term` across all documents
    #[inline]
    pub fn total_count(&self, term: &str) -> u64 {
        self.term_stats.get(term).map_or(0, |s| s.total_count)
    }

    /// Number of distinct terms
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_stats.len()
    }

    /// Build a vocabulary of at most `max_features` terms.
    ///
    /// Keeps the terms with the highest total count; equal counts are broken
    /// by first-seen order. Column indices follow first-seen order.
    pub fn vocabulary(&self, max_features: usize) -> Vocabulary {
        let counts: Vec<u64> = self.term_stats.values().map(|s| s.total_count).collect();
        let terms = top_k_by_count(&counts, max_features)
            .into_iter()
            .filter_map(|pos| self.term_stats.get_index(pos).map(|(term, _)| term.clone()))
            .collect();
        Vocabulary { terms }
    }
}

/// Term to dense column index mapping, scoped to one ranking call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    terms: IndexSet<Box<str>>,
}

impl Vocabulary {
    /// Column index of `term`
    #[inline]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.terms.get_index_of(term)
    }

    /// Term at column `index`
    #[inline]
    pub fn term(&self, index: usize) -> Option<&str> {
        self.terms.get_index(index).map(|t| t.as_ref())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in column order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(texts: &[&str]) -> Vec<TokenFrequency> {
        texts.iter().map(|t| TokenFrequency::from_text(t)).collect()
    }

    #[test]
    fn counts_documents_and_terms() {
        let docs = docs(&["fraud detection fraud", "fraud networks", "gardening"]);
        let corpus = Corpus::from_docs(&docs);
        assert_eq!(corpus.doc_num(), 3);
        assert_eq!(corpus.doc_count("fraud"), 2);
        assert_eq!(corpus.total_count("fraud"), 3);
        assert_eq!(corpus.doc_count("missing"), 0);
        assert_eq!(corpus.vocab_size(), 4);
    }

    #[test]
    fn vocabulary_keeps_first_seen_order() {
        let docs = docs(&["beta alpha", "gamma alpha"]);
        let vocab = Corpus::from_docs(&docs).vocabulary(10);
        let terms: Vec<&str> = vocab.iter().collect();
        assert_eq!(terms, vec!["beta", "alpha", "gamma"]);
        assert_eq!(vocab.index_of("gamma"), Some(2));
        assert_eq!(vocab.term(0), Some("beta"));
    }

    #[test]
    fn vocabulary_cap_prefers_frequent_terms() {
        let docs = docs(&["rare common", "common frequent", "frequent common"]);
        let vocab = Corpus::from_docs(&docs).vocabulary(2);
        let terms: Vec<&str> = vocab.iter().collect();
        assert_eq!(terms, vec!["common", "frequent"]);
        assert_eq!(vocab.index_of("rare"), None);
    }

    #[test]
    fn vocabulary_cap_breaks_ties_by_first_seen() {
        // every term occurs once; the first two encountered survive
        let docs = docs(&["zeta eta", "theta iota"]);
        let vocab = Corpus::from_docs(&docs).vocabulary(2);
        let terms: Vec<&str> = vocab.iter().collect();
        assert_eq!(terms, vec!["zeta", "eta"]);
    }

    #[test]
    fn empty_corpus_has_empty_vocabulary() {
        let docs = docs(&["the of and", ""]);
        let vocab = Corpus::from_docs(&docs).vocabulary(5);
        assert!(vocab.is_empty());
    }
}
