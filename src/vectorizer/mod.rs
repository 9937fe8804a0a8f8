pub mod compute;
pub mod corpus;
pub mod evaluate;
pub mod stop_words;
pub mod tfidf;
pub mod token;

use std::marker::PhantomData;

use num::Float;

use crate::error::VectorizeError;
use crate::utils::math::vector::ZeroSpVec;
use crate::vectorizer::{
    compute::compare::{Compare, DefaultCompare},
    corpus::{Corpus, Vocabulary},
    tfidf::{DefaultTFIDFEngine, TFIDFEngine},
    token::TokenFrequency,
};

/// TF-IDF vectors for one query and its corpus, sharing one vocabulary.
#[derive(Debug, Clone)]
pub struct TermVectors<N = f64>
where
    N: Float,
{
    /// Vocabulary fitted on the query and corpus together
    pub vocabulary: Vocabulary,
    /// Query vector, unit norm or zero
    pub query: ZeroSpVec<N>,
    /// Corpus vectors in input order, unit norm or zero
    pub corpus: Vec<ZeroSpVec<N>>,
}

/// TF-IDF vectorizer fitted per call.
///
/// Every call to [`fit_transform`](Self::fit_transform) builds a fresh
/// vocabulary from its own inputs. No state is kept between calls, so one
/// instance can be shared freely across threads.
///
/// `TFIDFVectorizer<N, E, C>` has the following generic parameters:
/// - `N`: weight type (`f32` or `f64`)
/// - `E`: TF-IDF calculation engine
/// - `C`: vector comparison used for scoring
#[derive(Debug, Clone, Copy)]
pub struct TFIDFVectorizer<N = f64, E = DefaultTFIDFEngine, C = DefaultCompare>
where
    N: Float,
    E: TFIDFEngine<N>,
    C: Compare<N>,
{
    max_features: usize,
    _marker: PhantomData<(N, E, C)>,
}

impl<N, E, C> TFIDFVectorizer<N, E, C>
where
    N: Float + Into<f64>,
    E: TFIDFEngine<N>,
    C: Compare<N>,
{
    /// Create a vectorizer keeping at most `max_features` terms
    pub fn new(max_features: usize) -> Self {
        Self {
            max_features,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn max_features(&self) -> usize {
        self.max_features
    }

    /// Fit a vocabulary on `query` and `corpus` and return their TF-IDF vectors.
    ///
    /// Inputs are expected to be normalized already.
    ///
    /// # Errors
    /// - [`VectorizeError::EmptyQuery`] / [`VectorizeError::EmptyCorpus`] when
    ///   there is nothing to compare
    /// - [`VectorizeError::EmptyVocabulary`] when every token is a stop word
    /// - [`VectorizeError::NonFiniteWeight`] when a weight is NaN or infinite
    pub fn fit_transform<S>(&self, query: &str, corpus: &[S]) -> Result<TermVectors<N>, VectorizeError>
    where
        S: AsRef<str>,
    {
        if query.is_empty() {
            return Err(VectorizeError::EmptyQuery);
        }
        if corpus.is_empty() {
            return Err(VectorizeError::EmptyCorpus);
        }

        // query is document 0
        let docs: Vec<TokenFrequency> = std::iter::once(query)
            .chain(corpus.iter().map(AsRef::as_ref))
            .map(TokenFrequency::from_text)
            .collect();
        let stats = Corpus::from_docs(&docs);
        if stats.vocab_size() == 0 {
            return Err(VectorizeError::EmptyVocabulary);
        }

        let vocabulary = stats.vocabulary(self.max_features);
        if vocabulary.is_empty() {
            return Err(VectorizeError::EmptyVocabulary);
        }
        let idf: Vec<N> = E::idf_vec(&stats, &vocabulary);

        let mut vectors = Vec::with_capacity(docs.len());
        for (doc_idx, doc) in docs.iter().enumerate() {
            let mut vec = E::tf_vec(doc, &vocabulary);
            vec.hadamard_dense(&idf);
            let norm = vec.normalize_l2();
            if !norm.is_finite() {
                return Err(VectorizeError::NonFiniteWeight { doc: doc_idx });
            }
            vec.shrink_to_fit();
            vectors.push(vec);
        }

        let mut vectors = vectors.into_iter();
        let query = vectors.next().unwrap_or_else(|| ZeroSpVec::new(vocabulary.len()));
        Ok(TermVectors {
            query,
            corpus: vectors.collect(),
            vocabulary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vectorizer(max_features: usize) -> TFIDFVectorizer {
        TFIDFVectorizer::new(max_features)
    }

    #[test]
    fn vectors_are_unit_or_zero() {
        let out = vectorizer(100)
            .fit_transform("fraud detection", &["fraud networks", "the of and", "gardening tips"])
            .unwrap();
        assert!((out.query.norm() - 1.0).abs() < 1e-12);
        assert_eq!(out.corpus.len(), 3);
        assert!((out.corpus[0].norm() - 1.0).abs() < 1e-12);
        assert!(out.corpus[1].is_zero());
        assert!((out.corpus[2].norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn vocabulary_spans_query_and_corpus() {
        let out = vectorizer(100)
            .fit_transform("alpha beta", &["gamma alpha"])
            .unwrap();
        let terms: Vec<&str> = out.vocabulary.iter().collect();
        assert_eq!(terms, vec!["alpha", "beta", "gamma"]);
        assert_eq!(out.query.len(), 3);
    }

    #[test]
    fn weights_match_smoothed_tfidf() {
        // n = 3; "alpha" appears in all docs, "beta" only in the query
        let out = vectorizer(100)
            .fit_transform("alpha beta", &["alpha", "alpha"])
            .unwrap();
        let idf_beta = (4.0f64 / 2.0).ln() + 1.0;
        let norm = (1.0 + idf_beta * idf_beta).sqrt();
        assert!((out.query.get(0) - 1.0 / norm).abs() < 1e-12);
        assert!((out.query.get(1) - idf_beta / norm).abs() < 1e-12);
        assert!((out.corpus[0].get(0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn max_features_caps_vocabulary() {
        let out = vectorizer(1)
            .fit_transform("rare common", &["common", "common"])
            .unwrap();
        assert_eq!(out.vocabulary.len(), 1);
        assert_eq!(out.vocabulary.term(0), Some("common"));
    }

    #[test]
    fn empty_inputs_are_errors() {
        let v = vectorizer(10);
        assert_eq!(
            v.fit_transform::<&str>("", &["alpha"]).unwrap_err(),
            VectorizeError::EmptyQuery
        );
        assert_eq!(
            v.fit_transform::<&str>("alpha", &[]).unwrap_err(),
            VectorizeError::EmptyCorpus
        );
        assert_eq!(
            v.fit_transform("the and", &["of the"]).unwrap_err(),
            VectorizeError::EmptyVocabulary
        );
    }

    #[test]
    fn f32_weights() {
        let v: TFIDFVectorizer<f32> = TFIDFVectorizer::new(10);
        let out = v.fit_transform("neural networks", &["neural networks"]).unwrap();
        assert!((out.query.norm() - 1.0).abs() < 1e-6);
    }
}
