use num::Float;

use crate::utils::math::vector::ZeroSpVec;
use crate::vectorizer::{corpus::{Corpus, Vocabulary}, token::TokenFrequency};

pub trait TFIDFEngine<N>
where
    N: Float,
{
    /// Build the IDF vector
    /// # Arguments
    /// * `corpus` - collection statistics
    /// * `vocabulary` - retained terms in column order
    /// # Returns
    /// * `Vec<N>` - one IDF weight per vocabulary column
    fn idf_vec(corpus: &Corpus, vocabulary: &Vocabulary) -> Vec<N>;

    /// Build the TF vector of one document over `vocabulary`.
    /// Terms outside the vocabulary are ignored.
    fn tf_vec(freq: &TokenFrequency, vocabulary: &Vocabulary) -> ZeroSpVec<N>;
}

/// Default TF-IDF engine
/// - TF: raw count within the document
/// - IDF: smoothed, `ln((1 + n) / (1 + df)) + 1`
///
/// Implemented for `f32` and `f64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTFIDFEngine;

impl DefaultTFIDFEngine {
    /// Smoothed IDF for a term seen in `doc_freq` of `doc_num` documents
    #[inline]
    pub fn idf_calc(doc_num: u64, doc_freq: u64) -> f64 {
        ((1.0 + doc_num as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
    }
}

impl<N> TFIDFEngine<N> for DefaultTFIDFEngine
where
    N: Float,
{
    fn idf_vec(corpus: &Corpus, vocabulary: &Vocabulary) -> Vec<N> {
        let doc_num = corpus.doc_num();
        vocabulary
            .iter()
            .map(|term| {
                let idf = Self::idf_calc(doc_num, corpus.doc_count(term));
                <N as num::NumCast>::from(idf).unwrap_or_else(N::nan)
            })
            .collect()
    }

    fn tf_vec(freq: &TokenFrequency, vocabulary: &Vocabulary) -> ZeroSpVec<N> {
        let pairs = freq
            .iter()
            .filter_map(|(token, count)| {
                let idx = vocabulary.index_of(token)?;
                Some((idx, <N as num::NumCast>::from(count).unwrap_or_else(N::nan)))
            })
            .collect();
        ZeroSpVec::from_pairs(vocabulary.len(), pairs)
    }
}
