use std::fmt::Debug;

use num::Float;

use crate::error::VectorizeError;
use crate::vectorizer::{compute::compare::Compare, tfidf::TFIDFEngine, TFIDFVectorizer};

/// Similarity of the query to each corpus document
pub struct Hits {
    /// (document index, score), in corpus order
    pub list: Vec<(usize, f64)>,
}

impl Hits {
    /// Create a new Hits instance
    pub fn new(list: Vec<(usize, f64)>) -> Self {
        Hits { list }
    }

    /// All-zero hits for `len` documents
    pub fn zeros(len: usize) -> Self {
        Hits {
            list: (0..len).map(|i| (i, 0.0)).collect(),
        }
    }

    /// Scores in corpus order
    pub fn scores(&self) -> Vec<f64> {
        self.list.iter().map(|&(_, s)| s).collect()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl Debug for Hits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            // one hit per line
            writeln!(f, "Hits [")?;
            for (idx, score) in &self.list {
                writeln!(f, "    {}: {:.6}", idx, score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}

impl<N, E, C> TFIDFVectorizer<N, E, C>
where
    N: Float + Into<f64>,
    E: TFIDFEngine<N>,
    C: Compare<N>,
{
    /// Cosine similarity of `query` to every document of `corpus`.
    ///
    /// Fits a vocabulary on the inputs, then compares the query vector with
    /// each corpus vector.
    pub fn similarity<S>(&self, query: &str, corpus: &[S]) -> Result<Hits, VectorizeError>
    where
        S: AsRef<str>,
    {
        let vectors = self.fit_transform(query, corpus)?;
        let list = vectors
            .corpus
            .iter()
            .enumerate()
            .map(|(idx, doc)| (idx, C::cosine_similarity(&vectors.query, doc)))
            .collect();
        Ok(Hits { list })
    }
}
