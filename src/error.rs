//! Error types for the ranking engine.
//!
//! [`RankError`] aborts a ranking call. [`VectorizeError`] never does: the
//! ranker recovers from it by scoring the affected field as zero.

/// Errors that abort a ranking call.
#[derive(Debug, thiserror::Error)]
pub enum RankError {
    /// Candidate title and abstract lists have different lengths.
    #[error("candidate list length mismatch: {titles} titles, {abstracts} abstracts")]
    InputShape { titles: usize, abstracts: usize },

    /// Invalid ranking configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Per-field vectorization failures.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VectorizeError {
    /// The query text is empty after normalization.
    #[error("query text is empty")]
    EmptyQuery,

    /// There are no candidate documents to compare against.
    #[error("corpus is empty")]
    EmptyCorpus,

    /// No terms survived tokenization and stop-word removal.
    #[error("empty vocabulary; documents contain only stop words")]
    EmptyVocabulary,

    /// A weight or norm came out NaN or infinite.
    #[error("non-finite weight in document {doc}")]
    NonFiniteWeight { doc: usize },
}

impl VectorizeError {
    /// `true` for failures caused by input that simply has nothing to compare.
    pub fn is_expected(&self) -> bool {
        !matches!(self, VectorizeError::NonFiniteWeight { .. })
    }
}

/// Convenience type alias for ranking results.
pub type Result<T> = std::result::Result<T, RankError>;
