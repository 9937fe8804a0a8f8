//! This crate ranks a proposed research title and concept against existing
//! research records by TF-IDF cosine similarity.

pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod ranker;
pub mod utils;
pub mod vectorizer;

/// Ranker
/// The top-level entry point of this crate.
/// It scores the title field and the concept/abstract field separately,
/// combines them with configured weights (40% title, 60% concept by default)
/// and returns candidates ordered by overall similarity.
///
/// Each ranking call fits its own vocabularies, so a `Ranker` can be shared
/// across threads without locking.
pub use ranker::{rank, CandidateResult, Field, Ranker};

/// Ranking configuration
/// Per-field vocabulary caps and weights, plus output precision.
/// Loadable from TOML.
pub use config::{FieldConfig, RankConfig};

/// Error types
/// - `RankError`: aborts a ranking call (input shape, configuration)
/// - `VectorizeError`: per-field failure, recovered as zero similarity
pub use error::{RankError, Result, VectorizeError};

/// Request and response documents
/// The JSON/CBOR boundary: a proposed title and concept with existing
/// research records in, ranked similarities out.
pub use models::{ExistingResearch, FailureResponse, Format, SimilarityRequest, SimilarityResponse};

/// TF-IDF Vectorizer
/// Fits a vocabulary on a query and a corpus and produces L2-normalized
/// TF-IDF vectors, or scores the query against every corpus document.
///
/// `TFIDFVectorizer<N, E, C>` has the following generic parameters:
/// - `N`: weight type (`f32`, `f64`)
/// - `E`: TF-IDF calculation engine (e.g., `DefaultTFIDFEngine`)
/// - `C`: vector comparison (e.g., `DefaultCompare`)
pub use vectorizer::TFIDFVectorizer;

/// TF IDF Calculation Engine Trait
/// Raw term counts weighted by smoothed IDF, `ln((1 + n) / (1 + df)) + 1`,
/// in the default implementation.
pub use vectorizer::tfidf::{DefaultTFIDFEngine, TFIDFEngine};

/// Token Frequency structure
/// Token counts of one document, in first-seen order.
pub use vectorizer::token::TokenFrequency;

/// Text sources
/// Upstream producers of plain text for the ranker.
pub use extract::{PlainTextFile, TextSource};
