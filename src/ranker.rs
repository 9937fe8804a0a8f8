//! Two-field similarity ranking.
//!
//! The [`Ranker`] scores a proposed title and concept against parallel lists
//! of candidate titles and abstracts, combines the two field scores with the
//! configured weights and returns candidates in descending order of overall
//! similarity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{FieldConfig, RankConfig};
use crate::error::{RankError, Result};
use crate::utils::{math::round_to, normalizer::normalize, sort::stable_sort_desc_by_key};
use crate::vectorizer::{evaluate::scoring::Hits, TFIDFVectorizer};

/// The text field being scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Concept,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Title => write!(f, "title"),
            Field::Concept => write!(f, "concept"),
        }
    }
}

/// One ranked candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateResult {
    /// Position of the candidate in the input lists
    pub index: usize,
    /// Original, unnormalized title
    pub title: String,
    /// Original, unnormalized abstract
    pub r#abstract: String,
    pub title_similarity: f64,
    pub abstract_similarity: f64,
    pub overall_similarity: f64,
}

/// Ranks candidates against a proposed title and concept.
///
/// A `Ranker` holds only its configuration. Every call to [`Ranker::rank`]
/// builds and drops its own vocabularies, so a single ranker can serve
/// concurrent calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker {
    config: RankConfig,
}

impl Ranker {
    /// Create a ranker, validating `config`.
    pub fn new(config: RankConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Rank candidates by weighted title and concept similarity.
    ///
    /// Returns one result per candidate, sorted by `overall_similarity`
    /// descending. Equal scores keep input order.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::InputShape`] if `titles` and `abstracts` differ in
    /// length. Failures inside one field never abort the call; that field
    /// scores zero for every candidate.
    pub fn rank<S>(
        &self,
        query_title: &str,
        query_concept: &str,
        titles: &[S],
        abstracts: &[S],
    ) -> Result<Vec<CandidateResult>>
    where
        S: AsRef<str>,
    {
        if titles.len() != abstracts.len() {
            return Err(RankError::InputShape {
                titles: titles.len(),
                abstracts: abstracts.len(),
            });
        }

        let title_scores = self.field_similarities(
            Field::Title,
            &self.config.title,
            query_title,
            titles,
        );
        let concept_scores = self.field_similarities(
            Field::Concept,
            &self.config.concept,
            query_concept,
            abstracts,
        );

        let precision = self.config.precision;
        let mut results: Vec<CandidateResult> = titles
            .iter()
            .zip(abstracts)
            .zip(title_scores.into_iter().zip(concept_scores))
            .enumerate()
            .map(|(index, ((title, r#abstract), (title_sim, concept_sim)))| {
                let title_similarity = round_to(title_sim, precision);
                let abstract_similarity = round_to(concept_sim, precision);
                // weighted from the reported (rounded) field scores
                let overall = self.config.title.weight * title_similarity
                    + self.config.concept.weight * abstract_similarity;
                CandidateResult {
                    index,
                    title: title.as_ref().to_string(),
                    r#abstract: r#abstract.as_ref().to_string(),
                    title_similarity,
                    abstract_similarity,
                    overall_similarity: round_to(overall, precision).clamp(0.0, 1.0),
                }
            })
            .collect();

        stable_sort_desc_by_key(&mut results, |r| r.overall_similarity);
        tracing::debug!(candidates = results.len(), "ranking complete");
        Ok(results)
    }

    /// Per-candidate similarity for one field, in candidate order.
    ///
    /// Empty query or corpus short-circuits to zeros. Vectorization failures
    /// are logged and also yield zeros.
    fn field_similarities<S>(
        &self,
        field: Field,
        field_config: &FieldConfig,
        query: &str,
        corpus: &[S],
    ) -> Vec<f64>
    where
        S: AsRef<str>,
    {
        let candidates = corpus.len();
        let query = normalize(query);
        if query.is_empty() || corpus.is_empty() {
            tracing::debug!(%field, candidates, "field skipped: empty query or corpus");
            return Hits::zeros(candidates).scores();
        }
        let corpus: Vec<String> = corpus.iter().map(|doc| normalize(doc.as_ref())).collect();

        let vectorizer: TFIDFVectorizer = TFIDFVectorizer::new(field_config.max_features);
        match vectorizer.similarity(&query, &corpus) {
            Ok(hits) => hits.scores(),
            Err(err) if err.is_expected() => {
                tracing::debug!(%field, candidates, error = %err, "field similarity degraded to zero");
                Hits::zeros(candidates).scores()
            }
            Err(err) => {
                tracing::error!(%field, candidates, error = %err, "field vectorization failed; scoring zero");
                Hits::zeros(candidates).scores()
            }
        }
    }
}

/// Rank with the default configuration.
///
/// # Examples
///
/// ```
/// let results = tf_idf_similarity::rank(
///     "machine learning for fraud detection",
///     "",
///     &["deep learning fraud detection", "gardening tips"],
///     &["", ""],
/// )
/// .unwrap();
/// assert_eq!(results[0].index, 0);
/// ```
pub fn rank<S>(
    query_title: &str,
    query_concept: &str,
    titles: &[S],
    abstracts: &[S],
) -> Result<Vec<CandidateResult>>
where
    S: AsRef<str>,
{
    Ranker::default().rank(query_title, query_concept, titles, abstracts)
}
