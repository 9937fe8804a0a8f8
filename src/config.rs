//! Ranking configuration.
//!
//! [`RankConfig`] carries the per-field vocabulary caps and weights that the
//! ranker applies. It is passed to every [`Ranker`](crate::Ranker) explicitly;
//! nothing here is global state.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RankError;

/// Default vocabulary cap for the title field.
pub const TITLE_MAX_FEATURES: usize = 1000;
/// Default vocabulary cap for the concept/abstract field.
pub const CONCEPT_MAX_FEATURES: usize = 2000;
/// Default title weight in the overall score.
pub const TITLE_WEIGHT: f64 = 0.4;
/// Default concept weight in the overall score.
pub const CONCEPT_WEIGHT: f64 = 0.6;
/// Decimal places kept in reported similarities.
pub const DEFAULT_PRECISION: u32 = 4;

const MAX_PRECISION: u32 = 12;
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Vectorization and weighting settings for one text field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Maximum vocabulary size; the most frequent terms are kept.
    pub max_features: usize,
    /// Weight of this field in the overall similarity.
    pub weight: f64,
}

impl FieldConfig {
    pub fn title_default() -> Self {
        Self {
            max_features: TITLE_MAX_FEATURES,
            weight: TITLE_WEIGHT,
        }
    }

    pub fn concept_default() -> Self {
        Self {
            max_features: CONCEPT_MAX_FEATURES,
            weight: CONCEPT_WEIGHT,
        }
    }
}

/// Configuration for a [`Ranker`](crate::Ranker).
///
/// Use [`Default::default()`] for the standard 40/60 title/concept split, or
/// load overrides from TOML with [`RankConfig::load`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    #[serde(default = "FieldConfig::title_default")]
    pub title: FieldConfig,
    #[serde(default = "FieldConfig::concept_default")]
    pub concept: FieldConfig,
    /// Decimal places kept in reported similarities.
    #[serde(default = "default_precision")]
    pub precision: u32,
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            title: FieldConfig::title_default(),
            concept: FieldConfig::concept_default(),
            precision: DEFAULT_PRECISION,
        }
    }
}

impl RankConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `max_features` must be greater than 0 for both fields
    /// - weights must be finite and non-negative
    /// - weights must sum to 1
    /// - `precision` must be at most 12
    pub fn validate(&self) -> Result<(), RankError> {
        for (name, field) in [("title", &self.title), ("concept", &self.concept)] {
            if field.max_features == 0 {
                return Err(RankError::Config(format!(
                    "{name}.max_features must be greater than 0"
                )));
            }
            if !field.weight.is_finite() || field.weight < 0.0 {
                return Err(RankError::Config(format!(
                    "{name}.weight must be a finite non-negative number"
                )));
            }
        }
        let sum = self.title.weight + self.concept.weight;
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(RankError::Config(format!(
                "field weights must sum to 1, got {sum}"
            )));
        }
        if self.precision > MAX_PRECISION {
            return Err(RankError::Config(format!(
                "precision must be at most {MAX_PRECISION}"
            )));
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, RankError> {
        let config: RankConfig =
            toml::from_str(raw).map_err(|e| RankError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RankError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| RankError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&raw)
    }
}
