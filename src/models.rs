//! Request and response documents exchanged with callers.
//!
//! The success document carries `success: true`; the failure document carries
//! `success: false` and an error message. Both can be encoded as JSON or CBOR.

use std::io::{Read, Write};

use rayon::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;
use crate::ranker::{CandidateResult, Ranker};

/// An existing research record to compare against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExistingResearch {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub r#abstract: String,
}

/// A similarity check request.
/// Missing or `null` fields are treated as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimilarityRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub proposed_title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub proposed_concept: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub existing_researches: Vec<ExistingResearch>,
}

/// Successful ranking response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResponse {
    pub success: bool,
    pub proposed_title: String,
    pub proposed_concept: String,
    pub similarities: Vec<CandidateResult>,
    pub total_comparisons: usize,
}

/// Failure document for total failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureResponse {
    pub success: bool,
    pub error: String,
}

impl FailureResponse {
    pub fn new(error: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            error: error.to_string(),
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Ranker {
    /// Rank one request and build its response document.
    pub fn evaluate(&self, request: &SimilarityRequest) -> Result<SimilarityResponse> {
        let (titles, abstracts): (Vec<&str>, Vec<&str>) = request
            .existing_researches
            .iter()
            .map(|r| (r.title.as_str(), r.r#abstract.as_str()))
            .unzip();
        let similarities = self.rank(
            &request.proposed_title,
            &request.proposed_concept,
            &titles,
            &abstracts,
        )?;
        Ok(SimilarityResponse {
            success: true,
            proposed_title: request.proposed_title.clone(),
            proposed_concept: request.proposed_concept.clone(),
            total_comparisons: similarities.len(),
            similarities,
        })
    }

    /// Rank independent requests in parallel.
    /// Each request gets its own vocabularies; results keep request order.
    pub fn evaluate_batch(&self, requests: &[SimilarityRequest]) -> Result<Vec<SimilarityResponse>> {
        requests.par_iter().map(|request| self.evaluate(request)).collect()
    }
}

/// Wire encoding of request and response documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// Pretty-printed JSON
    #[default]
    Json,
    /// CBOR
    Cbor,
}

/// Errors decoding or encoding documents.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("invalid JSON")]
    Json(#[from] serde_json::Error),
    #[error("invalid CBOR")]
    Cbor(#[from] serde_cbor::Error),
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

impl Format {
    /// Decode a document from `reader`.
    pub fn decode<T, R>(self, reader: R) -> std::result::Result<T, CodecError>
    where
        T: for<'de> Deserialize<'de>,
        R: Read,
    {
        match self {
            Format::Json => Ok(serde_json::from_reader(reader)?),
            Format::Cbor => Ok(serde_cbor::from_reader(reader)?),
        }
    }

    /// Encode `value` to `writer`. JSON uses two-space indentation and a
    /// trailing newline.
    pub fn encode<T, W>(self, value: &T, mut writer: W) -> std::result::Result<(), CodecError>
    where
        T: Serialize,
        W: Write,
    {
        match self {
            Format::Json => {
                serde_json::to_writer_pretty(&mut writer, value)?;
                writer.write_all(b"\n")?;
            }
            Format::Cbor => serde_cbor::to_writer(&mut writer, value)?,
        }
        writer.flush()?;
        Ok(())
    }
}
