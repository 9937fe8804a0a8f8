//! CLI for tf-idf-similarity.
//!
//! Reads a similarity request from stdin and writes the ranked response to
//! stdout. On failure a `{ "success": false, "error": ... }` document goes to
//! stderr and the process exits with status 1.

use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tf_idf_similarity::{
    FailureResponse, Format, PlainTextFile, RankConfig, Ranker, SimilarityRequest, TextSource,
};
use tracing_subscriber::EnvFilter;

/// Rank existing research records by similarity to a proposed title and concept.
#[derive(Parser, Debug)]
#[command(name = "tf-idf-similarity", version, about)]
struct Cli {
    /// Path to a TOML ranking configuration.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Wire format of stdin and stdout.
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Read an array of requests and write an array of responses.
    #[arg(long)]
    batch: bool,

    /// Take the proposed concept from a plain-text file.
    #[arg(long)]
    concept_file: Option<PathBuf>,
}

fn main() -> ExitCode {
    // stdout carries the response document; logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let message = format!("{err:#}");
            tracing::error!(error = %message, "similarity check failed");
            let failure = FailureResponse::new(message);
            if let Err(encode_err) = cli.format.encode(&failure, io::stderr().lock()) {
                eprintln!("failed to write error document: {encode_err}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => RankConfig::load(path)?,
        None => RankConfig::default(),
    };
    let ranker = Ranker::new(config)?;
    let concept_override = cli
        .concept_file
        .as_ref()
        .map(|path| PlainTextFile::new(path).extract_text());

    let stdin = BufReader::new(io::stdin().lock());
    let stdout = BufWriter::new(io::stdout().lock());

    if cli.batch {
        let mut requests: Vec<SimilarityRequest> =
            cli.format.decode(stdin).context("failed to read batch request")?;
        if let Some(concept) = &concept_override {
            for request in &mut requests {
                request.proposed_concept = concept.clone();
            }
        }
        tracing::debug!(requests = requests.len(), "evaluating batch");
        let responses = ranker.evaluate_batch(&requests)?;
        cli.format
            .encode(&responses, stdout)
            .context("failed to write responses")?;
    } else {
        let mut request: SimilarityRequest =
            cli.format.decode(stdin).context("failed to read request")?;
        if let Some(concept) = concept_override {
            request.proposed_concept = concept;
        }
        tracing::debug!(
            candidates = request.existing_researches.len(),
            "evaluating request"
        );
        let response = ranker.evaluate(&request)?;
        cli.format
            .encode(&response, stdout)
            .context("failed to write response")?;
    }
    Ok(())
}
