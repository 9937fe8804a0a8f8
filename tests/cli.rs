use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::{json, Value};

fn run_cli(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_tf-idf-similarity"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn binary");
    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for binary")
}

/// The failure document is the last JSON value on stderr (log lines come first).
fn failure_document(stderr: &[u8]) -> Value {
    let text = String::from_utf8_lossy(stderr);
    let start = text.rfind("{\n").expect("failure document on stderr");
    serde_json::from_str(&text[start..]).expect("valid failure document")
}

fn fraud_request() -> Value {
    json!({
        "proposed_title": "machine learning for fraud detection",
        "proposed_concept": "detect card fraud with gradient boosting",
        "existing_researches": [
            { "title": "deep learning fraud detection", "abstract": "card fraud detection using neural networks" },
            { "title": "gardening tips", "abstract": "how to grow tomatoes" }
        ]
    })
}

#[test]
fn malformed_input_exits_with_failure_document() {
    let out = run_cli(&[], "{not json");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let doc = failure_document(&out.stderr);
    assert_eq!(doc["success"], json!(false));
    assert_eq!(
        doc["error"],
        json!("failed to read request: invalid JSON: key must be a string at line 1 column 2")
    );
}

#[test]
fn valid_request_ranks_candidates() {
    let out = run_cli(&[], &fraud_request().to_string());
    assert_eq!(out.status.code(), Some(0));
    let resp: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(resp["success"], json!(true));
    assert_eq!(resp["total_comparisons"], json!(2));
    assert_eq!(resp["similarities"][0]["index"], json!(0));
    assert_eq!(resp["proposed_title"], json!("machine learning for fraud detection"));
}

#[test]
fn concept_file_replaces_proposed_concept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("concept.txt");
    std::fs::write(&path, "how to grow tomatoes").unwrap();

    let out = run_cli(
        &["--concept-file", path.to_str().unwrap()],
        &fraud_request().to_string(),
    );
    assert_eq!(out.status.code(), Some(0));
    let resp: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(resp["proposed_concept"], json!("how to grow tomatoes"));
    let gardening = resp["similarities"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["index"] == json!(1))
        .unwrap();
    assert_eq!(gardening["abstract_similarity"], json!(1.0));
}

#[test]
fn batch_returns_responses_in_request_order() {
    let mut second = fraud_request();
    second["proposed_title"] = json!("gardening tips");
    let batch = json!([fraud_request(), second]);

    let out = run_cli(&["--batch"], &batch.to_string());
    assert_eq!(out.status.code(), Some(0));
    let resp: Value = serde_json::from_slice(&out.stdout).unwrap();
    let items = resp.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["proposed_title"], json!("machine learning for fraud detection"));
    assert_eq!(items[1]["proposed_title"], json!("gardening tips"));
    assert_eq!(items[1]["similarities"][0]["index"], json!(1));
}

#[test]
fn batch_rejects_single_object() {
    let out = run_cli(&["--batch"], &fraud_request().to_string());
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert_eq!(failure_document(&out.stderr)["success"], json!(false));
}
