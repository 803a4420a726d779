/// This is a set of integration tests which run against the word-frequency payload binary
/// living in `src/bin/word-frequency.rs`.

extern crate serde_json;

use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

const TEST_BIN_NAME: &str = "word-frequency";

// This can't be a one-liner because cargo sometimes runs integration tests from
// `target/debug/deps`.
fn get_bin_path() -> PathBuf {
    let mut path = env::current_exe().unwrap();
    path.pop();
    if path.ends_with("deps") {
        path.pop();
    }
    path.push(TEST_BIN_NAME);
    path
}

fn run_payload(subcommand: &str, input: &str) -> Output {
    let mut child = Command::new(get_bin_path())
        .arg(subcommand)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

#[test]
fn run_sanity_check() {
    let output = Command::new(get_bin_path())
        .arg("sanity-check")
        .output()
        .unwrap();
    let output_str = String::from_utf8(output.stdout).unwrap();

    assert_eq!("sanity located\n", output_str);
}

#[test]
fn run_has_combine() {
    let output = Command::new(get_bin_path())
        .arg("has-combine")
        .output()
        .unwrap();
    let output_str = String::from_utf8(output.stdout).unwrap();

    assert_eq!("yes\n", output_str);
}

#[test]
fn run_map_valid_input() {
    let json_input = r#"{"key":"foo","value":"The cat sat."}"#;

    let output = run_payload("map", json_input);
    let output_str = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());

    // Partition numbering depends on the hash partitioner, so assert on the pairs themselves.
    let parsed: serde_json::Value = serde_json::from_str(&output_str).unwrap();
    let partitions = parsed["partitions"].as_object().unwrap();

    let mut pairs: Vec<(String, u64)> = Vec::new();
    for (_, partition_pairs) in partitions.iter() {
        for pair in partition_pairs.as_array().unwrap() {
            pairs.push((
                pair["key"].as_str().unwrap().to_owned(),
                pair["value"].as_u64().unwrap(),
            ));
        }
    }
    pairs.sort();

    assert_eq!(
        vec![
            ("cat".to_owned(), 1),
            ("sat".to_owned(), 1),
            ("the".to_owned(), 1),
        ],
        pairs
    );
}

#[test]
fn run_map_invalid_input() {
    let bad_input = r#"foo"#;

    let output = run_payload("map", bad_input);

    assert_eq!(false, output.status.success());
}

#[test]
fn run_map_noise_only_record() {
    let json_input = r#"{"key":"foo","value":"123 !!! ---"}"#;
    let expected_output = r#"{"partitions":{}}"#;

    let output = run_payload("map", json_input);
    let output_str = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert_eq!(expected_output, output_str);
}

#[test]
fn run_reduce_valid_input() {
    let json_input = r#"{"key":"cat","values":[1,2,3]}"#;
    let expected_output = r#"{"values":[6]}"#;

    let output = run_payload("reduce", json_input);
    let output_str = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert_eq!(expected_output, output_str);
}

#[test]
fn run_reduce_invalid_input() {
    let json_input = r#"foo"#;

    let output = run_payload("reduce", json_input);

    assert_eq!(false, output.status.success());
}

#[test]
fn run_combine_valid_input() {
    let json_input = r#"{"key":"cat","values":[2,3]}"#;
    let expected_output = r#"{"pairs":[{"key":"cat","value":5}]}"#;

    let output = run_payload("combine", json_input);
    let output_str = String::from_utf8(output.stdout).unwrap();

    assert!(output.status.success());
    assert_eq!(expected_output, output_str);
}

#[test]
fn run_combine_invalid_input() {
    let json_input = r#"foo"#;

    let output = run_payload("combine", json_input);

    assert_eq!(false, output.status.success());
}
