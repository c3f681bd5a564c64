//! Goblinoid binary tests
//!
//! Runs the built binary against manifests in a temporary directory.

use std::path::Path;
use std::process::{Command, Output};

const MANIFEST: &str = r#"{
    "MODELS": [
        {
            "name": "Person",
            "kind": "vertex",
            "attributes": [
                {"name": "name", "shape": "vertex_property", "type": "string", "cardinality": "single"}
            ]
        },
        {
            "name": "Likes",
            "kind": "edge",
            "attributes": [
                {"name": "since", "shape": "property", "type": "integer"}
            ]
        }
    ],
    "CONFLICTING": [
        {"name": "Person", "kind": "vertex", "label": "person"},
        {"name": "Robot", "kind": "vertex", "label": "person"}
    ]
}"#;

fn run_goblinoid(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_goblinoid"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to run goblinoid")
}

fn write_manifest(dir: &Path) {
    std::fs::write(dir.join("models.json"), MANIFEST).expect("Failed to write manifest");
}

#[test]
fn test_generates_schema_file() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path());

    let output = run_goblinoid(
        dir.path(),
        &["-m", "models.json", "-i", "MODELS", "--schema-file", "out.groovy"],
    );

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let script = std::fs::read_to_string(dir.path().join("out.groovy")).unwrap();
    assert!(script.starts_with("// Automatically generated file by Goblinoid."));
    assert!(script.contains("person_vl = mgmt.getVertexLabel('person')"));
    assert!(script.contains("since_p = mgmt.getPropertyKey('since')"));
    assert!(script.ends_with("mgmt.commit()\n"));
}

#[test]
fn test_embedded_summary_output() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path());

    let output = run_goblinoid(
        dir.path(),
        &["-m", "models.json", "-i", "MODELS", "--embedded", "--summary"],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Schema Summary"));
    assert!(stdout.contains("__label__"));

    let script = std::fs::read_to_string(dir.path().join("schema.groovy")).unwrap();
    assert!(!script.contains(":remote"));
}

#[test]
fn test_validation_failure_exits_without_output() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path());

    let output = run_goblinoid(dir.path(), &["-m", "models.json", "-i", "CONFLICTING"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: "), "stderr: {}", stderr);
    assert!(
        stderr.contains("Vertex label 'person' found multiple times"),
        "stderr: {}",
        stderr
    );
    assert!(!dir.path().join("schema.groovy").exists());
}

#[test]
fn test_missing_collection_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path());

    let output = run_goblinoid(dir.path(), &["-m", "models.json", "-i", "ENTITIES"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ENTITIES"), "stderr: {}", stderr);
    assert!(!dir.path().join("schema.groovy").exists());
}
