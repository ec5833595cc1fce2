// Tests for the CLI surface: default guidance, help text, and the inspect
// and init subcommands.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

fn bin_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("n8n-patcher").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn no_subcommand_shows_usage_guidance() {
    let dir = TempDir::new().unwrap();
    bin_in(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("n8n-patcher patch"))
        .stdout(predicate::str::contains("n8n-patcher inspect"))
        .stdout(predicate::str::contains("n8n-patcher init"));
}

#[test]
fn help_lists_all_subcommands() {
    let dir = TempDir::new().unwrap();
    bin_in(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("patch"))
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn inspect_lists_nodes_with_code_lengths() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("wf.json");
    std::fs::write(
        &input,
        serde_json::to_string_pretty(&json!({
            "name": "wf",
            "nodes": [
                { "name": "Webhook", "type": "n8n-nodes-base.webhook", "parameters": {} },
                {
                    "name": "Parse Node Code",
                    "type": "n8n-nodes-base.code",
                    "parameters": { "jsCode": "12345" }
                }
            ],
            "connections": {}
        }))
        .unwrap(),
    )
    .unwrap();

    bin_in(&dir)
        .arg("inspect")
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 node(s)"))
        .stdout(predicate::str::contains("Webhook (n8n-nodes-base.webhook)"))
        .stdout(predicate::str::contains(
            "Parse Node Code (n8n-nodes-base.code, jsCode 5 bytes)",
        ))
        .stdout(predicate::str::contains("🎯"));
}

#[test]
fn inspect_reports_an_empty_workflow() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("wf.json");
    std::fs::write(&input, r#"{ "nodes": [] }"#).unwrap();

    bin_in(&dir)
        .arg("inspect")
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Workflow has no nodes"));
}

#[test]
fn init_writes_a_default_config_once() {
    let dir = TempDir::new().unwrap();

    bin_in(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("n8n-patcher.toml"));

    let raw = std::fs::read_to_string(dir.path().join("n8n-patcher.toml")).unwrap();
    assert!(raw.contains("target_node = \"Parse Node Code\""));
    assert!(raw.contains("nista_workflow_current.json"));

    // A second init refuses to clobber the file unless forced.
    bin_in(&dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    bin_in(&dir).arg("init").arg("--force").assert().success();
}

#[test]
fn config_file_changes_the_default_target() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("n8n-patcher.toml"),
        r#"
input_path = "wf.json"
output_path = "wf_out.json"
target_node = "Other Node"
log_level = "info"

[remote]
base_url = "https://n8n.example.test"
workflow_id = "abc123"
api_key_header = "X-N8N-API-KEY"
"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("wf.json"),
        serde_json::to_string_pretty(&json!({
            "nodes": [{ "name": "Other Node", "parameters": { "jsCode": "old" } }]
        }))
        .unwrap(),
    )
    .unwrap();

    bin_in(&dir)
        .arg("patch")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found node: Other Node"))
        .stdout(predicate::str::contains(
            "https://n8n.example.test/api/v1/workflows/abc123",
        ));

    assert!(dir.path().join("wf_out.json").exists());
}
