#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const DEVELOPER_PREFS: &str = r#"
primary_use_case = ["coding"]
experience_level = "developer"
budget_range = "21-100"
priority_factors = ["quality"]
integration_method = ["api"]
usage_volume = "moderate"
special_requirements = []
"#;

const FREE_CREATIVE_PREFS: &str = r#"
primary_use_case = ["creative"]
experience_level = "beginner"
budget_range = "free"
priority_factors = ["cost"]
integration_method = ["web"]
usage_volume = "heavy"
special_requirements = []
"#;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("temp dir should be created"),
        }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("parent dir should create");
        }
        fs::write(&path, content).expect("fixture should write");
        path
    }

    fn toolmatch(&self) -> Command {
        let mut cmd = Command::cargo_bin("toolmatch").expect("binary should compile");
        cmd.env("HOME", self.path())
            .env_remove("RUST_LOG")
            .env_remove("ANTHROPIC_API_KEY")
            .arg("--config-dir")
            .arg(self.path());
        cmd
    }

    fn recommend_json(&self, prefs: &Path, extra: &[&str]) -> Value {
        let output = self
            .toolmatch()
            .arg("recommend")
            .arg(prefs)
            .args(["--format", "json"])
            .args(extra)
            .output()
            .expect("binary should run");
        serde_json::from_slice(&output.stdout).expect("stdout should be json")
    }
}

fn records(report: &Value) -> &Vec<Value> {
    report["recommendations"]
        .as_array()
        .expect("recommendations should be an array")
}

#[test]
fn developer_scenario_ranks_api_ready_coding_tools_first() {
    let ws = Workspace::new();
    let prefs = ws.write("prefs.toml", DEVELOPER_PREFS);
    let report = ws.recommend_json(&prefs, &[]);
    let records = records(&report);

    assert!(!records.is_empty());
    assert!(records.len() <= 10);
    assert_eq!(records[0]["tool_id"], "gpt-4-turbo");
    assert_eq!(records[0]["match_percentage"], 100);
    assert_eq!(report["mode"], "basic");
    assert_eq!(
        report["catalog_fingerprint"].as_str().map(str::len),
        Some(64)
    );

    let scores: Vec<f64> = records
        .iter()
        .map(|record| record["score"].as_f64().expect("score is numeric"))
        .collect();
    assert!(scores.iter().all(|score| *score > 40.0));
    assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[test]
fn free_creative_scenario_only_returns_free_tiers() {
    let ws = Workspace::new();
    let prefs = ws.write("prefs.toml", FREE_CREATIVE_PREFS);
    let report = ws.recommend_json(&prefs, &[]);
    let ids: Vec<&str> = records(&report)
        .iter()
        .filter_map(|record| record["tool_id"].as_str())
        .collect();

    assert!(ids.contains(&"stable-diffusion"));
    assert!(ids.contains(&"gemini-pro"));
    assert!(!ids.contains(&"midjourney"));
    assert!(!ids.contains(&"dall-e-3"));
    for record in records(&report) {
        assert_eq!(record["estimated_monthly_cost"]["min"], 0);
    }
}

#[test]
fn empty_use_cases_exit_with_no_recommendations() {
    let ws = Workspace::new();
    let prefs = ws.write(
        "prefs.toml",
        &DEVELOPER_PREFS.replace(r#"["coding"]"#, "[]"),
    );
    ws.toolmatch()
        .arg("recommend")
        .arg(&prefs)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("No tools matched your preferences."));
}

#[test]
fn markdown_is_the_default_format() {
    let ws = Workspace::new();
    let prefs = ws.write("prefs.toml", DEVELOPER_PREFS);
    ws.toolmatch()
        .arg("recommend")
        .arg(&prefs)
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("# AI Tool Recommendations"))
        .stdout(predicate::str::contains("## 1. "))
        .stdout(predicate::str::contains("Why it fits:"));
}

#[test]
fn csv_export_has_the_expected_header() {
    let ws = Workspace::new();
    let prefs = ws.write("prefs.toml", DEVELOPER_PREFS);
    ws.toolmatch()
        .arg("recommend")
        .arg(&prefs)
        .args(["--format", "csv"])
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with(
            "Name,Vendor,Match %,Estimated Cost,Website\n",
        ))
        .stdout(predicate::str::contains("/month,https://"));
}

#[test]
fn share_text_lists_three_entries() {
    let ws = Workspace::new();
    let prefs = ws.write("prefs.toml", DEVELOPER_PREFS);
    let output = ws
        .toolmatch()
        .arg("recommend")
        .arg(&prefs)
        .args(["--format", "share"])
        .output()
        .expect("binary should run");
    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");

    assert!(stdout.starts_with("My AI Tool Recommendations:\n\n1. "));
    assert_eq!(stdout.lines().filter(|line| line.ends_with("% match)")).count(), 3);
}

#[test]
fn config_output_format_is_used_without_a_flag() {
    let ws = Workspace::new();
    ws.write("toolmatch.toml", "[output]\nformat = \"csv\"\n");
    let prefs = ws.write("prefs.toml", DEVELOPER_PREFS);
    ws.toolmatch()
        .arg("recommend")
        .arg(&prefs)
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("Name,Vendor,Match %"));
}

#[test]
fn local_override_beats_project_config() {
    let ws = Workspace::new();
    ws.write("toolmatch.toml", "[output]\nformat = \"csv\"\n");
    ws.write(".toolmatch/local.toml", "[output]\nformat = \"share\"\n");
    let prefs = ws.write("prefs.toml", DEVELOPER_PREFS);
    ws.toolmatch()
        .arg("recommend")
        .arg(&prefs)
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("My AI Tool Recommendations:"));
}

#[test]
fn vendor_refinement_keeps_only_that_vendor() {
    let ws = Workspace::new();
    let prefs = ws.write("prefs.toml", DEVELOPER_PREFS);
    let report = ws.recommend_json(&prefs, &["--vendor", "Anthropic"]);
    let records = records(&report);
    assert!(!records.is_empty());
    assert!(records.iter().all(|record| record["vendor"] == "Anthropic"));
}

#[test]
fn feature_refinement_requires_every_feature() {
    let ws = Workspace::new();
    let prefs = ws.write("prefs.toml", DEVELOPER_PREFS);
    let report = ws.recommend_json(&prefs, &["--feature", "privacy", "--category", "text"]);
    let ids: Vec<&str> = records(&report)
        .iter()
        .filter_map(|record| record["tool_id"].as_str())
        .collect();
    assert!(ids.contains(&"claude-4"));
    assert!(!ids.contains(&"gpt-4-turbo"));
    assert!(!ids.contains(&"github-copilot"));
}

#[test]
fn refinement_that_removes_everything_exits_one() {
    let ws = Workspace::new();
    let prefs = ws.write("prefs.toml", DEVELOPER_PREFS);
    ws.toolmatch()
        .arg("recommend")
        .arg(&prefs)
        .args(["--vendor", "Nobody"])
        .assert()
        .code(1);
}

#[test]
fn unknown_price_band_is_rejected_by_the_parser() {
    let ws = Workspace::new();
    let prefs = ws.write("prefs.toml", DEVELOPER_PREFS);
    ws.toolmatch()
        .arg("recommend")
        .arg(&prefs)
        .args(["--price", "cheap"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown price band"));
}

#[test]
fn custom_catalog_from_config_is_resolved_against_the_config_dir() {
    let ws = Workspace::new();
    ws.write(
        "tools.toml",
        r#"
[[tools]]
id = "house-coder"
vendor = "In House"
name = "House Coder"
category = "code"
description = "Internal code assistant"
use_cases = ["Code review"]
interface_complexity = "simple"
api_available = true
popularity = 60
website = "https://coder.internal"

[tools.privacy]
level = "high"

[tools.pricing.free]
name = "Free"
price = 0
"#,
    );
    ws.write("toolmatch.toml", "[catalog]\npath = \"tools.toml\"\n");
    let prefs = ws.write("prefs.toml", DEVELOPER_PREFS);
    let report = ws.recommend_json(&prefs, &[]);
    let records = records(&report);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["tool_id"], "house-coder");
    assert_eq!(records[0]["estimated_monthly_cost"]["max"], 0);
}

#[test]
fn advisory_without_api_key_falls_back_to_static() {
    let ws = Workspace::new();
    ws.write(
        "toolmatch.toml",
        "[advisory]\nenabled = true\napi_key_env = \"TOOLMATCH_TEST_MISSING_KEY\"\n",
    );
    let prefs = ws.write("prefs.toml", DEVELOPER_PREFS);
    let report = ws.recommend_json(&prefs, &[]);
    let records = records(&report);
    assert_eq!(records[0]["tool_id"], "gpt-4-turbo");
    assert!(records
        .iter()
        .all(|record| record.get("advisory_explanation").is_none()));
}

#[test]
fn advisory_opinions_are_blended_into_the_ranking() {
    let mut server = mockito::Server::new();
    let text = serde_json::json!({
        "recommendations": [{
            "modelId": "claude-3.5-sonnet",
            "score": 100,
            "reasons": ["Great balance of price and quality"],
            "explanation": "Free tier and strong coding"
        }]
    })
    .to_string();
    let body = serde_json::json!({
        "content": [{ "type": "text", "text": text }]
    })
    .to_string();
    let mock = server
        .mock("POST", "/v1/messages")
        .match_header("x-api-key", "secret")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create();

    let ws = Workspace::new();
    ws.write(
        "toolmatch.toml",
        &format!(
            "[advisory]\nenabled = true\napi_key_env = \"TOOLMATCH_TEST_KEY\"\nendpoint = \"{}/v1/messages\"\ntimeout_secs = 5\n",
            server.url()
        ),
    );
    let prefs = ws.write("prefs.toml", DEVELOPER_PREFS);
    let output = ws
        .toolmatch()
        .env("TOOLMATCH_TEST_KEY", "secret")
        .arg("recommend")
        .arg(&prefs)
        .args(["--format", "json"])
        .output()
        .expect("binary should run");
    let report: Value = serde_json::from_slice(&output.stdout).expect("stdout should be json");

    mock.assert();
    let blended = records(&report)
        .iter()
        .find(|record| record["tool_id"] == "claude-3.5-sonnet")
        .expect("advised tool stays in the list");
    assert_eq!(blended["advisory_explanation"], "Free tier and strong coding");
    assert_eq!(blended["reasons"][0], "Great balance of price and quality");
}

#[test]
fn static_only_flag_skips_the_advisory_call() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1/messages")
        .with_status(500)
        .expect(0)
        .create();

    let ws = Workspace::new();
    ws.write(
        "toolmatch.toml",
        &format!(
            "[advisory]\nenabled = true\napi_key_env = \"TOOLMATCH_TEST_KEY\"\nendpoint = \"{}/v1/messages\"\n",
            server.url()
        ),
    );
    let prefs = ws.write("prefs.toml", DEVELOPER_PREFS);
    ws.toolmatch()
        .env("TOOLMATCH_TEST_KEY", "secret")
        .arg("recommend")
        .arg(&prefs)
        .arg("--static-only")
        .assert()
        .code(0);
    mock.assert();
}

#[test]
fn failing_advisory_degrades_to_static_results() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("POST", "/v1/messages")
        .with_status(500)
        .with_body("boom")
        .create();

    let ws = Workspace::new();
    ws.write(
        "toolmatch.toml",
        &format!(
            "[advisory]\nenabled = true\napi_key_env = \"TOOLMATCH_TEST_KEY\"\nendpoint = \"{}/v1/messages\"\n",
            server.url()
        ),
    );
    let prefs = ws.write("prefs.toml", DEVELOPER_PREFS);
    ws.toolmatch()
        .env("TOOLMATCH_TEST_KEY", "secret")
        .arg("recommend")
        .arg(&prefs)
        .args(["--format", "csv", "-v"])
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("Name,Vendor"))
        .stderr(predicate::str::contains("advisory unavailable"));
}
