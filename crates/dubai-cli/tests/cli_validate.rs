//! End-to-end tests of the `dubai` binary.

use std::path::Path;
use std::process::Command;

fn dubai() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dubai"))
}

fn write(root: &Path, rel: &str, text: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, text).unwrap();
}

#[test]
fn test_validate_clean_tree_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "policies/rera/fees.md",
        "---\ntitle: Fees\nid: fees\nauthority: RERA\nsection: Fees\nsummary: Service charges.\n---\n",
    );

    let output = dubai()
        .args(["validate", "--content-dir"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("All content valid."));
}

#[test]
fn test_validate_invalid_tree_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "reports/annual.md",
        "---\ntitle: Annual\nid: annual\nreport_type: annual\nsummary: Year in review.\n---\n",
    );

    let output = dubai()
        .args(["validate", "--json", "--content-dir"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["clean"], false);
    assert_eq!(report["failures"][0]["violations"][0]["instance_path"], "/year");
}

#[test]
fn test_config_file_and_override() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "content/developer_reports/orphan.md",
        concat!(
            "---\n",
            "title: Orphan\n",
            "id: orphan\n",
            "developer_id: nobody\n",
            "rating: BB\n",
            "risk_level: Moderate\n",
            "summary: No developer page yet.\n",
            "metrics:\n",
            "  financial_health: Fair\n",
            "  on_time_delivery: 70%\n",
            "  quality_assessment: Fair\n",
            "  risk_profile: Moderate\n",
            "---\n",
        ),
    );
    let config = dir.path().join("dubai.yaml");
    std::fs::write(&config, "content_dir: content\n").unwrap();

    let checked = dubai()
        .arg("--config")
        .arg(&config)
        .arg("validate")
        .output()
        .unwrap();
    assert_eq!(checked.status.code(), Some(1));
    assert!(String::from_utf8(checked.stdout).unwrap().contains("DANGLING"));

    let skipped = dubai()
        .arg("--config")
        .arg(&config)
        .args(["validate", "--skip-references"])
        .output()
        .unwrap();
    assert!(skipped.status.success());
}

#[test]
fn test_missing_content_dir_fails() {
    let output = dubai()
        .args(["validate", "--content-dir", "/nonexistent/content"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("content directory not found"));
}

#[test]
fn test_log_json_writes_json_lines_to_stderr() {
    let output = dubai()
        .args(["-v", "--log-json", "validate", "--content-dir", "/nonexistent/content"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    let first = stderr.lines().next().unwrap();
    let line: serde_json::Value = serde_json::from_str(first).unwrap();
    assert_eq!(line["level"], "INFO");
}

#[test]
fn test_collections_lists_six_names() {
    let output = dubai().arg("collections").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        names,
        [
            "developer_reports",
            "developers",
            "guides",
            "policies",
            "projects",
            "reports"
        ]
    );
}

#[test]
fn test_schema_prints_json() {
    let output = dubai().args(["schema", "projects"]).output().unwrap();
    assert!(output.status.success());
    let schema: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(schema["required"]
        .as_array()
        .unwrap()
        .iter()
        .any(|r| r == "developer"));
}
