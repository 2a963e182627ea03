use crate::common::{TestProject, fixtures_dir};
use std::path::PathBuf;
use std::process::{Command, Output};

fn classdeps_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_classdeps"))
}

fn run_in(dir: &std::path::Path, args: &[&str]) -> Output {
    Command::new(classdeps_binary())
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .args(args)
        .output()
        .expect("failed to run classdeps")
}

#[test]
fn test_analyze_json_reports_partial_failure() {
    let project = TestProject::new();
    let fixtures = fixtures_dir();
    let output = run_in(
        project.path(),
        &["analyze", fixtures.to_str().unwrap(), "--json", "--threads", "2"],
    );

    assert_eq!(output.status.code(), Some(4));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "partial");
    assert_eq!(json["data"]["total_classes"], 4);
    assert_eq!(json["data"]["project_name"], "java");
}

#[test]
fn test_analyze_text_success() {
    let project = TestProject::new();
    project.add_file(
        "src/App.java",
        "public class App { public static void main(String[] args) { runner.start(); } }",
    );

    let output = run_in(project.path(), &["analyze", "src"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("public class App"));
    assert!(stdout.contains("main(String[] args)"));
    assert!(stdout.contains("depends on: Runner"));
}

#[test]
fn test_analyze_writes_report_and_failure_log() {
    let project = TestProject::new();
    project.add_file("src/Ok.java", "public class Ok { }");
    project.add_file("src/Bad.java", "public interface {");

    let output = run_in(
        project.path(),
        &[
            "analyze",
            "src",
            "--output",
            "out/report.json",
            "--failure-log",
            "out/failures.log",
        ],
    );

    assert_eq!(output.status.code(), Some(4));
    let report = std::fs::read_to_string(project.path().join("out/report.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(json["total_classes"], 1);

    let log = std::fs::read_to_string(project.path().join("out/failures.log")).unwrap();
    assert!(log.contains("Bad.java"));
}

#[test]
fn test_missing_directory_is_io_error() {
    let project = TestProject::new();
    let output = run_in(project.path(), &["analyze", "does-not-exist"]);
    assert_eq!(output.status.code(), Some(5));
}

#[test]
fn test_init_then_config() {
    let project = TestProject::new();

    let output = run_in(project.path(), &["init"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(project.path().join(".classdeps/settings.toml").exists());

    let again = run_in(project.path(), &["init"]);
    assert_eq!(again.status.code(), Some(6));

    let config = run_in(project.path(), &["config"]);
    assert_eq!(config.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&config.stdout);
    assert!(stdout.contains("[analysis]"));
    assert!(stdout.contains("extensions"));
}

#[test]
fn test_invalid_output_format_is_config_error() {
    let project = TestProject::new();
    project.add_file("src/A.java", "class A { }");
    project.add_file(".classdeps/settings.toml", "[output]\nformat = \"yaml\"\n");

    let output = run_in(project.path(), &["analyze", "src"]);
    assert_eq!(output.status.code(), Some(6));
}

fn json_files(dir: &std::path::Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .filter(|name| name.ends_with(".json"))
        .collect()
}

#[test]
fn test_analyze_writes_timestamped_report_by_default() {
    let project = TestProject::new();
    project.add_file("my-app/src/Main.java", "public class Main { }");

    let output = run_in(project.path(), &["analyze", "my-app"]);
    assert_eq!(output.status.code(), Some(0));

    let files = json_files(project.path());
    assert_eq!(files.len(), 1, "expected one report, found {files:?}");
    let name = &files[0];
    let stamp = name
        .strip_prefix("my-app-")
        .and_then(|rest| rest.strip_suffix(".json"))
        .unwrap_or_else(|| panic!("unexpected report name {name}"));
    assert!(chrono::NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d-%H%M%S").is_ok());

    let report = std::fs::read_to_string(project.path().join(name)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&report).unwrap();
    assert_eq!(json["project_name"], "my-app");
    assert_eq!(json["classes"][0]["name"], "Main");
}

#[test]
fn test_no_report_flag_skips_report_file() {
    let project = TestProject::new();
    project.add_file("src/Main.java", "public class Main { }");

    let output = run_in(project.path(), &["analyze", "src", "--no-report"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(json_files(project.path()).is_empty());
}
