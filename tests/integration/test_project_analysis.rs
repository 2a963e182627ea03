use crate::common::{TestProject, fixtures_dir};
use classdeps::io::{ProjectReport, render_json, write_failure_log};
use classdeps::{BatchAnalyzer, FileWalker, Settings};
use std::sync::Arc;

fn analyzer() -> BatchAnalyzer {
    BatchAnalyzer::new(2)
}

#[test]
fn test_fixture_tree_with_one_malformed_file() {
    let walker = FileWalker::new(Arc::new(Settings::default()));
    let sources = walker.load_sources(&fixtures_dir()).unwrap();
    assert_eq!(sources.len(), 5);

    let report = analyzer().analyze(&sources).unwrap();

    assert_eq!(report.success_count(), 4);
    assert_eq!(report.failure_count(), 1);

    let failed: Vec<_> = report.failures().collect();
    assert_eq!(failed[0].file_name, "Broken.java");
    assert_eq!(failed[0].cause.as_ref().map(|c| c.line()), Some(3));

    let mut names: Vec<&str> = report.units.iter().map(|u| u.name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["Status", "User", "UserRepository", "UserService"]);

    // The failure did not disturb its neighbours
    let service = report
        .units
        .iter()
        .find(|u| u.name == "UserService")
        .unwrap();
    assert_eq!(service.methods.len(), 5);
    assert!(service.dependencies.contains("UserRepository"));
}

#[test]
fn test_walker_skips_other_extensions_and_hidden() {
    let project = TestProject::new();
    project.add_file("src/A.java", "public class A { public void f() { b.g(); } }");
    project.add_file("src/B.java", "public class B { public void g() { } }");
    project.add_file("src/notes.txt", "class NotJava { }");
    project.add_file(".hidden/C.java", "public class C { }");

    let walker = FileWalker::new(Arc::new(Settings::default()));
    let sources = walker.load_sources(project.path()).unwrap();
    let names: Vec<&str> = sources.iter().map(|s| s.file_name.as_str()).collect();
    assert_eq!(names, vec!["A.java", "B.java"]);

    let report = analyzer().analyze(&sources).unwrap();
    assert_eq!(report.failure_count(), 0);
    let a = &report.units[0];
    assert_eq!(a.dependencies.iter().collect::<Vec<_>>(), vec!["B"]);
}

#[test]
fn test_json_report_and_failure_log() {
    let project = TestProject::new();
    project.add_file("Good.java", "public class Good { public void ok() { } }");
    project.add_file("Bad.java", "public class Bad extends {");

    let walker = FileWalker::new(Arc::new(Settings::default()));
    let sources = walker.load_sources(project.path()).unwrap();
    let report = analyzer().analyze(&sources).unwrap();

    let project_report = ProjectReport::new("sample", &report);
    let json: serde_json::Value =
        serde_json::from_str(&render_json(&project_report).unwrap()).unwrap();
    assert_eq!(json["total_classes"], 1);
    assert_eq!(json["classes"][0]["name"], "Good");
    assert_eq!(json["failures"][0]["file_name"], "Bad.java");

    let log_path = project.path().join("out").join("failures.log");
    assert!(write_failure_log(&log_path, &report).unwrap());
    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("Bad.java (line 1)"));
}
