#![allow(dead_code)]

use classdeps::{CompilationUnit, MethodUnit, SourceFile, parse_source};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch source tree that is removed when dropped
pub struct TestProject {
    pub dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.dir.path().join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Root of the checked-in Java fixture tree
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("java")
}

/// Read a fixture relative to [`fixtures_dir`]
pub fn load_fixture(relative: &str) -> SourceFile {
    let path = fixtures_dir().join(relative);
    let text = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {e}", path.display()));
    SourceFile::new(path, text)
}

/// Parse a fixture, panicking with the parse error on failure
pub fn parse_fixture(relative: &str) -> CompilationUnit {
    let source = load_fixture(relative);
    parse_source(&source.text, source.file_path)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {relative}: {e}"))
}

pub fn find_method<'a>(unit: &'a CompilationUnit, name: &str) -> Option<&'a MethodUnit> {
    unit.methods.iter().find(|m| m.name == name)
}

/// `(receiver, method)` pairs of a method's calls, for compact assertions
pub fn call_shapes(unit: &CompilationUnit, method: &str) -> Vec<(Option<String>, String)> {
    find_method(unit, method)
        .unwrap_or_else(|| panic!("method {method} not found in {}", unit.name))
        .calls
        .iter()
        .map(|c| (c.receiver.clone(), c.method_name.clone()))
        .collect()
}

pub fn dependency_names(unit: &CompilationUnit) -> Vec<&str> {
    unit.dependencies.iter().map(String::as_str).collect()
}
