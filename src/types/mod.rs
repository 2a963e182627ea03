//! Extracted model: compilation units, methods and per-file outcomes

use crate::error::ParseError;
use crate::parsing::{MethodCall, TypeName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

/// Non-access modifiers recorded on a type declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Static,
    Final,
    Abstract,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Class,
    Interface,
    Enum,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
        }
    }
}

impl Modifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Static => "static",
            Self::Final => "final",
            Self::Abstract => "abstract",
        }
    }
}

impl UnitKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub type_name: TypeName,
    pub name: String,
}

impl Parameter {
    pub fn new(type_name: impl Into<TypeName>, name: &str) -> Self {
        Self {
            type_name: type_name.into(),
            name: name.to_string(),
        }
    }
}

/// A method declaration with the calls found in its body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodUnit {
    pub access: Option<Visibility>,
    pub name: String,
    pub return_type: TypeName,
    pub parameters: Vec<Parameter>,
    pub calls: Vec<MethodCall>,
    /// Line of the method name
    pub line: u32,
}

impl MethodUnit {
    /// `name(Type a, Type b)` for display
    pub fn signature(&self) -> String {
        let params: Vec<String> = self
            .parameters
            .iter()
            .map(|p| format!("{} {}", p.type_name, p.name))
            .collect();
        format!("{}({})", self.name, params.join(", "))
    }
}

/// Parsed representation of one source file's primary type declaration
///
/// Built once by the unit parser. Only `dependencies` changes afterwards,
/// filled in by [`crate::indexing::resolve_dependencies`] once the whole
/// batch is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilationUnit {
    pub file_path: PathBuf,
    pub package: Option<String>,
    pub kind: UnitKind,
    pub name: String,
    pub access: Option<Visibility>,
    pub modifiers: BTreeSet<Modifier>,
    pub superclass: Option<TypeName>,
    pub interfaces: Vec<TypeName>,
    pub imports: Vec<String>,
    pub methods: Vec<MethodUnit>,
    pub dependencies: BTreeSet<String>,
}

impl CompilationUnit {
    pub fn new(file_path: impl Into<PathBuf>, kind: UnitKind, name: &str) -> Self {
        Self {
            file_path: file_path.into(),
            package: None,
            kind,
            name: name.to_string(),
            access: None,
            modifiers: BTreeSet::new(),
            superclass: None,
            interfaces: Vec::new(),
            imports: Vec::new(),
            methods: Vec::new(),
            dependencies: BTreeSet::new(),
        }
    }

    /// `package.Name`, or just `Name` in the default package
    pub fn qualified_name(&self) -> String {
        match &self.package {
            Some(package) => format!("{}.{}", package, self.name),
            None => self.name.clone(),
        }
    }

    /// Total number of call sites across all methods
    pub fn call_count(&self) -> usize {
        self.methods.iter().map(|m| m.calls.len()).sum()
    }
}

/// One source file handed over by file discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub file_name: String,
    pub file_path: PathBuf,
    pub text: String,
}

impl SourceFile {
    pub fn new(file_path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let file_path = file_path.into();
        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            file_name,
            file_path,
            text: text.into(),
        }
    }
}

/// Per-file record of whether parsing succeeded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    pub file_name: String,
    pub file_path: PathBuf,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(skip)]
    pub cause: Option<ParseError>,
}

impl ParseOutcome {
    pub fn succeeded(source: &SourceFile) -> Self {
        Self {
            file_name: source.file_name.clone(),
            file_path: source.file_path.clone(),
            success: true,
            error_message: None,
            cause: None,
        }
    }

    pub fn failed(source: &SourceFile, error: ParseError) -> Self {
        Self {
            file_name: source.file_name.clone(),
            file_path: source.file_path.clone(),
            success: false,
            error_message: Some(error.to_string()),
            cause: Some(error),
        }
    }
}
