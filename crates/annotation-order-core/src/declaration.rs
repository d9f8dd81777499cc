//! Interchange types for the external declaration walker.
//!
//! The walker parses source files and emits, per file, the declarations that
//! carry annotations. This crate never looks at source text; it consumes the
//! walker's JSON output:
//!
//! ```json
//! {
//!   "path": "src/main/java/com/example/UserController.java",
//!   "declarations": [
//!     {
//!       "kind": "method",
//!       "name": "findUser",
//!       "line": 14,
//!       "column": 5,
//!       "annotations": [
//!         { "name": "GetMapping", "line": 12, "column": 5, "offset": 311, "length": 11 },
//!         { "name": "Override", "line": 13, "column": 5 }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! `offset` and `length` are optional byte spans of the annotation in the
//! source file; when present, the CLI can render the offending source.
//! A document may also be a JSON array of such units.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::model::DeclarationKind;
use crate::types::Location;

/// One annotation as it appears in source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationSite {
    /// Name as written; may be qualified or carry a leading `@`.
    pub name: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset of the annotation in the file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
    /// Length of the annotation in bytes, including the `@`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
}

impl AnnotationSite {
    /// Creates a new annotation site.
    #[must_use]
    pub fn new(name: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            name: name.into(),
            line,
            column,
            offset: None,
            length: None,
        }
    }

    /// Sets the byte span of this annotation.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = Some(offset);
        self.length = Some(length);
        self
    }

    /// Location of this annotation within `file`. Without a reported length
    /// the span covers `@` plus the name.
    #[must_use]
    pub fn location(&self, file: &Path) -> Location {
        let location = Location::new(file.to_path_buf(), self.line, self.column);
        match self.offset {
            Some(offset) => {
                let length = self.length.unwrap_or(self.name.trim_start_matches('@').len() + 1);
                location.with_span(offset, length)
            }
            None => location,
        }
    }
}

/// A declaration and its annotations in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Syntactic kind of the declaration.
    pub kind: DeclarationKind,
    /// Identifier, when the walker reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Annotations, left-to-right and top-to-bottom.
    #[serde(default)]
    pub annotations: Vec<AnnotationSite>,
}

impl Declaration {
    /// Creates a declaration with no annotations.
    #[must_use]
    pub fn new(kind: DeclarationKind, line: usize, column: usize) -> Self {
        Self {
            kind,
            name: None,
            line,
            column,
            annotations: Vec::new(),
        }
    }

    /// Sets the declaration identifier.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Appends an annotation.
    #[must_use]
    pub fn annotation(mut self, name: impl Into<String>, line: usize, column: usize) -> Self {
        self.annotations.push(AnnotationSite::new(name, line, column));
        self
    }

    /// Appends an already built annotation site.
    #[must_use]
    pub fn annotation_site(mut self, site: AnnotationSite) -> Self {
        self.annotations.push(site);
        self
    }

    /// Location of the declaration within `file`.
    #[must_use]
    pub fn location(&self, file: &Path) -> Location {
        Location::new(file.to_path_buf(), self.line, self.column)
    }

    /// Human-readable description, e.g. `method 'findUser'`.
    #[must_use]
    pub fn describe(&self) -> String {
        match &self.name {
            Some(name) => format!("{} '{name}'", self.kind),
            None => self.kind.to_string(),
        }
    }
}

/// All annotated declarations found in one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceUnit {
    /// File path relative to the project root.
    pub path: PathBuf,
    /// Declarations in source order.
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}

impl SourceUnit {
    /// Creates an empty unit for `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            declarations: Vec::new(),
        }
    }

    /// Appends a declaration.
    #[must_use]
    pub fn declaration(mut self, declaration: Declaration) -> Self {
        self.declarations.push(declaration);
        self
    }
}

/// Errors reading walker output.
#[derive(Debug, thiserror::Error)]
pub enum DeclarationError {
    /// IO error reading a walker output file.
    #[error("Failed to read walker output {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The document is not valid walker output.
    #[error("Failed to parse walker output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOutput {
    Many(Vec<SourceUnit>),
    One(SourceUnit),
}

/// Parsed walker output: one or more source units.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkerOutput {
    /// Units in document order.
    pub units: Vec<SourceUnit>,
}

impl WalkerOutput {
    /// Parses a JSON document holding one unit or an array of units.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not match either shape.
    pub fn from_json(content: &str) -> Result<Self, DeclarationError> {
        let units = match serde_json::from_str(content)? {
            RawOutput::Many(units) => units,
            RawOutput::One(unit) => vec![unit],
        };
        Ok(Self { units })
    }

    /// Reads and parses a walker output file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, DeclarationError> {
        let content = std::fs::read_to_string(path).map_err(|e| DeclarationError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// Total number of declarations across all units.
    #[must_use]
    pub fn declaration_count(&self) -> usize {
        self.units.iter().map(|u| u.declarations.len()).sum()
    }
}
