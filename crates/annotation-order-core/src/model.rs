//! Pure domain model: annotation names and declaration kinds.
//!
//! This module contains no serde-driven I/O. Names are validated at
//! construction time so the catalog and validator can trust them.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

// ────────────────────────────────────────────
// Newtypes with validation
// ────────────────────────────────────────────

/// A validated annotation simple name (e.g. `Override`, `Deprecated`).
///
/// Case-sensitive, non-empty, no whitespace. Package qualification is not
/// part of the name; use [`AnnotationName::simple`] to strip it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AnnotationName(String);

impl AnnotationName {
    /// Creates a new annotation name.
    ///
    /// # Errors
    ///
    /// Returns error if the name is empty or contains whitespace.
    pub fn new(name: &str) -> Result<Self, ModelError> {
        if name.is_empty() {
            return Err(ModelError::EmptyAnnotationName);
        }
        if name.chars().any(char::is_whitespace) {
            return Err(ModelError::InvalidAnnotationName {
                name: name.to_string(),
            });
        }
        Ok(Self(name.to_string()))
    }

    /// Reduces a spelling as written in source to its simple name.
    ///
    /// `@org.springframework.stereotype.Service` becomes `Service`.
    ///
    /// # Errors
    ///
    /// Returns error if nothing usable remains after stripping.
    pub fn simple(raw: &str) -> Result<Self, ModelError> {
        let trimmed = raw.trim().trim_start_matches('@').trim();
        let simple = trimmed.rsplit('.').next().unwrap_or(trimmed);
        Self::new(simple)
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnnotationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Borrow<str> for AnnotationName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AnnotationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AnnotationName {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<AnnotationName> for String {
    fn from(name: AnnotationName) -> Self {
        name.0
    }
}

// ────────────────────────────────────────────
// Declaration kinds
// ────────────────────────────────────────────

/// Syntactic position a set of annotations decorates, as reported by a
/// declaration walker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeclarationKind {
    /// `class Foo`
    Class,
    /// `enum Foo`
    Enum,
    /// `record Foo(...)`
    Record,
    /// `interface Foo`
    Interface,
    /// `@interface Foo`
    AnnotationType,
    /// A method declaration.
    Method,
    /// A constructor declaration.
    Constructor,
    /// A field or local variable declaration.
    Field,
    /// A method or constructor parameter.
    Parameter,
}

impl DeclarationKind {
    /// All kinds a walker may report.
    pub const ALL: [Self; 9] = [
        Self::Class,
        Self::Enum,
        Self::Record,
        Self::Interface,
        Self::AnnotationType,
        Self::Method,
        Self::Constructor,
        Self::Field,
        Self::Parameter,
    ];

    /// Returns the catalog key this kind is ordered by, if any.
    ///
    /// Enum shares the class ordering; constructor shares the method ordering.
    #[must_use]
    pub fn ordering_kind(self) -> Option<OrderingKind> {
        match self {
            Self::Class | Self::Enum => Some(OrderingKind::Class),
            Self::Interface => Some(OrderingKind::Interface),
            Self::Method | Self::Constructor => Some(OrderingKind::MethodOrConstructor),
            Self::Field => Some(OrderingKind::Field),
            Self::Parameter => Some(OrderingKind::Parameter),
            Self::Record | Self::AnnotationType => None,
        }
    }

    /// Human-readable label used in diagnostics.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Enum => "enum",
            Self::Record => "record",
            Self::Interface => "interface",
            Self::AnnotationType => "annotation type",
            Self::Method => "method",
            Self::Constructor => "constructor",
            Self::Field => "field",
            Self::Parameter => "parameter",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Catalog key: the five conventions an [`crate::OrderingCatalog`] can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderingKind {
    /// Classes and enums.
    Class,
    /// Interfaces.
    Interface,
    /// Methods and constructors.
    #[serde(rename = "method")]
    MethodOrConstructor,
    /// Fields.
    Field,
    /// Parameters.
    Parameter,
}

impl OrderingKind {
    /// All catalog keys in display order.
    pub const ALL: [Self; 5] = [
        Self::Class,
        Self::Interface,
        Self::MethodOrConstructor,
        Self::Field,
        Self::Parameter,
    ];

    /// Configuration key for this kind (e.g. `"method"`).
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::MethodOrConstructor => "method",
            Self::Field => "field",
            Self::Parameter => "parameter",
        }
    }

    /// Looks up a kind by its configuration key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.key() == key)
    }
}

impl fmt::Display for OrderingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────

/// Validation errors for model newtypes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Annotation name was empty.
    #[error("annotation name must not be empty")]
    EmptyAnnotationName,

    /// Annotation name contained whitespace.
    #[error("invalid annotation name `{name}`: must not contain whitespace")]
    InvalidAnnotationName {
        /// The rejected name.
        name: String,
    },
}
