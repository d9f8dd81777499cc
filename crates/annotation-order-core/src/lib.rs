//! # annotation-order-core
//!
//! Canonical annotation ordering for declarations.
//!
//! An external walker reports, per declaration, its kind and the annotation
//! names in source order. This crate checks each sequence against a
//! per-kind reference order:
//!
//! - [`OrderingCatalog`] holds the canonical order for each kind
//! - [`OrderValidator`] runs the forward-only rank scan on one declaration
//! - [`AnnotationOrderRule`] turns results into [`Violation`]s
//! - [`Config`] overlays the builtin conventions from TOML
//!
//! ## Example
//!
//! ```
//! use annotation_order_core::{DeclarationKind, OrderValidator, OrderingCatalog};
//!
//! let catalog = OrderingCatalog::builtin()?;
//! let validator = OrderValidator::new(&catalog);
//!
//! let result = validator.check(DeclarationKind::Method, &["Deprecated", "Override"]);
//! assert_eq!(result.out_of_order().map(|o| o.name.as_str()), Some("Override"));
//! # Ok::<(), annotation_order_core::CatalogError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod config;
mod model;
mod rule;
mod types;
mod validator;

pub mod builtin;
pub mod declaration;

pub use catalog::{CanonicalOrder, CatalogError, OrderingCatalog, OrderingCatalogBuilder};
pub use config::{Config, ConfigError};
pub use declaration::{AnnotationSite, Declaration, DeclarationError, SourceUnit, WalkerOutput};
pub use model::{AnnotationName, DeclarationKind, ModelError, OrderingKind};
pub use rule::{AnnotationOrderRule, DiagnosticKind};
pub use types::{Label, LintResult, Location, Severity, Suggestion, Violation, ViolationDiagnostic};
pub use validator::{Offense, OrderValidator, ValidationResult, Verdict};
