//! Ordering catalog: the canonical annotation order per declaration kind.
//!
//! A catalog is assembled once through [`OrderingCatalogBuilder`] and is
//! read-only afterwards. It is `Send + Sync` and can be shared by reference
//! across any number of concurrent validations.

use std::collections::{BTreeMap, HashSet};

use crate::builtin;
use crate::model::{AnnotationName, DeclarationKind, ModelError, OrderingKind};

/// Errors raised while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The same name appears twice in one ordering.
    #[error("{kind} ordering lists `{name}` more than once")]
    DuplicateName {
        /// Ordering that holds the duplicate.
        kind: OrderingKind,
        /// The repeated name.
        name: String,
    },

    /// A configured name is not a valid annotation name.
    #[error("{kind} ordering: {source}")]
    InvalidName {
        /// Ordering that holds the invalid name.
        kind: OrderingKind,
        /// The underlying model error.
        source: ModelError,
    },

    /// An exempt prefix is empty, which would exempt every name.
    #[error("{kind} exempt prefixes: prefix must not be empty")]
    EmptyExemptPrefix {
        /// Ordering that holds the empty prefix.
        kind: OrderingKind,
    },
}

/// The canonical order for one ordering kind.
///
/// `recognized` is always derived from `order`.
#[derive(Debug, Clone)]
pub struct CanonicalOrder {
    order: Vec<AnnotationName>,
    recognized: HashSet<AnnotationName>,
    exempt_prefixes: Vec<String>,
}

impl CanonicalOrder {
    fn new(
        kind: OrderingKind,
        names: &[String],
        exempt_prefixes: Vec<String>,
    ) -> Result<Self, CatalogError> {
        let mut order = Vec::with_capacity(names.len());
        let mut recognized = HashSet::with_capacity(names.len());

        for raw in names {
            let name = AnnotationName::new(raw)
                .map_err(|source| CatalogError::InvalidName { kind, source })?;
            if !recognized.insert(name.clone()) {
                return Err(CatalogError::DuplicateName {
                    kind,
                    name: name.to_string(),
                });
            }
            order.push(name);
        }

        if exempt_prefixes.iter().any(String::is_empty) {
            return Err(CatalogError::EmptyExemptPrefix { kind });
        }

        Ok(Self {
            order,
            recognized,
            exempt_prefixes,
        })
    }

    /// Names in canonical order.
    #[must_use]
    pub fn names(&self) -> &[AnnotationName] {
        &self.order
    }

    /// Set view of [`Self::names`].
    #[must_use]
    pub fn recognized(&self) -> &HashSet<AnnotationName> {
        &self.recognized
    }

    /// Whether `name` has a configured position.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.recognized.contains(name)
    }

    /// Zero-based rank of `name`, if recognized.
    #[must_use]
    pub fn rank_of(&self, name: &str) -> Option<usize> {
        if !self.contains(name) {
            return None;
        }
        self.order.iter().position(|n| n.as_str() == name)
    }

    /// Prefixes whose unranked names are not reported.
    #[must_use]
    pub fn exempt_prefixes(&self) -> &[String] {
        &self.exempt_prefixes
    }

    /// Whether an unranked `name` is exempt from reporting.
    #[must_use]
    pub fn is_exempt(&self, name: &str) -> bool {
        self.exempt_prefixes
            .iter()
            .any(|prefix| name.starts_with(prefix.as_str()))
    }

    /// Number of ranked names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no names are ranked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Immutable mapping from ordering kind to its canonical order.
#[derive(Debug, Clone, Default)]
pub struct OrderingCatalog {
    orders: BTreeMap<OrderingKind, CanonicalOrder>,
}

impl OrderingCatalog {
    /// Creates a builder for a custom catalog.
    #[must_use]
    pub fn builder() -> OrderingCatalogBuilder {
        OrderingCatalogBuilder::new()
    }

    /// Builds the catalog from the builtin conventions.
    ///
    /// # Errors
    ///
    /// Returns an error if a builtin table is malformed.
    pub fn builtin() -> Result<Self, CatalogError> {
        OrderingCatalogBuilder::with_builtin().build()
    }

    /// Returns the canonical order entry for a declaration kind.
    #[must_use]
    pub fn entry(&self, kind: DeclarationKind) -> Option<&CanonicalOrder> {
        kind.ordering_kind().and_then(|k| self.orders.get(&k))
    }

    /// Returns the canonical order entry for a catalog key.
    #[must_use]
    pub fn entry_for(&self, kind: OrderingKind) -> Option<&CanonicalOrder> {
        self.orders.get(&kind)
    }

    /// Returns the canonical order for a declaration kind, or `None` if the
    /// kind has no configured convention.
    #[must_use]
    pub fn order_for(&self, kind: DeclarationKind) -> Option<&[AnnotationName]> {
        self.entry(kind).map(CanonicalOrder::names)
    }

    /// Returns the set of names with a configured position for `kind`.
    #[must_use]
    pub fn recognized_names(&self, kind: DeclarationKind) -> Option<&HashSet<AnnotationName>> {
        self.entry(kind).map(CanonicalOrder::recognized)
    }

    /// Returns the exempt prefixes for `kind` (empty if unsupported).
    #[must_use]
    pub fn exempt_prefixes(&self, kind: DeclarationKind) -> &[String] {
        self.entry(kind)
            .map(CanonicalOrder::exempt_prefixes)
            .unwrap_or(&[])
    }

    /// Returns the rank of `name` within `kind`'s order.
    #[must_use]
    pub fn rank_of(&self, kind: DeclarationKind, name: &str) -> Option<usize> {
        self.entry(kind).and_then(|entry| entry.rank_of(name))
    }

    /// Iterates configured entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (OrderingKind, &CanonicalOrder)> {
        self.orders.iter().map(|(k, v)| (*k, v))
    }

    /// Number of configured ordering kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Whether no ordering kind is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

/// Builder for an [`OrderingCatalog`].
///
/// Later calls for the same kind replace earlier ones, which lets a
/// configuration overlay the builtin tables.
#[derive(Debug, Default)]
pub struct OrderingCatalogBuilder {
    orders: BTreeMap<OrderingKind, Vec<String>>,
    exempt_prefixes: BTreeMap<OrderingKind, Vec<String>>,
}

impl OrderingCatalogBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-filled with the builtin conventions.
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut builder = Self::new();
        for kind in OrderingKind::ALL {
            builder = builder
                .order(kind, builtin::order(kind).iter().copied())
                .exempt_prefixes(kind, builtin::exempt_prefixes(kind).iter().copied());
        }
        builder
    }

    /// Sets the canonical order for `kind`.
    #[must_use]
    pub fn order<I, S>(mut self, kind: OrderingKind, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.orders
            .insert(kind, names.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the exempt prefixes for `kind`.
    #[must_use]
    pub fn exempt_prefixes<I, S>(mut self, kind: OrderingKind, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exempt_prefixes
            .insert(kind, prefixes.into_iter().map(Into::into).collect());
        self
    }

    /// Removes the order for `kind`, leaving it unsupported.
    #[must_use]
    pub fn without(mut self, kind: OrderingKind) -> Self {
        self.orders.remove(&kind);
        self
    }

    /// Validates every ordering and builds the catalog.
    ///
    /// Exempt prefixes for kinds without an order are ignored.
    ///
    /// # Errors
    ///
    /// Returns the first duplicate or invalid name found.
    pub fn build(mut self) -> Result<OrderingCatalog, CatalogError> {
        let mut orders = BTreeMap::new();
        for (kind, names) in &self.orders {
            let prefixes = self.exempt_prefixes.remove(kind).unwrap_or_default();
            let entry = CanonicalOrder::new(*kind, names, prefixes)?;
            tracing::debug!("catalog: {} ranks {} annotation(s)", kind, entry.len());
            orders.insert(*kind, entry);
        }
        Ok(OrderingCatalog { orders })
    }
}
