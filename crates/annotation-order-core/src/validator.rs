//! Order validation for one declaration's annotations.

use crate::catalog::OrderingCatalog;
use crate::model::DeclarationKind;

/// An annotation singled out by validation, by position in the observed
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offense {
    /// Zero-based index in the observed sequence.
    pub index: usize,
    /// The annotation name as observed.
    pub name: String,
}

impl Offense {
    fn new(index: usize, name: &str) -> Self {
        Self {
            index,
            name: name.to_string(),
        }
    }
}

/// Overall outcome of checking one declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Recognized annotations appear in canonical order.
    Valid,
    /// The first annotation whose rank falls below one already accepted.
    OutOfOrder(Offense),
    /// The declaration kind has no configured convention.
    KindUnsupported,
}

/// Result of [`OrderValidator::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// Overall outcome.
    pub verdict: Verdict,
    /// Names with no configured position, within the scanned prefix.
    ///
    /// These never change the verdict.
    pub unranked: Vec<Offense>,
}

impl ValidationResult {
    fn valid() -> Self {
        Self {
            verdict: Verdict::Valid,
            unranked: Vec::new(),
        }
    }

    /// Returns true if no ordering violation or unsupported kind was found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.verdict == Verdict::Valid
    }

    /// Returns true if nothing at all was reported.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.is_valid() && self.unranked.is_empty()
    }

    /// Returns the out-of-order annotation, if any.
    #[must_use]
    pub fn out_of_order(&self) -> Option<&Offense> {
        match &self.verdict {
            Verdict::OutOfOrder(offense) => Some(offense),
            _ => None,
        }
    }
}

/// Checks observed annotation sequences against an [`OrderingCatalog`].
///
/// Holds only a shared reference to the catalog; checks are pure and can run
/// concurrently from any number of threads.
#[derive(Debug, Clone, Copy)]
pub struct OrderValidator<'a> {
    catalog: &'a OrderingCatalog,
}

impl<'a> OrderValidator<'a> {
    /// Creates a validator over `catalog`.
    #[must_use]
    pub fn new(catalog: &'a OrderingCatalog) -> Self {
        Self { catalog }
    }

    /// Returns the catalog this validator consults.
    #[must_use]
    pub fn catalog(&self) -> &'a OrderingCatalog {
        self.catalog
    }

    /// Checks the annotations observed on one declaration, in source order.
    ///
    /// An empty sequence is trivially valid. Scanning stops at the first
    /// out-of-order annotation; unranked names after it are not evaluated.
    #[must_use]
    pub fn check<S: AsRef<str>>(&self, kind: DeclarationKind, observed: &[S]) -> ValidationResult {
        if observed.is_empty() {
            return ValidationResult::valid();
        }

        let Some(entry) = self.catalog.entry(kind) else {
            return ValidationResult {
                verdict: Verdict::KindUnsupported,
                unranked: Vec::new(),
            };
        };

        let order = entry.names();
        let mut result = ValidationResult::valid();
        // Lowest position an accepted annotation may still occupy; never moves back.
        let mut rank = 0;

        for (index, name) in observed.iter().map(|s| s.as_ref()).enumerate() {
            if !entry.contains(name) {
                if !entry.is_exempt(name) {
                    result.unranked.push(Offense::new(index, name));
                }
                continue;
            }

            while rank < order.len() && order[rank].as_str() != name {
                rank += 1;
            }

            if rank == order.len() {
                result.verdict = Verdict::OutOfOrder(Offense::new(index, name));
                break;
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OrderingKind;

    fn builtin() -> OrderingCatalog {
        OrderingCatalog::builtin().unwrap()
    }

    fn offense(index: usize, name: &str) -> Offense {
        Offense::new(index, name)
    }

    #[test]
    fn canonical_subsequence_is_valid() {
        let catalog = builtin();
        let validator = OrderValidator::new(&catalog);
        let result = validator.check(
            DeclarationKind::Method,
            &["Override", "Transactional", "Operation"],
        );
        assert!(result.is_clean());
    }

    #[test]
    fn full_canonical_order_is_valid() {
        let catalog = builtin();
        let validator = OrderValidator::new(&catalog);
        for kind in DeclarationKind::ALL {
            if let Some(order) = catalog.order_for(kind) {
                assert!(validator.check(kind, order).is_clean(), "{kind}");
            }
        }
    }

    #[test]
    fn single_recognized_name_is_valid() {
        let catalog = builtin();
        let validator = OrderValidator::new(&catalog);
        assert!(validator.check(DeclarationKind::Field, &["Column"]).is_clean());
    }

    #[test]
    fn single_unrecognized_name_is_unranked_but_valid() {
        let catalog = builtin();
        let validator = OrderValidator::new(&catalog);
        let result = validator.check(DeclarationKind::Field, &["Foo"]);
        assert!(result.is_valid());
        assert_eq!(result.unranked, vec![offense(0, "Foo")]);
    }

    #[test]
    fn regression_reports_later_annotation() {
        let catalog = OrderingCatalog::builder()
            .order(OrderingKind::MethodOrConstructor, ["Override", "Deprecated", "Test"])
            .build()
            .unwrap();
        let validator = OrderValidator::new(&catalog);
        let result = validator.check(DeclarationKind::Method, &["Test", "Override"]);
        assert_eq!(result.verdict, Verdict::OutOfOrder(offense(1, "Override")));
    }

    #[test]
    fn deprecated_before_override_is_out_of_order() {
        let catalog = builtin();
        let validator = OrderValidator::new(&catalog);
        let result = validator.check(DeclarationKind::Method, &["Deprecated", "Override", "Test"]);
        assert_eq!(result.out_of_order(), Some(&offense(1, "Override")));
    }

    #[test]
    fn unranked_name_does_not_take_part_in_ranking() {
        let catalog = builtin();
        let validator = OrderValidator::new(&catalog);
        let result = validator.check(DeclarationKind::Method, &["Override", "Foo", "Test"]);
        assert!(result.is_valid());
        assert_eq!(result.unranked, vec![offense(1, "Foo")]);
    }

    #[test]
    fn enable_prefix_is_exempt_on_class() {
        let catalog = builtin();
        let validator = OrderValidator::new(&catalog);
        assert!(validator
            .check(DeclarationKind::Class, &["EnableCaching"])
            .is_clean());
        assert!(validator
            .check(DeclarationKind::Enum, &["EnableScheduling"])
            .is_clean());
    }

    #[test]
    fn enable_prefix_is_reported_on_other_kinds() {
        let catalog = builtin();
        let validator = OrderValidator::new(&catalog);
        let result = validator.check(DeclarationKind::Method, &["EnableCaching"]);
        assert_eq!(result.unranked, vec![offense(0, "EnableCaching")]);
    }

    #[test]
    fn unsupported_kind_ignores_content() {
        let catalog = builtin();
        let validator = OrderValidator::new(&catalog);
        for names in [
            &["Override"][..],
            &["Foo", "Bar"][..],
            &["Deprecated", "Override"][..],
        ] {
            let result = validator.check(DeclarationKind::AnnotationType, names);
            assert_eq!(result.verdict, Verdict::KindUnsupported);
            assert!(result.unranked.is_empty());
        }
    }

    #[test]
    fn empty_sequence_is_trivially_valid() {
        let catalog = builtin();
        let validator = OrderValidator::new(&catalog);
        let empty: [&str; 0] = [];
        assert!(validator.check(DeclarationKind::AnnotationType, &empty).is_clean());
    }

    #[test]
    fn scan_stops_at_first_violation() {
        let catalog = builtin();
        let validator = OrderValidator::new(&catalog);
        let result = validator.check(
            DeclarationKind::Method,
            &["Foo", "Test", "Override", "Bar", "Deprecated"],
        );
        assert_eq!(result.out_of_order(), Some(&offense(2, "Override")));
        // Bar comes after the stopping point and is never evaluated.
        assert_eq!(result.unranked, vec![offense(0, "Foo")]);
    }

    #[test]
    fn repeated_name_is_accepted_in_place() {
        let catalog = builtin();
        let validator = OrderValidator::new(&catalog);
        let result = validator.check(DeclarationKind::Method, &["Override", "Override", "Test"]);
        assert!(result.is_valid());
    }

    #[test]
    fn check_is_idempotent() {
        let catalog = builtin();
        let validator = OrderValidator::new(&catalog);
        let names = ["Getter", "Entity", "Lombok"];
        assert_eq!(
            validator.check(DeclarationKind::Class, &names),
            validator.check(DeclarationKind::Class, &names)
        );
    }

    #[test]
    fn catalog_is_shared_across_threads() {
        let catalog = builtin();
        let validator = OrderValidator::new(&catalog);
        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    s.spawn(move || {
                        validator.check(DeclarationKind::Parameter, &["RequestBody", "Valid"])
                    })
                })
                .collect();
            for handle in handles {
                let result = handle.join().unwrap();
                assert_eq!(result.out_of_order(), Some(&offense(1, "Valid")));
            }
        });
    }
}
