//! Field declarations and header resolution.
//!
//! A record type exposes its shape as an ordered list of [`FieldSpec`]s.
//! [`header_for`] reads the declared column keys back out of that list, and
//! [`Binding::resolve`] matches a concrete header against it once per
//! load/dump call.

use crate::record::Record;
use crate::values::ScalarKind;
use std::collections::HashMap;

/// One field of a record type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Field name as declared in the record type.
    pub name: &'static str,
    /// Declared column key; `None` keeps the field out of the mapping.
    pub column: Option<&'static str>,
    /// Scalar kind of the field.
    pub kind: ScalarKind,
}

/// Ordered column keys declared by a record type.
///
/// Fields without a column key are skipped entirely; no placeholder is
/// emitted for them.
pub fn header_for<R: Record>() -> Vec<String> {
    R::fields()
        .iter()
        .filter_map(|spec| spec.column.map(str::to_string))
        .collect()
}

/// A resolved column: a header position paired with a field position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundColumn {
    /// Position of the column in the header.
    pub column: usize,
    /// Position of the receiving field in the record type.
    pub field: usize,
}

/// Per-call mapping from header positions to record field positions.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    pairs: Vec<BoundColumn>,
}

impl Binding {
    /// Match a header against a record type's field declarations.
    ///
    /// Header keys are trimmed before comparison. A key appearing twice in
    /// the header resolves to its later position, and a key declared by two
    /// fields goes to the first-declared field; both are compatibility
    /// choices, not guarantees. Keys without a matching field and fields
    /// without a matching key are left out silently.
    pub fn resolve(header: &[String], fields: &[FieldSpec]) -> Binding {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        for (column, key) in header.iter().enumerate() {
            positions.insert(key.trim(), column);
        }

        let mut pairs = Vec::new();
        for (field, spec) in fields.iter().enumerate() {
            let Some(key) = spec.column else { continue };
            if let Some(column) = positions.remove(key) {
                pairs.push(BoundColumn { column, field });
            }
        }

        Binding { pairs }
    }

    /// Iterate the resolved pairs in field declaration order.
    pub fn iter(&self) -> impl Iterator<Item = BoundColumn> + '_ {
        self.pairs.iter().copied()
    }

    /// Number of resolved pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True when nothing resolved.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::record! {
        pub struct Sample {
            pub name: String => "name",
            pub count: i64 => "count",
            pub internal: f64,
            pub ratio: f64 => "ratio",
        }
    }

    fn keys(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_header_for_skips_unannotated_fields() {
        assert_eq!(header_for::<Sample>(), vec!["name", "count", "ratio"]);
    }

    #[test]
    fn test_resolve_pairs_columns_to_fields() {
        let binding = Binding::resolve(&keys(&["ratio", "name"]), Sample::fields());
        let pairs: Vec<_> = binding.iter().collect();
        assert_eq!(
            pairs,
            vec![
                BoundColumn { column: 1, field: 0 },
                BoundColumn { column: 0, field: 3 },
            ]
        );
    }

    #[test]
    fn test_resolve_trims_header_keys() {
        let binding = Binding::resolve(&keys(&[" name ", "\tcount"]), Sample::fields());
        assert_eq!(binding.len(), 2);
    }

    #[test]
    fn test_unknown_keys_resolve_to_nothing() {
        let binding = Binding::resolve(&keys(&["missing", "name"]), Sample::fields());
        let pairs: Vec<_> = binding.iter().collect();
        assert_eq!(pairs, vec![BoundColumn { column: 1, field: 0 }]);
    }

    #[test]
    fn test_empty_header_is_a_trivial_binding() {
        let binding = Binding::resolve(&[], Sample::fields());
        assert!(binding.is_empty());
    }

    #[test]
    fn test_duplicate_header_key_later_column_wins() {
        let binding = Binding::resolve(&keys(&["name", "count", "name"]), Sample::fields());
        let pairs: Vec<_> = binding.iter().collect();
        assert_eq!(
            pairs,
            vec![
                BoundColumn { column: 2, field: 0 },
                BoundColumn { column: 1, field: 1 },
            ]
        );
    }

    #[test]
    fn test_shared_field_key_first_declaration_wins() {
        crate::record! {
            pub struct Twice {
                pub first: String => "shared",
                pub second: String => "shared",
            }
        }

        let binding = Binding::resolve(&keys(&["shared"]), Twice::fields());
        let pairs: Vec<_> = binding.iter().collect();
        assert_eq!(pairs, vec![BoundColumn { column: 0, field: 0 }]);
    }

    #[test]
    fn test_fields_without_keys_are_never_targets() {
        let binding = Binding::resolve(&keys(&["internal"]), Sample::fields());
        assert!(binding.is_empty());
    }
}
