use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::value::Atom;

// -----------------------------------------------------------------------------
// Value

/// The reflected shape of a source value.
///
/// Every source lowers to exactly one of these four shapes; classification
/// is total and mutually exclusive by construction. The fifth outcome of
/// the data model, the absent-field sentinel, is deliberately *not* a
/// variant: absence is only ever the result of a failed labeled lookup and
/// is represented as `None` from [`child_by_label`](Value::child_by_label).
/// A present null is `Leaf(Atom::Null)`, which keeps "field missing" and
/// "field present and null" distinguishable.
///
/// # Examples
///
/// ```
/// use automap::Reflect;
/// use automap::value::ValueKind;
///
/// assert_eq!(1_i32.to_value().kind(), ValueKind::Leaf);
/// assert_eq!(vec![1, 2, 3].to_value().kind(), ValueKind::Sequence);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A primitive or otherwise opaque atom.
    Leaf(Atom),
    /// A positional, finite, ordered sequence.
    Sequence(Vec<Value>),
    /// A finite mapping with string keys. Enumeration order is
    /// unspecified; lookup by key is deterministic.
    Map(BTreeMap<String, Value>),
    /// A finite, ordered list of labeled fields. Labels are unique within
    /// an aggregate and enumerate in declaration order.
    Aggregate(Vec<(Cow<'static, str>, Value)>),
}

impl Value {
    /// The null leaf.
    pub const NULL: Value = Value::Leaf(Atom::Null);

    /// The classification of this value; total over all values.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Leaf(_) => ValueKind::Leaf,
            Value::Sequence(_) => ValueKind::Sequence,
            Value::Map(_) => ValueKind::Map,
            Value::Aggregate(_) => ValueKind::Aggregate,
        }
    }

    /// Looks up a labeled child.
    ///
    /// Defined for aggregates (linear scan over field labels, declaration
    /// order) and maps (keyed lookup). `None` is the absent-field
    /// sentinel: the label does not exist at all. Any other shape has no
    /// labeled children and always reports absence.
    pub fn child_by_label(&self, label: &str) -> Option<&Value> {
        match self {
            Value::Aggregate(fields) => fields
                .iter()
                .find(|(name, _)| name.as_ref() == label)
                .map(|(_, value)| value),
            Value::Map(entries) => entries.get(label),
            _ => None,
        }
    }

    /// Whether this value is the present null atom.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Leaf(Atom::Null))
    }
}

// -----------------------------------------------------------------------------
// Value kind

/// A pure classification of [`Value`], used in shape diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Leaf,
    Sequence,
    Map,
    Aggregate,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Leaf => "leaf",
            ValueKind::Sequence => "sequence",
            ValueKind::Map => "map",
            ValueKind::Aggregate => "aggregate",
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;

    use super::{Atom, Value, ValueKind};

    fn sample_aggregate() -> Value {
        Value::Aggregate(vec![
            ("id".into(), Value::Leaf(Atom::Int(7))),
            ("note".into(), Value::NULL),
        ])
    }

    #[test]
    fn classification_is_total() {
        assert_eq!(Value::Leaf(Atom::Bool(true)).kind(), ValueKind::Leaf);
        assert_eq!(Value::Sequence(vec![]).kind(), ValueKind::Sequence);
        assert_eq!(Value::Map(BTreeMap::new()).kind(), ValueKind::Map);
        assert_eq!(sample_aggregate().kind(), ValueKind::Aggregate);
    }

    #[test]
    fn child_by_label_on_aggregate() {
        let value = sample_aggregate();
        assert_eq!(value.child_by_label("id"), Some(&Value::Leaf(Atom::Int(7))));
        assert_eq!(value.child_by_label("missing"), None);
    }

    #[test]
    fn present_null_is_not_absent() {
        let value = sample_aggregate();
        let note = value.child_by_label("note");
        assert!(note.is_some());
        assert!(note.is_some_and(Value::is_null));
    }

    #[test]
    fn child_by_label_on_map() {
        let mut entries = BTreeMap::new();
        entries.insert(String::from("KEY"), Value::Leaf(Atom::Int(1)));
        let value = Value::Map(entries);

        assert_eq!(value.child_by_label("KEY"), Some(&Value::Leaf(Atom::Int(1))));
        assert_eq!(value.child_by_label("other"), None);
    }

    #[test]
    fn leaves_have_no_labeled_children() {
        assert_eq!(Value::Leaf(Atom::Int(1)).child_by_label("id"), None);
        assert_eq!(Value::Sequence(vec![]).child_by_label("id"), None);
    }
}
