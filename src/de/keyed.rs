use alloc::borrow::{Cow, ToOwned};
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::access::{CodingPath, PathSegment};
use crate::error::MapError;
use crate::reflection::FromReflect;
use crate::value::Value;

use super::{DecodeContext, UnkeyedDecoder};

const NO_FIELDS: &[(Cow<'static, str>, Value)] = &[];

// -----------------------------------------------------------------------------
// Backing

#[derive(Debug)]
enum KeyedBacking<'a> {
    /// Labeled fields of a source aggregate. Non-aggregate, non-map
    /// sources use this variant with an empty field list, so every probe
    /// reports absence rather than failing hard.
    Fields(&'a [(Cow<'static, str>, Value)]),
    /// String-keyed entries of a source map.
    Entries(&'a BTreeMap<String, Value>),
}

// -----------------------------------------------------------------------------
// Keyed decoder

/// The keyed decoding container: named access to a source's children.
///
/// Derived either from an [`Aggregate`](Value::Aggregate) (labels are the
/// field names, declaration order) or from a [`Map`](Value::Map) (labels
/// are the map keys, enumeration order unspecified). Since the target key
/// domain is plain strings, every source key is addressable and none are
/// skipped.
///
/// Absence and nullness are distinct: [`contains`](Self::contains) reports
/// whether a label exists at all, while [`is_nil`](Self::is_nil) reports
/// whether an existing label holds the null atom.
#[derive(Debug)]
pub struct KeyedDecoder<'a> {
    backing: KeyedBacking<'a>,
    path: CodingPath,
}

impl<'a> KeyedDecoder<'a> {
    pub(super) fn new(ctx: &DecodeContext<'a>) -> Self {
        let backing = match ctx.value() {
            Value::Map(entries) => KeyedBacking::Entries(entries),
            Value::Aggregate(fields) => KeyedBacking::Fields(fields),
            _ => KeyedBacking::Fields(NO_FIELDS),
        };
        Self {
            backing,
            path: ctx.coding_path().clone(),
        }
    }

    /// Every label the source exposes.
    ///
    /// Aggregate labels come in declaration order; map keys in an
    /// unspecified order that callers must not depend on.
    pub fn all_keys(&self) -> Vec<&'a str> {
        match &self.backing {
            KeyedBacking::Fields(fields) => {
                fields.iter().map(|(name, _)| name.as_ref()).collect()
            }
            KeyedBacking::Entries(entries) => entries.keys().map(String::as_str).collect(),
        }
    }

    /// Whether `key` appears among the source's labels.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Whether `key` is present *and* holds the null atom.
    ///
    /// Absence is reported by [`contains`](Self::contains), never here: an
    /// absent key is not nil, it does not exist.
    pub fn is_nil(&self, key: &str) -> bool {
        self.get(key).is_some_and(Value::is_null)
    }

    /// Decodes the value at `key` as `T`.
    ///
    /// An absent key is resolved through
    /// [`FromReflect::from_absent`], so required targets report
    /// [`MissingField`](crate::MapErrorKind::MissingField) while optional
    /// targets come back empty.
    pub fn decode<T: FromReflect>(&self, key: &str) -> Result<T, MapError> {
        match self.get(key) {
            Some(value) => T::from_reflect(&self.child(key, value)),
            None => T::from_absent(self.child_path(key), key),
        }
    }

    /// Decodes the value at `key` as `T`, treating both an absent key and
    /// a present null as `None`.
    pub fn decode_if_present<T: FromReflect>(&self, key: &str) -> Result<Option<T>, MapError> {
        match self.get(key) {
            Some(value) if value.is_null() => Ok(None),
            Some(value) => T::from_reflect(&self.child(key, value)).map(Some),
            None => Ok(None),
        }
    }

    /// A nested keyed container for the value at `key`.
    ///
    /// Supported for aggregate-backed containers by recursing through the
    /// child; map-backed containers reject the operation.
    pub fn nested_keyed(&self, key: &str) -> Result<KeyedDecoder<'a>, MapError> {
        self.nested(key, "nested keyed container")
            .map(|ctx| ctx.keyed())
    }

    /// A nested unkeyed container for the value at `key`.
    ///
    /// Same support rules as [`nested_keyed`](Self::nested_keyed).
    pub fn nested_unkeyed(&self, key: &str) -> Result<UnkeyedDecoder<'a>, MapError> {
        self.nested(key, "nested unkeyed container")
            .map(|ctx| ctx.unkeyed())
    }

    /// Always unsupported; class inheritance has no counterpart here.
    pub fn super_decoder(&self) -> Result<DecodeContext<'a>, MapError> {
        Err(MapError::unsupported(self.path.clone(), "super decoder"))
    }

    fn nested(&self, key: &str, op: &'static str) -> Result<DecodeContext<'a>, MapError> {
        match &self.backing {
            KeyedBacking::Entries(_) => Err(MapError::unsupported(self.path.clone(), op)),
            KeyedBacking::Fields(_) => match self.get(key) {
                Some(value) => Ok(self.child(key, value)),
                None => Err(MapError::missing_field(self.child_path(key), key)),
            },
        }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        match &self.backing {
            KeyedBacking::Fields(fields) => fields
                .iter()
                .find(|(name, _)| name.as_ref() == key)
                .map(|(_, value)| value),
            KeyedBacking::Entries(entries) => entries.get(key),
        }
    }

    fn child_path(&self, key: &str) -> CodingPath {
        self.path.child(PathSegment::key(key.to_owned()))
    }

    fn child(&self, key: &str, value: &'a Value) -> DecodeContext<'a> {
        DecodeContext::new(value, self.child_path(key))
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;

    use crate::access::{CodingPath, PathSegment};
    use crate::de::DecodeContext;
    use crate::error::MapErrorKind;
    use crate::value::{Atom, Value};

    fn aggregate() -> Value {
        Value::Aggregate(vec![
            ("id".into(), Value::Leaf(Atom::Int(7))),
            ("note".into(), Value::NULL),
        ])
    }

    fn map_value() -> Value {
        let mut entries = BTreeMap::new();
        entries.insert(String::from("KEY"), Value::Leaf(Atom::Int(1)));
        Value::Map(entries)
    }

    #[test]
    fn aggregate_backed_probing() {
        let value = aggregate();
        let keyed = DecodeContext::root(&value).keyed();

        assert_eq!(keyed.all_keys(), ["id", "note"]);
        assert!(keyed.contains("id"));
        assert!(!keyed.contains("missing"));
        assert!(keyed.is_nil("note"));
        assert!(!keyed.is_nil("id"));
        // Absent is not nil.
        assert!(!keyed.is_nil("missing"));
    }

    #[test]
    fn map_backed_probing() {
        let value = map_value();
        let keyed = DecodeContext::root(&value).keyed();

        assert_eq!(keyed.all_keys(), ["KEY"]);
        assert!(keyed.contains("KEY"));
        assert_eq!(keyed.decode::<i64>("KEY").unwrap(), 1);
    }

    #[test]
    fn keyed_request_on_leaf_presents_no_keys() {
        let value = Value::Leaf(Atom::Int(1));
        let keyed = DecodeContext::root(&value).keyed();

        assert!(keyed.all_keys().is_empty());
        assert!(!keyed.contains("id"));

        let error = keyed.decode::<i64>("id").unwrap_err();
        assert!(matches!(error.kind(), MapErrorKind::MissingField { key } if key == "id"));
        assert_eq!(
            error.path(),
            &CodingPath::root().child(PathSegment::key("id"))
        );
    }

    #[test]
    fn decode_if_present_absorbs_absence_and_null() {
        let value = aggregate();
        let keyed = DecodeContext::root(&value).keyed();

        assert_eq!(keyed.decode_if_present::<i64>("id").unwrap(), Some(7));
        assert_eq!(keyed.decode_if_present::<String>("note").unwrap(), None);
        assert_eq!(keyed.decode_if_present::<String>("missing").unwrap(), None);
    }

    #[test]
    fn nested_containers_rejected_on_map_backed() {
        let value = map_value();
        let keyed = DecodeContext::root(&value).keyed();

        let error = keyed.nested_keyed("KEY").unwrap_err();
        assert!(matches!(
            error.kind(),
            MapErrorKind::UnsupportedOperation { .. }
        ));
    }

    #[test]
    fn nested_containers_recurse_on_aggregate_backed() {
        let value = Value::Aggregate(vec![("inner".into(), aggregate())]);
        let keyed = DecodeContext::root(&value).keyed();

        let inner = keyed.nested_keyed("inner").unwrap();
        assert_eq!(inner.decode::<i64>("id").unwrap(), 7);
    }

    #[test]
    fn super_decoder_is_unsupported() {
        let value = aggregate();
        let keyed = DecodeContext::root(&value).keyed();
        let error = keyed.super_decoder().unwrap_err();
        assert!(matches!(
            error.kind(),
            MapErrorKind::UnsupportedOperation { op } if *op == "super decoder"
        ));
    }
}
