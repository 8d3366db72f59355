use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::de::DecodeContext;
use crate::error::MapError;
use crate::reflection::{FromReflect, Reflect};
use crate::value::Value;

impl<V: Reflect> Reflect for BTreeMap<String, V> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_value()))
                .collect(),
        )
    }
}

impl<V: FromReflect> FromReflect for BTreeMap<String, V> {
    /// Collects every label the keyed view exposes, so a map target also
    /// absorbs an aggregate source: field names become keys.
    fn from_reflect(ctx: &DecodeContext<'_>) -> Result<Self, MapError> {
        let keyed = ctx.keyed();
        let mut entries = BTreeMap::new();
        for key in keyed.all_keys() {
            entries.insert(String::from(key), keyed.decode(key)?);
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;

    use crate::de::DecodeContext;
    use crate::reflection::{FromReflect, Reflect};
    use crate::value::{Atom, Value, ValueKind};

    #[test]
    fn round_trip() {
        let mut source = BTreeMap::new();
        source.insert(String::from("KEY"), 1_i64);

        let value = source.to_value();
        assert_eq!(value.kind(), ValueKind::Map);
        let decoded = BTreeMap::<String, i64>::from_reflect(&DecodeContext::root(&value)).unwrap();
        assert_eq!(decoded, source);
    }

    #[test]
    fn aggregate_source_projects_by_field_name() {
        let value = Value::Aggregate(vec![
            ("a".into(), Value::Leaf(Atom::Int(1))),
            ("b".into(), Value::Leaf(Atom::Int(2))),
        ]);
        let decoded = BTreeMap::<String, i64>::from_reflect(&DecodeContext::root(&value)).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded["a"], 1);
        assert_eq!(decoded["b"], 2);
    }
}
