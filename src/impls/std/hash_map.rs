use alloc::string::String;
use core::hash::BuildHasher;
use std::collections::HashMap;

use crate::de::DecodeContext;
use crate::error::MapError;
use crate::reflection::{FromReflect, Reflect};
use crate::value::Value;

impl<V: Reflect, S> Reflect for HashMap<String, V, S> {
    /// Lowering re-keys into the ordered map shape, so downstream lookup is
    /// deterministic regardless of hasher iteration order.
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_value()))
                .collect(),
        )
    }
}

impl<V: FromReflect, S: BuildHasher + Default> FromReflect for HashMap<String, V, S> {
    fn from_reflect(ctx: &DecodeContext<'_>) -> Result<Self, MapError> {
        let keyed = ctx.keyed();
        let keys = keyed.all_keys();
        let mut entries = HashMap::with_capacity_and_hasher(keys.len(), S::default());
        for key in keys {
            entries.insert(String::from(key), keyed.decode(key)?);
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use std::collections::HashMap;

    use crate::de::DecodeContext;
    use crate::reflection::{FromReflect, Reflect};
    use crate::value::ValueKind;

    #[test]
    fn round_trip() {
        let mut source = HashMap::new();
        source.insert(String::from("KEY"), 1_i64);
        source.insert(String::from("KEY2"), 2_i64);

        let value = source.to_value();
        assert_eq!(value.kind(), ValueKind::Map);
        let decoded = HashMap::<String, i64>::from_reflect(&DecodeContext::root(&value)).unwrap();
        assert_eq!(decoded, source);
    }
}
