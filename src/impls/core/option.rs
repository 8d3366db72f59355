use crate::access::CodingPath;
use crate::de::DecodeContext;
use crate::error::MapError;
use crate::reflection::{FromReflect, Reflect};
use crate::value::Value;

impl<T: Reflect> Reflect for Option<T> {
    /// `Some` lowers transparently to the inner value; `None` lowers to the
    /// present null.
    fn to_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::NULL,
        }
    }
}

impl<T: FromReflect> FromReflect for Option<T> {
    fn from_reflect(ctx: &DecodeContext<'_>) -> Result<Self, MapError> {
        if ctx.value().is_null() {
            Ok(None)
        } else {
            T::from_reflect(ctx).map(Some)
        }
    }

    /// An absent source field satisfies an optional target as `None`.
    fn from_absent(_path: CodingPath, _key: &str) -> Result<Self, MapError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use crate::de::DecodeContext;
    use crate::reflection::{FromReflect, Reflect};
    use crate::value::{Atom, Value};

    #[test]
    fn some_is_transparent() {
        let value = Some(1_i64).to_value();
        assert_eq!(value, Value::Leaf(Atom::Int(1)));
        assert_eq!(
            Option::<i64>::from_reflect(&DecodeContext::root(&value)).unwrap(),
            Some(1)
        );
    }

    #[test]
    fn none_is_the_present_null() {
        let value = Option::<i64>::None.to_value();
        assert_eq!(value, Value::NULL);
        assert_eq!(
            Option::<i64>::from_reflect(&DecodeContext::root(&value)).unwrap(),
            None
        );
    }

    #[test]
    fn inner_failure_propagates() {
        let value = Value::Leaf(Atom::Str("1".into()));
        assert!(Option::<i64>::from_reflect(&DecodeContext::root(&value)).is_err());
    }
}
