use crate::access::CodingPath;
use crate::error::MapError;
use crate::value::{Atom, Value, ValueKind};

use super::DecodeContext;

/// The single-value decoding container: a view of one leaf atom.
///
/// Decoding succeeds only when the source is a leaf whose atom is
/// representation-compatible with the requested primitive kind. A non-leaf
/// source reports [`TypeMismatch`](crate::MapErrorKind::TypeMismatch); a
/// leaf of the wrong atom kind reports
/// [`InvalidCast`](crate::MapErrorKind::InvalidCast). There is no
/// unchecked downcasting anywhere on this path.
pub struct SingleValueDecoder<'a> {
    value: &'a Value,
    path: CodingPath,
}

impl<'a> SingleValueDecoder<'a> {
    pub(super) fn new(ctx: &DecodeContext<'a>) -> Self {
        Self {
            value: ctx.value(),
            path: ctx.coding_path().clone(),
        }
    }

    /// Whether the wrapped value is the null atom.
    pub fn is_nil(&self) -> bool {
        self.value.is_null()
    }

    pub fn decode_bool(&self) -> Result<bool, MapError> {
        self.cast("bool", Atom::as_bool)
    }

    /// Decodes any signed-integer atom, including unsigned atoms whose
    /// value fits.
    pub fn decode_i64(&self) -> Result<i64, MapError> {
        self.cast("i64", Atom::as_i64)
    }

    /// Decodes any unsigned-integer atom, including signed atoms whose
    /// value fits.
    pub fn decode_u64(&self) -> Result<u64, MapError> {
        self.cast("u64", Atom::as_u64)
    }

    pub fn decode_f64(&self) -> Result<f64, MapError> {
        self.cast("f64", Atom::as_f64)
    }

    pub fn decode_char(&self) -> Result<char, MapError> {
        self.cast("char", Atom::as_char)
    }

    pub fn decode_str(&self) -> Result<&'a str, MapError> {
        self.cast("str", Atom::as_str)
    }

    fn atom(&self) -> Result<&'a Atom, MapError> {
        match self.value {
            Value::Leaf(atom) => Ok(atom),
            other => Err(MapError::type_mismatch(
                self.path.clone(),
                ValueKind::Leaf,
                other.kind(),
            )),
        }
    }

    fn cast<T>(
        &self,
        to: &'static str,
        convert: impl FnOnce(&'a Atom) -> Option<T>,
    ) -> Result<T, MapError> {
        let atom = self.atom()?;
        convert(atom)
            .ok_or_else(|| MapError::invalid_cast(self.path.clone(), atom.kind(), to))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::de::DecodeContext;
    use crate::error::MapErrorKind;
    use crate::value::{Atom, AtomKind, Value, ValueKind};

    #[test]
    fn decodes_compatible_atoms() {
        let value = Value::Leaf(Atom::Int(42));
        let single = DecodeContext::root(&value).single_value();
        assert_eq!(single.decode_i64().unwrap(), 42);
        assert_eq!(single.decode_u64().unwrap(), 42);
    }

    #[test]
    fn incompatible_atom_is_invalid_cast() {
        let value = Value::Leaf(Atom::Str("42".into()));
        let single = DecodeContext::root(&value).single_value();

        let error = single.decode_i64().unwrap_err();
        assert!(matches!(
            error.kind(),
            MapErrorKind::InvalidCast {
                from: AtomKind::Str,
                to: "i64",
            }
        ));
    }

    #[test]
    fn non_leaf_is_type_mismatch() {
        let value = Value::Sequence(vec![]);
        let single = DecodeContext::root(&value).single_value();

        let error = single.decode_bool().unwrap_err();
        assert!(matches!(
            error.kind(),
            MapErrorKind::TypeMismatch {
                expected: ValueKind::Leaf,
                actual: ValueKind::Sequence,
            }
        ));
    }

    #[test]
    fn is_nil_only_for_the_null_atom() {
        let null = Value::NULL;
        assert!(DecodeContext::root(&null).single_value().is_nil());

        let zero = Value::Leaf(Atom::Int(0));
        assert!(!DecodeContext::root(&zero).single_value().is_nil());
    }
}
