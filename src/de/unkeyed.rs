use alloc::borrow::Cow;

use crate::access::{CodingPath, PathSegment};
use crate::error::MapError;
use crate::reflection::FromReflect;
use crate::value::Value;

use super::{DecodeContext, KeyedDecoder};

// -----------------------------------------------------------------------------
// Backing

enum UnkeyedBacking<'a> {
    /// Elements of a source sequence. Shapes with no positional children
    /// use this variant with an empty slice.
    Elements(&'a [Value]),
    /// Field values of a source aggregate, traversed positionally with
    /// labels ignored.
    Fields(&'a [(Cow<'static, str>, Value)]),
}

impl<'a> UnkeyedBacking<'a> {
    fn len(&self) -> usize {
        match self {
            UnkeyedBacking::Elements(elements) => elements.len(),
            UnkeyedBacking::Fields(fields) => fields.len(),
        }
    }

    fn get(&self, index: usize) -> Option<&'a Value> {
        match self {
            UnkeyedBacking::Elements(elements) => elements.get(index),
            UnkeyedBacking::Fields(fields) => fields.get(index).map(|(_, value)| value),
        }
    }
}

// -----------------------------------------------------------------------------
// Unkeyed decoder

/// The unkeyed decoding container: positional access with a cursor.
///
/// Constructed from a [`Sequence`](Value::Sequence) (its elements) or an
/// [`Aggregate`](Value::Aggregate) (its field values in declaration order,
/// labels dropped). Any other source shape presents zero elements, so the
/// first read reports the over-read.
///
/// The cursor starts at zero and never decreases;
/// [`is_at_end`](Self::is_at_end) holds exactly when the cursor has
/// reached [`count`](Self::count).
pub struct UnkeyedDecoder<'a> {
    backing: UnkeyedBacking<'a>,
    path: CodingPath,
    cursor: usize,
}

impl<'a> UnkeyedDecoder<'a> {
    pub(super) fn new(ctx: &DecodeContext<'a>) -> Self {
        let backing = match ctx.value() {
            Value::Sequence(elements) => UnkeyedBacking::Elements(elements),
            Value::Aggregate(fields) => UnkeyedBacking::Fields(fields),
            _ => UnkeyedBacking::Elements(&[]),
        };
        Self {
            backing,
            path: ctx.coding_path().clone(),
            cursor: 0,
        }
    }

    /// Total element count, fixed at construction time.
    #[inline]
    pub fn count(&self) -> usize {
        self.backing.len()
    }

    /// The index the next decode will consume.
    #[inline]
    pub fn current_index(&self) -> usize {
        self.cursor
    }

    /// Whether every element has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.count()
    }

    /// Decodes the next element as `T` and advances the cursor.
    ///
    /// Reading past the end reports
    /// [`IndexOutOfRange`](crate::MapErrorKind::IndexOutOfRange).
    pub fn decode<T: FromReflect>(&mut self) -> Result<T, MapError> {
        let ctx = self.next_context()?;
        T::from_reflect(&ctx)
    }

    /// A keyed container over the next element; consumes the cursor like
    /// [`decode`](Self::decode).
    pub fn nested_keyed(&mut self) -> Result<KeyedDecoder<'a>, MapError> {
        Ok(self.next_context()?.keyed())
    }

    /// An unkeyed container over the next element; consumes the cursor
    /// like [`decode`](Self::decode).
    pub fn nested_unkeyed(&mut self) -> Result<UnkeyedDecoder<'a>, MapError> {
        Ok(self.next_context()?.unkeyed())
    }

    /// Always unsupported; class inheritance has no counterpart here.
    pub fn super_decoder(&self) -> Result<DecodeContext<'a>, MapError> {
        Err(MapError::unsupported(self.path.clone(), "super decoder"))
    }

    fn next_context(&mut self) -> Result<DecodeContext<'a>, MapError> {
        let index = self.cursor;
        let Some(value) = self.backing.get(index) else {
            return Err(MapError::index_out_of_range(
                self.path.clone(),
                index,
                self.count(),
            ));
        };
        self.cursor += 1;
        Ok(DecodeContext::new(
            value,
            self.path.child(PathSegment::index(index)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::de::DecodeContext;
    use crate::error::MapErrorKind;
    use crate::value::{Atom, Value};

    fn sequence() -> Value {
        Value::Sequence(vec![
            Value::Leaf(Atom::Int(1)),
            Value::Leaf(Atom::Int(2)),
            Value::Leaf(Atom::Int(3)),
        ])
    }

    #[test]
    fn cursor_walks_elements_in_order() {
        let value = sequence();
        let mut unkeyed = DecodeContext::root(&value).unkeyed();

        assert_eq!(unkeyed.count(), 3);
        assert!(!unkeyed.is_at_end());

        assert_eq!(unkeyed.decode::<i64>().unwrap(), 1);
        assert_eq!(unkeyed.current_index(), 1);
        assert_eq!(unkeyed.decode::<i64>().unwrap(), 2);
        assert_eq!(unkeyed.decode::<i64>().unwrap(), 3);
        assert!(unkeyed.is_at_end());
    }

    #[test]
    fn over_read_reports_index_out_of_range() {
        let value = Value::Sequence(vec![Value::Leaf(Atom::Int(1))]);
        let mut unkeyed = DecodeContext::root(&value).unkeyed();

        unkeyed.decode::<i64>().unwrap();
        let error = unkeyed.decode::<i64>().unwrap_err();
        assert!(matches!(
            error.kind(),
            MapErrorKind::IndexOutOfRange { index: 1, count: 1 }
        ));
    }

    #[test]
    fn aggregate_source_traverses_fields_positionally() {
        let value = Value::Aggregate(vec![
            ("a".into(), Value::Leaf(Atom::Int(10))),
            ("b".into(), Value::Leaf(Atom::Int(20))),
        ]);
        let mut unkeyed = DecodeContext::root(&value).unkeyed();

        assert_eq!(unkeyed.count(), 2);
        assert_eq!(unkeyed.decode::<i64>().unwrap(), 10);
        assert_eq!(unkeyed.decode::<i64>().unwrap(), 20);
    }

    #[test]
    fn leaf_source_presents_no_elements() {
        let value = Value::Leaf(Atom::Int(1));
        let mut unkeyed = DecodeContext::root(&value).unkeyed();

        assert_eq!(unkeyed.count(), 0);
        assert!(unkeyed.is_at_end());
        let error = unkeyed.decode::<i64>().unwrap_err();
        assert!(matches!(
            error.kind(),
            MapErrorKind::IndexOutOfRange { index: 0, count: 0 }
        ));
    }

    #[test]
    fn nested_keyed_consumes_cursor() {
        let value = Value::Sequence(vec![Value::Aggregate(vec![(
            "id".into(),
            Value::Leaf(Atom::Int(5)),
        )])]);
        let mut unkeyed = DecodeContext::root(&value).unkeyed();

        let keyed = unkeyed.nested_keyed().unwrap();
        assert_eq!(keyed.decode::<i64>("id").unwrap(), 5);
        assert!(unkeyed.is_at_end());
    }
}
