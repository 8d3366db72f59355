use crate::access::CodingPath;
use crate::value::Value;

use super::{KeyedDecoder, SingleValueDecoder, UnkeyedDecoder};

/// Pairs a reflected source value with a coding path.
///
/// Contexts are created by the driver (for the root) or by a parent
/// container (for children, with one path segment appended), are
/// read-only, and are dropped as soon as the target sub-value has been
/// constructed.
///
/// # Container selection
///
/// The context never fails to hand out a container; shape disagreements
/// surface lazily at the first decode instead, so that target schemas can
/// optimistically request a keyed container and probe it with
/// [`contains`](KeyedDecoder::contains):
///
/// - a keyed request on a map is map-backed; on anything else it is
///   aggregate-backed, and a non-aggregate source simply presents no keys;
/// - an unkeyed request walks a sequence's elements or an aggregate's
///   field values positionally; any other shape presents no elements, and
///   the first read reports the over-read;
/// - a single-value request wraps the value as-is.
#[derive(Debug)]
pub struct DecodeContext<'a> {
    value: &'a Value,
    path: CodingPath,
}

impl<'a> DecodeContext<'a> {
    /// Creates the root context over a lowered source value.
    #[inline]
    pub fn root(value: &'a Value) -> Self {
        Self {
            value,
            path: CodingPath::root(),
        }
    }

    pub(crate) fn new(value: &'a Value, path: CodingPath) -> Self {
        Self { value, path }
    }

    /// The reflected value this context decodes from.
    #[inline]
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// The position within the target schema this context stands for.
    #[inline]
    pub fn coding_path(&self) -> &CodingPath {
        &self.path
    }

    /// Requests a keyed view over the source value.
    #[inline]
    pub fn keyed(&self) -> KeyedDecoder<'a> {
        KeyedDecoder::new(self)
    }

    /// Requests a positional view over the source value.
    #[inline]
    pub fn unkeyed(&self) -> UnkeyedDecoder<'a> {
        UnkeyedDecoder::new(self)
    }

    /// Requests a leaf view over the source value.
    #[inline]
    pub fn single_value(&self) -> SingleValueDecoder<'a> {
        SingleValueDecoder::new(self)
    }
}
