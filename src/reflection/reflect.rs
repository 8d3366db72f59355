use crate::value::Value;

/// The source half of the mapping contract: lowers a value into its
/// reflected representation.
///
/// The lowering happens exactly once per [`map`](crate::map) call, before
/// any decoding starts; after that the mapper only ever inspects the
/// resulting [`Value`]. This keeps the reflection surface in one place and
/// makes the decoding side fully static.
///
/// Implementations are provided for the primitive types, strings,
/// `Option<T>`, slices, arrays, `Vec<T>`, string-keyed maps, and
/// references. For your own structs, use
/// [the derive macro](crate::derive::Reflect):
///
/// ```
/// use automap::derive::Reflect;
/// use automap::value::ValueKind;
///
/// #[derive(Reflect)]
/// struct Account {
///     id: u64,
///     owner: String,
/// }
///
/// let account = Account { id: 1, owner: "ada".into() };
/// let value = automap::Reflect::to_value(&account);
/// assert_eq!(value.kind(), ValueKind::Aggregate);
/// ```
///
/// # Classification policy
///
/// First match wins: string-keyed maps lower to
/// [`Map`](Value::Map); ordered sequences to
/// [`Sequence`](Value::Sequence); structs with named fields to
/// [`Aggregate`](Value::Aggregate) in declaration order; everything else
/// is a [`Leaf`](Value::Leaf). `Option::None` lowers to the null leaf and
/// `Option::Some(v)` lowers as `v` itself.
///
/// Mutating a source between lowering and use is not a concern here: the
/// lowered representation is an owned snapshot.
pub trait Reflect {
    /// Lowers this value into its reflected representation.
    fn to_value(&self) -> Value;
}

// An already-lowered value reflects as itself, so hand-built
// representations can be mapped directly.
impl Reflect for Value {
    #[inline]
    fn to_value(&self) -> Value {
        self.clone()
    }
}
