use crate::error::MapError;
use crate::reflection::{FromReflect, Reflect};

use super::DecodeContext;

/// Maps `source` onto a fresh `T` by structural correspondence.
///
/// The source is lowered once into its reflected representation, a root
/// context with an empty coding path is built over it, and `T`'s schema
/// drives the rest: it requests keyed, unkeyed, or single-value containers
/// and those consult the reflected value.
///
/// Mapping is pure and synchronous. Repeated calls on equal inputs yield
/// equal results, and a failed call returns the error without producing
/// any partial target. The mapper may be invoked concurrently from
/// multiple threads on disjoint inputs without coordination.
///
/// # Examples
///
/// ```
/// use automap::derive::{FromReflect, Reflect};
///
/// #[derive(Reflect)]
/// struct From { id: i64, str: String }
///
/// #[derive(FromReflect, Debug, PartialEq)]
/// struct To { id: i64, str: String }
///
/// let to: To = automap::map(&From { id: 1, str: "str".into() }).unwrap();
/// assert_eq!(to, To { id: 1, str: "str".into() });
/// ```
pub fn map<S, T>(source: &S) -> Result<T, MapError>
where
    S: Reflect + ?Sized,
    T: FromReflect,
{
    let value = source.to_value();
    T::from_reflect(&DecodeContext::root(&value))
}
