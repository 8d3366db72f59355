use crate::access::CodingPath;
use crate::de::DecodeContext;
use crate::error::MapError;

/// The target half of the mapping contract: "given a decoding context,
/// produce an instance of me".
///
/// The mapper never inspects a target type's structure directly; it only
/// responds to the container shapes the target requests from the context.
/// A struct-like target asks for a [keyed container](DecodeContext::keyed),
/// a sequence-like target for an [unkeyed one](DecodeContext::unkeyed), and
/// a primitive-like target for a
/// [single-value one](DecodeContext::single_value). This inversion of
/// control is what lets one driver serve records, sequences, and maps
/// uniformly.
///
/// Use [the derive macro](crate::derive::FromReflect) for structs with
/// named fields:
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
pub trait FromReflect: Sized {
    /// Builds `Self` from the reflected value behind `ctx`.
    fn from_reflect(ctx: &DecodeContext<'_>) -> Result<Self, MapError>;

    /// Resolves a keyed field whose label is absent from the source.
    ///
    /// Called by [`KeyedDecoder::decode`](crate::de::KeyedDecoder::decode)
    /// instead of [`from_reflect`](Self::from_reflect) when `contains` is
    /// false for the requested key. The default reports a missing field;
    /// `Option<T>` overrides it to produce `None`, which is how optional
    /// target fields absorb fields the source never had.
    #[track_caller]
    fn from_absent(path: CodingPath, key: &str) -> Result<Self, MapError> {
        Err(MapError::missing_field(path, key))
    }
}
