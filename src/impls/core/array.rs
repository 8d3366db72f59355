use alloc::vec::Vec;

use crate::de::DecodeContext;
use crate::error::MapError;
use crate::reflection::{FromReflect, Reflect};
use crate::value::Value;

impl<T: Reflect> Reflect for [T] {
    fn to_value(&self) -> Value {
        Value::Sequence(self.iter().map(Reflect::to_value).collect())
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: FromReflect, const N: usize> FromReflect for [T; N] {
    fn from_reflect(ctx: &DecodeContext<'_>) -> Result<Self, MapError> {
        let mut unkeyed = ctx.unkeyed();
        let mut elements = Vec::with_capacity(N);
        for _ in 0..N {
            elements.push(unkeyed.decode()?);
        }
        // Exactly N elements were decoded, so the conversion cannot fail.
        elements
            .try_into()
            .map_err(|_| MapError::index_out_of_range(ctx.coding_path().clone(), N, N))
    }
}

#[cfg(test)]
mod tests {
    use crate::de::DecodeContext;
    use crate::error::MapErrorKind;
    use crate::reflection::{FromReflect, Reflect};
    use crate::value::ValueKind;

    #[test]
    fn array_round_trip() {
        let value = [1_i64, 2, 3].to_value();
        assert_eq!(value.kind(), ValueKind::Sequence);
        let array = <[i64; 3]>::from_reflect(&DecodeContext::root(&value)).unwrap();
        assert_eq!(array, [1, 2, 3]);
    }

    #[test]
    fn short_source_reports_over_read() {
        let value = [1_i64].to_value();
        let error = <[i64; 2]>::from_reflect(&DecodeContext::root(&value)).unwrap_err();
        assert!(matches!(
            error.kind(),
            MapErrorKind::IndexOutOfRange { index: 1, count: 1 }
        ));
    }
}
