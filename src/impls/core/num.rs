use crate::de::DecodeContext;
use crate::error::MapError;
use crate::reflection::{FromReflect, Reflect};
use crate::value::{Atom, AtomKind, Value};

// Integer widths are erased on lowering and restored with a checked
// narrowing on decoding; a value that does not fit the requested width
// reports `InvalidCast`.

macro_rules! impl_signed {
    ($($ty:ty),* $(,)?) => {$(
        impl Reflect for $ty {
            fn to_value(&self) -> Value {
                Value::Leaf(Atom::Int(*self as i64))
            }
        }

        impl FromReflect for $ty {
            fn from_reflect(ctx: &DecodeContext<'_>) -> Result<Self, MapError> {
                let wide = ctx.single_value().decode_i64()?;
                <$ty>::try_from(wide).map_err(|_| {
                    MapError::invalid_cast(
                        ctx.coding_path().clone(),
                        AtomKind::Int,
                        stringify!($ty),
                    )
                })
            }
        }
    )*};
}

macro_rules! impl_unsigned {
    ($($ty:ty),* $(,)?) => {$(
        impl Reflect for $ty {
            fn to_value(&self) -> Value {
                Value::Leaf(Atom::UInt(*self as u64))
            }
        }

        impl FromReflect for $ty {
            fn from_reflect(ctx: &DecodeContext<'_>) -> Result<Self, MapError> {
                let wide = ctx.single_value().decode_u64()?;
                <$ty>::try_from(wide).map_err(|_| {
                    MapError::invalid_cast(
                        ctx.coding_path().clone(),
                        AtomKind::UInt,
                        stringify!($ty),
                    )
                })
            }
        }
    )*};
}

impl_signed!(i8, i16, i32, isize);
impl_unsigned!(u8, u16, u32, usize);

impl Reflect for i64 {
    fn to_value(&self) -> Value {
        Value::Leaf(Atom::Int(*self))
    }
}

impl FromReflect for i64 {
    fn from_reflect(ctx: &DecodeContext<'_>) -> Result<Self, MapError> {
        ctx.single_value().decode_i64()
    }
}

impl Reflect for u64 {
    fn to_value(&self) -> Value {
        Value::Leaf(Atom::UInt(*self))
    }
}

impl FromReflect for u64 {
    fn from_reflect(ctx: &DecodeContext<'_>) -> Result<Self, MapError> {
        ctx.single_value().decode_u64()
    }
}

impl Reflect for f64 {
    fn to_value(&self) -> Value {
        Value::Leaf(Atom::Float(*self))
    }
}

impl FromReflect for f64 {
    fn from_reflect(ctx: &DecodeContext<'_>) -> Result<Self, MapError> {
        ctx.single_value().decode_f64()
    }
}

impl Reflect for f32 {
    fn to_value(&self) -> Value {
        Value::Leaf(Atom::Float(f64::from(*self)))
    }
}

impl FromReflect for f32 {
    fn from_reflect(ctx: &DecodeContext<'_>) -> Result<Self, MapError> {
        Ok(ctx.single_value().decode_f64()? as f32)
    }
}

#[cfg(test)]
mod tests {
    use crate::de::DecodeContext;
    use crate::error::MapErrorKind;
    use crate::reflection::{FromReflect, Reflect};
    use crate::value::{Atom, AtomKind, Value};

    #[test]
    fn widths_are_erased_on_lowering() {
        assert_eq!(1_i8.to_value(), Value::Leaf(Atom::Int(1)));
        assert_eq!(1_i64.to_value(), Value::Leaf(Atom::Int(1)));
        assert_eq!(1_u8.to_value(), Value::Leaf(Atom::UInt(1)));
        assert_eq!(1_usize.to_value(), Value::Leaf(Atom::UInt(1)));
    }

    #[test]
    fn checked_narrowing() {
        let fits = Value::Leaf(Atom::Int(300));
        assert_eq!(i16::from_reflect(&DecodeContext::root(&fits)).unwrap(), 300);

        let error = i8::from_reflect(&DecodeContext::root(&fits)).unwrap_err();
        assert!(matches!(
            error.kind(),
            MapErrorKind::InvalidCast {
                from: AtomKind::Int,
                to: "i8",
            }
        ));
    }

    #[test]
    fn signedness_converts_when_the_value_fits() {
        let positive = Value::Leaf(Atom::UInt(7));
        assert_eq!(i64::from_reflect(&DecodeContext::root(&positive)).unwrap(), 7);

        let negative = Value::Leaf(Atom::Int(-1));
        let error = u64::from_reflect(&DecodeContext::root(&negative)).unwrap_err();
        assert!(matches!(error.kind(), MapErrorKind::InvalidCast { .. }));
    }

    #[test]
    fn floats_do_not_coerce_from_integers() {
        let value = Value::Leaf(Atom::Int(1));
        let error = f64::from_reflect(&DecodeContext::root(&value)).unwrap_err();
        assert!(matches!(
            error.kind(),
            MapErrorKind::InvalidCast {
                from: AtomKind::Int,
                to: "f64",
            }
        ));
    }
}
