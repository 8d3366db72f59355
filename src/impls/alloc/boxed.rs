use alloc::boxed::Box;

use crate::access::CodingPath;
use crate::de::DecodeContext;
use crate::error::MapError;
use crate::reflection::{FromReflect, Reflect};
use crate::value::Value;

impl<T: Reflect + ?Sized> Reflect for Box<T> {
    fn to_value(&self) -> Value {
        T::to_value(self)
    }
}

impl<T: FromReflect> FromReflect for Box<T> {
    fn from_reflect(ctx: &DecodeContext<'_>) -> Result<Self, MapError> {
        T::from_reflect(ctx).map(Box::new)
    }

    fn from_absent(path: CodingPath, key: &str) -> Result<Self, MapError> {
        T::from_absent(path, key).map(Box::new)
    }
}
