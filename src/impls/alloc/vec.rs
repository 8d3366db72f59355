use alloc::vec::Vec;

use crate::de::DecodeContext;
use crate::error::MapError;
use crate::reflection::{FromReflect, Reflect};
use crate::value::Value;

impl<T: Reflect> Reflect for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: FromReflect> FromReflect for Vec<T> {
    fn from_reflect(ctx: &DecodeContext<'_>) -> Result<Self, MapError> {
        let mut unkeyed = ctx.unkeyed();
        let mut elements = Vec::with_capacity(unkeyed.count());
        while !unkeyed.is_at_end() {
            elements.push(unkeyed.decode()?);
        }
        Ok(elements)
    }
}
