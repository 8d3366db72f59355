use alloc::string::String;

use crate::de::DecodeContext;
use crate::error::MapError;
use crate::reflection::{FromReflect, Reflect};
use crate::value::{Atom, Value};

impl Reflect for bool {
    fn to_value(&self) -> Value {
        Value::Leaf(Atom::Bool(*self))
    }
}

impl FromReflect for bool {
    fn from_reflect(ctx: &DecodeContext<'_>) -> Result<Self, MapError> {
        ctx.single_value().decode_bool()
    }
}

impl Reflect for char {
    fn to_value(&self) -> Value {
        Value::Leaf(Atom::Char(*self))
    }
}

impl FromReflect for char {
    fn from_reflect(ctx: &DecodeContext<'_>) -> Result<Self, MapError> {
        ctx.single_value().decode_char()
    }
}

impl Reflect for str {
    fn to_value(&self) -> Value {
        Value::Leaf(Atom::Str(String::from(self)))
    }
}
