use alloc::borrow::ToOwned;
use alloc::string::String;

use crate::de::DecodeContext;
use crate::error::MapError;
use crate::reflection::{FromReflect, Reflect};
use crate::value::{Atom, Value};

impl Reflect for String {
    fn to_value(&self) -> Value {
        Value::Leaf(Atom::Str(self.clone()))
    }
}

impl FromReflect for String {
    fn from_reflect(ctx: &DecodeContext<'_>) -> Result<Self, MapError> {
        ctx.single_value().decode_str().map(ToOwned::to_owned)
    }
}
