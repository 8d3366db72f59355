use crate::reflection::Reflect;
use crate::value::Value;

impl<T: Reflect + ?Sized> Reflect for &T {
    fn to_value(&self) -> Value {
        T::to_value(self)
    }
}

impl<T: Reflect + ?Sized> Reflect for &mut T {
    fn to_value(&self) -> Value {
        T::to_value(self)
    }
}
